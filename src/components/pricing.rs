use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::PricingTier;

#[derive(Properties, PartialEq)]
struct PricingCardProps {
    tier: PricingTier,
    featured_tag: &'static str,
    on_book: Callback<MouseEvent>,
}

#[function_component(PricingCard)]
fn pricing_card(props: &PricingCardProps) -> Html {
    let tier = props.tier;

    html! {
        <div class={classes!("pricing-card", tier.is_featured.then(|| "featured"))}>
            {
                if tier.is_featured {
                    html! { <div class="popular-tag">{props.featured_tag}</div> }
                } else {
                    html! {}
                }
            }
            <div class="card-header">
                <h3>{tier.name}</h3>
                <div class="price">
                    <span class="amount">{format!("${}", tier.price_units)}</span>
                    <span class="duration">{tier.duration_label}</span>
                </div>
            </div>
            <p class="card-description">{tier.description}</p>
            <ul class="feature-list">
                { for tier.features.iter().map(|feature| html! {
                    <li key={*feature}>
                        <span class="check">{"\u{2713}"}</span>
                        {*feature}
                    </li>
                }) }
            </ul>
            <button class="book-button" onclick={props.on_book.clone()}>
                {tier.cta_label}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingSectionProps {
    pub heading: &'static str,
    #[prop_or_default]
    pub intro: Option<&'static str>,
    pub featured_tag: &'static str,
    pub tiers: &'static [PricingTier],
    pub on_book: Callback<MouseEvent>,
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &PricingSectionProps) -> Html {
    html! {
        <section class="pricing-section">
            <h2>{props.heading}</h2>
            {
                if let Some(intro) = props.intro {
                    html! { <p class="section-intro">{intro}</p> }
                } else {
                    html! {}
                }
            }
            <div class="pricing-grid">
                { for props.tiers.iter().map(|tier| html! {
                    <PricingCard
                        key={tier.name}
                        tier={*tier}
                        featured_tag={props.featured_tag}
                        on_book={props.on_book.clone()}
                    />
                }) }
            </div>
        </section>
    }
}
