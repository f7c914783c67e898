use chrono::{Datelike, Utc};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{AvatarRef, FooterCta, StaffProfile, Step, Testimonial, BRAND, FLAME};
use crate::state::Theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    html! {
        <button class="theme-toggle" onclick={props.on_toggle.clone()}>
            {props.theme.toggle_icon()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub headline: &'static str,
    pub lead: &'static str,
    pub cta_label: &'static str,
    pub tagline: &'static str,
    pub on_book: Callback<MouseEvent>,
    #[prop_or_default]
    pub theme: Option<Theme>,
    #[prop_or_default]
    pub on_toggle_theme: Option<Callback<MouseEvent>>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <header class="hero">
            <div class="hero-backdrop"></div>
            {
                if let (Some(theme), Some(on_toggle)) =
                    (props.theme, props.on_toggle_theme.clone())
                {
                    html! {
                        <div class="hero-topbar">
                            <ThemeToggle theme={theme} on_toggle={on_toggle} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="hero-content">
                <h1>{props.headline}</h1>
                <p class="hero-lead">{props.lead}</p>
                <button class="hero-cta" onclick={props.on_book.clone()}>
                    {props.cta_label}
                </button>
                <p class="hero-tagline">{props.tagline}</p>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct HowItWorksProps {
    pub heading: &'static str,
    #[prop_or_default]
    pub intro: Option<&'static str>,
    pub steps: &'static [Step],
}

#[function_component(HowItWorks)]
pub fn how_it_works(props: &HowItWorksProps) -> Html {
    html! {
        <section class="how-it-works">
            <h2>{props.heading}</h2>
            {
                if let Some(intro) = props.intro {
                    html! { <p class="section-intro">{intro}</p> }
                } else {
                    html! {}
                }
            }
            <div class="steps-grid">
                { for props.steps.iter().map(|step| html! {
                    <div class="step" key={step.title}>
                        <div class="step-icon">{step.icon}</div>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaffSectionProps {
    pub heading: &'static str,
    #[prop_or_default]
    pub intro: Option<&'static str>,
    pub staff: &'static [StaffProfile],
}

fn staff_avatar(profile: &StaffProfile) -> Html {
    match profile.avatar {
        AvatarRef::Color(token) => html! {
            <div class="staff-avatar swatch" style={format!("background-color: {};", token)}></div>
        },
        AvatarRef::Url(url) => html! {
            <img class="staff-avatar" src={url} alt={profile.name} loading="lazy" />
        },
    }
}

#[function_component(StaffSection)]
pub fn staff_section(props: &StaffSectionProps) -> Html {
    html! {
        <section class="staff-section">
            <h2>{props.heading}</h2>
            {
                if let Some(intro) = props.intro {
                    html! { <p class="section-intro">{intro}</p> }
                } else {
                    html! {}
                }
            }
            <div class="staff-grid">
                { for props.staff.iter().map(|profile| html! {
                    <div class="staff-card" key={profile.name}>
                        <div class="staff-header">
                            { staff_avatar(profile) }
                            <div>
                                <h3>{profile.name}</h3>
                                <p class="staff-title">{profile.title}</p>
                            </div>
                        </div>
                        <p class="staff-bio">{format!("\u{201C}{}\u{201D}", profile.bio)}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsSectionProps {
    pub heading: &'static str,
    pub testimonials: &'static [Testimonial],
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section(props: &TestimonialsSectionProps) -> Html {
    html! {
        <section class="testimonials">
            <h2>{props.heading}</h2>
            <div class="testimonials-grid">
                { for props.testimonials.iter().map(|testimonial| html! {
                    <div class="testimonial-card" key={testimonial.author}>
                        <div class="stars">{"\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}"}</div>
                        <div class="testimonial-content">
                            <p>{format!("\u{201C}{}\u{201D}", testimonial.quote)}</p>
                        </div>
                        <div class="testimonial-author">
                            <span class="author-name">{testimonial.author}</span>
                            <span class="author-location">{testimonial.location}</span>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterCtaSectionProps {
    pub cta: FooterCta,
    pub on_book: Callback<MouseEvent>,
}

#[function_component(FooterCtaSection)]
pub fn footer_cta_section(props: &FooterCtaSectionProps) -> Html {
    html! {
        <section class="footer-cta">
            <h2>{props.cta.heading}</h2>
            <p class="section-intro">{props.cta.lead}</p>
            <button class="hero-cta" onclick={props.on_book.clone()}>
                {props.cta.cta_label}
            </button>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    pub tagline: &'static str,
    pub note: &'static str,
    pub links: &'static [&'static str],
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteFooterProps) -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <span class="brand-flame">{FLAME}</span>
                {BRAND}
            </div>
            <p class="footer-tagline">{props.tagline}</p>
            <p class="footer-note">{format!("\u{00A9} {} {}", year, props.note)}</p>
            {
                if props.links.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="footer-links">
                            { for props.links.iter().map(|link| html! {
                                <a href="#" key={*link}>{*link}</a>
                            }) }
                        </div>
                    }
                }
            }
        </footer>
    }
}
