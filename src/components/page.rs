use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::faq::FaqSection;
use crate::components::modal::BookingModal;
use crate::components::pricing::PricingSection;
use crate::components::sections::{
    FooterCtaSection, Hero, HowItWorks, SiteFooter, StaffSection, TestimonialsSection,
};
use crate::content::PageContent;
use crate::state::{ModalState, Theme};

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    pub content: PageContent,
}

/// Shared rendering pipeline for every landing variant. The variants
/// differ only in the [`PageContent`] record they pass in; section
/// order, state handling, and markup live here once.
///
/// The page owns the booking-modal and theme state. Theme is always
/// tracked but only rendered (toggle button and wrapper class) on
/// variants that opt in via `has_theme_toggle`.
#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let content = props.content;
    let modal = use_state(ModalState::default);
    let theme = use_state(Theme::default);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_modal = {
        let modal = modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            modal.set(modal.opened());
        })
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| {
            modal.set(modal.dismissed());
        })
    };

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            theme.set(theme.toggled());
        })
    };

    let theme_class = content.has_theme_toggle.then(|| theme.class());

    html! {
        <div class={classes!("landing-page", content.slug, theme_class)}>
            <Hero
                headline={content.hero_headline}
                lead={content.hero_lead}
                cta_label={content.hero_cta}
                tagline={content.hero_tagline}
                on_book={open_modal.clone()}
                theme={content.has_theme_toggle.then(|| *theme)}
                on_toggle_theme={content.has_theme_toggle.then(|| toggle_theme)}
            />
            <HowItWorks
                heading={content.steps_heading}
                intro={content.steps_intro}
                steps={content.steps}
            />
            <PricingSection
                heading={content.pricing_heading}
                intro={content.pricing_intro}
                featured_tag={content.featured_tag}
                tiers={content.tiers}
                on_book={open_modal.clone()}
            />
            <StaffSection
                heading={content.staff_heading}
                intro={content.staff_intro}
                staff={content.staff}
            />
            <TestimonialsSection
                heading={content.testimonials_heading}
                testimonials={content.testimonials}
            />
            <FaqSection
                heading={content.faq_heading}
                entries={content.faqs}
                initial_open={content.initial_faq_open}
            />
            {
                if let Some(cta) = content.footer_cta {
                    html! { <FooterCtaSection cta={cta} on_book={open_modal} /> }
                } else {
                    html! {}
                }
            }
            <SiteFooter
                tagline={content.footer_tagline}
                note={content.footer_note}
                links={content.footer_links}
            />
            {
                if modal.is_visible() {
                    html! { <BookingModal on_close={close_modal} /> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    body {
                        margin: 0;
                    }

                    .landing-page {
                        min-height: 100vh;
                        padding-top: 64px;
                        font-family: system-ui, -apple-system, sans-serif;
                        line-height: 1.6;
                        transition: background 0.3s ease, color 0.3s ease;
                    }

                    .landing-page section {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 5rem 2rem;
                    }

                    .landing-page h2 {
                        font-size: 2.2rem;
                        text-align: center;
                        margin: 0 0 1rem 0;
                    }

                    .section-intro {
                        text-align: center;
                        max-width: 650px;
                        margin: 0 auto 3rem auto;
                        font-size: 1.1rem;
                        opacity: 0.85;
                    }

                    /* Hero */
                    .hero {
                        position: relative;
                        overflow: hidden;
                        padding: 4rem 2rem 6rem 2rem;
                        text-align: center;
                    }

                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }

                    .hero-topbar {
                        position: relative;
                        display: flex;
                        justify-content: flex-end;
                        max-width: 1100px;
                        margin: 0 auto 2rem auto;
                    }

                    .brand-flame {
                        margin-right: 0.4rem;
                    }

                    .theme-toggle {
                        background: transparent;
                        border: 1px solid currentColor;
                        border-radius: 50%;
                        width: 42px;
                        height: 42px;
                        font-size: 1.2rem;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }

                    .theme-toggle:hover {
                        transform: scale(1.1);
                    }

                    .hero-content {
                        position: relative;
                        max-width: 750px;
                        margin: 0 auto;
                    }

                    .hero h1 {
                        font-size: 3.4rem;
                        line-height: 1.1;
                        margin: 0 0 1.5rem 0;
                        letter-spacing: -0.03em;
                    }

                    .hero-lead {
                        font-size: 1.25rem;
                        margin: 0 auto 2.5rem auto;
                        max-width: 600px;
                        opacity: 0.9;
                    }

                    .hero-cta {
                        border: none;
                        border-radius: 9999px;
                        padding: 1rem 2.5rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .hero-cta:hover {
                        transform: translateY(-2px);
                    }

                    .hero-tagline {
                        margin-top: 1.5rem;
                        font-size: 0.9rem;
                        font-style: italic;
                        opacity: 0.7;
                    }

                    /* How it works */
                    .steps-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        margin-top: 3rem;
                    }

                    .step {
                        text-align: center;
                        padding: 2rem 1.5rem;
                        border-radius: 12px;
                    }

                    .step-icon {
                        font-size: 2.5rem;
                        width: 80px;
                        height: 80px;
                        line-height: 80px;
                        border-radius: 50%;
                        margin: 0 auto 1.5rem auto;
                    }

                    .step h3 {
                        font-size: 1.25rem;
                        margin: 0 0 0.75rem 0;
                    }

                    .step p {
                        margin: 0;
                        opacity: 0.85;
                    }

                    /* Pricing */
                    .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        margin-top: 3rem;
                        align-items: stretch;
                    }

                    .pricing-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        padding: 2.5rem 2rem;
                        border-radius: 16px;
                        border: 1px solid transparent;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }

                    .pricing-card:hover {
                        transform: translateY(-5px);
                    }

                    .popular-tag {
                        position: absolute;
                        top: -14px;
                        left: 50%;
                        transform: translateX(-50%);
                        padding: 0.3rem 1.2rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.08em;
                        text-transform: uppercase;
                        white-space: nowrap;
                    }

                    .card-header h3 {
                        font-size: 1.4rem;
                        margin: 0 0 1rem 0;
                        text-align: center;
                    }

                    .price {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        margin-bottom: 1.25rem;
                    }

                    .price .amount {
                        font-size: 2.8rem;
                        font-weight: 800;
                    }

                    .price .duration {
                        font-size: 0.9rem;
                        opacity: 0.75;
                    }

                    .card-description {
                        text-align: center;
                        margin: 0 0 1.5rem 0;
                        opacity: 0.85;
                    }

                    .feature-list {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 2rem 0;
                        flex-grow: 1;
                    }

                    .feature-list li {
                        display: flex;
                        align-items: baseline;
                        gap: 0.6rem;
                        padding: 0.4rem 0;
                    }

                    .feature-list .check {
                        font-weight: 700;
                    }

                    .book-button {
                        border: none;
                        border-radius: 8px;
                        padding: 0.9rem 1rem;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }

                    /* Staff */
                    .staff-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        margin-top: 3rem;
                    }

                    .staff-card {
                        padding: 2rem;
                        border-radius: 16px;
                    }

                    .staff-header {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1.25rem;
                    }

                    .staff-avatar {
                        width: 64px;
                        height: 64px;
                        border-radius: 50%;
                        object-fit: cover;
                        flex-shrink: 0;
                    }

                    .staff-card h3 {
                        margin: 0;
                        font-size: 1.2rem;
                    }

                    .staff-title {
                        margin: 0.2rem 0 0 0;
                        font-size: 0.9rem;
                        font-weight: 600;
                    }

                    .staff-bio {
                        margin: 0;
                        font-size: 0.95rem;
                        font-style: italic;
                        opacity: 0.85;
                    }

                    /* Testimonials */
                    .testimonials-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        margin-top: 3rem;
                    }

                    .testimonial-card {
                        padding: 2rem;
                        border-radius: 16px;
                    }

                    .stars {
                        letter-spacing: 0.15em;
                        margin-bottom: 1rem;
                    }

                    .testimonial-content p {
                        margin: 0 0 1.5rem 0;
                        font-style: italic;
                    }

                    .testimonial-author {
                        display: flex;
                        flex-direction: column;
                    }

                    .author-name {
                        font-weight: 700;
                    }

                    .author-location {
                        font-size: 0.85rem;
                        opacity: 0.7;
                    }

                    /* FAQ */
                    .faq-list {
                        max-width: 750px;
                        margin: 3rem auto 0 auto;
                    }

                    .faq-item {
                        border-radius: 10px;
                        margin-bottom: 1rem;
                        overflow: hidden;
                    }

                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.25rem 1.5rem;
                        background: transparent;
                        border: none;
                        font-size: 1.05rem;
                        font-weight: 600;
                        text-align: left;
                        cursor: pointer;
                        color: inherit;
                    }

                    .toggle-icon {
                        font-size: 1.4rem;
                        line-height: 1;
                        transition: transform 0.3s ease;
                    }

                    .faq-item.open .toggle-icon {
                        transform: rotate(180deg);
                    }

                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease, padding 0.3s ease;
                        padding: 0 1.5rem;
                    }

                    .faq-item.open .faq-answer {
                        max-height: 300px;
                        padding: 0 1.5rem 1.25rem 1.5rem;
                    }

                    .faq-answer p {
                        margin: 0;
                        opacity: 0.9;
                    }

                    /* Footer CTA */
                    .footer-cta {
                        text-align: center;
                    }

                    .footer-cta .section-intro {
                        margin-bottom: 2rem;
                    }

                    /* Footer */
                    .site-footer {
                        text-align: center;
                        padding: 3rem 2rem 4rem 2rem;
                    }

                    .footer-brand {
                        font-size: 1.3rem;
                        font-weight: 700;
                        margin-bottom: 0.75rem;
                    }

                    .footer-tagline {
                        margin: 0 0 0.5rem 0;
                        font-style: italic;
                        opacity: 0.8;
                    }

                    .footer-note {
                        margin: 0;
                        font-size: 0.85rem;
                        opacity: 0.6;
                    }

                    .footer-links {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-top: 1.25rem;
                    }

                    .footer-links a {
                        color: inherit;
                        font-size: 0.9rem;
                        text-decoration: none;
                        opacity: 0.7;
                        transition: opacity 0.2s ease;
                    }

                    .footer-links a:hover {
                        opacity: 1;
                    }

                    /* Booking modal */
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        z-index: 1000;
                        padding: 1.5rem;
                        animation: fadeIn 0.2s ease-out;
                    }

                    .modal-content {
                        position: relative;
                        background: #ffffff;
                        color: #1f2937;
                        border-radius: 16px;
                        padding: 3rem 2.5rem 2.5rem 2.5rem;
                        max-width: 420px;
                        width: 100%;
                        text-align: center;
                        box-shadow: 0 20px 50px rgba(0, 0, 0, 0.3);
                        animation: riseIn 0.25s ease-out;
                    }

                    .modal-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        font-size: 1.6rem;
                        cursor: pointer;
                        color: #9ca3af;
                    }

                    .modal-close:hover {
                        color: #1f2937;
                    }

                    .modal-flame {
                        width: 64px;
                        height: 64px;
                        line-height: 64px;
                        margin: 0 auto 1rem auto;
                        border-radius: 50%;
                        background: #dcfce7;
                        font-size: 2rem;
                    }

                    .modal-content h2 {
                        font-size: 1.6rem;
                        margin: 0 0 1rem 0;
                    }

                    .modal-copy {
                        margin: 0 0 1.75rem 0;
                        color: #4b5563;
                    }

                    .modal-confirm {
                        border: none;
                        border-radius: 9999px;
                        padding: 0.8rem 2.2rem;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        background: #ea580c;
                        color: #ffffff;
                        transition: background 0.2s ease;
                    }

                    .modal-confirm:hover {
                        background: #c2410c;
                    }

                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }

                    @keyframes riseIn {
                        from {
                            opacity: 0;
                            transform: translateY(16px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }

                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.4rem;
                        }

                        .landing-page section {
                            padding: 3.5rem 1.25rem;
                        }

                        .steps-grid,
                        .pricing-grid,
                        .staff-grid {
                            grid-template-columns: 1fr;
                        }

                        .pricing-card.featured {
                            order: -1;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
