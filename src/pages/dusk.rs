use yew::prelude::*;

use crate::components::page::LandingPage;
use crate::content::{
    AvatarRef, FaqEntry, FooterCta, PageContent, PricingTier, StaffProfile, Step, Testimonial,
};

const STEPS: &[Step] = &[
    Step {
        icon: "\u{1F4C5}",
        title: "Schedule Your Spark",
        description: "Choose a date and time that works for you. Select your preferred fire \
                      experience.",
    },
    Step {
        icon: "\u{1FAB5}",
        title: "A LogBuddy Arrives",
        description: "Your certified LogBuddy arrives with premium, locally-sourced firewood and \
                      all the necessary tools.",
    },
    Step {
        icon: "\u{1F525}",
        title: "Relax and Enjoy",
        description: "We handle everything from setup to a spotless cleanup. All you have to do \
                      is enjoy the glow.",
    },
];

const TIERS: &[PricingTier] = &[
    PricingTier {
        name: "The Quick Spark",
        price_units: 75,
        duration_label: "~1 Hour Fire",
        description: "Perfect for a quick dose of cozy after a long day.",
        features: &["Standard Hardwood Mix", "Expert Setup", "Basic Cleanup"],
        cta_label: "Book Now",
        is_featured: false,
    },
    PricingTier {
        name: "The Evening Glow",
        price_units: 125,
        duration_label: "~3 Hour Fire",
        description: "Ideal for movie nights, dinner parties, or entertaining guests.",
        features: &["Premium Oak or Birch", "Slow-Burning Technique", "Full Hearth Cleanup"],
        cta_label: "Book Now",
        is_featured: true,
    },
    PricingTier {
        name: "The Hearth Connoisseur",
        price_units: 195,
        duration_label: "4+ Hour Fire",
        description: "The ultimate experience for true fire lovers.",
        features: &[
            "Choice of Aromatic Wood (Apple/Cherry)",
            "Complimentary S'mores Kit",
            "Fire Management Lesson",
            "Immaculate Cleanup",
        ],
        cta_label: "Book Now",
        is_featured: false,
    },
];

const STAFF: &[StaffProfile] = &[
    StaffProfile {
        name: "Brendan",
        title: "The Hearth Whisperer",
        bio: "With a degree in 'Applied Thermodynamics' from the University of Life, Brendan \
              believes that every fire tells a story. He specializes in the 'top-down' burn \
              method.",
        avatar: AvatarRef::Url(
            "https://ui-avatars.com/api/?name=Brendan&background=c2410c&color=fff&size=128",
        ),
    },
    StaffProfile {
        name: "Chloe",
        title: "The Flame Artist",
        bio: "Chloe sees every fireplace as a blank canvas. Her expertise is in creating fires \
              that not only warm the room but also create the perfect ambiance for any occasion.",
        avatar: AvatarRef::Url(
            "https://ui-avatars.com/api/?name=Chloe&background=b45309&color=fff&size=128",
        ),
    },
    StaffProfile {
        name: "Marcus",
        title: "The Kindling King",
        bio: "Marcus can get a fire started in any condition, guaranteed. His secret is his \
              proprietary blend of all-natural kindling and an unwavering positive attitude.",
        avatar: AvatarRef::Url(
            "https://ui-avatars.com/api/?name=Marcus&background=9a3412&color=fff&size=128",
        ),
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I used to think my fireplace was just a decorative hole in the wall. LogBuddy \
                changed everything. 10/10.",
        author: "Sarah K.",
        location: "West Village",
    },
    Testimonial {
        quote: "The cleanup was immaculate. My hearth has never looked better. Worth every penny \
                for the 'Evening Glow' package.",
        author: "David L.",
        location: "The Suburbs",
    },
    Testimonial {
        quote: "We booked LogBuddy for our anniversary. It was the most romantic evening we've \
                had in years. No smoke, no mess, just pure cozy vibes.",
        author: "The Millers",
        location: "Downtown Loft",
    },
];

const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Is it safe?",
        answer: "Absolutely. All LogBuddies are insured and rigorously trained in fire safety, \
                 chimney assessment, and proper ventilation techniques to ensure a safe and \
                 enjoyable experience.",
    },
    FaqEntry {
        question: "Do I need to provide anything?",
        answer: "Nope! We bring the wood, the kindling, the matches, and the magic. All you need \
                 is a functional, well-maintained fireplace and chimney.",
    },
    FaqEntry {
        question: "What about the mess?",
        answer: "We guarantee a no-mess experience. Our LogBuddies use protective coverings and \
                 perform a thorough cleanup after the fire has been extinguished, leaving your \
                 hearth spotless.",
    },
    FaqEntry {
        question: "Can I request a specific LogBuddy?",
        answer: "You sure can! If you loved your experience with Brendan, Chloe, or Marcus, you \
                 can request them in the booking notes. We'll do our best to accommodate.",
    },
    FaqEntry {
        question: "Can I book a LogBuddy for an outdoor fire pit?",
        answer: "Currently, our services are tailored for indoor wood-burning fireplaces. We are \
                 exploring options for outdoor fire pits and hope to offer this service in the \
                 future!",
    },
];

/// Dusk variant: the only page with the light/dark toggle. Palette
/// lives in the `theme-light` and `theme-dark` rules below; everything
/// swaps in one class change on the page root.
pub const CONTENT: PageContent = PageContent {
    slug: "dusk",
    hero_headline: "A Perfect Fire. Every Time.",
    hero_lead: "Book a certified LogBuddy to expertly build a beautiful, long-lasting fire in \
                your home's fireplace.",
    hero_cta: "Book Your Fire",
    hero_tagline: "LogBuddy: The Warmth You Want. The Work You Don't.",
    steps_heading: "How It Works",
    steps_intro: Some("Three simple steps between you and a crackling fire."),
    steps: STEPS,
    pricing_heading: "Our Fire Experiences",
    pricing_intro: Some(
        "Same great fires, day or night. Every booking includes expert setup and a spotless \
         cleanup.",
    ),
    featured_tag: "Most Popular",
    tiers: TIERS,
    staff_heading: "Meet the LogBuddies",
    staff_intro: Some("Our certified professionals are passionate about the perfect flame."),
    staff: STAFF,
    testimonials_heading: "What Our Clients Are Saying",
    testimonials: TESTIMONIALS,
    faq_heading: "Frequently Asked Questions",
    faqs: FAQS,
    initial_faq_open: Some(0),
    footer_cta: Some(FooterCta {
        heading: "Ready for the Perfect Evening?",
        lead: "Stop staring at that cold, empty fireplace. Let LogBuddy bring the warmth.",
        cta_label: "Book Your Fire Now",
    }),
    footer_tagline: "The Warmth You Want. The Work You Don't.",
    footer_note: "LogBuddy Inc. All Rights Reserved.",
    footer_links: &["Privacy", "Terms"],
    has_theme_toggle: true,
};

#[function_component(Dusk)]
pub fn dusk() -> Html {
    html! {
        <>
            <LandingPage content={CONTENT} />
            <style>
                {r#"
                    /* Day palette */
                    .dusk.theme-light {
                        background: #fffbf5;
                        color: #431407;
                    }

                    .dusk.theme-light h1,
                    .dusk.theme-light h2 {
                        color: #431407;
                    }

                    .dusk.theme-light .hero-backdrop {
                        background: linear-gradient(
                            180deg,
                            #ffedd5 0%,
                            #fed7aa 60%,
                            #fffbf5 100%
                        );
                    }

                    .dusk.theme-light .hero-cta {
                        background: #ea580c;
                        color: #ffffff;
                        box-shadow: 0 10px 25px rgba(234, 88, 12, 0.35);
                    }

                    .dusk.theme-light .hero-cta:hover {
                        background: #c2410c;
                    }

                    .dusk.theme-light .hero-tagline {
                        color: #9a3412;
                    }

                    .dusk.theme-light .theme-toggle {
                        color: #431407;
                        background: rgba(255, 255, 255, 0.6);
                    }

                    .dusk.theme-light .step {
                        background: #ffffff;
                        border: 1px solid #fed7aa;
                    }

                    .dusk.theme-light .step-icon {
                        background: #ffedd5;
                    }

                    .dusk.theme-light .pricing-card {
                        background: #ffffff;
                        border: 1px solid #fed7aa;
                        box-shadow: 0 8px 20px rgba(154, 52, 18, 0.08);
                    }

                    .dusk.theme-light .pricing-card.featured {
                        border: 3px solid #ea580c;
                    }

                    .dusk.theme-light .popular-tag {
                        background: #ea580c;
                        color: #ffffff;
                    }

                    .dusk.theme-light .price .amount {
                        color: #c2410c;
                    }

                    .dusk.theme-light .feature-list .check {
                        color: #ea580c;
                    }

                    .dusk.theme-light .book-button {
                        background: #431407;
                        color: #ffedd5;
                    }

                    .dusk.theme-light .book-button:hover {
                        background: #7c2d12;
                    }

                    .dusk.theme-light .pricing-card.featured .book-button {
                        background: #ea580c;
                        color: #ffffff;
                    }

                    .dusk.theme-light .staff-card {
                        background: #ffffff;
                        border: 1px solid #fed7aa;
                    }

                    .dusk.theme-light .staff-title {
                        color: #c2410c;
                    }

                    .dusk.theme-light .testimonial-card {
                        background: #ffedd5;
                    }

                    .dusk.theme-light .stars {
                        color: #d97706;
                    }

                    .dusk.theme-light .faq-item {
                        background: #ffffff;
                        border: 1px solid #fed7aa;
                    }

                    .dusk.theme-light .toggle-icon {
                        color: #ea580c;
                    }

                    .dusk.theme-light .footer-cta {
                        border-top: 1px solid #fed7aa;
                    }

                    .dusk.theme-light .site-footer {
                        background: #431407;
                        color: #fed7aa;
                    }

                    .dusk.theme-light .footer-brand {
                        color: #ffffff;
                    }

                    .dusk.theme-light .footer-links a:hover {
                        color: #fdba74;
                    }

                    /* Night palette */
                    .dusk.theme-dark {
                        background: #0c0a09;
                        color: #e7e5e4;
                    }

                    .dusk.theme-dark h1,
                    .dusk.theme-dark h2 {
                        color: #fafaf9;
                    }

                    .dusk.theme-dark .hero-backdrop {
                        background: radial-gradient(
                            circle at 50% 85%,
                            rgba(249, 115, 22, 0.25) 0%,
                            rgba(12, 10, 9, 0.95) 65%
                        );
                    }

                    .dusk.theme-dark .hero-cta {
                        background: #f97316;
                        color: #1c1917;
                        box-shadow: 0 10px 30px rgba(249, 115, 22, 0.35);
                    }

                    .dusk.theme-dark .hero-cta:hover {
                        background: #fb923c;
                    }

                    .dusk.theme-dark .hero-tagline {
                        color: #fdba74;
                    }

                    .dusk.theme-dark .theme-toggle {
                        color: #fafaf9;
                        background: rgba(28, 25, 23, 0.6);
                    }

                    .dusk.theme-dark .step {
                        background: #1c1917;
                        border: 1px solid #292524;
                    }

                    .dusk.theme-dark .step-icon {
                        background: #292524;
                        border: 2px solid rgba(249, 115, 22, 0.4);
                    }

                    .dusk.theme-dark .pricing-card {
                        background: #1c1917;
                        border: 1px solid #292524;
                    }

                    .dusk.theme-dark .pricing-card.featured {
                        border: 3px solid #f97316;
                        background: #292524;
                    }

                    .dusk.theme-dark .popular-tag {
                        background: #f97316;
                        color: #1c1917;
                    }

                    .dusk.theme-dark .price .amount {
                        color: #fdba74;
                    }

                    .dusk.theme-dark .feature-list .check {
                        color: #fb923c;
                    }

                    .dusk.theme-dark .book-button {
                        background: #292524;
                        color: #fafaf9;
                    }

                    .dusk.theme-dark .book-button:hover {
                        background: #44403c;
                    }

                    .dusk.theme-dark .pricing-card.featured .book-button {
                        background: #f97316;
                        color: #1c1917;
                    }

                    .dusk.theme-dark .staff-card {
                        background: #1c1917;
                        border: 1px solid #292524;
                    }

                    .dusk.theme-dark .staff-title {
                        color: #fb923c;
                    }

                    .dusk.theme-dark .testimonial-card {
                        background: #1c1917;
                        border: 1px solid #292524;
                    }

                    .dusk.theme-dark .stars {
                        color: #fbbf24;
                    }

                    .dusk.theme-dark .faq-item {
                        background: #1c1917;
                        border: 1px solid #292524;
                    }

                    .dusk.theme-dark .toggle-icon {
                        color: #f97316;
                    }

                    .dusk.theme-dark .footer-cta {
                        border-top: 1px solid #292524;
                    }

                    .dusk.theme-dark .site-footer {
                        background: #000000;
                        color: #a8a29e;
                    }

                    .dusk.theme-dark .footer-brand {
                        color: #fafaf9;
                    }

                    .dusk.theme-dark .footer-links a:hover {
                        color: #fb923c;
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::CONTENT;
    use crate::content::AvatarRef;

    #[test]
    fn dusk_is_the_only_variant_with_a_theme_toggle() {
        assert!(CONTENT.has_theme_toggle);
        assert!(!crate::pages::home::CONTENT.has_theme_toggle);
        assert!(!crate::pages::daylight::CONTENT.has_theme_toggle);
    }

    #[test]
    fn offers_exactly_three_tiers_with_one_featured() {
        assert_eq!(CONTENT.tiers.len(), 3);
        assert_eq!(CONTENT.tiers.iter().filter(|t| t.is_featured).count(), 1);
    }

    #[test]
    fn first_faq_is_expanded_on_load() {
        assert_eq!(CONTENT.initial_faq_open, Some(0));
        let index = CONTENT.initial_faq_open.unwrap();
        assert!(index < CONTENT.faqs.len());
    }

    #[test]
    fn staff_avatars_use_image_urls() {
        assert_eq!(CONTENT.staff.len(), 3);
        for profile in CONTENT.staff {
            assert!(matches!(profile.avatar, AvatarRef::Url(url) if url.starts_with("https://")));
        }
    }

    #[test]
    fn faq_blends_both_question_sets_in_order() {
        let questions: Vec<&str> = CONTENT.faqs.iter().map(|f| f.question).collect();
        assert_eq!(
            questions,
            [
                "Is it safe?",
                "Do I need to provide anything?",
                "What about the mess?",
                "Can I request a specific LogBuddy?",
                "Can I book a LogBuddy for an outdoor fire pit?",
            ]
        );
    }
}
