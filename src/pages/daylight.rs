use yew::prelude::*;

use crate::components::page::LandingPage;
use crate::content::{
    AvatarRef, FaqEntry, PageContent, PricingTier, StaffProfile, Step, Testimonial,
};

const STEPS: &[Step] = &[
    Step {
        icon: "\u{1F4C5}",
        title: "1. Schedule Your Spark",
        description: "Choose a date and time that works for you. Select your preferred fire \
                      experience.",
    },
    Step {
        icon: "\u{2705}",
        title: "2. A LogBuddy Arrives",
        description: "Your certified LogBuddy arrives with premium, locally-sourced firewood and \
                      all the necessary tools.",
    },
    Step {
        icon: "\u{1F942}",
        title: "3. Relax and Enjoy",
        description: "We handle everything from setup to a spotless cleanup. All you have to do \
                      is enjoy the glow.",
    },
];

const TIERS: &[PricingTier] = &[
    PricingTier {
        name: "The Quick Spark",
        price_units: 75,
        duration_label: "One-Hour Fire",
        description: "A classic one-hour fire. Perfect for a quick dose of cozy. Includes \
                      standard hardwood.",
        features: &["Classic one-hour fire", "Standard hardwood included"],
        cta_label: "Select Spark",
        is_featured: false,
    },
    PricingTier {
        name: "The Evening Glow",
        price_units: 125,
        duration_label: "Three-Hour Fire",
        description: "A 3-hour, slow-burning fire. Ideal for movie nights or entertaining \
                      guests. Includes premium oak or birch.",
        features: &["Three hours of slow-burning glow", "Premium oak or birch included"],
        cta_label: "Select Glow",
        is_featured: true,
    },
    PricingTier {
        name: "The Hearth Connoisseur",
        price_units: 195,
        duration_label: "4+ Hour Fire",
        description: "The ultimate experience. A 4+ hour fire with your choice of aromatic wood, \
                      complimentary s'mores kit, and a lesson in fire management.",
        features: &[
            "Your choice of aromatic wood",
            "Complimentary s'mores kit",
            "Lesson in fire management",
        ],
        cta_label: "Select Connoisseur",
        is_featured: false,
    },
];

const STAFF: &[StaffProfile] = &[
    StaffProfile {
        name: "Brendan",
        title: "the Hearth Whisperer",
        bio: "With a degree in 'Applied Thermodynamics' from the University of Life, Brendan \
              believes that every fire tells a story. He specializes in the 'top-down' burn \
              method.",
        avatar: AvatarRef::Color("#e7e5e4"),
    },
    StaffProfile {
        name: "Chloe",
        title: "the Flame Artist",
        bio: "Chloe sees every fireplace as a blank canvas. Her expertise is in creating fires \
              that not only warm the room but also create the perfect ambiance for any occasion.",
        avatar: AvatarRef::Color("#e7e5e4"),
    },
    StaffProfile {
        name: "Marcus",
        title: "the Kindling King",
        bio: "Marcus can get a fire started in any condition, guaranteed. His secret is his \
              proprietary blend of all-natural kindling and an unwavering positive attitude.",
        avatar: AvatarRef::Color("#e7e5e4"),
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
        quote: "The cleanup was immaculate. My hearth has never looked better. Worth every penny.",
        author: "David L.",
        location: "The Suburbs",
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
        question: "Can I book a LogBuddy for an outdoor fire pit?",
        answer: "Currently, our services are tailored for indoor wood-burning fireplaces. We are \
                 exploring options for outdoor fire pits and hope to offer this service in the \
                 future!",
    },
];

/// Daylight variant: warm stone palette, first FAQ pre-expanded.
pub const CONTENT: PageContent = PageContent {
    slug: "daylight",
    hero_headline: "A Perfect Fire. Every Time.",
    hero_lead: "Book a certified LogBuddy to expertly build a beautiful, long-lasting fire in \
                your home's fireplace.",
    hero_cta: "Book Your Fire",
    hero_tagline: "LogBuddy: The Warmth You Want. The Work You Don't.",
    steps_heading: "How It Works",
    steps_intro: Some("It's never been easier to enjoy the comfort of a real fire."),
    steps: STEPS,
    pricing_heading: "Our Fire Experiences",
    pricing_intro: Some(
        "We're not just selling fire; we're selling an experience. Choose the one that's right \
         for you.",
    ),
    featured_tag: "MOST POPULAR",
    tiers: TIERS,
    staff_heading: "Meet the LogBuddies",
    staff_intro: Some("Our certified professionals are passionate about the perfect flame."),
    staff: STAFF,
    testimonials_heading: "Don't Just Take Our Word For It",
    testimonials: TESTIMONIALS,
    faq_heading: "Frequently Asked Questions",
    faqs: FAQS,
    initial_faq_open: Some(0),
    footer_cta: None,
    footer_tagline: "The Warmth You Want. The Work You Don't.",
    footer_note: "LogBuddy Inc. All Rights Reserved. (A Fictional Company)",
    footer_links: &[],
    has_theme_toggle: false,
};

#[function_component(Daylight)]
pub fn daylight() -> Html {
    html! {
        <>
            <LandingPage content={CONTENT} />
            <style>
                {r#"
                    .landing-page.daylight {
                        background: #fafaf9;
                        color: #292524;
                    }

                    .daylight h1,
                    .daylight h2 {
                        color: #292524;
                    }

                    .daylight .hero {
                        color: #ffffff;
                        padding-bottom: 8rem;
                    }

                    .daylight .hero h1 {
                        color: #ffffff;
                        text-shadow: 0 2px 12px rgba(0, 0, 0, 0.5);
                    }

                    .daylight .hero-backdrop {
                        background:
                            linear-gradient(to right, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.3)),
                            url('https://images.unsplash.com/photo-1571508601933-0939b9539a49?q=80&w=2070&auto=format&fit=crop')
                                center / cover no-repeat #1c1917;
                    }

                    .daylight .hero-lead {
                        color: #e7e5e4;
                    }

                    .daylight .hero-cta {
                        background: #ea580c;
                        color: #ffffff;
                        box-shadow: 0 12px 30px rgba(0, 0, 0, 0.35);
                    }

                    .daylight .hero-cta:hover {
                        background: #c2410c;
                        transform: scale(1.08);
                    }

                    .daylight .hero-tagline {
                        color: #d6d3d1;
                    }

                    .daylight .section-intro {
                        color: #57534e;
                    }

                    .daylight .step-icon {
                        background: #ffedd5;
                        color: #ea580c;
                    }

                    .daylight .pricing-section {
                        background: #ffffff;
                        max-width: none;
                    }

                    .daylight .pricing-grid,
                    .daylight .pricing-section h2,
                    .daylight .pricing-section .section-intro {
                        max-width: 1100px;
                        margin-left: auto;
                        margin-right: auto;
                    }

                    .daylight .pricing-card {
                        background: #ffffff;
                        border: 1px solid #e7e5e4;
                        box-shadow: 0 10px 25px rgba(28, 25, 23, 0.08);
                    }

                    .daylight .pricing-card.featured {
                        border: 4px solid #f97316;
                        transform: scale(1.03);
                    }

                    .daylight .popular-tag {
                        background: #f97316;
                        color: #ffffff;
                    }

                    .daylight .price .amount {
                        color: #ea580c;
                    }

                    .daylight .card-description {
                        color: #57534e;
                    }

                    .daylight .feature-list .check {
                        color: #ea580c;
                    }

                    .daylight .book-button {
                        background: #292524;
                        color: #ffffff;
                    }

                    .daylight .book-button:hover {
                        background: #1c1917;
                    }

                    .daylight .pricing-card.featured .book-button {
                        background: #ea580c;
                    }

                    .daylight .pricing-card.featured .book-button:hover {
                        background: #c2410c;
                    }

                    .daylight .staff-card {
                        background: #ffffff;
                        border: 1px solid #e7e5e4;
                        text-align: center;
                    }

                    .daylight .staff-header {
                        flex-direction: column;
                    }

                    .daylight .staff-avatar.swatch {
                        width: 96px;
                        height: 96px;
                        border: 2px dashed #d6d3d1;
                    }

                    .daylight .staff-title {
                        color: #78716c;
                    }

                    .daylight .staff-bio {
                        color: #57534e;
                        font-style: normal;
                    }

                    .daylight .testimonial-card {
                        background: #ffffff;
                        border: 1px solid #e7e5e4;
                        box-shadow: 0 6px 18px rgba(28, 25, 23, 0.06);
                    }

                    .daylight .stars {
                        color: #f59e0b;
                    }

                    .daylight .testimonial-content p {
                        color: #57534e;
                    }

                    .daylight .faq-item {
                        border-radius: 0;
                        border-bottom: 1px solid #e7e5e4;
                    }

                    .daylight .toggle-icon {
                        color: #ea580c;
                    }

                    .daylight .faq-answer p {
                        color: #57534e;
                    }

                    .daylight .site-footer {
                        background: #292524;
                        color: #d6d3d1;
                    }

                    .daylight .footer-brand {
                        color: #ffffff;
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::CONTENT;

    #[test]
    fn offers_exactly_three_tiers_with_one_featured() {
        assert_eq!(CONTENT.tiers.len(), 3);
        assert_eq!(CONTENT.tiers.iter().filter(|t| t.is_featured).count(), 1);
        assert_eq!(CONTENT.tiers[1].cta_label, "Select Glow");
    }

    #[test]
    fn first_faq_is_expanded_on_load() {
        assert_eq!(CONTENT.initial_faq_open, Some(0));
        let index = CONTENT.initial_faq_open.unwrap();
        assert!(index < CONTENT.faqs.len());
    }

    #[test]
    fn faq_keeps_its_authored_order() {
        let questions: Vec<&str> = CONTENT.faqs.iter().map(|f| f.question).collect();
        assert_eq!(
            questions,
            [
                "Is it safe?",
                "Do I need to provide anything?",
                "What about the mess?",
                "Can I book a LogBuddy for an outdoor fire pit?",
            ]
        );
    }

    #[test]
    fn profiles_and_testimonials_are_fully_populated() {
        assert_eq!(CONTENT.staff.len(), 3);
        assert_eq!(CONTENT.testimonials.len(), 2);
        assert!(CONTENT.staff.iter().all(|p| !p.bio.is_empty()));
    }

    #[test]
    fn daylight_variant_has_no_theme_toggle_or_closing_cta() {
        assert!(!CONTENT.has_theme_toggle);
        assert!(CONTENT.footer_cta.is_none());
    }
}
