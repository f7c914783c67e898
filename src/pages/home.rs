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
        icon: "\u{1FA93}",
        title: "A LogBuddy Arrives",
        description: "Your certified LogBuddy arrives with premium, locally-sourced firewood and \
                      all the necessary tools.",
    },
    Step {
        icon: "\u{1F6CB}\u{FE0F}",
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
              specializes in the 'top-down' burn method. He believes every fire tells a story.",
        avatar: AvatarRef::Color("#b91c1c"),
    },
    StaffProfile {
        name: "Chloe",
        title: "The Kindling Queen",
        bio: "Chloe knows that the secret to a great fire is the foundation. She can get a \
              roaring fire going faster than you can say 'hygge'. Also, she makes amazing \
              s'mores.",
        avatar: AvatarRef::Color("#1d4ed8"),
    },
    StaffProfile {
        name: "Mitch",
        title: "The Ash Assassin",
        bio: "Mitch's passion isn't just the fire; it's the aftermath. He guarantees your hearth \
              will be cleaner than when he arrived. He once vacuumed a single speck of soot from \
              50 yards away.",
        avatar: AvatarRef::Color("#15803d"),
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
        answer: "Absolutely. All LogBuddies are insured, rigorously trained in fire safety \
                 protocols, and certified. We inspect your chimney flue before starting any fire.",
    },
    FaqEntry {
        question: "Do I need to provide anything?",
        answer: "Nope! We bring the premium, seasoned wood, the kindling, the matches, and the \
                 magic. You just need a functional fireplace.",
    },
    FaqEntry {
        question: "What about the mess?",
        answer: "We guarantee a no-mess experience. Our LogBuddies use drop cloths and \
                 specialized ash vacuums. We leave your hearth cleaner than we found it.",
    },
    FaqEntry {
        question: "What kind of wood do you use?",
        answer: "We only use sustainably sourced, locally harvested hardwoods that have been \
                 seasoned for at least 12 months. This ensures a clean, long-lasting burn.",
    },
    FaqEntry {
        question: "Can I request a specific LogBuddy?",
        answer: "You sure can! If you loved your experience with Brendan, Chloe, or Mitch, you \
                 can request them in the booking notes. We'll do our best to accommodate.",
    },
];

/// Classic ember variant: dark palette, serif headings, no theme toggle.
pub const CONTENT: PageContent = PageContent {
    slug: "home",
    hero_headline: "A Perfect Fire. Every Time.",
    hero_lead: "Book a certified LogBuddy to expertly build a beautiful, long-lasting fire in \
                your home's fireplace.",
    hero_cta: "Book Your Fire",
    hero_tagline: "LogBuddy: The Warmth You Want. The Work You Don't.",
    steps_heading: "How LogBuddy Works",
    steps_intro: None,
    steps: STEPS,
    pricing_heading: "Our Fire Experiences",
    pricing_intro: None,
    featured_tag: "Most Popular",
    tiers: TIERS,
    staff_heading: "Meet the LogBuddies",
    staff_intro: Some(
        "We take fire seriously (so you don't have to). Our LogBuddies are certified, insured, \
         and passionate about pyrotechnics (the cozy kind).",
    ),
    staff: STAFF,
    testimonials_heading: "What Our Clients Are Saying",
    testimonials: TESTIMONIALS,
    faq_heading: "Frequently Asked Questions",
    faqs: FAQS,
    initial_faq_open: None,
    footer_cta: Some(FooterCta {
        heading: "Ready for the Perfect Evening?",
        lead: "Stop staring at that cold, empty fireplace. Let LogBuddy bring the warmth.",
        cta_label: "Book Your Fire Now",
    }),
    footer_tagline: "The Warmth You Want. The Work You Don't.",
    footer_note: "LogBuddy Inc.",
    footer_links: &["Privacy", "Terms", "Become a Buddy"],
    has_theme_toggle: false,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <LandingPage content={CONTENT} />
            <style>
                {r#"
                    .landing-page.home {
                        background: #111827;
                        color: #e5e7eb;
                    }

                    .home h1,
                    .home h2 {
                        font-family: Georgia, 'Times New Roman', serif;
                        color: #f9fafb;
                    }

                    .home .hero-backdrop {
                        background: radial-gradient(
                            circle at 50% 80%,
                            rgba(251, 146, 60, 0.3) 0%,
                            rgba(17, 24, 39, 0.95) 70%
                        );
                    }

                    .home .hero-backdrop::before {
                        content: "";
                        position: absolute;
                        left: 50%;
                        bottom: 0;
                        transform: translateX(-50%);
                        width: min(520px, 90%);
                        height: 120px;
                        background: linear-gradient(to top, rgba(249, 115, 22, 0.35), transparent);
                        animation: ember-pulse 2.5s ease-in-out infinite;
                    }

                    @keyframes ember-pulse {
                        0%, 100% { opacity: 0.45; }
                        50% { opacity: 0.9; }
                    }

                    .home .hero-lead {
                        color: #d1d5db;
                    }

                    .home .hero-cta {
                        background: #ea580c;
                        color: #ffffff;
                        box-shadow: 0 10px 30px rgba(234, 88, 12, 0.4);
                    }

                    .home .hero-cta:hover {
                        background: #c2410c;
                    }

                    .home .hero-tagline {
                        color: #fbbf24;
                        opacity: 1;
                    }

                    .home .step {
                        background: #1f2937;
                        border: 1px solid #374151;
                    }

                    .home .step-icon {
                        background: #374151;
                        border: 2px solid rgba(249, 115, 22, 0.5);
                    }

                    .home .pricing-card {
                        background: #1f2937;
                        border-color: #4b5563;
                    }

                    .home .pricing-card.featured {
                        background: #374151;
                        border: 4px solid #f97316;
                    }

                    .home .popular-tag {
                        background: #ea580c;
                        color: #ffffff;
                    }

                    .home .price .amount {
                        color: #fbbf24;
                    }

                    .home .feature-list .check {
                        color: #f59e0b;
                    }

                    .home .book-button {
                        background: #374151;
                        color: #f9fafb;
                    }

                    .home .book-button:hover {
                        background: #4b5563;
                    }

                    .home .pricing-card.featured .book-button {
                        background: #ea580c;
                        color: #ffffff;
                    }

                    .home .pricing-card.featured .book-button:hover {
                        background: #c2410c;
                    }

                    .home .staff-card {
                        background: #1f2937;
                        transition: box-shadow 0.3s ease;
                    }

                    .home .staff-card:hover {
                        box-shadow: 0 10px 30px rgba(249, 115, 22, 0.25);
                    }

                    .home .staff-title {
                        color: #f59e0b;
                        font-style: italic;
                    }

                    .home .staff-avatar.swatch {
                        border: 4px solid #374151;
                        background-image:
                            repeating-linear-gradient(
                                45deg,
                                rgba(0, 0, 0, 0.35) 0px,
                                rgba(0, 0, 0, 0.35) 5px,
                                transparent 5px,
                                transparent 10px
                            ),
                            repeating-linear-gradient(
                                -45deg,
                                rgba(0, 0, 0, 0.35) 0px,
                                rgba(0, 0, 0, 0.35) 5px,
                                transparent 5px,
                                transparent 10px
                            );
                    }

                    .home .testimonial-card {
                        background: #374151;
                    }

                    .home .stars {
                        color: #fbbf24;
                    }

                    .home .faq-item {
                        border-radius: 0;
                        border-bottom: 1px solid #374151;
                    }

                    .home .faq-question:hover .question-text {
                        color: #fbbf24;
                    }

                    .home .toggle-icon {
                        color: #f97316;
                    }

                    .home .footer-cta {
                        border-top: 1px solid #374151;
                    }

                    .home .site-footer {
                        border-top: 1px solid #1f2937;
                    }

                    .home .footer-links a:hover {
                        color: #f97316;
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
        assert!(CONTENT.tiers[1].is_featured);
        assert_eq!(CONTENT.tiers[1].name, "The Evening Glow");
    }

    #[test]
    fn every_tier_lists_at_least_one_feature() {
        for tier in CONTENT.tiers {
            assert!(!tier.features.is_empty(), "{} has no features", tier.name);
            assert!(tier.price_units > 0);
        }
    }

    #[test]
    fn faq_keeps_its_authored_order_and_starts_collapsed() {
        let questions: Vec<&str> = CONTENT.faqs.iter().map(|f| f.question).collect();
        assert_eq!(
            questions,
            [
                "Is it safe?",
                "Do I need to provide anything?",
                "What about the mess?",
                "What kind of wood do you use?",
                "Can I request a specific LogBuddy?",
            ]
        );
        assert_eq!(CONTENT.initial_faq_open, None);
    }

    #[test]
    fn profiles_and_testimonials_are_fully_populated() {
        assert_eq!(CONTENT.staff.len(), 3);
        assert!(CONTENT.staff.iter().all(|p| !p.bio.is_empty()));
        assert_eq!(CONTENT.testimonials.len(), 3);
    }

    #[test]
    fn classic_variant_has_no_theme_toggle() {
        assert!(!CONTENT.has_theme_toggle);
        assert!(CONTENT.footer_cta.is_some());
    }
}
