//! Display records for the landing pages.
//!
//! Everything the sections render is hardcoded copy. The records here are
//! plain `'static` data, with one full set per page variant under
//! `pages/`. Nothing is fetched and nothing mutates after startup.

/// A bookable fire package, rendered as one pricing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    /// Whole-dollar price, shown with a `$` prefix.
    pub price_units: u32,
    pub duration_label: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Button copy for this card; every card's button opens the booking
    /// modal regardless of label.
    pub cta_label: &'static str,
    /// Marks the visually emphasized card. At most one per variant.
    pub is_featured: bool,
}

/// Visual stand-in for a staff portrait: a flat color swatch or an
/// external image. The value is passed through to the browser untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarRef {
    Color(&'static str),
    Url(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub avatar: AvatarRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// One entry of the how-it-works walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Closing call-to-action block above the footer. Not every variant
/// carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterCta {
    pub heading: &'static str,
    pub lead: &'static str,
    pub cta_label: &'static str,
}

/// Per-variant page configuration consumed by the shared rendering
/// pipeline in `components::page`. The three variants differ only in
/// these records and in their palette stylesheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    /// Wrapper class scoping the variant stylesheet.
    pub slug: &'static str,

    pub hero_headline: &'static str,
    pub hero_lead: &'static str,
    pub hero_cta: &'static str,
    pub hero_tagline: &'static str,

    pub steps_heading: &'static str,
    pub steps_intro: Option<&'static str>,
    pub steps: &'static [Step],

    pub pricing_heading: &'static str,
    pub pricing_intro: Option<&'static str>,
    pub featured_tag: &'static str,
    pub tiers: &'static [PricingTier],

    pub staff_heading: &'static str,
    pub staff_intro: Option<&'static str>,
    pub staff: &'static [StaffProfile],

    pub testimonials_heading: &'static str,
    pub testimonials: &'static [Testimonial],

    pub faq_heading: &'static str,
    pub faqs: &'static [FaqEntry],
    /// FAQ entry expanded before any interaction, if any.
    pub initial_faq_open: Option<usize>,

    pub footer_cta: Option<FooterCta>,
    pub footer_tagline: &'static str,
    pub footer_note: &'static str,
    pub footer_links: &'static [&'static str],

    /// Whether the hero header renders the light/dark toggle.
    pub has_theme_toggle: bool,
}

pub const BRAND: &str = "LogBuddy";
pub const FLAME: &str = "\u{1F525}";
