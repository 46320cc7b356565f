//! Static marketing content: immutable configuration data compiled into the
//! binary. Views render these arrays as-is; there is no CMS behind them.

pub const BRAND: &str = "HireHUB";
pub const TAGLINE: &str = "Where talent meets opportunity";

pub const HERO_HEADLINE: &str = "Land the job. Find the talent.";
pub const HERO_SUBLINE: &str =
    "HireHUB connects students with recruiters who are hiring right now — \
     one profile, every opportunity.";
pub const HERO_PRIMARY_CTA: &str = "Get started";
pub const HERO_SECONDARY_CTA: &str = "I'm hiring";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub detail: &'static str,
    /// Emoji glyph used as a lightweight icon in the feature grid.
    pub icon: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "One profile, every employer",
        detail: "Build your profile once and apply to any listing in a click.",
        icon: "🎯",
    },
    Feature {
        title: "Curated listings",
        detail: "Roles vetted for students and recent graduates, updated daily.",
        icon: "📋",
    },
    Feature {
        title: "Direct recruiter chat",
        detail: "Talk to the person who is actually hiring, not a black box.",
        icon: "💬",
    },
    Feature {
        title: "Interview scheduling",
        detail: "Pick a slot that works; calendars stay in sync on both sides.",
        icon: "🗓️",
    },
    Feature {
        title: "Application tracking",
        detail: "See every application's stage from submitted to offer.",
        icon: "📈",
    },
    Feature {
        title: "Campus partnerships",
        detail: "Placement cells get their own analytics and cohort views.",
        icon: "🏛️",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Three interviews in my first week. The profile really does \
                travel everywhere.",
        name: "Priya N.",
        role: "Computer science graduate",
    },
    Testimonial {
        quote: "We filled two junior roles in days. The candidate pipeline \
                view alone is worth it.",
        name: "Marcus T.",
        role: "Talent lead, fintech startup",
    },
    Testimonial {
        quote: "Scheduling used to be half my job. Now it just happens.",
        name: "Elena R.",
        role: "Campus recruiter",
    },
];

/// A headline figure shown in the stats strip. `value` is the count-up
/// target; `suffix` is appended verbatim after the formatted number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: u64,
    pub suffix: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        label: "Students placed",
        value: 12_500,
        suffix: "+",
    },
    Stat {
        label: "Partner companies",
        value: 850,
        suffix: "+",
    },
    Stat {
        label: "Open roles right now",
        value: 3_200,
        suffix: "+",
    },
    Stat {
        label: "Campus partners",
        value: 140,
        suffix: "+",
    },
];

pub const FOOTER_NOTE: &str = "© 2026 HireHUB. Built for the class of tomorrow.";
