//! Classification policy tables for brand signal analysis
//!
//! This module contains the named constants that drive both classifiers:
//! variable-name pattern groups, per-rule confidence values, bucket
//! capacities, selector lists, and frequency thresholds. Hoisting them here
//! keeps the policy visible and testable independently of the matching logic.

/// Variable-name pattern groups for Pass 1 of color classification.
///
/// Patterns are matched as substrings of the lower-cased CSS custom property
/// name. Group priority order is a hard invariant: a name matching several
/// groups is classified by the first group that claims it.
pub mod patterns {
    /// Brand primary color indicators
    pub const PRIMARY: &[&str] = &["primary", "brand", "main", "hero"];

    /// Accent / secondary color indicators
    pub const ACCENT: &[&str] = &["accent", "secondary", "highlight", "alt"];

    /// Neutral scale indicators
    pub const NEUTRAL: &[&str] = &["gray", "grey", "black", "white", "neutral"];

    /// Utility color indicators, one group per fixed slot
    pub const SUCCESS: &[&str] = &["success", "positive"];
    pub const ERROR: &[&str] = &["error", "danger", "negative"];
    pub const WARNING: &[&str] = &["warning", "caution", "alert"];
    pub const INFO: &[&str] = &["info", "notice"];

    /// Named-color variables (e.g. `--color-blue`). Treated as accents
    /// unless an earlier group already claimed the name.
    pub const NAMED_COLOR: &[&str] = &[
        "color-red",
        "color-orange",
        "color-yellow",
        "color-green",
        "color-blue",
        "color-purple",
        "color-pink",
        "color-teal",
        "color-magenta",
        "color-cyan",
    ];

    /// Intensity modifiers that mark a named-color variable as part of a
    /// tint/shade ladder rather than a brand accent.
    pub const INTENSITY_MODIFIERS: &[&str] = &["-light", "-dark", "-lighter", "-darker"];
}

/// Fixed confidence constants, one per classification rule.
///
/// These are rule-based scores, not outputs of a continuous function.
pub mod confidence {
    /// Pass 1: variable name matched the primary group
    pub const VARIABLE_PRIMARY: f32 = 0.95;

    /// Pass 1: variable name matched the accent group
    pub const VARIABLE_ACCENT: f32 = 0.90;

    /// Pass 1: variable name matched the neutral group
    pub const VARIABLE_NEUTRAL: f32 = 0.95;

    /// Pass 1: utility slot matches
    pub const VARIABLE_SUCCESS: f32 = 0.90;
    pub const VARIABLE_ERROR: f32 = 0.90;
    pub const VARIABLE_WARNING: f32 = 0.90;
    pub const VARIABLE_INFO: f32 = 0.85;

    /// Pass 1: named-color variable without intensity modifier
    pub const VARIABLE_NAMED_COLOR: f32 = 0.85;

    /// Pass 2: high-frequency color in an important element
    pub const FREQUENCY_PRIMARY: f32 = 0.75;

    /// Pass 2: moderate-frequency color in an accent element
    pub const FREQUENCY_ACCENT: f32 = 0.65;

    /// Font used in h1/h2/h3
    pub const FONT_HEADING: f32 = 0.90;

    /// Font used in body/p
    pub const FONT_BODY: f32 = 0.95;

    /// Font family declaring itself monospace
    pub const FONT_MONOSPACE: f32 = 0.90;

    /// Font used only in special elements (buttons, nav, emphasis)
    pub const FONT_ACCENT: f32 = 0.70;
}

/// Bucket capacities applied after classification.
///
/// Truncation keeps earliest-discovered order; excess entries are dropped,
/// never reassigned to another bucket.
pub mod caps {
    /// Maximum primary brand colors
    pub const PRIMARY: usize = 2;

    /// Maximum accent colors
    pub const ACCENTS: usize = 8;

    /// Maximum neutral colors
    pub const NEUTRALS: usize = 5;

    /// Maximum accent/display fonts
    pub const ACCENT_DISPLAY: usize = 3;
}

/// Selector lists consulted by the classifiers.
pub mod selectors {
    /// Pass 2: elements whose colors indicate a primary role when frequent
    pub const IMPORTANT: &[&str] = &["h1", "h2", "button", "[class*=\"primary\"]", ".hero"];

    /// Pass 2: elements whose colors indicate an accent role
    pub const ACCENT: &[&str] = &["[class*=\"secondary\"]", "a"];

    /// Heading font selectors
    pub const HEADING: &[&str] = &["h1", "h2", "h3"];

    /// Body text font selectors
    pub const BODY: &[&str] = &["body", "p"];

    /// Special elements whose distinct fonts count as accent/display faces
    pub const ACCENT_DISPLAY: &[&str] = &["button", ".btn", "nav", "strong"];
}

/// Frequency thresholds for Pass 2 inference.
///
/// These values materially change classification output. They are preserved
/// from the reference policy; treat them as tunable via
/// [`crate::config::FrequencyThresholds`], not as fixed law.
pub mod frequency {
    /// Minimum global occurrence count for a primary-role inference
    pub const PRIMARY_MIN: u32 = 5;

    /// Occurrence range `[min, max)` for an accent-role inference
    pub const ACCENT_MIN: u32 = 2;
    pub const ACCENT_MAX: u32 = 10;
}
