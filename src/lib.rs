//! # brandscan
//!
//! A Rust crate for classifying a website's raw design signals into a
//! semantic brand identity.
//!
//! This library takes the loosely structured signals a page scraper extracts
//! from a rendered page (CSS custom properties, per-selector computed
//! styles, color frequency counts, font usage maps) and classifies them
//! into:
//! - A capped, role-labeled color palette (primary, accents, neutrals,
//!   utility slots)
//! - A typeface hierarchy (heading, body, accent/display, monospace)
//! - A confidence record with a human-readable evidence trail for every
//!   classified value
//!
//! Classification is purely functional: no I/O, no shared state, and safe to
//! invoke concurrently across pages.
//!
//! ## Example
//!
//! ```rust
//! use brandscan::{classify_branding, PageSignals};
//!
//! let signals = PageSignals::from_json_str(r##"{
//!     "color_palette": {
//!         "css_custom_properties": {"--primary-color": "#1a73e8"}
//!     },
//!     "typography": {
//!         "font_families_used": {"body": {"fontFamily": "Arial, sans-serif"}}
//!     }
//! }"##)?;
//!
//! let profile = classify_branding(&signals.color_palette, &signals.typography);
//! assert_eq!(profile.color_classification.primary, vec!["#1a73e8"]);
//! assert_eq!(profile.font_classification.body_text.as_deref(), Some("Arial"));
//! # Ok::<(), brandscan::BrandError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod classify;
pub mod config;
pub mod constants;
pub mod error;
pub mod signal;

pub use classify::{
    classify_colors, classify_fonts, detect_font_services, ClassifiedColors, ClassifiedFonts,
    ColorClassification, ColorClassifier, ColorRole, ConfidenceMap, ConfidenceRecord,
    FontClassification, FontClassifier, FontRole, FontService, FontServiceDetection,
    UtilityColors,
};
pub use config::{BucketCaps, ClassifierConfig, FrequencyThresholds};
pub use error::{BrandError, Result};
pub use signal::{
    ColorSignalBundle, PageSignals, StyleRecord, TypefaceUsage, TypographySignalBundle,
};

/// Complete classified brand identity for one page.
///
/// This is the merged output of both classifiers, in the shape consumed by
/// report compilers and downstream formatters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandProfile {
    /// Role-labeled color buckets
    pub color_classification: ColorClassification,

    /// One confidence record per classified color value
    pub color_confidence_scores: ConfidenceMap<ColorRole>,

    /// Role-labeled typeface slots
    pub font_classification: FontClassification,

    /// One confidence record per classified font name
    pub font_confidence_scores: ConfidenceMap<FontRole>,
}

/// Classify a page's color and typography signals into a brand profile.
///
/// This is the main entry point. The two classifiers are independent; this
/// runs both with the default policy and merges their output.
///
/// # Arguments
///
/// * `colors` - Color signal bundle extracted from the page
/// * `typography` - Typography signal bundle extracted from the page
///
/// # Returns
///
/// A `BrandProfile` with capped role buckets and per-value confidence
/// records. Never fails: sparse or empty bundles produce an empty profile.
pub fn classify_branding(
    colors: &ColorSignalBundle,
    typography: &TypographySignalBundle,
) -> BrandProfile {
    let classified_colors = classify_colors(colors);
    let classified_fonts = classify_fonts(typography);

    BrandProfile {
        color_classification: classified_colors.classification,
        color_confidence_scores: classified_colors.confidence_scores,
        font_classification: classified_fonts.classification,
        font_confidence_scores: classified_fonts.confidence_scores,
    }
}
