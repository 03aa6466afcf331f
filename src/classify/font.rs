//! Typeface role classification
//!
//! Single pass over the per-selector style map, in extraction order. Each
//! selector's declared family is reduced to its cleaned first token and
//! tested against a fixed rule ladder: heading, body, monospace, then
//! accent/display. A cleaned name occupies at most one slot; the first rule
//! to claim it wins.
//!
//! Algorithm tag: `algo-selector-ladder-font-roles`

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::confidence::{
    ClassifiedSet, ConfidenceLedger, ConfidenceMap, ConfidenceRecord, FontRole,
};
use crate::config::ClassifierConfig;
use crate::constants::{confidence, selectors};
use crate::signal::normalize::clean_font_name;
use crate::signal::{StyleRecord, TypographySignalBundle};

/// Role-labeled typeface hierarchy for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontClassification {
    /// Font used in primary headings (h1-h3)
    pub primary_heading: Option<String>,

    /// Font used in body copy
    pub body_text: Option<String>,

    /// Distinct fonts used in special elements (capped)
    pub accent_display: Vec<String>,

    /// Monospace/code font
    pub monospace_code: Option<String>,
}

/// Font classification output: slots plus one confidence record per
/// classified font name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedFonts {
    pub classification: FontClassification,
    pub confidence_scores: ConfidenceMap<FontRole>,
}

/// Font classifier implementing the selector rule ladder.
pub struct FontClassifier {
    config: ClassifierConfig,
}

impl Default for FontClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FontClassifier {
    /// Create a classifier with the default policy
    pub fn new() -> Self {
        Self {
            config: ClassifierConfig::default_policy(),
        }
    }

    /// Create a classifier with a custom policy
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify the typefaces of one page.
    ///
    /// `styles_by_selector` drives the pass; `typography` supplies the
    /// typeface hierarchy used to enrich records with usage info afterwards.
    /// Deterministic and infallible: empty input yields an empty
    /// classification with all slots absent.
    pub fn classify(
        &self,
        typography: &TypographySignalBundle,
        styles_by_selector: &IndexMap<String, StyleRecord>,
    ) -> ClassifiedFonts {
        let mut classification = FontClassification::default();
        let mut ledger = ConfidenceLedger::new();
        let mut classified = ClassifiedSet::default();

        for (selector, style) in styles_by_selector {
            let font_family = &style.font_family;
            if font_family.is_empty() {
                continue;
            }

            let font_clean = clean_font_name(font_family);
            if classified.contains(&font_clean) {
                continue;
            }

            let mut evidence = vec![format!("Used in: {}", selector)];
            let family_lower = font_family.to_lowercase();

            // Rule ladder, first match wins.
            let (role, score) = if selectors::HEADING.contains(&selector.as_str())
                && classification.primary_heading.is_none()
            {
                classification.primary_heading = Some(font_clean.clone());
                evidence.push("Used in primary headings".to_string());
                (FontRole::PrimaryHeading, confidence::FONT_HEADING)
            } else if selectors::BODY.contains(&selector.as_str())
                && classification.body_text.is_none()
            {
                classification.body_text = Some(font_clean.clone());
                evidence.push("Used in body text".to_string());
                (FontRole::BodyText, confidence::FONT_BODY)
            } else if (family_lower.contains("mono") || family_lower.contains("code"))
                && classification.monospace_code.is_none()
            {
                classification.monospace_code = Some(font_clean.clone());
                evidence.push("Monospace font family detected".to_string());
                (FontRole::Monospace, confidence::FONT_MONOSPACE)
            } else if selectors::ACCENT_DISPLAY.contains(&selector.as_str())
                && classification.primary_heading.as_ref() != Some(&font_clean)
                && classification.body_text.as_ref() != Some(&font_clean)
            {
                classification.accent_display.push(font_clean.clone());
                evidence.push(format!("Used in special element: {}", selector));
                (FontRole::Accent, confidence::FONT_ACCENT)
            } else {
                continue;
            };

            classified.insert(&font_clean);
            ledger.record(&font_clean, ConfidenceRecord::new(role, score, evidence));
        }

        classification
            .accent_display
            .truncate(self.config.caps.accent_display);

        // Enrich records with usage info from the typeface hierarchy.
        for (family, usage) in &typography.typeface_hierarchy {
            let font_clean = clean_font_name(family);
            if let Some(record) = ledger.get_mut(&font_clean) {
                record.used_in_elements = Some(usage.used_in.clone());
                record.sample_size = usage.sample_size.clone();
            }
        }

        debug!(
            selectors = styles_by_selector.len(),
            accent_display = classification.accent_display.len(),
            "classified page fonts"
        );

        ClassifiedFonts {
            classification,
            confidence_scores: ledger.into_map(),
        }
    }
}

/// Classify page fonts with the default policy, driving the pass from the
/// bundle's own per-selector style map.
///
/// Convenience wrapper over [`FontClassifier::classify`].
pub fn classify_fonts(bundle: &TypographySignalBundle) -> ClassifiedFonts {
    FontClassifier::new().classify(bundle, &bundle.font_families_used)
}
