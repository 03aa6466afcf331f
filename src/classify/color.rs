//! Color role classification
//!
//! Turns a page's color signal bundle into a capped, role-labeled palette in
//! two ordered passes:
//!
//! 1. CSS variable name semantics (high confidence). Variable names are
//!    tested against an ordered table of pattern-group rules; the first
//!    matching group wins.
//! 2. Frequency + element-hierarchy inference (moderate confidence) over the
//!    per-selector computed colors, for values Pass 1 did not claim.
//!
//! A color value is assigned at most once across both passes, and buckets
//! are truncated to their configured capacities in discovery order.
//!
//! Algorithm tag: `algo-two-pass-color-roles`

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::confidence::{
    ClassifiedSet, ColorRole, ConfidenceLedger, ConfidenceMap, ConfidenceRecord,
};
use crate::config::ClassifierConfig;
use crate::constants::{confidence, patterns, selectors};
use crate::signal::ColorSignalBundle;

/// Trailing numeric suffix (`--color-blue-10`) marking a shade-ladder step
static NUMERIC_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-\d+$").expect("valid suffix regex"));

/// Role-labeled color buckets for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorClassification {
    /// Primary brand colors (capped)
    pub primary: Vec<String>,

    /// Accent colors (capped)
    pub accents: Vec<String>,

    /// Neutral scale colors (capped)
    pub neutrals: Vec<String>,

    /// Fixed semantic slots
    pub utility: UtilityColors,
}

/// Fixed utility color slots. Serialized keys are always present, `null`
/// when unfilled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UtilityColors {
    pub success: Option<String>,
    pub error: Option<String>,
    pub warning: Option<String>,
    pub info: Option<String>,
}

/// Color classification output: buckets plus one confidence record per
/// classified value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedColors {
    pub classification: ColorClassification,
    pub confidence_scores: ConfidenceMap<ColorRole>,
}

/// Destination of a Pass 1 rule match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Primary,
    Accents,
    Neutrals,
    UtilitySuccess,
    UtilityError,
    UtilityWarning,
    UtilityInfo,
}

/// One entry of the Pass 1 priority ladder.
struct VariableRule {
    patterns: &'static [&'static str],
    role: ColorRole,
    confidence: f32,
    bucket: Bucket,
    /// Reject names carrying intensity modifiers or numeric suffixes
    /// (tint/shade ladders are not brand accents)
    base_name_only: bool,
}

impl VariableRule {
    fn matches(&self, var_lower: &str) -> bool {
        if !self.patterns.iter().any(|p| var_lower.contains(p)) {
            return false;
        }
        if self.base_name_only {
            if patterns::INTENSITY_MODIFIERS
                .iter()
                .any(|m| var_lower.contains(m))
            {
                return false;
            }
            if NUMERIC_SUFFIX.is_match(var_lower) {
                return false;
            }
        }
        true
    }
}

/// Pass 1 rules in priority order. Order is a hard invariant: reordering
/// entries changes classification outcomes.
const VARIABLE_RULES: &[VariableRule] = &[
    VariableRule {
        patterns: patterns::PRIMARY,
        role: ColorRole::Primary,
        confidence: confidence::VARIABLE_PRIMARY,
        bucket: Bucket::Primary,
        base_name_only: false,
    },
    VariableRule {
        patterns: patterns::ACCENT,
        role: ColorRole::Accent,
        confidence: confidence::VARIABLE_ACCENT,
        bucket: Bucket::Accents,
        base_name_only: false,
    },
    VariableRule {
        patterns: patterns::NEUTRAL,
        role: ColorRole::Neutral,
        confidence: confidence::VARIABLE_NEUTRAL,
        bucket: Bucket::Neutrals,
        base_name_only: false,
    },
    VariableRule {
        patterns: patterns::SUCCESS,
        role: ColorRole::UtilitySuccess,
        confidence: confidence::VARIABLE_SUCCESS,
        bucket: Bucket::UtilitySuccess,
        base_name_only: false,
    },
    VariableRule {
        patterns: patterns::ERROR,
        role: ColorRole::UtilityError,
        confidence: confidence::VARIABLE_ERROR,
        bucket: Bucket::UtilityError,
        base_name_only: false,
    },
    VariableRule {
        patterns: patterns::WARNING,
        role: ColorRole::UtilityWarning,
        confidence: confidence::VARIABLE_WARNING,
        bucket: Bucket::UtilityWarning,
        base_name_only: false,
    },
    VariableRule {
        patterns: patterns::INFO,
        role: ColorRole::UtilityInfo,
        confidence: confidence::VARIABLE_INFO,
        bucket: Bucket::UtilityInfo,
        base_name_only: false,
    },
    VariableRule {
        patterns: patterns::NAMED_COLOR,
        role: ColorRole::Accent,
        confidence: confidence::VARIABLE_NAMED_COLOR,
        bucket: Bucket::Accents,
        base_name_only: true,
    },
];

/// Color classifier implementing the two-pass role inference.
pub struct ColorClassifier {
    config: ClassifierConfig,
}

impl Default for ColorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorClassifier {
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

    /// Classify the colors of one page.
    ///
    /// Deterministic and infallible: absent or empty signals yield an
    /// all-empty classification.
    pub fn classify(&self, bundle: &ColorSignalBundle) -> ClassifiedColors {
        let mut classification = ColorClassification::default();
        let mut ledger = ConfidenceLedger::new();
        let mut classified = ClassifiedSet::default();

        // Pass 1 must fully complete before Pass 2 examines the bundle.
        self.classify_variables(bundle, &mut classification, &mut classified, &mut ledger);
        self.classify_computed(bundle, &mut classification, &mut classified, &mut ledger);

        self.truncate(&mut classification);

        debug!(
            variables = bundle.css_custom_properties.len(),
            primary = classification.primary.len(),
            accents = classification.accents.len(),
            neutrals = classification.neutrals.len(),
            "classified page colors"
        );

        ClassifiedColors {
            classification,
            confidence_scores: ledger.into_map(),
        }
    }

    /// Pass 1: classify by CSS variable name semantics.
    fn classify_variables(
        &self,
        bundle: &ColorSignalBundle,
        classification: &mut ColorClassification,
        classified: &mut ClassifiedSet,
        ledger: &mut ConfidenceLedger<ColorRole>,
    ) {
        for (var_name, color_value) in &bundle.css_custom_properties {
            let var_lower = var_name.to_lowercase();
            let Some(rule) = VARIABLE_RULES.iter().find(|r| r.matches(&var_lower)) else {
                continue;
            };

            let mut evidence = vec![format!("CSS variable name: {}", var_name)];
            if rule.base_name_only {
                evidence.push("Named color variable".to_string());
            }

            match rule.bucket {
                Bucket::Primary => {
                    if classified.insert(color_value) {
                        classification.primary.push(color_value.clone());
                    }
                }
                Bucket::Accents => {
                    if classified.insert(color_value) {
                        classification.accents.push(color_value.clone());
                    }
                }
                Bucket::Neutrals => {
                    if classified.insert(color_value) {
                        classification.neutrals.push(color_value.clone());
                    }
                }
                // A later matching variable with a fresh value replaces the
                // slot; a value already claimed by another bucket never
                // joins a second one.
                Bucket::UtilitySuccess => {
                    if classified.insert(color_value) {
                        classification.utility.success = Some(color_value.clone());
                    }
                }
                Bucket::UtilityError => {
                    if classified.insert(color_value) {
                        classification.utility.error = Some(color_value.clone());
                    }
                }
                Bucket::UtilityWarning => {
                    if classified.insert(color_value) {
                        classification.utility.warning = Some(color_value.clone());
                    }
                }
                Bucket::UtilityInfo => {
                    if classified.insert(color_value) {
                        classification.utility.info = Some(color_value.clone());
                    }
                }
            }

            ledger.record(
                color_value,
                ConfidenceRecord::new(rule.role, rule.confidence, evidence),
            );
        }
    }

    /// Pass 2: infer roles from global frequency and element hierarchy for
    /// colors Pass 1 left unclassified.
    fn classify_computed(
        &self,
        bundle: &ColorSignalBundle,
        classification: &mut ColorClassification,
        classified: &mut ClassifiedSet,
        ledger: &mut ConfidenceLedger<ColorRole>,
    ) {
        let thresholds = &self.config.frequency;

        for (selector, styles) in &bundle.computed_colors {
            for (prop, color_value) in styles {
                if classified.contains(color_value) {
                    continue;
                }

                let freq = bundle
                    .color_frequency
                    .get(color_value)
                    .copied()
                    .unwrap_or(0);

                if selectors::IMPORTANT.contains(&selector.as_str())
                    && freq >= thresholds.primary_min
                {
                    classified.insert(color_value);
                    classification.primary.push(color_value.clone());
                    ledger.record(
                        color_value,
                        ConfidenceRecord::new(
                            ColorRole::Primary,
                            confidence::FREQUENCY_PRIMARY,
                            vec![
                                format!("Found in {}.{}", selector, prop),
                                format!("High frequency: {} uses", freq),
                                format!("Used in important element: {}", selector),
                            ],
                        ),
                    );
                } else if selectors::ACCENT.contains(&selector.as_str())
                    && freq >= thresholds.accent_min
                    && freq < thresholds.accent_max
                {
                    classified.insert(color_value);
                    classification.accents.push(color_value.clone());
                    ledger.record(
                        color_value,
                        ConfidenceRecord::new(
                            ColorRole::Accent,
                            confidence::FREQUENCY_ACCENT,
                            vec![
                                format!("Found in {}.{}", selector, prop),
                                format!("Moderate frequency: {} uses", freq),
                                format!("Used in accent element: {}", selector),
                            ],
                        ),
                    );
                }
                // Otherwise left unclassified: no record, no bucket.
            }
        }
    }

    /// Truncate buckets to their capacities, keeping discovery order.
    fn truncate(&self, classification: &mut ColorClassification) {
        let caps = &self.config.caps;
        classification.primary.truncate(caps.primary);
        classification.accents.truncate(caps.accents);
        classification.neutrals.truncate(caps.neutrals);
    }
}

/// Classify page colors with the default policy.
///
/// Convenience wrapper over [`ColorClassifier::classify`].
pub fn classify_colors(bundle: &ColorSignalBundle) -> ClassifiedColors {
    ColorClassifier::new().classify(bundle)
}
