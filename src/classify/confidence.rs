//! Shared confidence and evidence model
//!
//! Every classified value gets exactly one [`ConfidenceRecord`]: a fixed
//! per-rule confidence, the role it was assigned, and a human-readable
//! evidence trail. The first classification of a value wins; later passes
//! never overwrite an existing record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Semantic role assigned to a color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Primary,
    Accent,
    Neutral,
    UtilitySuccess,
    UtilityError,
    UtilityWarning,
    UtilityInfo,
}

/// Semantic role assigned to a font name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    PrimaryHeading,
    BodyText,
    Monospace,
    Accent,
}

/// Classification record for one value: role, fixed confidence, evidence.
///
/// `used_in_elements` and `sample_size` are filled only for fonts tracked in
/// the typeface hierarchy and are omitted from JSON otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceRecord<R> {
    pub role: R,

    /// Rule-fixed confidence in [0, 1]
    pub confidence: f32,

    /// Ordered human-readable reasons for the classification
    pub evidence: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub used_in_elements: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sample_size: Option<String>,
}

impl<R> ConfidenceRecord<R> {
    /// Create a record with no usage enrichment
    pub fn new(role: R, confidence: f32, evidence: Vec<String>) -> Self {
        Self {
            role,
            confidence,
            evidence,
            used_in_elements: None,
            sample_size: None,
        }
    }
}

/// Classified value → its confidence record, in classification order.
pub type ConfidenceMap<R> = IndexMap<String, ConfidenceRecord<R>>;

/// Accumulates confidence records with first-classification-wins semantics.
#[derive(Debug)]
pub(crate) struct ConfidenceLedger<R> {
    records: ConfidenceMap<R>,
}

impl<R> ConfidenceLedger<R> {
    pub(crate) fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    /// Record a classification for `value` unless one already exists.
    pub(crate) fn record(&mut self, value: &str, record: ConfidenceRecord<R>) {
        if !self.records.contains_key(value) {
            self.records.insert(value.to_string(), record);
        }
    }

    /// Mutable access for post-pass enrichment of optional usage fields.
    pub(crate) fn get_mut(&mut self, value: &str) -> Option<&mut ConfidenceRecord<R>> {
        self.records.get_mut(value)
    }

    pub(crate) fn into_map(self) -> ConfidenceMap<R> {
        self.records
    }
}

/// The set of values already claimed by an earlier rule or pass.
///
/// Threaded explicitly through both classification passes so ownership of
/// the dedup state is visible in the data flow.
#[derive(Debug, Default)]
pub(crate) struct ClassifiedSet {
    values: HashSet<String>,
}

impl ClassifiedSet {
    /// Mark a value as classified. Returns `true` if it was not seen before.
    pub(crate) fn insert(&mut self, value: &str) -> bool {
        self.values.insert(value.to_string())
    }

    pub(crate) fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }
}
