//! Configuration structures for the brandscan classification policy.
//!
//! Bucket capacities and frequency thresholds are policy, not law: they
//! materially change which colors and fonts survive classification, so they
//! are exposed here as a serializable structure instead of being buried in
//! the matching code.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use brandscan::ClassifierConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ClassifierConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = ClassifierConfig::default_policy();
//! # Ok::<(), brandscan::BrandError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{caps, frequency};
use crate::error::{BrandError, Result};

/// Complete classification policy.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Output bucket capacities
    pub caps: BucketCaps,

    /// Pass 2 frequency thresholds
    pub frequency: FrequencyThresholds,
}

/// Maximum number of entries retained per output bucket.
///
/// Truncation keeps earliest-discovered order; excess entries are dropped,
/// not reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCaps {
    /// Maximum primary brand colors
    pub primary: usize,

    /// Maximum accent colors
    pub accents: usize,

    /// Maximum neutral colors
    pub neutrals: usize,

    /// Maximum accent/display fonts
    pub accent_display: usize,
}

/// Occurrence-count thresholds for Pass 2 element-hierarchy inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyThresholds {
    /// Minimum global frequency for a primary-role inference
    pub primary_min: u32,

    /// Lower bound (inclusive) for an accent-role inference
    pub accent_min: u32,

    /// Upper bound (exclusive) for an accent-role inference
    pub accent_max: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::default_policy()
    }
}

impl ClassifierConfig {
    /// Create the default policy (reference baseline)
    pub fn default_policy() -> Self {
        Self {
            caps: BucketCaps {
                primary: caps::PRIMARY,
                accents: caps::ACCENTS,
                neutrals: caps::NEUTRALS,
                accent_display: caps::ACCENT_DISPLAY,
            },
            frequency: FrequencyThresholds {
                primary_min: frequency::PRIMARY_MIN,
                accent_min: frequency::ACCENT_MIN,
                accent_max: frequency::ACCENT_MAX,
            },
        }
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BrandError::config(format!("cannot read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| BrandError::config(format!("cannot parse {}", path.display()), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BrandError::config("cannot serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| BrandError::config(format!("cannot write {}", path.display()), e))?;
        Ok(())
    }

    /// Check that the policy values are internally consistent
    pub fn validate(&self) -> Result<()> {
        if self.caps.primary == 0 {
            return Err(BrandError::InvalidParameter {
                parameter: "caps.primary".into(),
                value: "0".into(),
            });
        }
        if self.frequency.accent_min >= self.frequency.accent_max {
            return Err(BrandError::InvalidParameter {
                parameter: "frequency.accent_min".into(),
                value: format!(
                    "{} (must be below accent_max = {})",
                    self.frequency.accent_min, self.frequency.accent_max
                ),
            });
        }
        Ok(())
    }
}
