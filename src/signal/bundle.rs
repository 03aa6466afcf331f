//! Signal bundle types matching the extraction layer's JSON payload.
//!
//! Every mapping that carries meaning through its iteration order (CSS
//! custom properties, per-selector style maps, the typeface hierarchy) is an
//! [`IndexMap`]: classification outcomes depend on first-seen order, so a
//! hash map would make results nondeterministic across runs.
//!
//! All fields default to empty so sparse bundles deserialize cleanly; absent
//! sub-structures are treated as empty mappings rather than errors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BrandError, Result};

/// Color signals for one page: CSS variables, per-selector computed colors,
/// and global frequency counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSignalBundle {
    /// CSS custom property name → color value, in declaration order
    pub css_custom_properties: IndexMap<String, String>,

    /// Selector → style property (`color`, `backgroundColor`, `borderColor`)
    /// → normalized color value
    pub computed_colors: IndexMap<String, IndexMap<String, String>>,

    /// Most frequent colors, as ranked by the extraction layer
    pub primary_colors: Vec<String>,

    /// Normalized color value → occurrence count across the selector set
    pub color_frequency: IndexMap<String, u32>,
}

/// Typography signals for one page: font services, per-selector styles, and
/// the typeface usage hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographySignalBundle {
    /// Web font services detected from network requests
    pub web_font_services: Vec<String>,

    /// Selector → computed typography styles, in extraction order
    pub font_families_used: IndexMap<String, StyleRecord>,

    /// URLs of self-hosted font files loaded by the page
    pub custom_fonts_loaded: Vec<String>,

    /// Font family names extracted from Google Fonts request URLs
    pub google_fonts_detected: Vec<String>,

    /// Raw font-family declaration → usage info
    pub typeface_hierarchy: IndexMap<String, TypefaceUsage>,
}

/// Computed typography styles for one selector.
///
/// Field names are camelCase on the wire, matching `getComputedStyle` output
/// recorded by the extraction layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleRecord {
    /// Raw font-family declaration, fallbacks included
    pub font_family: String,

    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub font_style: Option<String>,
    pub line_height: Option<String>,
    pub letter_spacing: Option<String>,
    pub text_transform: Option<String>,
}

/// Where and how a font family is used on the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypefaceUsage {
    /// Selectors the family was observed in, in extraction order
    pub used_in: Vec<String>,

    /// Font size sampled from the first observing selector
    pub sample_size: Option<String>,

    /// Font weight sampled from the first observing selector
    pub sample_weight: Option<String>,
}

/// The full signal payload for one page, as written by the extraction layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSignals {
    pub color_palette: ColorSignalBundle,
    pub typography: TypographySignalBundle,
}

impl PageSignals {
    /// Parse a signal payload from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| BrandError::signal_load("signal payload is not valid JSON", e))
    }

    /// Load a signal payload from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BrandError::signal_load(format!("cannot read {}", path.display()), e))?;
        Self::from_json_str(&content)
    }
}
