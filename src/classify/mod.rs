//! Classification engine: heuristic role inference for colors, typefaces,
//! and font services.

pub mod color;
pub mod confidence;
pub mod font;
pub mod services;

pub use color::{classify_colors, ClassifiedColors, ColorClassification, ColorClassifier, UtilityColors};
pub use confidence::{ColorRole, ConfidenceMap, ConfidenceRecord, FontRole};
pub use font::{classify_fonts, ClassifiedFonts, FontClassification, FontClassifier};
pub use services::{detect_font_services, FontService, FontServiceDetection};
