//! Raw design signals extracted from a rendered page
//!
//! The bundle types mirror the JSON payload produced by the external page
//! extraction layer; the normalization helpers put loosely formatted color
//! and font strings into the forms the classifiers key on.

pub mod bundle;
pub mod normalize;

pub use bundle::{
    ColorSignalBundle, PageSignals, StyleRecord, TypefaceUsage, TypographySignalBundle,
};
pub use normalize::{clean_font_name, is_color_value, normalize_color_value};
