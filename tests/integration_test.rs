//! Integration tests for the brand classification engine
//!
//! These tests validate the classifiers end to end through the public API:
//! - Deterministic output for identical signal bundles
//! - Bucket cap and dedup invariants under adversarial input
//! - Rule priority ordering
//! - Confidence bounds and the fixed constant set
//! - Reference classification scenarios
//! - JSON contract shape for report compilers

use brandscan::{
    classify_branding, classify_colors, classify_fonts, ColorRole, ColorSignalBundle,
    PageSignals, TypographySignalBundle,
};

fn signals_from(json: &str) -> PageSignals {
    PageSignals::from_json_str(json).expect("test payload parses")
}

// ============================================================================
// Reference Scenarios
// ============================================================================

#[test]
fn test_scenario_semantic_variables() {
    let signals = signals_from(
        r##"{
        "color_palette": {
            "css_custom_properties": {
                "--primary-color": "#1a73e8",
                "--text-gray-500": "#888888"
            }
        }
    }"##,
    );
    let result = classify_colors(&signals.color_palette);

    assert_eq!(result.classification.primary, vec!["#1a73e8"]);
    assert_eq!(result.classification.neutrals, vec!["#888888"]);
    assert!(result.classification.accents.is_empty());
}

#[test]
fn test_scenario_tint_ladder_excluded() {
    let signals = signals_from(
        r##"{
        "color_palette": {
            "css_custom_properties": {
                "--color-blue-light": "#cce0ff",
                "--color-blue": "#0000ff"
            }
        }
    }"##,
    );
    let result = classify_colors(&signals.color_palette);

    assert_eq!(result.classification.accents, vec!["#0000ff"]);
    assert!(!result.confidence_scores.contains_key("#cce0ff"));
}

#[test]
fn test_scenario_frequency_inference() {
    let signals = signals_from(
        r##"{
        "color_palette": {
            "computed_colors": {"h1": {"color": "#ff0000"}},
            "color_frequency": {"#ff0000": 6}
        }
    }"##,
    );
    let result = classify_colors(&signals.color_palette);

    assert_eq!(result.classification.primary, vec!["#ff0000"]);
    let record = &result.confidence_scores["#ff0000"];
    assert_eq!(record.role, ColorRole::Primary);
    assert_eq!(record.confidence, 0.75);
}

#[test]
fn test_scenario_font_hierarchy() {
    let signals = signals_from(
        r#"{
        "typography": {
            "font_families_used": {
                "h1": {"fontFamily": "Georgia, serif"},
                "body": {"fontFamily": "Arial, sans-serif"},
                "code": {"fontFamily": "Fira Mono, monospace"}
            }
        }
    }"#,
    );
    let result = classify_fonts(&signals.typography);

    let c = &result.classification;
    assert_eq!(c.primary_heading.as_deref(), Some("Georgia"));
    assert_eq!(c.body_text.as_deref(), Some("Arial"));
    assert_eq!(c.monospace_code.as_deref(), Some("Fira Mono"));
}

#[test]
fn test_scenario_empty_bundles() {
    let profile = classify_branding(
        &ColorSignalBundle::default(),
        &TypographySignalBundle::default(),
    );

    assert!(profile.color_classification.primary.is_empty());
    assert!(profile.color_classification.accents.is_empty());
    assert!(profile.color_classification.neutrals.is_empty());
    assert!(profile.color_classification.utility.success.is_none());
    assert!(profile.color_confidence_scores.is_empty());
    assert!(profile.font_classification.primary_heading.is_none());
    assert!(profile.font_classification.accent_display.is_empty());
    assert!(profile.font_confidence_scores.is_empty());
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_identical_input_identical_output() {
    let payload = r##"{
        "color_palette": {
            "css_custom_properties": {
                "--brand": "#112233",
                "--accent-warm": "#ffaa00",
                "--gray-200": "#eeeeee",
                "--success": "#00aa44"
            },
            "computed_colors": {
                "a": {"color": "#0055ff"},
                "h2": {"backgroundColor": "#112244"}
            },
            "color_frequency": {"#0055ff": 4, "#112244": 9}
        },
        "typography": {
            "font_families_used": {
                "h1": {"fontFamily": "Playfair Display, serif"},
                "p": {"fontFamily": "Inter, sans-serif"},
                "button": {"fontFamily": "Oswald, sans-serif"}
            },
            "typeface_hierarchy": {
                "Inter, sans-serif": {"used_in": ["p", "body"], "sample_size": "16px"}
            }
        }
    }"##;

    let signals = signals_from(payload);
    let first = serde_json::to_string(&classify_branding(
        &signals.color_palette,
        &signals.typography,
    ))
    .unwrap();

    for _ in 0..20 {
        let signals = signals_from(payload);
        let again = serde_json::to_string(&classify_branding(
            &signals.color_palette,
            &signals.typography,
        ))
        .unwrap();
        assert_eq!(first, again, "classification must be byte-identical");
    }
}

// ============================================================================
// Cap Invariants (Adversarial Input)
// ============================================================================

#[test]
fn test_caps_hold_under_hundreds_of_candidates() {
    let mut bundle = ColorSignalBundle::default();
    for i in 0..300 {
        bundle.css_custom_properties.insert(
            format!("--brand-shade-{:03}", i),
            format!("#{:06x}", i),
        );
        bundle.css_custom_properties.insert(
            format!("--accent-shade-{:03}", i),
            format!("#{:06x}", 0x100000 + i),
        );
        bundle.css_custom_properties.insert(
            format!("--gray-shade-{:03}", i),
            format!("#{:06x}", 0x200000 + i),
        );
    }

    let result = classify_colors(&bundle);
    assert_eq!(result.classification.primary.len(), 2);
    assert_eq!(result.classification.accents.len(), 8);
    assert_eq!(result.classification.neutrals.len(), 5);
}

#[test]
fn test_accent_display_cap_holds() {
    let mut bundle = TypographySignalBundle::default();
    // Only four accent-display selectors exist, but pile distinct fonts on
    // repeated selector variants through the map anyway.
    for (i, selector) in ["button", ".btn", "nav", "strong"].iter().enumerate() {
        bundle.font_families_used.insert(
            selector.to_string(),
            brandscan::StyleRecord {
                font_family: format!("Display Face {}", i),
                ..Default::default()
            },
        );
    }

    let result = classify_fonts(&bundle);
    assert_eq!(result.classification.accent_display.len(), 3);
}

#[test]
fn test_truncation_drops_latest_not_highest() {
    // Earliest classified wins truncation; confidence plays no part.
    let mut bundle = ColorSignalBundle::default();
    bundle
        .css_custom_properties
        .insert("--color-red".to_string(), "#ff0000".to_string());
    bundle
        .css_custom_properties
        .insert("--accent-a".to_string(), "#000001".to_string());
    for i in 2..12 {
        bundle
            .css_custom_properties
            .insert(format!("--accent-{}", i), format!("#{:06x}", i));
    }

    let result = classify_colors(&bundle);
    // The 0.85-confidence named color arrived first and survives ahead of
    // later 0.90-confidence accents.
    assert_eq!(result.classification.accents[0], "#ff0000");
    assert_eq!(result.classification.accents.len(), 8);
}

// ============================================================================
// Dedup Invariants
// ============================================================================

#[test]
fn test_no_color_in_two_buckets() {
    let signals = signals_from(
        r##"{
        "color_palette": {
            "css_custom_properties": {
                "--primary": "#101010",
                "--accent": "#101010",
                "--white": "#101010",
                "--success": "#101010"
            },
            "computed_colors": {"h1": {"color": "#101010"}},
            "color_frequency": {"#101010": 99}
        }
    }"##,
    );
    let result = classify_colors(&signals.color_palette);
    let c = &result.classification;

    let mut memberships = 0;
    memberships += c.primary.iter().filter(|v| *v == "#101010").count();
    memberships += c.accents.iter().filter(|v| *v == "#101010").count();
    memberships += c.neutrals.iter().filter(|v| *v == "#101010").count();
    assert_eq!(memberships, 1, "value must live in exactly one list bucket");
    assert!(
        c.utility.success.is_none(),
        "a claimed value must not also fill a utility slot"
    );
    // Exactly one record, owned by the first classification.
    assert_eq!(result.confidence_scores.len(), 1);
    assert_eq!(result.confidence_scores["#101010"].role, ColorRole::Primary);
}

#[test]
fn test_no_font_in_two_exclusive_slots() {
    let signals = signals_from(
        r#"{
        "typography": {
            "font_families_used": {
                "h1": {"fontFamily": "Inter, sans-serif"},
                "body": {"fontFamily": "Inter, sans-serif"},
                "code": {"fontFamily": "Inter, sans-serif"}
            }
        }
    }"#,
    );
    let result = classify_fonts(&signals.typography);
    let c = &result.classification;

    assert_eq!(c.primary_heading.as_deref(), Some("Inter"));
    assert!(c.body_text.is_none());
    assert!(c.monospace_code.is_none());
    assert_eq!(result.confidence_scores.len(), 1);
}

// ============================================================================
// Priority Invariants
// ============================================================================

#[test]
fn test_primary_group_wins_over_accent_group() {
    // "--primary-brand-color" carries primary-group matches; a sibling name
    // matching both primary and accent groups must classify as primary.
    let signals = signals_from(
        r##"{
        "color_palette": {
            "css_custom_properties": {
                "--primary-brand-color": "#0b57d0",
                "--main-highlight": "#ffcc00"
            }
        }
    }"##,
    );
    let result = classify_colors(&signals.color_palette);

    assert_eq!(
        result.classification.primary,
        vec!["#0b57d0", "#ffcc00"],
        "names matching multiple groups take the first group in priority order"
    );
    assert!(result.classification.accents.is_empty());
    assert_eq!(
        result.confidence_scores["#ffcc00"].role,
        ColorRole::Primary
    );
}

#[test]
fn test_pass_one_completes_before_pass_two() {
    let signals = signals_from(
        r##"{
        "color_palette": {
            "css_custom_properties": {"--hero-bg": "#224466"},
            "computed_colors": {".hero": {"backgroundColor": "#224466"}},
            "color_frequency": {"#224466": 12}
        }
    }"##,
    );
    let result = classify_colors(&signals.color_palette);

    // Pass 1 owns the value; Pass 2 must not add a second membership or
    // downgrade the confidence.
    assert_eq!(result.classification.primary, vec!["#224466"]);
    assert_eq!(result.confidence_scores["#224466"].confidence, 0.95);
}

// ============================================================================
// Confidence Bounds
// ============================================================================

#[test]
fn test_emitted_confidence_values_from_fixed_set() {
    const ALLOWED: &[f32] = &[0.95, 0.90, 0.85, 0.75, 0.70, 0.65, 0.50];

    let signals = signals_from(
        r##"{
        "color_palette": {
            "css_custom_properties": {
                "--primary": "#000001",
                "--accent": "#000002",
                "--neutral-bg": "#000003",
                "--success": "#000004",
                "--danger": "#000005",
                "--warning": "#000006",
                "--info": "#000007",
                "--color-teal": "#000008"
            },
            "computed_colors": {
                "h2": {"color": "#000009"},
                "a": {"color": "#00000a"}
            },
            "color_frequency": {"#000009": 8, "#00000a": 3}
        },
        "typography": {
            "font_families_used": {
                "h1": {"fontFamily": "A Face"},
                "p": {"fontFamily": "B Face"},
                "em": {"fontFamily": "C Mono"},
                "nav": {"fontFamily": "D Face"}
            }
        }
    }"##,
    );
    let profile = classify_branding(&signals.color_palette, &signals.typography);

    for record in profile.color_confidence_scores.values() {
        assert!(record.confidence >= 0.0 && record.confidence <= 1.0);
        assert!(
            ALLOWED.iter().any(|c| (c - record.confidence).abs() < f32::EPSILON),
            "unexpected color confidence {}",
            record.confidence
        );
        assert!(!record.evidence.is_empty(), "every record carries evidence");
    }
    for record in profile.font_confidence_scores.values() {
        assert!(record.confidence >= 0.0 && record.confidence <= 1.0);
        assert!(
            ALLOWED.iter().any(|c| (c - record.confidence).abs() < f32::EPSILON),
            "unexpected font confidence {}",
            record.confidence
        );
        assert!(!record.evidence.is_empty());
    }
}

// ============================================================================
// Malformed and Sparse Input
// ============================================================================

#[test]
fn test_malformed_values_silently_unclassified() {
    let signals = signals_from(
        r#"{
        "color_palette": {
            "css_custom_properties": {
                "--spacing-unit": "1rem",
                "--primary-font": "not-a-color"
            }
        }
    }"#,
    );
    // "--primary-font" still matches the primary name group; the classifier
    // does not validate color syntax, per the input contract.
    let result = classify_colors(&signals.color_palette);
    assert_eq!(result.classification.primary, vec!["not-a-color"]);
    // "--spacing-unit" matches no group: no record, no bucket.
    assert!(!result.confidence_scores.contains_key("1rem"));
}

#[test]
fn test_missing_sections_treated_as_empty() {
    let signals = signals_from(r#"{"typography": {}}"#);
    let profile = classify_branding(&signals.color_palette, &signals.typography);
    assert!(profile.color_confidence_scores.is_empty());
    assert!(profile.font_confidence_scores.is_empty());
}

// ============================================================================
// JSON Contract Shape
// ============================================================================

#[test]
fn test_report_payload_shape() {
    let signals = signals_from(
        r##"{
        "color_palette": {
            "css_custom_properties": {"--primary": "#1a73e8", "--error-red": "#d93025"}
        },
        "typography": {
            "font_families_used": {"body": {"fontFamily": "Roboto, sans-serif"}},
            "typeface_hierarchy": {
                "Roboto, sans-serif": {"used_in": ["body"], "sample_size": "14px"}
            }
        }
    }"##,
    );
    let profile = classify_branding(&signals.color_palette, &signals.typography);
    let json = serde_json::to_value(&profile).unwrap();

    assert_eq!(json["color_classification"]["primary"][0], "#1a73e8");
    assert_eq!(json["color_classification"]["utility"]["error"], "#d93025");
    assert_eq!(
        json["color_confidence_scores"]["#d93025"]["role"],
        "utility_error"
    );
    assert_eq!(
        json["color_confidence_scores"]["#1a73e8"]["evidence"][0],
        "CSS variable name: --primary"
    );
    assert_eq!(json["font_classification"]["body_text"], "Roboto");
    assert_eq!(
        json["font_confidence_scores"]["Roboto"]["role"],
        "body_text"
    );
    assert_eq!(
        json["font_confidence_scores"]["Roboto"]["used_in_elements"][0],
        "body"
    );
    assert_eq!(
        json["font_confidence_scores"]["Roboto"]["sample_size"],
        "14px"
    );
    // Classification output echoes input values verbatim; no reformatting.
    assert_eq!(json["color_classification"]["primary"][0], "#1a73e8");
}
