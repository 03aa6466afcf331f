//! Web font service detection
//!
//! Matches the page's logged request URLs against known font service
//! signatures. Pure function of the URL list: no requests are made here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A known web font service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontService {
    GoogleFonts,
    AdobeFonts,
    FontAwesome,
    #[serde(rename = "Fonts.com")]
    FontsCom,
    #[serde(rename = "Hoefler&Co")]
    HoeflerCo,
    MyFonts,
    /// Self-hosted font files (woff/woff2/ttf/otf/eot)
    CustomWebFonts,
}

impl FontService {
    /// Service name as reported in extraction payloads
    pub fn label(&self) -> &'static str {
        match self {
            FontService::GoogleFonts => "GoogleFonts",
            FontService::AdobeFonts => "AdobeFonts",
            FontService::FontAwesome => "FontAwesome",
            FontService::FontsCom => "Fonts.com",
            FontService::HoeflerCo => "Hoefler&Co",
            FontService::MyFonts => "MyFonts",
            FontService::CustomWebFonts => "CustomWebFonts",
        }
    }
}

struct ServiceSignature {
    service: FontService,
    patterns: Vec<Regex>,
}

fn signature(service: FontService, patterns: &[&str]) -> ServiceSignature {
    ServiceSignature {
        service,
        patterns: patterns
            .iter()
            .map(|p| Regex::new(&format!("(?i){}", p)).expect("valid signature regex"))
            .collect(),
    }
}

/// URL signatures per service. A URL may credit several services; within one
/// service the first matching pattern settles it.
static SIGNATURES: Lazy<Vec<ServiceSignature>> = Lazy::new(|| {
    vec![
        signature(
            FontService::GoogleFonts,
            &[r"fonts\.googleapis\.com", r"fonts\.gstatic\.com"],
        ),
        signature(
            FontService::AdobeFonts,
            &[r"use\.typekit\.net", r"typekit\.com", r"use\.edgefonts\.net"],
        ),
        signature(
            FontService::FontAwesome,
            &[
                r"fontawesome\.com",
                r"pro\.fontawesome\.com",
                r"kit\.fontawesome\.com",
            ],
        ),
        signature(FontService::FontsCom, &[r"fast\.fonts\.net"]),
        signature(FontService::HoeflerCo, &[r"cloud\.typography\.com"]),
        signature(FontService::MyFonts, &[r"hello\.myfonts\.net"]),
        signature(
            FontService::CustomWebFonts,
            &[
                r"\.woff2?(\?|$)",
                r"\.ttf(\?|$)",
                r"\.otf(\?|$)",
                r"\.eot(\?|$)",
            ],
        ),
    ]
});

static GOOGLE_FONTS_FAMILY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"family=([^&]+)").expect("valid family regex"));

/// Font services observed in a page's network requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontServiceDetection {
    /// Services in order of first appearance
    pub web_font_services: Vec<FontService>,

    /// URLs of self-hosted font files, deduplicated
    pub custom_fonts_loaded: Vec<String>,

    /// Family names extracted from Google Fonts request URLs
    pub google_fonts_detected: Vec<String>,
}

/// Detect font services from the logged request URLs of one page.
pub fn detect_font_services<S: AsRef<str>>(request_urls: &[S]) -> FontServiceDetection {
    let mut detection = FontServiceDetection::default();

    for url in request_urls {
        let url = url.as_ref();
        for sig in SIGNATURES.iter() {
            if !sig.patterns.iter().any(|p| p.is_match(url)) {
                continue;
            }
            trace!(service = sig.service.label(), url, "font service signature hit");

            match sig.service {
                FontService::CustomWebFonts => {
                    if !detection.custom_fonts_loaded.iter().any(|u| u == url) {
                        detection.custom_fonts_loaded.push(url.to_string());
                    }
                }
                FontService::GoogleFonts => {
                    for family in extract_google_families(url) {
                        if !detection.google_fonts_detected.contains(&family) {
                            detection.google_fonts_detected.push(family);
                        }
                    }
                }
                _ => {}
            }

            if !detection.web_font_services.contains(&sig.service) {
                detection.web_font_services.push(sig.service);
            }
        }
    }

    detection
}

/// Pull family names out of a Google Fonts request URL.
///
/// Families are `|`-separated in the `family=` query param; `+` encodes a
/// space and anything after `:` is a variant suffix.
fn extract_google_families(url: &str) -> Vec<String> {
    let Some(captures) = GOOGLE_FONTS_FAMILY.captures(url) else {
        return Vec::new();
    };
    captures[1]
        .split('|')
        .filter_map(|font| font.split(':').next())
        .filter(|name| !name.is_empty())
        .map(|name| name.replace('+', " "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_fonts_detection() {
        let urls = [
            "https://fonts.googleapis.com/css?family=Roboto:400,700|Open+Sans",
            "https://fonts.gstatic.com/s/roboto/v30/abc.woff2",
        ];
        let detection = detect_font_services(&urls);

        assert!(detection
            .web_font_services
            .contains(&FontService::GoogleFonts));
        assert_eq!(
            detection.google_fonts_detected,
            vec!["Roboto".to_string(), "Open Sans".to_string()]
        );
    }

    #[test]
    fn test_custom_font_urls_collected_and_deduped() {
        let urls = [
            "https://example.com/fonts/brand.woff2",
            "https://example.com/fonts/brand.woff2",
            "https://example.com/fonts/brand.ttf?v=2",
        ];
        let detection = detect_font_services(&urls);

        assert_eq!(
            detection.custom_fonts_loaded,
            vec![
                "https://example.com/fonts/brand.woff2".to_string(),
                "https://example.com/fonts/brand.ttf?v=2".to_string(),
            ]
        );
        assert_eq!(
            detection.web_font_services,
            vec![FontService::CustomWebFonts]
        );
    }

    #[test]
    fn test_url_can_credit_multiple_services() {
        // A gstatic woff2 file is both GoogleFonts and a custom font file.
        let urls = ["https://fonts.gstatic.com/s/roboto/v30/abc.woff2"];
        let detection = detect_font_services(&urls);

        assert_eq!(
            detection.web_font_services,
            vec![FontService::GoogleFonts, FontService::CustomWebFonts]
        );
    }

    #[test]
    fn test_case_insensitive_matching() {
        let urls = ["https://USE.TYPEKIT.NET/abc123.css"];
        let detection = detect_font_services(&urls);
        assert_eq!(detection.web_font_services, vec![FontService::AdobeFonts]);
    }

    #[test]
    fn test_unrelated_urls_ignored() {
        let urls = ["https://example.com/app.js", "https://example.com/logo.png"];
        let detection = detect_font_services(&urls);
        assert_eq!(detection, FontServiceDetection::default());
    }

    #[test]
    fn test_service_labels_serialize_as_reported() {
        assert_eq!(
            serde_json::to_string(&FontService::FontsCom).unwrap(),
            "\"Fonts.com\""
        );
        assert_eq!(
            serde_json::to_string(&FontService::HoeflerCo).unwrap(),
            "\"Hoefler&Co\""
        );
        assert_eq!(FontService::GoogleFonts.label(), "GoogleFonts");
    }

    #[test]
    fn test_empty_input() {
        let detection = detect_font_services::<&str>(&[]);
        assert_eq!(detection, FontServiceDetection::default());
    }
}
