// src/utils/html_debug.rs
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::utils::error::AppError;

/// Patterns highlighted in debug dumps of a dictionary page, with their kind.
pub const PRONUNCIATION_DEBUG_PATTERNS: &[(&str, &str)] = &[
    (r"(?i)<h[2-4][^>]*>[^<]*Pronunciation[^<]*</h[2-4]>", "heading"),
    (r#"<[^>]+id="Pronunciation[^"]*"[^>]*>"#, "heading"),
    (r#"<span[^>]*class="[^"]*\bIPA\b[^"]*"[^>]*>[^<]*</span>"#, "ipa"),
    (r"<audio\b", "audio"),
    (r"Rhymes:", "marker"),
    (r"Homophones:", "marker"),
    (r"Hyphenation:", "marker"),
];

/// Wraps every match of the given patterns in a highlighting span.
/// Overlapping matches keep the one that starts first.
pub fn annotate_html(html: &str, patterns: &[(&str, &str)]) -> Result<String, AppError> {
    let mut highlights = Vec::new();
    for (pattern, kind) in patterns {
        let re = Regex::new(pattern).map_err(|e| {
            AppError::Config(format!("Invalid regex pattern '{}': {}", pattern, e))
        })?;
        highlights.extend(re.find_iter(html).map(|m| (m.start(), m.end(), *kind)));
    }
    highlights.sort_by_key(|h| (h.0, std::cmp::Reverse(h.1)));

    let mut annotated = String::from("<!DOCTYPE html>\n<html>\n<head>\n<style>\n");
    annotated.push_str(".hl-heading { background-color: #90EE90; }\n");
    annotated.push_str(".hl-ipa { background-color: #FFFF00; }\n");
    annotated.push_str(".hl-audio { background-color: #ADD8E6; }\n");
    annotated.push_str(".hl-marker { background-color: #FFA500; }\n");
    annotated.push_str("</style>\n</head>\n<body>\n");

    let mut last_pos = 0;
    for (start, end, kind) in highlights {
        if start < last_pos {
            continue;
        }
        annotated.push_str(&html[last_pos..start]);
        annotated.push_str(&format!("<span class=\"hl-{}\" title=\"{}: {}-{}\">", kind, kind, start, end));
        annotated.push_str(&html[start..end]);
        annotated.push_str("</span>");
        last_pos = end;
    }
    annotated.push_str(&html[last_pos..]);
    annotated.push_str("\n</body>\n</html>");

    Ok(annotated)
}

/// Writes an annotated copy of `html` to `filename`.
pub fn create_debug_html<P: AsRef<Path>>(html: &str, filename: P, patterns: &[(&str, &str)]) -> Result<(), AppError> {
    let path = filename.as_ref();
    let annotated = annotate_html(html, patterns)?;
    fs::write(path, annotated)?;
    tracing::info!("Saved debug HTML to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_and_ipa_are_highlighted() {
        let html = r#"<h3 id="Pronunciation">Pronunciation</h3><ul><li>IPA: <span class="IPA">/kæt/</span></li><li>Rhymes: -æt</li></ul>"#;
        let annotated = annotate_html(html, PRONUNCIATION_DEBUG_PATTERNS).unwrap();

        assert!(annotated.contains(r#"<span class="hl-ipa""#));
        assert!(annotated.contains(r#"<span class="hl-marker""#));
        // The heading matches two patterns; only one span wraps it.
        assert_eq!(annotated.matches(r#"<span class="hl-heading""#).count(), 1);
        assert!(annotated.contains("/kæt/"));
    }

    #[test]
    fn test_invalid_pattern_is_a_config_error() {
        let result = annotate_html("<p></p>", &[("(unclosed", "marker")]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
