// src/config.rs
//! Extractor configuration: the selector catalogue, section naming and the
//! label inference tables. Every field has a default, so a JSON file only
//! needs to name what it overrides:
//!
//! ```json
//! { "selectors": { "ipa": "span.IPA, span.ipa" }, "headingText": "Aussprache" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::extractors::labels::LabelRule;
use crate::utils::error::ExtractError;

/// CSS selector strings, keyed by the role they play in a pronunciation section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub list: String,
    pub item: String,
    pub ipa: String,
    pub audio: String,
    pub source: String,
    pub headings: String, // Heading levels searched when the id lookup fails
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            list: "ul".to_string(),
            item: "li".to_string(),
            ipa: "span.IPA".to_string(),
            audio: "audio".to_string(),
            source: "source".to_string(),
            headings: "h2, h3, h4".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractorConfig {
    pub selectors: SelectorConfig,
    /// Substring a heading's text must contain to count as the section heading.
    pub heading_text: String,
    /// Element id probed as the last resort, independent of the descriptor.
    pub fixed_section_id: String,
    /// Attribute of the audio source element holding the file locator.
    pub source_attribute: String,
    /// Dialect rules applied to an item's inner HTML for transcriptions.
    pub transcription_dialects: Vec<LabelRule>,
    /// Dialect used when no transcription rule matches.
    pub default_dialect: String,
    /// Region rules applied to an item's text for audio files.
    pub audio_labels: Vec<LabelRule>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            selectors: SelectorConfig::default(),
            heading_text: "Pronunciation".to_string(),
            fixed_section_id: "Pronunciation".to_string(),
            source_attribute: "src".to_string(),
            transcription_dialects: vec![
                LabelRule::new(&["US", "American"], "American English"),
                LabelRule::new(&["UK", "British"], "British English"),
                LabelRule::new(&["Australia"], "Australian English"),
            ],
            default_dialect: "English".to_string(),
            audio_labels: vec![
                LabelRule::new(&["US", "American"], "US"),
                LabelRule::new(&["UK", "British"], "UK"),
                LabelRule::new(&["Australia"], "Australia"),
            ],
        }
    }
}

impl ExtractorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ExtractError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ExtractError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        tracing::debug!("Loading extractor config from {}", path.display());
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ExtractError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    /// Rejects values that would make a strategy match everything.
    fn validate(&self) -> Result<(), ExtractError> {
        if self.heading_text.trim().is_empty() {
            return Err(ExtractError::InvalidConfig("headingText must not be empty".to_string()));
        }
        let rules = self.transcription_dialects.iter().chain(&self.audio_labels);
        for rule in rules {
            if rule.patterns.iter().any(|p| p.is_empty()) {
                return Err(ExtractError::InvalidConfig(format!(
                    "label rule '{}' has an empty pattern",
                    rule.label
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ExtractorConfig::from_json_str(
            r#"{ "selectors": { "ipa": "span.ipa" }, "defaultDialect": "General" }"#,
        )
        .unwrap();
        assert_eq!(config.selectors.ipa, "span.ipa");
        assert_eq!(config.selectors.list, "ul");
        assert_eq!(config.default_dialect, "General");
        assert_eq!(config.heading_text, "Pronunciation");
        assert_eq!(config.audio_labels.len(), 3);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            ExtractorConfig::from_json_str("{ not json"),
            Err(ExtractError::InvalidConfig(_))
        ));
        assert!(matches!(
            ExtractorConfig::from_json_str(r#"{ "headingText": "  " }"#),
            Err(ExtractError::InvalidConfig(_))
        ));
        assert!(matches!(
            ExtractorConfig::from_json_str(r#"{ "audioLabels": [{ "patterns": [""], "label": "X" }] }"#),
            Err(ExtractError::InvalidConfig(_))
        ));
    }
}
