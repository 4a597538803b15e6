// src/models.rs
use serde::{Deserialize, Serialize};

/// Notation system recorded on every transcription this crate emits.
pub const IPA_SYSTEM: &str = "IPA";

/// Where the caller expects the pronunciation section to live.
/// `id` may carry a leading `#`; it is matched against element ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    pub id: String,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The identifier with a single leading `#` removed.
    pub fn bare_id(&self) -> &str {
        self.id.strip_prefix('#').unwrap_or(&self.id)
    }
}

/// A phonetic rendering of the headword in one dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcription {
    pub system: String, // Always "IPA" for now
    pub key: String,    // Dialect label, e.g. "American English"
    pub value: String,  // The phonetic string as written, e.g. "/kæt/"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFile {
    pub value: String, // Resource locator taken from the audio source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>, // Region tags; None when nothing was inferred
}

/// Partial pronunciation record. A field is `Some` only when at least one
/// value was extracted for it, never `Some(vec![])`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pronunciation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcriptions: Option<Vec<Transcription>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_files: Option<Vec<AudioFile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rhymes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homophones: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyphenation: Option<Vec<String>>,
}

impl Pronunciation {
    /// Number of values held per field, in declaration order. Used for
    /// logging and the metadata file.
    pub fn field_counts(&self) -> [(&'static str, usize); 5] {
        fn len<T>(v: &Option<Vec<T>>) -> usize {
            v.as_ref().map_or(0, Vec::len)
        }
        [
            ("transcriptions", len(&self.transcriptions)),
            ("audioFiles", len(&self.audio_files)),
            ("rhymes", len(&self.rhymes)),
            ("homophones", len(&self.homophones)),
            ("hyphenation", len(&self.hyphenation)),
        ]
    }
}
