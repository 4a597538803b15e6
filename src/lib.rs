// src/lib.rs
//! Extracts pronunciation data (IPA transcriptions, audio files, rhymes,
//! homophones, hyphenation) from the pronunciation section of a
//! dictionary-style HTML entry page.
//!
//! ```no_run
//! use pronunciation_extractor::{PronunciationExtractor, SectionDescriptor};
//!
//! let html = std::fs::read_to_string("cat.html").unwrap();
//! let record = PronunciationExtractor::new()
//!     .extract_from_html(&html, &SectionDescriptor::new("Pronunciation"));
//! println!("{:?}", record);
//! ```

pub mod config;
pub mod extractors;
pub mod models;
pub mod storage;
pub mod utils;

pub use config::{ExtractorConfig, SelectorConfig};
pub use extractors::{ListStrategy, PronunciationBuilder, PronunciationExtractor, SectionStrategy};
pub use models::{AudioFile, Pronunciation, SectionDescriptor, Transcription};
pub use utils::error::{AppError, ExtractError, StorageError};
