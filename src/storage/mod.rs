// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Pronunciation, SectionDescriptor};
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Saves the extracted record as `<stem>_pronunciation.json`
    pub fn save_pronunciation(&self, stem: &str, record: &Pronunciation) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_pronunciation.json", stem));

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved pronunciation to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves metadata about the extraction run in JSON format
    pub fn save_metadata(
        &self,
        stem: &str,
        section: &SectionDescriptor,
        source: &str,
        record: &Pronunciation,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_pronunciation_meta.json", stem));

        let field_counts: serde_json::Map<String, serde_json::Value> = record
            .field_counts()
            .iter()
            .map(|(name, count)| (name.to_string(), serde_json::json!(count)))
            .collect();

        let metadata = serde_json::json!({
            "section_id": section.id,
            "source": source,
            "field_counts": field_counts,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pronunciation_extractor_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_save_pronunciation_and_metadata() {
        let dir = temp_dir("storage");
        let storage = StorageManager::new(&dir).unwrap();
        let record = Pronunciation {
            rhymes: Some(vec!["-æt".to_string(), "-ʌt".to_string()]),
            ..Default::default()
        };

        let path = storage.save_pronunciation("cat", &record).unwrap();
        assert!(path.ends_with("cat_pronunciation.json"));
        let saved: Pronunciation = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, record);

        let meta_path = storage
            .save_metadata("cat", &SectionDescriptor::new("Pronunciation"), "cat.html", &record)
            .unwrap();
        let meta: serde_json::Value = serde_json::from_str(&fs::read_to_string(&meta_path).unwrap()).unwrap();
        assert_eq!(meta["section_id"], "Pronunciation");
        assert_eq!(meta["field_counts"]["rhymes"], 2);
        assert_eq!(meta["field_counts"]["audioFiles"], 0);
        assert!(meta["extraction_timestamp"].is_string());

        fs::remove_dir_all(&dir).unwrap();
    }
}
