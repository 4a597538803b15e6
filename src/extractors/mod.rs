// src/extractors/mod.rs
pub mod labels;
pub mod pronunciation;
pub mod selectors;

// Re-export key extraction types for convenience
pub use labels::{LabelRule, LabelTable};
pub use pronunciation::{
    ListStrategy,
    PronunciationBuilder,
    PronunciationExtractor,
    SectionStrategy,
};
pub use selectors::SelectorCatalogue;
