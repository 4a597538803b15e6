// src/extractors/pronunciation.rs

// --- Imports ---
use crate::config::ExtractorConfig;
use crate::extractors::labels::LabelTable;
use crate::extractors::selectors::{SelectorCatalogue, DEFAULT_CATALOGUE, ID_SELECTOR};
use crate::models::{AudioFile, Pronunciation, SectionDescriptor, Transcription, IPA_SYSTEM};
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

// --- Marker Patterns (Lazy Static) ---
// Capture runs from the marker to the end of its line.
static RHYMES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Rhymes:\s*(.+)").expect("Failed to compile RHYMES_RE")
});

static HOMOPHONES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Homophones:\s*(.+)").expect("Failed to compile HOMOPHONES_RE")
});

static HYPHENATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Hyphenation:\s*(.+)").expect("Failed to compile HYPHENATION_RE")
});

// --- Section Locator ---

/// Ways of finding the container that holds the pronunciation section,
/// from most to least precise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStrategy {
    /// Element whose id equals the descriptor's bare id; root is its parent.
    ElementId,
    /// First heading whose text contains the heading text; root is its parent.
    HeadingText,
    /// Element whose id equals the fixed fallback id; root is its parent.
    FixedId,
}

impl SectionStrategy {
    pub const ORDER: [SectionStrategy; 3] = [Self::ElementId, Self::HeadingText, Self::FixedId];

    pub fn name(self) -> &'static str {
        match self {
            Self::ElementId => "element id",
            Self::HeadingText => "heading text",
            Self::FixedId => "fixed id",
        }
    }

    pub fn locate<'a>(
        self,
        extractor: &PronunciationExtractor,
        document: &'a Html,
        section: &SectionDescriptor,
    ) -> Option<ElementRef<'a>> {
        match self {
            Self::ElementId => {
                let bare = section.bare_id();
                if bare.is_empty() {
                    tracing::debug!("Empty section id, skipping id lookup");
                    return None;
                }
                find_by_id(document, bare).and_then(parent_element)
            }
            Self::HeadingText => extractor.section_headings(document).next().and_then(parent_element),
            Self::FixedId => find_by_id(document, &extractor.fixed_section_id).and_then(parent_element),
        }
    }
}

// --- List Resolver ---

/// Ways of finding the list of sub-entries once a section root is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStrategy {
    /// The element right after the root, if it is a list.
    NextSibling,
    /// The first list nested inside the root.
    Descendant,
    /// The list right after a section heading, ignoring the root.
    HeadingSibling,
}

impl ListStrategy {
    pub const ORDER: [ListStrategy; 3] = [Self::NextSibling, Self::Descendant, Self::HeadingSibling];

    pub fn name(self) -> &'static str {
        match self {
            Self::NextSibling => "next sibling",
            Self::Descendant => "descendant",
            Self::HeadingSibling => "heading sibling",
        }
    }

    pub fn resolve<'a>(
        self,
        extractor: &PronunciationExtractor,
        document: &'a Html,
        root: ElementRef<'a>,
    ) -> Option<ElementRef<'a>> {
        let list = &extractor.selectors.list;
        match self {
            Self::NextSibling => next_element_sibling(root).filter(|el| list.matches(el)),
            Self::Descendant => root.select(list).next(),
            Self::HeadingSibling => extractor
                .section_headings(document)
                .find_map(|heading| next_element_sibling(heading).filter(|el| list.matches(el))),
        }
    }
}

// --- Record Assembler ---

/// Accumulates values across all items of a section.
#[derive(Debug, Default)]
pub struct PronunciationBuilder {
    transcriptions: Vec<Transcription>,
    audio_files: Vec<AudioFile>,
    rhymes: Vec<String>,
    homophones: Vec<String>,
    hyphenation: Vec<String>,
}

impl PronunciationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_transcription(&mut self, transcription: Transcription) {
        self.transcriptions.push(transcription);
    }

    pub fn push_audio_file(&mut self, audio_file: AudioFile) {
        self.audio_files.push(audio_file);
    }

    pub fn extend_rhymes<I: IntoIterator<Item = String>>(&mut self, values: I) {
        self.rhymes.extend(values);
    }

    pub fn extend_homophones<I: IntoIterator<Item = String>>(&mut self, values: I) {
        self.homophones.extend(values);
    }

    pub fn extend_hyphenation<I: IntoIterator<Item = String>>(&mut self, values: I) {
        self.hyphenation.extend(values);
    }

    pub fn is_empty(&self) -> bool {
        self.transcriptions.is_empty()
            && self.audio_files.is_empty()
            && self.rhymes.is_empty()
            && self.homophones.is_empty()
            && self.hyphenation.is_empty()
    }

    /// Builds the record with only the populated fields, or `None` if
    /// nothing was collected.
    pub fn build(self) -> Option<Pronunciation> {
        if self.is_empty() {
            return None;
        }
        Some(Pronunciation {
            transcriptions: non_empty(self.transcriptions),
            audio_files: non_empty(self.audio_files),
            rhymes: non_empty(self.rhymes),
            homophones: non_empty(self.homophones),
            hyphenation: non_empty(self.hyphenation),
        })
    }
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() { None } else { Some(values) }
}

// --- Main Extractor Structure ---
#[derive(Debug, Clone)]
pub struct PronunciationExtractor {
    selectors: SelectorCatalogue,
    heading_text: String,
    fixed_section_id: String,
    source_attribute: String,
    dialects: LabelTable,
    default_dialect: String,
    regions: LabelTable,
}

impl Default for PronunciationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PronunciationExtractor {
    /// Extractor over the default selector catalogue and label tables.
    pub fn new() -> Self {
        let config = ExtractorConfig::default();
        Self::assemble(DEFAULT_CATALOGUE.clone(), config)
    }

    pub fn with_config(config: &ExtractorConfig) -> Result<Self, ExtractError> {
        let selectors = SelectorCatalogue::compile(&config.selectors)?;
        Ok(Self::assemble(selectors, config.clone()))
    }

    fn assemble(selectors: SelectorCatalogue, config: ExtractorConfig) -> Self {
        Self {
            selectors,
            heading_text: config.heading_text,
            fixed_section_id: config.fixed_section_id,
            source_attribute: config.source_attribute,
            dialects: LabelTable::new(config.transcription_dialects),
            default_dialect: config.default_dialect,
            regions: LabelTable::new(config.audio_labels),
        }
    }

    /// Parses a full HTML page and extracts the pronunciation section from it.
    pub fn extract_from_html(&self, html_content: &str, section: &SectionDescriptor) -> Option<Pronunciation> {
        let document = Html::parse_document(html_content);
        self.extract(&document, section)
    }

    /// Locates the section, resolves its list and collects every field from
    /// its items. `None` means nothing usable was found, for whatever reason.
    pub fn extract(&self, document: &Html, section: &SectionDescriptor) -> Option<Pronunciation> {
        tracing::debug!("Pronunciation extraction requested for section: {:?}", section);

        let root = self.locate_section(document, section)?;
        let list = self.resolve_list(document, root)?;

        let mut builder = PronunciationBuilder::new();
        let mut item_count = 0;
        for item in list.select(&self.selectors.item) {
            self.extract_item(item, &mut builder);
            item_count += 1;
        }
        tracing::debug!("Processed {} pronunciation items", item_count);

        let record = builder.build();
        match &record {
            Some(pronunciation) => tracing::info!("Extracted pronunciation: {:?}", pronunciation.field_counts()),
            None => tracing::info!("Pronunciation list held no extractable values"),
        }
        record
    }

    /// Resolves the section descriptor to its enclosing container.
    pub fn locate_section<'a>(&self, document: &'a Html, section: &SectionDescriptor) -> Option<ElementRef<'a>> {
        let found = SectionStrategy::ORDER.iter().find_map(|strategy| {
            let root = strategy.locate(self, document, section);
            if root.is_none() {
                tracing::debug!("Pronunciation section not found by {}", strategy.name());
            }
            root.map(|root| (*strategy, root))
        });

        match found {
            Some((strategy, root)) => {
                tracing::info!("Pronunciation section found by {} in <{}>", strategy.name(), root.value().name());
                Some(root)
            }
            None => {
                tracing::info!("Pronunciation section not found for id '{}'", section.id);
                None
            }
        }
    }

    /// Finds the list of pronunciation sub-entries for a located section.
    pub fn resolve_list<'a>(&self, document: &'a Html, root: ElementRef<'a>) -> Option<ElementRef<'a>> {
        let found = ListStrategy::ORDER.iter().find_map(|strategy| {
            let list = strategy.resolve(self, document, root);
            if list.is_none() {
                tracing::debug!("No pronunciation list found as {}", strategy.name());
            }
            list.map(|list| (*strategy, list))
        });

        match found {
            Some((strategy, list)) => {
                tracing::debug!("Pronunciation list found as {}", strategy.name());
                Some(list)
            }
            None => {
                tracing::info!("No pronunciation list found");
                None
            }
        }
    }

    /// Runs every field pass over a single sub-entry.
    pub fn extract_item(&self, item: ElementRef, builder: &mut PronunciationBuilder) {
        let item_text = item.text().collect::<String>();
        tracing::trace!("Processing pronunciation item: '{}'", item_text.trim());

        self.extract_transcriptions(item, builder);
        self.extract_audio_files(item, &item_text, builder);

        builder.extend_rhymes(split_marker(&RHYMES_RE, &item_text));
        builder.extend_homophones(split_marker(&HOMOPHONES_RE, &item_text));
        builder.extend_hyphenation(split_marker(&HYPHENATION_RE, &item_text));
    }

    fn extract_transcriptions(&self, item: ElementRef, builder: &mut PronunciationBuilder) {
        let mut ipa_elements = item.select(&self.selectors.ipa).peekable();
        if ipa_elements.peek().is_none() {
            return;
        }

        // The dialect is inferred from the whole item, not the element itself.
        let item_html = item.inner_html();
        let dialect = self.dialects.infer(&item_html).unwrap_or(self.default_dialect.as_str());

        for ipa in ipa_elements {
            let value = ipa.text().collect::<String>();
            if value.is_empty() {
                continue;
            }
            builder.push_transcription(Transcription {
                system: IPA_SYSTEM.to_string(),
                key: dialect.to_string(),
                value,
            });
        }
    }

    fn extract_audio_files(&self, item: ElementRef, item_text: &str, builder: &mut PronunciationBuilder) {
        let label = self.regions.infer(item_text);

        for audio in item.select(&self.selectors.audio) {
            let src = audio
                .select(&self.selectors.source)
                .next()
                .and_then(|source| source.value().attr(&self.source_attribute));

            match src {
                Some(src) => builder.push_audio_file(AudioFile {
                    value: src.to_string(),
                    labels: label.map(|l| vec![l.to_string()]),
                }),
                None => tracing::trace!("Audio element without a '{}' source, skipping", self.source_attribute),
            }
        }
    }

    fn section_headings<'a, 'b>(&'b self, document: &'a Html) -> impl Iterator<Item = ElementRef<'a>> + 'b
    where
        'a: 'b,
    {
        document
            .select(&self.selectors.headings)
            .filter(move |heading| heading.text().collect::<String>().trim().contains(self.heading_text.as_str()))
    }
}

// --- DOM Helpers ---

fn find_by_id<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    document.select(&ID_SELECTOR).find(|el| el.value().id() == Some(id))
}

fn parent_element(element: ElementRef) -> Option<ElementRef> {
    element.parent().and_then(ElementRef::wrap)
}

fn next_element_sibling(element: ElementRef) -> Option<ElementRef> {
    element.next_siblings().find_map(ElementRef::wrap)
}

/// Comma-separated values following a marker, trimmed, empties dropped.
fn split_marker(marker: &Regex, text: &str) -> Vec<String> {
    marker
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| {
            m.as_str()
                .split(',')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
