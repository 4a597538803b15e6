// src/extractors/selectors.rs
use once_cell::sync::Lazy;
use scraper::Selector;

use crate::config::SelectorConfig;
use crate::utils::error::ExtractError;

/// The default catalogue, compiled once.
pub static DEFAULT_CATALOGUE: Lazy<SelectorCatalogue> = Lazy::new(|| {
    SelectorCatalogue::compile(&SelectorConfig::default())
        .expect("Failed to compile DEFAULT_CATALOGUE")
});

/// Matches every element carrying an `id` attribute.
pub static ID_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("[id]").expect("Failed to compile ID_SELECTOR")
});

/// Compiled selectors for each role in a pronunciation section.
#[derive(Debug, Clone)]
pub struct SelectorCatalogue {
    pub list: Selector,
    pub item: Selector,
    pub ipa: Selector,
    pub audio: Selector,
    pub source: Selector,
    pub headings: Selector,
}

impl SelectorCatalogue {
    pub fn compile(config: &SelectorConfig) -> Result<Self, ExtractError> {
        Ok(Self {
            list: parse("list", &config.list)?,
            item: parse("item", &config.item)?,
            ipa: parse("ipa", &config.ipa)?,
            audio: parse("audio", &config.audio)?,
            source: parse("source", &config.source)?,
            headings: parse("headings", &config.headings)?,
        })
    }
}

fn parse(role: &str, css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::InvalidSelector {
        role: role.to_string(),
        selector: css.to_string(),
        reason: format!("{:?}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_default_catalogue_matches_wiktionary_shapes() {
        let doc = Html::parse_fragment(
            r#"<h3>Pronunciation</h3><ul><li><span class="IPA">/kæt/</span>
               <audio><source src="cat.ogg"></audio></li></ul>"#,
        );
        let catalogue = &*DEFAULT_CATALOGUE;
        assert_eq!(doc.select(&catalogue.headings).count(), 1);
        assert_eq!(doc.select(&catalogue.list).count(), 1);
        assert_eq!(doc.select(&catalogue.item).count(), 1);
        assert_eq!(doc.select(&catalogue.ipa).count(), 1);
        assert_eq!(doc.select(&catalogue.audio).count(), 1);
        assert_eq!(doc.select(&catalogue.source).count(), 1);
    }

    #[test]
    fn test_bad_selector_names_its_role() {
        let config = SelectorConfig { ipa: "span[".to_string(), ..Default::default() };
        match SelectorCatalogue::compile(&config) {
            Err(ExtractError::InvalidSelector { role, selector, .. }) => {
                assert_eq!(role, "ipa");
                assert_eq!(selector, "span[");
            }
            other => panic!("expected InvalidSelector, got {:?}", other.map(|_| ())),
        }
    }
}
