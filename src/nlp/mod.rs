//! Linguistic expansion of industry codes into search keywords.
//!
//! Pipeline per code: description lookup -> tokenize -> part-of-speech tag ->
//! keep nouns -> singularize plurals -> lowercase. Output keeps code order,
//! then word order; duplicates across codes are preserved on purpose so the
//! downstream search text reflects how often a concept occurs.

pub mod inflector;
pub mod tagger;

use crate::pkd::PkdCatalog;
use inflector::Inflector;
use tagger::{PosTag, RuleTagger};

/// Splits description text into words. Hyphenated compounds stay intact.
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(|c: char| !c.is_alphanumeric() && c != '-')
            .filter(|w| !w.is_empty())
            .collect()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Expands PKD codes into normalized keywords. The tokenizer, tagger and
/// inflector are plain owned values — no process-wide singletons.
pub struct KeywordExpander {
    catalog: PkdCatalog,
    tokenizer: WordTokenizer,
    tagger: RuleTagger,
    inflector: Inflector,
}

impl KeywordExpander {
    pub fn new(catalog: PkdCatalog) -> Self {
        Self {
            catalog,
            tokenizer: WordTokenizer::new(),
            tagger: RuleTagger::new(),
            inflector: Inflector::new(),
        }
    }

    /// Keywords for the given codes. Codes outside the catalog contribute
    /// nothing; an empty input yields an empty output.
    pub fn expand(&self, codes: &[String]) -> Vec<String> {
        let mut keywords = Vec::new();
        for code in codes {
            let Some(description) = self.catalog.describe(code) else {
                continue;
            };
            for word in self.tokenizer.tokenize(description) {
                match self.tagger.tag(word) {
                    PosTag::Noun => keywords.push(word.to_lowercase()),
                    PosTag::PluralNoun => {
                        keywords.push(self.inflector.singularize(&word.to_lowercase()))
                    }
                    _ => {}
                }
            }
        }
        keywords
    }
}
