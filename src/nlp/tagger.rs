//! Rule-based part-of-speech tagger.
//!
//! Context-free by construction: a closed-class lexicon plus suffix
//! heuristics, applied per word. This is deliberately a fixed tool, not a
//! trainable model — the expander only needs to separate nouns from
//! everything else in short activity descriptions.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    PluralNoun,
    Verb,
    Adjective,
    Adverb,
    /// Determiners, prepositions, conjunctions, pronouns.
    Closed,
}

pub struct RuleTagger {
    closed_class: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    gerund_nouns: HashSet<&'static str>,
    noun_lexicon: HashSet<&'static str>,
}

const CLOSED_CLASS: &[&str] = &[
    "a", "an", "the", "of", "and", "or", "with", "for", "in", "on", "at", "by", "to", "as",
    "from", "into", "over", "under", "per", "via", "its", "their", "this", "that",
];

const ADJECTIVES: &[&str] = &["other", "own", "fresh", "foreign", "similar", "new", "real"];

/// `-ing` words that are nouns in activity descriptions, not gerunds.
const GERUND_NOUNS: &[&str] = &[
    "engineering", "accounting", "bookkeeping", "building", "housing", "advertising",
];

/// Nouns the suffix heuristics would otherwise misread as adjectives.
const NOUN_LEXICON: &[&str] = &["metal", "rental"];

impl RuleTagger {
    pub fn new() -> Self {
        Self {
            closed_class: CLOSED_CLASS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
            gerund_nouns: GERUND_NOUNS.iter().copied().collect(),
            noun_lexicon: NOUN_LEXICON.iter().copied().collect(),
        }
    }

    /// Tags a single word. Input casing is irrelevant.
    pub fn tag(&self, word: &str) -> PosTag {
        let w = word.to_lowercase();

        if self.closed_class.contains(w.as_str()) {
            return PosTag::Closed;
        }
        if self.adjectives.contains(w.as_str()) {
            return PosTag::Adjective;
        }
        if self.gerund_nouns.contains(w.as_str()) || self.noun_lexicon.contains(w.as_str()) {
            return PosTag::Noun;
        }
        // Derivational -ment nouns come before the adjective suffixes, which
        // would otherwise swallow them via "-ent".
        if w.ends_with("ment") && w.len() > 5 {
            return PosTag::Noun;
        }
        if w.ends_with("ing") && w.len() > 4 {
            return PosTag::Verb;
        }
        if w.ends_with("ed") && w.len() > 3 {
            return PosTag::Verb;
        }
        if w.ends_with("ly") && w.len() > 3 {
            return PosTag::Adverb;
        }
        if has_adjective_suffix(&w) {
            return PosTag::Adjective;
        }
        if is_plural_shape(&w) {
            return PosTag::PluralNoun;
        }
        PosTag::Noun
    }
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

fn has_adjective_suffix(w: &str) -> bool {
    const SUFFIXES: &[&str] = &["al", "ary", "ory", "ous", "ive", "able", "ible", "ant", "ent"];
    SUFFIXES.iter().any(|s| w.ends_with(s) && w.len() > s.len() + 2)
}

fn is_plural_shape(w: &str) -> bool {
    w.len() > 2 && w.ends_with('s') && !w.ends_with("ss") && !w.ends_with("us") && !w.ends_with("is")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_function_words_as_closed_class() {
        let tagger = RuleTagger::new();
        assert_eq!(tagger.tag("of"), PosTag::Closed);
        assert_eq!(tagger.tag("The"), PosTag::Closed);
        assert_eq!(tagger.tag("and"), PosTag::Closed);
    }

    #[test]
    fn tags_plural_and_singular_nouns() {
        let tagger = RuleTagger::new();
        assert_eq!(tagger.tag("activities"), PosTag::PluralNoun);
        assert_eq!(tagger.tag("software"), PosTag::Noun);
        assert_eq!(tagger.tag("consultancy"), PosTag::Noun);
    }

    #[test]
    fn gerunds_are_verbs_unless_lexicalized() {
        let tagger = RuleTagger::new();
        assert_eq!(tagger.tag("growing"), PosTag::Verb);
        assert_eq!(tagger.tag("engineering"), PosTag::Noun);
    }

    #[test]
    fn suffix_adjectives_are_not_nouns() {
        let tagger = RuleTagger::new();
        assert_eq!(tagger.tag("residential"), PosTag::Adjective);
        assert_eq!(tagger.tag("leguminous"), PosTag::Adjective);
        assert_eq!(tagger.tag("monetary"), PosTag::Adjective);
    }

    #[test]
    fn ment_nouns_survive_the_adjective_suffixes() {
        let tagger = RuleTagger::new();
        assert_eq!(tagger.tag("development"), PosTag::Noun);
        assert_eq!(tagger.tag("equipment"), PosTag::Noun);
    }

    #[test]
    fn ss_us_is_endings_are_not_plural() {
        let tagger = RuleTagger::new();
        assert_eq!(tagger.tag("business"), PosTag::Noun);
        assert_eq!(tagger.tag("analysis"), PosTag::Noun);
    }
}
