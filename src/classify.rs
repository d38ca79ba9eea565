//! Token classification for free-text queries.
//!
//! Classification is purely syntactic and mutually exclusive: identifier
//! shapes are checked before the industry-code shape, and anything that
//! matches no pattern is free text. The orchestrator, not the classifier,
//! enforces that only the first identifier-shaped token resolves an entity.

use regex_lite::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// 10-digit tax identifier.
    Nip,
    /// 14-digit statistical business registry identifier.
    Regon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Identifier(IdentifierKind),
    IndustryCode,
    FreeText,
}

pub struct TokenClassifier {
    nip: Regex,
    regon: Regex,
    industry_code: Regex,
}

impl TokenClassifier {
    pub fn new() -> Self {
        // The patterns are literals; compilation cannot fail.
        Self {
            nip: Regex::new(r"^\d{10}$").expect("nip pattern"),
            regon: Regex::new(r"^\d{14}$").expect("regon pattern"),
            industry_code: Regex::new(r"^\d{2}\.\d{2}\.[A-Z]$").expect("industry code pattern"),
        }
    }

    pub fn classify(&self, token: &str) -> TokenClass {
        if self.nip.is_match(token) {
            TokenClass::Identifier(IdentifierKind::Nip)
        } else if self.regon.is_match(token) {
            TokenClass::Identifier(IdentifierKind::Regon)
        } else if self.industry_code.is_match(token) {
            TokenClass::IndustryCode
        } else {
            TokenClass::FreeText
        }
    }
}

impl Default for TokenClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_digits_classify_as_nip() {
        let classifier = TokenClassifier::new();
        assert_eq!(
            classifier.classify("1234567890"),
            TokenClass::Identifier(IdentifierKind::Nip)
        );
    }

    #[test]
    fn fourteen_digits_classify_as_regon() {
        let classifier = TokenClassifier::new();
        assert_eq!(
            classifier.classify("12345678901234"),
            TokenClass::Identifier(IdentifierKind::Regon)
        );
    }

    #[test]
    fn subclass_shape_classifies_as_industry_code() {
        let classifier = TokenClassifier::new();
        assert_eq!(classifier.classify("62.02.A"), TokenClass::IndustryCode);
        assert_eq!(classifier.classify("01.11.Z"), TokenClass::IndustryCode);
    }

    #[test]
    fn everything_else_is_free_text() {
        let classifier = TokenClassifier::new();
        for token in ["widget", "123456789", "123456789012345", "62.02.a", "62.2.A", "62.02.AB", ""] {
            assert_eq!(classifier.classify(token), TokenClass::FreeText, "token: {token:?}");
        }
    }

    #[test]
    fn identifier_shapes_win_over_other_classes() {
        let classifier = TokenClassifier::new();
        // A 10-digit token is digits-only, so it can never also look like a
        // code; precedence still guarantees the identifier branch is taken.
        assert!(matches!(
            classifier.classify("0000000000"),
            TokenClass::Identifier(IdentifierKind::Nip)
        ));
    }
}
