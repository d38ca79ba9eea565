//! Query orchestration: classify -> resolve/expand -> translate -> fan out.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::classify::{IdentifierKind, TokenClass, TokenClassifier};
use crate::clients::funding::FundingSearchClient;
use crate::clients::translate::Translator;
use crate::config::TranslationConfig;
use crate::db::Repository;
use crate::errors::AppError;
use crate::matcher::{find_matches, GrantMatch};
use crate::nlp::KeywordExpander;
use crate::registry::{BusinessEntity, EntityRegistry};

/// Upper bound on keywords sent to the translation service per query.
const TRANSLATED_KEYWORD_LIMIT: usize = 5;

#[derive(Debug, Serialize)]
pub struct AggregatedResult {
    pub entity: Option<BusinessEntity>,
    pub remote_results: Vec<Value>,
    pub local_results: Vec<GrantMatch>,
    pub keywords: Vec<String>,
}

/// Outcome of the pure interpretation pass over the query tokens.
#[derive(Debug, PartialEq)]
struct QueryPlan {
    /// The first identifier-shaped token only; later ones are classified but
    /// never resolved, keeping at most one entity per query.
    identifier: Option<(IdentifierKind, String)>,
    industry_codes: Vec<String>,
    free_text: Vec<String>,
}

fn interpret(classifier: &TokenClassifier, text: &str) -> QueryPlan {
    let mut identifier = None;
    let mut industry_codes = Vec::new();
    let mut free_text = Vec::new();

    for token in text.split_whitespace() {
        match classifier.classify(token) {
            TokenClass::Identifier(kind) => {
                if identifier.is_none() {
                    identifier = Some((kind, token.to_string()));
                }
            }
            TokenClass::IndustryCode => industry_codes.push(token.to_string()),
            TokenClass::FreeText => free_text.push(token.to_lowercase()),
        }
    }

    QueryPlan {
        identifier,
        industry_codes,
        free_text,
    }
}

pub struct QueryService {
    repo: Repository,
    registry: Arc<dyn EntityRegistry>,
    translator: Arc<dyn Translator>,
    funding: FundingSearchClient,
    classifier: TokenClassifier,
    expander: KeywordExpander,
    translation: TranslationConfig,
}

impl QueryService {
    pub fn new(
        repo: Repository,
        registry: Arc<dyn EntityRegistry>,
        translator: Arc<dyn Translator>,
        funding: FundingSearchClient,
        expander: KeywordExpander,
        translation: TranslationConfig,
    ) -> Self {
        Self {
            repo,
            registry,
            translator,
            funding,
            classifier: TokenClassifier::new(),
            expander,
            translation,
        }
    }

    /// Runs the full interpretation and fan-out for one query. No branch
    /// failure is fatal: entity resolution, translation and both search
    /// branches each degrade independently.
    pub async fn query(&self, text: &str) -> Result<AggregatedResult, AppError> {
        let plan = interpret(&self.classifier, text);

        let entity = match &plan.identifier {
            Some((kind, value)) => match self.registry.resolve(*kind, value).await {
                Ok(entity) => Some(entity),
                Err(e) => {
                    warn!(error = %e, "entity resolution degraded to none");
                    None
                }
            },
            None => None,
        };

        // Query-level codes first, then entity-derived ones; duplicates stay.
        let mut codes = plan.industry_codes;
        if let Some(entity) = &entity {
            codes.extend(entity.pkd_codes.iter().cloned());
        }

        let mut keywords = plan.free_text;
        keywords.extend(self.expander.expand(&codes));

        let head = &keywords[..keywords.len().min(TRANSLATED_KEYWORD_LIMIT)];
        let translated = match self
            .translator
            .translate(head, &self.translation.source_lang, &self.translation.target_lang)
            .await
        {
            Ok(words) => words,
            Err(e) => {
                warn!(error = %e, "keyword translation degraded to empty");
                Vec::new()
            }
        };

        let remote_text = keywords.join(" ");
        let (remote_results, local_results) = tokio::join!(
            self.funding.search(&remote_text),
            self.search_corpus(&translated),
        );

        metrics::counter!("grantscope_queries_total").increment(1);

        Ok(AggregatedResult {
            entity,
            remote_results,
            local_results,
            keywords,
        })
    }

    /// Local branch: a corpus read failure degrades to an empty result set.
    async fn search_corpus(&self, keywords: &[String]) -> Vec<GrantMatch> {
        if keywords.is_empty() {
            return Vec::new();
        }
        match self.repo.all_grants().await {
            Ok(grants) => find_matches(keywords, &grants),
            Err(e) => {
                warn!(error = %e, "corpus read failed, local branch degraded to empty");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(text: &str) -> QueryPlan {
        interpret(&TokenClassifier::new(), text)
    }

    #[test]
    fn splits_tokens_into_classes() {
        let plan = plan("62.02.A widget");
        assert_eq!(plan.identifier, None);
        assert_eq!(plan.industry_codes, vec!["62.02.A".to_string()]);
        assert_eq!(plan.free_text, vec!["widget".to_string()]);
    }

    #[test]
    fn only_the_first_identifier_is_kept() {
        let plan = plan("1234567890 12345678901234");
        assert_eq!(
            plan.identifier,
            Some((IdentifierKind::Nip, "1234567890".to_string()))
        );
        assert!(plan.free_text.is_empty());
    }

    #[test]
    fn identifier_and_code_in_one_query() {
        let plan = plan("1234567890 42.11.A");
        assert_eq!(
            plan.identifier,
            Some((IdentifierKind::Nip, "1234567890".to_string()))
        );
        assert_eq!(plan.industry_codes, vec!["42.11.A".to_string()]);
    }

    #[test]
    fn free_text_is_lowercased() {
        let plan = plan("Budowa DRÓG");
        assert_eq!(
            plan.free_text,
            vec!["budowa".to_string(), "dróg".to_string()]
        );
    }

    #[test]
    fn empty_query_yields_an_empty_plan() {
        let plan = plan("   ");
        assert_eq!(plan.identifier, None);
        assert!(plan.industry_codes.is_empty());
        assert!(plan.free_text.is_empty());
    }
}
