//! Keyword translation adapter.
//!
//! Best-effort enrichment for the local-corpus branch: the caller bounds the
//! input (at most 5 keywords) and degrades failures to an empty list.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::TranslationConfig;
use crate::errors::AppError;

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `words` from `source` to `target`, same order, same length.
    async fn translate(
        &self,
        words: &[String],
        source: &str,
        target: &str,
    ) -> Result<Vec<String>, AppError>;
}

pub struct HttpTranslator {
    http: reqwest::Client,
    config: TranslationConfig,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Vec<String>,
}

impl HttpTranslator {
    pub fn new(http: reqwest::Client, config: TranslationConfig) -> Self {
        Self { http, config }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            config: TranslationConfig {
                api_url: base_url.to_string(),
                source_lang: "en".to_string(),
                target_lang: "pl".to_string(),
                request_timeout: 5,
            },
        }
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(
        &self,
        words: &[String],
        source: &str,
        target: &str,
    ) -> Result<Vec<String>, AppError> {
        if words.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .http
            .post(&self.config.api_url)
            .json(&serde_json::json!({
                "q": words,
                "source": source,
                "target": target,
                "format": "text",
            }))
            .timeout(Duration::from_secs(self.config.request_timeout))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::TransportError(format!(
                "translation service returned HTTP {status}"
            )));
        }

        let body: TranslateResponse = response.json().await?;
        if body.translated_text.len() != words.len() {
            return Err(AppError::TransportError(format!(
                "translation returned {} words for {} inputs",
                body.translated_text.len(),
                words.len()
            )));
        }
        Ok(body.translated_text)
    }
}

/// Echoes its input; selected with `translation.api_url = "mock"` so local
/// runs and a monolingual corpus work without the external service.
pub struct NoopTranslator;

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(
        &self,
        words: &[String],
        _source: &str,
        _target: &str,
    ) -> Result<Vec<String>, AppError> {
        Ok(words.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn translates_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "q": ["software", "development"],
                "source": "en",
                "target": "pl",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "translatedText": ["oprogramowanie", "rozwój"]
            })))
            .mount(&server)
            .await;

        let translator = HttpTranslator::with_base_url(reqwest::Client::new(), &server.uri());
        let out = translator
            .translate(&words(&["software", "development"]), "en", "pl")
            .await
            .unwrap();
        assert_eq!(out, words(&["oprogramowanie", "rozwój"]));
    }

    #[tokio::test]
    async fn empty_input_short_circuits() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let translator = HttpTranslator::with_base_url(reqwest::Client::new(), &server.uri());
        assert!(translator.translate(&[], "en", "pl").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn http_error_is_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let translator = HttpTranslator::with_base_url(reqwest::Client::new(), &server.uri());
        let err = translator
            .translate(&words(&["software"]), "en", "pl")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::TransportError(_)));
    }

    #[tokio::test]
    async fn length_mismatch_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "translatedText": ["tylko-jedno"]
            })))
            .mount(&server)
            .await;

        let translator = HttpTranslator::with_base_url(reqwest::Client::new(), &server.uri());
        let err = translator
            .translate(&words(&["one", "two"]), "en", "pl")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::TransportError(_)));
    }

    #[tokio::test]
    async fn noop_translator_echoes_input() {
        let out = NoopTranslator
            .translate(&words(&["dotacja", "budowa"]), "en", "pl")
            .await
            .unwrap();
        assert_eq!(out, words(&["dotacja", "budowa"]));
    }
}
