//! Remote funding-opportunity search client.
//!
//! Remote search is an enrichment branch: any transport or decode failure is
//! logged and degraded to an empty result list, never surfaced to the query
//! caller.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::config::FundingConfig;
use crate::errors::AppError;

#[derive(Clone)]
pub struct FundingSearchClient {
    http: reqwest::Client,
    config: FundingConfig,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    results: Vec<Value>,
}

impl FundingSearchClient {
    pub fn new(http: reqwest::Client, config: FundingConfig) -> Self {
        Self { http, config }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            config: FundingConfig {
                api_url: base_url.to_string(),
                api_key: "test-key".to_string(),
                page_size: 50,
                request_timeout: 5,
            },
        }
    }

    /// Searches the remote API for the given keyword text. Empty input skips
    /// the call entirely; failures return an empty list.
    pub async fn search(&self, text: &str) -> Vec<Value> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        match self.request(text).await {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "remote funding search degraded to empty");
                Vec::new()
            }
        }
    }

    async fn request(&self, text: &str) -> Result<Vec<Value>, AppError> {
        // Trailing wildcard widens the match to keyword prefixes.
        let text_param = format!("{text}*");
        let page_size = self.config.page_size.to_string();
        let response = self
            .http
            .post(&self.config.api_url)
            .query(&[
                ("apiKey", self.config.api_key.as_str()),
                ("text", text_param.as_str()),
                ("pageSize", page_size.as_str()),
                ("pageNumber", "1"),
            ])
            .json(&serde_json::json!({}))
            .timeout(Duration::from_secs(self.config.request_timeout))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::TransportError(format!(
                "funding search returned HTTP {status}"
            )));
        }

        let envelope: SearchEnvelope = response.json().await?;
        Ok(envelope.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn search_returns_results_array() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(query_param("text", "widget software*"))
            .and(query_param("pageSize", "50"))
            .and(query_param("pageNumber", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{"title": "Horizon call"}, {"title": "Digital Europe call"}]
            })))
            .mount(&server)
            .await;

        let client = FundingSearchClient::with_base_url(reqwest::Client::new(), &server.uri());
        let results = client.search("widget software").await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["title"], "Horizon call");
    }

    #[tokio::test]
    async fn empty_text_issues_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})))
            .expect(0)
            .mount(&server)
            .await;

        let client = FundingSearchClient::with_base_url(reqwest::Client::new(), &server.uri());
        assert!(client.search("   ").await.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_degrades_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = FundingSearchClient::with_base_url(reqwest::Client::new(), &server.uri());
        assert!(client.search("widget").await.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_degrades_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = FundingSearchClient::with_base_url(reqwest::Client::new(), &server.uri());
        assert!(client.search("widget").await.is_empty());
    }
}
