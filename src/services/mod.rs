use std::sync::Arc;

use crate::clients::funding::FundingSearchClient;
use crate::clients::translate::Translator;
use crate::config::AppConfig;
use crate::db::Repository;
use crate::nlp::KeywordExpander;
use crate::pkd::PkdCatalog;
use crate::registry::EntityRegistry;
use crate::scrape::ListingScraper;
use crate::services::ingest::IngestService;
use crate::services::query::QueryService;

pub mod ingest;
pub mod query;

// A container for all services to be injected into routes
#[derive(Clone)]
pub struct AppState {
    pub query_service: Arc<QueryService>,
    pub ingest_service: Arc<IngestService>,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        repo: Repository,
        registry: Arc<dyn EntityRegistry>,
        translator: Arc<dyn Translator>,
        http: reqwest::Client,
    ) -> Self {
        let funding = FundingSearchClient::new(http.clone(), config.funding.clone());
        let scraper = ListingScraper::new(http, config.ingest.clone());
        let expander = KeywordExpander::new(PkdCatalog::new());

        Self {
            query_service: Arc::new(QueryService::new(
                repo.clone(),
                registry,
                translator,
                funding,
                expander,
                config.translation.clone(),
            )),
            ingest_service: Arc::new(IngestService::new(repo, scraper, config.ingest.pages)),
        }
    }
}
