//! Corpus ingestion pipeline.
//!
//! One cycle scrapes a bounded page range of the external listing, drops
//! candidates without a title, and replaces the whole corpus in a single
//! transaction. Runs once at startup, then on a fixed interval, independent
//! of request handling.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::db::{NewGrant, Repository};
use crate::errors::AppError;
use crate::scrape::{Candidate, ListingScraper};

pub struct IngestService {
    repo: Repository,
    scraper: ListingScraper,
    pages: u32,
}

impl IngestService {
    pub fn new(repo: Repository, scraper: ListingScraper, pages: u32) -> Self {
        Self {
            repo,
            scraper,
            pages,
        }
    }

    /// Runs one full scrape-then-replace cycle and returns the replaced
    /// record count. A failed page contributes zero candidates; only the
    /// corpus replace itself is fatal, and the transaction keeps the previous
    /// dataset intact when it fails.
    pub async fn ingest(&self) -> Result<usize, AppError> {
        let start = Instant::now();

        let mut candidates = Vec::new();
        for page in 1..=self.pages {
            match self.scraper.scrape_page(page).await {
                Ok(batch) => {
                    debug!(page, rows = batch.len(), "listing page scraped");
                    candidates.extend(batch);
                }
                Err(e) => {
                    warn!(page, error = %e, "listing page skipped");
                }
            }
        }

        let scraped = candidates.len();
        let grants = accept_candidates(candidates);
        let dropped = scraped - grants.len();

        let records = self.repo.replace_grants(grants).await?;

        metrics::counter!("grantscope_ingest_cycles_total").increment(1);
        metrics::gauge!("grantscope_corpus_records").set(records as f64);

        info!(
            records,
            dropped,
            elapsed_ms = start.elapsed().as_millis(),
            "corpus replaced"
        );
        Ok(records)
    }
}

/// A row without a title has nothing to display or match on; everything else
/// is stored as-is, absent fields included.
fn accept_candidates(candidates: Vec<Candidate>) -> Vec<NewGrant> {
    candidates
        .into_iter()
        .filter_map(|c| {
            c.title.map(|name| NewGrant {
                name,
                content: c.summary,
                link: c.link,
            })
        })
        .collect()
}

/// Background refresh: the first tick fires immediately (the startup run),
/// later ticks follow the configured interval.
pub fn spawn_refresh_loop(
    service: Arc<IngestService>,
    every: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every.max(Duration::from_secs(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if let Err(e) = service.ingest().await {
                error!(error = %e, "ingestion cycle failed; previous corpus retained");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: Option<&str>, summary: Option<&str>, link: Option<&str>) -> Candidate {
        Candidate {
            title: title.map(String::from),
            summary: summary.map(String::from),
            link: link.map(String::from),
        }
    }

    #[test]
    fn candidates_without_a_title_are_dropped() {
        let accepted = accept_candidates(vec![
            candidate(Some("Grant A"), Some("Body"), Some("https://a")),
            candidate(None, Some("No heading"), Some("https://b")),
            candidate(Some("Grant C"), None, None),
        ]);
        assert_eq!(accepted.len(), 2);
        assert_eq!(accepted[0].name, "Grant A");
        assert_eq!(accepted[1].name, "Grant C");
        assert_eq!(accepted[1].content, None);
    }

    #[test]
    fn accepted_candidates_keep_optional_fields() {
        let accepted = accept_candidates(vec![candidate(
            Some("Grant"),
            Some("Summary text"),
            Some("https://example.com"),
        )]);
        assert_eq!(accepted[0].content.as_deref(), Some("Summary text"));
        assert_eq!(accepted[0].link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn empty_input_is_accepted_as_empty() {
        assert!(accept_candidates(Vec::new()).is_empty());
    }
}
