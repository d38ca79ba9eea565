//! Listing-page scraper built on `lol_html`.
//!
//! Fetches one page of the external grant listing and extracts, per row, a
//! title, a summary and a share link — each optional. Dropping rows with
//! missing fields is the ingestion pipeline's decision, not the scraper's.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use lol_html::{element, text, HtmlRewriter, Settings};

use crate::config::IngestConfig;
use crate::errors::AppError;

const ROW_SELECTOR: &str = "article.grant-card";
const TITLE_SELECTOR: &str = "article.grant-card h3";
const SUMMARY_SELECTOR: &str = "article.grant-card div.summary";
const LINK_SELECTOR: &str = "article.grant-card a.share[href]";

/// One listing row as scraped, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
}

#[derive(Default)]
struct RowBuilder {
    title: String,
    summary: String,
    link: Option<String>,
}

impl RowBuilder {
    fn finish(self) -> Candidate {
        Candidate {
            title: normalize(&self.title),
            summary: normalize(&self.summary),
            link: self.link.filter(|l| !l.trim().is_empty()),
        }
    }
}

/// Collapses runs of whitespace; all-whitespace text becomes `None`.
fn normalize(text: &str) -> Option<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Extracts listing rows from a full HTML document.
pub fn parse_listing(html: &str) -> Result<Vec<Candidate>, AppError> {
    let rows: Rc<RefCell<Vec<RowBuilder>>> = Rc::new(RefCell::new(Vec::new()));

    let on_row = Rc::clone(&rows);
    let on_title = Rc::clone(&rows);
    let on_summary = Rc::clone(&rows);
    let on_link = Rc::clone(&rows);

    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: vec![
                element!(ROW_SELECTOR, move |_el| {
                    on_row.borrow_mut().push(RowBuilder::default());
                    Ok(())
                }),
                text!(TITLE_SELECTOR, move |t| {
                    if let Some(row) = on_title.borrow_mut().last_mut() {
                        row.title.push_str(t.as_str());
                    }
                    Ok(())
                }),
                text!(SUMMARY_SELECTOR, move |t| {
                    if let Some(row) = on_summary.borrow_mut().last_mut() {
                        row.summary.push_str(t.as_str());
                    }
                    Ok(())
                }),
                element!(LINK_SELECTOR, move |el| {
                    if let Some(row) = on_link.borrow_mut().last_mut() {
                        if row.link.is_none() {
                            row.link = el.get_attribute("href");
                        }
                    }
                    Ok(())
                }),
            ],
            ..Settings::default()
        },
        |_: &[u8]| {},
    );

    rewriter
        .write(html.as_bytes())
        .map_err(|e| AppError::ParseError(e.to_string()))?;
    rewriter
        .end()
        .map_err(|e| AppError::ParseError(e.to_string()))?;

    let collected = rows.take();
    Ok(collected.into_iter().map(RowBuilder::finish).collect())
}

#[derive(Clone)]
pub struct ListingScraper {
    http: reqwest::Client,
    config: IngestConfig,
}

impl ListingScraper {
    pub fn new(http: reqwest::Client, config: IngestConfig) -> Self {
        Self { http, config }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            config: IngestConfig {
                listing_url: base_url.to_string(),
                listing_filter: "aktualne".to_string(),
                pages: 2,
                interval_secs: 3600,
                request_timeout: 5,
            },
        }
    }

    /// Fetches and parses one listing page.
    pub async fn scrape_page(&self, page: u32) -> Result<Vec<Candidate>, AppError> {
        let response = self
            .http
            .get(&self.config.listing_url)
            .query(&[
                ("page", page.to_string()),
                ("filter", self.config.listing_filter.clone()),
            ])
            .timeout(Duration::from_secs(self.config.request_timeout))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::TransportError(format!(
                "listing page {page} returned HTTP {status}"
            )));
        }

        let html = response.text().await?;
        parse_listing(&html)
    }
}
