//! Local corpus keyword matcher.
//!
//! One case-insensitive alternation over the keyword list, matched against
//! name and content of every stored record. Keywords are regex-escaped
//! before assembly so user-derived terms like `C++` cannot inject pattern
//! syntax. Matched spans in the content are wrapped in `<em>` markers and
//! returned on the record.

use regex_lite::Regex;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::db::models::Grant;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GrantMatch {
    pub id: Uuid,
    pub name: String,
    /// Content with matched spans wrapped in `<em>` markers.
    pub content: Option<String>,
    pub link: Option<String>,
}

/// Returns corpus records matching any keyword. An empty keyword list (or a
/// list of empty strings) matches nothing — an unguarded empty alternation
/// would match every record.
pub fn find_matches(keywords: &[String], grants: &[Grant]) -> Vec<GrantMatch> {
    let escaped: Vec<String> = keywords
        .iter()
        .filter(|k| !k.trim().is_empty())
        .map(|k| regex_lite::escape(k.trim()))
        .collect();
    if escaped.is_empty() {
        return Vec::new();
    }

    let pattern = format!("(?i)({})", escaped.join("|"));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            warn!(error = %e, "keyword pattern rejected, local match skipped");
            return Vec::new();
        }
    };

    grants
        .iter()
        .filter_map(|grant| {
            let content = grant.content.as_deref().unwrap_or("");
            if !re.is_match(&grant.name) && !re.is_match(content) {
                return None;
            }
            let highlighted = grant
                .content
                .as_deref()
                .map(|c| re.replace_all(c, "<em>$0</em>").into_owned());
            Some(GrantMatch {
                id: grant.id,
                name: grant.name.clone(),
                content: highlighted,
                link: grant.link.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(name: &str, content: Option<&str>) -> Grant {
        Grant {
            id: Uuid::new_v4(),
            name: name.to_string(),
            content: content.map(|c| c.to_string()),
            link: None,
            created_at: chrono::Utc::now().into(),
        }
    }

    fn keywords(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matches_name_and_content_case_insensitively() {
        let grants = vec![
            grant("Dotacje na OPROGRAMOWANIE", None),
            grant("Fundusz budowlany", Some("Wsparcie dla oprogramowania.")),
            grant("Inny nabór", Some("Nic wspólnego.")),
        ];
        let found = find_matches(&keywords(&["oprogramowanie"]), &grants);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn metacharacters_in_keywords_are_literal() {
        let grants = vec![
            grant("Szkolenia C++", Some("Kurs C++ dla zespołów.")),
            grant("Szkolenia Rust", Some("Kurs systemowy.")),
        ];
        let found = find_matches(&keywords(&["C++"]), &grants);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Szkolenia C++");
    }

    #[test]
    fn matched_spans_are_highlighted_in_content() {
        let grants = vec![grant(
            "Nabór",
            Some("Dotacja na rozwój. Kolejna dotacja wkrótce."),
        )];
        let found = find_matches(&keywords(&["dotacja"]), &grants);
        assert_eq!(
            found[0].content.as_deref(),
            Some("<em>Dotacja</em> na rozwój. Kolejna <em>dotacja</em> wkrótce.")
        );
    }

    #[test]
    fn empty_keywords_match_nothing() {
        let grants = vec![grant("Cokolwiek", Some("Treść."))];
        assert!(find_matches(&[], &grants).is_empty());
        assert!(find_matches(&keywords(&["", "  "]), &grants).is_empty());
    }

    #[test]
    fn record_without_content_can_still_match_by_name() {
        let grants = vec![grant("Dotacja inwestycyjna", None)];
        let found = find_matches(&keywords(&["dotacja"]), &grants);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].content, None);
    }
}
