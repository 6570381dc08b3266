//! Relevance scoring for corpus documents.
//!
//! Deterministic additive weights, case-insensitive matching. A document
//! accumulates points from every rule that applies; a total of zero means
//! the document is excluded from results.

use crate::document::DocumentMeta;
use crate::search::query::SearchQuery;

/// Free text matched the document name.
pub const NAME_MATCH: u32 = 20;
/// Free text matched the description (only scored when the name did not).
pub const DESCRIPTION_MATCH: u32 = 15;
/// Category filter matched exactly.
pub const CATEGORY_MATCH: u32 = 10;
/// Framework filter matched exactly.
pub const FRAMEWORK_MATCH: u32 = 10;
/// Per intersecting tag.
pub const TAG_MATCH: u32 = 5;

/// Compute the relevance score of one document against a query.
pub fn score_document(query: &SearchQuery, doc: &DocumentMeta) -> u32 {
    let mut score = 0;

    if let Some(text) = query.text() {
        let needle = text.to_lowercase();
        if doc.name.to_lowercase().contains(&needle) {
            score += NAME_MATCH;
        } else if doc
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
        {
            score += DESCRIPTION_MATCH;
        }
    }

    if let Some(category) = query.category()
        && doc.has_category(category)
    {
        score += CATEGORY_MATCH;
    }

    if let Some(framework) = query.framework()
        && doc.in_framework(framework)
    {
        score += FRAMEWORK_MATCH;
    }

    for tag in query.tags() {
        if doc.has_tag(tag) {
            score += TAG_MATCH;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> DocumentMeta {
        DocumentMeta {
            path: "nestjs/patterns/gateway.md".to_string(),
            name: "Gateway Pattern".to_string(),
            description: Some("Data access through a gateway".to_string()),
            category: Some("patterns".to_string()),
            tags: vec!["data-access".to_string(), "gateway".to_string()],
            framework: Some("nestjs".to_string()),
        }
    }

    #[test]
    fn name_match_scores_twenty() {
        let query = SearchQuery {
            text: Some("gateway".to_string()),
            ..SearchQuery::default()
        };
        assert_eq!(score_document(&query, &doc()), NAME_MATCH);
    }

    #[test]
    fn description_match_only_when_name_misses() {
        let query = SearchQuery {
            text: Some("data access".to_string()),
            ..SearchQuery::default()
        };
        assert_eq!(score_document(&query, &doc()), DESCRIPTION_MATCH);
    }

    #[test]
    fn category_and_framework_filters_are_additive() {
        let query = SearchQuery {
            category: Some("patterns".to_string()),
            framework: Some("nestjs".to_string()),
            ..SearchQuery::default()
        };
        assert_eq!(score_document(&query, &doc()), CATEGORY_MATCH + FRAMEWORK_MATCH);
    }

    #[test]
    fn each_matching_tag_adds_five() {
        let query = SearchQuery {
            tags: vec![
                "gateway".to_string(),
                "data-access".to_string(),
                "unrelated".to_string(),
            ],
            ..SearchQuery::default()
        };
        assert_eq!(score_document(&query, &doc()), 2 * TAG_MATCH);
    }

    #[test]
    fn no_match_scores_zero() {
        let query = SearchQuery {
            text: Some("controller".to_string()),
            ..SearchQuery::default()
        };
        assert_eq!(score_document(&query, &doc()), 0);
    }

    #[test]
    fn all_rules_accumulate() {
        let query = SearchQuery {
            text: Some("gateway".to_string()),
            category: Some("patterns".to_string()),
            framework: Some("nestjs".to_string()),
            tags: vec!["gateway".to_string()],
        };
        assert_eq!(
            score_document(&query, &doc()),
            NAME_MATCH + CATEGORY_MATCH + FRAMEWORK_MATCH + TAG_MATCH
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let query = SearchQuery {
            text: Some("GATEWAY".to_string()),
            framework: Some("NestJS".to_string()),
            ..SearchQuery::default()
        };
        assert_eq!(score_document(&query, &doc()), NAME_MATCH + FRAMEWORK_MATCH);
    }
}
