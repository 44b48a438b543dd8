//! Search and status filtering for board views
//!
//! Produces, on demand, a per-group filtered and sorted card view of the
//! active funnel. Matching never mutates the tree; the view is recomputed
//! from scratch whenever the tree, query, or filter changes.
//!
//! The CLI also accepts a `status:<value>` shorthand inside the free-text
//! query, which is stripped from the text and applied as the status filter.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::board::{Card, Funnel};
use crate::types::Status;

static STATUS_SHORTHAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bstatus:([a-z_-]+)").expect("status shorthand regex should be valid")
});

/// Active search text plus optional status filter.
#[derive(Debug, Clone, Default)]
pub struct CardFilter {
    pub query: String,
    pub status: Option<Status>,
}

impl CardFilter {
    pub fn new(query: impl Into<String>, status: Option<Status>) -> Self {
        CardFilter {
            query: query.into(),
            status,
        }
    }

    /// Build a filter from raw CLI input, extracting a `status:<value>`
    /// shorthand when present and parseable. An explicit `status` argument
    /// wins over the shorthand; an unparseable shorthand value stays in the
    /// text query.
    pub fn parse(raw_query: &str, status: Option<Status>) -> CardFilter {
        let mut query = raw_query.to_string();
        let mut parsed = None;

        if let Some(caps) = STATUS_SHORTHAND.captures(raw_query)
            && let Ok(s) = caps[1].parse::<Status>()
        {
            parsed = Some(s);
            query = STATUS_SHORTHAND.replace(&query, "").trim().to_string();
        }

        CardFilter {
            query,
            status: status.or(parsed),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.status.is_none()
    }

    /// Whether a card matches: (no query, or the lowercase concatenation of
    /// name/company/summary/tags contains the lowercase query) AND (no
    /// status filter, or the card's statuses contain the filter value).
    pub fn matches(&self, card: &Card) -> bool {
        if let Some(status) = self.status
            && !card.statuses.contains(&status)
        {
            return false;
        }

        let q = self.query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        let mut haystack = String::new();
        haystack.push_str(&card.name);
        haystack.push(' ');
        if let Some(company) = &card.company {
            haystack.push_str(company);
            haystack.push(' ');
        }
        if let Some(summary) = &card.summary {
            haystack.push_str(summary);
            haystack.push(' ');
        }
        for tag in &card.tags {
            haystack.push_str(tag);
            haystack.push(' ');
        }
        haystack.to_lowercase().contains(&q)
    }
}

/// A group's filtered view: matching cards, stable-sorted pinned-first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredGroup {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub visible_count: usize,
    /// Number of cards in the group before filtering.
    pub total: usize,
    pub cards: Vec<Card>,
}

/// Compute the filtered view of every group in a funnel.
pub fn filter_funnel(funnel: &Funnel, filter: &CardFilter) -> Vec<FilteredGroup> {
    funnel
        .groups
        .iter()
        .map(|group| {
            let mut cards: Vec<Card> = group
                .cards
                .iter()
                .filter(|c| filter.matches(c))
                .cloned()
                .collect();
            // Stable sort: pinned first, ties keep relative order
            cards.sort_by_key(|c| !c.pinned);
            FilteredGroup {
                id: group.id.clone(),
                name: group.name.clone(),
                color: group.color.clone(),
                description: group.description.clone(),
                visible_count: group.visible_count,
                total: group.cards.len(),
                cards,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::seed::test_board;

    fn named_card(id: &str, name: &str) -> Card {
        Card {
            id: id.to_string(),
            name: name.to_string(),
            company: None,
            summary: None,
            minutes_ago: 0,
            assignee: None,
            statuses: vec![Status::Open],
            pinned: false,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let board = test_board();
        let funnel = board.active_funnel().unwrap();
        let views = filter_funnel(funnel, &CardFilter::default());
        for (view, group) in views.iter().zip(&funnel.groups) {
            assert_eq!(view.cards.len(), group.cards.len());
            assert_eq!(view.total, group.cards.len());
        }
    }

    #[test]
    fn test_query_matches_name_substring() {
        let board = test_board();
        let funnel = board.active_funnel().unwrap();
        let views = filter_funnel(funnel, &CardFilter::new("voltas", None));
        assert_eq!(views[0].cards.len(), 1);
        assert_eq!(views[0].cards[0].id, "card_a3");
        assert!(views[1].cards.is_empty());
    }

    #[test]
    fn test_query_without_match_yields_empty_groups() {
        let board = test_board();
        let funnel = board.active_funnel().unwrap();
        let views = filter_funnel(funnel, &CardFilter::new("cold", None));
        assert!(views.iter().all(|v| v.cards.is_empty()));
        // Totals still report the unfiltered group sizes
        assert_eq!(views[0].total, 3);
    }

    #[test]
    fn test_query_matches_tags_and_summary() {
        let mut card = named_card("card_t1", "Plain name");
        card.tags = vec!["engaged".to_string()];
        assert!(CardFilter::new("ENGAGED", None).matches(&card));

        let mut card = named_card("card_t2", "Plain name");
        card.summary = Some("awaiting follow-up".to_string());
        assert!(CardFilter::new("follow-up", None).matches(&card));
        assert!(!CardFilter::new("nothing", None).matches(&card));
    }

    #[test]
    fn test_status_filter_requires_membership() {
        let mut card = named_card("card_s", "Acme");
        card.statuses = vec![Status::Open, Status::Urgent];
        assert!(CardFilter::new("", Some(Status::Urgent)).matches(&card));
        assert!(!CardFilter::new("", Some(Status::Closed)).matches(&card));
        // Both conditions must hold
        assert!(!CardFilter::new("other", Some(Status::Urgent)).matches(&card));
    }

    #[test]
    fn test_pinned_cards_sort_first_stable() {
        let mut board = test_board();
        {
            let funnel = board.active_funnel_mut().unwrap();
            funnel.groups[0].cards[2].pinned = true;
        }
        let funnel = board.active_funnel().unwrap();
        let views = filter_funnel(funnel, &CardFilter::default());
        let ids: Vec<_> = views[0].cards.iter().map(|c| c.id.as_str()).collect();
        // card_a3 jumps first; the unpinned keep their relative order
        assert_eq!(ids, vec!["card_a3", "card_a1", "card_a2"]);
    }

    #[test]
    fn test_multiple_pinned_keep_relative_order() {
        let mut board = test_board();
        {
            let funnel = board.active_funnel_mut().unwrap();
            funnel.groups[0].cards[0].pinned = true;
            funnel.groups[0].cards[2].pinned = true;
        }
        let funnel = board.active_funnel().unwrap();
        let views = filter_funnel(funnel, &CardFilter::default());
        let ids: Vec<_> = views[0].cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["card_a1", "card_a3", "card_a2"]);
    }

    #[test]
    fn test_filter_never_mutates_the_tree() {
        let board = test_board();
        let before = serde_json::to_string(&board).unwrap();
        let funnel = board.active_funnel().unwrap();
        let _ = filter_funnel(funnel, &CardFilter::new("voltas", Some(Status::Open)));
        assert_eq!(serde_json::to_string(&board).unwrap(), before);
    }

    #[test]
    fn test_parse_status_shorthand() {
        let filter = CardFilter::parse("status:urgent voltas", None);
        assert_eq!(filter.status, Some(Status::Urgent));
        assert_eq!(filter.query, "voltas");

        let filter = CardFilter::parse("status:in_progress", None);
        assert_eq!(filter.status, Some(Status::InProgress));
        assert_eq!(filter.query, "");
    }

    #[test]
    fn test_parse_explicit_status_wins_over_shorthand() {
        let filter = CardFilter::parse("status:open", Some(Status::Closed));
        assert_eq!(filter.status, Some(Status::Closed));
    }

    #[test]
    fn test_parse_invalid_shorthand_stays_in_query() {
        let filter = CardFilter::parse("status:bogus voltas", None);
        assert_eq!(filter.status, None);
        assert_eq!(filter.query, "status:bogus voltas");
    }
}
