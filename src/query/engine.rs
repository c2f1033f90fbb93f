//! Ticket listing: filter, then sort
//!
//! Filtering is a case-insensitive substring match over each ticket's
//! title and author. Sorting is always descending (highest priority or
//! newest first) and stable, so equally-keyed tickets keep their
//! snapshot order.

use std::cmp::Reverse;

use crate::store::Ticket;

/// Fields a listing may sort by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    Priority,
    #[default]
    Time,
}

impl SortField {
    /// Accepted `sort_by` values, in the order validation reports them.
    pub const ALLOWED: [&'static str; 2] = ["priority", "time"];

    /// Parses a query-string value against the allow-list.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "priority" => Some(Self::Priority),
            "time" => Some(Self::Time),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Time => "time",
        }
    }
}

fn sort_value(ticket: &Ticket, field: SortField) -> i64 {
    match field {
        SortField::Priority => ticket.priority,
        SortField::Time => ticket.time,
    }
}

/// Filters `tickets` by `query`, then sorts the survivors descending by
/// `sort_by`.
///
/// An empty query keeps every ticket. The sort is stable: ties keep the
/// order of the incoming snapshot.
pub fn filter_and_sort(mut tickets: Vec<Ticket>, query: &str, sort_by: SortField) -> Vec<Ticket> {
    let needle = query.to_lowercase();

    tickets.retain(|ticket| ticket.search_text().contains(&needle));
    tickets.sort_by_key(|ticket| Reverse(sort_value(ticket, sort_by)));
    tickets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: &str, title: &str, author: &str, priority: i64, time: i64) -> Ticket {
        let mut ticket = Ticket::draft(title, "", author, time);
        ticket.id = id.to_string();
        ticket.priority = priority;
        ticket
    }

    fn ids(tickets: &[Ticket]) -> Vec<&str> {
        tickets.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_sort_field_parse() {
        assert_eq!(SortField::parse("priority"), Some(SortField::Priority));
        assert_eq!(SortField::parse("time"), Some(SortField::Time));
        assert_eq!(SortField::parse("title"), None);
        assert_eq!(SortField::parse("Priority"), None);
        assert_eq!(SortField::parse(""), None);
    }

    #[test]
    fn test_sort_field_default_is_time() {
        assert_eq!(SortField::default(), SortField::Time);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let tickets = vec![
            ticket("a", "one", "x", 1, 1),
            ticket("b", "two", "y", 2, 2),
        ];

        let result = filter_and_sort(tickets, "", SortField::Time);

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_descending_by_time() {
        let tickets = vec![
            ticket("a", "t", "x", 0, 10),
            ticket("b", "t", "x", 0, 20),
            ticket("c", "t", "x", 0, 5),
        ];

        let result = filter_and_sort(tickets, "", SortField::Time);

        let times: Vec<i64> = result.iter().map(|t| t.time).collect();
        assert_eq!(times, vec![20, 10, 5]);
    }

    #[test]
    fn test_descending_by_priority() {
        let tickets = vec![
            ticket("a", "t", "x", 1, 0),
            ticket("b", "t", "x", 3, 0),
            ticket("c", "t", "x", 2, 0),
        ];

        let result = filter_and_sort(tickets, "", SortField::Priority);

        assert_eq!(ids(&result), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_snapshot_order() {
        let tickets = vec![
            ticket("a", "t", "x", 5, 9),
            ticket("b", "t", "x", 5, 1),
            ticket("c", "t", "x", 5, 4),
        ];

        let result = filter_and_sort(tickets, "", SortField::Priority);

        assert_eq!(ids(&result), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_both_ways() {
        let tickets = vec![
            ticket("a", "VPN Down", "Alice", 0, 0),
            ticket("b", "printer", "bob", 0, 0),
        ];

        let upper_query = filter_and_sort(tickets.clone(), "VPN", SortField::Time);
        assert_eq!(ids(&upper_query), vec!["a"]);

        let lower_query = filter_and_sort(tickets, "vpn", SortField::Time);
        assert_eq!(ids(&lower_query), vec!["a"]);
    }

    #[test]
    fn test_filter_matches_author() {
        let tickets = vec![
            ticket("a", "one", "carol", 0, 0),
            ticket("b", "two", "dave", 0, 0),
        ];

        let result = filter_and_sort(tickets, "carol", SortField::Time);

        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_filter_spans_title_author_junction() {
        let tickets = vec![ticket("a", "abc", "def", 0, 0)];

        let result = filter_and_sort(tickets, "cde", SortField::Time);

        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_filter_no_match() {
        let tickets = vec![ticket("a", "one", "x", 0, 0)];

        let result = filter_and_sort(tickets, "zzz", SortField::Time);

        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_applies_before_sort() {
        let tickets = vec![
            ticket("a", "network", "x", 0, 30),
            ticket("b", "other", "x", 0, 20),
            ticket("c", "network slow", "x", 0, 10),
        ];

        let result = filter_and_sort(tickets, "network", SortField::Time);

        assert_eq!(ids(&result), vec!["a", "c"]);
    }
}
