//! Listing-screen filters: a free-text query plus, for invocations, a
//! categorical status filter. Recomputation is synchronous and total on
//! every change; the collections are small and entirely local.

use crate::types::{FunctionSummary, InvocationRecord, InvocationStatus};

/// Case-insensitive substring match over the designated text fields.
/// An empty query matches everything.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Visible subset of the function listing for a search query
pub fn filter_functions(rows: &[FunctionSummary], query: &str) -> Vec<FunctionSummary> {
    rows.iter()
        .filter(|f| matches_query(&[&f.name], query))
        .cloned()
        .collect()
}

/// Status choice for the invocation listing select control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Success,
    Error,
}

impl StatusFilter {
    /// Value used by the select control
    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Success => "success",
            StatusFilter::Error => "error",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "success" => StatusFilter::Success,
            "error" => StatusFilter::Error,
            _ => StatusFilter::All,
        }
    }

    pub fn matches(&self, status: InvocationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Success => status == InvocationStatus::Success,
            StatusFilter::Error => status == InvocationStatus::Error,
        }
    }
}

/// Visible subset of the invocation listing: the query matches the function
/// name or the request id, AND-combined with the status filter.
pub fn filter_invocations(
    rows: &[InvocationRecord],
    query: &str,
    status: StatusFilter,
) -> Vec<InvocationRecord> {
    rows.iter()
        .filter(|inv| {
            matches_query(&[&inv.function_name, &inv.request_id], query)
                && status.matches(inv.status)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str) -> FunctionSummary {
        FunctionSummary {
            id: format!("fn-{name}"),
            name: name.to_string(),
            runtime: "go1.21".to_string(),
            status: crate::types::FunctionStatus::Active,
            last_run: "2 min ago".to_string(),
            invocations: 1,
            avg_duration: "10ms".to_string(),
        }
    }

    fn record(function: &str, request: &str, status: InvocationStatus) -> InvocationRecord {
        InvocationRecord {
            id: format!("inv-{request}"),
            request_id: request.to_string(),
            function_name: function.to_string(),
            status,
            duration: "100ms".to_string(),
            memory: "45 MB".to_string(),
            timestamp: "2024-01-20 14:32:15".to_string(),
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        let rows = vec![summary("process-payment"), summary("user-auth")];
        assert_eq!(filter_functions(&rows, "").len(), 2);
    }

    #[test]
    fn search_is_case_insensitive() {
        let rows = vec![summary("process-payment"), summary("user-auth")];
        let hits = filter_functions(&rows, "PAY");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "process-payment");
    }

    #[test]
    fn filtering_is_idempotent() {
        let rows = vec![
            summary("process-payment"),
            summary("user-auth"),
            summary("data-sync"),
        ];
        let once = filter_functions(&rows, "a");
        let twice = filter_functions(&once, "a");
        assert_eq!(once, twice);
    }

    #[test]
    fn invocation_query_matches_name_or_request_id() {
        let rows = vec![
            record("process-payment", "req-abc123", InvocationStatus::Success),
            record("user-auth", "req-def456", InvocationStatus::Success),
        ];
        let by_name = filter_invocations(&rows, "payment", StatusFilter::All);
        assert_eq!(by_name.len(), 1);
        let by_request = filter_invocations(&rows, "DEF456", StatusFilter::All);
        assert_eq!(by_request.len(), 1);
        assert_eq!(by_request[0].function_name, "user-auth");
    }

    #[test]
    fn status_filter_returns_exactly_the_matching_subset() {
        let rows = vec![
            record("process-payment", "req-1", InvocationStatus::Success),
            record("send-notification", "req-2", InvocationStatus::Error),
            record("resize-image", "req-3", InvocationStatus::Success),
            record("data-sync", "req-4", InvocationStatus::Error),
        ];
        let errors = filter_invocations(&rows, "", StatusFilter::Error);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|r| r.status == InvocationStatus::Error));
    }

    #[test]
    fn status_filter_round_trips_through_select_values() {
        for filter in [StatusFilter::All, StatusFilter::Success, StatusFilter::Error] {
            assert_eq!(StatusFilter::from_value(filter.value()), filter);
        }
        assert_eq!(StatusFilter::from_value("bogus"), StatusFilter::All);
    }
}
