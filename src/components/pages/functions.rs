//! Functions page component - list, search, and manage functions

use dioxus::prelude::*;

use crate::Route;
use crate::api::{self, FunctionStore};
use crate::components::{BadgeStatus, Column, DataTable, EmptyState, PageHeader, StatusBadge};
use crate::state::filter::filter_functions;
use crate::types::FunctionSummary;

/// Group digits for display, e.g. 1432 -> "1,432"
fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn columns() -> Vec<Column<FunctionSummary>> {
    vec![
        Column::new("name", "Name", |f: &FunctionSummary| {
            rsx! {
                Link {
                    to: Route::FunctionDetail { id: f.id.clone(), tab: String::new() },
                    class: "row-link mono",
                    "{f.name}"
                }
            }
        }),
        Column::new("runtime", "Runtime", |f: &FunctionSummary| {
            rsx! { span { class: "muted mono small", "{f.runtime}" } }
        }),
        Column::new("status", "Status", |f: &FunctionSummary| {
            rsx! {
                StatusBadge {
                    status: BadgeStatus::from(f.status),
                    label: f.status.label().to_string(),
                }
            }
        }),
        Column::new("invocations", "Invocations", |f: &FunctionSummary| {
            let count = format_count(f.invocations);
            rsx! { span { class: "muted", "{count}" } }
        })
        .right(),
        Column::new("avg_duration", "Avg Duration", |f: &FunctionSummary| {
            rsx! { span { class: "muted", "{f.avg_duration}" } }
        })
        .right(),
        Column::new("last_run", "Last Run", |f: &FunctionSummary| {
            rsx! { span { class: "muted", "{f.last_run}" } }
        })
        .right(),
        Column::new("actions", "", |f: &FunctionSummary| {
            rsx! {
                div { class: "row-actions",
                    Link {
                        to: Route::FunctionDetail { id: f.id.clone(), tab: String::new() },
                        class: "row-action",
                        "View"
                    }
                    Link {
                        to: Route::FunctionDetail { id: f.id.clone(), tab: "invoke".to_string() },
                        class: "row-action",
                        "Invoke"
                    }
                }
            }
        }),
    ]
}

#[component]
pub fn Functions() -> Element {
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);
    let mut functions = use_signal(Vec::<FunctionSummary>::new);
    let mut search_query = use_signal(String::new);

    use_effect(move || {
        spawn(async move {
            loading.set(true);
            error_msg.set(None);
            match api::store().list().await {
                Ok(data) => functions.set(data),
                Err(e) => error_msg.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    let visible = filter_functions(&functions(), &search_query());
    let unfiltered_empty = functions().is_empty() && search_query().is_empty();

    rsx! {
        div { class: "page",
            PageHeader {
                title: "Functions".to_string(),
                description: "Manage your serverless functions".to_string(),
                actions: rsx! {
                    Link { to: Route::CreateFunction {}, class: "btn btn-primary", "Create Function" }
                },
            }

            div { class: "search-row",
                input {
                    class: "input search-input",
                    r#type: "search",
                    placeholder: "Search functions...",
                    value: "{search_query}",
                    oninput: move |e| search_query.set(e.value()),
                }
            }

            if let Some(err) = error_msg() {
                div { class: "error-banner", "{err}" }
            }

            if loading() {
                div { class: "loading-state",
                    div { class: "spinner" }
                    p { "Loading functions..." }
                }
            } else if unfiltered_empty {
                EmptyState {
                    title: "No functions yet".to_string(),
                    description: "Create your first serverless function to get started".to_string(),
                    action: rsx! {
                        Link { to: Route::CreateFunction {}, class: "btn btn-primary", "Create Function" }
                    },
                }
            } else {
                div { class: "table-card",
                    DataTable {
                        columns: columns(),
                        rows: visible,
                        empty_message: "No functions match your search".to_string(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_group_digits_in_threes() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(892), "892");
        assert_eq!(format_count(1432), "1,432");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn schema_covers_the_listing_columns() {
        let keys: Vec<_> = columns().iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec![
                "name",
                "runtime",
                "status",
                "invocations",
                "avg_duration",
                "last_run",
                "actions"
            ]
        );
    }
}
