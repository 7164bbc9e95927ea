//! Invocations page component - browse and filter execution records

use dioxus::prelude::*;

use crate::api::{self, FunctionStore};
use crate::components::{BadgeStatus, Column, DataTable, PageHeader, StatusBadge};
use crate::state::filter::{StatusFilter, filter_invocations};
use crate::types::InvocationRecord;

fn columns() -> Vec<Column<InvocationRecord>> {
    vec![
        Column::new("request_id", "Request ID", |inv: &InvocationRecord| {
            rsx! { span { class: "muted mono small", "{inv.request_id}" } }
        }),
        Column::new("function", "Function", |inv: &InvocationRecord| {
            rsx! { span { class: "mono", "{inv.function_name}" } }
        }),
        Column::new("status", "Status", |inv: &InvocationRecord| {
            rsx! {
                StatusBadge {
                    status: BadgeStatus::from(inv.status),
                    label: inv.status.label().to_string(),
                }
            }
        }),
        Column::new("duration", "Duration", |inv: &InvocationRecord| {
            rsx! { span { class: "muted mono small", "{inv.duration}" } }
        })
        .right(),
        Column::new("memory", "Memory", |inv: &InvocationRecord| {
            rsx! { span { class: "muted", "{inv.memory}" } }
        })
        .right(),
        Column::new("timestamp", "Time", |inv: &InvocationRecord| {
            rsx! { span { class: "muted small", "{inv.timestamp}" } }
        })
        .right(),
    ]
}

#[component]
pub fn Invocations() -> Element {
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);
    let mut invocations = use_signal(Vec::<InvocationRecord>::new);
    let mut search_query = use_signal(String::new);
    let mut status_filter = use_signal(StatusFilter::default);

    use_effect(move || {
        spawn(async move {
            loading.set(true);
            error_msg.set(None);
            match api::store().invocations().await {
                Ok(data) => invocations.set(data),
                Err(e) => error_msg.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    let visible = filter_invocations(&invocations(), &search_query(), status_filter());
    let status_value = status_filter().value();

    rsx! {
        div { class: "page",
            PageHeader {
                title: "Invocations".to_string(),
                description: "View all function invocations".to_string(),
            }

            div { class: "search-row",
                input {
                    class: "input search-input",
                    r#type: "search",
                    placeholder: "Search invocations...",
                    value: "{search_query}",
                    oninput: move |e| search_query.set(e.value()),
                }
                select {
                    class: "select select-compact",
                    value: "{status_value}",
                    onchange: move |e| status_filter.set(StatusFilter::from_value(&e.value())),
                    option { value: "all", "All Status" }
                    option { value: "success", "Success" }
                    option { value: "error", "Failed" }
                }
            }

            if let Some(err) = error_msg() {
                div { class: "error-banner", "{err}" }
            }

            if loading() {
                div { class: "loading-state",
                    div { class: "spinner" }
                    p { "Loading invocations..." }
                }
            } else {
                div { class: "table-card",
                    DataTable {
                        columns: columns(),
                        rows: visible,
                        empty_message: "No invocations found".to_string(),
                    }
                }
            }
        }
    }
}
