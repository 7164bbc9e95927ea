//! Function detail page component - overview, code, config, test-invoke,
//! and logs for a single function

use dioxus::prelude::*;

use crate::Route;
use crate::api::{self, FunctionStore};
use crate::components::{BadgeStatus, StatusBadge};
use crate::state::tabs::DetailTab;
use crate::types::LogEntry;

const DEFAULT_TEST_INPUT: &str = r#"{
  "amount": 99.00,
  "currency": "USD",
  "method": "card"
}"#;

#[component]
pub fn FunctionDetail(id: String, tab: String) -> Element {
    let initial_tab = DetailTab::from_param(&tab);
    let mut active_tab = use_signal(move || initial_tab);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);
    let mut function = use_signal(|| None::<crate::types::FunctionDetail>);
    let mut logs = use_signal(Vec::<LogEntry>::new);
    let mut test_input = use_signal(|| DEFAULT_TEST_INPUT.to_string());
    let mut test_output = use_signal(String::new);
    let mut running = use_signal(|| false);

    let load_id = id.clone();
    use_effect(move || {
        let id = load_id.clone();
        spawn(async move {
            loading.set(true);
            error_msg.set(None);
            match api::store().get(&id).await {
                Ok(data) => {
                    match api::store().logs(&id).await {
                        Ok(entries) => logs.set(entries),
                        Err(e) => tracing::error!("failed to load logs: {e}"),
                    }
                    function.set(Some(data));
                }
                Err(e) => error_msg.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    let invoke_id = id.clone();
    let invoke_handler = move |_| {
        if running() {
            return;
        }
        let id = invoke_id.clone();
        spawn(async move {
            running.set(true);
            test_output.set(String::new());
            match api::invoke_function(&id, &test_input()).await {
                Ok(result) => test_output.set(result),
                Err(e) => test_output.set(format!("✗ Error: {e}")),
            }
            running.set(false);
        });
    };

    let delete_id = id.clone();
    let delete_handler = move |_| {
        let id = delete_id.clone();
        spawn(async move {
            match api::store().delete(&id).await {
                Ok(()) => {
                    navigator().push(Route::Functions {});
                }
                Err(e) => error_msg.set(Some(e.to_string())),
            }
        });
    };

    let mut copied = use_signal(|| false);
    let copy_handler = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(f) = function() {
                spawn(async move {
                    if let Some(window) = web_sys::window() {
                        let promise = window.navigator().clipboard().write_text(&f.code);
                        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
                        copied.set(true);
                        gloo_timers::future::TimeoutFuture::new(2000).await;
                        copied.set(false);
                    }
                });
            }
        }
    };

    let log_entries = logs();

    rsx! {
        div { class: "page",
            if loading() {
                div { class: "loading-state",
                    div { class: "spinner" }
                    p { "Loading function..." }
                }
            } else if let Some(err) = error_msg() {
                div { class: "error-banner", "{err}" }
                Link { to: Route::Functions {}, class: "btn btn-ghost", "← Back to functions" }
            } else if let Some(f) = function() {
                // Header
                div { class: "detail-header",
                    div {
                        div { class: "detail-title-row",
                            Link { to: Route::Functions {}, class: "btn btn-ghost", "←" }
                            h1 { class: "detail-title", "{f.summary.name}" }
                            StatusBadge {
                                status: BadgeStatus::from(f.summary.status),
                                label: f.summary.status.label().to_string(),
                            }
                        }
                        p { class: "detail-meta",
                            "{f.summary.runtime} · {f.memory_mb} MB · {f.timeout_secs}s timeout"
                        }
                    }
                    div { class: "detail-actions",
                        button { class: "btn btn-danger", onclick: delete_handler, "Delete" }
                    }
                }

                // Tabs
                div { class: "tabs",
                    for t in DetailTab::ALL {
                        button {
                            key: "{t.param()}",
                            class: if active_tab() == t { "tab tab-active" } else { "tab" },
                            onclick: move |_| active_tab.set(t),
                            "{t.title()}"
                        }
                    }
                }

                // Overview
                if active_tab() == DetailTab::Overview {
                    div { class: "stat-grid",
                        div { class: "stat-card",
                            p { class: "stat-label", "Invocations (24h)" }
                            p { class: "stat-value", "{f.summary.invocations}" }
                        }
                        div { class: "stat-card",
                            p { class: "stat-label", "Avg Duration" }
                            p { class: "stat-value", "{f.summary.avg_duration}" }
                        }
                        div { class: "stat-card",
                            p { class: "stat-label", "Memory" }
                            p { class: "stat-value", "{f.memory_mb} MB" }
                        }
                        div { class: "stat-card",
                            p { class: "stat-label", "Last Run" }
                            p { class: "stat-value", "{f.summary.last_run}" }
                        }
                    }
                    div { class: "detail-card",
                        h3 { class: "detail-card-title", "Function Details" }
                        div { class: "detail-grid",
                            div {
                                p { class: "muted", "Function ID" }
                                p { class: "mono", "{f.summary.id}" }
                            }
                            div {
                                p { class: "muted", "Created" }
                                p { "{f.created_at}" }
                            }
                            div {
                                p { class: "muted", "Runtime" }
                                p { "{f.summary.runtime}" }
                            }
                            div {
                                p { class: "muted", "Timeout" }
                                p { "{f.timeout_secs} seconds" }
                            }
                        }
                    }
                }

                // Code
                if active_tab() == DetailTab::Code {
                    div { class: "terminal",
                        div { class: "terminal-header",
                            span { class: "mono", "main.go" }
                            button {
                                class: "btn btn-ghost",
                                onclick: copy_handler,
                                if copied() { "Copied!" } else { "Copy" }
                            }
                        }
                        pre { class: "code-block", "{f.code}" }
                    }
                }

                // Configuration
                if active_tab() == DetailTab::Config {
                    div { class: "detail-card",
                        h3 { class: "detail-card-title", "Environment Variables" }
                        if f.env_vars.is_empty() {
                            p { class: "muted", "No environment variables configured" }
                        }
                        for (i, env) in f.env_vars.iter().enumerate() {
                            div { key: "{i}", class: "kv-row",
                                span { class: "mono", "{env.key}" }
                                span { class: "muted", "=" }
                                span { class: "mono muted", "{env.value}" }
                            }
                        }
                    }
                }

                // Invoke / Test
                if active_tab() == DetailTab::Invoke {
                    div { class: "invoke-grid",
                        div {
                            div { class: "invoke-panel-header",
                                h3 { class: "invoke-panel-title", "Input (JSON)" }
                                button {
                                    class: "btn btn-primary",
                                    disabled: running(),
                                    onclick: invoke_handler,
                                    if running() { "Running..." } else { "Run" }
                                }
                            }
                            textarea {
                                class: "code-input",
                                rows: 14,
                                placeholder: "{{\"key\": \"value\"}}",
                                value: "{test_input}",
                                oninput: move |e| test_input.set(e.value()),
                            }
                        }
                        div {
                            div { class: "invoke-panel-header",
                                h3 { class: "invoke-panel-title", "Output" }
                            }
                            div { class: "invoke-output",
                                if test_output().is_empty() {
                                    div { class: "invoke-placeholder",
                                        if running() { "Executing..." } else { "Run the function to see output" }
                                    }
                                } else {
                                    pre { class: "code-block", "{test_output}" }
                                }
                            }
                        }
                    }
                }

                // Logs
                if active_tab() == DetailTab::Logs {
                    div { class: "terminal",
                        div { class: "terminal-header",
                            span { "Recent logs" }
                        }
                        for (i, log) in log_entries.iter().enumerate() {
                            div { key: "{i}", class: "log-row",
                                span { class: "log-time", "{log.timestamp}" }
                                span {
                                    class: if log.level == crate::types::LogLevel::Error {
                                        "log-level log-level-error"
                                    } else {
                                        "log-level"
                                    },
                                    "{log.level.as_str()}"
                                }
                                span { class: "log-message", "{log.message}" }
                                span { class: "log-request", "{log.request_id}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
