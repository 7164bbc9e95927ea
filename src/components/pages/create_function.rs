//! Create-function wizard page

use dioxus::prelude::*;

use crate::Route;
use crate::api::{self, FunctionStore};
use crate::components::PageHeader;
use crate::config;
use crate::state::wizard::{RUNTIMES, WizardState, WizardStep, format_cost};
use crate::types::SourceType;

#[component]
pub fn CreateFunction() -> Element {
    let mut wizard = use_signal(WizardState::default);
    let mut show_errors = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut submit_error = use_signal(|| None::<String>);

    let back_handler = move |_| {
        let mut w = wizard();
        if w.retreat() {
            wizard.set(w);
        }
    };

    let next_handler = move |_| {
        let mut w = wizard();
        if w.advance() {
            show_errors.set(false);
            wizard.set(w);
        } else {
            show_errors.set(true);
        }
    };

    let create_handler = move |_| {
        if submitting() {
            return;
        }
        spawn(async move {
            submitting.set(true);
            submit_error.set(None);
            let draft = wizard().draft;
            match api::store().create(&draft).await {
                Ok(created) => {
                    tracing::info!(name = %created.name, "function created");
                    navigator().push(Route::Functions {});
                }
                Err(e) => {
                    submit_error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    let state = wizard();
    let current = state.step;
    let draft = state.draft.clone();
    let errors = if show_errors() { state.errors() } else { Vec::new() };
    let field_error = |field: &str| errors.iter().find(|e| e.field == field).map(|e| e.message);
    let name_error = field_error("name");
    let code_error = field_error("code");
    let runtime_error = field_error("runtime");
    let memory_error = field_error("memory");
    let timeout_error = field_error("timeout");

    let memory_min = config::MEMORY_MB_MIN;
    let memory_max = config::MEMORY_MB_MAX;
    let memory_step = config::MEMORY_STEP_MB;
    let timeout_min = config::TIMEOUT_SECS_MIN;
    let timeout_max = config::TIMEOUT_SECS_MAX;
    let cost = format_cost(draft.memory_mb, draft.timeout_secs);
    let display_name = if draft.name.is_empty() {
        "-".to_string()
    } else {
        draft.name.clone()
    };
    let configured = draft.configured_env_vars();
    let last_env_row = draft.env_vars.len().saturating_sub(1);

    rsx! {
        div { class: "page",
            PageHeader {
                title: "Create Function".to_string(),
                description: "Set up a new serverless function".to_string(),
                actions: rsx! {
                    Link { to: Route::Functions {}, class: "btn btn-ghost", "Cancel" }
                },
            }
            div { class: "stepper",
                for (i, step) in WizardStep::ALL.into_iter().enumerate() {
                    div {
                        key: "{step.position()}",
                        class: if step == current {
                            "step step-current"
                        } else if step < current {
                            "step step-done"
                        } else {
                            "step"
                        },
                        span { "{step.position()}" }
                        span { "{step.title()}" }
                    }
                }
            }
            // Navigation
            div { class: "wizard-nav",
                button {
                    class: "btn btn-ghost",
                    disabled: current == WizardStep::Source,
                    onclick: back_handler,
                    "← Back"
                }
                if current != WizardStep::Review {
                    button {
                        class: "btn btn-primary",
                        disabled: !state.can_proceed(),
                        onclick: next_handler,
                        "Next →"
                    }
                } else {
                    div { class: "wizard-nav-end",
                        button {
                            class: "btn btn-primary",
                            disabled: submitting(),
                            onclick: create_handler,
                            if submitting() { "Creating..." } else { "Create Function" }
                        }
                    }
                }
            }
        }
    }
}