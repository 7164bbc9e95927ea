//! Status badge component

use dioxus::prelude::*;

use crate::types::{FunctionStatus, InvocationStatus};

/// Visual treatment for a status badge. A closed set, so a status outside
/// the recognized members cannot reach the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStatus {
    Success,
    Error,
    Inactive,
}

impl BadgeStatus {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeStatus::Success => "badge badge-success",
            BadgeStatus::Error => "badge badge-error",
            BadgeStatus::Inactive => "badge badge-inactive",
        }
    }
}

impl From<FunctionStatus> for BadgeStatus {
    fn from(status: FunctionStatus) -> Self {
        match status {
            FunctionStatus::Active => BadgeStatus::Success,
            FunctionStatus::Error => BadgeStatus::Error,
            FunctionStatus::Inactive => BadgeStatus::Inactive,
        }
    }
}

impl From<InvocationStatus> for BadgeStatus {
    fn from(status: InvocationStatus) -> Self {
        match status {
            InvocationStatus::Success => BadgeStatus::Success,
            InvocationStatus::Error => BadgeStatus::Error,
        }
    }
}

#[component]
pub fn StatusBadge(status: BadgeStatus, label: String) -> Element {
    rsx! {
        span { class: "{status.class()}", "{label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_statuses_map_onto_badges() {
        assert_eq!(BadgeStatus::from(FunctionStatus::Active), BadgeStatus::Success);
        assert_eq!(BadgeStatus::from(FunctionStatus::Error), BadgeStatus::Error);
        assert_eq!(BadgeStatus::from(FunctionStatus::Inactive), BadgeStatus::Inactive);
    }

    #[test]
    fn badge_renders_class_and_label() {
        let html = dioxus_ssr::render_element(rsx! {
            StatusBadge { status: BadgeStatus::Error, label: "Failed".to_string() }
        });
        assert!(html.contains("badge-error"));
        assert!(html.contains("Failed"));
    }
}
