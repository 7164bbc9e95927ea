//! Create-function wizard: a linear four-step machine with per-step
//! validation and a derived cost estimate.

use crate::config;
use crate::types::{EnvVar, SourceType};

/// Runtimes offered by the wizard, as (value, label) pairs
pub const RUNTIMES: [(&str, &str); 3] = [
    ("go1.21", "Go 1.21"),
    ("go1.20", "Go 1.20"),
    ("go1.19", "Go 1.19"),
];

/// Starter handler pre-filled into the inline code editor
pub const DEFAULT_CODE: &str = r#"package main

import (
    "context"
    "encoding/json"
)

func Handler(ctx context.Context, event json.RawMessage) (interface{}, error) {
    return map[string]string{"message": "Hello, World!"}, nil
}"#;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// STEPS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The four ordered wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    Source,
    RuntimeResources,
    Metadata,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Source,
        WizardStep::RuntimeResources,
        WizardStep::Metadata,
        WizardStep::Review,
    ];

    /// 1-based position shown in the stepper
    pub fn position(&self) -> u8 {
        match self {
            WizardStep::Source => 1,
            WizardStep::RuntimeResources => 2,
            WizardStep::Metadata => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Source => "Source",
            WizardStep::RuntimeResources => "Runtime & Resources",
            WizardStep::Metadata => "Metadata",
            WizardStep::Review => "Review",
        }
    }

    fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Source => Some(WizardStep::RuntimeResources),
            WizardStep::RuntimeResources => Some(WizardStep::Metadata),
            WizardStep::Metadata => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    fn prev(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Source => None,
            WizardStep::RuntimeResources => Some(WizardStep::Source),
            WizardStep::Metadata => Some(WizardStep::RuntimeResources),
            WizardStep::Review => Some(WizardStep::Metadata),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DRAFT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The in-progress create-function form
#[derive(Debug, Clone, PartialEq)]
pub struct WizardDraft {
    pub name: String,
    pub source_type: SourceType,
    pub code: String,
    pub runtime: String,
    pub memory_mb: u32,
    pub timeout_secs: u32,
    pub env_vars: Vec<EnvVar>,
    pub tags: String,
}

impl Default for WizardDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            source_type: SourceType::Inline,
            code: DEFAULT_CODE.to_string(),
            runtime: "go1.21".to_string(),
            memory_mb: 128,
            timeout_secs: 30,
            env_vars: vec![EnvVar::default()],
            tags: String::new(),
        }
    }
}

impl WizardDraft {
    /// Environment variables with a non-empty key, i.e. the ones that count
    pub fn configured_env_vars(&self) -> usize {
        self.env_vars.iter().filter(|e| !e.key.is_empty()).count()
    }

    pub fn set_env_key(&mut self, index: usize, key: String) {
        if let Some(row) = self.env_vars.get_mut(index) {
            row.key = key;
        }
    }

    pub fn set_env_value(&mut self, index: usize, value: String) {
        if let Some(row) = self.env_vars.get_mut(index) {
            row.value = value;
        }
    }

    /// Append an empty row so another entry can be edited in
    pub fn add_env_row(&mut self) {
        self.env_vars.push(EnvVar::default());
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// VALIDATION
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A field-level validation failure, surfaced inline in the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Validate a single step. An empty result means the step is complete.
pub fn validate_step(step: WizardStep, draft: &WizardDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    match step {
        WizardStep::Source => {
            if draft.name.trim().is_empty() {
                errors.push(FieldError {
                    field: "name",
                    message: "Function name is required",
                });
            }
            if draft.code.trim().is_empty() {
                errors.push(FieldError {
                    field: "code",
                    message: "Source code is required",
                });
            }
        }
        WizardStep::RuntimeResources => {
            if draft.runtime.is_empty() {
                errors.push(FieldError {
                    field: "runtime",
                    message: "Select a runtime",
                });
            }
            if !(config::MEMORY_MB_MIN..=config::MEMORY_MB_MAX).contains(&draft.memory_mb) {
                errors.push(FieldError {
                    field: "memory",
                    message: "Memory must be between 128 and 3008 MB",
                });
            }
            if !(config::TIMEOUT_SECS_MIN..=config::TIMEOUT_SECS_MAX).contains(&draft.timeout_secs)
            {
                errors.push(FieldError {
                    field: "timeout",
                    message: "Timeout must be between 1 and 900 seconds",
                });
            }
        }
        WizardStep::Metadata | WizardStep::Review => {}
    }
    errors
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// STATE MACHINE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Wizard position plus the draft being edited
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WizardState {
    pub step: WizardStep,
    pub draft: WizardDraft,
}

impl WizardState {
    /// Whether the current step passes validation
    pub fn can_proceed(&self) -> bool {
        validate_step(self.step, &self.draft).is_empty()
    }

    /// Inline errors for the current step
    pub fn errors(&self) -> Vec<FieldError> {
        validate_step(self.step, &self.draft)
    }

    /// Advance one step if the current step validates. Returns whether the
    /// transition applied; at Review this is always a no-op since creation
    /// is a separate action.
    pub fn advance(&mut self) -> bool {
        if !self.can_proceed() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Step back unconditionally; a no-op at the first step
    pub fn retreat(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// COST ESTIMATE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Estimated cost per invocation in USD
pub fn estimated_cost(memory_mb: u32, timeout_secs: u32) -> f64 {
    (memory_mb as f64 / 1024.0) * (timeout_secs as f64 / 1000.0) * config::INVOCATION_RATE
}

/// Cost formatted to six decimal places, as displayed in the wizard
pub fn format_cost(memory_mb: u32, timeout_secs: u32) -> String {
    format!("{:.6}", estimated_cost(memory_mb, timeout_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_rejected_with_empty_name() {
        let mut state = WizardState::default();
        assert!(!state.advance());
        assert_eq!(state.step, WizardStep::Source);
        let errors = state.errors();
        assert!(errors.iter().any(|e| e.field == "name"));
    }

    #[test]
    fn advance_moves_exactly_one_step() {
        let mut state = WizardState::default();
        state.draft.name = "x".to_string();
        assert!(state.advance());
        assert_eq!(state.step, WizardStep::RuntimeResources);
    }

    #[test]
    fn advance_stops_at_review() {
        let mut state = WizardState::default();
        state.draft.name = "x".to_string();
        assert!(state.advance());
        assert!(state.advance());
        assert!(state.advance());
        assert_eq!(state.step, WizardStep::Review);
        assert!(!state.advance());
        assert_eq!(state.step, WizardStep::Review);
    }

    #[test]
    fn retreat_is_noop_at_first_step() {
        let mut state = WizardState::default();
        assert!(!state.retreat());
        assert_eq!(state.step, WizardStep::Source);
    }

    #[test]
    fn retreat_is_unconditional() {
        let mut state = WizardState {
            step: WizardStep::Metadata,
            draft: WizardDraft::default(),
        };
        // Draft has an empty name, which would block advancing from Source,
        // but stepping back never checks validity.
        assert!(state.retreat());
        assert_eq!(state.step, WizardStep::RuntimeResources);
    }

    #[test]
    fn out_of_range_memory_blocks_step_two() {
        let mut state = WizardState {
            step: WizardStep::RuntimeResources,
            draft: WizardDraft::default(),
        };
        state.draft.memory_mb = 64;
        assert!(!state.advance());
        assert!(state.errors().iter().any(|e| e.field == "memory"));

        state.draft.memory_mb = 4096;
        assert!(!state.advance());

        state.draft.memory_mb = 3008;
        assert!(state.advance());
    }

    #[test]
    fn out_of_range_timeout_blocks_step_two() {
        let mut state = WizardState {
            step: WizardStep::RuntimeResources,
            draft: WizardDraft::default(),
        };
        state.draft.timeout_secs = 0;
        assert!(!state.advance());
        assert!(state.errors().iter().any(|e| e.field == "timeout"));

        state.draft.timeout_secs = 901;
        assert!(!state.advance());
    }

    #[test]
    fn draft_starts_with_one_empty_env_row() {
        let draft = WizardDraft::default();
        assert_eq!(draft.env_vars.len(), 1);
        assert_eq!(draft.configured_env_vars(), 0);
    }

    #[test]
    fn configured_env_vars_ignores_keyless_rows() {
        let mut draft = WizardDraft::default();
        draft.set_env_key(0, "API_KEY".to_string());
        draft.set_env_value(0, "secret".to_string());
        draft.add_env_row();
        assert_eq!(draft.env_vars.len(), 2);
        assert_eq!(draft.configured_env_vars(), 1);
    }

    #[test]
    fn cost_for_minimum_resources_rounds_to_zero() {
        // (128/1024) * (30/1000) * 0.0000166667 ~= 0.0000000625
        assert_eq!(format_cost(128, 30), "0.000000");
    }

    #[test]
    fn cost_is_formatted_to_six_decimals() {
        assert_eq!(format_cost(1024, 1000), "0.000017");
        let one_gb_second = estimated_cost(1024, 1000);
        assert!((one_gb_second - crate::config::INVOCATION_RATE).abs() < 1e-12);
    }
}
