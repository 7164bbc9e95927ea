//! Shared domain types for the console

use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// STATUS ENUMS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Lifecycle status of a deployed function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionStatus {
    Active,
    Error,
    Inactive,
}

impl FunctionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FunctionStatus::Active => "Active",
            FunctionStatus::Error => "Error",
            FunctionStatus::Inactive => "Inactive",
        }
    }
}

/// Outcome of a single invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationStatus {
    Success,
    Error,
}

impl InvocationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InvocationStatus::Success => "Success",
            InvocationStatus::Error => "Failed",
        }
    }
}

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Error => "error",
        }
    }
}

/// How the function source is provided in the create wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Inline,
    Zip,
    Docker,
}

impl SourceType {
    pub const ALL: [SourceType; 3] = [SourceType::Inline, SourceType::Zip, SourceType::Docker];

    pub fn id(&self) -> &'static str {
        match self {
            SourceType::Inline => "inline",
            SourceType::Zip => "zip",
            SourceType::Docker => "docker",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SourceType::Inline => "Inline Code",
            SourceType::Zip => "Zip Upload",
            SourceType::Docker => "Docker Image",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            SourceType::Inline => "Write code directly",
            SourceType::Zip => "Upload a .zip file",
            SourceType::Docker => "Use a container",
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FUNCTION TYPES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Row-level function data for the listing screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSummary {
    pub id: String,
    pub name: String,
    pub runtime: String,
    pub status: FunctionStatus,
    pub last_run: String,
    pub invocations: u64,
    /// "-" when the function has never run
    pub avg_duration: String,
}

/// A single environment variable pair. Keys are unique by convention but
/// not enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvVar {
    pub key: String,
    pub value: String,
}

/// Full per-function data for the detail screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDetail {
    pub summary: FunctionSummary,
    pub code: String,
    pub memory_mb: u32,
    pub timeout_secs: u32,
    pub env_vars: Vec<EnvVar>,
    pub created_at: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// INVOCATION / LOG TYPES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A single execution record of a function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationRecord {
    pub id: String,
    pub request_id: String,
    pub function_name: String,
    pub status: InvocationStatus,
    pub duration: String,
    pub memory: String,
    pub timestamp: String,
}

/// A log line emitted by a function run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
    pub request_id: String,
}
