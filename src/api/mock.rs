//! Centralized mock fixtures for the in-memory store.
//!
//! These builders isolate mock construction from the store implementation.
//! Extend this module with additional fixtures as needed.

use crate::types::{
    EnvVar, FunctionDetail, FunctionStatus, FunctionSummary, InvocationRecord, InvocationStatus,
    LogEntry, LogLevel,
};

const PAYMENT_HANDLER: &str = r#"package main

import (
    "context"
    "encoding/json"
)

type PaymentRequest struct {
    Amount   float64 `json:"amount"`
    Currency string  `json:"currency"`
    Method   string  `json:"method"`
}

func Handler(ctx context.Context, event json.RawMessage) (interface{}, error) {
    var req PaymentRequest
    if err := json.Unmarshal(event, &req); err != nil {
        return nil, err
    }

    // Process payment logic here
    return map[string]interface{}{
        "success": true,
        "transactionId": "txn_abc123",
        "amount": req.Amount,
    }, nil
}"#;

const DEFAULT_HANDLER: &str = r#"package main

import (
    "context"
    "encoding/json"
)

func Handler(ctx context.Context, event json.RawMessage) (interface{}, error) {
    return map[string]string{"message": "Hello, World!"}, nil
}"#;

struct FunctionSeed {
    id: &'static str,
    name: &'static str,
    runtime: &'static str,
    status: FunctionStatus,
    last_run: &'static str,
    invocations: u64,
    avg_duration: &'static str,
    code: &'static str,
    memory_mb: u32,
    timeout_secs: u32,
    env_vars: &'static [(&'static str, &'static str)],
    created_at: &'static str,
}

const FUNCTION_SEEDS: &[FunctionSeed] = &[
    FunctionSeed {
        id: "fn-1",
        name: "process-payment",
        runtime: "go1.21",
        status: FunctionStatus::Active,
        last_run: "2 min ago",
        invocations: 1432,
        avg_duration: "124ms",
        code: PAYMENT_HANDLER,
        memory_mb: 256,
        timeout_secs: 30,
        env_vars: &[
            ("STRIPE_API_KEY", "sk_test_***"),
            ("WEBHOOK_URL", "https://api.example.com/webhooks"),
        ],
        created_at: "2024-01-15",
    },
    FunctionSeed {
        id: "fn-2",
        name: "user-auth",
        runtime: "go1.21",
        status: FunctionStatus::Active,
        last_run: "15 min ago",
        invocations: 892,
        avg_duration: "89ms",
        code: DEFAULT_HANDLER,
        memory_mb: 128,
        timeout_secs: 30,
        env_vars: &[],
        created_at: "2024-01-12",
    },
    FunctionSeed {
        id: "fn-3",
        name: "send-notification",
        runtime: "go1.20",
        status: FunctionStatus::Error,
        last_run: "23 min ago",
        invocations: 234,
        avg_duration: "156ms",
        code: DEFAULT_HANDLER,
        memory_mb: 128,
        timeout_secs: 60,
        env_vars: &[("SMTP_HOST", "smtp.example.com")],
        created_at: "2024-01-10",
    },
    FunctionSeed {
        id: "fn-4",
        name: "resize-image",
        runtime: "go1.21",
        status: FunctionStatus::Active,
        last_run: "1 hour ago",
        invocations: 567,
        avg_duration: "456ms",
        code: DEFAULT_HANDLER,
        memory_mb: 512,
        timeout_secs: 120,
        env_vars: &[],
        created_at: "2024-01-08",
    },
    FunctionSeed {
        id: "fn-5",
        name: "data-sync",
        runtime: "go1.21",
        status: FunctionStatus::Inactive,
        last_run: "3 days ago",
        invocations: 0,
        avg_duration: "-",
        code: DEFAULT_HANDLER,
        memory_mb: 128,
        timeout_secs: 300,
        env_vars: &[],
        created_at: "2024-01-05",
    },
];

/// Seed functions, full detail included
pub fn functions() -> Vec<FunctionDetail> {
    FUNCTION_SEEDS
        .iter()
        .map(|seed| FunctionDetail {
            summary: FunctionSummary {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                runtime: seed.runtime.to_string(),
                status: seed.status,
                last_run: seed.last_run.to_string(),
                invocations: seed.invocations,
                avg_duration: seed.avg_duration.to_string(),
            },
            code: seed.code.to_string(),
            memory_mb: seed.memory_mb,
            timeout_secs: seed.timeout_secs,
            env_vars: seed
                .env_vars
                .iter()
                .map(|(key, value)| EnvVar {
                    key: key.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            created_at: seed.created_at.to_string(),
        })
        .collect()
}

/// Seed invocation records, newest first
pub fn invocations() -> Vec<InvocationRecord> {
    let seeds = [
        ("inv-001", "req-abc123", "process-payment", InvocationStatus::Success, "124ms", "45 MB", "2024-01-20 14:32:15"),
        ("inv-002", "req-def456", "send-notification", InvocationStatus::Error, "30012ms", "128 MB", "2024-01-20 14:31:45"),
        ("inv-003", "req-ghi789", "resize-image", InvocationStatus::Success, "456ms", "89 MB", "2024-01-20 14:30:22"),
        ("inv-004", "req-jkl012", "user-auth", InvocationStatus::Success, "89ms", "32 MB", "2024-01-20 14:28:11"),
        ("inv-005", "req-mno345", "data-sync", InvocationStatus::Success, "1234ms", "156 MB", "2024-01-20 14:25:03"),
        ("inv-006", "req-pqr678", "process-payment", InvocationStatus::Success, "118ms", "44 MB", "2024-01-20 14:22:45"),
    ];
    seeds
        .into_iter()
        .map(
            |(id, request_id, function_name, status, duration, memory, timestamp)| {
                InvocationRecord {
                    id: id.to_string(),
                    request_id: request_id.to_string(),
                    function_name: function_name.to_string(),
                    status,
                    duration: duration.to_string(),
                    memory: memory.to_string(),
                    timestamp: timestamp.to_string(),
                }
            },
        )
        .collect()
}

/// Seed log entries shown on the detail page
pub fn recent_logs() -> Vec<LogEntry> {
    let seeds = [
        ("2024-01-20 14:32:15", LogLevel::Info, "Function invoked", "req-abc123"),
        ("2024-01-20 14:32:15", LogLevel::Info, "Processing payment: $99.00 USD", "req-abc123"),
        ("2024-01-20 14:32:16", LogLevel::Info, "Payment successful: txn_abc123", "req-abc123"),
        ("2024-01-20 14:31:45", LogLevel::Error, "Invalid currency code: XXX", "req-def456"),
        ("2024-01-20 14:30:22", LogLevel::Info, "Function invoked", "req-ghi789"),
    ];
    seeds
        .into_iter()
        .map(|(timestamp, level, message, request_id)| LogEntry {
            timestamp: timestamp.to_string(),
            level,
            message: message.to_string(),
            request_id: request_id.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_have_unique_ids() {
        let functions = functions();
        let mut ids: Vec<_> = functions.iter().map(|f| f.summary.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), functions.len());
    }

    #[test]
    fn resource_values_stay_in_domain() {
        for f in functions() {
            assert!((128..=3008).contains(&f.memory_mb));
            assert!((1..=900).contains(&f.timeout_secs));
        }
    }

    #[test]
    fn error_invocations_are_present() {
        let errors: Vec<_> = invocations()
            .into_iter()
            .filter(|i| i.status == InvocationStatus::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].function_name, "send-notification");
    }
}
