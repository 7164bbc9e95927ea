//! Simulated function invocation.
//!
//! Stands in for the gateway invoke endpoint: a fixed delay followed by a
//! synthetic success payload. The async signature is the seam a real
//! client fills; callers already handle the error arm.

use rand::Rng;

use super::store::ApiError;
use crate::config;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a transaction-like identifier: "txn_" plus 9 base-36 chars
fn transaction_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("txn_{suffix}")
}

/// Build the synthetic success payload. The supplied input is neither
/// parsed nor validated; the mock always reports success.
fn mock_result() -> String {
    let value = serde_json::json!({
        "success": true,
        "transactionId": transaction_id(),
        "amount": 99.00,
        "duration": "124ms",
        "memoryUsed": "45 MB",
    });
    serde_json::to_string_pretty(&value).unwrap()
}

/// Invoke a function with the given JSON input, resolving after a fixed
/// delay with the pretty-printed result payload.
pub async fn invoke_function(function_id: &str, _input: &str) -> Result<String, ApiError> {
    gloo_timers::future::TimeoutFuture::new(config::INVOKE_LATENCY_MS).await;
    tracing::info!(function_id, "simulated invocation completed");
    Ok(mock_result())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_ids_have_the_expected_shape() {
        let id = transaction_id();
        assert!(id.starts_with("txn_"));
        assert_eq!(id.len(), 13);
        assert!(
            id["txn_".len()..]
                .bytes()
                .all(|b| BASE36.contains(&b))
        );
    }

    #[test]
    fn result_payload_reports_success() {
        let payload = mock_result();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["success"], serde_json::json!(true));
        assert!(
            value["transactionId"]
                .as_str()
                .unwrap()
                .starts_with("txn_")
        );
    }
}
