//! Repository contract for function data, plus the in-memory
//! implementation that backs the console.

use std::sync::{LazyLock, Mutex};

use async_trait::async_trait;

use super::mock;
use crate::state::wizard::WizardDraft;
use crate::types::{
    FunctionDetail, FunctionStatus, FunctionSummary, InvocationRecord, LogEntry,
};

/// Errors surfaced by the data access layer
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("function not found: {id}")]
    NotFound { id: String },
    #[error("service error: {0}")]
    Service(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Repository contract for function data. The console ships only the
/// in-memory implementation; a production build adds one backed by the
/// control plane API.
#[async_trait(?Send)]
pub trait FunctionStore {
    async fn list(&self) -> Result<Vec<FunctionSummary>, ApiError>;
    async fn get(&self, id: &str) -> Result<FunctionDetail, ApiError>;
    async fn create(&self, draft: &WizardDraft) -> Result<FunctionSummary, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
    async fn invocations(&self) -> Result<Vec<InvocationRecord>, ApiError>;
    async fn logs(&self, function_id: &str) -> Result<Vec<LogEntry>, ApiError>;
}

/// In-memory store seeded from the mock fixtures. State lives for the
/// lifetime of the page and is rebuilt on reload.
pub struct InMemoryStore {
    functions: Mutex<Vec<FunctionDetail>>,
    invocations: Vec<InvocationRecord>,
    logs: Vec<LogEntry>,
}

impl InMemoryStore {
    pub fn seeded() -> Self {
        Self {
            functions: Mutex::new(mock::functions()),
            invocations: mock::invocations(),
            logs: mock::recent_logs(),
        }
    }

    fn lock_functions(&self) -> Result<std::sync::MutexGuard<'_, Vec<FunctionDetail>>, ApiError> {
        self.functions
            .lock()
            .map_err(|_| ApiError::Service("function store is unavailable".to_string()))
    }

    /// Next "fn-N" identifier, one past the highest numeric suffix in use
    fn next_id(functions: &[FunctionDetail]) -> String {
        let max = functions
            .iter()
            .filter_map(|f| f.summary.id.strip_prefix("fn-"))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("fn-{}", max + 1)
    }
}

#[async_trait(?Send)]
impl FunctionStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<FunctionSummary>, ApiError> {
        let functions = self.lock_functions()?;
        Ok(functions.iter().map(|f| f.summary.clone()).collect())
    }

    async fn get(&self, id: &str) -> Result<FunctionDetail, ApiError> {
        let functions = self.lock_functions()?;
        functions
            .iter()
            .find(|f| f.summary.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound { id: id.to_string() })
    }

    async fn create(&self, draft: &WizardDraft) -> Result<FunctionSummary, ApiError> {
        if draft.name.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "function name is required".to_string(),
            ));
        }
        let mut functions = self.lock_functions()?;
        let id = Self::next_id(&functions);
        let detail = FunctionDetail {
            summary: FunctionSummary {
                id: id.clone(),
                name: draft.name.trim().to_string(),
                runtime: draft.runtime.clone(),
                status: FunctionStatus::Inactive,
                last_run: "-".to_string(),
                invocations: 0,
                avg_duration: "-".to_string(),
            },
            code: draft.code.clone(),
            memory_mb: draft.memory_mb,
            timeout_secs: draft.timeout_secs,
            env_vars: draft
                .env_vars
                .iter()
                .filter(|e| !e.key.is_empty())
                .cloned()
                .collect(),
            created_at: chrono::Utc::now().format("%Y-%m-%d").to_string(),
        };
        let summary = detail.summary.clone();
        functions.push(detail);
        tracing::info!(%id, "function created");
        Ok(summary)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut functions = self.lock_functions()?;
        let before = functions.len();
        functions.retain(|f| f.summary.id != id);
        if functions.len() == before {
            return Err(ApiError::NotFound { id: id.to_string() });
        }
        tracing::info!(%id, "function deleted");
        Ok(())
    }

    async fn invocations(&self) -> Result<Vec<InvocationRecord>, ApiError> {
        Ok(self.invocations.clone())
    }

    async fn logs(&self, _function_id: &str) -> Result<Vec<LogEntry>, ApiError> {
        Ok(self.logs.clone())
    }
}

static STORE: LazyLock<InMemoryStore> = LazyLock::new(InMemoryStore::seeded);

/// The process-wide store used by the pages
pub fn store() -> &'static InMemoryStore {
    &STORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_returns_seeded_functions() {
        let store = InMemoryStore::seeded();
        let functions = store.list().await.unwrap();
        assert_eq!(functions.len(), 5);
        assert_eq!(functions[0].name, "process-payment");
    }

    #[tokio::test]
    async fn get_resolves_detail_by_id() {
        let store = InMemoryStore::seeded();
        let detail = store.get("fn-1").await.unwrap();
        assert_eq!(detail.summary.name, "process-payment");
        assert_eq!(detail.memory_mb, 256);
        assert_eq!(detail.timeout_secs, 30);
        assert_eq!(detail.env_vars.len(), 2);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let store = InMemoryStore::seeded();
        assert!(matches!(
            store.get("fn-999").await,
            Err(ApiError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn create_appends_inactive_function() {
        let store = InMemoryStore::seeded();
        let mut draft = WizardDraft::default();
        draft.name = "image-tagger".to_string();
        draft.set_env_key(0, "BUCKET".to_string());
        draft.set_env_value(0, "uploads".to_string());
        draft.add_env_row();

        let created = store.create(&draft).await.unwrap();
        assert_eq!(created.status, FunctionStatus::Inactive);
        assert_eq!(created.invocations, 0);
        assert_eq!(created.avg_duration, "-");

        let detail = store.get(&created.id).await.unwrap();
        // The trailing empty row is dropped on submission
        assert_eq!(detail.env_vars.len(), 1);
        assert_eq!(store.list().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn create_rejects_empty_name() {
        let store = InMemoryStore::seeded();
        let draft = WizardDraft::default();
        assert!(matches!(
            store.create(&draft).await,
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn delete_removes_function() {
        let store = InMemoryStore::seeded();
        store.delete("fn-3").await.unwrap();
        assert!(matches!(
            store.get("fn-3").await,
            Err(ApiError::NotFound { .. })
        ));
        assert!(matches!(
            store.delete("fn-3").await,
            Err(ApiError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn created_ids_do_not_collide_after_delete() {
        let store = InMemoryStore::seeded();
        store.delete("fn-2").await.unwrap();
        let mut draft = WizardDraft::default();
        draft.name = "replacement".to_string();
        let created = store.create(&draft).await.unwrap();
        assert_eq!(created.id, "fn-6");
    }

    #[tokio::test]
    async fn never_run_functions_use_duration_sentinel() {
        let store = InMemoryStore::seeded();
        for f in store.list().await.unwrap() {
            if f.invocations == 0 {
                assert_eq!(f.avg_duration, "-");
                assert_eq!(f.status, FunctionStatus::Inactive);
            } else {
                assert_ne!(f.avg_duration, "-");
            }
        }
    }
}
