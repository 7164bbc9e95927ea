//! Data access layer: the repository contract, its in-memory
//! implementation, and the simulated invocation service

pub mod invoke;
pub mod mock;
pub mod store;

pub use invoke::invoke_function;
pub use store::{ApiError, FunctionStore, InMemoryStore, store};
