//! Tunable constants for the console
//!
//! The pricing rate and simulated latency are illustrative values carried
//! over from the product mock. They live here so callers treat them as
//! configuration rather than business rules.

/// Per GB-second rate used by the wizard cost estimate, in USD
pub const INVOCATION_RATE: f64 = 0.0000166667;

/// Fixed latency of the simulated invocation, in milliseconds
pub const INVOKE_LATENCY_MS: u32 = 1200;

/// Allowed memory allocation range, in MB
pub const MEMORY_MB_MIN: u32 = 128;
pub const MEMORY_MB_MAX: u32 = 3008;

/// Slider step for memory selection
pub const MEMORY_STEP_MB: u32 = 64;

/// Allowed timeout range, in seconds
pub const TIMEOUT_SECS_MIN: u32 = 1;
pub const TIMEOUT_SECS_MAX: u32 = 900;
