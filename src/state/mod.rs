//! View-model state: typed finite-state fields with explicit transitions

pub mod filter;
pub mod tabs;
pub mod wizard;
