//! UI components

pub mod data_table;
pub mod layout;
pub mod pages;
pub mod status_badge;

pub use data_table::{Align, Column, DataTable, EmptyState};
pub use layout::{Navbar, PageHeader};
pub use pages::{CreateFunction, FunctionDetail, Functions, Invocations};
pub use status_badge::{BadgeStatus, StatusBadge};
