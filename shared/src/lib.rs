//! Shared types and presentation logic for the Agricultural Production Dashboard
//!
//! This crate holds the yearly table, the chart catalog and the pure
//! presenter. It has no knowledge of files or HTTP, so the backend and the
//! tests drive it directly.

pub mod error;
pub mod models;
pub mod presenter;
pub mod types;

pub use error::*;
pub use models::*;
pub use presenter::*;
pub use types::*;
