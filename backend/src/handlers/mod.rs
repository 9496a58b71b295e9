//! HTTP handlers for the Agricultural Production Dashboard

pub mod dashboard;
pub mod health;
pub mod page;
pub mod selection;

pub use dashboard::*;
pub use health::*;
pub use page::*;
pub use selection::*;
