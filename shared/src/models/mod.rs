//! Domain models for the Agricultural Production Dashboard

mod chart;
mod dashboard;
mod metric;
mod record;
mod summary;
mod table;

pub use chart::*;
pub use dashboard::*;
pub use metric::*;
pub use record::*;
pub use summary::*;
pub use table::*;
