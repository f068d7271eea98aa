//! Report aggregation output types and rendering.

mod record;
mod render;

pub use record::{yes_no, AuditRecord};
pub use render::{render, render_with_timestamp, write_report};
