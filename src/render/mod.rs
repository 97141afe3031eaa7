//! Output formats for a computed throughput result.

pub mod json;
pub mod table;

pub use json::render_json;
pub use table::render_table;
