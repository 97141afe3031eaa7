//! Record extraction from textual RLC logs.

pub mod parse;
pub mod row;

pub use parse::{parse_line, parse_lines, parse_log_file};
pub use row::{Direction, LogRecord};
