mod parse;
mod types;


pub use parse::{parse_line, parse_log};
pub use types::*;
