//! Access-log line records.
//!
//! A raw line is reduced to the two fields the counters care about: the client address at the
//! start of the line and the user-agent string in the last quoted field. Classification of the
//! user agent happens later, through the session's cache.

mod parse;
mod types;

#[cfg(test)]
mod tests;

pub use parse::{extract_ip, extract_user_agent, parse_line};
pub use types::{LineRecord, ParsedRecord};
