use crate::record::LineRecord;
use once_cell::sync::Lazy;
use regex::Regex;

// Octets are not range-checked; "999.999.999.999" is accepted here and rejected at lookup time.
static IP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)").expect("IP pattern is valid"));

// Last non-empty quoted field with no further quote after it. `[^"]` also matches newlines.
static USER_AGENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)"[^"]*$"#).expect("user-agent pattern is valid"));

pub fn parse_line(line: &str) -> LineRecord {
    LineRecord {
        ip: extract_ip(line),
        user_agent: extract_user_agent(line),
    }
}

pub fn extract_ip(line: &str) -> Option<String> {
    IP_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn extract_user_agent(line: &str) -> Option<String> {
    USER_AGENT_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
