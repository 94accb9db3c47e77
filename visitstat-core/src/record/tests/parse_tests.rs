use crate::record::{LineRecord, extract_ip, extract_user_agent, parse_line};
use crate::test_helpers::SAMPLE_LOGS;
use pretty_assertions::assert_eq;

#[test]
fn extracts_leading_ip() {
    let line = "82.166.148.154 - - [01/Mar/2025:12:34:56 +0000] \"GET / HTTP/1.1\" 200 1024";

    assert_eq!(extract_ip(line).as_deref(), Some("82.166.148.154"));
}

#[test]
fn ip_must_start_the_line() {
    let line = "- - - [01/Mar/2025:12:34:56 +0000] \"GET / HTTP/1.1\" 200 1024 \"Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36\"";

    assert_eq!(extract_ip(line), None);
    assert_eq!(extract_ip(" 10.0.0.1 - -"), None);
}

#[test]
fn ip_octets_are_not_range_checked() {
    assert_eq!(
        extract_ip("999.999.999.999 - - [x]").as_deref(),
        Some("999.999.999.999")
    );
}

#[test]
fn ip_needs_four_groups() {
    assert_eq!(extract_ip("10.0.0 - - [x]"), None);
}

#[test]
fn extracts_last_quoted_field_as_user_agent() {
    let ua = extract_user_agent(SAMPLE_LOGS[0]);

    assert_eq!(
        ua.as_deref(),
        Some("Mozilla/5.0 (Windows NT 6.1; WOW64; rv:15.0) Gecko/20100101 Firefox/15.0.1")
    );
}

#[test]
fn request_line_is_the_user_agent_when_nothing_follows() {
    let line = "82.166.148.154 - - [01/Mar/2025:12:34:56 +0000] \"GET / HTTP/1.1\" 200 1024";

    assert_eq!(extract_user_agent(line).as_deref(), Some("GET / HTTP/1.1"));
}

#[test]
fn user_agent_may_span_newlines() {
    let line = "82.166.148.154 - - [20/Jan/2013:06:56:32 -0600] \"GET\n/x HTTP/1.1\" 200 863\n\"-\" \"Mozilla/5.0 (Windows\nNT 6.1; WOW64; rv:15.0) Gecko/20100101 Firefox/15.0.1\" 361 1133 - 5625";

    assert_eq!(
        extract_user_agent(line).as_deref(),
        Some("Mozilla/5.0 (Windows\nNT 6.1; WOW64; rv:15.0) Gecko/20100101 Firefox/15.0.1")
    );
}

#[test]
fn no_quotes_means_no_user_agent() {
    assert_eq!(extract_user_agent("10.0.0.1 - - [x] GET / 200"), None);
}

#[test]
fn empty_final_quotes_yield_no_user_agent() {
    assert_eq!(extract_user_agent("10.0.0.1 \"GET /\" \"\""), None);
}

#[test]
fn parse_line_combines_both_fields() {
    let record = parse_line("10.1.2.3 - - [x] \"GET / HTTP/1.1\" 200 1 \"-\" \"curl/8.0\"");

    assert_eq!(
        record,
        LineRecord {
            ip: Some("10.1.2.3".to_string()),
            user_agent: Some("curl/8.0".to_string()),
        }
    );
}

#[test]
fn parse_line_on_garbage_is_empty() {
    assert_eq!(parse_line("garbage"), LineRecord::default());
    assert_eq!(parse_line(""), LineRecord::default());
}
