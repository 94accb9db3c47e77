use crate::enrichment::user_agent::{Classification, UNKNOWN_FAMILY};
use woothee::parser::Parser;

const WOOTHEE_UNKNOWN: &str = "UNKNOWN";

pub struct WootheeEngine {
    parser: Parser,
}

impl Default for WootheeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WootheeEngine {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn parse(&self, ua: &str) -> Classification {
        let Some(result) = self.parser.parse(ua) else {
            return Classification {
                os_family: Some(UNKNOWN_FAMILY.to_string()),
                browser_family: Some(UNKNOWN_FAMILY.to_string()),
            };
        };

        Classification {
            os_family: Some(os_family(result.os).to_string()),
            browser_family: Some(browser_family(result.name).to_string()),
        }
    }
}

/// Woothee reports OS releases ("Windows 7", "iPad"); collapse them to families.
pub(crate) fn os_family(os: &str) -> &str {
    match os {
        WOOTHEE_UNKNOWN | "" => UNKNOWN_FAMILY,
        "iPhone" | "iPad" | "iPod" => "iOS",
        "Mac OSX" => "Mac OS X",
        os if os.starts_with("Windows") => "Windows",
        os => os,
    }
}

pub(crate) fn browser_family(name: &str) -> &str {
    match name {
        WOOTHEE_UNKNOWN | "" => UNKNOWN_FAMILY,
        name => name,
    }
}
