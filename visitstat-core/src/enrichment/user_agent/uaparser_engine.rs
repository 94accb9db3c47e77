use crate::enrichment::user_agent::Classification;
use uaparser::{Parser, UserAgentParser};

pub struct UaParserEngine {
    parser: UserAgentParser,
}

impl UaParserEngine {
    pub fn new(regexes_yaml: &[u8]) -> anyhow::Result<Self> {
        let parser = UserAgentParser::from_bytes(regexes_yaml)?;
        Ok(Self { parser })
    }

    pub fn parse(&self, ua: &str) -> Classification {
        let client = self.parser.parse(ua);

        Classification {
            os_family: Some(client.os.family.to_string()),
            browser_family: Some(client.user_agent.family.to_string()),
        }
    }
}
