use crate::enrichment::geoip::{GeoLookupError, GeoResolver};
use crate::enrichment::user_agent::{Classification, ClassificationCache, UserAgentClassifier};
use crate::record::ParsedRecord;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// 6 logs: 3 US, 2 Germany, 1 Israel
// 4 Windows, 1 iOS, 1 Android
// 4 Firefox, 1 Safari, 1 Android
pub const SAMPLE_LOGS: [&str; 6] = [
    "82.166.148.154 - - [20/Jan/2013:06:56:32 -0600] \"GET/wp-content/themes/twentytwelve/js/navigation.js?ver=1.0 HTTP/1.1\" 200 863\"http://creditcardandloanoffers.com/?utm_source=Contextin&utm_term=_\" \"Mozilla/5.0 (Windows NT 6.1; WOW64; rv:15.0) Gecko/20100101 Firefox/15.0.1\" 361 1133 - 5625",
    "65.34.248.51 - - [20/Jan/2013:04:33:29 -0600] \"GET /?utm_source=Contextin&utm_term=E4AFE73EA95769781618402254&utm_campaign=19056&utm_content=&utm_medium=0 HTTP/1.1\" 200 9983 \"-\" \"Mozilla/5.0 (iPad; CPU OS 6_0_1 like Mac OS X) AppleWebKit/536.26 (KHTML, like Gecko) Version/6.0 Mobile/10A523 Safari/8536.25\" 625 10246 - 233945",
    "184.73.21.14 - - [20/Jan/2013:05:10:21 -0600] \"GET / HTTP/1.0\" 200 9983 \"-\" \"Mozilla/5.0 (compatible; Windows; U; Windows NT 6.2; WOW64; en-US; rv:12.0) Gecko/20120403211507 Firefox/12.0\" 308 10198 - 664093",
    "76.24.130.106 - - [27/Jan/2013:18:08:13 -0600] \"GET /?utm_source=Contextin&utm_term=RMX_UI&utm_campaign=21096&utm_content=1&utm_medium=RMX_UI HTTP/1.1\" 200 9983 \"http://ad.yieldmanager.com/st?ad_type=iframe&ad_size=300x250&section=3850335&pub_url=${PUB_URL}\" \"Mozilla/5.0 (Linux; U; Android 4.0.3; en-us; Transformer TF101 Build/IML74K) AppleWebKit/534.30 (KHTML, like Gecko) Version/4.0 Safari/534.30\" 606 10246 - 126870",
    "80.187.140.26 - - [20/Jan/2013:05:10:21 -0600] \"GET / HTTP/1.0\" 200 9983 \"-\" \"Mozilla/5.0 (compatible; Windows; U; Windows NT 6.2; WOW64; en-US; rv:12.0) Gecko/20120403211507 Firefox/12.0\" 308 10198 - 664093",
    "91.0.0.1 - - [20/Jan/2013:05:10:21 -0600] \"GET / HTTP/1.0\" 200 9983 \"-\" \"Mozilla/5.0 (compatible; Windows; U; Windows NT 6.2; WOW64; en-US; rv:12.0) Gecko/20120403211507 Firefox/12.0\" 308 10198 - 664093",
];

pub fn sample_lines() -> Vec<String> {
    SAMPLE_LOGS.iter().map(|s| s.to_string()).collect()
}

/// Keyword classifier that counts how often it is invoked.
#[derive(Clone, Default)]
pub struct StubClassifier {
    pub calls: Arc<AtomicUsize>,
}

impl StubClassifier {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl UserAgentClassifier for StubClassifier {
    fn classify(&self, ua: &str) -> Classification {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let os = if ua.contains("Windows") {
            "Windows"
        } else if ua.contains("iPad") || ua.contains("iPhone") {
            "iOS"
        } else if ua.contains("Android") {
            "Android"
        } else {
            "Other"
        };

        let browser = if ua.contains("Firefox") {
            "Firefox"
        } else if ua.contains("Android") {
            "Android"
        } else if ua.contains("Safari") {
            "Safari"
        } else {
            "Other"
        };

        Classification {
            os_family: Some(os.to_string()),
            browser_family: Some(browser.to_string()),
        }
    }
}

/// Fixed address table. Unknown addresses behave like a real database: unparseable ones are
/// malformed, the rest are not found.
#[derive(Clone, Default)]
pub struct StubResolver {
    countries: HashMap<String, String>,
}

impl StubResolver {
    pub fn sample() -> Self {
        Self::default()
            .with("82.166.148.154", "Israel")
            .with("65.34.248.51", "United States")
            .with("184.73.21.14", "United States")
            .with("76.24.130.106", "United States")
            .with("80.187.140.26", "Germany")
            .with("91.0.0.1", "Germany")
    }

    pub fn with(mut self, ip: &str, country: &str) -> Self {
        self.countries.insert(ip.to_string(), country.to_string());
        self
    }
}

impl GeoResolver for StubResolver {
    fn lookup(&self, ip: &str) -> Result<String, GeoLookupError> {
        if let Some(country) = self.countries.get(ip) {
            return Ok(country.clone());
        }

        match ip.parse::<IpAddr>() {
            Ok(_) => Err(GeoLookupError::NotFound(ip.to_string())),
            Err(e) => Err(GeoLookupError::Malformed {
                ip: ip.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

pub fn stub_cache() -> ClassificationCache {
    ClassificationCache::new(StubClassifier::default())
}

pub fn record_with_ip(ip: Option<&str>) -> ParsedRecord {
    ParsedRecord {
        ip: ip.map(str::to_string),
        ..ParsedRecord::default()
    }
}

pub fn record_with_families(os: Option<&str>, browser: Option<&str>) -> ParsedRecord {
    ParsedRecord {
        user_agent: Some("test-agent".to_string()),
        classification: Some(Arc::new(Classification {
            os_family: os.map(str::to_string),
            browser_family: browser.map(str::to_string),
        })),
        ..ParsedRecord::default()
    }
}
