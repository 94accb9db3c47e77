#![allow(dead_code)]

use visitstat_core::counter::{BROWSERS_CATEGORY, COUNTRIES_CATEGORY, OPERATING_SYSTEMS_CATEGORY};
use visitstat_core::test_helpers::{StubClassifier, StubResolver};
use visitstat_core::{
    AnalysisSession, BrowserCounter, CategoryCounter, ClassificationCache, CountryCounter,
    OsCounter,
};

pub fn all_counters() -> Vec<Box<dyn CategoryCounter>> {
    vec![
        Box::new(CountryCounter::new(COUNTRIES_CATEGORY, StubResolver::sample())),
        Box::new(OsCounter::new(OPERATING_SYSTEMS_CATEGORY)),
        Box::new(BrowserCounter::new(BROWSERS_CATEGORY)),
    ]
}

pub fn session(lines: Vec<String>, classifier: StubClassifier) -> AnalysisSession {
    AnalysisSession::with_counters(lines, ClassificationCache::new(classifier), all_counters())
}
