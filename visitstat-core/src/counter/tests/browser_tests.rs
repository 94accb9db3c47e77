use crate::counter::{BROWSERS_CATEGORY, BrowserCounter, CategoryCounter};
use crate::record::ParsedRecord;
use crate::test_helpers::record_with_families;

#[test]
fn counts_browser_family() {
    let mut counter = BrowserCounter::new(BROWSERS_CATEGORY);

    counter.consume(&record_with_families(Some("Windows"), Some("Firefox")));
    counter.consume(&record_with_families(Some("iOS"), Some("Safari")));
    counter.consume(&record_with_families(Some("Windows"), Some("Firefox")));

    let table = counter.frequency_table();
    assert_eq!(table.get("Firefox"), Some(2));
    assert_eq!(table.get("Safari"), Some(1));
    assert_eq!(counter.category_name(), "Browsers");
}

#[test]
fn skips_records_without_browser() {
    let mut counter = BrowserCounter::new(BROWSERS_CATEGORY);

    counter.consume(&ParsedRecord::default());
    counter.consume(&record_with_families(Some("Windows"), None));

    assert!(counter.frequency_table().is_empty());
}

#[test]
fn table_sum_never_exceeds_records_seen() {
    let mut counter = BrowserCounter::new(BROWSERS_CATEGORY);
    let records = [
        record_with_families(None, Some("Firefox")),
        ParsedRecord::default(),
        record_with_families(None, Some("Chrome")),
        record_with_families(None, None),
    ];

    for record in &records {
        counter.consume(record);
    }

    assert!(counter.frequency_table().total() <= records.len() as u64);
    assert_eq!(counter.frequency_table().total(), 2);
}
