use crate::counter::FrequencyTable;
use crate::report::{
    CategoryReport, ReportEntry, percentage, render, render_json, round_half_up,
};
use pretty_assertions::assert_eq;

fn table(labels: &[&str]) -> FrequencyTable {
    labels.iter().copied().collect()
}

#[test]
fn renders_header_entries_and_trailing_blank_line() {
    let t = table(&["Germany", "United States", "United States", "Israel", "Germany", "United States"]);

    let output = render(&t, "Countries", 6);

    assert_eq!(
        output,
        "Countries:\nUnited States - 50.00%\nGermany - 33.33%\nIsrael - 16.67%\n\n"
    );
}

#[test]
fn denominator_is_the_record_total_not_the_table_sum() {
    let t = table(&["Windows", "Windows"]);

    let output = render(&t, "Operating systems", 8);

    assert_eq!(output, "Operating systems:\nWindows - 25.00%\n\n");
}

#[test]
fn ties_keep_first_seen_order() {
    let t = table(&["Safari", "Android", "Firefox", "Firefox"]);

    let report = CategoryReport::new("Browsers", &t, 4);
    let labels: Vec<_> = report.entries.iter().map(|e| e.label.as_str()).collect();

    assert_eq!(labels, vec!["Firefox", "Safari", "Android"]);
}

#[test]
fn percentage_rounds_to_two_decimals_when_rendered() {
    assert_eq!(format!("{:.2}", percentage(1, 3)), "33.33");
    assert_eq!(format!("{:.2}", percentage(2, 3)), "66.67");
    assert_eq!(percentage(5, 0), 0.0);
}

#[test]
fn report_entries_carry_counts() {
    let t = table(&["iOS", "Windows", "Windows"]);

    let report = CategoryReport::new("Operating systems", &t, 4);

    assert_eq!(
        report,
        CategoryReport {
            category: "Operating systems".to_string(),
            total: 4,
            entries: vec![
                ReportEntry {
                    label: "Windows".to_string(),
                    count: 2,
                    percentage: 50.0,
                },
                ReportEntry {
                    label: "iOS".to_string(),
                    count: 1,
                    percentage: 25.0,
                },
            ],
        }
    );
}

#[test]
fn json_report_lists_categories_in_order() {
    let reports = vec![
        CategoryReport::new("Operating systems", &table(&["Windows"]), 2),
        CategoryReport::new("Browsers", &table(&["Firefox"]), 2),
    ];

    let json: serde_json::Value = serde_json::from_str(&render_json(&reports).unwrap()).unwrap();

    assert_eq!(json[0]["category"], "Operating systems");
    assert_eq!(json[0]["total"], 2);
    assert_eq!(json[0]["entries"][0]["label"], "Windows");
    assert_eq!(json[0]["entries"][0]["count"], 1);
    assert_eq!(json[0]["entries"][0]["percentage"], 50.0);
    assert_eq!(json[1]["category"], "Browsers");
}

#[test]
fn exact_halves_round_up_when_rendered() {
    let t = table(&["A"]);

    assert_eq!(render(&t, "X", 32), "X:\nA - 3.13%\n\n");
    assert_eq!(render(&t, "X", 160), "X:\nA - 0.63%\n\n");
    assert_eq!(render(&t, "X", 800), "X:\nA - 0.13%\n\n");
}

#[test]
fn round_half_up_leaves_other_values_to_nearest() {
    assert_eq!(round_half_up(3.125), 3.13);
    assert_eq!(round_half_up(16.666_666), 16.67);
    assert_eq!(round_half_up(33.333_333), 33.33);
    assert_eq!(round_half_up(50.0), 50.0);
}
