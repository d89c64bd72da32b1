use opskit::report::ImportReport;
use opskit::summary::summarize;
use serde_json::json;

fn parse(doc: serde_json::Value) -> ImportReport {
    ImportReport::parse(doc).expect("valid report")
}

#[test]
fn empty_report_is_all_zeroes() {
    let s = summarize(&parse(json!({ "report": [], "status": "reached_end" })));
    assert_eq!(s.pages_scanned, 0);
    assert_eq!(s.prospects_counts, 0);
    assert_eq!(s.average_scanned_per_page, 0.0);
    assert_eq!(s.success_count, 0);
    assert_eq!(s.error_count, 0);
    assert!(s.errors_reasons.is_empty());
}

#[test]
fn single_page_mixed_outcomes() {
    let s = summarize(&parse(json!({
        "report": [{
            "page": 1,
            "status": "done",
            "prospects": [
                { "status": "success" },
                { "status": "error", "reason": "timeout" },
            ],
        }],
        "status": "done",
    })));

    assert_eq!(s.pages_scanned, 1);
    assert_eq!(s.prospects_counts, 2);
    assert_eq!(s.success_count, 1);
    assert_eq!(s.error_count, 1);
    assert_eq!(s.average_scanned_per_page, 2.0);
    assert_eq!(s.errors_reasons.get("timeout"), Some(&1));
    assert_eq!(s.errors_reasons.len(), 1);
}

#[test]
fn average_divides_by_page_count() {
    let s = summarize(&parse(json!({
        "report": [
            {
                "page": 1,
                "status": "done",
                "prospects": [
                    { "status": "success" },
                    { "status": "success" },
                    { "status": "success" },
                ],
            },
            {
                "page": 2,
                "status": "done",
                "prospects": [{ "status": "success" }],
            },
        ],
        "status": "done",
    })));

    assert_eq!(s.pages_scanned, 2);
    assert_eq!(s.prospects_counts, 4);
    assert_eq!(s.average_scanned_per_page, 2.0);
}

#[test]
fn counters_are_consistent() {
    let s = summarize(&parse(json!({
        "report": [
            {
                "page": 1,
                "status": "done",
                "prospects": [
                    { "status": "success" },
                    { "status": "error", "reason": "timeout" },
                    { "status": "error" },
                    { "status": "error", "reason": "" },
                ],
            },
            {
                "page": 2,
                "status": "done",
                "prospects": [
                    { "status": "error", "reason": "timeout" },
                    { "status": "error", "reason": "bounced" },
                ],
            },
        ],
        "status": "reached_end",
    })));

    assert_eq!(s.pages_scanned, 2);
    assert_eq!(s.success_count + s.error_count, s.prospects_counts);

    // Only error prospects with a non-empty reason are attributed.
    let attributed: u64 = s.errors_reasons.values().sum();
    assert!(attributed <= s.error_count);
    assert_eq!(attributed, 3);
    assert_eq!(s.errors_reasons.get("timeout"), Some(&2));
    assert_eq!(s.errors_reasons.get("bounced"), Some(&1));
}

#[test]
fn summarize_is_deterministic() {
    let report = parse(json!({
        "report": [{
            "page": 1,
            "status": "done",
            "prospects": [{ "status": "error", "reason": "timeout" }],
        }],
        "status": "done",
    }));

    assert_eq!(summarize(&report), summarize(&report));
}
