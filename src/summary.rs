use crate::report::{ImportReport, Page, Prospect};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub pages_scanned: u64,
    pub prospects_counts: u64,
    pub average_scanned_per_page: f64,
    pub success_count: u64,
    pub error_count: u64,
    pub errors_reasons: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default)]
struct Acc {
    pages: u64,
    prospects: u64,
    success: u64,
    error: u64,
    reasons: BTreeMap<String, u64>,
}

fn fold_page(mut acc: Acc, page: &Page) -> Acc {
    acc.pages += 1;
    acc.prospects += page.prospects.len() as u64;
    for prospect in &page.prospects {
        match prospect {
            Prospect::Success { .. } => acc.success += 1,
            Prospect::Error { .. } => acc.error += 1,
        }
        if let Some(reason) = prospect.error_reason() {
            *acc.reasons.entry(reason.to_string()).or_insert(0) += 1;
        }
    }
    acc
}

/// Single left-to-right pass over the report pages. Pure: the result
/// depends only on the input, so re-running on the same report yields
/// the same summary.
pub fn summarize(report: &ImportReport) -> Summary {
    let acc = report.report.iter().fold(Acc::default(), fold_page);

    // A zero-page report averages to 0, not NaN: divide by 1 instead.
    let divisor = acc.pages.max(1);

    Summary {
        pages_scanned: acc.pages,
        prospects_counts: acc.prospects,
        average_scanned_per_page: acc.prospects as f64 / divisor as f64,
        success_count: acc.success,
        error_count: acc.error,
        errors_reasons: acc.reasons,
    }
}
