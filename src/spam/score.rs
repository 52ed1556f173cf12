use std::collections::HashMap;

use crate::storage::memory::{SpamReportStore, UserStore};

/// Normalized spam likelihood: report count as a percentage of the
/// registered population. An empty directory scores `0.0` rather than
/// dividing by zero.
pub fn spam_likelihood(report_count: usize, total_users: usize) -> f64 {
    if total_users == 0 {
        return 0.0;
    }
    report_count as f64 * 100.0 / total_users as f64
}

/// Score for a single phone number, one count query per store.
pub fn score_for(phone_number: &str, reports: &SpamReportStore, users: &UserStore) -> f64 {
    spam_likelihood(reports.count_by_phone(phone_number), users.count())
}

/// Phone → score table for every number with at least one report, built from
/// one grouped count and one population count. Numbers absent from the table
/// implicitly score `0.0`.
///
/// Name searches must use this instead of [`score_for`] per row: scoring each
/// candidate individually re-counts the report store once per result.
pub fn score_table(reports: &SpamReportStore, users: &UserStore) -> HashMap<String, f64> {
    let total_users = users.count();

    reports
        .counts_grouped_by_phone()
        .into_iter()
        .map(|(phone_number, count)| (phone_number, spam_likelihood(count, total_users)))
        .collect()
}
