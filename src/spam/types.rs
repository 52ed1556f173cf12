use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user's report that a phone number is spam.
///
/// Immutable once created; a reporter may not report the same number twice.
#[derive(Debug, Clone)]
pub struct SpamReport {
    pub id: u64,
    pub reporter_id: u64,
    pub phone_number: String,
    pub reported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpamReportRequest {
    pub phone_number: String,
}

/// Client-visible projection of a [`SpamReport`]. The reporter is implied by
/// the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpamReportView {
    pub id: u64,
    pub phone_number: String,
    pub reported_at: DateTime<Utc>,
}

impl SpamReportView {
    pub fn of(report: &SpamReport) -> Self {
        Self {
            id: report.id,
            phone_number: report.phone_number.clone(),
            reported_at: report.reported_at,
        }
    }
}
