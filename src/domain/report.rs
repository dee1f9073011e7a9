//! Report domain entity and related types.
//!
//! A report is an immutable snapshot: generated once, persisted with
//! its binary content, and streamed back on download any number of
//! times without further state changes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Report kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    WorkRecords,
    Earnings,
    Detailed,
}

impl ReportKind {
    /// Document title rendered at the top of the PDF
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::WorkRecords => "Work Records Report",
            ReportKind::Earnings => "Earnings Summary Report",
            ReportKind::Detailed => "Detailed Report",
        }
    }

    /// Stable identifier stored in the reports table
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::WorkRecords => "work_records",
            ReportKind::Earnings => "earnings",
            ReportKind::Detailed => "detailed",
        }
    }
}

impl From<&str> for ReportKind {
    fn from(s: &str) -> Self {
        match s {
            "earnings" => ReportKind::Earnings,
            "detailed" => ReportKind::Detailed,
            _ => ReportKind::WorkRecords,
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Report metadata (content bytes live in `ReportDocument`)
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub id: Uuid,
    /// Owning employee; None for reports spanning all employees
    pub employee_id: Option<Uuid>,
    pub kind: ReportKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub date_created: DateTime<Utc>,
}

impl Report {
    /// Filename used in the download Content-Disposition header
    pub fn download_filename(&self) -> String {
        format!("report_{}.pdf", self.id)
    }

    /// Attach the owning employee's name for listing purposes
    pub fn into_row(self, employee_name: Option<String>) -> ReportRow {
        ReportRow {
            id: self.id,
            employee_id: self.employee_id,
            employee_name,
            kind: self.kind,
            start_date: self.start_date,
            end_date: self.end_date,
            date_created: self.date_created,
        }
    }
}

/// Report metadata joined with the owning employee's name, as listing
/// queries return it.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub id: Uuid,
    pub employee_id: Option<Uuid>,
    /// None for reports spanning all employees
    pub employee_name: Option<String>,
    pub kind: ReportKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub date_created: DateTime<Utc>,
}

/// New report data for insertion (id and timestamp assigned by the store)
#[derive(Debug, Clone)]
pub struct NewReport {
    pub employee_id: Option<Uuid>,
    pub kind: ReportKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub content: Vec<u8>,
}

/// A stored report together with its binary content, as loaded for
/// download.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub meta: Report,
    pub content: Vec<u8>,
}

/// Report metadata response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportResponse {
    /// Unique report identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Owning employee; null for reports spanning all employees
    pub employee_id: Option<Uuid>,
    /// Owning employee's name, when scoped to one employee
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Alice Johnson")]
    pub employee_name: Option<String>,
    /// Report kind
    #[schema(example = "earnings")]
    pub report_type: ReportKind,
    /// Range start (inclusive)
    pub start_date: NaiveDate,
    /// Range end (inclusive)
    pub end_date: NaiveDate,
    /// Generation timestamp
    pub date_created: DateTime<Utc>,
}

impl From<ReportRow> for ReportResponse {
    fn from(row: ReportRow) -> Self {
        Self {
            id: row.id,
            employee_id: row.employee_id,
            employee_name: row.employee_name,
            report_type: row.kind,
            start_date: row.start_date,
            end_date: row.end_date,
            date_created: row.date_created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            ReportKind::WorkRecords,
            ReportKind::Earnings,
            ReportKind::Detailed,
        ] {
            assert_eq!(ReportKind::from(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_kind_titles() {
        assert_eq!(ReportKind::WorkRecords.title(), "Work Records Report");
        assert_eq!(ReportKind::Earnings.title(), "Earnings Summary Report");
        assert_eq!(ReportKind::Detailed.title(), "Detailed Report");
    }

    #[test]
    fn test_download_filename_uses_report_id() {
        let report = Report {
            id: Uuid::new_v4(),
            employee_id: None,
            kind: ReportKind::WorkRecords,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            date_created: Utc::now(),
        };

        assert_eq!(
            report.download_filename(),
            format!("report_{}.pdf", report.id)
        );
    }
}
