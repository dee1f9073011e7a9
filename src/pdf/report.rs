//! Report document assembly.
//!
//! Maps a date-ranged set of work record rows to the three report
//! layouts. Company reports carry an Employee column; personal
//! reports (generated by an employee for themselves) drop it and
//! name the employee in the heading instead.

use chrono::NaiveDate;

use crate::domain::{aggregate_earnings, ReportKind, WorkRecordRow};

use super::document::TableDocument;

/// Render a report covering one or all employees (admin surface).
pub fn render_company_report(
    kind: ReportKind,
    rows: &[WorkRecordRow],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Vec<u8> {
    let mut doc = TableDocument::new(kind.title(), company_header(kind))
        .line(period_line(start_date, end_date));

    match kind {
        ReportKind::WorkRecords => {
            for row in rows {
                doc.push_row(vec![
                    row.employee_name.clone(),
                    row.date.to_string(),
                    quantity(row.hours_worked),
                    money(row.amount_earned),
                ]);
            }
        }
        ReportKind::Earnings => {
            for group in aggregate_earnings(rows) {
                doc.push_row(vec![
                    group.employee_name,
                    quantity(group.total_hours),
                    money(group.total_earnings),
                ]);
            }
        }
        ReportKind::Detailed => {
            for row in rows {
                doc.push_row(vec![
                    row.employee_name.clone(),
                    row.date.to_string(),
                    money(row.hourly_rate),
                    quantity(row.hours_worked),
                    money(row.amount_earned),
                ]);
            }
        }
    }

    doc.render()
}

/// Render a report scoped to a single employee's own records
/// (employee surface). The employee column is folded into a heading
/// line, present only when the range matched any records.
pub fn render_personal_report(
    kind: ReportKind,
    rows: &[WorkRecordRow],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Vec<u8> {
    let mut doc = TableDocument::new(kind.title(), personal_header(kind))
        .line(period_line(start_date, end_date));
    if let Some(first) = rows.first() {
        doc = doc.line(format!("Employee: {}", first.employee_name));
    }

    match kind {
        ReportKind::WorkRecords => {
            for row in rows {
                doc.push_row(vec![
                    row.date.to_string(),
                    quantity(row.hours_worked),
                    money(row.amount_earned),
                ]);
            }
        }
        ReportKind::Earnings => {
            for group in aggregate_earnings(rows) {
                doc.push_row(vec![quantity(group.total_hours), money(group.total_earnings)]);
            }
        }
        ReportKind::Detailed => {
            for row in rows {
                doc.push_row(vec![
                    row.date.to_string(),
                    money(row.hourly_rate),
                    quantity(row.hours_worked),
                    money(row.amount_earned),
                ]);
            }
        }
    }

    doc.render()
}

fn company_header(kind: ReportKind) -> Vec<String> {
    let headers: &[&str] = match kind {
        ReportKind::WorkRecords => &["Employee", "Date", "Hours Worked", "Amount Earned"],
        ReportKind::Earnings => &["Employee", "Total Hours", "Total Earnings"],
        ReportKind::Detailed => &[
            "Employee",
            "Date",
            "Hourly Rate",
            "Hours Worked",
            "Amount Earned",
        ],
    };
    headers.iter().map(|h| h.to_string()).collect()
}

fn personal_header(kind: ReportKind) -> Vec<String> {
    let headers: &[&str] = match kind {
        ReportKind::WorkRecords => &["Date", "Hours Worked", "Amount Earned"],
        ReportKind::Earnings => &["Total Hours", "Total Earnings"],
        ReportKind::Detailed => &["Date", "Hourly Rate", "Hours Worked", "Amount Earned"],
    };
    headers.iter().map(|h| h.to_string()).collect()
}

fn period_line(start_date: NaiveDate, end_date: NaiveDate) -> String {
    format!("Period: {} to {}", start_date, end_date)
}

/// Currency formatting, applied at render time only.
fn money(value: f64) -> String {
    format!("${:.2}", value)
}

/// Hours and rates render with two decimals.
fn quantity(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn rows() -> Vec<WorkRecordRow> {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        vec![
            WorkRecordRow {
                id: Uuid::new_v4(),
                employee_id: alice,
                employee_name: "Alice".into(),
                date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
                hours_worked: 8.0,
                amount_earned: 120.0,
                hourly_rate: 15.0,
            },
            WorkRecordRow {
                id: Uuid::new_v4(),
                employee_id: alice,
                employee_name: "Alice".into(),
                date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                hours_worked: 4.0,
                amount_earned: 60.0,
                hourly_rate: 15.0,
            },
            WorkRecordRow {
                id: Uuid::new_v4(),
                employee_id: bob,
                employee_name: "Bob".into(),
                date: NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
                hours_worked: 6.0,
                amount_earned: 72.0,
                hourly_rate: 12.0,
            },
        ]
    }

    fn range() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_company_records_report_lists_each_row() {
        let (start, end) = range();
        let bytes = render_company_report(ReportKind::WorkRecords, &rows(), start, end);
        assert!(contains(&bytes, b"Work Records Report"));
        assert!(contains(&bytes, b"Period: 2024-03-01 to 2024-03-31"));
        assert!(contains(&bytes, b"Alice"));
        assert!(contains(&bytes, b"$120.00"));
        assert!(contains(&bytes, b"$72.00"));
    }

    #[test]
    fn test_company_earnings_report_aggregates() {
        let (start, end) = range();
        let bytes = render_company_report(ReportKind::Earnings, &rows(), start, end);
        assert!(contains(&bytes, b"Earnings Summary Report"));
        // Alice: 12 hours, $180 across two records
        assert!(contains(&bytes, b"12.00"));
        assert!(contains(&bytes, b"$180.00"));
    }

    #[test]
    fn test_detailed_report_includes_rate_column() {
        let (start, end) = range();
        let bytes = render_company_report(ReportKind::Detailed, &rows(), start, end);
        assert!(contains(&bytes, b"Hourly Rate"));
        assert!(contains(&bytes, b"$15.00"));
    }

    #[test]
    fn test_personal_report_names_employee_in_heading() {
        let (start, end) = range();
        let own: Vec<WorkRecordRow> = rows()
            .into_iter()
            .filter(|r| r.employee_name == "Alice")
            .collect();
        let bytes = render_personal_report(ReportKind::WorkRecords, &own, start, end);
        assert!(contains(&bytes, b"Employee: Alice"));
    }

    #[test]
    fn test_personal_report_empty_range_has_no_employee_line() {
        let (start, end) = range();
        let bytes = render_personal_report(ReportKind::Earnings, &[], start, end);
        assert!(contains(&bytes, b"Earnings Summary Report"));
        assert!(!contains(&bytes, b"Employee:"));
    }

    #[test]
    fn test_same_input_same_bytes() {
        let (start, end) = range();
        let rows = rows();
        let first = render_company_report(ReportKind::Earnings, &rows, start, end);
        let second = render_company_report(ReportKind::Earnings, &rows, start, end);
        assert_eq!(first, second);
    }
}
