//! Payroll calculation - pure domain logic.
//!
//! The stored amount is the exact product of hours and rate; rounding
//! to currency precision happens only when a value is formatted for
//! display. Inputs are validated at the caller boundary, not here.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::work_record::WorkRecordRow;

/// Compute the amount earned for a number of hours at an hourly rate.
pub fn amount_earned(hours_worked: f64, hourly_rate: f64) -> f64 {
    hours_worked * hourly_rate
}

/// Per-employee earnings over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EmployeeEarnings {
    pub employee_id: Uuid,
    /// Employee display name
    #[schema(example = "Alice Johnson")]
    pub employee_name: String,
    /// Sum of hours worked across the range
    #[schema(example = 40.0)]
    pub total_hours: f64,
    /// Sum of amounts earned across the range
    #[schema(example = 600.0)]
    pub total_earnings: f64,
}

/// Fold work record rows into one earnings row per employee, ordered
/// by employee name (ties broken by id so groups stay distinct when
/// two employees share a name).
pub fn aggregate_earnings(rows: &[WorkRecordRow]) -> Vec<EmployeeEarnings> {
    let mut groups: BTreeMap<(String, Uuid), (f64, f64)> = BTreeMap::new();

    for row in rows {
        let entry = groups
            .entry((row.employee_name.clone(), row.employee_id))
            .or_insert((0.0, 0.0));
        entry.0 += row.hours_worked;
        entry.1 += row.amount_earned;
    }

    groups
        .into_iter()
        .map(
            |((employee_name, employee_id), (total_hours, total_earnings))| EmployeeEarnings {
                employee_id,
                employee_name,
                total_hours,
                total_earnings,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn row(name: &str, id: Uuid, hours: f64, amount: f64) -> WorkRecordRow {
        WorkRecordRow {
            id: Uuid::new_v4(),
            employee_id: id,
            employee_name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            hours_worked: hours,
            amount_earned: amount,
            hourly_rate: 10.0,
        }
    }

    #[test]
    fn test_amount_is_exact_product() {
        assert_eq!(amount_earned(8.0, 15.0), 120.0);
        assert_eq!(amount_earned(0.0, 25.0), 0.0);
        assert_eq!(amount_earned(7.5, 12.0), 90.0);
        // No rounding happens before storage
        assert_eq!(amount_earned(1.5, 9.99), 1.5 * 9.99);
    }

    #[test]
    fn test_aggregate_groups_per_employee() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let rows = vec![
            row("Alice", alice, 8.0, 120.0),
            row("Bob", bob, 4.0, 48.0),
            row("Alice", alice, 6.0, 90.0),
        ];

        let earnings = aggregate_earnings(&rows);
        assert_eq!(earnings.len(), 2);
        assert_eq!(earnings[0].employee_name, "Alice");
        assert_eq!(earnings[0].total_hours, 14.0);
        assert_eq!(earnings[0].total_earnings, 210.0);
        assert_eq!(earnings[1].employee_name, "Bob");
        assert_eq!(earnings[1].total_hours, 4.0);
    }

    #[test]
    fn test_aggregate_preserves_total_hours() {
        let ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let rows = vec![
            row("Dana", ids[0], 3.25, 39.0),
            row("Carl", ids[1], 8.0, 96.0),
            row("Dana", ids[0], 5.5, 66.0),
            row("Erin", ids[2], 1.75, 21.0),
            row("Frank", ids[3], 12.0, 144.0),
            row("Carl", ids[1], 0.5, 6.0),
        ];

        let earnings = aggregate_earnings(&rows);
        let grouped: f64 = earnings.iter().map(|e| e.total_hours).sum();
        let source: f64 = rows.iter().map(|r| r.hours_worked).sum();
        assert_eq!(grouped, source);
    }

    #[test]
    fn test_aggregate_orders_by_name() {
        let rows = vec![
            row("Zoe", Uuid::new_v4(), 1.0, 10.0),
            row("Amy", Uuid::new_v4(), 2.0, 20.0),
            row("Mia", Uuid::new_v4(), 3.0, 30.0),
        ];

        let names: Vec<String> = aggregate_earnings(&rows)
            .into_iter()
            .map(|e| e.employee_name)
            .collect();
        assert_eq!(names, vec!["Amy", "Mia", "Zoe"]);
    }

    #[test]
    fn test_aggregate_keeps_same_name_distinct_by_id() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let rows = vec![
            row("Alice", first, 8.0, 120.0),
            row("Alice", second, 4.0, 60.0),
        ];

        let earnings = aggregate_earnings(&rows);
        assert_eq!(earnings.len(), 2);
        assert!(earnings.iter().all(|e| e.employee_name == "Alice"));
    }

    #[test]
    fn test_aggregate_empty_input() {
        assert!(aggregate_earnings(&[]).is_empty());
    }
}
