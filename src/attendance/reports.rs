/**
 * Report Aggregation
 *
 * Pure aggregation over joined attendance rows: grouping by day, class,
 * and section, plus percentage calculation. The handlers fetch rows with
 * the queries in `attendance::db` and hand them to these functions, so
 * the math is testable without a database.
 */

use serde::Serialize;
use uuid::Uuid;

use crate::attendance::db::AttendanceWithStudent;

/// Status text stored for present records
const PRESENT: &str = "Present";

/// One student's entry inside a group summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub student_id: Uuid,
    pub roll_number: String,
    pub name: String,
    pub status: String,
}

/// Summary of one (day, class, section) group
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub day: String,
    pub class_label: String,
    pub section_label: String,
    pub present_count: u64,
    pub absent_count: u64,
    /// present / (present + absent) × 100, rounded to two decimals
    pub percentage: f64,
    pub records: Vec<ReportRecord>,
}

/// Per-student attendance summary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentReport {
    pub total_days: i64,
    pub present_days: i64,
    pub absent_days: i64,
    pub percentage: f64,
}

/// Percentage of present records, rounded to two decimals; 0 when empty
pub fn presence_percentage(present: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = (present as f64 / total as f64) * 100.0;
    (raw * 100.0).round() / 100.0
}

/// Group joined rows by (day, class, section) and summarize each group
///
/// Expects rows in query order (day, class, section, roll number); groups
/// come out in that same order with their records intact.
pub fn summarize(rows: Vec<AttendanceWithStudent>) -> Vec<GroupSummary> {
    let mut groups: Vec<GroupSummary> = Vec::new();

    for row in rows {
        let matches_last = groups.last().is_some_and(|group| {
            group.day == row.day
                && group.class_label == row.class_label
                && group.section_label == row.section_label
        });

        if !matches_last {
            groups.push(GroupSummary {
                day: row.day.clone(),
                class_label: row.class_label.clone(),
                section_label: row.section_label.clone(),
                present_count: 0,
                absent_count: 0,
                percentage: 0.0,
                records: Vec::new(),
            });
        }

        if let Some(group) = groups.last_mut() {
            if row.status == PRESENT {
                group.present_count += 1;
            } else {
                group.absent_count += 1;
            }
            group.records.push(ReportRecord {
                student_id: row.student_id,
                roll_number: row.roll_number,
                name: row.name,
                status: row.status,
            });
        }
    }

    for group in &mut groups {
        group.percentage =
            presence_percentage(group.present_count, group.present_count + group.absent_count);
    }

    groups
}

/// Build a per-student summary from the stored counts
pub fn student_summary(total_days: i64, present_days: i64) -> StudentReport {
    StudentReport {
        total_days,
        present_days,
        absent_days: total_days - present_days,
        percentage: presence_percentage(
            present_days.max(0) as u64,
            total_days.max(0) as u64,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(day: &str, class: &str, section: &str, roll: &str, status: &str) -> AttendanceWithStudent {
        AttendanceWithStudent {
            student_id: Uuid::new_v4(),
            roll_number: roll.to_string(),
            name: format!("Student {roll}"),
            class_label: class.to_string(),
            section_label: section.to_string(),
            day: day.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_percentage_three_present_one_absent() {
        assert_eq!(presence_percentage(3, 4), 75.00);
    }

    #[test]
    fn test_percentage_zero_total_is_zero() {
        assert_eq!(presence_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        // 1/3 -> 33.333... -> 33.33
        assert_eq!(presence_percentage(1, 3), 33.33);
        // 2/3 -> 66.666... -> 66.67
        assert_eq!(presence_percentage(2, 3), 66.67);
    }

    #[test]
    fn test_summarize_groups_by_day_class_section() {
        let rows = vec![
            row("2023-09-01", "23", "A", "23SWA001", "Present"),
            row("2023-09-01", "23", "A", "23SWA002", "Absent"),
            row("2023-09-01", "23", "B", "23SWB001", "Present"),
            row("2023-09-02", "23", "A", "23SWA001", "Present"),
        ];

        let groups = summarize(rows);
        assert_eq!(groups.len(), 3);

        assert_eq!(groups[0].day, "2023-09-01");
        assert_eq!(groups[0].section_label, "A");
        assert_eq!(groups[0].present_count, 1);
        assert_eq!(groups[0].absent_count, 1);
        assert_eq!(groups[0].percentage, 50.00);
        assert_eq!(groups[0].records.len(), 2);

        assert_eq!(groups[1].section_label, "B");
        assert_eq!(groups[1].percentage, 100.00);

        assert_eq!(groups[2].day, "2023-09-02");
        assert_eq!(groups[2].present_count, 1);
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize(Vec::new()).is_empty());
    }

    #[test]
    fn test_student_summary() {
        let report = student_summary(4, 3);
        assert_eq!(report.total_days, 4);
        assert_eq!(report.present_days, 3);
        assert_eq!(report.absent_days, 1);
        assert_eq!(report.percentage, 75.00);
    }

    #[test]
    fn test_student_summary_no_records() {
        let report = student_summary(0, 0);
        assert_eq!(report.total_days, 0);
        assert_eq!(report.percentage, 0.0);
    }
}
