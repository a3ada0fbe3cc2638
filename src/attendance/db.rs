/**
 * Attendance Database Operations
 *
 * This module handles attendance records: the per-(student, day) upsert
 * used by marking, and the joined queries feeding the report aggregator.
 */

use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::attendance::types::AttendanceStatus;

/// Attendance row joined with student identity
///
/// The reports group these rows by (day, class, section); class and
/// section come from the attendance record, identity from the roster.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceWithStudent {
    pub student_id: Uuid,
    pub roll_number: String,
    pub name: String,
    pub class_label: String,
    pub section_label: String,
    /// Calendar day in YYYY-MM-DD format
    pub day: String,
    /// "Present" or "Absent"
    pub status: String,
}

/// Upsert one attendance record
///
/// Inserts a record for (student, day); if one already exists the status
/// is overwritten instead of failing. This makes marking idempotent per
/// (student, day): re-submitting the same day updates rather than
/// duplicates.
pub async fn upsert_attendance(
    pool: &PgPool,
    student_id: Uuid,
    day: &str,
    status: AttendanceStatus,
    class_label: &str,
    section_label: &str,
) -> Result<(), sqlx::Error> {
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO attendance (id, student_id, day, status, class_label, section_label, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (student_id, day)
        DO UPDATE SET status = EXCLUDED.status, updated_at = EXCLUDED.updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(student_id)
    .bind(day)
    .bind(status.as_str())
    .bind(class_label)
    .bind(section_label)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

const JOINED_COLUMNS: &str = "a.student_id, s.roll_number, s.name, \
     a.class_label, a.section_label, a.day, a.status";

/// Fetch all attendance records for an exact day, joined with students
pub async fn find_by_day(
    pool: &PgPool,
    day: &str,
) -> Result<Vec<AttendanceWithStudent>, sqlx::Error> {
    let records = sqlx::query_as::<_, AttendanceWithStudent>(&format!(
        r#"
        SELECT {JOINED_COLUMNS}
        FROM attendance a
        JOIN students s ON s.id = a.student_id
        WHERE a.day = $1
        ORDER BY a.class_label, a.section_label, s.roll_number
        "#
    ))
    .bind(day)
    .fetch_all(pool)
    .await?;

    Ok(records)
}

/// Fetch all attendance records whose day starts with a month prefix
///
/// `month` must already be validated as YYYY-MM; day strings are
/// YYYY-MM-DD, so a prefix match selects the whole month.
pub async fn find_by_month(
    pool: &PgPool,
    month: &str,
) -> Result<Vec<AttendanceWithStudent>, sqlx::Error> {
    let records = sqlx::query_as::<_, AttendanceWithStudent>(&format!(
        r#"
        SELECT {JOINED_COLUMNS}
        FROM attendance a
        JOIN students s ON s.id = a.student_id
        WHERE a.day LIKE $1 || '-%'
        ORDER BY a.day, a.class_label, a.section_label, s.roll_number
        "#
    ))
    .bind(month)
    .fetch_all(pool)
    .await?;

    Ok(records)
}

/// Count total and present attendance records for one student
///
/// # Returns
/// `(total_days, present_days)`
pub async fn student_attendance_counts(
    pool: &PgPool,
    student_id: Uuid,
) -> Result<(i64, i64), sqlx::Error> {
    let (total, present) = sqlx::query_as::<_, (i64, i64)>(
        r#"
        SELECT COUNT(*),
               COUNT(*) FILTER (WHERE status = 'Present')
        FROM attendance
        WHERE student_id = $1
        "#,
    )
    .bind(student_id)
    .fetch_one(pool)
    .await?;

    Ok((total, present))
}
