/**
 * Attendance Handlers
 *
 * HTTP handlers for attendance marking and reports. All of these routes
 * sit behind the authentication middleware.
 *
 * # Routes
 *
 * - `POST /api/attendance/mark` - batch upsert for one (class, section, day)
 * - `GET  /api/attendance/report/date/{day}` - grouped summaries for a day
 * - `GET  /api/attendance/report/month/{month}` - grouped summaries for a month
 * - `GET  /api/attendance/report/student/{id}` - per-student percentage
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use futures_util::future::join_all;
use sqlx::PgPool;
use uuid::Uuid;

use crate::attendance::db;
use crate::attendance::reports::{student_summary, summarize, GroupSummary, StudentReport};
use crate::attendance::types::{
    validate_day, validate_month, ConfirmationResponse, MarkAttendanceRequest,
};
use crate::error::ApiError;
use crate::middleware::auth::AuthAccount;

/// Mark attendance for a batch of students
///
/// Issues one upsert per student and awaits them jointly, with no ordering
/// guarantee between the writes. A conflict on one record is absorbed by
/// the upsert and does not affect the others; any non-conflict failure
/// surfaces as a generic server error after however many writes already
/// landed. There is no transaction or rollback.
pub async fn mark_attendance(
    State(pool): State<PgPool>,
    AuthAccount(account): AuthAccount,
    Json(request): Json<MarkAttendanceRequest>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    let class_label = request.class_label.trim();
    let section_label = request.section_label.trim();

    if class_label.is_empty() || section_label.is_empty() || request.day.is_empty() {
        return Err(ApiError::validation("All fields are required"));
    }
    validate_day(&request.day)?;

    tracing::info!(
        "{} marking attendance for {}-{} on {} ({} students)",
        account.username,
        class_label,
        section_label,
        request.day,
        request.records.len()
    );

    let writes = request.records.iter().map(|(student_id, status)| {
        db::upsert_attendance(
            &pool,
            *student_id,
            &request.day,
            *status,
            class_label,
            section_label,
        )
    });

    for result in join_all(writes).await {
        result?;
    }

    Ok(Json(ConfirmationResponse {
        message: "Attendance marked successfully".to_string(),
    }))
}

/// Report for an exact day, grouped by class and section
pub async fn report_by_date(
    State(pool): State<PgPool>,
    Path(day): Path<String>,
) -> Result<Json<Vec<GroupSummary>>, ApiError> {
    validate_day(&day)?;
    let rows = db::find_by_day(&pool, &day).await?;
    Ok(Json(summarize(rows)))
}

/// Report for a whole month, grouped by day, class, and section
pub async fn report_by_month(
    State(pool): State<PgPool>,
    Path(month): Path<String>,
) -> Result<Json<Vec<GroupSummary>>, ApiError> {
    validate_month(&month)?;
    let rows = db::find_by_month(&pool, &month).await?;
    Ok(Json(summarize(rows)))
}

/// Per-student attendance percentage
///
/// A student with no attendance records (or an unknown id) reports zero
/// days and a 0 percentage rather than an error.
pub async fn report_by_student(
    State(pool): State<PgPool>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<StudentReport>, ApiError> {
    let (total_days, present_days) = db::student_attendance_counts(&pool, student_id).await?;
    Ok(Json(student_summary(total_days, present_days)))
}
