/**
 * Roster Handlers
 *
 * HTTP handlers for the student roster endpoints. All of these routes sit
 * behind the authentication middleware.
 *
 * # Routes
 *
 * - `GET    /api/students` - all students, grouped by class and section
 * - `POST   /api/students` - create a student with a generated roll number
 * - `GET    /api/students/batches` - distinct class labels
 * - `GET    /api/students/sections/{batch}` - distinct sections in a class
 * - `GET    /api/students/{batch}/{section}` - students in one group
 * - `PUT    /api/students/{id}` - update name/class/section
 * - `DELETE /api/students/{id}` - delete a student
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::roster::db;
use crate::roster::roll_number::next_roll_number;
use crate::roster::types::{
    group_roster, ConfirmationResponse, CreateStudentRequest, CreateStudentResponse, RosterGroup,
    UpdateStudentRequest, UpdateStudentResponse,
};

/// List all students, grouped by class and section
pub async fn list_students(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<RosterGroup>>, ApiError> {
    let students = db::list_all_students(&pool).await?;
    Ok(Json(group_roster(students)))
}

/// List distinct class labels ("batches")
pub async fn list_batches(State(pool): State<PgPool>) -> Result<Json<Vec<String>>, ApiError> {
    let batches = db::list_class_labels(&pool).await?;
    Ok(Json(batches))
}

/// List distinct sections within a class
pub async fn list_sections(
    State(pool): State<PgPool>,
    Path(batch): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let sections = db::list_section_labels(&pool, &batch).await?;
    Ok(Json(sections))
}

/// List students of one (class, section) group, ordered by roll number
pub async fn list_students_by_group(
    State(pool): State<PgPool>,
    Path((batch, section)): Path<(String, String)>,
) -> Result<Json<Vec<db::Student>>, ApiError> {
    let students = db::list_students_by_class_section(&pool, &batch, &section).await?;
    Ok(Json(students))
}

/// Create a student with a generated roll number
///
/// Derives the next roll number from the group's greatest existing one,
/// then inserts. Two concurrent creates for the same group can compute the
/// same number; the unique index rejects the loser and the caller gets a
/// 400 Conflict.
pub async fn create_student(
    State(pool): State<PgPool>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<CreateStudentResponse>), ApiError> {
    let name = request.name.trim();
    let class_label = request.class_label.trim();
    let section_label = request.section_label.trim();

    if name.is_empty() || class_label.is_empty() || section_label.is_empty() {
        return Err(ApiError::validation(
            "All fields are required: name, classLabel, sectionLabel",
        ));
    }

    let last = db::last_roll_number(&pool, class_label, section_label).await?;
    let roll_number = next_roll_number(class_label, section_label, last.as_deref());

    let student = db::insert_student(&pool, &roll_number, name, class_label, section_label)
        .await
        .map_err(|e| {
            if ApiError::is_unique_violation(&e) {
                ApiError::conflict("Duplicate roll number found")
            } else {
                ApiError::from(e)
            }
        })?;

    tracing::info!(
        "Student created: {} ({} {}-{})",
        student.roll_number,
        student.name,
        student.class_label,
        student.section_label
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateStudentResponse {
            message: "Student added successfully".to_string(),
            student,
        }),
    ))
}

/// Update a student's name, class, or section
///
/// The roll number is generated and immutable; it cannot be changed here.
pub async fn update_student(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStudentRequest>,
) -> Result<Json<UpdateStudentResponse>, ApiError> {
    let student = db::update_student(
        &pool,
        id,
        request.name.as_deref(),
        request.class_label.as_deref(),
        request.section_label.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::not_found("Student not found"))?;

    Ok(Json(UpdateStudentResponse {
        message: "Student updated successfully".to_string(),
        student,
    }))
}

/// Delete a student by id
pub async fn delete_student(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    let deleted = db::delete_student(&pool, id).await?;
    if !deleted {
        return Err(ApiError::not_found("Student not found"));
    }

    tracing::info!("Student deleted: {id}");

    Ok(Json(ConfirmationResponse {
        message: "Student deleted successfully".to_string(),
    }))
}
