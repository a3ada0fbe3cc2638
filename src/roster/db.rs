/**
 * Student Model and Database Operations
 *
 * This module handles student data and database operations. All ordering
 * guarantees the API documents (class, then section, then roll number)
 * are established here in the queries.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Student struct representing a roster entry in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Unique student ID (UUID)
    pub id: uuid::Uuid,
    /// Generated roll number (unique, immutable)
    pub roll_number: String,
    /// Student's full name
    pub name: String,
    /// Class label, e.g. "23"
    pub class_label: String,
    /// Section label, e.g. "A"
    pub section_label: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

const STUDENT_COLUMNS: &str =
    "id, roll_number, name, class_label, section_label, created_at, updated_at";

/// List all students ordered by class, section, and roll number
pub async fn list_all_students(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
    let students = sqlx::query_as::<_, Student>(&format!(
        r#"
        SELECT {STUDENT_COLUMNS}
        FROM students
        ORDER BY class_label, section_label, roll_number
        "#
    ))
    .fetch_all(pool)
    .await?;

    Ok(students)
}

/// List distinct class labels ("batches"), sorted
pub async fn list_class_labels(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    let labels = sqlx::query_scalar::<_, String>(
        r#"
        SELECT DISTINCT class_label FROM students ORDER BY class_label
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(labels)
}

/// List distinct section labels within a class, sorted
pub async fn list_section_labels(
    pool: &PgPool,
    class_label: &str,
) -> Result<Vec<String>, sqlx::Error> {
    let labels = sqlx::query_scalar::<_, String>(
        r#"
        SELECT DISTINCT section_label FROM students
        WHERE class_label = $1
        ORDER BY section_label
        "#,
    )
    .bind(class_label)
    .fetch_all(pool)
    .await?;

    Ok(labels)
}

/// List students in a (class, section) group ordered by roll number
pub async fn list_students_by_class_section(
    pool: &PgPool,
    class_label: &str,
    section_label: &str,
) -> Result<Vec<Student>, sqlx::Error> {
    let students = sqlx::query_as::<_, Student>(&format!(
        r#"
        SELECT {STUDENT_COLUMNS}
        FROM students
        WHERE class_label = $1 AND section_label = $2
        ORDER BY roll_number
        "#
    ))
    .bind(class_label)
    .bind(section_label)
    .fetch_all(pool)
    .await?;

    Ok(students)
}

/// Get the lexicographically-greatest roll number in a (class, section) group
///
/// Input to the roll-number generator; `None` when the group is empty.
pub async fn last_roll_number(
    pool: &PgPool,
    class_label: &str,
    section_label: &str,
) -> Result<Option<String>, sqlx::Error> {
    let roll_number = sqlx::query_scalar::<_, String>(
        r#"
        SELECT roll_number FROM students
        WHERE class_label = $1 AND section_label = $2
        ORDER BY roll_number DESC
        LIMIT 1
        "#,
    )
    .bind(class_label)
    .bind(section_label)
    .fetch_optional(pool)
    .await?;

    Ok(roll_number)
}

/// Insert a new student
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `roll_number` - Generated roll number
/// * `name`, `class_label`, `section_label` - Validated, trimmed fields
///
/// # Errors
///
/// A unique-constraint violation on `roll_number` (two concurrent creates
/// computing the same number) surfaces as `sqlx::Error`; the handler maps
/// it to a 400 Conflict.
pub async fn insert_student(
    pool: &PgPool,
    roll_number: &str,
    name: &str,
    class_label: &str,
    section_label: &str,
) -> Result<Student, sqlx::Error> {
    let now = Utc::now();

    let student = sqlx::query_as::<_, Student>(&format!(
        r#"
        INSERT INTO students (id, roll_number, name, class_label, section_label, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {STUDENT_COLUMNS}
        "#
    ))
    .bind(uuid::Uuid::new_v4())
    .bind(roll_number)
    .bind(name)
    .bind(class_label)
    .bind(section_label)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(student)
}

/// Update a student's mutable fields
///
/// The roll number is immutable; only name, class, and section can change.
/// Absent fields keep their current value.
///
/// # Returns
/// Updated student, or None if no student has this id
pub async fn update_student(
    pool: &PgPool,
    id: uuid::Uuid,
    name: Option<&str>,
    class_label: Option<&str>,
    section_label: Option<&str>,
) -> Result<Option<Student>, sqlx::Error> {
    let student = sqlx::query_as::<_, Student>(&format!(
        r#"
        UPDATE students
        SET name = COALESCE($2, name),
            class_label = COALESCE($3, class_label),
            section_label = COALESCE($4, section_label),
            updated_at = $5
        WHERE id = $1
        RETURNING {STUDENT_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(name)
    .bind(class_label)
    .bind(section_label)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(student)
}

/// Delete a student by id
///
/// # Returns
/// True if a row was deleted, false if no student has this id
pub async fn delete_student(pool: &PgPool, id: uuid::Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM students WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
