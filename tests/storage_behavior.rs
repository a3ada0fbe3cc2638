/**
 * Storage-Backed Behavior Tests
 *
 * These tests cover the invariants that live behind SQL and cannot be
 * seen by the hermetic unit suites: marking idempotency per
 * (student, day), delete-by-id semantics, and sequential roll numbers
 * over real storage. They require a live PostgreSQL instance and skip
 * themselves when `DATABASE_URL` is not set.
 */

mod common;

use assert_matches::assert_matches;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use rollcall::attendance::db::{find_by_day, student_attendance_counts};
use rollcall::attendance::handlers::mark_attendance;
use rollcall::attendance::types::{AttendanceStatus, MarkAttendanceRequest};
use rollcall::error::ApiError;
use rollcall::middleware::auth::{AuthAccount, CurrentAccount};
use rollcall::roster::handlers::{create_student, delete_student};
use rollcall::roster::types::CreateStudentRequest;

use common::TestDatabase;

const TEST_DAY: &str = "2031-01-15";

fn acting_account() -> AuthAccount {
    AuthAccount(CurrentAccount {
        account_id: uuid::Uuid::new_v4(),
        username: "admin".to_string(),
    })
}

fn create_request(class_label: &str, name: &str) -> CreateStudentRequest {
    CreateStudentRequest {
        name: name.to_string(),
        class_label: class_label.to_string(),
        section_label: "A".to_string(),
    }
}

fn mark_request(
    class_label: &str,
    student_id: uuid::Uuid,
    status: AttendanceStatus,
) -> MarkAttendanceRequest {
    MarkAttendanceRequest {
        class_label: class_label.to_string(),
        section_label: "A".to_string(),
        day: TEST_DAY.to_string(),
        records: [(student_id, status)].into_iter().collect(),
    }
}

#[tokio::test]
async fn marking_same_student_and_day_twice_keeps_one_record_with_latest_status() {
    let Some(db) = TestDatabase::try_new().await else {
        return;
    };
    let pool = db.pool();
    let class = TestDatabase::unique_class_label();
    db.remove_roll_prefix(&format!("{}SWA", &class[class.len() - 2..]))
        .await;

    let (_, Json(created)) = create_student(
        State(pool.clone()),
        Json(create_request(&class, "Asha Verma")),
    )
    .await
    .unwrap();
    let student_id = created.student.id;

    // Mark Present, then re-submit the same day as Absent
    mark_attendance(
        State(pool.clone()),
        acting_account(),
        Json(mark_request(&class, student_id, AttendanceStatus::Present)),
    )
    .await
    .unwrap();
    mark_attendance(
        State(pool.clone()),
        acting_account(),
        Json(mark_request(&class, student_id, AttendanceStatus::Absent)),
    )
    .await
    .unwrap();

    // Exactly one stored record, reflecting the latest status
    let (total, present) = student_attendance_counts(pool, student_id).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(present, 0);

    let rows = find_by_day(pool, TEST_DAY).await.unwrap();
    let row = rows
        .iter()
        .find(|r| r.student_id == student_id)
        .expect("record for marked student");
    assert_eq!(row.status, "Absent");

    db.remove_class(&class).await;
}

#[tokio::test]
async fn deleting_unknown_student_returns_not_found() {
    let Some(db) = TestDatabase::try_new().await else {
        return;
    };
    let pool = db.pool();

    let result = delete_student(State(pool.clone()), Path(uuid::Uuid::new_v4())).await;

    let error = result.expect_err("expected a not-found error");
    assert_matches!(error, ApiError::NotFound(_));
    assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn roll_numbers_are_sequential_over_storage() {
    let Some(db) = TestDatabase::try_new().await else {
        return;
    };
    let pool = db.pool();
    let class = TestDatabase::unique_class_label();
    // Year code is the last two characters of the class label
    let year_code = &class[class.len() - 2..];
    db.remove_roll_prefix(&format!("{year_code}SWA")).await;

    let (status, Json(first)) = create_student(
        State(pool.clone()),
        Json(create_request(&class, "First Student")),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first.student.roll_number, format!("{year_code}SWA001"));

    let (_, Json(second)) = create_student(
        State(pool.clone()),
        Json(create_request(&class, "Second Student")),
    )
    .await
    .unwrap();
    assert_eq!(second.student.roll_number, format!("{year_code}SWA002"));

    db.remove_class(&class).await;
}
