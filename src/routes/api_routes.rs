/**
 * API Route Handlers
 *
 * This module wires the API endpoints to their handlers.
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/auth/login` - Teacher login
 * - `POST /api/auth/verify` - Token validity check
 *
 * ## Roster (protected)
 * - `GET/POST /api/students` plus batch/section/update/delete routes
 *
 * ## Attendance (protected)
 * - `POST /api/attendance/mark` and the three report routes
 *
 * All protected routes pass through the authentication middleware, which
 * rejects requests without a valid bearer token before any handler runs.
 */

use axum::{middleware, routing, Router};

use crate::attendance::handlers::{
    mark_attendance, report_by_date, report_by_month, report_by_student,
};
use crate::auth::handlers::{login, verify};
use crate::middleware::auth::auth_middleware;
use crate::roster::handlers::{
    create_student, delete_student, list_batches, list_sections, list_students,
    list_students_by_group, update_student,
};
use crate::server::state::AppState;

/// Configure API routes
///
/// Public auth routes are merged with the protected roster/attendance
/// routes; the latter carry the session guard as a route layer.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/auth/login", routing::post(login))
        .route("/api/auth/verify", routing::post(verify));

    let protected = Router::new()
        // Roster endpoints
        .route(
            "/api/students",
            routing::get(list_students).post(create_student),
        )
        .route("/api/students/batches", routing::get(list_batches))
        .route("/api/students/sections/{batch}", routing::get(list_sections))
        .route(
            "/api/students/{batch}/{section}",
            routing::get(list_students_by_group),
        )
        .route(
            "/api/students/{id}",
            routing::put(update_student).delete(delete_student),
        )
        // Attendance endpoints
        .route("/api/attendance/mark", routing::post(mark_attendance))
        .route(
            "/api/attendance/report/date/{day}",
            routing::get(report_by_date),
        )
        .route(
            "/api/attendance/report/month/{month}",
            routing::get(report_by_month),
        )
        .route(
            "/api/attendance/report/student/{student_id}",
            routing::get(report_by_student),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router.merge(public).merge(protected)
}
