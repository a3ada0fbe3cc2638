/**
 * Attendance Handler Types
 *
 * Request types for attendance marking plus the day/month validation the
 * report endpoints apply before touching storage. Wire names are camelCase
 * to match the existing browser front end.
 */

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Attendance status flag
///
/// Serialized as `"Present"` / `"Absent"` on the wire and stored as the
/// same text in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }
}

/// Mark-attendance request
///
/// One status per student id; the whole batch shares a class, section,
/// and day.
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceRequest {
    pub class_label: String,
    pub section_label: String,
    /// Calendar day in YYYY-MM-DD format
    pub day: String,
    /// Map of student id to status
    pub records: HashMap<Uuid, AttendanceStatus>,
}

/// Confirmation message, returned by marking
#[derive(Serialize, Debug)]
pub struct ConfirmationResponse {
    pub message: String,
}

/// Validate a calendar day string (YYYY-MM-DD)
pub fn validate_day(day: &str) -> Result<(), ApiError> {
    if day.len() == 10 && NaiveDate::parse_from_str(day, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err(ApiError::validation("Day must be in YYYY-MM-DD format"))
    }
}

/// Validate a month prefix string (YYYY-MM)
///
/// Month reports match day strings by prefix, so the prefix itself must be
/// a well-formed year-month before it reaches the query.
pub fn validate_month(month: &str) -> Result<(), ApiError> {
    let well_formed = month.len() == 7
        && NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").is_ok();
    if well_formed {
        Ok(())
    } else {
        Err(ApiError::validation("Month must be in YYYY-MM format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_validate_day_accepts_iso_dates() {
        assert!(validate_day("2023-09-01").is_ok());
        assert!(validate_day("2024-02-29").is_ok());
    }

    #[test]
    fn test_validate_day_rejects_malformed() {
        assert_matches!(validate_day("2023-9-1"), Err(ApiError::Validation(_)));
        assert_matches!(validate_day("2023-13-01"), Err(ApiError::Validation(_)));
        assert_matches!(validate_day("01-09-2023"), Err(ApiError::Validation(_)));
        assert_matches!(validate_day(""), Err(ApiError::Validation(_)));
    }

    #[test]
    fn test_validate_month() {
        assert!(validate_month("2023-09").is_ok());
        assert_matches!(validate_month("2023-9"), Err(ApiError::Validation(_)));
        assert_matches!(validate_month("2023-00"), Err(ApiError::Validation(_)));
        assert_matches!(validate_month("2023-09-01"), Err(ApiError::Validation(_)));
    }

    #[test]
    fn test_status_round_trip() {
        let json = serde_json::to_string(&AttendanceStatus::Present).unwrap();
        assert_eq!(json, "\"Present\"");
        let status: AttendanceStatus = serde_json::from_str("\"Absent\"").unwrap();
        assert_eq!(status, AttendanceStatus::Absent);
        assert_eq!(status.as_str(), "Absent");
    }
}
