/**
 * Roster Handler Types
 *
 * Request and response types for the roster endpoints. Wire names are
 * camelCase to match the existing browser front end.
 */

use serde::{Deserialize, Serialize};

use crate::roster::db::Student;

/// Create-student request
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    /// Student's full name
    pub name: String,
    /// Class label, e.g. "23"
    pub class_label: String,
    /// Section label, e.g. "A"
    pub section_label: String,
}

/// Update-student request; absent fields keep their current value
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub class_label: Option<String>,
    pub section_label: Option<String>,
}

/// Response for student creation
#[derive(Serialize, Debug)]
pub struct CreateStudentResponse {
    pub message: String,
    pub student: Student,
}

/// Response for student update
#[derive(Serialize, Debug)]
pub struct UpdateStudentResponse {
    pub message: String,
    pub student: Student,
}

/// Confirmation message, used by delete
#[derive(Serialize, Debug)]
pub struct ConfirmationResponse {
    pub message: String,
}

/// One (class, section) group in the organized roster listing
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RosterGroup {
    pub class_label: String,
    pub section_label: String,
    pub students: Vec<Student>,
}

/// Group an ordered student list by (class, section)
///
/// Expects the input sorted by class, section, roll number (the query
/// ordering); groups appear in that same order.
pub fn group_roster(students: Vec<Student>) -> Vec<RosterGroup> {
    let mut groups: Vec<RosterGroup> = Vec::new();

    for student in students {
        let matches_last = groups.last().is_some_and(|group| {
            group.class_label == student.class_label
                && group.section_label == student.section_label
        });

        if matches_last {
            if let Some(group) = groups.last_mut() {
                group.students.push(student);
            }
        } else {
            groups.push(RosterGroup {
                class_label: student.class_label.clone(),
                section_label: student.section_label.clone(),
                students: vec![student],
            });
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn student(roll: &str, class: &str, section: &str) -> Student {
        let now = Utc::now();
        Student {
            id: uuid::Uuid::new_v4(),
            roll_number: roll.to_string(),
            name: format!("Student {roll}"),
            class_label: class.to_string(),
            section_label: section.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_group_roster_empty() {
        assert!(group_roster(Vec::new()).is_empty());
    }

    #[test]
    fn test_group_roster_preserves_order() {
        let students = vec![
            student("23SWA001", "23", "A"),
            student("23SWA002", "23", "A"),
            student("23SWB001", "23", "B"),
            student("24SWA001", "24", "A"),
        ];

        let groups = group_roster(students);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].class_label, "23");
        assert_eq!(groups[0].section_label, "A");
        assert_eq!(groups[0].students.len(), 2);
        assert_eq!(groups[1].section_label, "B");
        assert_eq!(groups[2].class_label, "24");
        assert_eq!(
            groups[0].students[1].roll_number, "23SWA002",
            "roll order kept within a group"
        );
    }
}
