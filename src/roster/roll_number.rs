/**
 * Sequential Roll-Number Generation
 *
 * Roll numbers encode the class year, department letters, section, and a
 * per-(class, section) sequence:
 *
 * ```text
 * 23SWA001
 * ^^        last two characters of the class label
 *   ^^      department letters (fixed)
 *     ^     section label
 *      ^^^  zero-padded sequence, starting at 1
 * ```
 *
 * The next number is derived from the lexicographically-greatest existing
 * roll number in the same (class, section) group. This is a scan-then-
 * increment scheme with no concurrency control: two simultaneous creations
 * can compute the same number, and the unique index on `roll_number`
 * rejects the second insert.
 */

/// Fixed department letters between the year code and the section
const DEPARTMENT_CODE: &str = "SW";

/// Derive the next roll number for a (class, section) group
///
/// # Arguments
/// * `class_label` - Class label, e.g. "23"; the last two characters become
///   the year code
/// * `section_label` - Section label, e.g. "A"
/// * `last_roll_number` - Greatest existing roll number in the group, if any
///
/// # Behavior
///
/// The numeric suffix of `last_roll_number` (everything after the year
/// code, department letters, and section) is parsed and incremented. With
/// no prior student the sequence starts at 1. A suffix that fails to parse
/// as a number also restarts the sequence at 1; the unique index turns any
/// resulting duplicate into an insert conflict.
pub fn next_roll_number(
    class_label: &str,
    section_label: &str,
    last_roll_number: Option<&str>,
) -> String {
    let mut sequence: u32 = 1;

    if let Some(last) = last_roll_number {
        let prefix_len = 2 + DEPARTMENT_CODE.len() + section_label.len();
        if let Some(parsed) = last
            .get(prefix_len..)
            .and_then(|suffix| suffix.parse::<u32>().ok())
        {
            sequence = parsed + 1;
        }
    }

    let year_start = class_label.len().saturating_sub(2);
    let year_code = class_label.get(year_start..).unwrap_or(class_label);

    format!("{year_code}{DEPARTMENT_CODE}{section_label}{sequence:03}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_student_starts_at_one() {
        assert_eq!(next_roll_number("23", "A", None), "23SWA001");
    }

    #[test]
    fn test_sequence_increments() {
        assert_eq!(next_roll_number("23", "A", Some("23SWA001")), "23SWA002");
        assert_eq!(next_roll_number("23", "A", Some("23SWA009")), "23SWA010");
        assert_eq!(next_roll_number("23", "A", Some("23SWA099")), "23SWA100");
    }

    #[test]
    fn test_year_code_is_last_two_characters() {
        assert_eq!(next_roll_number("2023", "B", None), "23SWB001");
        assert_eq!(next_roll_number("24", "C", None), "24SWC001");
    }

    #[test]
    fn test_short_class_label_used_verbatim() {
        assert_eq!(next_roll_number("9", "A", None), "9SWA001");
    }

    #[test]
    fn test_non_numeric_suffix_resets_sequence() {
        // Garbage suffix restarts at 1; the unique index catches duplicates.
        assert_eq!(next_roll_number("23", "A", Some("23SWAXYZ")), "23SWA001");
    }

    #[test]
    fn test_sequence_can_exceed_padding() {
        assert_eq!(next_roll_number("23", "A", Some("23SWA999")), "23SWA1000");
    }

    #[test]
    fn test_multi_character_section() {
        assert_eq!(next_roll_number("23", "AB", Some("23SWAB004")), "23SWAB005");
    }
}
