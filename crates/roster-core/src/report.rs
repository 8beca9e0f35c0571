//! Plain-text student report

use chrono::NaiveDateTime;

use crate::models::Student;

/// Width of the header and separator rules
const RULE_WIDTH: usize = 50;

/// Render the report for `students`, stamped with `generated_at`
///
/// Layout: title line with timestamp, `=` rule, total count, blank line,
/// then one block per student followed by a `-` rule.
pub fn render_report(students: &[Student], generated_at: NaiveDateTime) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Student Report - {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!("Total Students: {}\n\n", students.len()));

    for student in students {
        out.push_str(&format!("ID: {}\n", student.id));
        out.push_str(&format!("Name: {}\n", student.name));
        out.push_str(&format!("Roll Number: {}\n", student.roll_number));
        out.push_str(&format!("Email: {}\n", student.email));
        out.push_str(&format!("Grade: {}\n", student.grade));
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
    }

    out
}
