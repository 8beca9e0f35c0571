//! Student command handlers

use anyhow::{anyhow, bail, Context, Result};

use roster_core::{Store, StudentUpdate};

use crate::output::Output;
use crate::prompt::confirm;

/// Add a new student
pub fn add(
    store: &mut Store,
    name: String,
    roll_number: String,
    email: String,
    grade: String,
    output: &Output,
) -> Result<()> {
    let student = store
        .add(name, roll_number, email, grade)
        .context("Failed to add student")?;

    output.success(&format!("Added student: {}", student.id));
    output.print_student(student);

    Ok(())
}

/// List all students in store order
pub fn list(store: &Store, output: &Output) -> Result<()> {
    let students: Vec<_> = store.all().iter().collect();
    output.print_students(&students);
    Ok(())
}

/// Show a single student
pub fn show(store: &Store, id: u32, output: &Output) -> Result<()> {
    let student = store
        .search(id)
        .ok_or_else(|| anyhow!("Student not found: {}", id))?;

    output.print_student(student);
    Ok(())
}

/// Search students by name, roll number or email
pub fn search(store: &Store, query: String, output: &Output) -> Result<()> {
    let students = store.find(&query);
    output.print_students(&students);
    Ok(())
}

/// Update the given fields of a student
pub fn update(store: &mut Store, id: u32, update: StudentUpdate, output: &Output) -> Result<()> {
    if update.is_empty() {
        bail!("Nothing to update. Pass at least one of --name, --roll, --email, --grade.");
    }

    if !store.update(id, update).context("Failed to update student")? {
        bail!("Student not found: {}", id);
    }

    output.success("Student updated");
    if let Some(student) = store.search(id) {
        output.print_student(student);
    }

    Ok(())
}

/// Delete a student
pub fn delete(store: &mut Store, id: u32, yes: bool, output: &Output) -> Result<()> {
    let student = store
        .search(id)
        .ok_or_else(|| anyhow!("Student not found: {}", id))?;

    // Confirm deletion
    if !yes && output.should_prompt() {
        output.message(&format!("Delete student: {}", student));
        if !confirm("Are you sure?")? {
            output.message("Cancelled.");
            return Ok(());
        }
    }

    store.delete(id).context("Failed to delete student")?;

    output.success(&format!("Deleted student: {}", id));

    Ok(())
}
