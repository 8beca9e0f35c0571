//! Student store
//!
//! The `Store` owns the ordered student table and mirrors it to the
//! backing CSV file:
//! - the whole file is read once at open
//! - every mutation rewrites the whole file
//!
//! ## ID assignment
//!
//! IDs are handed out from a counter that starts at one past the highest ID
//! found on load and only moves forward, so a deleted ID is never reissued
//! while the store is open.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open("students.csv")?;
//!
//! let id = store.add("Alice", "R1", "a@x.com", "A")?.id;
//! store.update(id, StudentUpdate::new().with_grade("A+"))?;
//! store.report("student_report.txt")?;
//! ```

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::{Student, StudentUpdate};
use crate::report::render_report;
use crate::storage::persistence::{atomic_write, CsvPersistence};
use crate::storage::StorageError;

/// In-memory student table backed by a CSV file
pub struct Store {
    /// Students in insertion/file order
    students: Vec<Student>,
    /// Next ID to assign
    next_id: u32,
    /// Backing file handler
    persistence: CsvPersistence,
}

impl Store {
    /// Open the store backed by `path`, loading it if it exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self {
            students: Vec::new(),
            next_id: 1,
            persistence: CsvPersistence::new(path),
        };
        store.load()?;
        Ok(store)
    }

    /// Open the store at the configured data file
    pub fn open_with_config(config: &Config) -> Result<Self> {
        Self::open(config.data_file.clone())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.persistence.path()
    }

    /// Replace the in-memory table with the contents of the backing file
    ///
    /// A missing file leaves the store empty with `next_id` = 1.
    pub fn load(&mut self) -> Result<()> {
        let students = self
            .persistence
            .load()
            .with_context(|| format!("Failed to load students from {:?}", self.path()))?;

        // The highest ID must leave room for the next one
        self.next_id = match students.iter().enumerate().max_by_key(|(_, s)| s.id) {
            None => 1,
            Some((row, highest)) => highest.id.checked_add(1).ok_or_else(|| {
                StorageError::InvalidFormat {
                    path: self.path().to_path_buf(),
                    details: format!(
                        "row {}: ID {} leaves no room for another student",
                        row + 2,
                        highest.id
                    ),
                }
            })?,
        };
        self.students = students;

        debug!(
            "Store loaded: {} student(s), next_id={}",
            self.students.len(),
            self.next_id
        );
        Ok(())
    }

    /// Rewrite the backing file with `students`, then adopt them
    ///
    /// The in-memory table is only replaced once the file holds the new rows.
    fn save(&mut self, students: Vec<Student>) -> Result<()> {
        self.persistence
            .save(&students)
            .with_context(|| format!("Failed to save students to {:?}", self.path()))?;
        self.students = students;
        Ok(())
    }

    // ==================== Student Operations ====================

    /// Add a new student and persist
    ///
    /// Returns the stored record with its assigned ID.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        roll_number: impl Into<String>,
        email: impl Into<String>,
        grade: impl Into<String>,
    ) -> Result<&Student> {
        let id = self.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| anyhow!("No student IDs left after {}", id))?;

        let mut students = self.students.clone();
        students.push(Student::new(id, name, roll_number, email, grade));
        self.save(students).context("Failed to add student")?;
        self.next_id = next_id;

        let student = &self.students[self.students.len() - 1];
        info!("Added student {}", student.id);
        Ok(student)
    }

    /// Look up a student by ID
    pub fn search(&self, id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Find students whose name, roll number or email contains `query`
    pub fn find(&self, query: &str) -> Vec<&Student> {
        self.students.iter().filter(|s| s.matches(query)).collect()
    }

    /// Apply `update` to the student with `id` and persist
    ///
    /// Returns false, without touching the file, if no such student exists.
    pub fn update(&mut self, id: u32, update: StudentUpdate) -> Result<bool> {
        let mut students = self.students.clone();
        let Some(student) = students.iter_mut().find(|s| s.id == id) else {
            warn!("Update of unknown student {}", id);
            return Ok(false);
        };

        update.apply(student);
        self.save(students).context("Failed to update student")?;

        info!("Updated student {}", id);
        Ok(true)
    }

    /// Remove the student with `id` and persist
    ///
    /// Returns false, without touching the file, if no such student exists.
    pub fn delete(&mut self, id: u32) -> Result<bool> {
        let Some(pos) = self.students.iter().position(|s| s.id == id) else {
            warn!("Delete of unknown student {}", id);
            return Ok(false);
        };

        let mut students = self.students.clone();
        students.remove(pos);
        self.save(students).context("Failed to delete student")?;

        info!("Deleted student {}", id);
        Ok(true)
    }

    /// Write a plain-text report of all students to `path`
    pub fn report(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = render_report(&self.students, Local::now().naive_local());

        atomic_write(path, content.as_bytes())
            .with_context(|| format!("Failed to write report to {:?}", path))?;

        info!("Wrote report of {} student(s) to {:?}", self.students.len(), path);
        Ok(())
    }

    // ==================== Stats ====================

    /// All students in store order
    pub fn all(&self) -> &[Student] {
        &self.students
    }

    /// ID the next `add` will assign
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
