//! Data models for Roster
//!
//! Defines the student record and the partial update applied to it.
//! Serde field names double as the CSV header, so a `Student` maps
//! directly onto one row of the backing file.

use serde::{Deserialize, Serialize};

/// Column names of the backing file, in order
pub const CSV_HEADER: [&str; 5] = ["ID", "Name", "Roll Number", "Email", "Grade"];

/// A stored student record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    /// Unique identifier, assigned by the store
    #[serde(rename = "ID")]
    pub id: u32,
    /// Full name
    #[serde(rename = "Name")]
    pub name: String,
    /// Roll number (free text)
    #[serde(rename = "Roll Number")]
    pub roll_number: String,
    /// Contact email
    #[serde(rename = "Email")]
    pub email: String,
    /// Grade (free text)
    #[serde(rename = "Grade")]
    pub grade: String,
}

impl Student {
    /// Create a student with an already-assigned ID
    pub fn new(
        id: u32,
        name: impl Into<String>,
        roll_number: impl Into<String>,
        email: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            roll_number: roll_number.into(),
            email: email.into(),
            grade: grade.into(),
        }
    }

    /// Whether name, roll number or email contains `query` (case-insensitive)
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [&self.name, &self.roll_number, &self.email]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Roll: {}, Email: {}, Grade: {}",
            self.id, self.name, self.roll_number, self.email, self.grade
        )
    }
}

/// A partial update to a student
///
/// Only fields set to `Some` are written; everything else is left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub roll_number: Option<String>,
    pub email: Option<String>,
    pub grade: Option<String>,
}

impl StudentUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_roll_number(mut self, roll_number: impl Into<String>) -> Self {
        self.roll_number = Some(roll_number.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.roll_number.is_none()
            && self.email.is_none()
            && self.grade.is_none()
    }

    /// Overwrite the provided fields on `student`
    ///
    /// Returns true if at least one field was provided.
    pub fn apply(&self, student: &mut Student) -> bool {
        if let Some(ref name) = self.name {
            student.name = name.clone();
        }
        if let Some(ref roll_number) = self.roll_number {
            student.roll_number = roll_number.clone();
        }
        if let Some(ref email) = self.email {
            student.email = email.clone();
        }
        if let Some(ref grade) = self.grade {
            student.grade = grade.clone();
        }
        !self.is_empty()
    }
}
