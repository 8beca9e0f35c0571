//! CSV persistence
//!
//! Handles loading and saving the student table to/from a single CSV file.
//! Uses atomic writes (write to temp file, then rename) so a crash mid-save
//! never leaves a half-written table behind.
//!
//! File layout: header `ID,Name,Roll Number,Email,Grade`, then one row per
//! student in store order. Fields containing commas or quotes are quoted.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{StorageError, StorageResult};
use crate::models::{Student, CSV_HEADER};

/// Persistence layer for the student table
pub struct CsvPersistence {
    path: PathBuf,
}

impl CsvPersistence {
    /// Create a persistence handler for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the backing file exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load all students in file order
    ///
    /// A missing file is an empty table, not an error.
    pub fn load(&self) -> StorageResult<Vec<Student>> {
        if !self.exists() {
            debug!("No record file at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let bytes =
            fs::read(&self.path).map_err(|e| StorageError::from_read_io(e, self.path.clone()))?;

        let students = decode(&bytes).map_err(|details| StorageError::InvalidFormat {
            path: self.path.clone(),
            details,
        })?;

        debug!("Loaded {} student(s) from {:?}", students.len(), self.path);
        Ok(students)
    }

    /// Overwrite the backing file with `students`
    pub fn save(&self, students: &[Student]) -> StorageResult<()> {
        let bytes = encode(students)?;
        atomic_write(&self.path, &bytes)?;
        debug!("Saved {} student(s) to {:?}", students.len(), self.path);
        Ok(())
    }
}

/// Parse a CSV table into students
fn decode(bytes: &[u8]) -> Result<Vec<Student>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    reader
        .deserialize::<Student>()
        .map(|row| row.map_err(|e| e.to_string()))
        .collect()
}

/// Render students as a CSV table, header first
fn encode(students: &[Student]) -> StorageResult<Vec<u8>> {
    // The header is written by hand so an empty table still has one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(io::Error::from)?;
    for student in students {
        writer.serialize(student).map_err(io::Error::from)?;
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
pub(crate) fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::from_io(e, parent.to_path_buf()))?;
        }
    }

    let temp_path = temp_path_for(path);

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_io(e, temp_path.clone()))?;
    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;
    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|source| StorageError::AtomicWriteFailed {
        from: temp_path.clone(),
        to: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Sibling temp file named after the whole file name, e.g. `students.csv.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
