//! Roster Core Library
//!
//! This crate provides the core functionality for Roster, a single-user
//! student record manager backed by a CSV file.
//!
//! # Architecture
//!
//! - **CSV file**: source of truth, rewritten in full on every mutation
//! - **Store**: the whole table held in memory, searched by linear scan
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open("students.csv")?;
//!
//! // Add a student
//! let id = store.add("Alice", "R1", "a@x.com", "A")?.id;
//!
//! // Query
//! let alice = store.search(id);
//! ```
//!
//! # Modules
//!
//! - `store`: the student table and its operations (main entry point)
//! - `models`: `Student` and `StudentUpdate`
//! - `storage`: CSV persistence and storage errors
//! - `report`: plain-text report rendering
//! - `config`: application configuration

pub mod config;
pub mod models;
pub mod report;
pub mod storage;
pub mod store;

pub use config::Config;
pub use models::{Student, StudentUpdate};
pub use storage::{CsvPersistence, StorageError};
pub use store::Store;
