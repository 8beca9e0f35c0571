//! Storage layer
//!
//! The student table lives in a single CSV file that is rewritten in full
//! on every mutation. There is no index and no incremental write path.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::CsvPersistence;
