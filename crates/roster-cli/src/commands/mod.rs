//! One-shot command handlers

pub mod config;
pub mod report;
pub mod student;
