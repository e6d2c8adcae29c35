//! Error types for entity-ddl
//!
//! Schema derivation itself never fails; these cover reading project files
//! and entity snapshots, and writing the generated script.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading inputs or writing output
#[derive(Error, Debug)]
pub enum EntityDdlError {
    #[error("Failed to read project file: {path}")]
    ProjectReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse project file: {path}")]
    ProjectParseError {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Invalid project file format: {message}")]
    InvalidProjectFormat { message: String },

    #[error("Failed to read entity snapshot: {path}")]
    SnapshotReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse entity snapshot: {path}")]
    SnapshotParseError {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Invalid entity snapshot {path}: {message}")]
    InvalidSnapshotFormat { path: PathBuf, message: String },

    #[error("Unknown dialect: {name} (expected mysql, postgresql, sqlserver or sqlite)")]
    UnknownDialect { name: String },

    #[error("Failed to write DDL to {path}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
