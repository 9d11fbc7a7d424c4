//! Unified application error type.
//! All modules (store, core, cli, journal) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Journal (SQLite)
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid job type: {0}")]
    InvalidJobType(String),

    #[error("Invalid material entry: {0}")]
    InvalidMaterialSpec(String),

    // ---------------------------
    // Catalog lookups
    // ---------------------------
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown technician: {0}")]
    UnknownTechnician(String),

    #[error("Unknown site: {0}")]
    UnknownSite(String),

    // ---------------------------
    // Submission
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Failed to read sheet: {0}")]
    StoreRead(String),

    #[error("Failed to write sheet: {0}")]
    StoreWrite(String),

    #[error("Sheet changed while saving (expected {expected} rows, found {found}); nothing was written")]
    Conflict { expected: usize, found: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
