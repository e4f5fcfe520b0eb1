//! Label Engine - price-label layout and generation
//!
//! This crate turns spreadsheet rows into a multi-page PDF of 80mm x 30mm
//! price labels. It provides:
//! - The [`LabelRecord`] model and the spreadsheet reader that produces it
//! - Explicit font-set initialization ([`FontConfig`] / [`LabelFonts`])
//! - The fixed three-band label layout with a struck-through MRP
//! - Code 128 barcode symbols rendered into each label
//! - The page sequencer ([`generate_labels`])
//! - A best-effort local printer capability ([`printer`])
//!
//! # Example
//!
//! ```ignore
//! use label_engine::{generate_labels, read_labels, FontConfig, LabelFonts};
//!
//! let fonts = LabelFonts::load(&FontConfig::from_dir("fonts".as_ref()))?;
//! let records = read_labels("products.xlsx")?;
//! let pdf = generate_labels(&records, &fonts)?;
//! std::fs::write("labels.pdf", pdf)?;
//! ```

pub mod barcode;
pub mod fonts;
pub mod generator;
pub mod layout;
pub mod printer;
pub mod record;
pub mod sheet;

pub use barcode::Code128Symbol;
pub use fonts::{FontConfig, LabelFonts};
pub use generator::generate_labels;
pub use printer::{default_queue, PrintError, PrintQueue};
pub use record::LabelRecord;
pub use sheet::read_labels;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing labels
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("Failed to read spreadsheet: {0}")]
    Sheet(String),

    #[error("Spreadsheet is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Font asset not found: {0}")]
    FontMissing(PathBuf),

    #[error("Barcode error: {0}")]
    Barcode(String),

    #[error("No labels selected")]
    NoLabels,

    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_canvas::PdfError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for label operations
pub type Result<T> = std::result::Result<T, LabelError>;
