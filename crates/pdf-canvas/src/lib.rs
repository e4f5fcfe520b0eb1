//! PDF Canvas - PDF document writing
//!
//! This crate provides functionality for:
//! - Building PDF documents from scratch with fixed-size pages
//! - Embedding TrueType fonts (Type0/CID with ToUnicode CMaps)
//! - Inserting text at specific coordinates, with per-character fallback
//! - Drawing stroked line segments
//! - Inserting images (JPEG, PNG)
//!
//! # Example
//!
//! ```ignore
//! use pdf_canvas::{Align, FontFamilyBuilder, PdfDocument};
//!
//! let mut doc = PdfDocument::new();
//! doc.register_font_family("body",
//!     FontFamilyBuilder::new().regular(std::fs::read("NotoSans-Regular.ttf")?))?;
//! let page = doc.add_page(226.77, 85.04)?;
//! doc.set_font("body", 12.0)?;
//! doc.insert_text("Hello", page, 10.0, 20.0, Align::Left)?;
//! let bytes = doc.to_bytes()?;
//! ```

mod document;
mod font;
mod graphics;
mod image;
mod text;

pub use document::{Color, PdfDocument};
pub use font::{FontData, FontFamily, FontFamilyBuilder, FontWeight};
pub use graphics::Segment;
pub use text::{generate_text_operators, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Font already exists: {0}")]
    FontAlreadyExists(String),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("PDF structure error: {0}")]
    StructureError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_default() {
        assert_eq!(Align::default(), Align::Left);
    }
}
