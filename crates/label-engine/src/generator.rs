//! Page sequencing

use crate::fonts::LabelFonts;
use crate::layout::{draw_label, page_height, page_width};
use crate::{LabelError, LabelRecord, Result};
use log::{debug, info};
use pdf_canvas::PdfDocument;

/// Render the selected records into a single PDF buffer
///
/// One page per record, in the order given. Generation is all-or-nothing:
/// the first drawing failure aborts and no buffer is produced. An empty
/// selection is refused so callers can report it before any document
/// exists.
pub fn generate_labels(records: &[LabelRecord], fonts: &LabelFonts) -> Result<Vec<u8>> {
    if records.is_empty() {
        return Err(LabelError::NoLabels);
    }

    let mut doc = PdfDocument::new();
    fonts.register(&mut doc)?;

    for record in records {
        let page = doc.add_page(page_width(), page_height())?;
        draw_label(&mut doc, page, record, fonts)?;
        debug!("drew label page {page} for {:?}", record.item_name);
    }

    let bytes = doc.to_bytes()?;
    info!(
        "generated {} label pages ({} bytes)",
        records.len(),
        bytes.len()
    );

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_is_refused() {
        let fonts = LabelFonts::from_bytes(vec![], vec![], vec![]);
        assert!(matches!(
            generate_labels(&[], &fonts),
            Err(LabelError::NoLabels)
        ));
    }

    #[test]
    fn test_invalid_fonts_abort_generation() {
        let fonts = LabelFonts::from_bytes(vec![0u8; 8], vec![0u8; 8], vec![0u8; 8]);
        let records = vec![LabelRecord::new("Rice", "அரிசி", "60", "55", "123")];
        assert!(matches!(
            generate_labels(&records, &fonts),
            Err(LabelError::Pdf(_))
        ));
    }
}
