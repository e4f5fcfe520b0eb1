//! Spreadsheet input

use crate::{LabelError, LabelRecord, Result};
use calamine::{open_workbook_auto, Data, Reader};
use log::{debug, info};
use std::path::Path;

/// Header names the input sheet must carry, in any column order
pub const REQUIRED_COLUMNS: [&str; 5] = ["Item Name", "Tamil", "MRP", "SP", "Barcode"];

/// Read label records from the first worksheet of a spreadsheet
///
/// The first row is the header row. Every required column must be present
/// (exact, case-sensitive names); a missing column fails the whole read.
/// Cell values are coerced to text; rows with an empty Item Name are
/// skipped.
pub fn read_labels<P: AsRef<Path>>(path: P) -> Result<Vec<LabelRecord>> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|e| LabelError::Sheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LabelError::Sheet("workbook has no worksheets".to_string()))?
        .map_err(|e| LabelError::Sheet(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| LabelError::Sheet("worksheet is empty".to_string()))?;

    let columns = resolve_columns(header)?;
    debug!("resolved columns {columns:?} in {}", path.display());

    let mut records = Vec::new();
    for row in rows {
        let item_name = cell_text(row.get(columns.item_name));
        if item_name.is_empty() {
            continue;
        }

        records.push(LabelRecord {
            item_name,
            localized_name: cell_text(row.get(columns.localized_name)),
            mrp: cell_text(row.get(columns.mrp)),
            sp: cell_text(row.get(columns.sp)),
            barcode: cell_text(row.get(columns.barcode)),
        });
    }

    info!("read {} product rows from {}", records.len(), path.display());
    Ok(records)
}

/// Column indices resolved from the header row
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    item_name: usize,
    localized_name: usize,
    mrp: usize,
    sp: usize,
    barcode: usize,
}

fn resolve_columns(header: &[Data]) -> Result<ColumnMap> {
    let find = |name: &str| -> Result<usize> {
        header
            .iter()
            .position(|cell| cell_text(Some(cell)) == name)
            .ok_or_else(|| LabelError::MissingColumn(name.to_string()))
    };

    Ok(ColumnMap {
        item_name: find(REQUIRED_COLUMNS[0])?,
        localized_name: find(REQUIRED_COLUMNS[1])?,
        mrp: find(REQUIRED_COLUMNS[2])?,
        sp: find(REQUIRED_COLUMNS[3])?,
        barcode: find(REQUIRED_COLUMNS[4])?,
    })
}

/// Coerce a cell to text
///
/// Numeric cells render in their shortest display form (45.0 becomes
/// "45"), so barcodes and prices stored as numbers survive intact.
fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.trim().to_string(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) => format!("{f}"),
        Some(Data::Bool(b)) => b.to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}
