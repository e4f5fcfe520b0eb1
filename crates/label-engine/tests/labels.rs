//! End-to-end tests: spreadsheet rows in, label PDF out
//!
//! Rendering tests need a real TTF and probe common system locations,
//! skipping when none is installed. Spreadsheet fixtures are produced on
//! the fly with rust_xlsxwriter.

use label_engine::{generate_labels, read_labels, LabelError, LabelFonts, LabelRecord};
use lopdf::Document;
use rust_xlsxwriter::Workbook;

fn load_system_font() -> Option<Vec<u8>> {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    CANDIDATES.iter().find_map(|p| std::fs::read(p).ok())
}

/// A font set where one system face plays every role
fn test_fonts() -> Option<LabelFonts> {
    let font = load_system_font()?;
    Some(LabelFonts::from_bytes(font.clone(), font.clone(), font))
}

macro_rules! require_fonts {
    () => {
        match test_fonts() {
            Some(fonts) => fonts,
            None => {
                eprintln!("skipping: no system TTF available");
                return;
            }
        }
    };
}

fn sample_records() -> Vec<LabelRecord> {
    vec![
        LabelRecord::new("Rice 1kg", "அரிசி", "60", "55", "8901234567890"),
        LabelRecord::new("Dal 500g", "பருப்பு", "80.50", "72", "8901234567891"),
        LabelRecord::new("Soap", "சோப்பு", "30", "25", "8901234567892"),
    ]
}

fn page_count(pdf: &[u8]) -> usize {
    Document::load_mem(pdf).unwrap().get_pages().len()
}

fn image_xobject_count(pdf: &[u8]) -> usize {
    Document::load_mem(pdf)
        .unwrap()
        .objects
        .values()
        .filter(|obj| {
            obj.as_stream()
                .ok()
                .and_then(|s| s.dict.get(b"Subtype").ok())
                .and_then(|v| v.as_name().ok())
                .map(|n| n == b"Image")
                .unwrap_or(false)
        })
        .count()
}

#[test]
fn one_page_per_record_in_selection_order() {
    let fonts = require_fonts!();

    let records = sample_records();
    let pdf = generate_labels(&records, &fonts).unwrap();
    assert_eq!(page_count(&pdf), records.len());

    let single = generate_labels(&records[..1], &fonts).unwrap();
    assert_eq!(page_count(&single), 1);
}

#[test]
fn non_numeric_price_text_renders() {
    let fonts = require_fonts!();

    // Price text is passed through verbatim; malformed values still render
    let records = vec![LabelRecord::new("Soap", "சோப்பு", "N/A", "ask", "123")];
    let pdf = generate_labels(&records, &fonts).unwrap();
    assert_eq!(page_count(&pdf), 1);
}

#[test]
fn shared_barcode_is_one_symbol_on_two_pages() {
    let fonts = require_fonts!();

    let records = vec![
        LabelRecord::new("Rice 1kg", "அரிசி", "60", "55", "8901234567890"),
        LabelRecord::new("Rice 5kg", "அரிசி", "290", "275", "8901234567890"),
    ];
    let pdf = generate_labels(&records, &fonts).unwrap();

    assert_eq!(page_count(&pdf), 2);
    // Identical payloads encode identically, so the XObject is shared
    assert_eq!(image_xobject_count(&pdf), 1);
}

#[test]
fn distinct_barcodes_embed_distinct_symbols() {
    let fonts = require_fonts!();

    let pdf = generate_labels(&sample_records(), &fonts).unwrap();
    assert_eq!(image_xobject_count(&pdf), 3);
}

#[test]
fn unencodable_barcode_aborts_generation() {
    let fonts = require_fonts!();

    let records = vec![
        LabelRecord::new("Rice 1kg", "அரிசி", "60", "55", "8901234567890"),
        LabelRecord::new("Bad", "தவறு", "1", "1", "தமிழ்"),
    ];
    assert!(matches!(
        generate_labels(&records, &fonts),
        Err(LabelError::Barcode(_))
    ));
}

#[test]
fn spreadsheet_rows_become_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in ["Item Name", "Tamil", "MRP", "SP", "Barcode"]
        .iter()
        .enumerate()
    {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    sheet.write_string(1, 0, "Rice 1kg").unwrap();
    sheet.write_string(1, 1, "அரிசி").unwrap();
    sheet.write_number(1, 2, 60.0).unwrap();
    sheet.write_number(1, 3, 55.5).unwrap();
    sheet.write_number(1, 4, 8901234567890.0).unwrap();
    // Row without an item name is skipped
    sheet.write_string(2, 1, "??").unwrap();
    sheet.write_string(3, 0, "Soap").unwrap();
    sheet.write_string(3, 1, "சோப்பு").unwrap();
    sheet.write_string(3, 2, "30").unwrap();
    sheet.write_string(3, 3, "25").unwrap();
    sheet.write_string(3, 4, "SOAP-01").unwrap();
    workbook.save(&path).unwrap();

    let records = read_labels(&path).unwrap();
    assert_eq!(
        records,
        vec![
            LabelRecord::new("Rice 1kg", "அரிசி", "60", "55.5", "8901234567890"),
            LabelRecord::new("Soap", "சோப்பு", "30", "25", "SOAP-01"),
        ]
    );
}

#[test]
fn missing_barcode_column_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-barcode.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in ["Item Name", "Tamil", "MRP", "SP"].iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    sheet.write_string(1, 0, "Rice 1kg").unwrap();
    workbook.save(&path).unwrap();

    match read_labels(&path).unwrap_err() {
        LabelError::MissingColumn(name) => assert_eq!(name, "Barcode"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn spreadsheet_to_pdf_pipeline() {
    let fonts = require_fonts!();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in ["Item Name", "Tamil", "MRP", "SP", "Barcode"]
        .iter()
        .enumerate()
    {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    for row in 0..4u32 {
        sheet.write_string(row + 1, 0, format!("Item {row}")).unwrap();
        sheet.write_string(row + 1, 1, "பொருள்").unwrap();
        sheet.write_number(row + 1, 2, 10.0 + row as f64).unwrap();
        sheet.write_number(row + 1, 3, 9.0 + row as f64).unwrap();
        sheet.write_string(row + 1, 4, format!("ITEM-{row:04}")).unwrap();
    }
    workbook.save(&path).unwrap();

    let table = read_labels(&path).unwrap();
    assert_eq!(table.len(), 4);

    // Operator picks two rows and edits one price
    let selected = vec![
        table[2].clone().with_price_overrides(Some("11.50"), None),
        table[0].clone(),
    ];
    let pdf = generate_labels(&selected, &fonts).unwrap();
    assert_eq!(page_count(&pdf), 2);
}
