//! The fixed label layout
//!
//! One label is an 80mm x 30mm landscape page split into three horizontal
//! bands: product names and price-column headers on top, the localized
//! name and the two prices in the middle, the barcode at the bottom. All
//! positions are fixed; only the measured width of the MRP text varies,
//! and it drives the cross-out geometry.

use crate::barcode::Code128Symbol;
use crate::fonts::{LabelFonts, LABEL_FAMILY, SCRIPT_FAMILY};
use crate::{LabelRecord, Result};
use pdf_canvas::{Align, FontWeight, PdfDocument, Segment};

/// Label width in millimeters
pub const LABEL_WIDTH_MM: f64 = 80.0;
/// Label height in millimeters
pub const LABEL_HEIGHT_MM: f64 = 30.0;

/// Left edge of both product-name bands
const NAME_X_MM: f64 = 2.0;
/// Column offset of the MRP header and value
const MRP_COLUMN_MM: f64 = 50.0;
/// Column offset of the SP header and value
const SP_COLUMN_MM: f64 = 65.0;

/// Baseline of the top band (item name + column headers), from the top
const ROW1_BASELINE_MM: f64 = 6.0;
/// Baseline of the middle band (localized name + prices), from the top
const ROW2_BASELINE_MM: f64 = 18.0;

/// Font sizes in points
const NAME_SIZE: f32 = 15.0;
const HEADER_SIZE: f32 = 10.0;
const SCRIPT_SIZE: f32 = 15.0;
const PRICE_SIZE: f32 = 15.0;
const BARCODE_TEXT_SIZE: f32 = 8.0;

/// Currency glyph prefixed to both price values
const CURRENCY: char = '₹';

/// Nominal height of the 15pt price text, for the cross-out box
const STRIKE_TEXT_HEIGHT_PT: f64 = 12.0;
/// The cross-out spans 70% of the text box
const STRIKE_SCALE: f64 = 0.7;
const STRIKE_LINE_WIDTH_PT: f64 = 1.0;

/// Width of one barcode module in points
const BAR_MODULE_WIDTH_PT: f64 = 0.4;
/// Bar height
const BAR_HEIGHT_MM: f64 = 5.0;
/// Gap between the page bottom and the bars
const BAR_BOTTOM_MM: f64 = 4.0;
/// Baseline of the literal barcode text, above the page bottom
const BARCODE_TEXT_BASELINE_MM: f64 = 2.0;

/// Convert millimeters to points
pub fn mm(value: f64) -> f64 {
    value * 72.0 / 25.4
}

/// Page width in points
pub fn page_width() -> f64 {
    mm(LABEL_WIDTH_MM)
}

/// Page height in points
pub fn page_height() -> f64 {
    mm(LABEL_HEIGHT_MM)
}

/// The two diagonals of the cross-out mark over a struck price
///
/// `x`/`baseline_y` anchor the drawn text (top-origin coordinates);
/// `text_width`/`text_height` are its box. Both diagonals share a
/// bounding box scaled to 70% of the text box and centered on it, so the
/// mark's width is always 0.7 x the measured text width.
pub fn strike_segments(
    x: f64,
    baseline_y: f64,
    text_width: f64,
    text_height: f64,
) -> [Segment; 2] {
    let dx = text_width * STRIKE_SCALE;
    let dy = text_height * STRIKE_SCALE;

    let center_x = x + text_width / 2.0;
    let center_y = baseline_y - text_height / 2.0;

    [
        Segment::new(
            center_x - dx / 2.0,
            center_y + dy / 2.0,
            center_x + dx / 2.0,
            center_y - dy / 2.0,
        ),
        Segment::new(
            center_x - dx / 2.0,
            center_y - dy / 2.0,
            center_x + dx / 2.0,
            center_y + dy / 2.0,
        ),
    ]
}

/// Draw one record onto one page
pub fn draw_label(
    doc: &mut PdfDocument,
    page: usize,
    record: &LabelRecord,
    fonts: &LabelFonts,
) -> Result<()> {
    // Band 1: item name + column headers
    doc.set_font(LABEL_FAMILY, NAME_SIZE)?;
    doc.set_font_weight(FontWeight::Bold)?;
    doc.insert_text(
        &record.item_name,
        page,
        mm(NAME_X_MM),
        mm(ROW1_BASELINE_MM),
        Align::Left,
    )?;

    doc.set_font(LABEL_FAMILY, HEADER_SIZE)?;
    doc.set_font_weight(FontWeight::Regular)?;
    doc.insert_text("MRP", page, mm(MRP_COLUMN_MM), mm(ROW1_BASELINE_MM), Align::Left)?;
    doc.insert_text("SP", page, mm(SP_COLUMN_MM), mm(ROW1_BASELINE_MM), Align::Left)?;

    // Band 2: localized name + prices
    doc.set_font(SCRIPT_FAMILY, SCRIPT_SIZE)?;
    doc.insert_text(
        &record.localized_name,
        page,
        mm(NAME_X_MM),
        mm(ROW2_BASELINE_MM),
        Align::Left,
    )?;

    doc.set_font(fonts.currency_family(), PRICE_SIZE)?;

    let mrp_text = format!("{CURRENCY}{}", record.mrp);
    let mrp_width = doc.get_text_width(&mrp_text)?;
    doc.insert_text(&mrp_text, page, mm(MRP_COLUMN_MM), mm(ROW2_BASELINE_MM), Align::Left)?;

    // The MRP is superseded by the SP, so strike it out
    for segment in strike_segments(
        mm(MRP_COLUMN_MM),
        mm(ROW2_BASELINE_MM),
        mrp_width,
        STRIKE_TEXT_HEIGHT_PT,
    ) {
        doc.insert_line(page, segment, STRIKE_LINE_WIDTH_PT)?;
    }

    let sp_text = format!("{CURRENCY}{}", record.sp);
    doc.insert_text(&sp_text, page, mm(SP_COLUMN_MM), mm(ROW2_BASELINE_MM), Align::Left)?;

    // Band 3: barcode symbol + literal text
    let symbol = Code128Symbol::encode(&record.barcode)?;
    let symbol_width = symbol.width_points(BAR_MODULE_WIDTH_PT);
    let symbol_x = (page_width() - symbol_width) / 2.0;
    let symbol_top = page_height() - mm(BAR_BOTTOM_MM) - mm(BAR_HEIGHT_MM);
    doc.insert_image(
        &symbol.to_png()?,
        page,
        symbol_x,
        symbol_top,
        symbol_width,
        mm(BAR_HEIGHT_MM),
    )?;

    doc.set_font(LABEL_FAMILY, BARCODE_TEXT_SIZE)?;
    doc.insert_text(
        &record.barcode,
        page,
        page_width() / 2.0,
        page_height() - mm(BARCODE_TEXT_BASELINE_MM),
        Align::Center,
    )?;

    Ok(())
}
