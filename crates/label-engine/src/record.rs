//! The label record model

use serde::{Deserialize, Serialize};

/// One label's worth of data
///
/// All fields are text: cell values are coerced on read, and price fields
/// are drawn verbatim whether or not they parse as numbers. The struct is
/// serde-serializable so a prepared JSON job file can stand in for
/// interactive row selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRecord {
    /// Product name (Latin script)
    pub item_name: String,
    /// Product name in the localized script
    pub localized_name: String,
    /// Original price text, shown struck through
    pub mrp: String,
    /// Selling price text
    pub sp: String,
    /// Barcode payload
    pub barcode: String,
}

impl LabelRecord {
    pub fn new(
        item_name: impl Into<String>,
        localized_name: impl Into<String>,
        mrp: impl Into<String>,
        sp: impl Into<String>,
        barcode: impl Into<String>,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            localized_name: localized_name.into(),
            mrp: mrp.into(),
            sp: sp.into(),
            barcode: barcode.into(),
        }
    }

    /// Replace the price texts with operator-supplied overrides
    pub fn with_price_overrides(mut self, mrp: Option<&str>, sp: Option<&str>) -> Self {
        if let Some(mrp) = mrp {
            self.mrp = mrp.to_string();
        }
        if let Some(sp) = sp {
            self.sp = sp.to_string();
        }
        self
    }
}
