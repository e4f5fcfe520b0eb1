//! Code 128 barcode symbols

use crate::{LabelError, Result};
use barcoders::sym::code128::Code128;
use image::{DynamicImage, GrayImage, Luma};
use std::io::Cursor;

/// Character-set B selector expected by the encoder; covers the printable
/// ASCII range
const CHARSET_B: char = 'Ɓ';

/// Pixels per module in the rendered raster
const PX_PER_MODULE: u32 = 4;
/// Raster height; the symbol is stretched to its physical height on the page
const RASTER_HEIGHT_PX: u32 = 40;

/// An encoded Code 128 symbol
///
/// Holds the module pattern (start code, data, checksum, stop pattern) as
/// a sequence of 1s (bars) and 0s (spaces). The same payload always
/// encodes to the same pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code128Symbol {
    modules: Vec<u8>,
}

impl Code128Symbol {
    /// Encode a payload in character set B
    ///
    /// Empty payloads and characters outside the set are errors; a record
    /// with an unencodable barcode aborts generation.
    pub fn encode(data: &str) -> Result<Self> {
        if data.is_empty() {
            return Err(LabelError::Barcode("barcode text is empty".to_string()));
        }

        let code = Code128::new(format!("{CHARSET_B}{data}"))
            .map_err(|e| LabelError::Barcode(format!("{data:?}: {e}")))?;

        Ok(Self {
            modules: code.encode(),
        })
    }

    /// The bar/space module pattern
    pub fn modules(&self) -> &[u8] {
        &self.modules
    }

    /// Symbol width in points for a given module width
    pub fn width_points(&self, module_width: f64) -> f64 {
        self.modules.len() as f64 * module_width
    }

    /// Render the symbol as a monochrome PNG (black bars on white)
    ///
    /// Rendered at a fixed pixel density and scaled to physical size at
    /// placement time; PNG keeps the bar edges crisp.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let width = self.modules.len() as u32 * PX_PER_MODULE;
        let raster = GrayImage::from_fn(width, RASTER_HEIGHT_PX, |x, _| {
            if self.modules[(x / PX_PER_MODULE) as usize] == 1 {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        });

        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(raster)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .map_err(|e| LabelError::Barcode(e.to_string()))?;

        Ok(bytes)
    }
}
