//! Font-set initialization
//!
//! Font resources are loaded once, up front, into a [`LabelFonts`] value
//! that is passed to the generator - there is no ambient global font
//! registry. A missing asset fails here, before any spreadsheet input is
//! touched.

use crate::{LabelError, Result};
use log::debug;
use pdf_canvas::{FontData, FontFamilyBuilder, PdfDocument};
use std::path::{Path, PathBuf};

/// Family used for the item name, column headers, and barcode literal
pub(crate) const LABEL_FAMILY: &str = "label";
/// Family used for the localized product name
pub(crate) const SCRIPT_FAMILY: &str = "script";
/// Family used for price strings when a distinct currency asset is set
pub(crate) const CURRENCY_FAMILY: &str = "currency";

/// Paths to the TTF assets a label needs
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Latin text, regular weight
    pub label_regular: PathBuf,
    /// Latin text, bold weight (item name)
    pub label_bold: PathBuf,
    /// The localized script (must cover the Tamil block)
    pub script: PathBuf,
    /// Optional separate asset for the currency glyph; when absent the
    /// script asset draws the price strings too
    pub currency: Option<PathBuf>,
}

impl FontConfig {
    /// Conventional file names inside a fonts directory
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            label_regular: dir.join("NotoSans-Regular.ttf"),
            label_bold: dir.join("NotoSans-Bold.ttf"),
            script: dir.join("NotoSansTamil-Regular.ttf"),
            currency: None,
        }
    }
}

/// Loaded font assets, ready to register on a document
#[derive(Debug)]
pub struct LabelFonts {
    label_regular: Vec<u8>,
    label_bold: Vec<u8>,
    script: Vec<u8>,
    currency: Option<Vec<u8>>,
}

impl LabelFonts {
    /// Read and validate every configured asset
    ///
    /// Each file is parsed once here so a corrupt or missing font is a
    /// startup error rather than a generation-time surprise.
    pub fn load(config: &FontConfig) -> Result<Self> {
        let label_regular = read_font(&config.label_regular)?;
        let label_bold = read_font(&config.label_bold)?;
        let script = read_font(&config.script)?;
        let currency = config
            .currency
            .as_deref()
            .map(read_font)
            .transpose()?;

        Ok(Self {
            label_regular,
            label_bold,
            script,
            currency,
        })
    }

    /// Build a font set from raw TTF bytes (used by tests)
    pub fn from_bytes(label_regular: Vec<u8>, label_bold: Vec<u8>, script: Vec<u8>) -> Self {
        Self {
            label_regular,
            label_bold,
            script,
            currency: None,
        }
    }

    /// Register the families and fallback chains on a document
    ///
    /// The script and currency families fall back to the label family per
    /// character, so ASCII mixed into localized text still renders.
    pub(crate) fn register(&self, doc: &mut PdfDocument) -> Result<()> {
        doc.register_font_family(
            LABEL_FAMILY,
            FontFamilyBuilder::new()
                .regular(self.label_regular.clone())
                .bold(self.label_bold.clone()),
        )?;

        doc.register_font_family(
            SCRIPT_FAMILY,
            FontFamilyBuilder::new().regular(self.script.clone()),
        )?;
        doc.set_font_fallback(SCRIPT_FAMILY, &[LABEL_FAMILY.to_string()])?;

        if let Some(currency) = &self.currency {
            doc.register_font_family(
                CURRENCY_FAMILY,
                FontFamilyBuilder::new().regular(currency.clone()),
            )?;
            doc.set_font_fallback(CURRENCY_FAMILY, &[LABEL_FAMILY.to_string()])?;
        }

        Ok(())
    }

    /// Family name that draws price strings
    pub(crate) fn currency_family(&self) -> &'static str {
        if self.currency.is_some() {
            CURRENCY_FAMILY
        } else {
            SCRIPT_FAMILY
        }
    }
}

fn read_font(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(LabelError::FontMissing(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;

    // Parse eagerly so a bad asset fails at startup
    FontData::from_ttf("probe", &bytes)?;
    debug!("loaded font asset {} ({} bytes)", path.display(), bytes.len());

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_is_fatal() {
        let config = FontConfig::from_dir(Path::new("/nonexistent/fonts"));
        let err = LabelFonts::load(&config).unwrap_err();
        match err {
            LabelError::FontMissing(path) => {
                assert!(path.starts_with("/nonexistent/fonts"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_font_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("NotoSans-Regular.ttf");
        std::fs::write(&bogus, b"not a font").unwrap();

        let mut config = FontConfig::from_dir(dir.path());
        config.label_bold = bogus.clone();
        config.script = bogus.clone();

        let err = LabelFonts::load(&config).unwrap_err();
        assert!(matches!(err, LabelError::Pdf(_)));
    }

    #[test]
    fn test_currency_family_defaults_to_script() {
        let fonts = LabelFonts::from_bytes(vec![], vec![], vec![]);
        assert_eq!(fonts.currency_family(), SCRIPT_FAMILY);
    }
}
