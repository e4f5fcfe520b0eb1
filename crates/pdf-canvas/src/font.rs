//! TrueType font handling and embedding

use crate::{PdfError, Result};
use lopdf::{Dictionary, Object, Stream};
use std::collections::HashSet;

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// A parsed TrueType font with usage tracking
#[derive(Debug, Clone)]
pub struct FontData {
    /// Font name/identifier
    pub name: String,
    /// Raw TTF data
    pub ttf_data: Vec<u8>,
    /// Characters drawn with this font (drives /W widths and the ToUnicode map)
    pub used_chars: HashSet<char>,
    /// Parsed font face
    face: Option<ttf_parser::Face<'static>>,
}

/// PDF objects generated for font embedding
pub struct FontObjects {
    /// Type0 font dictionary
    pub type0_font: Dictionary,
    /// CIDFontType2 dictionary
    pub cid_font: Dictionary,
    /// Font descriptor dictionary
    pub font_descriptor: Dictionary,
    /// Font file stream (TTF data)
    pub font_file_stream: Stream,
    /// ToUnicode CMap stream
    pub tounicode_stream: Stream,
}

/// Font family with a regular and an optional bold variant
#[derive(Debug, Clone, Default)]
pub struct FontFamily {
    pub regular: Option<FontData>,
    pub bold: Option<FontData>,
}

impl FontFamily {
    /// Get the variant for a weight, falling back to regular
    pub fn variant(&self, weight: FontWeight) -> Option<&FontData> {
        match weight {
            FontWeight::Bold => self.bold.as_ref().or(self.regular.as_ref()),
            FontWeight::Regular => self.regular.as_ref(),
        }
    }

    /// Internal font name for the variant (used for PDF resource mapping)
    pub fn variant_name(&self, family_name: &str, weight: FontWeight) -> String {
        match weight {
            FontWeight::Bold if self.bold.is_some() => format!("{family_name}-bold"),
            _ => format!("{family_name}-regular"),
        }
    }
}

/// Builder for registering font families
#[derive(Default)]
pub struct FontFamilyBuilder {
    regular: Option<Vec<u8>>,
    bold: Option<Vec<u8>>,
}

impl FontFamilyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regular(mut self, ttf_data: Vec<u8>) -> Self {
        self.regular = Some(ttf_data);
        self
    }

    pub fn bold(mut self, ttf_data: Vec<u8>) -> Self {
        self.bold = Some(ttf_data);
        self
    }

    /// Build the FontFamily from the provided TTF data
    ///
    /// A regular variant is required; bold is optional.
    pub fn build(self, family_name: &str) -> Result<FontFamily> {
        let regular = match self.regular {
            Some(data) => Some(FontData::from_ttf(&format!("{family_name}-regular"), &data)?),
            None => {
                return Err(PdfError::FontParseError(format!(
                    "font family '{family_name}' has no regular variant"
                )))
            }
        };

        let bold = self
            .bold
            .map(|data| FontData::from_ttf(&format!("{family_name}-bold"), &data))
            .transpose()?;

        Ok(FontFamily { regular, bold })
    }
}

impl FontData {
    /// Create font data from TTF bytes
    pub fn from_ttf(name: &str, ttf_data: &[u8]) -> Result<Self> {
        let data = ttf_data.to_vec();

        // The face borrows the TTF bytes for the document's lifetime, so the
        // copy is leaked to get a 'static borrow.
        let static_data: &'static [u8] = Box::leak(data.clone().into_boxed_slice());

        let face = ttf_parser::Face::parse(static_data, 0)
            .map_err(|e| PdfError::FontParseError(format!("{e:?}")))?;

        Ok(Self {
            name: name.to_string(),
            ttf_data: data,
            used_chars: HashSet::new(),
            face: Some(face),
        })
    }

    /// Record characters drawn with this font
    pub fn add_chars(&mut self, text: &str) {
        for c in text.chars() {
            self.used_chars.insert(c);
        }
    }

    /// Glyph ID for a character
    pub fn glyph_id(&self, c: char) -> Option<u16> {
        self.face
            .as_ref()
            .and_then(|face| face.glyph_index(c).map(|id| id.0))
    }

    /// Whether the font maps the character to a real glyph (not .notdef)
    pub fn has_glyph(&self, c: char) -> bool {
        self.glyph_id(c).map(|id| id != 0).unwrap_or(false)
    }

    /// Horizontal advance for a character, in font units
    pub fn glyph_advance(&self, c: char) -> Option<u16> {
        self.face.as_ref().and_then(|face| {
            let glyph_id = face.glyph_index(c)?;
            face.glyph_hor_advance(glyph_id)
        })
    }

    /// Font units per em
    pub fn units_per_em(&self) -> u16 {
        self.face
            .as_ref()
            .map(|face| face.units_per_em())
            .unwrap_or(1000)
    }

    /// Font ascender in font units
    pub fn ascender(&self) -> i16 {
        self.face
            .as_ref()
            .map(|face| face.ascender())
            .unwrap_or(800)
    }

    /// Font descender in font units
    pub fn descender(&self) -> i16 {
        self.face
            .as_ref()
            .map(|face| face.descender())
            .unwrap_or(-200)
    }

    /// Text width in font units
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars()
            .filter_map(|c| self.glyph_advance(c))
            .map(|w| w as u32)
            .sum()
    }

    /// Text width in points at the given font size
    pub fn text_width_points(&self, text: &str, font_size: f32) -> f32 {
        let width = self.text_width(text);
        let units_per_em = self.units_per_em() as f32;
        (width as f32 / units_per_em) * font_size
    }

    /// Encode text as an Identity-H hex string for the Tj operator
    pub fn encode_text_hex(&self, text: &str) -> String {
        let mut result = String::new();
        for c in text.chars() {
            let gid = self.glyph_id(c).unwrap_or(0);
            result.push_str(&format!("{gid:04X}"));
        }
        format!("<{result}>")
    }

    /// Generate all PDF objects needed to embed this font
    ///
    /// Cross-references between the objects (FontFile2, FontDescriptor,
    /// DescendantFonts, ToUnicode) carry placeholder references; the
    /// document wires them up when the objects are added.
    pub fn to_pdf_objects(&self) -> Result<FontObjects> {
        let font_name = Object::Name(self.name.clone().into());

        let tounicode_content = self.generate_tounicode_cmap();
        let tounicode_stream = Stream::new(
            Dictionary::from_iter(vec![
                ("Type", "CMap".into()),
                ("Length", (tounicode_content.len() as i32).into()),
            ]),
            tounicode_content.into_bytes(),
        );

        let font_file_stream = Stream::new(
            Dictionary::from_iter(vec![
                ("Type", "FontDescriptor".into()),
                ("Subtype", "TrueType".into()),
                ("Length1", (self.ttf_data.len() as i32).into()),
            ]),
            self.ttf_data.clone(),
        );

        let units_per_em = self.units_per_em() as i32;
        let ascender = self.ascender();
        let descender = self.descender();

        // Bounding box approximated from the vertical metrics
        let font_bbox = vec![
            0.into(),
            descender.into(),
            units_per_em.into(),
            ascender.into(),
        ];

        let font_descriptor = Dictionary::from_iter(vec![
            ("Type", "FontDescriptor".into()),
            ("FontName", font_name.clone()),
            ("Flags", 4.into()), // Symbolic
            ("FontBBox", font_bbox.into()),
            ("ItalicAngle", 0.into()),
            ("Ascent", ascender.into()),
            ("Descent", descender.into()),
            ("CapHeight", ascender.into()),
            ("StemV", 80.into()),
            ("FontFile2", Object::Reference((0, 0))),
        ]);

        let widths_array = self.generate_widths_array();

        let cid_system_info = Dictionary::from_iter(vec![
            ("Registry", "Adobe".into()),
            ("Ordering", "Identity".into()),
            ("Supplement", 0.into()),
        ]);

        let cid_font = Dictionary::from_iter(vec![
            ("Type", "Font".into()),
            ("Subtype", "CIDFontType2".into()),
            ("BaseFont", font_name.clone()),
            ("CIDSystemInfo", cid_system_info.into()),
            ("FontDescriptor", Object::Reference((0, 0))),
            ("W", widths_array.into()),
            ("DW", 1000.into()),
        ]);

        let type0_font = Dictionary::from_iter(vec![
            ("Type", "Font".into()),
            ("Subtype", "Type0".into()),
            ("BaseFont", font_name),
            ("Encoding", "Identity-H".into()),
            ("DescendantFonts", vec![Object::Reference((0, 0))].into()),
            ("ToUnicode", Object::Reference((0, 0))),
        ]);

        Ok(FontObjects {
            type0_font,
            cid_font,
            font_descriptor,
            font_file_stream,
            tounicode_stream,
        })
    }

    /// /W array mapping used glyph IDs to their advances
    fn generate_widths_array(&self) -> Vec<Object> {
        let mut widths = Vec::new();
        let face = match &self.face {
            Some(f) => f,
            None => return widths,
        };

        let mut gids: Vec<u16> = self
            .used_chars
            .iter()
            .filter_map(|&c| self.glyph_id(c))
            .collect();
        gids.sort();
        gids.dedup();

        // Individual [gid [width]] entries; correct for any GID distribution
        for gid in gids {
            let advance = face
                .glyph_hor_advance(ttf_parser::GlyphId(gid))
                .unwrap_or(1000);
            widths.push(gid.into());
            widths.push(vec![advance.into()].into());
        }

        widths
    }

    /// ToUnicode CMap content mapping GIDs back to Unicode codepoints
    fn generate_tounicode_cmap(&self) -> String {
        let mut cmap = String::new();

        cmap.push_str("/CIDInit /ProcSet findresource begin\n");
        cmap.push_str("12 dict begin\n");
        cmap.push_str("begincmap\n");
        cmap.push_str("/CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n");
        cmap.push_str("/CMapName /Adobe-Identity-UCS def\n");
        cmap.push_str("/CMapType 2 def\n");
        cmap.push_str("1 begincodespacerange\n");
        cmap.push_str("<0000> <FFFF>\n");
        cmap.push_str("endcodespacerange\n");

        let mut char_list: Vec<char> = self.used_chars.iter().copied().collect();
        char_list.sort_by_key(|c| *c as u32);

        // bfchar sections are capped at 100 entries per the PDF spec
        for chunk in char_list.chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", chunk.len()));
            for c in chunk {
                let gid = self.glyph_id(*c).unwrap_or(0);
                let unicode = *c as u32;
                cmap.push_str(&format!("<{gid:04X}> <{unicode:04X}>\n"));
            }
            cmap.push_str("endbfchar\n");
        }

        cmap.push_str("endcmap\n");
        cmap.push_str("CMapName currentdict /CMap defineresource pop\n");
        cmap.push_str("end\n");
        cmap.push_str("end\n");

        cmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// FontData without a parsed face, for exercising the API paths that
    /// don't need real glyph metrics
    fn faceless_font() -> FontData {
        FontData {
            name: "test".to_string(),
            ttf_data: vec![0u8; 64],
            used_chars: HashSet::new(),
            face: None,
        }
    }

    #[test]
    fn test_add_chars_dedups() {
        let mut font = faceless_font();
        font.add_chars("Hello");
        assert_eq!(font.used_chars.len(), 4); // l appears twice
        assert!(font.used_chars.contains(&'H'));
        assert!(font.used_chars.contains(&'o'));
    }

    #[test]
    fn test_add_chars_tamil() {
        let mut font = faceless_font();
        font.add_chars("தமிழ்");
        assert!(font.used_chars.contains(&'த'));
        assert!(font.used_chars.contains(&'ழ'));
        assert!(font.used_chars.contains(&'\u{0BCD}'));
    }

    #[test]
    fn test_metric_defaults_without_face() {
        let font = faceless_font();
        assert_eq!(font.units_per_em(), 1000);
        assert_eq!(font.ascender(), 800);
        assert_eq!(font.descender(), -200);
        assert_eq!(font.text_width("Hello"), 0);
        assert_eq!(font.text_width_points("Hello", 15.0), 0.0);
    }

    #[test]
    fn test_encode_text_hex_without_face() {
        let font = faceless_font();
        assert_eq!(font.encode_text_hex(""), "<>");
        // Every character maps to GID 0 when no face is present
        assert_eq!(font.encode_text_hex("A"), "<0000>");
        assert_eq!(font.encode_text_hex("AB"), "<00000000>");
    }

    #[test]
    fn test_has_glyph_without_face() {
        let font = faceless_font();
        assert!(!font.has_glyph('A'));
        assert!(!font.has_glyph('₹'));
    }

    #[test]
    fn test_to_pdf_objects() {
        let mut font = faceless_font();
        font.add_chars("MRP");

        let objects = font.to_pdf_objects().expect("pdf objects");

        assert!(!objects.type0_font.is_empty());
        assert!(!objects.cid_font.is_empty());
        assert!(!objects.font_descriptor.is_empty());
        assert!(!objects.font_file_stream.content.is_empty());
        assert!(!objects.tounicode_stream.content.is_empty());
        assert_eq!(
            objects
                .type0_font
                .get(b"Encoding")
                .unwrap()
                .as_name()
                .unwrap(),
            b"Identity-H"
        );
    }

    #[test]
    fn test_tounicode_cmap_contains_mappings() {
        let mut font = faceless_font();
        font.add_chars("₹5");

        let cmap = font.generate_tounicode_cmap();

        assert!(cmap.contains("begincmap"));
        assert!(cmap.contains("endcmap"));
        assert!(cmap.contains("<0000> <0035>")); // '5'
        assert!(cmap.contains("<0000> <20B9>")); // '₹'
    }

    #[test]
    fn test_family_variant_fallback() {
        let family = FontFamily {
            regular: Some(faceless_font()),
            bold: None,
        };

        // Bold request falls back to the regular variant
        assert!(family.variant(FontWeight::Bold).is_some());
        assert_eq!(family.variant_name("label", FontWeight::Bold), "label-regular");

        let family = FontFamily {
            regular: Some(faceless_font()),
            bold: Some(faceless_font()),
        };
        assert_eq!(family.variant_name("label", FontWeight::Bold), "label-bold");
        assert_eq!(
            family.variant_name("label", FontWeight::Regular),
            "label-regular"
        );
    }

    #[test]
    fn test_builder_requires_regular() {
        let err = FontFamilyBuilder::new().build("label").unwrap_err();
        assert!(matches!(err, PdfError::FontParseError(_)));
    }

    #[test]
    fn test_builder_rejects_invalid_ttf() {
        let err = FontFamilyBuilder::new()
            .regular(vec![0u8; 16])
            .build("label")
            .unwrap_err();
        assert!(matches!(err, PdfError::FontParseError(_)));
    }
}
