//! PDF document builder

use crate::graphics::{generate_line_operators, Segment};
use crate::image::{generate_image_operators, ImageXObject};
use crate::text::{generate_text_operators, TextRenderContext};
use crate::{Align, FontFamily, FontFamilyBuilder, FontWeight, PdfError, Result};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::path::Path;

/// A run of text with the font that will draw it
struct TextSegment {
    text: String,
    font_name: String,
}

/// A buffered text operation
///
/// Text is buffered during rendering and encoded during save, once every
/// font knows its full set of used characters.
#[derive(Debug, Clone)]
struct BufferedTextOp {
    text: String,
    /// Font variant name (e.g., "label-bold")
    font_name: String,
    /// Font resource name (e.g., "F1")
    font_resource_name: String,
    /// Page number (1-indexed)
    page: usize,
    /// X coordinate in PDF coordinates
    x: f64,
    /// Y coordinate in PDF coordinates (already flipped to bottom-origin)
    y: f64,
    font_size: f32,
    color: Color,
}

/// RGB color (components 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// PDF document under construction
///
/// Pages are appended in order; text, line, and image content is buffered
/// and written into each page's content stream when the document is
/// serialized. Y coordinates on the public API are measured from the top
/// of the page.
pub struct PdfDocument {
    /// The underlying lopdf document
    inner: Document,
    /// The pages tree node
    pages_id: ObjectId,
    /// (width, height) in points for each page, in page order
    page_sizes: Vec<(f64, f64)>,
    /// Registered font families
    font_families: HashMap<String, FontFamily>,
    /// Current font family name
    current_family: Option<String>,
    /// Current font weight
    current_weight: FontWeight,
    /// Current font size
    current_font_size: f32,
    /// Current drawing color (text fill and line stroke)
    current_color: Color,
    /// Embedded fonts (variant name -> PDF object ID)
    embedded_fonts: HashMap<String, ObjectId>,
    /// Page font resources (page number -> variant name -> resource name)
    page_font_resources: HashMap<usize, HashMap<String, String>>,
    next_font_resource: u32,
    /// Embedded images, deduplicated by content hash
    embedded_images: HashMap<u64, ObjectId>,
    /// Page image resources (page number -> resource name -> object ID)
    page_image_resources: HashMap<usize, HashMap<String, ObjectId>>,
    next_image_resource: u32,
    /// Font fallback chains (family -> fallback families, in order)
    font_fallbacks: HashMap<String, Vec<String>>,
    /// Buffered content operators per page
    page_content_buffer: HashMap<usize, Vec<u8>>,
    /// Buffered text operations (encoded during save)
    buffered_text_ops: Vec<BufferedTextOp>,
}

impl PdfDocument {
    /// Create an empty document with a fresh catalog and pages tree
    pub fn new() -> Self {
        let mut inner = Document::with_version("1.5");

        let pages_id = inner.add_object(dictionary! {
            "Type" => "Pages",
            "Count" => 0,
            "Kids" => Object::Array(vec![]),
        });

        let catalog_id = inner.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        inner.trailer.set("Root", catalog_id);

        Self {
            inner,
            pages_id,
            page_sizes: Vec::new(),
            font_families: HashMap::new(),
            current_family: None,
            current_weight: FontWeight::default(),
            current_font_size: 12.0,
            current_color: Color::default(),
            embedded_fonts: HashMap::new(),
            page_font_resources: HashMap::new(),
            next_font_resource: 1,
            embedded_images: HashMap::new(),
            page_image_resources: HashMap::new(),
            next_image_resource: 1,
            font_fallbacks: HashMap::new(),
            page_content_buffer: HashMap::new(),
            buffered_text_ops: Vec::new(),
        }
    }

    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_sizes.len()
    }

    /// Append a page with the given size in points
    ///
    /// Returns the new page number (1-indexed).
    pub fn add_page(&mut self, width: f64, height: f64) -> Result<usize> {
        let contents_id = self
            .inner
            .add_object(Object::Stream(Stream::new(Dictionary::new(), vec![])));

        let page_id = self.inner.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(width as f32),
                Object::Real(height as f32),
            ],
            "Resources" => Dictionary::new(),
            "Contents" => contents_id,
        });

        // Register the page in the pages tree
        let pages_obj = self.inner.get_object(self.pages_id)?;
        let pages_dict = pages_obj
            .as_dict()
            .map_err(|_| PdfError::StructureError("Pages node is not a dictionary".to_string()))?;

        let mut kids = pages_dict
            .get(b"Kids")
            .and_then(|k| k.as_array())
            .map_err(|_| PdfError::StructureError("Pages node missing Kids array".to_string()))?
            .clone();
        kids.push(Object::Reference(page_id));

        let mut new_pages_dict = pages_dict.clone();
        new_pages_dict.set(b"Kids", Object::Array(kids));
        new_pages_dict.set(b"Count", Object::Integer(self.page_sizes.len() as i64 + 1));
        self.inner.objects.insert(self.pages_id, new_pages_dict.into());

        self.page_sizes.push((width, height));
        Ok(self.page_sizes.len())
    }

    /// Register a font family
    ///
    /// # Example
    /// ```ignore
    /// doc.register_font_family("label",
    ///     FontFamilyBuilder::new()
    ///         .regular(std::fs::read("NotoSans-Regular.ttf")?)
    ///         .bold(std::fs::read("NotoSans-Bold.ttf")?)
    /// )?;
    /// ```
    pub fn register_font_family(&mut self, name: &str, builder: FontFamilyBuilder) -> Result<()> {
        if self.font_families.contains_key(name) {
            return Err(PdfError::FontAlreadyExists(name.to_string()));
        }

        let family = builder.build(name)?;
        self.font_families.insert(name.to_string(), family);

        Ok(())
    }

    /// Set the fallback chain for a family
    ///
    /// When a glyph is missing from the active family, fallbacks are tried
    /// in order, per character.
    pub fn set_font_fallback(&mut self, family: &str, fallbacks: &[String]) -> Result<()> {
        if !self.font_families.contains_key(family) {
            return Err(PdfError::FontNotFound(family.to_string()));
        }
        for fallback in fallbacks {
            if !self.font_families.contains_key(fallback) {
                return Err(PdfError::FontNotFound(fallback.clone()));
            }
        }

        self.font_fallbacks
            .insert(family.to_string(), fallbacks.to_vec());

        Ok(())
    }

    /// Set the current font family and size
    pub fn set_font(&mut self, family: &str, size: f32) -> Result<()> {
        if !self.font_families.contains_key(family) {
            return Err(PdfError::FontNotFound(family.to_string()));
        }

        self.current_family = Some(family.to_string());
        self.current_font_size = size;

        Ok(())
    }

    /// Set the font weight, keeping the current family and size
    pub fn set_font_weight(&mut self, weight: FontWeight) -> Result<()> {
        if self.current_family.is_none() {
            return Err(PdfError::FontNotFound("no font family set".to_string()));
        }

        self.current_weight = weight;
        Ok(())
    }

    /// Set the drawing color for subsequent text and lines
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Look up font data by variant name
    fn font_data(&self, variant_name: &str) -> Result<&crate::FontData> {
        for family in self.font_families.values() {
            for variant in [&family.regular, &family.bold].into_iter().flatten() {
                if variant.name == variant_name {
                    return Ok(variant);
                }
            }
        }

        Err(PdfError::FontNotFound(variant_name.to_string()))
    }

    /// Look up mutable font data by variant name
    fn font_data_mut(&mut self, variant_name: &str) -> Result<&mut crate::FontData> {
        for family in self.font_families.values_mut() {
            for variant in [&mut family.regular, &mut family.bold]
                .into_iter()
                .flatten()
            {
                if variant.name == variant_name {
                    return Ok(variant);
                }
            }
        }

        Err(PdfError::FontNotFound(variant_name.to_string()))
    }

    /// Split text into per-font segments honoring the fallback chain
    ///
    /// Consecutive characters that resolve to the same font collapse into
    /// one segment. A character nobody can draw stays with the primary
    /// font (and renders as .notdef).
    fn segment_text_by_font(&self, text: &str, family_name: &str) -> Result<Vec<TextSegment>> {
        let primary_name = self
            .font_families
            .get(family_name)
            .ok_or_else(|| PdfError::FontNotFound(family_name.to_string()))?
            .variant_name(family_name, self.current_weight);

        let fallbacks = self.font_fallbacks.get(family_name);

        let mut segments: Vec<TextSegment> = Vec::new();
        for c in text.chars() {
            let mut font_for_char = primary_name.clone();

            let primary_has_glyph = self
                .font_data(&primary_name)
                .map(|f| f.has_glyph(c))
                .unwrap_or(false);

            if !primary_has_glyph {
                if let Some(fallback_list) = fallbacks {
                    for fallback_family in fallback_list {
                        if let Some(family) = self.font_families.get(fallback_family) {
                            if let Some(variant) = family.variant(self.current_weight) {
                                if variant.has_glyph(c) {
                                    font_for_char = variant.name.clone();
                                    break;
                                }
                            }
                        }
                    }
                }
            }

            match segments.last_mut() {
                Some(last) if last.font_name == font_for_char => last.text.push(c),
                _ => segments.push(TextSegment {
                    text: c.to_string(),
                    font_name: font_for_char,
                }),
            }
        }

        Ok(segments)
    }

    /// Width in points of the text as it would be drawn with the current
    /// font, size, and fallback chain
    pub fn get_text_width(&self, text: &str) -> Result<f64> {
        let family_name = self
            .current_family
            .as_ref()
            .ok_or_else(|| PdfError::FontNotFound("no font family set".to_string()))?;

        let mut total = 0.0f64;
        for segment in self.segment_text_by_font(text, family_name)? {
            let font_data = self.font_data(&segment.font_name)?;
            total += font_data.text_width_points(&segment.text, self.current_font_size) as f64;
        }

        Ok(total)
    }

    /// Insert text at a position
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points
    /// * `y` - Baseline Y coordinate in points, measured from the top
    /// * `align` - Horizontal alignment relative to `x`
    pub fn insert_text(
        &mut self,
        text: &str,
        page: usize,
        x: f64,
        y: f64,
        align: Align,
    ) -> Result<()> {
        let page_height = self.page_height(page)?;

        if text.is_empty() {
            return Ok(());
        }

        let family_name = self
            .current_family
            .as_ref()
            .ok_or_else(|| PdfError::FontNotFound("no font family set".to_string()))?
            .clone();

        let segments = self.segment_text_by_font(text, &family_name)?;

        let mut total_width = 0.0f64;
        for segment in &segments {
            let font_data = self.font_data(&segment.font_name)?;
            total_width +=
                font_data.text_width_points(&segment.text, self.current_font_size) as f64;
        }

        let pdf_y = page_height - y;

        let start_x = match align {
            Align::Left => x,
            Align::Center => x - (total_width / 2.0),
            Align::Right => x - total_width,
        };

        let mut current_x = start_x;
        for segment in &segments {
            {
                let font_data = self.font_data_mut(&segment.font_name)?;
                font_data.add_chars(&segment.text);
            }

            let font_resource_name = self.font_resource_for_page(&segment.font_name, page);

            let segment_width = {
                let font_data = self.font_data(&segment.font_name)?;
                font_data.text_width_points(&segment.text, self.current_font_size) as f64
            };

            self.buffered_text_ops.push(BufferedTextOp {
                text: segment.text.clone(),
                font_name: segment.font_name.clone(),
                font_resource_name,
                page,
                x: current_x,
                y: pdf_y,
                font_size: self.current_font_size,
                color: self.current_color,
            });

            current_x += segment_width;
        }

        Ok(())
    }

    /// Draw a stroked line segment
    ///
    /// Endpoint Y coordinates are measured from the top of the page.
    pub fn insert_line(&mut self, page: usize, segment: Segment, line_width: f64) -> Result<()> {
        let page_height = self.page_height(page)?;

        let flipped = Segment::new(
            segment.x1,
            page_height - segment.y1,
            segment.x2,
            page_height - segment.y2,
        );

        let operators = generate_line_operators(&flipped, line_width, self.current_color);
        self.buffer_content(page, &operators);

        Ok(())
    }

    /// Insert an image at a position
    ///
    /// # Arguments
    /// * `data` - Encoded image bytes (JPEG or PNG)
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points
    /// * `y` - Y coordinate of the image's top edge, measured from the top
    /// * `width` / `height` - Display size in points
    pub fn insert_image(
        &mut self,
        data: &[u8],
        page: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()> {
        let page_height = self.page_height(page)?;

        let image_resource_name = self.image_resource_for_page(data, page)?;

        let pdf_y = page_height - y - height;
        let operators = generate_image_operators(&image_resource_name, x, pdf_y, width, height);
        self.buffer_content(page, &operators);

        Ok(())
    }

    /// Serialize the document to a file
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.finalize()?;
        self.inner
            .save(path)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Serialize the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.finalize()?;

        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }

    /// Encode buffered text, flush content streams, and embed fonts
    fn finalize(&mut self) -> Result<()> {
        self.encode_buffered_text()?;
        self.flush_content_buffers()?;
        self.embed_fonts()?;
        log::debug!(
            "finalized document: {} pages, {} embedded fonts, {} images",
            self.page_sizes.len(),
            self.embedded_fonts.len(),
            self.embedded_images.len()
        );
        Ok(())
    }

    /// Height in points of a page, validating the page number
    fn page_height(&self, page: usize) -> Result<f64> {
        if page == 0 || page > self.page_sizes.len() {
            return Err(PdfError::InvalidPage(page, self.page_sizes.len()));
        }
        Ok(self.page_sizes[page - 1].1)
    }

    /// Encode buffered text operations into page content buffers
    ///
    /// Runs at save time so every font's used-character set is complete
    /// before the /W widths and ToUnicode map are generated.
    fn encode_buffered_text(&mut self) -> Result<()> {
        let text_ops: Vec<BufferedTextOp> = std::mem::take(&mut self.buffered_text_ops);

        for op in text_ops {
            let (text_hex, text_width) = {
                let font_data = self.font_data(&op.font_name)?;
                (
                    font_data.encode_text_hex(&op.text),
                    font_data.text_width_points(&op.text, op.font_size) as f64,
                )
            };

            let ctx = TextRenderContext {
                font_name: op.font_resource_name,
                font_size: op.font_size,
                text_width,
                color: op.color,
            };

            // Position was already alignment-adjusted when buffered
            let operators = generate_text_operators(&text_hex, op.x, op.y, Align::Left, &ctx);
            self.buffer_content(op.page, &operators);
        }

        Ok(())
    }

    /// Embed every font that drew at least one character
    fn embed_fonts(&mut self) -> Result<()> {
        self.embedded_fonts.clear();

        let mut font_names: Vec<String> = Vec::new();
        for family in self.font_families.values() {
            for font_data in [&family.regular, &family.bold].into_iter().flatten() {
                if !font_data.used_chars.is_empty() {
                    font_names.push(font_data.name.clone());
                }
            }
        }
        font_names.sort();
        font_names.dedup();

        for font_name in font_names {
            self.embed_font_object(&font_name)?;
        }

        self.finalize_page_font_resources()?;

        Ok(())
    }

    /// Add one font's object graph to the document
    fn embed_font_object(&mut self, font_name: &str) -> Result<ObjectId> {
        let font_data = self.font_data(font_name)?;
        let font_objects = font_data.to_pdf_objects()?;

        let font_file_id = self.inner.add_object(font_objects.font_file_stream);

        let mut font_descriptor = font_objects.font_descriptor;
        font_descriptor.set("FontFile2", Object::Reference(font_file_id));
        let font_descriptor_id = self.inner.add_object(font_descriptor);

        let mut cid_font = font_objects.cid_font;
        cid_font.set("FontDescriptor", Object::Reference(font_descriptor_id));
        let cid_font_id = self.inner.add_object(cid_font);

        let mut type0_font = font_objects.type0_font;
        type0_font.set(
            "DescendantFonts",
            Object::Array(vec![Object::Reference(cid_font_id)]),
        );

        let tounicode_id = self.inner.add_object(font_objects.tounicode_stream);
        type0_font.set("ToUnicode", Object::Reference(tounicode_id));

        let type0_font_id = self.inner.add_object(type0_font);

        self.embedded_fonts
            .insert(font_name.to_string(), type0_font_id);

        Ok(type0_font_id)
    }

    /// Resource name (e.g., "F1") for a font on a page, allocating one if
    /// the font hasn't been used there yet
    ///
    /// The font object itself is embedded at save time, when the full
    /// character set is known.
    fn font_resource_for_page(&mut self, font_name: &str, page: usize) -> String {
        let page_resources = self.page_font_resources.entry(page).or_default();

        if let Some(resource_name) = page_resources.get(font_name) {
            return resource_name.clone();
        }

        let resource_name = format!("F{}", self.next_font_resource);
        self.next_font_resource += 1;
        page_resources.insert(font_name.to_string(), resource_name.clone());

        resource_name
    }

    /// Write font references into each page's Resources dictionary
    fn finalize_page_font_resources(&mut self) -> Result<()> {
        let page_resources: Vec<(usize, Vec<(String, String)>)> = self
            .page_font_resources
            .iter()
            .map(|(&page, fonts)| {
                (
                    page,
                    fonts
                        .iter()
                        .map(|(font, res)| (font.clone(), res.clone()))
                        .collect(),
                )
            })
            .collect();

        for (page, fonts) in page_resources {
            if !fonts.is_empty() {
                self.add_fonts_to_page_resources(page, &fonts)?;
            }
        }

        Ok(())
    }

    fn add_fonts_to_page_resources(
        &mut self,
        page: usize,
        fonts: &[(String, String)],
    ) -> Result<()> {
        let page_id = self.page_object_id(page)?;

        let page_obj = self.inner.get_object(page_id)?;
        let page_dict = page_obj
            .as_dict()
            .map_err(|_| PdfError::StructureError("page object is not a dictionary".to_string()))?;

        let mut resources_dict = page_dict
            .get(b"Resources")
            .and_then(|r| r.as_dict())
            .cloned()
            .unwrap_or_else(|_| Dictionary::new());

        let mut font_dict = resources_dict
            .get(b"Font")
            .and_then(|f| f.as_dict())
            .cloned()
            .unwrap_or_else(|_| Dictionary::new());

        for (font_name, resource_name) in fonts {
            let font_ref = self
                .embedded_fonts
                .get(font_name)
                .ok_or_else(|| PdfError::FontNotFound(font_name.to_string()))?;
            font_dict.set(resource_name.as_bytes(), Object::Reference(*font_ref));
        }

        resources_dict.set(b"Font", Object::Dictionary(font_dict));

        let mut new_page_dict = page_dict.clone();
        new_page_dict.set(b"Resources", Object::Dictionary(resources_dict));
        self.inner.objects.insert(page_id, new_page_dict.into());

        Ok(())
    }

    /// Object ID for a page number (1-indexed)
    fn page_object_id(&self, page: usize) -> Result<ObjectId> {
        let pages = self.inner.get_pages();
        pages
            .get(&(page as u32))
            .copied()
            .ok_or(PdfError::InvalidPage(page, self.page_sizes.len()))
    }

    /// Resource name for an image on a page, embedding the XObject on
    /// first use and deduplicating identical image data
    fn image_resource_for_page(&mut self, data: &[u8], page: usize) -> Result<String> {
        let mut hasher = DefaultHasher::new();
        data.hash(&mut hasher);
        let data_hash = hasher.finish();

        if !self.embedded_images.contains_key(&data_hash) {
            let xobject = ImageXObject::from_bytes(data)?;
            let object_id = self.inner.add_object(xobject.to_pdf_stream());
            self.embedded_images.insert(data_hash, object_id);
        }

        let object_id = self.embedded_images[&data_hash];

        let page_resources = self.page_image_resources.entry(page).or_default();
        for (name, id) in page_resources.iter() {
            if *id == object_id {
                return Ok(name.clone());
            }
        }

        let resource_name = format!("Im{}", self.next_image_resource);
        self.next_image_resource += 1;
        page_resources.insert(resource_name.clone(), object_id);

        self.add_image_to_page_resources(page, &resource_name, object_id)?;

        Ok(resource_name)
    }

    fn add_image_to_page_resources(
        &mut self,
        page: usize,
        resource_name: &str,
        object_id: ObjectId,
    ) -> Result<()> {
        let page_id = self.page_object_id(page)?;

        let page_obj = self.inner.get_object(page_id)?;
        let page_dict = page_obj
            .as_dict()
            .map_err(|_| PdfError::StructureError("page object is not a dictionary".to_string()))?;

        let mut resources_dict = page_dict
            .get(b"Resources")
            .and_then(|r| r.as_dict())
            .cloned()
            .unwrap_or_else(|_| Dictionary::new());

        let mut xobject_dict = resources_dict
            .get(b"XObject")
            .and_then(|x| x.as_dict())
            .cloned()
            .unwrap_or_else(|_| Dictionary::new());

        xobject_dict.set(resource_name.as_bytes(), Object::Reference(object_id));
        resources_dict.set(b"XObject", Object::Dictionary(xobject_dict));

        let mut new_page_dict = page_dict.clone();
        new_page_dict.set(b"Resources", Object::Dictionary(resources_dict));
        self.inner.objects.insert(page_id, new_page_dict.into());

        Ok(())
    }

    /// Buffer content operators for a page
    ///
    /// Buffered operators are flushed into a single content stream per page
    /// at save time, keeping the object table free of orphan streams.
    fn buffer_content(&mut self, page: usize, content: &[u8]) {
        self.page_content_buffer
            .entry(page)
            .or_default()
            .extend_from_slice(content);
    }

    /// Flush all buffered content to page content streams
    fn flush_content_buffers(&mut self) -> Result<()> {
        let buffers: Vec<(usize, Vec<u8>)> = self.page_content_buffer.drain().collect();

        for (page, content) in buffers {
            if !content.is_empty() {
                self.append_to_content_stream(page, &content)?;
            }
        }

        Ok(())
    }

    /// Append operators to a page's content stream
    fn append_to_content_stream(&mut self, page: usize, content: &[u8]) -> Result<()> {
        let page_id = self.page_object_id(page)?;

        let (existing_content, page_dict_clone) = {
            let page_obj = self.inner.get_object(page_id)?;
            let page_dict = page_obj.as_dict().map_err(|_| {
                PdfError::StructureError("page object is not a dictionary".to_string())
            })?;

            let existing = match page_dict.get(b"Contents") {
                Ok(Object::Stream(stream)) => stream
                    .decompressed_content()
                    .unwrap_or_else(|_| stream.content.clone()),
                Ok(Object::Reference(ref_id)) => {
                    if let Ok(Object::Stream(stream)) = self.inner.get_object(*ref_id) {
                        stream
                            .decompressed_content()
                            .unwrap_or_else(|_| stream.content.clone())
                    } else {
                        Vec::new()
                    }
                }
                _ => Vec::new(),
            };

            (existing, page_dict.clone())
        };

        let mut new_content = existing_content;
        new_content.extend_from_slice(content);

        let new_stream = Stream::new(Dictionary::new(), new_content);
        let stream_id = self.inner.add_object(new_stream);

        let mut new_page_dict = page_dict_clone;
        new_page_dict.set(b"Contents", Object::Reference(stream_id));
        self.inner.objects.insert(page_id, new_page_dict.into());

        Ok(())
    }
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}
