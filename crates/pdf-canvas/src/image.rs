//! Raster image embedding

use crate::{PdfError, Result};
use image::DynamicImage;
use lopdf::{Dictionary, Stream};
use std::io::Cursor;

impl From<image::ImageError> for PdfError {
    fn from(err: image::ImageError) -> Self {
        PdfError::ImageError(err.to_string())
    }
}

/// Detected image format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

/// Detect image format from magic bytes
pub fn detect_format(data: &[u8]) -> Result<ImageFormat> {
    if data.len() < 8 {
        return Err(PdfError::ImageError("image data too short".to_string()));
    }

    if data[0] == 0xFF && data[1] == 0xD8 && data[2] == 0xFF {
        return Ok(ImageFormat::Jpeg);
    }

    if data[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
        return Ok(ImageFormat::Png);
    }

    Err(PdfError::ImageError("unknown image format".to_string()))
}

/// Image XObject ready for PDF embedding
#[derive(Debug, Clone)]
pub struct ImageXObject {
    pub width: u32,
    pub height: u32,
    /// "DeviceRGB" or "DeviceGray"
    pub color_space: String,
    /// "DCTDecode" for JPEG, "FlateDecode" for re-encoded PNG
    pub filter: String,
    /// Raw (already compressed) image data
    pub data: Vec<u8>,
}

impl ImageXObject {
    /// Build an XObject from encoded image bytes, dispatching on format
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        match detect_format(data)? {
            ImageFormat::Jpeg => Self::from_jpeg(data),
            ImageFormat::Png => Self::from_png(data),
        }
    }

    /// JPEG data embeds as-is with the DCTDecode filter
    pub fn from_jpeg(data: &[u8]) -> Result<Self> {
        let (width, height, num_components) = jpeg_frame_info(data)?;

        let color_space = if num_components == 1 {
            "DeviceGray".to_string()
        } else {
            "DeviceRGB".to_string()
        };

        Ok(Self {
            width,
            height,
            color_space,
            filter: "DCTDecode".to_string(),
            data: data.to_vec(),
        })
    }

    /// PNG data is decoded and re-encoded as flate-compressed samples
    ///
    /// Alpha, if present, is blended against white; grayscale stays
    /// grayscale to keep the stream small (barcode symbols are 1-channel).
    pub fn from_png(data: &[u8]) -> Result<Self> {
        let reader = image::ImageReader::new(Cursor::new(data)).with_guessed_format()?;
        let decoded = reader.decode()?;
        let (width, height) = (decoded.width(), decoded.height());

        let (raw_data, color_space) = match &decoded {
            DynamicImage::ImageLuma8(gray) => {
                (gray.as_raw().clone(), "DeviceGray".to_string())
            }
            DynamicImage::ImageLumaA8(_) => {
                let la = decoded.to_luma_alpha8();
                let mut gray_data = Vec::with_capacity((width * height) as usize);
                for pixel in la.pixels() {
                    let alpha = pixel[1] as f32 / 255.0;
                    gray_data.push((pixel[0] as f32 * alpha + 255.0 * (1.0 - alpha)) as u8);
                }
                (gray_data, "DeviceGray".to_string())
            }
            DynamicImage::ImageRgba8(_) | DynamicImage::ImageRgba16(_) => {
                let rgba = decoded.to_rgba8();
                let mut rgb_data = Vec::with_capacity((width * height * 3) as usize);
                for pixel in rgba.pixels() {
                    let alpha = pixel[3] as f32 / 255.0;
                    for channel in 0..3 {
                        rgb_data
                            .push((pixel[channel] as f32 * alpha + 255.0 * (1.0 - alpha)) as u8);
                    }
                }
                (rgb_data, "DeviceRGB".to_string())
            }
            _ => {
                let rgb = decoded.to_rgb8();
                (rgb.into_raw(), "DeviceRGB".to_string())
            }
        };

        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        std::io::Write::write_all(&mut encoder, &raw_data)?;
        let data = encoder.finish()?;

        Ok(Self {
            width,
            height,
            color_space,
            filter: "FlateDecode".to_string(),
            data,
        })
    }

    /// Convert to a lopdf stream object
    pub fn to_pdf_stream(&self) -> Stream {
        let mut dict = Dictionary::new();

        dict.set("Type", lopdf::Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", lopdf::Object::Name(b"Image".to_vec()));
        dict.set("Width", self.width as i64);
        dict.set("Height", self.height as i64);
        dict.set(
            "ColorSpace",
            lopdf::Object::Name(self.color_space.as_bytes().to_vec()),
        );
        dict.set("BitsPerComponent", 8i64);
        dict.set(
            "Filter",
            lopdf::Object::Name(self.filter.as_bytes().to_vec()),
        );
        dict.set("Length", self.data.len() as i64);

        Stream::new(dict, self.data.clone())
    }
}

/// Parse width, height, and component count from a JPEG SOF marker
fn jpeg_frame_info(data: &[u8]) -> Result<(u32, u32, u8)> {
    let mut i = 2;
    while i + 10 < data.len() {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }

        let marker = data[i + 1];

        // SOF0..SOF15, excluding DHT/JPG/DAC
        if (0xC0..=0xCF).contains(&marker) && marker != 0xC4 && marker != 0xC8 && marker != 0xCC {
            let height = u16::from_be_bytes([data[i + 5], data[i + 6]]) as u32;
            let width = u16::from_be_bytes([data[i + 7], data[i + 8]]) as u32;
            return Ok((width, height, data[i + 9]));
        }

        if i + 4 < data.len() {
            let length = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
            if length < 2 {
                break;
            }
            i += 2 + length;
        } else {
            break;
        }
    }

    Err(PdfError::ImageError(
        "could not parse JPEG frame header".to_string(),
    ))
}

/// Generate operators to place an image XObject
///
/// Saves the graphics state, scales/translates the unit square onto the
/// target rectangle, draws, and restores.
pub fn generate_image_operators(
    image_name: &str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Vec<u8> {
    format!("q\n{width} 0 0 {height} {x} {y} cm\n/{image_name} Do\nQ\n").into_bytes()
}
