//! Vector drawing operators

use crate::document::Color;

/// A straight line segment between two points, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width of the segment's bounding box
    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    /// Height of the segment's bounding box
    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }
}

/// Generate PDF operators for a stroked line segment
///
/// Coordinates are PDF coordinates (origin bottom-left). The graphics
/// state is saved and restored around the stroke so the line width and
/// color don't leak into later content.
pub fn generate_line_operators(segment: &Segment, line_width: f64, color: Color) -> Vec<u8> {
    format!(
        "q\n{} {} {} RG\n{} w\n{} {} m\n{} {} l\nS\nQ\n",
        color.r, color.g, color.b, line_width, segment.x1, segment.y1, segment.x2, segment.y2
    )
    .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_bounding_box() {
        let seg = Segment::new(10.0, 20.0, 40.0, 5.0);
        assert_eq!(seg.width(), 30.0);
        assert_eq!(seg.height(), 15.0);
    }

    #[test]
    fn test_line_operators() {
        let ops = generate_line_operators(
            &Segment::new(10.0, 20.0, 30.0, 40.0),
            1.0,
            Color::black(),
        );
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.starts_with("q\n"));
        assert!(ops_str.contains("0 0 0 RG"));
        assert!(ops_str.contains("1 w"));
        assert!(ops_str.contains("10 20 m"));
        assert!(ops_str.contains("30 40 l"));
        assert!(ops_str.contains("S\nQ"));
    }

    #[test]
    fn test_line_operators_negative_slope() {
        let ops = generate_line_operators(
            &Segment::new(0.0, 10.0, 20.0, -10.0),
            0.5,
            Color::black(),
        );
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("0.5 w"));
        assert!(ops_str.contains("20 -10 l"));
    }
}
