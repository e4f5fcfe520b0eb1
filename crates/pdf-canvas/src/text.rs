//! Text rendering operators

use crate::document::Color;
use crate::Align;

/// Context for rendering one text run
pub struct TextRenderContext {
    /// PDF font resource name (e.g., "F1")
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Text width in points (for alignment)
    pub text_width: f64,
    /// Text color (RGB)
    pub color: Color,
}

/// Generate PDF operators for a text run
///
/// Emits BT/rg/Tf/Td/Tj/ET for hex-encoded text at a position given in PDF
/// coordinates (origin bottom-left). Center/right alignment shifts the
/// start position by the measured text width.
pub fn generate_text_operators(
    text_hex: &str,
    x: f64,
    y: f64,
    align: Align,
    ctx: &TextRenderContext,
) -> Vec<u8> {
    let x_offset = match align {
        Align::Left => 0.0,
        Align::Center => -ctx.text_width / 2.0,
        Align::Right => -ctx.text_width,
    };

    let final_x = x + x_offset;

    let mut ops = String::new();
    ops.push_str("BT\n");
    ops.push_str(&format!(
        "{} {} {} rg\n",
        ctx.color.r, ctx.color.g, ctx.color.b
    ));
    ops.push_str(&format!("/{} {} Tf\n", ctx.font_name, ctx.font_size));
    ops.push_str(&format!("{final_x} {y} Td\n"));
    ops.push_str(&format!("{text_hex} Tj\n"));
    ops.push_str("ET\n");

    ops.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(font_name: &str, font_size: f32, text_width: f64) -> TextRenderContext {
        TextRenderContext {
            font_name: font_name.to_string(),
            font_size,
            text_width,
            color: Color::black(),
        }
    }

    #[test]
    fn test_operators_left() {
        let ops = generate_text_operators(
            "<00480065006C006C006F>",
            100.0,
            50.0,
            Align::Left,
            &ctx("F1", 15.0, 80.0),
        );
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("BT"));
        assert!(ops_str.contains("/F1 15 Tf"));
        assert!(ops_str.contains("100 50 Td"));
        assert!(ops_str.contains("<00480065006C006C006F> Tj"));
        assert!(ops_str.contains("ET"));
    }

    #[test]
    fn test_operators_center() {
        let ops =
            generate_text_operators("<0041>", 200.0, 10.0, Align::Center, &ctx("F2", 8.0, 60.0));
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("/F2 8 Tf"));
        assert!(ops_str.contains("170 10 Td")); // 200 - 60/2
    }

    #[test]
    fn test_operators_right() {
        let ops =
            generate_text_operators("<0041>", 200.0, 10.0, Align::Right, &ctx("F1", 10.0, 60.0));
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("140 10 Td")); // 200 - 60
    }

    #[test]
    fn test_operators_zero_width_center() {
        let ops =
            generate_text_operators("<0041>", 100.0, 10.0, Align::Center, &ctx("F1", 10.0, 0.0));
        let ops_str = String::from_utf8(ops).unwrap();

        // Zero-width text keeps its anchor position
        assert!(ops_str.contains("100 10 Td"));
    }

    #[test]
    fn test_operators_color() {
        let mut context = ctx("F1", 12.0, 10.0);
        context.color = Color::rgb(1.0, 0.0, 0.0);
        let ops = generate_text_operators("<0041>", 0.0, 0.0, Align::Left, &context);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("1 0 0 rg"));
    }
}
