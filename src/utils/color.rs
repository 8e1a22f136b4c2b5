use ratatui::style::Color;

/// Convert a `#RRGGBB` palette entry to a terminal color
#[must_use]
pub fn hex_to_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Color::Rgb(0, 122, 255); // Default to blue
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Rgb(0, 122, 255),
    }
}

/// Scale a color toward black by `opacity` (1.0 = unchanged)
#[must_use]
pub fn fade(color: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => {
            let scale = |c: u8| (c as f32 * opacity).round() as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}
