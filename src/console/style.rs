//! Display colors keyed by log level.
use colored::Color;

/// Color used for levels missing from [`LEVEL_STYLES`].
pub const FALLBACK_STYLE: Color = Color::BrightWhite;

/// Level tags the client is known to send, with their console color.
const LEVEL_STYLES: &[(&str, Color)] = &[
    ("INFO", Color::BrightBlue),
    ("WARNING", Color::BrightYellow),
    ("ERROR", Color::BrightRed),
    ("SUCCESS", Color::BrightGreen),
    ("AI", Color::BrightMagenta),
    ("USER", Color::BrightCyan),
    ("EXPORT", Color::BrightWhite),
];

/// Looks up the color for a level tag. Matching is case-sensitive.
pub fn style_for(level: &str) -> Color {
    LEVEL_STYLES
        .iter()
        .find(|(tag, _)| *tag == level)
        .map_or(FALLBACK_STYLE, |(_, color)| *color)
}
