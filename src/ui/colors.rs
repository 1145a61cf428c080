//! Color definitions for amino acids and UI elements

use ratatui::style::Color;

/// Display color for a single-letter amino-acid code (`*` is a stop).
pub fn get_amino_acid_color(symbol: char) -> Color {
    match symbol {
        'F' => Color::Red,
        'L' => Color::Green,
        'I' => Color::Yellow,
        'M' => Color::Blue,
        'V' => Color::Magenta,
        'S' => Color::Cyan,
        'P' => Color::Gray,
        'T' => Color::DarkGray,
        'A' => Color::LightRed,
        'Y' => Color::LightGreen,
        'H' => Color::LightYellow,
        'Q' => Color::LightBlue,
        'N' => Color::LightMagenta,
        'K' => Color::LightCyan,
        'D' => Color::White,
        'E' => Color::Red,
        'C' => Color::Green,
        'W' => Color::Yellow,
        'R' => Color::Blue,
        'G' => Color::Magenta,
        '*' => Color::Red,
        _ => Color::White,
    }
}

/// Display color for a nucleotide base. Characters outside the DNA
/// alphabet show red so invalid input stands out in the preview.
pub fn get_base_color(base: char) -> Color {
    match base {
        'A' => Color::Green,
        'T' => Color::Yellow,
        'G' => Color::Cyan,
        'C' => Color::Magenta,
        _ => Color::Red,
    }
}
