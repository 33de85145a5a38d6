//! Large block-character rendering of the clock.

/// Rows per glyph.
pub const GLYPH_HEIGHT: u16 = 5;

const DIGITS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

const COLON: [&str; 5] = [" ", "█", " ", "█", " "];

/// Render `MM:SS` (or any run of digits and colons) as five lines.
///
/// Characters other than digits and `:` are skipped.
#[must_use]
pub fn big_text(text: &str) -> Vec<String> {
    let mut rows = vec![String::new(); GLYPH_HEIGHT as usize];
    for c in text.chars() {
        let glyph: &[&str; 5] = match c {
            ':' => &COLON,
            d => match d.to_digit(10) {
                Some(n) => &DIGITS[n as usize],
                None => continue,
            },
        };
        for (row, part) in rows.iter_mut().zip(glyph.iter()) {
            if !row.is_empty() {
                row.push(' ');
            }
            row.push_str(part);
        }
    }
    rows
}

/// Display width of [`big_text`] output for `text`.
#[must_use]
pub fn big_text_width(text: &str) -> usize {
    big_text(text).first().map_or(0, |r| r.chars().count())
}
