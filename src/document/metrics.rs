//! Advance widths of the standard Helvetica faces, used to right-align and
//! center text and to wrap long paragraphs. Values are in 1/1000 em for
//! the printable ASCII range; anything else falls back to the width of a digit.

use crate::document::layout::FontStyle;

const FIRST_CHAR: u32 = 32;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015,                                             // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N'..'Z'
    278, 278, 278, 469, 556, 333,                                                   // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // 'n'..'z'
    334, 260, 334, 584,                                                             // '{'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

const FALLBACK_WIDTH: u16 = 556;
const MM_PER_POINT: f32 = 25.4 / 72.0;

fn char_width(ch: char, style: FontStyle) -> u16 {
    let table = match style {
        FontStyle::Bold => &HELVETICA_BOLD,
        // Oblique shares the upright metrics.
        FontStyle::Normal | FontStyle::Italic => &HELVETICA,
    };
    (ch as u32)
        .checked_sub(FIRST_CHAR)
        .and_then(|idx| table.get(idx as usize))
        .copied()
        .unwrap_or(FALLBACK_WIDTH)
}

/// Width of `text` in millimetres at `size` points.
pub fn text_width_mm(text: &str, size: f32, style: FontStyle) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(char_width(ch, style))).sum();
    units as f32 / 1000.0 * size * MM_PER_POINT
}

/// Greedy word wrap to `max_width_mm`. Explicit newlines are kept; a single
/// word wider than the line is broken between characters.
pub fn wrap_text(text: &str, max_width_mm: f32, size: f32, style: FontStyle) -> Vec<String> {
    let fits = |candidate: &str| text_width_mm(candidate, size, style) <= max_width_mm;
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if fits(&candidate) {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if fits(word) {
                current = word.to_string();
            } else {
                for ch in word.chars() {
                    current.push(ch);
                    if !fits(&current) && current.chars().count() > 1 {
                        current.pop();
                        lines.push(std::mem::take(&mut current));
                        current.push(ch);
                    }
                }
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_width() {
        // 1000 units at 10pt is exactly 10pt wide.
        let width = text_width_mm("00", 10.0, FontStyle::Normal);
        let expected = 1.112 * 10.0 * MM_PER_POINT;
        assert!((width - expected).abs() < 1e-4);
    }

    #[test]
    fn test_bold_is_wider() {
        let normal = text_width_mm("Quotation", 12.0, FontStyle::Normal);
        let bold = text_width_mm("Quotation", 12.0, FontStyle::Bold);
        assert!(bold > normal);
        assert_eq!(
            text_width_mm("Quotation", 12.0, FontStyle::Italic),
            normal
        );
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let lines = wrap_text("Hello there", 100.0, 10.0, FontStyle::Normal);
        assert_eq!(lines, vec!["Hello there"]);
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "We need an online store with a catalog of two hundred products and card payments";
        let lines = wrap_text(text, 40.0, 10.0, FontStyle::Normal);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, 10.0, FontStyle::Normal) <= 40.0);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_breaks_long_word() {
        let lines = wrap_text(&"x".repeat(60), 20.0, 10.0, FontStyle::Normal);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "x".repeat(60));
    }

    #[test]
    fn test_wrap_keeps_newlines() {
        let lines = wrap_text("first\nsecond", 100.0, 10.0, FontStyle::Normal);
        assert_eq!(lines, vec!["first", "second"]);
    }
}
