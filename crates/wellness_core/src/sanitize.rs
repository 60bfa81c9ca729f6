//! Narrative sanitization.
//!
//! The order is part of the contract: control characters are stripped
//! first, then everything outside the printable set, then surrounding
//! whitespace. Applying the sanitizer twice yields the same output as
//! applying it once.

/// C0/C1 control characters, minus LF and CR which the second pass keeps.
fn is_stripped_control(c: char) -> bool {
    let n = c as u32;
    n <= 0x08
        || n == 0x0B
        || n == 0x0C
        || (0x0E..=0x1F).contains(&n)
        || (0x7F..=0x9F).contains(&n)
}

/// Printable ASCII, LF, CR, or Unicode at or above U+00A0.
fn is_kept(c: char) -> bool {
    let n = c as u32;
    (0x20..=0x7E).contains(&n) || c == '\n' || c == '\r' || n >= 0xA0
}

pub fn sanitize_narrative(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !is_stripped_control(*c))
        .filter(|c| is_kept(*c))
        .collect();
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_control_characters() {
        assert_eq!(sanitize_narrative("a\u{0}b\u{8}c\u{b}d\u{c}e\u{1f}f"), "abcdef");
        assert_eq!(sanitize_narrative("x\u{7f}y\u{9f}z"), "xyz");
    }

    #[test]
    fn keeps_newlines_and_unicode() {
        assert_eq!(
            sanitize_narrative("Plan:\nDrink 2.5L \u{2022} sleep 8h\r\n"),
            "Plan:\nDrink 2.5L \u{2022} sleep 8h"
        );
    }

    #[test]
    fn drops_tabs() {
        // Tab is outside the kept set
        assert_eq!(sanitize_narrative("a\tb"), "ab");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(sanitize_narrative("  hello world \n"), "hello world");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "  \u{1}ok\u{fffd} text \u{a0}more\n",
            "plain",
            "\r\n mixed \u{9d} content \t here ",
            "",
        ];
        for s in samples {
            let once = sanitize_narrative(s);
            assert_eq!(sanitize_narrative(&once), once);
        }
    }
}
