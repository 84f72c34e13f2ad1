//! Morse glyph encoding
//!
//! Maps characters to their dot/dash patterns and measures how much
//! horizontal room a pattern needs on the panel.

use morsepanel_core::{LayoutError, Timing};

pub const DOT: char = '.';
pub const DASH: char = '-';

const LETTER_CODES: [&str; 26] = [
    ".-", "-...", "-.-.", "-..", ".", "..-.", "--.", "....", "..", ".---", "-.-", ".-..", "--",
    "-.", "---", ".--.", "--.-", ".-.", "...", "-", "..-", "...-", ".--", "-..-", "-.--", "--..",
];

const DIGIT_CODES: [&str; 10] = [
    "-----", ".----", "..---", "...--", "....-", ".....", "-....", "--...", "---..", "----.",
];

/// Morse pattern for one character. Space has the empty pattern.
pub fn code(ch: char) -> Result<&'static str, LayoutError> {
    let upper = ch.to_ascii_uppercase();
    match upper {
        'A'..='Z' => Ok(LETTER_CODES[(upper as u8 - b'A') as usize]),
        '0'..='9' => Ok(DIGIT_CODES[(upper as u8 - b'0') as usize]),
        ' ' => Ok(""),
        _ => Err(LayoutError::InvalidCharacter { ch }),
    }
}

/// Turns characters into patterns and patterns into widths.
#[derive(Debug, Clone, Copy)]
pub struct GlyphEncoder {
    timing: Timing,
}

impl GlyphEncoder {
    pub fn new(timing: Timing) -> Self {
        Self { timing }
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn code(&self, ch: char) -> Result<&'static str, LayoutError> {
        code(ch)
    }

    /// Width of a single slot: the dot or dash time.
    pub fn symbol_width(&self, symbol: char) -> Result<f64, LayoutError> {
        match symbol {
            DOT => Ok(self.timing.dot),
            DASH => Ok(self.timing.dash),
            _ => Err(LayoutError::InvalidSymbol { symbol }),
        }
    }

    /// Width of a whole pattern, each symbol followed by its gap.
    /// The letter gap is not included.
    pub fn width(&self, pattern: &str) -> Result<f64, LayoutError> {
        pattern.chars().try_fold(0.0, |w, symbol| {
            Ok(w + self.symbol_width(symbol)? + self.timing.symbol_gap)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> GlyphEncoder {
        GlyphEncoder::new(Timing {
            dot: 1.0,
            dash: 2.0,
            symbol_gap: 0.25,
            letter_gap: 0.5,
        })
    }

    #[test]
    fn test_canonical_codes() {
        assert_eq!(code('A').unwrap(), ".-");
        assert_eq!(code('a').unwrap(), ".-");
        assert_eq!(code('S').unwrap(), "...");
        assert_eq!(code('O').unwrap(), "---");
        assert_eq!(code('Z').unwrap(), "--..");
        assert_eq!(code('0').unwrap(), "-----");
        assert_eq!(code('5').unwrap(), ".....");
        assert_eq!(code('9').unwrap(), "----.");
        assert_eq!(code(' ').unwrap(), "");
    }

    #[test]
    fn test_every_supported_character_has_a_pattern() {
        for ch in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
            let pattern = code(ch).unwrap();
            assert!(!pattern.is_empty(), "{ch} has no pattern");
            assert!(pattern.chars().all(|s| s == DOT || s == DASH));
        }
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(code('#'), Err(LayoutError::InvalidCharacter { ch: '#' }));
        assert_eq!(code('.'), Err(LayoutError::InvalidCharacter { ch: '.' }));
        assert_eq!(code('é'), Err(LayoutError::InvalidCharacter { ch: 'é' }));
    }

    #[test]
    fn test_width() {
        let enc = encoder();
        assert_eq!(enc.width("").unwrap(), 0.0);
        assert_eq!(enc.width(".").unwrap(), 1.25);
        assert_eq!(enc.width("-").unwrap(), 2.25);
        assert_eq!(enc.width(".-").unwrap(), 3.5);
        assert_eq!(enc.width("---").unwrap(), 6.75);
    }

    #[test]
    fn test_width_is_additive() {
        let enc = encoder();
        for (a, b) in [("..", "-"), (".-.", "--"), ("", "...")] {
            let joined = format!("{a}{b}");
            assert_eq!(
                enc.width(&joined).unwrap(),
                enc.width(a).unwrap() + enc.width(b).unwrap()
            );
            assert!(enc.width(&joined).unwrap() >= enc.width(a).unwrap());
        }
    }

    #[test]
    fn test_invalid_symbol() {
        let enc = encoder();
        assert_eq!(
            enc.width(".x-"),
            Err(LayoutError::InvalidSymbol { symbol: 'x' })
        );
        assert_eq!(
            enc.symbol_width(' '),
            Err(LayoutError::InvalidSymbol { symbol: ' ' })
        );
    }
}
