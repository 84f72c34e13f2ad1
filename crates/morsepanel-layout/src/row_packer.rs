//! Row packing
//!
//! Places Morse glyphs left to right in one horizontal band of the panel,
//! stepping around restricted areas, until the row is full or the stop
//! marker is reached.

use morsepanel_core::{LayoutError, Rect};
use tracing::debug;

use crate::glyph::GlyphEncoder;
use crate::restrictions::RestrictionResolver;

/// Position in the source text. Restarts from the beginning once the text
/// runs out, so the message repeats to fill the panel.
#[derive(Debug, Clone)]
pub struct TextCursor {
    chars: Vec<char>,
    position: usize,
    wraps: usize,
}

impl TextCursor {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            position: 0,
            wraps: 0,
        }
    }

    /// Character under the cursor, `None` only for an empty text.
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    pub fn advance(&mut self) {
        if self.chars.is_empty() {
            return;
        }
        self.position += 1;
        if self.position == self.chars.len() {
            self.position = 0;
            self.wraps += 1;
            debug!("end of text reached, starting over");
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// How many times the text has been restarted.
    pub fn wraps(&self) -> usize {
        self.wraps
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Why a row stopped taking glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEnd {
    /// The next glyph does not fit; it starts the next row.
    Wrapped,
    /// The stop marker was reached; the layout is over.
    ForcedStop,
    /// The text has nothing that can produce a slot.
    BlankText,
}

/// Result of packing one row.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedRow {
    pub end: RowEnd,
    /// Characters placed on this row, suppressed leading blanks excluded
    pub text: String,
}

/// Fixed row parameters shared by every row of a panel.
#[derive(Debug, Clone, Copy)]
pub struct RowPacker<'a> {
    encoder: GlyphEncoder,
    resolver: RestrictionResolver<'a>,
    left_border: f64,
    right_limit: f64,
    slot_height: f64,
    stop_marker: char,
    slot_capacity: usize,
}

impl<'a> RowPacker<'a> {
    pub fn new(
        encoder: GlyphEncoder,
        resolver: RestrictionResolver<'a>,
        left_border: f64,
        right_limit: f64,
        slot_height: f64,
    ) -> Self {
        Self {
            encoder,
            resolver,
            left_border,
            right_limit,
            slot_height,
            stop_marker: morsepanel_core::DEFAULT_STOP_MARKER,
            slot_capacity: morsepanel_core::DEFAULT_SLOT_CAPACITY,
        }
    }

    pub fn with_stop_marker(mut self, stop_marker: char) -> Self {
        self.stop_marker = stop_marker;
        self
    }

    pub fn with_slot_capacity(mut self, slot_capacity: usize) -> Self {
        self.slot_capacity = slot_capacity;
        self
    }

    /// Pack the row whose band starts at `y`, appending its slots to `slots`.
    ///
    /// The character that does not fit is left under the cursor.
    pub fn pack(
        &self,
        y: f64,
        cursor: &mut TextCursor,
        slots: &mut Vec<Rect>,
    ) -> Result<PackedRow, LayoutError> {
        let timing = *self.encoder.timing();
        let mut x = self.left_border;
        let mut text = String::new();
        let mut leading_blanks = 0;

        loop {
            let Some(ch) = cursor.current() else {
                return Ok(PackedRow {
                    end: RowEnd::BlankText,
                    text,
                });
            };
            if ch == self.stop_marker {
                return Ok(PackedRow {
                    end: RowEnd::ForcedStop,
                    text,
                });
            }

            let pattern = self.encoder.code(ch)?;
            let width = self.encoder.width(pattern)?;
            x = self.resolver.clear(x, width, y, self.slot_height)?;
            if x + width > self.right_limit {
                return Ok(PackedRow {
                    end: RowEnd::Wrapped,
                    text,
                });
            }

            if ch != ' ' || x > self.left_border {
                debug!(
                    "'{}', code {} width {:.2}, at {:.2}, {:.2}",
                    ch, pattern, width, x, y
                );
                for symbol in pattern.chars() {
                    let slot_width = self.encoder.symbol_width(symbol)?;
                    if slots.len() >= self.slot_capacity {
                        return Err(LayoutError::SlotCapacityExceeded {
                            capacity: self.slot_capacity,
                        });
                    }
                    slots.push(Rect::from_corner(x, y, slot_width, self.slot_height));
                    x += slot_width + timing.symbol_gap;
                }
                x += timing.letter_gap;
                text.push(ch);
                leading_blanks = 0;
            } else {
                leading_blanks += 1;
                if leading_blanks >= cursor.len() {
                    return Ok(PackedRow {
                        end: RowEnd::BlankText,
                        text,
                    });
                }
            }

            cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morsepanel_core::{Restriction, Timing};

    fn timing() -> Timing {
        Timing {
            dot: 1.0,
            dash: 2.0,
            symbol_gap: 0.25,
            letter_gap: 0.5,
        }
    }

    fn packer(restrictions: &[Restriction], right_limit: f64) -> RowPacker<'_> {
        RowPacker::new(
            GlyphEncoder::new(timing()),
            RestrictionResolver::new(restrictions),
            1.0,
            right_limit,
            1.5,
        )
    }

    #[test]
    fn test_cursor_wraps() {
        let mut cursor = TextCursor::new("AB");
        assert_eq!(cursor.current(), Some('A'));
        cursor.advance();
        assert_eq!(cursor.current(), Some('B'));
        cursor.advance();
        assert_eq!(cursor.current(), Some('A'));
        assert_eq!(cursor.wraps(), 1);
        assert_eq!(cursor.position(), 0);

        let mut empty = TextCursor::new("");
        empty.advance();
        assert!(empty.is_empty());
        assert_eq!(empty.current(), None);
    }

    #[test]
    fn test_single_glyph_slots() {
        let mut cursor = TextCursor::new("A.");
        let mut slots = Vec::new();
        let row = packer(&[], 19.0).pack(5.0, &mut cursor, &mut slots).unwrap();

        assert_eq!(row.end, RowEnd::ForcedStop);
        assert_eq!(row.text, "A");
        assert_eq!(
            slots,
            vec![Rect::new(1.0, 5.0, 2.0, 6.5), Rect::new(2.25, 5.0, 4.25, 6.5)]
        );
        assert_eq!(cursor.current(), Some('.'));
    }

    #[test]
    fn test_wrap_leaves_character_under_cursor() {
        // E is 1.25 wide plus 0.5 letter gap: 1.0 -> 2.75 -> 4.5, limit 5.0
        let mut cursor = TextCursor::new("EEE");
        let mut slots = Vec::new();
        let row = packer(&[], 5.0).pack(0.0, &mut cursor, &mut slots).unwrap();

        assert_eq!(row.end, RowEnd::Wrapped);
        assert_eq!(row.text, "EE");
        assert_eq!(slots.len(), 2);
        assert_eq!(cursor.position(), 2);
        assert!(slots.iter().all(|s| s.ur_x <= 5.0));
    }

    #[test]
    fn test_leading_blanks_are_suppressed() {
        let mut cursor = TextCursor::new("  E E.");
        let mut slots = Vec::new();
        let row = packer(&[], 19.0).pack(0.0, &mut cursor, &mut slots).unwrap();

        assert_eq!(row.text, "E E");
        assert_eq!(slots[0].ll_x, 1.0);
        // E: 1.0 + 1.25 + 0.5 = 2.75, space: + 0.5 = 3.25
        assert_eq!(slots[1].ll_x, 3.25);
    }

    #[test]
    fn test_blank_text_ends_row() {
        let mut cursor = TextCursor::new("   ");
        let mut slots = Vec::new();
        let row = packer(&[], 19.0).pack(0.0, &mut cursor, &mut slots).unwrap();
        assert_eq!(row.end, RowEnd::BlankText);
        assert!(slots.is_empty());

        let mut cursor = TextCursor::new("");
        let row = packer(&[], 19.0).pack(0.0, &mut cursor, &mut slots).unwrap();
        assert_eq!(row.end, RowEnd::BlankText);
    }

    #[test]
    fn test_glyph_steps_over_restriction() {
        let restrictions = [Restriction::new(Rect::new(0.0, 0.0, 6.0, 10.0), false)];
        let mut cursor = TextCursor::new("T.");
        let mut slots = Vec::new();
        packer(&restrictions, 19.0)
            .pack(2.0, &mut cursor, &mut slots)
            .unwrap();
        assert_eq!(slots, vec![Rect::new(6.0, 2.0, 8.0, 3.5)]);
    }

    #[test]
    fn test_custom_stop_marker() {
        let mut cursor = TextCursor::new("E#E");
        let mut slots = Vec::new();
        let row = packer(&[], 19.0)
            .with_stop_marker('#')
            .pack(0.0, &mut cursor, &mut slots)
            .unwrap();
        assert_eq!(row.end, RowEnd::ForcedStop);
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_invalid_character_aborts() {
        let mut cursor = TextCursor::new("E,E");
        let mut slots = Vec::new();
        let err = packer(&[], 19.0)
            .pack(0.0, &mut cursor, &mut slots)
            .unwrap_err();
        assert_eq!(err, LayoutError::InvalidCharacter { ch: ',' });
    }

    #[test]
    fn test_slot_capacity() {
        let mut cursor = TextCursor::new("SOS.");
        let mut slots = Vec::new();
        let err = packer(&[], 19.0)
            .with_slot_capacity(4)
            .pack(0.0, &mut cursor, &mut slots)
            .unwrap_err();
        assert_eq!(err, LayoutError::SlotCapacityExceeded { capacity: 4 });
        assert_eq!(slots.len(), 4);
    }

    #[test]
    fn test_space_pushed_past_limit_wraps_unconsumed() {
        // after E the space sits at 2.75 inside the restriction and is
        // pushed to 25.0, past the 19.0 limit
        let restrictions = [Restriction::new(Rect::new(2.5, 0.0, 25.0, 10.0), false)];
        let mut cursor = TextCursor::new("E E.");
        let mut slots = Vec::new();
        let row = packer(&restrictions, 19.0)
            .pack(2.0, &mut cursor, &mut slots)
            .unwrap();

        assert_eq!(row.end, RowEnd::Wrapped);
        assert_eq!(row.text, "E");
        assert_eq!(slots.len(), 1);
        assert_eq!(cursor.current(), Some(' '));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_leading_space_moved_by_restriction_is_kept() {
        // the space at the left border falls inside the restriction; once
        // shifted to 6.0 it is no longer leading and costs a letter gap
        let restrictions = [Restriction::new(Rect::new(0.0, 0.0, 6.0, 10.0), false)];
        let mut cursor = TextCursor::new(" T.");
        let mut slots = Vec::new();
        let row = packer(&restrictions, 19.0)
            .pack(2.0, &mut cursor, &mut slots)
            .unwrap();

        assert_eq!(row.end, RowEnd::ForcedStop);
        assert_eq!(row.text, " T");
        assert_eq!(slots, vec![Rect::new(6.5, 2.0, 8.5, 3.5)]);
    }
}
