//! Quantity highlighting for ingredient lines
//!
//! Splits an ingredient such as `"1/2 cup maple syrup"` into alternating
//! quantity and text runs so front ends can colour the quantities.

use crate::constants::ingredient::NUMERIC_HIGHLIGHT_CHARS;

/// One run of an ingredient line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    /// Whether the run is part of a quantity
    pub numeric: bool,
}

/// Whether `c` belongs to a quantity run
pub fn is_quantity_char(c: char) -> bool {
    c.is_numeric() || NUMERIC_HIGHLIGHT_CHARS.contains(&c)
}

/// Split `text` into maximal quantity / non-quantity runs
///
/// The segments concatenate back to `text`.
pub fn segment_ingredient(text: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for c in text.chars() {
        let numeric = is_quantity_char(c);
        match segments.last_mut() {
            Some(current) if current.numeric == numeric => current.text.push(c),
            _ => segments.push(Segment {
                text: c.to_string(),
                numeric,
            }),
        }
    }

    segments
}
