use thiserror::Error;

use crate::element::element_model::Rectangle;

/// The bounds string did not yield four integer coordinates.
///
/// Per-entry condition: the assembler drops the entry and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unparseable bounds string: {raw:?}")]
pub struct BoundsUnparseable {
    pub raw: String,
}

/// Parse a UI-Automator bounds string such as `[0,0][1080,210]`.
///
/// `[` is dropped and `]` acts as a separator, then the string is split on
/// commas. Empty tokens are skipped and every remaining token must be an
/// integer. The first four integers become `x1, y1, x2, y2`; any extra ones
/// are ignored. Coordinates outside the `i64` range count as unparseable,
/// so such an entry is dropped.
pub fn parse_bounds(raw: &str) -> Result<Rectangle, BoundsUnparseable> {
    let unparseable = || BoundsUnparseable {
        raw: raw.to_string(),
    };

    let cleaned = raw.replace('[', "").replace(']', ",");

    let mut coords = Vec::with_capacity(4);
    for token in cleaned.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = token.parse::<i64>().map_err(|_| unparseable())?;
        coords.push(value);
    }

    match coords.as_slice() {
        [x1, y1, x2, y2, ..] => Ok(Rectangle::new(*x1, *y1, *x2, *y2)),
        _ => Err(unparseable()),
    }
}

/// Render a rectangle back into `[x1,y1][x2,y2]` form.
pub fn format_bounds(rect: &Rectangle) -> String {
    format!("[{},{}][{},{}]", rect.x1, rect.y1, rect.x2, rect.y2)
}
