use bstr::ByteSlice;

/// Line separator recognised by the scanner and the body renderer.
pub const SEPARATOR: u8 = b'\n';

/// Bytes in a border row beyond the width: two corners and a terminator.
const BORDER_OVERHEAD: usize = 3;

/// Bytes in a body row beyond the width: vertical, space, space, vertical and
/// a terminator.
const BODY_OVERHEAD: usize = 5;

/// Bounding rectangle of a piece of text.
///
/// `width` is the length in bytes of the longest line. `rows` is the number
/// of body rows the box will have: one per separator, plus one for a
/// non-empty final line without a separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Length of the longest line.
    pub width: usize,
    /// Number of body rows.
    pub rows: usize,
}

impl Dimensions {
    /// Length of a single border row.
    #[must_use]
    pub fn border_len(&self) -> Option<usize> {
        self.width.checked_add(BORDER_OVERHEAD)
    }

    /// Length of a single body row.
    #[must_use]
    pub fn body_row_len(&self) -> Option<usize> {
        self.width.checked_add(BODY_OVERHEAD)
    }

    /// Exact number of bytes a box of these dimensions occupies, or `None`
    /// if it does not fit in `usize`.
    ///
    /// Two border rows plus `rows` body rows.
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        let borders = self.border_len()?.checked_mul(2)?;
        let body = self.body_row_len()?.checked_mul(self.rows)?;
        borders.checked_add(body)
    }
}

/// Measures the bounding rectangle of `text` in a single pass.
///
/// A trailing line without a separator widens the box and is counted as a
/// row, since the body renderer always closes it as one.
///
/// ```rust
/// use boxtext::{Dimensions, measure};
///
/// assert_eq!(measure(b"hi\nthere\n"), Dimensions { width: 5, rows: 2 });
/// assert_eq!(measure(b"ab"), Dimensions { width: 2, rows: 1 });
/// assert_eq!(measure(b""), Dimensions { width: 0, rows: 0 });
/// ```
#[must_use]
pub fn measure(text: &[u8]) -> Dimensions {
    let mut dims = Dimensions::default();
    let mut rest = text;

    while let Some(idx) = rest.find_byte(SEPARATOR) {
        dims.width = dims.width.max(idx);
        dims.rows += 1;
        rest = &rest[idx + 1..];
    }

    if !rest.is_empty() {
        dims.width = dims.width.max(rest.len());
        dims.rows += 1;
    }

    dims
}
