//! Row renderers. Both append to an [`OutputCursor`] sized by the composer.

use crate::{
    cursor::OutputCursor,
    dimensions::SEPARATOR,
    error::BoxError,
    style::BoxStyle,
};

const PAD: u8 = b' ';

/// Where the body renderer is relative to the current row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// No row is open; the next byte starts one.
    AtLineStart,
    /// A row is open and `column` content bytes have been written to it.
    InLine,
}

/// Appends one border row: a corner, `width` horizontal symbols, a corner and
/// a line terminator.
///
/// # Errors
///
/// Returns [`BoxError::CapacityExceeded`] if the row does not fit in `out`.
pub fn render_horizontal_border(
    width: usize,
    style: BoxStyle,
    out: &mut OutputCursor,
) -> Result<(), BoxError> {
    out.push(style.corner)?;
    out.fill(style.horizontal, width)?;
    out.push(style.corner)?;
    out.push(SEPARATOR)
}

/// Appends one body row per line of `text`, each padded to `width`.
///
/// A final line without a separator is still closed as a full row. Empty
/// input appends nothing. Lines longer than `width` are written unpadded;
/// callers pass the width from [`measure`](crate::measure) so that never
/// happens.
///
/// # Errors
///
/// Returns [`BoxError::CapacityExceeded`] if the rows do not fit in `out`.
pub fn render_body(
    width: usize,
    text: &[u8],
    style: BoxStyle,
    out: &mut OutputCursor,
) -> Result<(), BoxError> {
    let mut state = LineState::AtLineStart;
    let mut column = 0;

    for &byte in text {
        if state == LineState::AtLineStart {
            out.push(style.vertical)?;
            out.push(PAD)?;
            state = LineState::InLine;
        }

        if byte == SEPARATOR {
            close_row(width, column, style, out)?;
            column = 0;
            state = LineState::AtLineStart;
        } else {
            out.push(byte)?;
            column += 1;
        }
    }

    if state == LineState::InLine {
        close_row(width, column, style, out)?;
    }

    Ok(())
}

fn close_row(
    width: usize,
    column: usize,
    style: BoxStyle,
    out: &mut OutputCursor,
) -> Result<(), BoxError> {
    out.fill(PAD, width.saturating_sub(column) + 1)?;
    out.push(style.vertical)?;
    out.push(SEPARATOR)
}
