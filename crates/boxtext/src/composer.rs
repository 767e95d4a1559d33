use alloc::vec::Vec;
use core::fmt;

use bstr::{BStr, ByteSlice};

use crate::{
    cursor::OutputCursor,
    dimensions::{Dimensions, measure},
    error::BoxError,
    render::{render_body, render_horizontal_border},
    style::BoxStyle,
};

/// Draws boxes with a fixed [`BoxStyle`].
///
/// # Examples
///
/// ```rust
/// use boxtext::{BoxComposer, BoxStyle};
///
/// let composer = BoxComposer::new(BoxStyle::ASCII);
/// let boxed = composer.compose(b"hi\nthere\n").unwrap();
/// assert_eq!(
///     boxed.as_bytes(),
///     b"+-----+\n| hi    |\n| there |\n+-----+\n"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoxComposer {
    style: BoxStyle,
}

impl BoxComposer {
    /// Creates a composer drawing with `style`.
    #[must_use]
    pub const fn new(style: BoxStyle) -> Self {
        Self { style }
    }

    /// Style this composer draws with.
    #[must_use]
    pub fn style(&self) -> &BoxStyle {
        &self.style
    }

    /// Boxes `text`: top border, one body row per line, bottom border.
    ///
    /// The output buffer is reserved once, at its exact final size, before
    /// anything is rendered.
    ///
    /// # Errors
    ///
    /// Fails only if the output cannot be sized or reserved; see
    /// [`BoxError::is_allocation`].
    pub fn compose(&self, text: &[u8]) -> Result<BoxedText, BoxError> {
        let dimensions = measure(text);
        let capacity = dimensions
            .capacity()
            .ok_or(BoxError::CapacityOverflow {
                width: dimensions.width,
                rows: dimensions.rows,
            })?;

        let mut out = OutputCursor::with_capacity(capacity)?;
        render_horizontal_border(dimensions.width, self.style, &mut out)?;
        render_body(dimensions.width, text, self.style, &mut out)?;
        render_horizontal_border(dimensions.width, self.style, &mut out)?;
        debug_assert_eq!(out.remaining(), 0, "capacity formula out of sync");

        Ok(BoxedText {
            bytes: out.into_vec(),
            dimensions,
        })
    }

    /// Boxes `header` immediately followed by `text`.
    ///
    /// No separator is inserted between the two; end `header` with `\n` to
    /// give it rows of its own.
    ///
    /// # Errors
    ///
    /// Same as [`BoxComposer::compose`].
    pub fn compose_with_header(
        &self,
        header: &[u8],
        text: &[u8],
    ) -> Result<BoxedText, BoxError> {
        let len = header
            .len()
            .checked_add(text.len())
            .ok_or(BoxError::CapacityOverflow {
                width: usize::MAX,
                rows: 0,
            })?;

        let mut joined = Vec::new();
        joined
            .try_reserve_exact(len)
            .map_err(|source| BoxError::AllocationFailure {
                capacity: len,
                source,
            })?;
        joined.extend_from_slice(header);
        joined.extend_from_slice(text);

        self.compose(&joined)
    }
}

/// Boxes `text` with [`BoxStyle::ASCII`].
///
/// ```rust
/// assert_eq!(boxtext::box_text(b"ab").unwrap().as_bytes(), b"+--+\n| ab |\n+--+\n");
/// assert_eq!(boxtext::box_text(b"").unwrap().as_bytes(), b"++\n++\n");
/// ```
///
/// # Errors
///
/// Same as [`BoxComposer::compose`].
pub fn box_text(text: &[u8]) -> Result<BoxedText, BoxError> {
    BoxComposer::default().compose(text)
}

/// A rendered box together with the dimensions it was drawn from.
#[derive(Clone, PartialEq, Eq)]
pub struct BoxedText {
    bytes: Vec<u8>,
    dimensions: Dimensions,
}

impl BoxedText {
    /// The rendered bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The rendered bytes as a byte string, for lossy display.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        self.bytes.as_bstr()
    }

    /// Number of rendered bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: even empty input renders two border rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Dimensions of the boxed input.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Consumes the box and returns the rendered bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for BoxedText {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<BoxedText> for Vec<u8> {
    fn from(boxed: BoxedText) -> Self {
        boxed.bytes
    }
}

impl fmt::Display for BoxedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

impl fmt::Debug for BoxedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedText")
            .field("bytes", &self.as_bstr())
            .field("dimensions", &self.dimensions)
            .finish()
    }
}
