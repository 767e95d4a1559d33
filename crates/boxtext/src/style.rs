/// The three symbols a box is drawn with.
///
/// Every symbol is a single byte; width is measured in bytes, so multi-byte
/// symbols would break the alignment of the frame.
///
/// # Examples
///
/// ```rust
/// use boxtext::{BoxComposer, BoxStyle};
///
/// let style = BoxStyle {
///     corner: b'#',
///     ..BoxStyle::ASCII
/// };
/// let boxed = BoxComposer::new(style).compose(b"ok").unwrap();
/// assert_eq!(boxed.as_bytes(), b"#--#\n| ok |\n#--#\n");
/// ```
///
/// # Default
///
/// [`BoxStyle::ASCII`]: `+` corners, `-` horizontal rules, `|` vertical rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoxStyle {
    /// Symbol placed at both ends of each border row.
    pub corner: u8,
    /// Symbol repeated across the top and bottom borders.
    pub horizontal: u8,
    /// Symbol opening and closing each body row.
    pub vertical: u8,
}

impl BoxStyle {
    /// Plain ASCII frame: `+`, `-` and `|`.
    pub const ASCII: BoxStyle = BoxStyle {
        corner: b'+',
        horizontal: b'-',
        vertical: b'|',
    };
}

impl Default for BoxStyle {
    fn default() -> Self {
        BoxStyle::ASCII
    }
}
