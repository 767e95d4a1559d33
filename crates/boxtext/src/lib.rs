//! Frames arbitrary multi-line text in an ASCII box.
//!
//! The input is measured once to find its widest line, then rendered into an
//! output buffer reserved at its exact final size: a border row, one padded
//! body row per line, and a second border row.
//!
//! ```rust
//! let boxed = boxtext::box_text(b"hi\nthere\n").unwrap();
//! assert_eq!(
//!     boxed.to_string(),
//!     "+-----+\n| hi    |\n| there |\n+-----+\n"
//! );
//! ```
//!
//! Widths are byte counts. Multi-byte UTF-8 sequences take one column per
//! byte, so non-ASCII text is boxed correctly but may look misaligned.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod composer;
mod cursor;
mod dimensions;
mod error;
mod render;
mod style;


pub use composer::{BoxComposer, BoxedText, box_text};
pub use cursor::OutputCursor;
pub use dimensions::{Dimensions, SEPARATOR, measure};
pub use error::BoxError;
pub use render::{render_body, render_horizontal_border};
pub use style::BoxStyle;
