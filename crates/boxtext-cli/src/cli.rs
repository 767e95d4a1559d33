use std::path::PathBuf;

use boxtext::BoxStyle;
use clap::{ArgAction, Parser};

const LONG_ABOUT: &str = r"Wraps the content of a text file in an ASCII box and writes the result
to another file.

The box is as wide as the longest line of the input. Every line becomes one
row, padded with spaces and framed by the vertical symbol; a top and bottom
border close the frame. Widths are counted in bytes.

EXAMPLES:
    boxtext -i notes.txt -o notes.boxed.txt
    boxtext -i main.c -o main.c --prepend $'main.c\nauthor: me\n\n'
    boxtext -i notes.txt -o out.txt --corner '*' --horizontal '=' --vertical '!'";

#[derive(Debug, Parser)]
#[command(name = "boxtext")]
#[command(author, version)]
#[command(about = "Frame the content of a text file in an ASCII box")]
#[command(long_about = LONG_ABOUT)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// File to read the text from
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// File to write the boxed text to (created or truncated)
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Text placed before the input content, inside the same box
    #[arg(short, long, value_name = "TEXT")]
    pub prepend: Option<String>,

    /// Symbol drawn at the four corners
    #[arg(long, value_name = "CHAR", env = "BOXTEXT_CORNER", value_parser = parse_symbol)]
    pub corner: Option<u8>,

    /// Symbol for the top and bottom borders
    #[arg(long, value_name = "CHAR", env = "BOXTEXT_HORIZONTAL", value_parser = parse_symbol)]
    pub horizontal: Option<u8>,

    /// Symbol for the left and right borders
    #[arg(long, value_name = "CHAR", env = "BOXTEXT_VERTICAL", value_parser = parse_symbol)]
    pub vertical: Option<u8>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print help
    #[arg(short = 'h', long = "help", short_alias = '?', action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl Cli {
    /// The box style, with unset symbols taken from [`BoxStyle::ASCII`].
    #[must_use]
    pub fn style(&self) -> BoxStyle {
        let ascii = BoxStyle::ASCII;
        BoxStyle {
            corner: self.corner.unwrap_or(ascii.corner),
            horizontal: self.horizontal.unwrap_or(ascii.horizontal),
            vertical: self.vertical.unwrap_or(ascii.vertical),
        }
    }

    /// Default log filter for the requested verbosity.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Accepts exactly one printable ASCII character, space included.
///
/// # Errors
///
/// Returns a message for clap to report when `value` is empty, longer than
/// one byte, or not printable ASCII.
pub fn parse_symbol(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [byte] if byte.is_ascii_graphic() || *byte == b' ' => Ok(*byte),
        _ => Err(format!(
            "expected a single printable ASCII character, got {value:?}"
        )),
    }
}
