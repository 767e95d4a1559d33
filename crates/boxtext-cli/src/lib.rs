//! The `boxtext` command: reads a file, frames its content with
//! [`boxtext::BoxComposer`] and writes the box to another file.

pub mod cli;
pub mod error;
pub mod files;
pub mod telemetry;

use boxtext::{BoxComposer, Dimensions};
use tracing::{debug, info};

pub use cli::Cli;
pub use error::CliError;

/// What a successful run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Dimensions of the boxed text, prepended header included.
    pub dimensions: Dimensions,
    /// Bytes written to the output file.
    pub bytes_written: usize,
}

/// Boxes the input file named by `cli` into its output file.
///
/// Both paths are checked before anything is rendered. The input is read in
/// full first, so input and output may be the same file.
///
/// # Errors
///
/// See [`CliError`] for the failure kinds and their exit codes.
pub fn run(cli: &Cli) -> Result<Summary, CliError> {
    let input = files::read_input(&cli.input)?;
    files::validate_output(&cli.output)?;

    let composer = BoxComposer::new(cli.style());
    let boxed = match &cli.prepend {
        Some(header) => composer.compose_with_header(header.as_bytes(), &input)?,
        None => composer.compose(&input)?,
    };
    let dimensions = boxed.dimensions();
    debug!(
        width = dimensions.width,
        rows = dimensions.rows,
        style = ?composer.style(),
        "measured input"
    );

    files::write_output(&cli.output, boxed.as_bytes())?;
    info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        bytes = boxed.len(),
        "wrote boxed text"
    );

    Ok(Summary {
        dimensions,
        bytes_written: boxed.len(),
    })
}
