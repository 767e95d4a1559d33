#![allow(missing_docs)]
#![allow(dead_code)]

/// A source file header of the kind the annotator is usually pointed at.
pub const FILE_HEADER: &str = "\
file_annotator.c
Annotates files with their author and dates.

author: D. Miziraj
created: 2025-07-26
";

/// The same header without a trailing newline, as a user might paste it.
pub const FILE_HEADER_UNTERMINATED: &str = "\
file_annotator.c
author: D. Miziraj";

/// Renders a box for snapshotting. Trailing newlines are dropped so the
/// inline snapshots stay readable.
pub fn render(text: &str) -> String {
    boxtext::box_text(text.as_bytes())
        .expect("box")
        .to_string()
        .trim_end_matches('\n')
        .to_owned()
}
