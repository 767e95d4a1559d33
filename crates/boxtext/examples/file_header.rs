//! Stamps a boxed header onto a source snippet, the way the `boxtext`
//! command does with `--prepend`.
//!
//! The header and the file content are boxed together, so the frame grows to
//! whichever is wider. A second, heavier style frames a short notice on its
//! own.
//!
//! Run with
//!
//! ```bash
//! cargo run -p boxtext --example file_header
//! ```

use boxtext::{BoxComposer, BoxStyle};

fn main() {
    let source = "\
fn main() {
    println!(\"hello\");
}
";

    let header = "main.rs\nauthor: someone\n\n";

    let composer = BoxComposer::default();
    let boxed = composer
        .compose_with_header(header.as_bytes(), source.as_bytes())
        .expect("boxing never fails for in-memory text");

    let dims = boxed.dimensions();
    println!("{boxed}");
    println!("width {}, {} rows, {} bytes", dims.width, dims.rows, boxed.len());

    let notice = BoxComposer::new(BoxStyle {
        corner: b'#',
        horizontal: b'=',
        vertical: b'#',
    })
    .compose(b"DO NOT EDIT")
    .expect("boxing never fails for in-memory text");
    print!("{notice}");
}
