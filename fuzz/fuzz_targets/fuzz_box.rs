#![no_main]
use arbitrary::Arbitrary;
use boxtext::{BoxComposer, BoxStyle, SEPARATOR, measure};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    corner: u8,
    horizontal: u8,
    vertical: u8,
    header: Option<&'a [u8]>,
    text: &'a [u8],
}

/// Separators inside the style would split rows; map them to something else.
fn symbol(byte: u8) -> u8 {
    if byte == SEPARATOR { b'#' } else { byte }
}

fn check(input: &Input<'_>) {
    let style = BoxStyle {
        corner: symbol(input.corner),
        horizontal: symbol(input.horizontal),
        vertical: symbol(input.vertical),
    };
    let composer = BoxComposer::new(style);

    let (boxed, joined) = match input.header {
        Some(header) => {
            let joined = [header, input.text].concat();
            let boxed = composer
                .compose_with_header(header, input.text)
                .expect("in-memory boxing must not fail");
            (boxed, joined)
        }
        None => (
            composer.compose(input.text).expect("in-memory boxing must not fail"),
            input.text.to_vec(),
        ),
    };

    let dims = boxed.dimensions();
    assert_eq!(dims, measure(&joined));
    assert_eq!(Some(boxed.len()), dims.capacity(), "output must fill its capacity exactly");

    let rows: Vec<&[u8]> = boxed.as_bytes().split_inclusive(|b| *b == SEPARATOR).collect();
    assert_eq!(rows.len(), dims.rows + 2);

    let border = rows[0];
    assert_eq!(border, rows[rows.len() - 1]);
    assert_eq!(border.len(), dims.width + 3);
    assert_eq!(border[0], style.corner);
    assert!(border[1..=dims.width].iter().all(|b| *b == style.horizontal));

    for row in &rows[1..rows.len() - 1] {
        assert_eq!(row.len(), dims.width + 5);
        assert_eq!(row[0], style.vertical);
        assert_eq!(row[row.len() - 2], style.vertical);
        assert_eq!(row[row.len() - 1], SEPARATOR);
    }
}

fuzz_target!(|input: Input<'_>| check(&input));
