use crossterm::style::Color;

use super::encoder::encode;
use super::resolver::{Attr, Slot, Style, resolve_token};
use super::tokenizer::{MAX_SPEC_LEN, tokenize};
use crate::errors::TextAttrError;
use crate::formatter::{Formatter, RESET};

struct Case<'a> {
    spec: &'a str,
    expected: &'a str,
    label: &'a str,
}

fn test_cases(cases: &[Case]) {
    let fmt = Formatter::new();
    for (idx, case) in cases.iter().enumerate() {
        let seq = fmt.resolve(case.spec).unwrap_or_else(|e| {
            panic!("Case# {idx} - '{}' failed to resolve: {e}", case.label)
        });
        assert_eq!(
            seq, case.expected,
            "Case# {idx} - mismatch on '{}'",
            case.label
        );
    }
}

#[test]
fn named_colors() {
    test_cases(&[
        Case {
            spec: "g",
            expected: "\x1b[32m",
            label: "FG green letter",
        },
        Case {
            spec: "white",
            expected: "\x1b[37m",
            label: "FG white word",
        },
        Case {
            spec: "+g",
            expected: "\x1b[92m",
            label: "FG bright green",
        },
        Case {
            spec: "+white",
            expected: "\x1b[97m",
            label: "FG bright white word",
        },
        Case {
            spec: "/b",
            expected: "\x1b[44m",
            label: "BG blue",
        },
        Case {
            spec: "/+r",
            expected: "\x1b[101m",
            label: "BG bright red",
        },
        Case {
            spec: "_",
            expected: "\x1b[39m",
            label: "FG default",
        },
        Case {
            spec: "/default",
            expected: "\x1b[49m",
            label: "BG default",
        },
        Case {
            spec: "w /b",
            expected: "\x1b[37;44m",
            label: "white on blue",
        },
    ]);
}

#[test]
fn fixed_and_extra_named_colors() {
    test_cases(&[
        Case {
            spec: "d",
            expected: "\x1b[90m",
            label: "FG dark gray letter",
        },
        Case {
            spec: "light-gray",
            expected: "\x1b[37m",
            label: "FG light gray word",
        },
        Case {
            spec: "n",
            expected: "\x1b[33m",
            label: "FG brown letter",
        },
        Case {
            spec: "r!",
            expected: "\x1b[38;5;124m",
            label: "fixed red pins into the cube",
        },
        Case {
            spec: "+g!",
            expected: "\x1b[38;5;83m",
            label: "fixed bright green",
        },
        Case {
            spec: "/w!",
            expected: "\x1b[48;5;145m",
            label: "BG fixed white",
        },
        Case {
            spec: "yellow!",
            expected: "\x1b[38;5;130m",
            label: "fixed color, word form",
        },
        Case {
            spec: "default!",
            expected: "\x1b[39m",
            label: "default has no fixed form",
        },
    ]);
}

#[test]
fn style_attributes() {
    test_cases(&[
        Case {
            spec: "o",
            expected: "\x1b[1m",
            label: "bold letter",
        },
        Case {
            spec: "bold",
            expected: "\x1b[1m",
            label: "bold word",
        },
        Case {
            spec: "t",
            expected: "\x1b[2m",
            label: "dim letter",
        },
        Case {
            spec: "faint",
            expected: "\x1b[2m",
            label: "dim alias",
        },
        Case {
            spec: "i u",
            expected: "\x1b[3;4m",
            label: "italic + underline",
        },
        Case {
            spec: "x",
            expected: "\x1b[5m",
            label: "blink letter",
        },
        Case {
            spec: "inverse",
            expected: "\x1b[7m",
            label: "reverse alias",
        },
        Case {
            spec: "conceal",
            expected: "\x1b[8m",
            label: "hidden alias",
        },
        Case {
            spec: "z",
            expected: "\x1b[9m",
            label: "strikethrough letter",
        },
        Case {
            spec: "e",
            expected: "\x1b[53m",
            label: "overline letter",
        },
        Case {
            spec: "-u",
            expected: "\x1b[24m",
            label: "cancel underline",
        },
        Case {
            spec: "not-bold",
            expected: "\x1b[21m",
            label: "cancel bold word form",
        },
        Case {
            spec: "-e",
            expected: "\x1b[55m",
            label: "cancel overline",
        },
    ]);
}

#[test]
fn numeric_color_forms() {
    test_cases(&[
        Case {
            spec: "^000",
            expected: "\x1b[38;5;16m",
            label: "cube black",
        },
        Case {
            spec: "^510",
            expected: "\x1b[38;5;202m",
            label: "cube orange",
        },
        Case {
            spec: "^555",
            expected: "\x1b[38;5;231m",
            label: "cube white",
        },
        Case {
            spec: "/^005",
            expected: "\x1b[48;5;21m",
            label: "BG cube blue",
        },
        Case {
            spec: "%7",
            expected: "\x1b[38;5;7m",
            label: "palette single digit",
        },
        Case {
            spec: "%255",
            expected: "\x1b[38;5;255m",
            label: "palette top index",
        },
        Case {
            spec: "/%200",
            expected: "\x1b[48;5;200m",
            label: "BG palette",
        },
        Case {
            spec: "#ff8040",
            expected: "\x1b[38;2;255;128;64m",
            label: "truecolor orange",
        },
        Case {
            spec: "/#0a141e",
            expected: "\x1b[48;2;10;20;30m",
            label: "BG truecolor dark",
        },
        Case {
            spec: "a1",
            expected: "\x1b[38;5;232m",
            label: "grayscale bottom",
        },
        Case {
            spec: "gray24",
            expected: "\x1b[38;5;255m",
            label: "grayscale top, word form",
        },
        Case {
            spec: "/a12",
            expected: "\x1b[48;5;243m",
            label: "BG grayscale mid",
        },
    ]);
}

#[test]
fn reset_combinations() {
    test_cases(&[
        Case {
            spec: "f",
            expected: "\x1b[0m",
            label: "reset shorthand",
        },
        Case {
            spec: "off",
            expected: "\x1b[0m",
            label: "reset word",
        },
        Case {
            spec: "f g",
            expected: "\x1b[0;32m",
            label: "reset front-loaded before color",
        },
    ]);
}

#[test]
fn parameter_group_count_matches_token_count() {
    let fmt = Formatter::new();
    for spec in ["o i u g /b", "g g g", "v h z t e x o i u w /m"] {
        let token_count = spec.split_whitespace().count();
        let seq = fmt.resolve(spec).unwrap();
        let inner = seq
            .strip_prefix("\x1b[")
            .and_then(|s| s.strip_suffix('m'))
            .unwrap();
        assert_eq!(
            inner.split(';').count(),
            token_count,
            "group count mismatch for '{spec}'"
        );
    }
}

#[test]
fn white_on_blue_round_trip() {
    let fmt = Formatter::new();
    let on = fmt.resolve("w /b").unwrap();
    let off = fmt.resolve("f").unwrap();
    let rendered = format!("{on}text{off}");
    assert_eq!(rendered, "\x1b[37;44mtext\x1b[0m");
    assert_eq!(off, RESET);
}

#[test]
fn error_classification() {
    let fmt = Formatter::new();
    assert!(matches!(fmt.resolve(""), Err(TextAttrError::EmptySpec)));
    assert!(matches!(fmt.resolve(" \t "), Err(TextAttrError::EmptySpec)));
    assert!(matches!(
        fmt.resolve("q"),
        Err(TextAttrError::UnknownToken { .. })
    ));
    assert!(matches!(
        fmt.resolve("+q"),
        Err(TextAttrError::UnknownToken { .. })
    ));
    // `d`, `l`, and `n` name shades directly and take no `+`
    assert!(matches!(
        fmt.resolve("+d"),
        Err(TextAttrError::UnknownToken { .. })
    ));
    assert!(matches!(
        fmt.resolve("/q"),
        Err(TextAttrError::UnknownToken { .. })
    ));
    assert!(matches!(
        fmt.resolve("not-sideways"),
        Err(TextAttrError::UnknownToken { .. })
    ));
    assert!(matches!(
        fmt.resolve("^610"),
        Err(TextAttrError::OutOfRange { .. })
    ));
    assert!(matches!(
        fmt.resolve("^165"),
        Err(TextAttrError::OutOfRange { .. })
    ));
    assert!(matches!(
        fmt.resolve("^51"),
        Err(TextAttrError::InvalidNumericForm { .. })
    ));
    assert!(matches!(
        fmt.resolve("^5100"),
        Err(TextAttrError::InvalidNumericForm { .. })
    ));
    assert!(matches!(
        fmt.resolve("%256"),
        Err(TextAttrError::OutOfRange { .. })
    ));
    assert!(matches!(
        fmt.resolve("%1000"),
        Err(TextAttrError::OutOfRange { .. })
    ));
    assert!(matches!(
        fmt.resolve("%red"),
        Err(TextAttrError::InvalidNumericForm { .. })
    ));
    assert!(matches!(
        fmt.resolve("#ff80"),
        Err(TextAttrError::InvalidNumericForm { .. })
    ));
    assert!(matches!(
        fmt.resolve("#gg0000"),
        Err(TextAttrError::InvalidNumericForm { .. })
    ));
    assert!(matches!(
        fmt.resolve("a0"),
        Err(TextAttrError::OutOfRange { .. })
    ));
    assert!(matches!(
        fmt.resolve("a25"),
        Err(TextAttrError::OutOfRange { .. })
    ));
}

#[test]
fn first_error_wins_and_names_the_token() {
    let err = Formatter::new().resolve("g qx %999").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("qx"), "message should quote the token: {msg}");
    assert!(matches!(err, TextAttrError::UnknownToken { token } if token == "qx"));
}

#[test]
fn spec_length_bounds() {
    let fmt = Formatter::new();

    // One byte over the limit fails regardless of content
    let over = "g".repeat(MAX_SPEC_LEN + 1);
    assert!(matches!(
        fmt.resolve(&over),
        Err(TextAttrError::SpecTooLong { .. })
    ));

    // At the limit the spec is still tokenized normally
    let padded = format!("g{}", " ".repeat(MAX_SPEC_LEN - 1));
    assert_eq!(fmt.resolve(&padded).unwrap(), "\x1b[32m");

    // Token-count and token-length overflows are spec-shape errors too
    assert!(matches!(
        fmt.resolve("g g g g g g g g g g g g"),
        Err(TextAttrError::SpecTooLong { .. })
    ));
    assert!(matches!(
        fmt.resolve("ggggggggggggggggggg"),
        Err(TextAttrError::SpecTooLong { .. })
    ));
}

#[test]
fn too_long_error_is_bounded() {
    let fmt = Formatter::new();

    let huge = "g".repeat(MAX_SPEC_LEN * 4);
    let msg = fmt.resolve(&huge).unwrap_err().to_string();
    assert!(
        msg.len() < 160,
        "error message should not echo the full input ({} bytes): {msg}",
        msg.len()
    );
    assert!(msg.ends_with("…’"), "truncated quote should end in an ellipsis: {msg}");

    // Truncation lands on a char boundary even for multibyte input
    let multibyte = "€".repeat(MAX_SPEC_LEN);
    assert!(matches!(
        fmt.resolve(&multibyte),
        Err(TextAttrError::SpecTooLong { .. })
    ));
}

#[test]
fn tokenizer_splits_on_whitespace_runs() {
    assert_eq!(tokenize("w /b").unwrap(), vec!["w", "/b"]);
    assert_eq!(tokenize("  +g\t o \n").unwrap(), vec!["+g", "o"]);
    assert!(matches!(tokenize("   "), Err(TextAttrError::EmptySpec)));
}

#[test]
fn tokens_resolve_to_expected_attrs() {
    // `b` is a color, never blink
    assert_eq!(
        resolve_token("b").unwrap(),
        Attr::Color {
            slot: Slot::Foreground,
            color: Color::DarkBlue,
        }
    );
    assert_eq!(
        resolve_token("x").unwrap(),
        Attr::Style {
            style: Style::Blink,
            cancel: false,
        }
    );
    assert_eq!(
        resolve_token("/+c").unwrap(),
        Attr::Color {
            slot: Slot::Background,
            color: Color::Cyan,
        }
    );
    assert_eq!(
        resolve_token("-z").unwrap(),
        Attr::Style {
            style: Style::Strikethrough,
            cancel: true,
        }
    );
    assert_eq!(resolve_token("off").unwrap(), Attr::ResetAll);
}

#[test]
fn encoder_edge_cases() {
    assert_eq!(encode(&[]), "");
    assert_eq!(encode(&[Attr::ResetAll]), "\x1b[0m");
    assert_eq!(
        encode(&[
            Attr::Color {
                slot: Slot::Background,
                color: Color::Rgb { r: 1, g: 2, b: 3 },
            },
            Attr::Style {
                style: Style::Bold,
                cancel: false,
            },
        ]),
        "\x1b[48;2;1;2;3;1m"
    );
}
