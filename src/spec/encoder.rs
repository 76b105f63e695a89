use std::fmt::Write;

use crossterm::style::Color;

use super::resolver::{Attr, Slot};

/// Joins the SGR parameter groups for `attrs` into one CSI `…m` sequence.
///
/// An empty slice encodes to an empty string rather than a bare `ESC[m`; only
/// the disabled short-circuit can produce one.
pub(crate) fn encode(attrs: &[Attr]) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let mut seq = String::with_capacity(4 + attrs.len() * 4);
    seq.push_str("\x1b[");
    for (i, attr) in attrs.iter().enumerate() {
        if i > 0 {
            seq.push(';');
        }
        push_params(*attr, &mut seq);
    }
    seq.push('m');
    seq
}

fn push_params(attr: Attr, out: &mut String) {
    // write! to a String cannot fail
    let _ = match attr {
        Attr::ResetAll => write!(out, "0"),
        Attr::Style { style, cancel } => {
            let code = if cancel { style.cancel_sgr() } else { style.sgr() };
            write!(out, "{code}")
        }
        Attr::Color { slot, color } => color_params(slot, color, out),
    };
}

fn color_params(slot: Slot, color: Color, out: &mut String) -> std::fmt::Result {
    let bg = slot == Slot::Background;
    match color {
        Color::AnsiValue(n) => write!(out, "{};5;{n}", if bg { 48 } else { 38 }),
        Color::Rgb { r, g, b } => {
            write!(out, "{};2;{r};{g};{b}", if bg { 48 } else { 38 })
        }
        named => write!(out, "{}", named_sgr(named) + if bg { 10 } else { 0 }),
    }
}

/// Foreground SGR codes for the named colors: 30-37 for the normal variants,
/// 90-97 for bright, 39 for the terminal default. Background adds 10.
const fn named_sgr(color: Color) -> u8 {
    match color {
        Color::Black => 30,
        Color::DarkRed => 31,
        Color::DarkGreen => 32,
        Color::DarkYellow => 33,
        Color::DarkBlue => 34,
        Color::DarkMagenta => 35,
        Color::DarkCyan => 36,
        Color::Grey => 37,
        Color::DarkGrey => 90,
        Color::Red => 91,
        Color::Green => 92,
        Color::Yellow => 93,
        Color::Blue => 94,
        Color::Magenta => 95,
        Color::Cyan => 96,
        Color::White => 97,
        // Indexed and Rgb never reach here; Reset is the terminal default
        _ => 39,
    }
}
