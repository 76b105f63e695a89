use crossterm::style::Color;

use crate::errors::TextAttrError;

/// Which half of the color pair a token applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Foreground,
    Background,
}

/// Text attributes. Cancel forms use the 2x SGR range (21-29), except
/// overline which cancels with 55.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Style {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Overline,
    Reverse,
    Hidden,
    Strikethrough,
}

impl Style {
    pub(crate) const fn sgr(self) -> u8 {
        match self {
            Self::Bold => 1,
            Self::Dim => 2,
            Self::Italic => 3,
            Self::Underline => 4,
            Self::Blink => 5,
            Self::Reverse => 7,
            Self::Hidden => 8,
            Self::Strikethrough => 9,
            Self::Overline => 53,
        }
    }

    pub(crate) const fn cancel_sgr(self) -> u8 {
        match self {
            Self::Overline => 55,
            other => other.sgr() + 20,
        }
    }
}

/// One resolved semantic unit of a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Attr {
    /// `f` / `off` — SGR 0, everything back to the terminal default.
    ResetAll,
    Color { slot: Slot, color: Color },
    Style { style: Style, cancel: bool },
}

/// Named colors: letter, word, normal variant, bright (`+`) variant where one
/// exists. The gray/brown names are already in the bright (or dim) half of the
/// palette and take no `+`.
const COLOR_NAMES: [(&str, &str, Color, Option<Color>); 12] = [
    ("k", "black", Color::Black, Some(Color::DarkGrey)),
    ("r", "red", Color::DarkRed, Some(Color::Red)),
    ("g", "green", Color::DarkGreen, Some(Color::Green)),
    ("y", "yellow", Color::DarkYellow, Some(Color::Yellow)),
    ("b", "blue", Color::DarkBlue, Some(Color::Blue)),
    ("m", "magenta", Color::DarkMagenta, Some(Color::Magenta)),
    ("c", "cyan", Color::DarkCyan, Some(Color::Cyan)),
    ("w", "white", Color::Grey, Some(Color::White)),
    ("d", "dark-gray", Color::DarkGrey, None),
    ("l", "light-gray", Color::Grey, None),
    ("n", "brown", Color::DarkYellow, None),
    ("_", "default", Color::Reset, None),
];

/// Style keywords: letter, accepted words, style.
const STYLE_NAMES: [(&str, &[&str], Style); 9] = [
    ("o", &["bold"], Style::Bold),
    ("t", &["dim", "faint"], Style::Dim),
    ("i", &["italic"], Style::Italic),
    ("u", &["underline", "underlined"], Style::Underline),
    ("x", &["blink", "blinking"], Style::Blink),
    ("e", &["overline", "overlined"], Style::Overline),
    ("v", &["reverse", "reversed", "inverse"], Style::Reverse),
    ("h", &["hidden", "conceal"], Style::Hidden),
    ("z", &["strikethrough", "struckout"], Style::Strikethrough),
];

/// Resolves one raw token to an [`Attr`].
///
/// Colors are tried before attributes, so `b` is always blue and never blink.
/// Error messages quote the raw token as the caller wrote it, modifiers
/// included.
pub(crate) fn resolve_token(raw: &str) -> Result<Attr, TextAttrError> {
    if raw == "f" || raw == "off" {
        return Ok(Attr::ResetAll);
    }
    if let Some(rest) = raw.strip_prefix('/') {
        let color = try_color(raw, rest)?.ok_or_else(|| unknown(raw))?;
        return Ok(Attr::Color {
            slot: Slot::Background,
            color,
        });
    }
    if let Some(rest) = raw
        .strip_prefix("not-")
        .or_else(|| raw.strip_prefix('-'))
    {
        let style = style_by_name(rest).ok_or_else(|| unknown(raw))?;
        return Ok(Attr::Style {
            style,
            cancel: true,
        });
    }
    if let Some(color) = try_color(raw, raw)? {
        return Ok(Attr::Color {
            slot: Slot::Foreground,
            color,
        });
    }
    if let Some(style) = style_by_name(raw) {
        return Ok(Attr::Style {
            style,
            cancel: false,
        });
    }
    Err(unknown(raw))
}

fn unknown(raw: &str) -> TextAttrError {
    TextAttrError::UnknownToken {
        token: raw.to_string(),
    }
}

/// Returns `Ok(None)` when `spec` is not color-shaped at all. Numeric forms
/// that are present but malformed report their own error instead of falling
/// through to `UnknownToken`.
fn try_color(raw: &str, spec: &str) -> Result<Option<Color>, TextAttrError> {
    if let Some(digits) = spec.strip_prefix('^') {
        return cube_color(raw, digits).map(Some);
    }
    if let Some(digits) = spec.strip_prefix('%') {
        return palette_color(raw, digits).map(Some);
    }
    if let Some(hex) = spec.strip_prefix('#') {
        return true_color(raw, hex).map(Some);
    }
    if let Some(digits) = gray_digits(spec) {
        return gray_color(raw, digits).map(Some);
    }

    let (name, fixed) = spec
        .strip_suffix('!')
        .map_or((spec, false), |rest| (rest, true));
    let (name, bright) = name
        .strip_prefix('+')
        .map_or((name, false), |rest| (rest, true));
    for (letter, word, normal, bright_variant) in COLOR_NAMES {
        if name == letter || name == word {
            let color = if bright {
                let Some(color) = bright_variant else {
                    return Err(unknown(raw));
                };
                color
            } else {
                normal
            };
            if fixed {
                if let Some(index) = fixed_cube(color) {
                    return Ok(Some(Color::AnsiValue(index)));
                }
                // the terminal default has no fixed form
            }
            return Ok(Some(color));
        }
    }
    if bright {
        // `+` commits the token to being a color
        return Err(unknown(raw));
    }
    Ok(None)
}

/// Cube equivalents of the named colors for the `!` suffix, which pins a name
/// into the 216-color cube so terminal palettes cannot restyle it. Channel
/// levels follow the `^rgb` scheme; the terminal default has no fixed form.
const fn fixed_cube(color: Color) -> Option<u8> {
    let (r, g, b): (u8, u8, u8) = match color {
        Color::Black => (0, 0, 0),
        Color::DarkGrey => (1, 1, 1),
        Color::Grey => (3, 3, 3),
        Color::White => (5, 5, 5),
        Color::DarkRed => (3, 0, 0),
        Color::Red => (5, 1, 1),
        Color::DarkGreen => (0, 3, 0),
        Color::Green => (1, 5, 1),
        Color::DarkYellow => (3, 1, 0),
        Color::Yellow => (5, 5, 1),
        Color::DarkBlue => (0, 0, 3),
        Color::Blue => (1, 1, 5),
        Color::DarkMagenta => (3, 0, 3),
        Color::Magenta => (5, 1, 5),
        Color::DarkCyan => (0, 3, 3),
        Color::Cyan => (1, 5, 5),
        _ => return None,
    };
    Some(16 + 36 * r + 6 * g + b)
}

fn gray_digits(spec: &str) -> Option<&str> {
    let digits = spec
        .strip_prefix("gray")
        .or_else(|| spec.strip_prefix("grey"))
        .or_else(|| spec.strip_prefix('a'))?;
    if digits.is_empty() { None } else { Some(digits) }
}

/// `^rgb`: three digits 0-5 mapping into the 216-color cube at palette
/// index `16 + 36r + 6g + b`.
fn cube_color(raw: &str, digits: &str) -> Result<Color, TextAttrError> {
    if digits.len() != 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TextAttrError::InvalidNumericForm {
            token: raw.to_string(),
            reason: "`^` takes exactly three digits, one per channel",
        });
    }
    let mut cube: u8 = 0;
    for b in digits.bytes() {
        let level = b - b'0';
        if level > 5 {
            return Err(TextAttrError::OutOfRange {
                token: raw.to_string(),
                reason: "cube channel levels range from 0 to 5",
            });
        }
        cube = cube * 6 + level;
    }
    Ok(Color::AnsiValue(16 + cube))
}

/// `%n`: a direct 256-color palette index.
fn palette_color(raw: &str, digits: &str) -> Result<Color, TextAttrError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TextAttrError::InvalidNumericForm {
            token: raw.to_string(),
            reason: "`%` takes a decimal palette index",
        });
    }
    // All digits at this point, so the only possible failure is overflow.
    digits.parse::<u8>().map(Color::AnsiValue).map_err(|_| {
        TextAttrError::OutOfRange {
            token: raw.to_string(),
            reason: "palette indexes range from 0 to 255",
        }
    })
}

/// `#rrggbb`: 24-bit truecolor.
fn true_color(raw: &str, hex: &str) -> Result<Color, TextAttrError> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(TextAttrError::InvalidNumericForm {
            token: raw.to_string(),
            reason: "`#` takes six hexadecimal digits",
        });
    }
    let rgb = u32::from_str_radix(hex, 16).unwrap_or(0); // checked above
    Ok(Color::Rgb {
        r: (rgb >> 16) as u8,
        g: (rgb >> 8) as u8,
        b: rgb as u8,
    })
}

/// `a1`-`a24` (or `gray1`-`gray24`): the grayscale ramp at the top of the
/// 256-color palette, palette index `231 + n`.
fn gray_color(raw: &str, digits: &str) -> Result<Color, TextAttrError> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TextAttrError::InvalidNumericForm {
            token: raw.to_string(),
            reason: "grayscale levels are written `a1` through `a24`",
        });
    }
    match digits.parse::<u8>() {
        Ok(level @ 1..=24) => Ok(Color::AnsiValue(231 + level)),
        _ => Err(TextAttrError::OutOfRange {
            token: raw.to_string(),
            reason: "grayscale levels range from 1 to 24",
        }),
    }
}

fn style_by_name(name: &str) -> Option<Style> {
    STYLE_NAMES
        .iter()
        .find(|(letter, words, _)| name == *letter || words.contains(&name))
        .map(|(_, _, style)| *style)
}
