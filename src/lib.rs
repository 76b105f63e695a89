//! `textattr` makes adding color and attributes to terminal output easier by
//! translating human-readable specs into ANSI escape codes.
//!
//! A spec is one or more whitespace-separated tokens. Colors use single
//! letters (`k r g y b m c w`, plus `d l n` for dark-gray, light-gray, and
//! brown) or full words; `+` selects the bright variant, `/` moves the color
//! to the background, and a trailing `!` pins a named color into the
//! 216-color cube so terminal palettes cannot restyle it. Attributes use letters
//! (`o t i u x e v h z` for bold, dim, italic, underline, blink, overline,
//! reverse, hidden, strikethrough) or words, with `-`/`not-` producing the
//! cancel form. Numeric colors are written `^rgb` (216-color cube, digits
//! 0-5), `%n` (direct palette index 0-255), `#rrggbb` (truecolor), or
//! `a1`-`a24` (grayscale ramp). `f` or `off` resets everything.
//!
//! ## Example
//! ```
//! use textattr::{RESET, resolve};
//!
//! let seq = resolve("w /b o").unwrap();
//! assert_eq!(seq, "\x1b[37;44;1m");
//! assert_eq!(resolve("f").unwrap(), RESET);
//! ```
//!
//! The [`Formatter`] context object scopes the disabled flag per caller;
//! [`set_disabled`] flips it process-wide. While disabled, resolution returns
//! an empty sequence for any input without validating it. The [`tawrite!`]
//! macro and [`write_attributed`] emit `@`-marked specs inline with literal
//! text.

pub mod errors;
pub mod formatter;
mod spec;
pub mod writer;

pub use errors::TextAttrError;
pub use formatter::{DISABLED_ENV, Formatter, RESET, is_disabled, resolve, set_disabled};
pub use writer::{Fragment, MARKER, write_attributed};
