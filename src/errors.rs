use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while resolving an attribute spec or writing attributed
/// output.
///
/// Every variant carries a message that is safe to print directly and quotes
/// the offending token, truncated when the input itself is over-long.
/// Resolution stops at the first invalid token, so at most one of these is
/// reported per call.
#[derive(Debug, Error, Diagnostic)]
pub enum TextAttrError {
    /// The spec contained no tokens at all.
    #[error("no attribute specs were given")]
    #[diagnostic(help("pass at least one token, e.g. `g`, `w /b o`, or `f` to reset"))]
    EmptySpec,

    /// The spec, its token count, or one of its tokens exceeds the bounds of
    /// any meaningful spec.
    #[error("attribute spec too long ({reason}): ‘{what}’")]
    SpecTooLong {
        what: String,
        reason: &'static str,
    },

    /// The token matched none of the recognized colors, attributes, or
    /// numeric forms.
    #[error("unrecognized color or attribute name: ‘{token}’")]
    #[diagnostic(help(
        "recognized forms: color letters `k r g y b m c w d l n` (prefix `+` for \
         bright, `/` for background, suffix `!` to pin into the palette cube), \
         attribute letters `o t i u x e v h z` (prefix `-` or `not-` to cancel), \
         `^rgb` cube digits, `%n` palette index, `#rrggbb` truecolor, `a1`-`a24` \
         grayscale, and `f`/`off` to reset"
    ))]
    UnknownToken { token: String },

    /// A numeric color form (`^`, `%`, `#`, grayscale) was malformed.
    #[error("malformed numeric form ‘{token}’: {reason}")]
    InvalidNumericForm {
        token: String,
        reason: &'static str,
    },

    /// A numeric color form was well formed but its value is out of range.
    #[error("value out of range in ‘{token}’: {reason}")]
    OutOfRange {
        token: String,
        reason: &'static str,
    },

    /// A sink write failed while emitting attributed output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
