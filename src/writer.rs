use std::borrow::Cow;
use std::fmt;
use std::io::Write;

use crate::errors::TextAttrError;
use crate::formatter::{Formatter, is_disabled};

/// Marker character: a string fragment starting with it is an attribute spec.
pub const MARKER: char = '@';

/// One argument to [`write_attributed`]: an attribute spec to resolve,
/// literal text, or an arbitrary value rendered with [`fmt::Display`].
///
/// The marker convention is an explicit constructor choice rather than
/// runtime sniffing: [`Fragment::auto`] (and the `From<&str>`/`From<String>`
/// impls) turn a string whose first character is `@` and whose length is
/// greater than one into [`Fragment::Spec`]. A lone `"@"` stays literal text
/// so the marker itself can be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// An attribute spec, resolved before writing.
    Spec(Cow<'a, str>),
    /// Literal text, written verbatim.
    Text(Cow<'a, str>),
    /// A pre-rendered value, written verbatim.
    Value(String),
}

impl<'a> Fragment<'a> {
    /// Applies the `@`-marker convention to `s`.
    #[must_use]
    pub fn auto(s: &'a str) -> Self {
        match s.strip_prefix(MARKER) {
            Some(rest) if !rest.is_empty() => Self::Spec(Cow::Borrowed(rest)),
            _ => Self::Text(Cow::Borrowed(s)),
        }
    }

    /// Wraps any displayable value as a verbatim fragment.
    pub fn value<T: fmt::Display>(value: T) -> Self {
        Self::Value(value.to_string())
    }
}

impl<'a> From<&'a str> for Fragment<'a> {
    fn from(s: &'a str) -> Self {
        Self::auto(s)
    }
}

impl From<String> for Fragment<'static> {
    fn from(s: String) -> Self {
        match s.strip_prefix(MARKER) {
            Some(rest) if !rest.is_empty() => Self::Spec(Cow::Owned(rest.to_string())),
            _ => Self::Text(Cow::Owned(s)),
        }
    }
}

macro_rules! impl_value_fragment {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Fragment<'static> {
                fn from(value: $ty) -> Self {
                    Self::Value(value.to_string())
                }
            }
        )*
    };
}

impl_value_fragment!(bool, char, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl Formatter {
    /// Writes each fragment to `sink` in argument order: specs are resolved
    /// through [`Formatter::resolve`] and their escape sequences written,
    /// everything else is written verbatim. No separators are inserted.
    ///
    /// # Errors
    /// Stops at the first resolution or I/O failure. Fragments before the
    /// failing one have already been written — partial output is the
    /// documented contract, there is no buffering or rollback.
    pub fn write_attributed<'a, W, I>(&self, sink: &mut W, fragments: I) -> Result<(), TextAttrError>
    where
        W: Write,
        I: IntoIterator<Item = Fragment<'a>>,
    {
        for fragment in fragments {
            match fragment {
                Fragment::Spec(spec) => sink.write_all(self.resolve(&spec)?.as_bytes())?,
                Fragment::Text(text) => sink.write_all(text.as_bytes())?,
                Fragment::Value(value) => sink.write_all(value.as_bytes())?,
            }
        }
        Ok(())
    }
}

/// [`Formatter::write_attributed`] honoring the process-wide disabled flag.
///
/// # Errors
/// See [`Formatter::write_attributed`].
pub fn write_attributed<'a, W, I>(sink: &mut W, fragments: I) -> Result<(), TextAttrError>
where
    W: Write,
    I: IntoIterator<Item = Fragment<'a>>,
{
    Formatter::new()
        .disabled(is_disabled())
        .write_attributed(sink, fragments)
}

/// Variadic convenience over [`write_attributed`]: string arguments follow
/// the `@`-marker convention, other arguments are rendered with `Display`.
/// Writes to stdout unless `to:` selects another sink.
///
/// ## Example
/// ```
/// use textattr::tawrite;
///
/// let mut out = Vec::new();
/// tawrite!(to: &mut out, "@g", "ok", "@f").unwrap();
/// assert_eq!(out, b"\x1b[32mok\x1b[0m");
/// ```
#[macro_export]
macro_rules! tawrite {
    (to: $sink:expr, $($arg:expr),+ $(,)?) => {
        $crate::write_attributed($sink, [$($crate::Fragment::from($arg)),+])
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::write_attributed(&mut ::std::io::stdout(), [$($crate::Fragment::from($arg)),+])
    };
}
