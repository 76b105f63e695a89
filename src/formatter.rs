use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::errors::TextAttrError;
use crate::spec::{encode, resolve_token, tokenize};

/// The fixed full-reset sequence. `resolve("f")` returns it without
/// allocating.
pub const RESET: &str = "\x1b[0m";

/// Environment variable that disables attribute output, for users who export
/// it once to get plain output from every program built on this crate.
pub const DISABLED_ENV: &str = "TEXTATTR_DISABLED";

static DISABLED: AtomicBool = AtomicBool::new(false);

/// Disables (or re-enables) attribute resolution process-wide.
///
/// While disabled, [`resolve`] returns an empty sequence for *any* input —
/// invalid specs included, which are not validated at all. Callers relying on
/// resolution for validation must not do so while disabled.
pub fn set_disabled(disabled: bool) {
    DISABLED.store(disabled, Ordering::Relaxed);
}

/// Whether attribute resolution is currently disabled process-wide.
pub fn is_disabled() -> bool {
    DISABLED.load(Ordering::Relaxed)
}

/// Resolves a spec string honoring the process-wide disabled flag.
///
/// Equivalent to `Formatter::new().disabled(is_disabled()).resolve(spec)`.
///
/// # Errors
/// See [`Formatter::resolve`].
pub fn resolve(spec: &str) -> Result<Cow<'static, str>, TextAttrError> {
    Formatter::new().disabled(is_disabled()).resolve(spec)
}

/// Resolution context.
///
/// Holds the only state the pipeline reads, the `disabled` flag, so tests and
/// embedding callers can scope it per formatter instead of touching the
/// process-wide flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    disabled: bool,
}

impl Formatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { disabled: false }
    }

    /// Builder-style toggle for this formatter's disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// A formatter that is disabled when [`DISABLED_ENV`] is set in the
    /// environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            disabled: std::env::var_os(DISABLED_ENV).is_some(),
        }
    }

    /// Resolves a spec string into its ANSI escape sequence.
    ///
    /// A disabled formatter short-circuits to an empty string for any input,
    /// valid or not — no validation happens at all in that mode. The reset
    /// shorthand `"f"` returns the borrowed [`RESET`] constant; everything
    /// else tokenizes, resolves each token left to right, and encodes the
    /// result into one `ESC[…m` sequence.
    ///
    /// ## Example
    /// ```
    /// use textattr::Formatter;
    ///
    /// let fmt = Formatter::new();
    /// assert_eq!(fmt.resolve("w /b").unwrap(), "\x1b[37;44m");
    /// assert_eq!(fmt.resolve("+g o").unwrap(), "\x1b[92;1m");
    /// ```
    ///
    /// # Errors
    /// The first offending token is reported and resolution stops; see
    /// [`TextAttrError`] for the taxonomy.
    pub fn resolve(&self, spec: &str) -> Result<Cow<'static, str>, TextAttrError> {
        if self.disabled {
            return Ok(Cow::Borrowed(""));
        }
        if spec == "f" {
            // Most frequent call; skip tokenizing entirely.
            return Ok(Cow::Borrowed(RESET));
        }

        let tokens = tokenize(spec)?;
        let mut attrs = Vec::with_capacity(tokens.len());
        for token in &tokens {
            attrs.push(resolve_token(token)?);
        }
        let seq = encode(&attrs);
        debug!(spec, ?seq, "resolved attribute spec");
        Ok(Cow::Owned(seq))
    }
}
