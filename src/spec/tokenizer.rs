use crate::errors::TextAttrError;

/// Hard cap on tokens per spec: a foreground color, a background color, and
/// all nine attributes. Anything beyond that cannot change what the terminal
/// renders.
pub(crate) const MAX_TOKENS: usize = 11;

/// The longest recognized token is `not-strikethrough`.
pub(crate) const MAX_TOKEN_LEN: usize = 17;

/// Longest plausible spec: [`MAX_TOKENS`] maximal tokens joined by single
/// spaces. Longer input is rejected before any per-token work.
pub(crate) const MAX_SPEC_LEN: usize = MAX_TOKENS * (MAX_TOKEN_LEN + 1) - 1;

/// How much of an over-long input an error message quotes.
const ERR_PREVIEW_LEN: usize = 64;

/// Truncated copy of `input` for error messages, so an over-long spec never
/// echoes back in full.
fn preview(input: &str) -> String {
    if input.len() <= ERR_PREVIEW_LEN {
        return input.to_string();
    }
    let mut end = ERR_PREVIEW_LEN;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &input[..end])
}

/// Splits a spec string into raw tokens on runs of whitespace.
///
/// Modifier prefixes (`/`, `+`, `-`) stay glued to their token here; the
/// resolver peels them off, so numeric forms like `^510` are always seen as
/// single units first.
///
/// # Errors
/// [`TextAttrError::SpecTooLong`] when the input, the token count, or a single
/// token exceeds the bounds above; [`TextAttrError::EmptySpec`] when nothing
/// remains after splitting.
pub(crate) fn tokenize(spec: &str) -> Result<Vec<&str>, TextAttrError> {
    if spec.len() > MAX_SPEC_LEN {
        return Err(TextAttrError::SpecTooLong {
            what: preview(spec),
            reason: "longer than any meaningful spec",
        });
    }

    let tokens: Vec<&str> = spec.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(TextAttrError::EmptySpec);
    }
    if tokens.len() > MAX_TOKENS {
        return Err(TextAttrError::SpecTooLong {
            what: preview(spec),
            reason: "more than 11 tokens",
        });
    }
    if let Some(long) = tokens.iter().find(|t| t.len() > MAX_TOKEN_LEN) {
        return Err(TextAttrError::SpecTooLong {
            what: preview(long),
            reason: "token longer than any recognized form",
        });
    }
    Ok(tokens)
}
