//! The spec → escape-sequence pipeline: tokenizer, resolver, encoder.
//!
//! Each stage has its own failure modes and is unit tested on its own; the
//! [`Formatter`][crate::formatter::Formatter] drives all three.

mod encoder;
mod resolver;
mod tokenizer;

#[cfg(test)]
mod test;

pub(crate) use encoder::encode;
pub(crate) use resolver::resolve_token;
pub(crate) use tokenizer::tokenize;
