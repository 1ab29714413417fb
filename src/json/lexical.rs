//! Character classes of the JSON grammar.

use crate::{parse_while0, Parser, TopParser};

pub fn is_whitespace(c: char) -> bool {
  matches!(c, ' ' | '\n' | '\r' | '\t')
}

pub fn is_digit(c: char) -> bool {
  c.is_ascii_digit()
}

pub fn is_nonzero_digit(c: char) -> bool {
  matches!(c, '1'..='9')
}

pub fn is_hex_digit(c: char) -> bool {
  c.is_ascii_hexdigit()
}

/// Characters allowed verbatim inside a string literal: everything but the quote, the backslash
/// and the C0 control characters.
pub fn is_unescaped(c: char) -> bool {
  c != '"' && c != '\\' && c >= '\u{20}'
}

/// Optional whitespace.
pub fn whitespace<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, &'a str, str>, &'a str, str> {
  parse_while0(is_whitespace)
}
