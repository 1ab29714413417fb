//! Number literals.
//!
//! The grammar is RFC 8259’s: an optional minus sign, an integer part without leading zeros, an
//! optional fraction and an optional exponent. The integer part stops right after a leading `0`,
//! so `0123` is the number `0` followed by the input `123`; rejecting that is up to whatever
//! comes next.

use super::lexical::{is_digit, is_nonzero_digit};
use crate::{parse_char, parse_satisfy, parse_while, parse_while0, Parser, TopParser};

fn integer<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, &'a str, str>, &'a str, str> {
  parse_char('0').recognize().or(
    parse_satisfy(is_nonzero_digit)
      .right(parse_while0(is_digit))
      .recognize(),
  )
}

fn fraction<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, &'a str, str>, &'a str, str> {
  parse_char('.').right(parse_while(is_digit)).recognize()
}

fn exponent<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, &'a str, str>, &'a str, str> {
  parse_satisfy(|c| c == 'e' || c == 'E')
    .right(parse_satisfy(|c| c == '+' || c == '-').opt())
    .right(parse_while(is_digit))
    .recognize()
}

/// The source text of a number literal.
pub fn number_text<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, &'a str, str>, &'a str, str> {
  parse_char('-')
    .opt()
    .right(integer())
    .right(fraction().opt())
    .right(exponent().opt())
    .recognize()
}

/// A number literal, as a double-precision float.
pub fn number_literal<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, f64, str>, f64, str> {
  number_text().filter_map(|text: &'a str| lexical_core::parse::<f64>(text.as_bytes()).ok())
}
