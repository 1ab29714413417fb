//! The `true`, `false` and `null` keywords.

use crate::{parse_lexeme, parse_pure, Parser, TopParser};

pub fn boolean_literal<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, bool, str>, bool, str> {
  parse_lexeme("true")
    .right(parse_pure(true))
    .or(parse_lexeme("false").right(parse_pure(false)))
}

pub fn null_literal<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, (), str>, (), str> {
  parse_lexeme("null")
}
