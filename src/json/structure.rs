//! Arrays and objects.
//!
//! Their elements are parsed with the top-level value rule, one level deeper. Opening a
//! container past the nesting budget fails like any other syntax error.

use super::config::Depth;
use super::json_value;
use super::lexical::whitespace;
use super::string::string_literal;
use super::value::{Map, Value};
use crate::{parse_char, Parser, TopParser};

fn element<'a>(depth: Depth) -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, Value, str>, Value, str> {
  TopParser::from_input_parser(move |input: &'a str| json_value(input, depth))
}

/// Opening delimiter of a container found at `depth`; yields the depth of its elements.
fn open<'a>(
  delimiter: char,
  depth: Depth,
) -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, Depth, str>, Depth, str> {
  parse_char(delimiter)
    .left(whitespace())
    .filter_map(move |_| depth.descend())
}

fn close<'a>(delimiter: char) -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, char, str>, char, str> {
  whitespace().right(parse_char(delimiter))
}

fn separator<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, char, str>, char, str> {
  whitespace().right(parse_char(',')).left(whitespace())
}

/// `[`, comma-separated values, `]`.
pub(crate) fn array<'a>(
  depth: Depth,
) -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, Vec<Value>, str>, Vec<Value>, str> {
  open('[', depth).and_then(|inner| element(inner).sep_by0(separator()).left(close(']')))
}

fn member<'a>(
  depth: Depth,
) -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, (String, Value), str>, (String, Value), str> {
  string_literal()
    .left(whitespace())
    .left(parse_char(':'))
    .left(whitespace())
    .map(|key: String| move |value: Value| (key, value))
    .ap(element(depth))
}

/// `{`, comma-separated `key: value` members, `}`.
///
/// When a key appears several times, the last value wins, at the position of the first key.
pub(crate) fn object<'a>(depth: Depth) -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, Map, str>, Map, str> {
  open('{', depth)
    .and_then(|inner| member(inner).sep_by0(separator()).left(close('}')))
    .map(|members: Vec<(String, Value)>| members.into_iter().collect::<Map>())
}
