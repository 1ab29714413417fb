//! String literals and their escape sequences.

use super::lexical::{is_hex_digit, is_unescaped};
use crate::{parse_any_char, parse_char, parse_lexeme, parse_satisfy, Parser, TopParser};
use std::char::decode_utf16;

const NAMED_ESCAPES: &[(char, char)] = &[
  ('"', '"'),
  ('\\', '\\'),
  ('/', '/'),
  ('b', '\u{8}'),
  ('f', '\u{c}'),
  ('n', '\n'),
  ('r', '\r'),
  ('t', '\t'),
];

fn named_escape(c: char) -> Option<char> {
  NAMED_ESCAPES
    .iter()
    .find(|&&(name, _)| name == c)
    .map(|&(_, decoded)| decoded)
}

/// Decode UTF-16 code units that must form exactly one scalar value.
fn decode_code_units(units: &[u16]) -> Option<char> {
  let mut decoded = decode_utf16(units.iter().copied());

  match (decoded.next(), decoded.next()) {
    (Some(Ok(c)), None) => Some(c),
    _ => None,
  }
}

fn is_high_surrogate(unit: u16) -> bool {
  (0xD800..0xDC00).contains(&unit)
}

/// `u` followed by four hex digits, as a UTF-16 code unit.
fn code_unit<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, u16, str>, u16, str> {
  parse_char('u')
    .right(parse_satisfy(is_hex_digit).count(4).recognize())
    .filter_map(|digits| u16::from_str_radix(digits, 16).ok())
}

/// The character encoded by a `\u` escape, the backslash being already consumed.
///
/// A high surrogate must be followed by a `\u` escape holding its low surrogate; lone surrogates
/// don’t encode any character and fail.
fn unicode_escape<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, char, str>, char, str> {
  code_unit().and_then(|unit| {
    TopParser::from_input_parser(move |input: &'a str| {
      if is_high_surrogate(unit) {
        parse_lexeme("\\")
          .right(code_unit())
          .filter_map(move |low| decode_code_units(&[unit, low]))
          .parse(input)
      } else {
        decode_code_units(&[unit])
          .map(|data| Parser::Parsed { data, input })
          .into()
      }
    })
  })
}

/// A backslash escape sequence, decoded.
pub fn escape<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, char, str>, char, str> {
  parse_char('\\').right(
    parse_any_char()
      .filter_map(named_escape)
      .or(unicode_escape()),
  )
}

/// A double-quoted string literal, escapes decoded.
pub fn string_literal<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, String, str>, String, str> {
  parse_char('"')
    .right(parse_satisfy(is_unescaped).or(escape()).many0())
    .left(parse_char('"'))
    .map(|chars: Vec<char>| chars.into_iter().collect::<String>())
}
