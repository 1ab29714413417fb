//! JSON (RFC 8259) values, parsed with the combinators of this crate.
//!
//! Every rule of the grammar is a [`TopParser`] over `str`: string, number, object, array,
//! boolean and null literals, and the value rule trying them in that order. Arrays and objects
//! call the value rule back for their elements.
//!
//! Three entry points sit on top of the value rule:
//!
//! - [`parse_with`] hands the outcome to the caller: a failure value returned verbatim, or a
//!   continuation called with the remaining input and the decoded value.
//! - [`parse_prefix`] parses a value at the front of the input and returns what is left.
//! - [`parse`] requires the whole input to be one value, modulo surrounding whitespace.
//!
//! [`JsonParser`] offers the same entry points with a non-default [`Config`].

mod config;
mod error;
pub mod lexical;
pub mod literal;
pub mod number;
pub mod string;
mod structure;
mod value;

pub use config::{Config, DEFAULT_MAX_DEPTH};
pub use error::Error;
pub use value::{Map, Value};

use self::config::Depth;
use self::lexical::whitespace;
use crate::{Parser, TopParser};
use tracing::trace;

/// The value rule, for values nested at `depth`.
fn json_value(input: &str, depth: Depth) -> Parser<Value, str> {
  choice![
    string::string_literal().map(Value::String),
    number::number_literal().map(Value::Number),
    structure::object(depth).map(Value::Object),
    structure::array(depth).map(Value::Array),
    literal::boolean_literal().map(Value::Bool),
    literal::null_literal().const_map(Value::Null),
  ]
  .parse(input)
}

/// The top-level value rule, as a parser to compose with others.
///
/// Leading whitespace is not skipped.
pub fn value_parser<'a>(
  config: Config,
) -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, Value, str>, Value, str> {
  let depth = Depth::root(&config);
  TopParser::from_input_parser(move |input: &'a str| json_value(input, depth))
}

/// JSON parser with a given [`Config`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct JsonParser {
  config: Config,
}

impl JsonParser {
  pub fn new(config: Config) -> Self {
    JsonParser { config }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Parse one value at the front of `input`.
  ///
  /// Returns `failure` as-is if there is no value there; otherwise, returns what `on_success`
  /// returns when called with the remaining input and the decoded value.
  pub fn parse_with<'a, R>(
    &self,
    input: &'a str,
    failure: R,
    on_success: impl FnOnce(&'a str, Value) -> R,
  ) -> R {
    value_parser(self.config)
      .parse(input)
      .fold(failure, on_success)
  }

  /// Parse one value at the front of `input`, returning it along with the rest of the input.
  pub fn parse_prefix<'a>(&self, input: &'a str) -> Option<(Value, &'a str)> {
    self.parse_with(input, None, |rest, value| Some((value, rest)))
  }

  /// Parse `input` as exactly one value, optionally surrounded with whitespace.
  pub fn parse(&self, input: &str) -> Result<Value, Error> {
    let document = whitespace()
      .right(value_parser(self.config))
      .left(whitespace());

    match document.parse(input) {
      Parser::Parsed { data, input: rest } if rest.is_empty() => Ok(data),

      Parser::Parsed { input: rest, .. } => {
        let offset = input.len() - rest.len();
        trace!(offset, "trailing input after JSON value");
        Err(Error::TrailingInput { offset })
      }

      Parser::NoParse => {
        trace!("input is not a JSON value");
        Err(Error::Syntax)
      }
    }
  }
}

/// Parse one value at the front of `input` with the default [`Config`].
///
/// See [`JsonParser::parse_with`].
pub fn parse_with<'a, R>(input: &'a str, failure: R, on_success: impl FnOnce(&'a str, Value) -> R) -> R {
  JsonParser::default().parse_with(input, failure, on_success)
}

/// See [`JsonParser::parse_prefix`].
pub fn parse_prefix(input: &str) -> Option<(Value, &str)> {
  JsonParser::default().parse_prefix(input)
}

/// See [`JsonParser::parse`].
pub fn parse(input: &str) -> Result<Value, Error> {
  JsonParser::default().parse(input)
}
