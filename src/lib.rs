//! Parser combinators over immutable inputs, and a JSON grammar written with them.
//!
//! A parser is a function from the remaining input to a [`Parser`] outcome: either the decoded
//! data along with the unconsumed suffix of the input, or [`Parser::NoParse`]. Parsers never
//! mutate their input, so alternatives can be tried one after the other against the very same
//! input.
//!
//! [`TopParser`] wraps such a function and exposes the combinators used to compose bigger
//! parsers out of smaller ones. The [`json`] module is built entirely out of them.

use std::marker::PhantomData;

/// Ordered choice over a list of parsers: the first one to succeed wins.
///
/// `choice![a, b, c]` is `a.or(b).or(c)`.
#[macro_export]
macro_rules! choice {
  ($parser:expr $(, $parsers:expr)* $(,)?) => {{
    $parser $(.or($parsers))*
  }};
}

pub mod input;
pub mod json;

use input::Input;

pub struct TopParser<'a, F, A, I>
where
  I: ?Sized,
{
  parser: F,
  _phantom: PhantomData<&'a (A, I)>,
}

impl<'a, F, A, I> TopParser<'a, F, A, I>
where
  I: ?Sized + Input,
  F: Fn(&'a I) -> Parser<'a, A, I>,
{
  pub fn from_input_parser(f: F) -> Self {
    TopParser {
      parser: f,
      _phantom: PhantomData,
    }
  }

  pub fn parse(&self, input: &'a I) -> Parser<'a, A, I> {
    (self.parser)(input)
  }

  /// Sequence two parsers and combine both results with `f`.
  pub fn zip<B, C>(
    self,
    other: TopParser<'a, impl Fn(&'a I) -> Parser<'a, B, I>, B, I>,
    f: impl Fn(A, B) -> C,
  ) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, C, I>, C, I> {
    TopParser::from_input_parser(move |input: &'a I| match (self.parser)(input) {
      Parser::Parsed { data, input } => match (other.parser)(input) {
        Parser::Parsed { data: data2, input } => Parser::Parsed {
          data: f(data, data2),
          input,
        },
        Parser::NoParse => Parser::NoParse,
      },
      Parser::NoParse => Parser::NoParse,
    })
  }

  /// Applicative sequencing: `self` yields a function, `other` its argument.
  pub fn ap<B, C>(
    self,
    other: TopParser<'a, impl Fn(&'a I) -> Parser<'a, B, I>, B, I>,
  ) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, C, I>, C, I>
  where
    A: FnOnce(B) -> C,
  {
    self.zip(other, |f, b| f(b))
  }

  /// Sequence two parsers, keeping the result of the left one.
  pub fn left<B>(
    self,
    other: TopParser<'a, impl Fn(&'a I) -> Parser<'a, B, I>, B, I>,
  ) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, A, I>, A, I> {
    TopParser::from_input_parser(move |input: &'a I| match (self.parser)(input) {
      Parser::Parsed { data, input } => match (other.parser)(input) {
        Parser::Parsed { input, .. } => Parser::Parsed { data, input },
        Parser::NoParse => Parser::NoParse,
      },
      Parser::NoParse => Parser::NoParse,
    })
  }

  /// Sequence two parsers, keeping the result of the right one.
  pub fn right<B>(
    self,
    other: TopParser<'a, impl Fn(&'a I) -> Parser<'a, B, I>, B, I>,
  ) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, B, I>, B, I> {
    TopParser::from_input_parser(move |input: &'a I| match (self.parser)(input) {
      Parser::Parsed { input, .. } => (other.parser)(input),
      Parser::NoParse => Parser::NoParse,
    })
  }

  pub fn and_then<B, G>(
    self,
    f: impl Fn(A) -> TopParser<'a, G, B, I>,
  ) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, B, I>, B, I>
  where
    G: Fn(&'a I) -> Parser<'a, B, I>,
  {
    TopParser::from_input_parser(move |input: &'a I| match (self.parser)(input) {
      Parser::Parsed { data, input } => (f(data).parser)(input),
      Parser::NoParse => Parser::NoParse,
    })
  }

  pub fn map<B>(
    self,
    f: impl Fn(A) -> B,
  ) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, B, I>, B, I> {
    TopParser::from_input_parser(move |input: &'a I| match (self.parser)(input) {
      Parser::Parsed { data, input } => Parser::Parsed {
        data: f(data),
        input,
      },
      Parser::NoParse => Parser::NoParse,
    })
  }

  /// Map the result, turning `None` into a failure.
  ///
  /// On failure, the input is left untouched, as if the parser never ran.
  pub fn filter_map<B>(
    self,
    f: impl Fn(A) -> Option<B>,
  ) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, B, I>, B, I> {
    TopParser::from_input_parser(move |input: &'a I| match (self.parser)(input) {
      Parser::Parsed { data, input } => match f(data) {
        Some(data) => Parser::Parsed { data, input },
        None => Parser::NoParse,
      },
      Parser::NoParse => Parser::NoParse,
    })
  }

  pub fn const_map<B>(self, b: B) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, B, I>, B, I>
  where
    B: Clone,
  {
    TopParser::from_input_parser(move |input: &'a I| match (self.parser)(input) {
      Parser::Parsed { input, .. } => Parser::Parsed {
        data: b.clone(),
        input,
      },
      Parser::NoParse => Parser::NoParse,
    })
  }

  pub fn many0(self) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, Vec<A>, I>, Vec<A>, I> {
    TopParser::from_input_parser(move |mut i: &'a I| {
      let mut results = Vec::new();

      while let Parser::Parsed { data, input } = (self.parser)(i) {
        // a parser that doesn’t consume would match forever; stop here
        if i.same_position(input) {
          break;
        }

        results.push(data);
        i = input;
      }

      Parser::Parsed {
        input: i,
        data: results,
      }
    })
  }

  pub fn many1(self) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, Vec<A>, I>, Vec<A>, I> {
    self
      .many0()
      .filter_map(|results| if results.is_empty() { None } else { Some(results) })
  }

  /// Run the parser exactly `n` times.
  pub fn count(self, n: usize) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, Vec<A>, I>, Vec<A>, I> {
    TopParser::from_input_parser(move |mut i: &'a I| {
      let mut results = Vec::with_capacity(n);

      for _ in 0..n {
        match (self.parser)(i) {
          Parser::Parsed { data, input } => {
            results.push(data);
            i = input;
          }
          Parser::NoParse => return Parser::NoParse,
        }
      }

      Parser::Parsed {
        input: i,
        data: results,
      }
    })
  }

  pub fn opt(self) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, Option<A>, I>, Option<A>, I> {
    TopParser::from_input_parser(move |input: &'a I| match (self.parser)(input) {
      Parser::Parsed { data, input } => Parser::Parsed {
        data: Some(data),
        input,
      },
      Parser::NoParse => Parser::Parsed { data: None, input },
    })
  }

  /// Ordered choice: try `self`, and only if it fails, try `other` on the same input.
  pub fn or(
    self,
    other: TopParser<'a, impl Fn(&'a I) -> Parser<'a, A, I>, A, I>,
  ) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, A, I>, A, I> {
    TopParser::from_input_parser(move |input: &'a I| match (self.parser)(input) {
      Parser::NoParse => (other.parser)(input),
      p => p,
    })
  }

  /// Zero or more items separated by `separator`.
  ///
  /// A separator must always be followed by an item: a dangling separator fails the whole
  /// parser.
  pub fn sep_by0<B>(
    self,
    separator: TopParser<'a, impl Fn(&'a I) -> Parser<'a, B, I>, B, I>,
  ) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, Vec<A>, I>, Vec<A>, I> {
    self.separated(separator, true)
  }

  /// One or more items separated by `separator`.
  pub fn sep_by1<B>(
    self,
    separator: TopParser<'a, impl Fn(&'a I) -> Parser<'a, B, I>, B, I>,
  ) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, Vec<A>, I>, Vec<A>, I> {
    self.separated(separator, false)
  }

  fn separated<B>(
    self,
    separator: TopParser<'a, impl Fn(&'a I) -> Parser<'a, B, I>, B, I>,
    allow_empty: bool,
  ) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, Vec<A>, I>, Vec<A>, I> {
    TopParser::from_input_parser(move |input: &'a I| {
      let (first, mut i) = match (self.parser)(input) {
        Parser::Parsed { data, input } => (data, input),
        Parser::NoParse if allow_empty => {
          return Parser::Parsed {
            data: Vec::new(),
            input,
          }
        }
        Parser::NoParse => return Parser::NoParse,
      };
      let mut results = vec![first];

      while let Parser::Parsed { input, .. } = (separator.parser)(i) {
        match (self.parser)(input) {
          Parser::Parsed { data, input } => {
            if i.same_position(input) {
              break;
            }

            results.push(data);
            i = input;
          }

          Parser::NoParse => return Parser::NoParse,
        }
      }

      Parser::Parsed {
        data: results,
        input: i,
      }
    })
  }
}

impl<'a, F, A> TopParser<'a, F, A, str>
where
  F: Fn(&'a str) -> Parser<'a, A, str>,
{
  /// Discard the result and yield the slice of input the parser consumed instead.
  pub fn recognize(self) -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, &'a str, str>, &'a str, str> {
    TopParser::from_input_parser(move |input: &'a str| match (self.parser)(input) {
      Parser::Parsed { input: rest, .. } => Parser::Parsed {
        data: &input[..input.len() - rest.len()],
        input: rest,
      },
      Parser::NoParse => Parser::NoParse,
    })
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Parser<'a, A, I: ?Sized> {
  Parsed { data: A, input: &'a I },
  NoParse,
}

impl<'a, A, I: ?Sized> Parser<'a, A, I> {
  pub fn ok(self) -> Option<A> {
    match self {
      Parser::Parsed { data, .. } => Some(data),
      Parser::NoParse => None,
    }
  }

  /// Input left unconsumed, if the parser succeeded.
  pub fn remaining(&self) -> Option<&'a I> {
    match *self {
      Parser::Parsed { input, .. } => Some(input),
      Parser::NoParse => None,
    }
  }

  /// Eliminate the outcome: `failure` is returned verbatim if nothing was parsed; otherwise
  /// `on_success` is called once with the remaining input and the parsed data.
  pub fn fold<R>(self, failure: R, on_success: impl FnOnce(&'a I, A) -> R) -> R {
    match self {
      Parser::Parsed { data, input } => on_success(input, data),
      Parser::NoParse => failure,
    }
  }
}

impl<'a, A, I: ?Sized> From<Option<Parser<'a, A, I>>> for Parser<'a, A, I> {
  fn from(x: Option<Parser<'a, A, I>>) -> Self {
    x.unwrap_or(Parser::NoParse)
  }
}

/// Always succeed with `a`, consuming nothing.
pub fn parse_pure<'a, A, I>(a: A) -> TopParser<'a, impl Fn(&'a I) -> Parser<'a, A, I>, A, I>
where
  A: Clone,
  I: ?Sized + Input,
{
  TopParser::from_input_parser(move |input: &'a I| Parser::Parsed {
    data: a.clone(),
    input,
  })
}

/// Match any single character satisfying `predicate`.
pub fn parse_satisfy<'a>(
  predicate: impl Fn(char) -> bool,
) -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, char, str>, char, str> {
  TopParser::from_input_parser(move |input: &'a str| match input.chars().next() {
    Some(c) if predicate(c) => Parser::Parsed {
      data: c,
      input: &input[c.len_utf8()..],
    },
    _ => Parser::NoParse,
  })
}

/// Match exactly the character `c`.
pub fn parse_char<'a>(c: char) -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, char, str>, char, str> {
  parse_satisfy(move |x| x == c)
}

pub fn parse_any_char<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, char, str>, char, str> {
  parse_satisfy(|_| true)
}

pub fn parse_lexeme<'a>(
  l: &'a str,
) -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, (), str>, (), str> {
  TopParser::from_input_parser(move |input: &'a str| {
    if input.starts_with(l) {
      Parser::Parsed {
        data: (),
        input: &input[l.len()..],
      }
    } else {
      Parser::NoParse
    }
  })
}

/// Take exactly `count` characters.
pub fn parse_take<'a>(
  count: usize,
) -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, &'a str, str>, &'a str, str> {
  TopParser::from_input_parser(move |input: &'a str| {
    let end = match input.char_indices().nth(count) {
      Some((offset, _)) => offset,
      None if input.chars().count() == count => input.len(),
      None => return Parser::NoParse,
    };

    Parser::Parsed {
      data: &input[..end],
      input: &input[end..],
    }
  })
}

/// Longest prefix whose characters all satisfy `predicate`; possibly empty.
pub fn parse_while0<'a>(
  predicate: impl Fn(char) -> bool,
) -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, &'a str, str>, &'a str, str> {
  TopParser::from_input_parser(move |input: &'a str| {
    let end = input
      .char_indices()
      .find(|&(_, c)| !predicate(c))
      .map_or(input.len(), |(offset, _)| offset);

    Parser::Parsed {
      data: &input[..end],
      input: &input[end..],
    }
  })
}

/// Longest non-empty prefix whose characters all satisfy `predicate`.
pub fn parse_while<'a>(
  predicate: impl Fn(char) -> bool,
) -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, &'a str, str>, &'a str, str> {
  parse_while0(predicate).filter_map(|s: &'a str| if s.is_empty() { None } else { Some(s) })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse_u32<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, u32, str>, u32, str> {
    parse_while(|c| c.is_ascii_digit()).filter_map(|digits| digits.parse().ok())
  }

  fn parse_spaces<'a>() -> TopParser<'a, impl Fn(&'a str) -> Parser<'a, (), str>, (), str> {
    parse_while0(char::is_whitespace).const_map(())
  }

  #[test]
  fn parse_u32_test() {
    assert_eq!(
      parse_u32().parse("123lol"),
      Parser::Parsed {
        data: 123,
        input: "lol",
      }
    );
    assert_eq!(parse_u32().parse("lol"), Parser::NoParse);
  }

  #[test]
  fn parse_spaces_test() {
    assert_eq!(
      parse_spaces().parse("       lol"),
      Parser::Parsed {
        data: (),
        input: "lol",
      }
    );
  }

  #[test]
  fn satisfy_test() {
    let parser = parse_satisfy(char::is_alphabetic);

    assert_eq!(
      parser.parse("élan"),
      Parser::Parsed {
        data: 'é',
        input: "lan",
      }
    );
    assert_eq!(parser.parse("1"), Parser::NoParse);
    assert_eq!(parser.parse(""), Parser::NoParse);
  }

  #[test]
  fn pure_test() {
    assert_eq!(
      parse_pure(42).parse("lol"),
      Parser::Parsed {
        data: 42,
        input: "lol",
      }
    );
  }

  #[test]
  fn and_then_test() {
    let parser = parse_u32()
      .and_then(|data| parse_spaces().const_map(data))
      .and_then(|data| parse_u32().map(move |data2| (data, data2)));

    assert_eq!(
      parser.parse("123   456lol"),
      Parser::Parsed {
        data: (123, 456),
        input: "lol",
      }
    );
  }

  #[test]
  fn filter_map_test() {
    let parser = parse_any_char().filter_map(|c| c.to_digit(16));

    assert_eq!(
      parser.parse("f0"),
      Parser::Parsed {
        data: 15,
        input: "0",
      }
    );
    assert_eq!(parser.parse("g0"), Parser::NoParse);
  }

  #[test]
  fn many0_test() {
    let parser = parse_u32().left(parse_spaces()).many0();

    assert_eq!(
      parser.parse("1 2 3 4 lol"),
      Parser::Parsed {
        data: vec![1, 2, 3, 4],
        input: "lol",
      }
    );

    assert_eq!(
      parser.parse("lol"),
      Parser::Parsed {
        data: Vec::new(),
        input: "lol"
      }
    );
  }

  #[test]
  fn many0_stops_on_empty_match() {
    let parser = parse_spaces().many0();

    assert_eq!(
      parser.parse("lol"),
      Parser::Parsed {
        data: Vec::new(),
        input: "lol"
      }
    );
  }

  #[test]
  fn many1_test() {
    let parser = parse_u32().left(parse_spaces()).many1();

    assert_eq!(
      parser.parse("1 2 3 4 lol"),
      Parser::Parsed {
        data: vec![1, 2, 3, 4],
        input: "lol",
      }
    );

    assert_eq!(parser.parse("lol"), Parser::NoParse);
  }

  #[test]
  fn count_test() {
    let parser = parse_any_char().count(3);

    assert_eq!(
      parser.parse("abcd"),
      Parser::Parsed {
        data: vec!['a', 'b', 'c'],
        input: "d",
      }
    );
    assert_eq!(parser.parse("ab"), Parser::NoParse);
  }

  #[test]
  fn opt_test() {
    let parser = parse_spaces().right(parse_u32().opt()).many1();

    assert_eq!(
      parser.parse("    1  2 3   "),
      Parser::Parsed {
        data: vec![Some(1), Some(2), Some(3), None],
        input: "",
      }
    );
  }

  #[test]
  fn lexeme_test() {
    let parser = parse_lexeme("foo");

    assert_eq!(
      parser.parse("foobarzoo"),
      Parser::Parsed {
        data: (),
        input: "barzoo",
      }
    );
    assert_eq!(parser.parse("fobarzoo"), Parser::NoParse);
  }

  #[test]
  fn or_test() {
    let parser = parse_lexeme("foo").or(parse_lexeme("bar"));

    assert_eq!(
      parser.parse("foo"),
      Parser::Parsed {
        data: (),
        input: "",
      }
    );

    assert_eq!(
      parser.parse("bar"),
      Parser::Parsed {
        data: (),
        input: "",
      }
    );

    let parser = parser.many1();

    assert_eq!(
      parser.parse("foobar"),
      Parser::Parsed {
        data: vec![(), ()],
        input: "",
      }
    );
  }

  #[test]
  fn choice_test() {
    let parser = choice![
      parse_lexeme("foo").const_map(1),
      parse_lexeme("bar").const_map(2),
      parse_lexeme("zoo").const_map(3),
    ];

    assert_eq!(
      parser.parse("zoolol"),
      Parser::Parsed {
        data: 3,
        input: "lol",
      }
    );
    assert_eq!(parser.parse("lol"), Parser::NoParse);
  }

  #[test]
  fn sep_by0_test() {
    let parser = parse_u32().sep_by0(parse_char(','));

    assert_eq!(
      parser.parse("1,2,3]"),
      Parser::Parsed {
        data: vec![1, 2, 3],
        input: "]",
      }
    );
    assert_eq!(
      parser.parse("]"),
      Parser::Parsed {
        data: Vec::new(),
        input: "]",
      }
    );
    assert_eq!(parser.parse("1,2,]"), Parser::NoParse);
  }

  #[test]
  fn sep_by1_test() {
    let parser = parse_u32().sep_by1(parse_char(','));

    assert_eq!(
      parser.parse("1;"),
      Parser::Parsed {
        data: vec![1],
        input: ";",
      }
    );
    assert_eq!(parser.parse(";"), Parser::NoParse);
  }

  #[test]
  fn recognize_test() {
    let parser = parse_char('-')
      .opt()
      .right(parse_u32())
      .recognize();

    assert_eq!(
      parser.parse("-123lol"),
      Parser::Parsed {
        data: "-123",
        input: "lol",
      }
    );
  }

  #[test]
  fn take_test() {
    assert_eq!(
      parse_take(3).parse("héhé"),
      Parser::Parsed {
        data: "héh",
        input: "é",
      }
    );
    assert_eq!(
      parse_take(2).parse("hé"),
      Parser::Parsed {
        data: "hé",
        input: "",
      }
    );
    assert_eq!(parse_take(3).parse("hé"), Parser::NoParse);
  }

  #[test]
  fn while_test() {
    let parser = parse_while(char::is_alphabetic);

    assert_eq!(
      parser.parse("été2"),
      Parser::Parsed {
        data: "été",
        input: "2",
      }
    );
    assert_eq!(parser.parse("2"), Parser::NoParse);
    assert_eq!(
      parse_while0(char::is_alphabetic).parse("2"),
      Parser::Parsed {
        data: "",
        input: "2",
      }
    );
  }

  #[test]
  fn zip_test() {
    let parser = parse_u32().zip(parse_take(3), |n, l| (n, l));

    assert_eq!(
      parser.parse("123foolol"),
      Parser::Parsed {
        data: (123, "foo"),
        input: "lol",
      }
    );
  }

  #[test]
  fn ap_test() {
    let parser = parse_u32()
      .map(|a| move |b: u32| a + b)
      .left(parse_char('+'))
      .ap(parse_u32());

    assert_eq!(
      parser.parse("1+2lol"),
      Parser::Parsed {
        data: 3,
        input: "lol",
      }
    );
  }

  #[test]
  fn left_test() {
    let parser = parse_u32().left(parse_spaces());

    assert_eq!(
      parser.parse("123  lol"),
      Parser::Parsed {
        data: 123,
        input: "lol",
      }
    );
  }

  #[test]
  fn right_test() {
    let parser = parse_spaces().right(parse_u32());

    assert_eq!(
      parser.parse("   123lol"),
      Parser::Parsed {
        data: 123,
        input: "lol",
      }
    );
  }

  #[test]
  fn fold_test() {
    let parsed = parse_u32().parse("12lol");
    assert_eq!(parsed.remaining(), Some("lol"));
    assert_eq!(parsed.fold(None, |rest, n| Some((n, rest))), Some((12, "lol")));

    let failed = parse_u32().parse("lol");
    assert_eq!(failed.remaining(), None);
    assert_eq!(failed.fold(-1, |_, n| n as i64), -1);
  }

  #[test]
  fn applicative_person_test() {
    #[derive(Debug, Eq, PartialEq)]
    struct Person {
      name: String,
      age: u32,
    }

    let parser =
      parse_while(char::is_alphabetic)
        .left(parse_spaces())
        .zip(parse_u32(), |name, age| Person {
          name: name.to_owned(),
          age,
        });

    let expected = Person {
      name: "Henry".to_owned(),
      age: 48,
    };
    assert_eq!(
      parser.parse("Henry 48lol"),
      Parser::Parsed {
        data: expected,
        input: "lol",
      }
    );
  }
}
