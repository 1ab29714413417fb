/// Failure of the strict entry point, [`crate::json::parse`].
///
/// Parsers themselves fail with [`crate::Parser::NoParse`]; this type only tells a malformed
/// value apart from a well-formed one followed by garbage.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
  #[error("input is not a well-formed JSON value")]
  Syntax,

  #[error("unexpected trailing input at byte {offset}")]
  TrailingInput { offset: usize },
}
