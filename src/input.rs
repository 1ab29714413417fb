/// Class of inputs a parser can consume from the front.
///
/// Parsers never mutate their input: they hand back the unconsumed suffix. Comparing the length
/// of two suffixes of the same input is then enough to know whether anything was consumed.
pub trait Input {
  /// Number of units (bytes for `str`, items for slices) left to consume.
  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Whether `after`, a suffix of `self`, is the very same position as `self`.
  fn same_position(&self, after: &Self) -> bool {
    self.len() == after.len()
  }
}

impl Input for str {
  fn len(&self) -> usize {
    str::len(self)
  }
}

impl<T> Input for [T] {
  fn len(&self) -> usize {
    <[T]>::len(self)
  }
}
