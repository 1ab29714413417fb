use tracing::debug;

/// Default nesting budget for arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// JSON parser configuration.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Config {
  /// Maximum number of arrays and objects nested in one another.
  ///
  /// Going deeper is an ordinary parse failure. `0` only accepts scalar values.
  pub max_depth: usize,
}

impl Config {
  pub fn with_max_depth(max_depth: usize) -> Self {
    Config { max_depth }
  }
}

impl Default for Config {
  fn default() -> Self {
    Config {
      max_depth: DEFAULT_MAX_DEPTH,
    }
  }
}

/// Nesting level of the value currently being parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Depth {
  level: usize,
  max: usize,
}

impl Depth {
  pub(crate) fn root(config: &Config) -> Self {
    Depth {
      level: 0,
      max: config.max_depth,
    }
  }

  /// Depth of the values inside a container opened at this depth.
  pub(crate) fn descend(self) -> Option<Self> {
    if self.level >= self.max {
      debug!(max_depth = self.max, "nesting budget exhausted");
      return None;
    }

    Some(Depth {
      level: self.level + 1,
      ..self
    })
  }
}
