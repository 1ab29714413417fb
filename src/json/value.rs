use indexmap::IndexMap;

/// Members of a JSON object, in the order their keys first appear.
pub type Map = IndexMap<String, Value>;

/// A decoded JSON value.
///
/// All numbers are double-precision floats; there is no integer variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
  Null,
  Bool(bool),
  Number(f64),
  String(String),
  Array(Vec<Value>),
  Object(Map),
}

impl Value {
  pub fn is_null(&self) -> bool {
    matches!(self, Value::Null)
  }

  pub fn as_bool(&self) -> Option<bool> {
    match *self {
      Value::Bool(b) => Some(b),
      _ => None,
    }
  }

  pub fn as_f64(&self) -> Option<f64> {
    match *self {
      Value::Number(n) => Some(n),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::String(s) => Some(s.as_str()),
      _ => None,
    }
  }

  pub fn as_array(&self) -> Option<&[Value]> {
    match self {
      Value::Array(values) => Some(values.as_slice()),
      _ => None,
    }
  }

  pub fn as_object(&self) -> Option<&Map> {
    match self {
      Value::Object(members) => Some(members),
      _ => None,
    }
  }

  /// Value of the member `key`, if `self` is an object holding it.
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.as_object().and_then(|members| members.get(key))
  }
}

impl From<bool> for Value {
  fn from(b: bool) -> Self {
    Value::Bool(b)
  }
}

impl From<f64> for Value {
  fn from(n: f64) -> Self {
    Value::Number(n)
  }
}

impl From<String> for Value {
  fn from(s: String) -> Self {
    Value::String(s)
  }
}

impl<'a> From<&'a str> for Value {
  fn from(s: &'a str) -> Self {
    Value::String(s.to_owned())
  }
}

impl From<Vec<Value>> for Value {
  fn from(values: Vec<Value>) -> Self {
    Value::Array(values)
  }
}

impl From<Map> for Value {
  fn from(members: Map) -> Self {
    Value::Object(members)
  }
}
