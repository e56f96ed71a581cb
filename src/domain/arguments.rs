//! Construction arguments forwarded through a mixin to its initializer.

use serde_json::Value;

/// Keyword arguments, keyed by name.
pub type Kwargs = serde_json::Map<String, Value>;

/// Positional and keyword arguments for one construction call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    pub args: Vec<Value>,
    pub kwargs: Kwargs,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing keyword map with no positional arguments.
    pub fn from_kwargs(kwargs: Kwargs) -> Self {
        Self { args: Vec::new(), kwargs }
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Set a keyword argument, replacing any previous value for `name`.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(name.into(), value.into());
        self
    }
}

/// Interpret a raw string the way a shell user means it: valid JSON stays
/// JSON (`13`, `true`, `["a"]`), anything else becomes a string.
pub fn parse_literal(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
