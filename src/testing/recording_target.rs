use serde_json::Value;

use crate::domain::{AppError, Arguments, Kwargs};
use crate::ports::Initializer;

/// Initializer that keeps whatever it receives, for asserting on forwarded arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingTarget {
    pub args: Vec<Value>,
    pub kwargs: Kwargs,
}

impl Initializer for RecordingTarget {
    fn initialize(arguments: Arguments) -> Result<Self, AppError> {
        Ok(Self { args: arguments.args, kwargs: arguments.kwargs })
    }
}
