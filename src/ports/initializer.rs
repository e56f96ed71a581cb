//! The object a mixin delegates to once arguments are resolved.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{AppError, Arguments};

/// Port for the next initializer in a construction chain.
///
/// Receives every positional argument and the keyword arguments after the
/// mixin has filled in its managed settings.
pub trait Initializer: Sized {
    fn initialize(arguments: Arguments) -> Result<Self, AppError>;
}

/// Adapts any deserializable type into an initializer that reads its fields
/// from the forwarded keyword arguments. Positional arguments are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct FromKwargs<T>(pub T);

impl<T> FromKwargs<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned> Initializer for FromKwargs<T> {
    fn initialize(arguments: Arguments) -> Result<Self, AppError> {
        serde_json::from_value(Value::Object(arguments.kwargs))
            .map(FromKwargs)
            .map_err(|e| AppError::Initializer(e.to_string()))
    }
}
