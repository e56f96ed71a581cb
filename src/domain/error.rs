use std::io;

use thiserror::Error;

/// Library-wide error type for setting-mixin operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The factory was called without any setting names.
    #[error(
        "setting_mixin_factory() expects to receive the name of at least one setting. \
         Please provide the keyword that the setting value will be assigned to."
    )]
    MissingSettingNames,

    /// The factory was called with several names and a shared lookup key or default.
    #[error(
        "When setting_mixin_factory() is called with {count} setting names it doesn't \
         expect to handle the setting label and default as well."
    )]
    MultipleSettingsWithDefaults { count: usize },

    /// Setting name cannot be used as a keyword argument.
    #[error(
        "Invalid setting name '{0}': must start with a letter or underscore and contain only \
         alphanumerics or underscores"
    )]
    InvalidSettingName(String),

    /// A managed setting is missing its lookup key or default.
    #[error("Setting '{name}' has no '{attribute}' attribute")]
    IncompleteSetting { name: String, attribute: String },

    /// An attribute value has the wrong shape.
    #[error("Invalid attribute '{attribute}': {reason}")]
    InvalidAttribute { attribute: String, reason: String },

    /// `get_setting` was asked for a name the mixin knows nothing about.
    #[error("Unknown setting '{0}': no lookup key or default is defined for it")]
    UnknownSetting(String),

    /// The delegation target rejected the forwarded arguments.
    #[error("Initializer rejected arguments: {0}")]
    Initializer(String),

    /// File extension is not a supported settings or declaration format.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers that bucket failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::MissingSettingNames
            | AppError::MultipleSettingsWithDefaults { .. }
            | AppError::InvalidSettingName(_)
            | AppError::IncompleteSetting { .. }
            | AppError::InvalidAttribute { .. }
            | AppError::Initializer(_)
            | AppError::UnsupportedFormat(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_)
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::UnknownSetting(_) => io::ErrorKind::NotFound,
        }
    }
}
