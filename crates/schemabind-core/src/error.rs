//! Error types for schemabind generation

use thiserror::Error;

/// Result type alias for generation operations
pub type BindResult<T> = Result<T, BindError>;

/// Error type for generation operations
#[derive(Error, Debug)]
pub enum BindError {
    /// Strategy name was empty or not present in the registry
    #[error("unknown strategy: '{0}'")]
    UnknownStrategy(String),

    /// A required configuration value was not supplied at all
    #[error("missing configuration: {0}")]
    MissingConfiguration(String),

    /// A configuration value was supplied but could not be used
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A collection-only operation was invoked on a single-valued field
    #[error("field '{field}' is not a collection")]
    NotACollection { field: String },

    /// The type model handed over by the schema front end is inconsistent
    #[error("invalid type model: {0}")]
    InvalidModel(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Generation of a single type was stopped
    #[error("generation of '{type_name}' aborted: {reason}")]
    GenerationAborted { type_name: String, reason: String },

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl BindError {
    /// Returns a stable numeric code for reporting
    pub fn error_code(&self) -> u32 {
        match self {
            BindError::UnknownStrategy(_) => 1,
            BindError::MissingConfiguration(_) => 2,
            BindError::InvalidConfiguration(_) => 3,
            BindError::NotACollection { .. } => 4,
            BindError::InvalidModel(_) => 5,
            BindError::Serialization(_) => 6,
            BindError::GenerationAborted { .. } => 7,
            BindError::Internal(_) => 8,
        }
    }

    /// Whether this error belongs to the configuration class (fatal, never retried)
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            BindError::UnknownStrategy(_)
                | BindError::MissingConfiguration(_)
                | BindError::InvalidConfiguration(_)
        )
    }
}

impl From<serde_json::Error> for BindError {
    fn from(err: serde_json::Error) -> Self {
        BindError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for BindError {
    fn from(err: toml::de::Error) -> Self {
        BindError::InvalidConfiguration(err.to_string())
    }
}
