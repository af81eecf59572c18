use crate::decoding::DeserializationFailure;
use std::path::PathBuf;

/// An error produced while evaluating a single app's configuration.
///
/// Only its message is shown to the user.
pub type AppConfigurationError = Box<dyn std::error::Error + Send + Sync>;

/// An error related to package configuration.
///
/// Every variant renders to one fixed, user-facing message. Underlying I/O
/// errors are kept out of the message and remain reachable through
/// [`std::error::Error::source`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("There is no app called '{0}'.")]
    NoSuchApp(String),
    #[error("This package contains multiple apps. You must provide the 'app-name' argument")]
    MultipleAppsNoneSpecified,
    #[error("Failed to evaluate the '{app}' app's configuration: {source}")]
    ExpressionEvaluationFailed {
        app: String,
        #[source]
        source: AppConfigurationError,
    },
    #[error(
        "Failed to read the configuration file at '{}'. Are you sure that it exists?",
        .path.display()
    )]
    ConfigFileReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to deserialize configuration: {source}")]
    ConfigDeserializeFailed {
        #[source]
        source: DeserializationFailure,
    },
    #[error("Failed to serialize configuration")]
    ConfigSerializeFailed,
    #[error("Failed to write to configuration file at '{}'", .path.display())]
    ConfigWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read contents of old configuration file at '{}'", .path.display())]
    OldConfigReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to deserialize old configuration: {source}")]
    OldConfigDeserializeFailed {
        #[source]
        source: DeserializationFailure,
    },
    #[error("Failed to serialize migrated configuration")]
    MigratedConfigSerializeFailed,
    #[error("Failed to write migrated configuration to file at '{}'", .path.display())]
    MigratedConfigWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigurationError {
    /// The user-facing message for this error. Same as its `Display` output.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The nested decoding failure, for the two deserialization variants.
    pub fn deserialization_failure(&self) -> Option<&DeserializationFailure> {
        match self {
            ConfigurationError::ConfigDeserializeFailed { source }
            | ConfigurationError::OldConfigDeserializeFailed { source } => Some(source),
            _ => None,
        }
    }
}

impl From<DeserializationFailure> for ConfigurationError {
    fn from(source: DeserializationFailure) -> Self {
        ConfigurationError::ConfigDeserializeFailed { source }
    }
}
