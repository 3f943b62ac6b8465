//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wirebox
#[derive(Error, Debug)]
pub enum Error {
    /// The provider is not a callable, or is a variadic callable
    #[error("Invalid provider kind: {provider}: {reason}")]
    InvalidProviderKind {
        /// Name of the rejected provider
        provider: String,
        /// Why the provider was rejected
        reason: String,
    },

    /// The error-signal return appears somewhere other than the last slot
    #[error(
        "Error position invalid: error return at position {position} of {returns} in {provider}, it must be the last return"
    )]
    ErrorPositionInvalid {
        /// Name of the rejected provider
        provider: String,
        /// Zero-based return position of the offending error signal
        position: usize,
        /// Total number of declared returns
        returns: usize,
    },

    /// An aggregate field carries a malformed tag
    #[error("Invalid tag value: {tag}:{value:?} on field `{field}` of {aggregate}")]
    InvalidTagValue {
        /// Type name of the aggregate declaring the field
        aggregate: String,
        /// Field name
        field: String,
        /// Tag name
        tag: String,
        /// Offending tag value
        value: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Extraction error creation methods
impl Error {
    /// Create an invalid provider kind error
    pub fn invalid_provider_kind<P: Into<String>, R: Into<String>>(provider: P, reason: R) -> Self {
        Self::InvalidProviderKind {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// Create an error position error
    pub fn error_position_invalid<P: Into<String>>(
        provider: P,
        position: usize,
        returns: usize,
    ) -> Self {
        Self::ErrorPositionInvalid {
            provider: provider.into(),
            position,
            returns,
        }
    }

    /// Create an invalid tag value error
    pub fn invalid_tag_value<A, F, T, V>(aggregate: A, field: F, tag: T, value: V) -> Self
    where
        A: Into<String>,
        F: Into<String>,
        T: Into<String>,
        V: Into<String>,
    {
        Self::InvalidTagValue {
            aggregate: aggregate.into(),
            field: field.into(),
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// Whether this error belongs to the extraction taxonomy
    ///
    /// Extraction errors are fatal configuration errors for the offending
    /// provider; the remaining variants come from the infrastructure layer.
    pub fn is_extraction_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidProviderKind { .. }
                | Self::ErrorPositionInvalid { .. }
                | Self::InvalidTagValue { .. }
        )
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// I/O and infrastructure error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::io_with_source(source.to_string(), source)
    }
}
