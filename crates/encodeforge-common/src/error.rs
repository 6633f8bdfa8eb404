//! Common error types used throughout encodeforge.
//!
//! Every provider operation reports failures through [`Error`]. Callers that
//! need to branch on the broad category of a failure (validation, missing
//! entity, bad destination, remote call) should use [`Error::kind`] instead
//! of matching individual variants.

/// Broad failure category, stable across providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request itself was invalid. Never retried.
    Validation,
    /// The referenced entity does not exist.
    NotFound,
    /// The configured output destination could not be turned into a URL.
    InvalidDestination,
    /// The remote encoding service call failed.
    Transport,
    /// Storage or other internal failure.
    Internal,
}

/// Common error type for encodeforge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A preset was submitted without a name.
    #[error("preset name missing")]
    PresetNameMissing,

    /// No local preset is stored under the requested name.
    #[error("local preset not found")]
    LocalPresetNotFound,

    /// A preset map has no entry for the provider handling the job.
    #[error("preset not found in preset map for provider {0}")]
    PresetMapNotFound(String),

    /// No provider is registered under the requested name.
    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    /// The provider configuration is unusable.
    #[error("invalid provider config: {0}")]
    InvalidConfig(String),

    /// The destination template is malformed.
    #[error("invalid destination: {0}")]
    InvalidDestination(String),

    /// The remote service call failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a new InvalidDestination error.
    pub fn invalid_destination<S: Into<String>>(msg: S) -> Self {
        Self::InvalidDestination(msg.into())
    }

    /// Create a new Transport error.
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new Database error.
    pub fn database<S: Into<String>>(msg: S) -> Self {
        Self::Database(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new InvalidConfig error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PresetNameMissing
            | Self::PresetMapNotFound(_)
            | Self::InvalidConfig(_)
            | Self::InvalidInput(_) => ErrorKind::Validation,
            Self::LocalPresetNotFound | Self::ProviderNotFound(_) => ErrorKind::NotFound,
            Self::InvalidDestination(_) => ErrorKind::InvalidDestination,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Database(_) => ErrorKind::Internal,
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
