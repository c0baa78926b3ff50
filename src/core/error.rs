use thiserror::Error;

#[derive(Error, Debug)]
pub enum SizerError {
    #[error("Invalid protobuf field number: {0} (must be between 1 and {max})", max = crate::sizer::MAX_FIELD_NUMBER)]
    InvalidFieldNumber(u32),

    #[error("Unsupported sizer: {0}")]
    UnsupportedSizer(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging initialization error: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for sizer operations
pub type Result<T> = std::result::Result<T, SizerError>;

impl SizerError {
    /// Creates a new unsupported sizer error
    pub fn unsupported<S: Into<String>>(name: S) -> Self {
        Self::UnsupportedSizer(name.into())
    }

    /// Creates a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a new logging error
    pub fn logging<S: Into<String>>(msg: S) -> Self {
        Self::Logging(msg.into())
    }

    /// Returns the error category for metrics/logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidFieldNumber(_) => "validation",
            Self::UnsupportedSizer(_) | Self::Config(_) => "config",
            Self::Logging(_) => "logging",
            Self::Io(_) => "io",
        }
    }
}
