//! Error handling and configuration shared by every sizer.

#![warn(missing_docs)]

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{Config, ConfigBuilder, LogLevel, LoggingConfig, SizerConfig};
pub use error::{Result, SizerError};
