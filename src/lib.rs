//! OTLP sizer - weight of telemetry batches for export pipelines.
//!
//! A batching stage needs to know how heavy a batch is before flushing it to
//! a sink that limits payload bytes or item counts. This crate measures OTLP
//! metrics and logs in either unit without encoding them.
//!
//! # Architecture
//!
//! - `sizer`: the size-query contract and its byte and item strategies
//! - `core`: errors and configuration
//! - `telemetry`: logging setup
//!
//! # Example
//!
//! ```
//! use otlp_sizer::core::ConfigBuilder;
//! use otlp_sizer::sizer::SizerType;
//! use opentelemetry_proto::tonic::metrics::v1::ResourceMetrics;
//!
//! let config = ConfigBuilder::new().sizer(SizerType::Bytes).build().unwrap();
//! let sizer = config.build_sizer();
//!
//! let mut running_total = 0;
//! let rm = ResourceMetrics::default();
//! running_total += sizer.metrics().delta_size(sizer.metrics().resource_metrics_size(&rm));
//! assert_eq!(running_total, 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod core;
pub mod sizer;
pub mod telemetry;

// Re-export core types for convenience
pub use crate::core::{Config, Result, SizerError};
pub use crate::sizer::{Sizer, SizerType};
