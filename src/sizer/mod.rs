//! Size estimation for OTLP batches.
//!
//! A batching stage keeps a running total for the batch it is building and
//! asks a sizer how much each new item weighs. Two strategies exist:
//!
//! - **Bytes**: the exact protobuf-encoded length, as `prost` would write it.
//! - **Items**: one unit per leaf data point (metrics) or log record (logs).
//!
//! Both strategies expose a `delta_size` primitive so the caller can grow its
//! running total in O(1) per appended item instead of re-measuring the whole
//! batch.
//!
//! # Example
//!
//! ```
//! use otlp_sizer::sizer::{Sizer, SizerType};
//! use opentelemetry_proto::tonic::collector::metrics::v1::ExportMetricsServiceRequest;
//!
//! let sizer = Sizer::new(SizerType::Items);
//! let request = ExportMetricsServiceRequest::default();
//! assert_eq!(sizer.metrics().metrics_size(&request), 0);
//! ```

pub mod logs;
pub mod metrics;

pub use logs::{LogsBytesSizer, LogsCountSizer, LogsSizer};
pub use metrics::{MetricsBytesSizer, MetricsCountSizer, MetricsSizer};

use crate::core::{Result, SizerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest field number the protobuf wire format allows (2^29 - 1).
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Largest field number whose length-delimited key fits in one byte.
pub const MAX_SINGLE_BYTE_TAG_FIELD: u32 = 15;

/// Which unit a batch is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizerType {
    /// Exact encoded protobuf bytes
    Bytes,
    /// Leaf items: data points for metrics, records for logs
    #[default]
    Items,
}

impl SizerType {
    /// Configuration name of this sizer
    pub fn as_str(&self) -> &'static str {
        match self {
            SizerType::Bytes => "bytes",
            SizerType::Items => "items",
        }
    }
}

impl fmt::Display for SizerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizerType {
    type Err = SizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bytes" => Ok(SizerType::Bytes),
            "items" => Ok(SizerType::Items),
            // Whole-request counting has no per-item weight to compute.
            "requests" => Err(SizerError::unsupported(
                "requests (counts whole requests, no per-item sizer)",
            )),
            other => Err(SizerError::unsupported(other)),
        }
    }
}

/// A configured sizer: one strategy per signal, chosen at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizer {
    /// Byte-accurate sizing
    Bytes {
        /// Metrics strategy
        metrics: MetricsBytesSizer,
        /// Logs strategy
        logs: LogsBytesSizer,
    },
    /// Item-count sizing
    Items {
        /// Metrics strategy
        metrics: MetricsCountSizer,
        /// Logs strategy
        logs: LogsCountSizer,
    },
}

impl Sizer {
    /// Build the sizer for the given strategy
    pub fn new(kind: SizerType) -> Self {
        tracing::debug!(sizer = %kind, "Creating sizer");
        match kind {
            SizerType::Bytes => Sizer::Bytes {
                metrics: MetricsBytesSizer,
                logs: LogsBytesSizer,
            },
            SizerType::Items => Sizer::Items {
                metrics: MetricsCountSizer,
                logs: LogsCountSizer,
            },
        }
    }

    /// Strategy this sizer was built with
    pub fn kind(&self) -> SizerType {
        match self {
            Sizer::Bytes { .. } => SizerType::Bytes,
            Sizer::Items { .. } => SizerType::Items,
        }
    }

    /// Metrics sizer for this strategy
    pub fn metrics(&self) -> &dyn MetricsSizer {
        match self {
            Sizer::Bytes { metrics, .. } => metrics,
            Sizer::Items { metrics, .. } => metrics,
        }
    }

    /// Logs sizer for this strategy
    pub fn logs(&self) -> &dyn LogsSizer {
        match self {
            Sizer::Bytes { logs, .. } => logs,
            Sizer::Items { logs, .. } => logs,
        }
    }
}

impl Default for Sizer {
    fn default() -> Self {
        Sizer::new(SizerType::default())
    }
}

/// Number of bytes `value` takes as a base-128 varint. Zero still costs one byte.
#[inline]
pub fn varint_len(value: usize) -> usize {
    prost::encoding::encoded_len_varint(value as u64)
}

/// Number of bytes the key of a length-delimited field takes on the wire.
///
/// Fails for field number 0 and for anything above [`MAX_FIELD_NUMBER`].
pub fn tag_len(field_number: u32) -> Result<usize> {
    if field_number == 0 || field_number > MAX_FIELD_NUMBER {
        return Err(SizerError::InvalidFieldNumber(field_number));
    }
    Ok(prost::encoding::key_len(field_number))
}

/// Bytes a repeated message field grows by when one more element of
/// `new_item_size` encoded bytes is appended: key, length prefix, payload.
///
/// Assumes a single-byte key, which holds for field numbers up to
/// [`MAX_SINGLE_BYTE_TAG_FIELD`]. Every repeated field of the OTLP export
/// hierarchy is in that range. Use [`bytes_delta_for_field`] otherwise.
#[inline]
pub fn bytes_delta(new_item_size: usize) -> usize {
    1 + new_item_size + varint_len(new_item_size)
}

/// [`bytes_delta`] with the key width computed from the field number.
pub fn bytes_delta_for_field(field_number: u32, new_item_size: usize) -> Result<usize> {
    let key = tag_len(field_number)?;
    if field_number > MAX_SINGLE_BYTE_TAG_FIELD {
        tracing::trace!(field_number, key_bytes = key, "Multi-byte key in delta size");
    }
    Ok(key + new_item_size + varint_len(new_item_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_varint_len_boundaries() {
        assert_eq!(varint_len(0), 1);
        assert_eq!(varint_len(1), 1);
        assert_eq!(varint_len(127), 1);
        assert_eq!(varint_len(128), 2);
        assert_eq!(varint_len(16_383), 2);
        assert_eq!(varint_len(16_384), 3);
        assert_eq!(varint_len(2_097_151), 3);
        assert_eq!(varint_len(2_097_152), 4);
    }

    #[test]
    fn test_bytes_delta() {
        assert_eq!(bytes_delta(0), 2);
        assert_eq!(bytes_delta(1), 3);
        assert_eq!(bytes_delta(127), 129);
        assert_eq!(bytes_delta(128), 131);
        assert_eq!(bytes_delta(16_383), 16_386);
        assert_eq!(bytes_delta(16_384), 16_388);
    }

    #[test]
    fn test_tag_len() {
        assert_eq!(tag_len(1).unwrap(), 1);
        assert_eq!(tag_len(15).unwrap(), 1);
        assert_eq!(tag_len(16).unwrap(), 2);
        assert_eq!(tag_len(2047).unwrap(), 2);
        assert_eq!(tag_len(2048).unwrap(), 3);
        assert_eq!(tag_len(MAX_FIELD_NUMBER).unwrap(), 5);
    }

    #[test]
    fn test_tag_len_rejects_out_of_range() {
        assert!(matches!(tag_len(0), Err(SizerError::InvalidFieldNumber(0))));
        assert!(matches!(
            tag_len(MAX_FIELD_NUMBER + 1),
            Err(SizerError::InvalidFieldNumber(_))
        ));
    }

    #[test]
    fn test_delta_for_field_matches_single_byte_form() {
        for size in [0, 1, 127, 128, 16_383, 16_384] {
            assert_eq!(bytes_delta_for_field(1, size).unwrap(), bytes_delta(size));
            assert_eq!(bytes_delta_for_field(15, size).unwrap(), bytes_delta(size));
            assert_eq!(bytes_delta_for_field(16, size).unwrap(), bytes_delta(size) + 1);
        }
    }

    #[test]
    fn test_sizer_type_parsing() {
        assert_eq!("bytes".parse::<SizerType>().unwrap(), SizerType::Bytes);
        assert_eq!(" Items ".parse::<SizerType>().unwrap(), SizerType::Items);
        assert!(matches!(
            "requests".parse::<SizerType>(),
            Err(SizerError::UnsupportedSizer(_))
        ));
        assert!("megabytes".parse::<SizerType>().is_err());
        assert_eq!(SizerType::Bytes.to_string(), "bytes");
    }

    #[test]
    fn test_sizer_selection() {
        assert_eq!(Sizer::new(SizerType::Bytes).kind(), SizerType::Bytes);
        assert_eq!(Sizer::new(SizerType::Items).kind(), SizerType::Items);
        assert_eq!(Sizer::default().kind(), SizerType::Items);

        assert_eq!(Sizer::new(SizerType::Items).metrics().delta_size(7), 7);
        assert_eq!(Sizer::new(SizerType::Bytes).metrics().delta_size(7), 9);
        assert_eq!(Sizer::new(SizerType::Items).logs().delta_size(7), 7);
        assert_eq!(Sizer::new(SizerType::Bytes).logs().delta_size(7), 9);
    }
}
