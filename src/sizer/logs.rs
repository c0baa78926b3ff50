//! Logs sizers.
//!
//! Same contract shape as the metrics sizers, over the OTLP logs hierarchy:
//! request → resource logs → scope logs → log record. Kept as separate types
//! so the two data models never share sizing state.

use super::{bytes_delta, bytes_delta_for_field};
use crate::core::Result;
use opentelemetry_proto::tonic::collector::logs::v1::ExportLogsServiceRequest;
use opentelemetry_proto::tonic::logs::v1::{LogRecord, ResourceLogs, ScopeLogs};
use prost::Message;
use std::fmt::Debug;

/// Size queries over the OTLP logs hierarchy.
pub trait LogsSizer: Send + Sync + Debug {
    /// Size of a whole export request
    fn logs_size(&self, ld: &ExportLogsServiceRequest) -> usize;

    /// Size of one resource's logs
    fn resource_logs_size(&self, rl: &ResourceLogs) -> usize;

    /// Size of one instrumentation scope's logs
    fn scope_logs_size(&self, sl: &ScopeLogs) -> usize;

    /// Size of a single log record
    fn log_record_size(&self, lr: &LogRecord) -> usize;

    /// Growth of the enclosing message when an item of standalone size
    /// `new_item_size` is appended (single-byte key for the byte strategy).
    fn delta_size(&self, new_item_size: usize) -> usize;

    /// [`LogsSizer::delta_size`] for an arbitrary repeated field number.
    fn delta_size_for_field(&self, field_number: u32, new_item_size: usize) -> Result<usize>;
}

/// Exact protobuf-encoded size of logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogsBytesSizer;

impl LogsSizer for LogsBytesSizer {
    fn logs_size(&self, ld: &ExportLogsServiceRequest) -> usize {
        ld.encoded_len()
    }

    fn resource_logs_size(&self, rl: &ResourceLogs) -> usize {
        rl.encoded_len()
    }

    fn scope_logs_size(&self, sl: &ScopeLogs) -> usize {
        sl.encoded_len()
    }

    fn log_record_size(&self, lr: &LogRecord) -> usize {
        lr.encoded_len()
    }

    #[inline]
    fn delta_size(&self, new_item_size: usize) -> usize {
        bytes_delta(new_item_size)
    }

    fn delta_size_for_field(&self, field_number: u32, new_item_size: usize) -> Result<usize> {
        bytes_delta_for_field(field_number, new_item_size)
    }
}

/// One unit per log record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogsCountSizer;

impl LogsSizer for LogsCountSizer {
    fn logs_size(&self, ld: &ExportLogsServiceRequest) -> usize {
        ld.resource_logs
            .iter()
            .map(|rl| self.resource_logs_size(rl))
            .sum()
    }

    fn resource_logs_size(&self, rl: &ResourceLogs) -> usize {
        rl.scope_logs.iter().map(|sl| self.scope_logs_size(sl)).sum()
    }

    fn scope_logs_size(&self, sl: &ScopeLogs) -> usize {
        sl.log_records.len()
    }

    fn log_record_size(&self, _lr: &LogRecord) -> usize {
        1
    }

    #[inline]
    fn delta_size(&self, new_item_size: usize) -> usize {
        new_item_size
    }

    fn delta_size_for_field(&self, _field_number: u32, new_item_size: usize) -> Result<usize> {
        Ok(new_item_size)
    }
}
