//! Metrics sizers.
//!
//! Sizes every level of the OTLP metrics hierarchy:
//! request → resource metrics → scope metrics → metric → data point.

use super::{bytes_delta, bytes_delta_for_field};
use crate::core::Result;
use opentelemetry_proto::tonic::collector::metrics::v1::ExportMetricsServiceRequest;
use opentelemetry_proto::tonic::metrics::v1::{
    metric::Data, ExponentialHistogramDataPoint, HistogramDataPoint, Metric, NumberDataPoint,
    ResourceMetrics, ScopeMetrics, SummaryDataPoint,
};
use prost::Message;
use std::fmt::Debug;

/// Size queries over the OTLP metrics hierarchy.
///
/// Implementations are stateless and never fail on a size query. Gauge and
/// Sum both carry [`NumberDataPoint`]s and share one leaf operation.
pub trait MetricsSizer: Send + Sync + Debug {
    /// Size of a whole export request
    fn metrics_size(&self, md: &ExportMetricsServiceRequest) -> usize;

    /// Size of one resource's metrics
    fn resource_metrics_size(&self, rm: &ResourceMetrics) -> usize;

    /// Size of one instrumentation scope's metrics
    fn scope_metrics_size(&self, sm: &ScopeMetrics) -> usize;

    /// Size of one metric. A metric with no data set sizes by its remaining
    /// fields only (zero for the item count).
    fn metric_size(&self, m: &Metric) -> usize;

    /// Size of a Gauge or Sum data point
    fn number_data_point_size(&self, ndp: &NumberDataPoint) -> usize;

    /// Size of a Histogram data point
    fn histogram_data_point_size(&self, hdp: &HistogramDataPoint) -> usize;

    /// Size of an ExponentialHistogram data point
    fn exponential_histogram_data_point_size(&self, ehdp: &ExponentialHistogramDataPoint)
        -> usize;

    /// Size of a Summary data point
    fn summary_data_point_size(&self, sdp: &SummaryDataPoint) -> usize;

    /// How much the enclosing message grows when an item of standalone size
    /// `new_item_size` is appended to one of its repeated fields.
    ///
    /// The byte strategy assumes the repeated field number is at most 15
    /// (single-byte key). See [`MetricsSizer::delta_size_for_field`].
    fn delta_size(&self, new_item_size: usize) -> usize;

    /// [`MetricsSizer::delta_size`] for an arbitrary repeated field number.
    fn delta_size_for_field(&self, field_number: u32, new_item_size: usize) -> Result<usize>;
}

/// Exact protobuf-encoded size, computed by `prost` without encoding.
///
/// Usage with a growing batch:
///
/// ```
/// use otlp_sizer::sizer::{MetricsBytesSizer, MetricsSizer};
/// use opentelemetry_proto::tonic::collector::metrics::v1::ExportMetricsServiceRequest;
/// use opentelemetry_proto::tonic::metrics::v1::ResourceMetrics;
///
/// let sizer = MetricsBytesSizer;
/// let mut batch = ExportMetricsServiceRequest::default();
/// let mut total = sizer.metrics_size(&batch);
///
/// let rm = ResourceMetrics { schema_url: "https://example".into(), ..Default::default() };
/// total += sizer.delta_size(sizer.resource_metrics_size(&rm));
/// batch.resource_metrics.push(rm);
///
/// assert_eq!(total, sizer.metrics_size(&batch));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsBytesSizer;

impl MetricsSizer for MetricsBytesSizer {
    fn metrics_size(&self, md: &ExportMetricsServiceRequest) -> usize {
        md.encoded_len()
    }

    fn resource_metrics_size(&self, rm: &ResourceMetrics) -> usize {
        rm.encoded_len()
    }

    fn scope_metrics_size(&self, sm: &ScopeMetrics) -> usize {
        sm.encoded_len()
    }

    fn metric_size(&self, m: &Metric) -> usize {
        m.encoded_len()
    }

    fn number_data_point_size(&self, ndp: &NumberDataPoint) -> usize {
        ndp.encoded_len()
    }

    fn histogram_data_point_size(&self, hdp: &HistogramDataPoint) -> usize {
        hdp.encoded_len()
    }

    fn exponential_histogram_data_point_size(
        &self,
        ehdp: &ExponentialHistogramDataPoint,
    ) -> usize {
        ehdp.encoded_len()
    }

    fn summary_data_point_size(&self, sdp: &SummaryDataPoint) -> usize {
        sdp.encoded_len()
    }

    #[inline]
    fn delta_size(&self, new_item_size: usize) -> usize {
        bytes_delta(new_item_size)
    }

    fn delta_size_for_field(&self, field_number: u32, new_item_size: usize) -> Result<usize> {
        bytes_delta_for_field(field_number, new_item_size)
    }
}

/// One unit per leaf data point, whatever its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsCountSizer;

impl MetricsSizer for MetricsCountSizer {
    fn metrics_size(&self, md: &ExportMetricsServiceRequest) -> usize {
        md.resource_metrics
            .iter()
            .map(|rm| self.resource_metrics_size(rm))
            .sum()
    }

    fn resource_metrics_size(&self, rm: &ResourceMetrics) -> usize {
        rm.scope_metrics
            .iter()
            .map(|sm| self.scope_metrics_size(sm))
            .sum()
    }

    fn scope_metrics_size(&self, sm: &ScopeMetrics) -> usize {
        sm.metrics.iter().map(|m| self.metric_size(m)).sum()
    }

    fn metric_size(&self, m: &Metric) -> usize {
        match &m.data {
            Some(Data::Gauge(gauge)) => gauge.data_points.len(),
            Some(Data::Sum(sum)) => sum.data_points.len(),
            Some(Data::Histogram(histogram)) => histogram.data_points.len(),
            Some(Data::ExponentialHistogram(histogram)) => histogram.data_points.len(),
            Some(Data::Summary(summary)) => summary.data_points.len(),
            None => 0,
        }
    }

    fn number_data_point_size(&self, _ndp: &NumberDataPoint) -> usize {
        1
    }

    fn histogram_data_point_size(&self, _hdp: &HistogramDataPoint) -> usize {
        1
    }

    fn exponential_histogram_data_point_size(
        &self,
        _ehdp: &ExponentialHistogramDataPoint,
    ) -> usize {
        1
    }

    fn summary_data_point_size(&self, _sdp: &SummaryDataPoint) -> usize {
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
