//! Common test utilities and fixtures.

#![allow(dead_code)]

use opentelemetry_proto::tonic::collector::metrics::v1::ExportMetricsServiceRequest;
use opentelemetry_proto::tonic::common::v1::{any_value::Value, AnyValue, InstrumentationScope, KeyValue};
use opentelemetry_proto::tonic::metrics::v1::{
    metric::Data, number_data_point::Value as PointValue, Gauge, Metric, NumberDataPoint,
    ResourceMetrics, ScopeMetrics,
};
use opentelemetry_proto::tonic::resource::v1::Resource;

/// Builds export requests shaped as resources × scopes × gauge metrics × points.
pub struct TestMetricsBuilder {
    resources: usize,
    scopes_per_resource: usize,
    metrics_per_scope: usize,
    points_per_metric: usize,
    attribute_len: usize,
}

impl TestMetricsBuilder {
    pub fn new() -> Self {
        Self {
            resources: 1,
            scopes_per_resource: 1,
            metrics_per_scope: 1,
            points_per_metric: 1,
            attribute_len: 8,
        }
    }

    pub fn resources(mut self, n: usize) -> Self {
        self.resources = n;
        self
    }

    pub fn scopes(mut self, n: usize) -> Self {
        self.scopes_per_resource = n;
        self
    }

    pub fn metrics(mut self, n: usize) -> Self {
        self.metrics_per_scope = n;
        self
    }

    pub fn points(mut self, n: usize) -> Self {
        self.points_per_metric = n;
        self
    }

    /// Length of the string attribute on each point, to push sizes across
    /// varint boundaries.
    pub fn attribute_len(mut self, n: usize) -> Self {
        self.attribute_len = n;
        self
    }

    pub fn build(&self) -> ExportMetricsServiceRequest {
        ExportMetricsServiceRequest {
            resource_metrics: (0..self.resources).map(|r| self.resource(r)).collect(),
        }
    }

    fn resource(&self, r: usize) -> ResourceMetrics {
        ResourceMetrics {
            resource: Some(Resource {
                attributes: vec![string_attr("service.name", &format!("service-{r}"))],
                ..Default::default()
            }),
            scope_metrics: (0..self.scopes_per_resource).map(|s| self.scope(s)).collect(),
            schema_url: String::new(),
        }
    }

    fn scope(&self, s: usize) -> ScopeMetrics {
        ScopeMetrics {
            scope: Some(InstrumentationScope {
                name: format!("scope-{s}"),
                version: "1.0.0".to_string(),
                ..Default::default()
            }),
            metrics: (0..self.metrics_per_scope).map(|m| self.metric(m)).collect(),
            schema_url: String::new(),
        }
    }

    fn metric(&self, m: usize) -> Metric {
        Metric {
            name: format!("metric_{m}"),
            unit: "ms".to_string(),
            data: Some(Data::Gauge(Gauge {
                data_points: (0..self.points_per_metric)
                    .map(|p| gauge_point(p as f64, self.attribute_len))
                    .collect(),
            })),
            ..Default::default()
        }
    }
}

pub fn string_attr(key: &str, value: &str) -> KeyValue {
    KeyValue {
        key: key.to_string(),
        value: Some(AnyValue {
            value: Some(Value::StringValue(value.to_string())),
        }),
    }
}

pub fn gauge_point(value: f64, attribute_len: usize) -> NumberDataPoint {
    NumberDataPoint {
        attributes: vec![string_attr("host", &"h".repeat(attribute_len))],
        time_unix_nano: 1_700_000_000_000_000_000,
        value: Some(PointValue::AsDouble(value)),
        ..Default::default()
    }
}
