//! @ai:module:intent Lenient view over one raw measurement document
//! @ai:module:layer domain
//! @ai:module:public_api RawRecord
//! @ai:module:stateless true

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

const CIRCUIT_DETAILS_KEY: &str = "circuitDetails";

/// @ai:intent One parsed measurement document as produced by the benchmarking pipeline
/// @ai:effects pure
///
/// Only the positions the schema recognizes are ever read. Anything else in the
/// document is carried along untouched and ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    circuit_name: Option<String>,
    timestamp: Option<String>,
    metrics: Option<Map<String, Value>>,
}

impl RawRecord {
    /// @ai:intent Parse a document from JSON text
    /// @ai:pre content is a JSON object
    /// @ai:effects pure
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(content)?;

        match value {
            Value::Object(root) => Ok(Self::from_object(root)),
            _ => Err(<serde_json::Error as serde::de::Error>::custom(
                "expected a JSON object at the document root",
            )),
        }
    }

    /// @ai:intent Build a record from an already decoded JSON object
    /// @ai:effects pure
    pub fn from_object(mut root: Map<String, Value>) -> Self {
        let circuit_name = match root.remove("circuitName") {
            Some(Value::String(name)) if !name.trim().is_empty() => Some(name),
            _ => None,
        };

        let timestamp = match root.remove("timestamp") {
            Some(Value::String(ts)) => Some(ts),
            _ => None,
        };

        let metrics = match root.remove("metrics") {
            Some(Value::Object(metrics)) => Some(metrics),
            _ => None,
        };

        Self {
            circuit_name,
            timestamp,
            metrics,
        }
    }

    /// @ai:effects pure
    pub fn circuit_name(&self) -> Option<&str> {
        self.circuit_name.as_deref()
    }

    /// @ai:intent Run timestamp, if present and in RFC 3339 form
    /// @ai:effects pure
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?;

        match DateTime::parse_from_rfc3339(raw) {
            Ok(ts) => Some(ts.with_timezone(&Utc)),
            Err(e) => {
                tracing::debug!("Ignoring unparsable timestamp '{}': {}", raw, e);
                None
            }
        }
    }

    /// @ai:effects pure
    pub fn has_metrics(&self) -> bool {
        self.metrics.is_some()
    }

    /// @ai:intent Numeric value at `metrics.<section>.<key>`
    /// @ai:effects pure
    pub fn section_value(&self, section: &str, key: &str) -> Option<f64> {
        self.section(section)?.get(key)?.as_f64()
    }

    /// @ai:intent Numeric value at `metrics.circuitDetails.<key>`
    /// @ai:effects pure
    pub fn circuit_detail(&self, key: &str) -> Option<f64> {
        self.section_value(CIRCUIT_DETAILS_KEY, key)
    }

    /// @ai:intent Error message recorded for a section whose step failed
    /// @ai:effects pure
    pub fn section_error(&self, section: &str) -> Option<&str> {
        self.section(section)?.get("error")?.as_str()
    }

    fn section(&self, section: &str) -> Option<&Map<String, Value>> {
        self.metrics.as_ref()?.get(section)?.as_object()
    }
}
