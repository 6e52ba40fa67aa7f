//! Wire types for the payloads posted by the mobile client.
use chrono::Local;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Level assumed when a record does not carry one.
pub const DEFAULT_LEVEL: &str = "INFO";

/// A text field that tolerates non-string JSON scalars.
///
/// Clients occasionally send numeric timestamps or boolean messages; those
/// are kept as their JSON text instead of failing the whole request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text(String);

impl Text {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => Text(text),
            other => Text(other.to_string()),
        })
    }
}

/// Device metadata attached to a single log record.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DeviceInfo {
    pub platform: Option<Text>,
    pub version: Option<Text>,
}

impl DeviceInfo {
    pub fn platform(&self) -> &str {
        self.platform.as_ref().map_or("Unknown", Text::as_str)
    }

    pub fn version(&self) -> &str {
        self.version.as_ref().map_or("", Text::as_str)
    }

    /// True when the client sent neither a platform nor a version.
    pub fn is_empty(&self) -> bool {
        self.platform.is_none() && self.version.is_none()
    }
}

/// One structured debug message sent by the client.
///
/// Every field is optional; the accessors apply the defaults used when
/// rendering.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub timestamp: Option<Text>,
    pub level: Option<Text>,
    pub message: Option<Text>,
    /// Arbitrary structured payload.
    pub data: Option<Value>,
    #[serde(alias = "device_info")]
    pub device_info: Option<DeviceInfo>,
}

impl LogRecord {
    /// The client timestamp, or the current local time when absent.
    pub fn timestamp(&self) -> String {
        self.timestamp
            .as_ref()
            .map(|ts| ts.as_str().to_string())
            .unwrap_or_else(local_timestamp)
    }

    pub fn level(&self) -> &str {
        self.level.as_ref().map_or(DEFAULT_LEVEL, Text::as_str)
    }

    pub fn message(&self) -> &str {
        self.message.as_ref().map_or("", Text::as_str)
    }

    /// The data payload, if there is anything in it worth printing.
    pub fn data_payload(&self) -> Option<&Value> {
        self.data.as_ref().filter(|data| match data {
            Value::Null => false,
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::String(text) => !text.is_empty(),
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64() != Some(0.0),
        })
    }
}

/// An ordered collection of records submitted in one request.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct LogBatch {
    #[serde(default)]
    pub logs: Vec<LogRecord>,
}

fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use serde_json::json;

    fn record(value: Value) -> LogRecord {
        serde_json::from_value(value).expect("record should deserialize")
    }

    #[test]
    fn test_defaults_for_empty_record() {
        let record = record(json!({}));
        assert_eq!(record.level(), "INFO");
        assert_eq!(record.message(), "");
        assert!(record.data_payload().is_none());
        assert!(record.device_info.is_none());

        let timestamp = record.timestamp();
        assert!(
            NaiveDateTime::parse_from_str(&timestamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok(),
            "generated timestamp should be ISO-8601 local time: {timestamp}"
        );
    }

    #[test]
    fn test_client_fields_are_kept() {
        let record = record(json!({
            "timestamp": "2024-05-01T10:00:00Z",
            "level": "AI",
            "message": "prompt sent",
        }));
        assert_eq!(record.timestamp(), "2024-05-01T10:00:00Z");
        assert_eq!(record.level(), "AI");
        assert_eq!(record.message(), "prompt sent");
    }

    #[test]
    fn test_non_string_scalars_are_rendered_as_json_text() {
        let record = record(json!({ "timestamp": 1714557600, "message": true }));
        assert_eq!(record.timestamp(), "1714557600");
        assert_eq!(record.message(), "true");
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let record = record(json!({ "level": null, "message": null, "data": null }));
        assert_eq!(record.level(), "INFO");
        assert_eq!(record.message(), "");
        assert!(record.data_payload().is_none());
    }

    #[test]
    fn test_empty_data_is_not_printable() {
        assert!(record(json!({ "data": {} })).data_payload().is_none());
        assert!(record(json!({ "data": [] })).data_payload().is_none());
        assert!(record(json!({ "data": { "x": 1 } })).data_payload().is_some());
    }

    #[test]
    fn test_falsy_scalar_data_is_not_printable() {
        assert!(record(json!({ "data": false })).data_payload().is_none());
        assert!(record(json!({ "data": 0 })).data_payload().is_none());
        assert!(record(json!({ "data": 0.0 })).data_payload().is_none());
        assert!(record(json!({ "data": true })).data_payload().is_some());
        assert!(record(json!({ "data": 3 })).data_payload().is_some());
    }

    #[test]
    fn test_device_info_accepts_both_spellings() {
        let camel = record(json!({ "deviceInfo": { "platform": "ios", "version": "17.4" } }));
        let snake = record(json!({ "device_info": { "platform": "android" } }));

        let camel = camel.device_info.expect("camelCase device info");
        assert_eq!(camel.platform(), "ios");
        assert_eq!(camel.version(), "17.4");

        let snake = snake.device_info.expect("snake_case device info");
        assert_eq!(snake.platform(), "android");
        assert_eq!(snake.version(), "");
    }

    #[test]
    fn test_batch_defaults_to_empty() {
        let batch: LogBatch = serde_json::from_value(json!({})).unwrap();
        assert!(batch.logs.is_empty());
    }
}
