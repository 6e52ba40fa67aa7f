//! Turns received payloads into console lines.
use super::style::style_for;
use crate::types::{LogBatch, LogRecord};
use colored::Colorize;
use std::fmt::Display;

/// The colored `[timestamp] LEVEL: message` line for one record.
pub fn record_line(record: &LogRecord) -> String {
    let level = record.level();
    format!("[{}] {}: {}", record.timestamp(), level, record.message())
        .color(style_for(level))
        .to_string()
}

/// Lines for a record posted on its own, including data and device details.
pub fn single_record(record: &LogRecord) -> Vec<String> {
    let mut lines = vec![record_line(record)];

    if let Some(data) = record.data_payload() {
        let pretty = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
        lines.push(format!("    Data: {}", pretty));
    }

    let device = record
        .device_info
        .as_ref()
        .filter(|device| !device.is_empty());
    if let Some(device) = device {
        lines.push(format!(
            "    Device: {} {}",
            device.platform(),
            device.version()
        ));
    }

    lines
}

/// Lines for a batch: a summary, then one line per record in order.
///
/// Data and device details are not printed for batched records.
pub fn batch(batch: &LogBatch) -> Vec<String> {
    std::iter::once(format!("📦 Received batch of {} logs", batch.logs.len()))
        .chain(batch.logs.iter().map(record_line))
        .collect()
}

pub fn request_error(error: &dyn Display) -> String {
    format!("❌ Error handling request: {}", error)
}
