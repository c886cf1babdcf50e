//! Rendering of dispatch confirmations for the demo driver.

use crate::config::OutputFormat;
use crate::notification::ChannelKind;
use chrono::Utc;
use serde::Serialize;

/// A single dispatched confirmation, as emitted by the demo driver.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DispatchRecord {
    /// ISO 8601 timestamp when the dispatch happened.
    pub timestamp: String,
    /// The channel kind the dispatch went through.
    pub kind: ChannelKind,
    pub recipient: String,
    pub message: String,
    /// The confirmation text returned by the channel.
    pub confirmation: String,
}

impl DispatchRecord {
    pub fn new(kind: ChannelKind, recipient: &str, message: &str, confirmation: String) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            kind,
            recipient: recipient.to_string(),
            message: message.to_string(),
            confirmation,
        }
    }
}

/// A trait for rendering a dispatch record into one output line.
pub trait RecordFormatter: Send + Sync {
    fn format(&self, record: &DispatchRecord) -> String;
}

/// Emits the bare confirmation text.
pub struct PlainTextFormatter;

impl RecordFormatter for PlainTextFormatter {
    fn format(&self, record: &DispatchRecord) -> String {
        record.confirmation.clone()
    }
}

/// Emits the whole record as one JSON object per line.
pub struct JsonFormatter;

impl RecordFormatter for JsonFormatter {
    fn format(&self, record: &DispatchRecord) -> String {
        serde_json::to_string(record).unwrap_or_default()
    }
}

/// Picks the formatter matching the configured output format.
pub fn formatter_for(format: &OutputFormat) -> Box<dyn RecordFormatter> {
    match format {
        OutputFormat::PlainText => Box::new(PlainTextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DispatchRecord {
        DispatchRecord {
            timestamp: "2026-08-07T12:00:00+00:00".to_string(),
            kind: ChannelKind::Sms,
            recipient: "+1234567890".to_string(),
            message: "Hello".to_string(),
            confirmation: "Sending SMS to +1234567890: Hello".to_string(),
        }
    }

    #[test]
    fn plain_text_emits_the_bare_confirmation() {
        let line = PlainTextFormatter.format(&record());
        assert_eq!(line, "Sending SMS to +1234567890: Hello");
    }

    #[test]
    fn json_emits_the_whole_record() {
        let line = JsonFormatter.format(&record());
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(parsed["kind"], "sms");
        assert_eq!(parsed["recipient"], "+1234567890");
        assert_eq!(parsed["message"], "Hello");
        assert_eq!(parsed["confirmation"], "Sending SMS to +1234567890: Hello");
        assert_eq!(parsed["timestamp"], "2026-08-07T12:00:00+00:00");
    }

    #[test]
    fn formatter_for_respects_the_configured_format() {
        let record = record();
        let plain = formatter_for(&OutputFormat::PlainText).format(&record);
        let json = formatter_for(&OutputFormat::Json).format(&record);

        assert_eq!(plain, record.confirmation);
        assert!(json.starts_with('{'));
    }
}
