//! Log domain types

use serde::{Deserialize, Serialize};

/// A log entry from a program run
///
/// The `offset` is an opaque cursor into the run's log stream; feed it back
/// through the `fromOffset` query parameter to resume paging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub offset: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "logLevel")]
    pub level: LogLevel,
    #[serde(rename = "loggerName", skip_serializing_if = "Option::is_none")]
    pub logger: Option<String>,
    #[serde(rename = "threadName", skip_serializing_if = "Option::is_none")]
    pub thread: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_wire_names_are_uppercase() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"WARN\"");
        assert_eq!(
            serde_json::from_str::<LogLevel>("\"ERROR\"").unwrap(),
            LogLevel::Error
        );
    }

    #[test]
    fn test_log_entry_deserializes_wire_fields() {
        let entry: LogEntry = serde_json::from_str(
            r#"{
                "offset": "8192.1428534",
                "timestamp": "2015-03-01T12:00:00Z",
                "logLevel": "INFO",
                "loggerName": "c.c.PurchaseFlow",
                "message": "started"
            }"#,
        )
        .unwrap();
        assert_eq!(entry.offset, "8192.1428534");
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.logger.as_deref(), Some("c.c.PurchaseFlow"));
        assert!(entry.thread.is_none());
    }
}
