//! Log query DTOs

use serde::{Deserialize, Serialize};

/// Windowing and pagination parameters for a log request
///
/// All fields are optional; only the ones that are set become query-string
/// pairs. Timestamps are epoch seconds, matching the backend's `start`/`stop`
/// parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogWindow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<i64>,
    #[serde(rename = "fromOffset", skip_serializing_if = "Option::is_none")]
    pub from_offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl LogWindow {
    /// Window covering everything the backend has for the run
    pub fn all() -> Self {
        Self::default()
    }

    /// Window starting at an epoch-seconds timestamp
    pub fn from_start(start: i64) -> Self {
        Self {
            start: Some(start),
            ..Self::default()
        }
    }

    /// Window resuming from an opaque log offset
    pub fn from_offset(offset: impl Into<String>) -> Self {
        Self {
            from_offset: Some(offset.into()),
            ..Self::default()
        }
    }

    /// Render the set fields as query-string pairs, in a stable order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start {
            pairs.push(("start", start.to_string()));
        }
        if let Some(stop) = self.stop {
            pairs.push(("stop", stop.to_string()));
        }
        if let Some(offset) = &self.from_offset {
            pairs.push(("fromOffset", offset.clone()));
        }
        if let Some(max) = self.max {
            pairs.push(("max", max.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window_renders_no_pairs() {
        assert!(LogWindow::all().query_pairs().is_empty());
    }

    #[test]
    fn test_from_start_sets_only_start() {
        let window = LogWindow::from_start(1425211200);
        assert_eq!(
            window.query_pairs(),
            vec![("start", "1425211200".to_string())]
        );
    }

    #[test]
    fn test_only_set_fields_are_rendered() {
        let window = LogWindow {
            start: Some(1425211200),
            max: Some(50),
            ..LogWindow::default()
        };
        assert_eq!(
            window.query_pairs(),
            vec![("start", "1425211200".to_string()), ("max", "50".to_string())]
        );
    }

    #[test]
    fn test_from_offset_uses_wire_name() {
        let window = LogWindow::from_offset("8192.1428534");
        assert_eq!(
            window.query_pairs(),
            vec![("fromOffset", "8192.1428534".to_string())]
        );
    }
}
