//! Run record types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata for one execution of a program
///
/// Returned by the run resource itself (the log endpoints hang off it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    #[serde(rename = "runid")]
    pub run_id: Uuid,
    pub status: RunStatus,
    pub start: chrono::DateTime<chrono::Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<chrono::DateTime<chrono::Utc>>,
}

/// Run lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunStatus {
    Starting,
    Running,
    Suspended,
    Completed,
    Failed,
    Killed,
}

impl RunStatus {
    /// Whether the run has reached a terminal state
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            RunStatus::Completed | RunStatus::Failed | RunStatus::Killed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_record_deserializes_without_end() {
        let record: RunRecord = serde_json::from_str(&format!(
            r#"{{
                "runid": "{}",
                "status": "RUNNING",
                "start": "2015-03-01T12:00:00Z"
            }}"#,
            Uuid::nil()
        ))
        .unwrap();
        assert_eq!(record.status, RunStatus::Running);
        assert!(record.end.is_none());
        assert!(!record.status.is_finished());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(RunStatus::Completed.is_finished());
        assert!(RunStatus::Killed.is_finished());
        assert!(!RunStatus::Suspended.is_finished());
    }
}
