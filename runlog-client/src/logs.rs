//! Log retrieval endpoints

use crate::LogsClient;
use crate::error::Result;
use runlog_core::domain::log::LogEntry;
use runlog_core::domain::program::ProgramRunRef;
use runlog_core::domain::run::RunRecord;
use runlog_core::dto::log::LogWindow;

/// Query pair selecting JSON-formatted log entries
fn json_format() -> (&'static str, String) {
    ("format", "json".to_string())
}

/// Query pairs for a JSON-formatted fetch bounded by `window`
fn json_query(window: &LogWindow) -> Vec<(&'static str, String)> {
    let mut query = vec![json_format()];
    query.extend(window.query_pairs());
    query
}

impl LogsClient {
    // =============================================================================
    // Full-Range Fetches
    // =============================================================================

    /// Fetch the available log range for a run as raw text
    ///
    /// # Arguments
    /// * `run` - The program run to read logs from
    /// * `window` - Optional `start`/`stop`/`max` bounds; `LogWindow::all()`
    ///   for everything the backend has
    ///
    /// # Returns
    /// The log text exactly as the backend rendered it
    ///
    /// # Example
    /// ```no_run
    /// # use runlog_client::LogsClient;
    /// # use runlog_core::domain::program::{ProgramRunRef, ProgramType};
    /// # use runlog_core::dto::log::LogWindow;
    /// # use uuid::Uuid;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = LogsClient::new("http://localhost:11015");
    /// let run = ProgramRunRef::new(
    ///     "default", "Purchase", ProgramType::Flows, "PurchaseFlow", Uuid::new_v4(),
    /// );
    /// let text = client.get_logs(&run, &LogWindow::all()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_logs(&self, run: &ProgramRunRef, window: &LogWindow) -> Result<String> {
        let response = self.get(&run.logs_path(), &window.query_pairs()).await?;

        self.handle_text_response(response).await
    }

    /// Fetch the available log range for a run as structured entries
    ///
    /// Targets the same path as [`get_logs`](Self::get_logs); only the query
    /// string differs (`format=json`).
    pub async fn get_logs_json(
        &self,
        run: &ProgramRunRef,
        window: &LogWindow,
    ) -> Result<Vec<LogEntry>> {
        let response = self.get(&run.logs_path(), &json_query(window)).await?;

        self.handle_response(response).await
    }

    /// Fetch structured log entries starting at an epoch-seconds timestamp
    ///
    /// # Arguments
    /// * `run` - The program run to read logs from
    /// * `start` - Epoch-seconds timestamp to start from
    pub async fn get_logs_start(&self, run: &ProgramRunRef, start: i64) -> Result<Vec<LogEntry>> {
        let response = self
            .get(&run.logs_path(), &json_query(&LogWindow::from_start(start)))
            .await?;

        self.handle_response(response).await
    }

    /// Fetch metadata for the run the logs belong to
    ///
    /// Unlike the log fetches this returns a single record, not a list.
    pub async fn get_logs_metadata(&self, run: &ProgramRunRef) -> Result<RunRecord> {
        let response = self.get(&run.run_path(), &[]).await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Page Fetches
    // =============================================================================

    /// Fetch the next page of logs as raw text
    pub async fn next_logs(&self, run: &ProgramRunRef) -> Result<String> {
        let response = self.get(&run.logs_next_path(), &[]).await?;

        self.handle_text_response(response).await
    }

    /// Fetch the next page of logs as structured entries
    pub async fn next_logs_json(&self, run: &ProgramRunRef) -> Result<Vec<LogEntry>> {
        let response = self.get(&run.logs_next_path(), &[json_format()]).await?;

        self.handle_response(response).await
    }

    /// Fetch the next page of structured entries, resuming from an offset
    ///
    /// # Arguments
    /// * `run` - The program run to read logs from
    /// * `from_offset` - Opaque cursor taken from a previous entry's `offset`
    pub async fn next_logs_json_offset(
        &self,
        run: &ProgramRunRef,
        from_offset: &str,
    ) -> Result<Vec<LogEntry>> {
        let response = self
            .get(
                &run.logs_next_path(),
                &json_query(&LogWindow::from_offset(from_offset)),
            )
            .await?;

        self.handle_response(response).await
    }

    /// Fetch the previous page of logs as raw text
    pub async fn prev_logs(&self, run: &ProgramRunRef) -> Result<String> {
        let response = self.get(&run.logs_prev_path(), &[]).await?;

        self.handle_text_response(response).await
    }

    /// Fetch the previous page of logs as structured entries
    pub async fn prev_logs_json(&self, run: &ProgramRunRef) -> Result<Vec<LogEntry>> {
        let response = self.get(&run.logs_prev_path(), &[json_format()]).await?;

        self.handle_response(response).await
    }
}
