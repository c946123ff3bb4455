//! Program identification types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Kind of runnable program within an application
///
/// The serialized form doubles as the URL path segment for the program
/// category (lowercase plural, except `mapreduce` and `spark`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramType {
    Flows,
    Mapreduce,
    Spark,
    Workflows,
    Services,
    Workers,
}

impl ProgramType {
    /// URL path segment for this program category
    pub fn path_segment(&self) -> &'static str {
        match self {
            ProgramType::Flows => "flows",
            ProgramType::Mapreduce => "mapreduce",
            ProgramType::Spark => "spark",
            ProgramType::Workflows => "workflows",
            ProgramType::Services => "services",
            ProgramType::Workers => "workers",
        }
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for ProgramType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flows" => Ok(ProgramType::Flows),
            "mapreduce" => Ok(ProgramType::Mapreduce),
            "spark" => Ok(ProgramType::Spark),
            "workflows" => Ok(ProgramType::Workflows),
            "services" => Ok(ProgramType::Services),
            "workers" => Ok(ProgramType::Workers),
            other => Err(format!("unknown program type: {}", other)),
        }
    }
}

/// Fully-qualified reference to one execution of a program
///
/// All fields are mandatory; a value of this type always resolves to a valid
/// request path. Constructed per call site and discarded once the response
/// has been consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramRunRef {
    pub namespace: String,
    pub app_id: String,
    pub program_type: ProgramType,
    pub program_id: String,
    pub run_id: Uuid,
}

impl ProgramRunRef {
    pub fn new(
        namespace: impl Into<String>,
        app_id: impl Into<String>,
        program_type: ProgramType,
        program_id: impl Into<String>,
        run_id: Uuid,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            app_id: app_id.into(),
            program_type,
            program_id: program_id.into(),
            run_id,
        }
    }

    /// Path of the run resource itself (also serves run metadata)
    pub fn run_path(&self) -> String {
        format!(
            "/v3/namespaces/{}/apps/{}/{}/{}/runs/{}",
            self.namespace,
            self.app_id,
            self.program_type.path_segment(),
            self.program_id,
            self.run_id
        )
    }

    /// Path of the full log range for this run
    pub fn logs_path(&self) -> String {
        format!("{}/logs", self.run_path())
    }

    /// Path of the next log page
    pub fn logs_next_path(&self) -> String {
        format!("{}/logs/next", self.run_path())
    }

    /// Path of the previous log page
    pub fn logs_prev_path(&self) -> String {
        format!("{}/logs/prev", self.run_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ref() -> ProgramRunRef {
        ProgramRunRef::new(
            "default",
            "Purchase",
            ProgramType::Flows,
            "PurchaseFlow",
            Uuid::nil(),
        )
    }

    #[test]
    fn test_run_path_substitutes_all_parameters() {
        assert_eq!(
            run_ref().run_path(),
            format!(
                "/v3/namespaces/default/apps/Purchase/flows/PurchaseFlow/runs/{}",
                Uuid::nil()
            )
        );
    }

    #[test]
    fn test_logs_path_extends_run_path() {
        let r = run_ref();
        assert_eq!(r.logs_path(), format!("{}/logs", r.run_path()));
    }

    #[test]
    fn test_next_and_prev_paths_are_distinct() {
        let r = run_ref();
        assert_ne!(r.logs_next_path(), r.logs_prev_path());
        assert!(r.logs_next_path().ends_with("/logs/next"));
        assert!(r.logs_prev_path().ends_with("/logs/prev"));
    }

    #[test]
    fn test_program_type_round_trips() {
        for pt in [
            ProgramType::Flows,
            ProgramType::Mapreduce,
            ProgramType::Spark,
            ProgramType::Workflows,
            ProgramType::Services,
            ProgramType::Workers,
        ] {
            assert_eq!(pt.to_string().parse::<ProgramType>(), Ok(pt));
        }
    }

    #[test]
    fn test_program_type_rejects_unknown_segment() {
        assert!("flow".parse::<ProgramType>().is_err());
    }
}
