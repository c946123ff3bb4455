//! Common types used across CLI modules

use runlog_core::domain::program::{ProgramRunRef, ProgramType};
use std::str::FromStr;
use uuid::Uuid;

/// Program coordinates given as one `namespace/app/program-type/program`
/// positional argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSelector {
    pub namespace: String,
    pub app_id: String,
    pub program_type: ProgramType,
    pub program_id: String,
}

impl ProgramSelector {
    /// Combine with a run id into a fully-qualified run reference
    pub fn into_run_ref(self, run_id: Uuid) -> ProgramRunRef {
        ProgramRunRef::new(
            self.namespace,
            self.app_id,
            self.program_type,
            self.program_id,
            run_id,
        )
    }
}

impl FromStr for ProgramSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        let [namespace, app_id, program_type, program_id] = parts.as_slice() else {
            return Err(format!(
                "expected namespace/app/program-type/program, got '{}'",
                s
            ));
        };
        if namespace.is_empty() || app_id.is_empty() || program_id.is_empty() {
            return Err(format!("empty component in program selector '{}'", s));
        }

        Ok(ProgramSelector {
            namespace: namespace.to_string(),
            app_id: app_id.to_string(),
            program_type: program_type.parse()?,
            program_id: program_id.to_string(),
        })
    }
}

impl std::fmt::Display for ProgramSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.namespace, self.app_id, self.program_type, self.program_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parses_four_components() {
        let sel: ProgramSelector = "default/Purchase/flows/PurchaseFlow".parse().unwrap();
        assert_eq!(sel.namespace, "default");
        assert_eq!(sel.program_type, ProgramType::Flows);
        assert_eq!(sel.to_string(), "default/Purchase/flows/PurchaseFlow");
    }

    #[test]
    fn test_selector_rejects_wrong_arity() {
        assert!("default/Purchase/flows".parse::<ProgramSelector>().is_err());
        assert!(
            "default/Purchase/flows/PurchaseFlow/extra"
                .parse::<ProgramSelector>()
                .is_err()
        );
    }

    #[test]
    fn test_selector_rejects_unknown_program_type() {
        assert!(
            "default/Purchase/flow/PurchaseFlow"
                .parse::<ProgramSelector>()
                .is_err()
        );
    }

    #[test]
    fn test_selector_rejects_empty_components() {
        assert!("/Purchase/flows/PurchaseFlow".parse::<ProgramSelector>().is_err());
    }
}
