//! Batch validation results

use std::collections::BTreeMap;

use lyra_domain::TypeName;

use crate::{IssueCode, RelationshipError};

/// One failing relationship declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Type the relationship is declared on
    pub owning_type: TypeName,

    /// Attribute name the relationship is declared under
    pub relationship: String,

    /// What went wrong
    pub error: RelationshipError,
}

impl Issue {
    /// Symbolic kind of the failure
    pub fn code(&self) -> IssueCode {
        self.error.code()
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}: [{}] {}",
            self.owning_type,
            self.relationship,
            self.code(),
            self.error
        )
    }
}

/// Outcome of validating every relationship of one or more types
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<Issue>,
    checked: usize,
    truncated: bool,
}

impl ValidationReport {
    /// True when no issue was found
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues in the order they were found
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Number of relationship declarations checked
    pub fn checked_count(&self) -> usize {
        self.checked
    }

    /// Whether collection stopped because the issue cap was reached
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Number of issues per code
    pub fn issue_count_by_code(&self) -> BTreeMap<IssueCode, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.issues {
            *counts.entry(issue.code()).or_insert(0) += 1;
        }
        counts
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Checked {} relationship(s): {} issue(s)",
            self.checked,
            self.issues.len()
        );
        if self.truncated {
            summary.push_str(" (truncated)");
        }
        summary
    }

    pub(crate) fn record_checked(&mut self) {
        self.checked += 1;
    }

    pub(crate) fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub(crate) fn mark_truncated(&mut self) {
        self.truncated = true;
    }

    pub(crate) fn len(&self) -> usize {
        self.issues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(name: &str, error: RelationshipError) -> Issue {
        Issue {
            owning_type: TypeName::new("Folder").unwrap(),
            relationship: name.to_string(),
            error,
        }
    }

    #[test]
    fn test_empty_report() {
        let report = ValidationReport::default();
        assert!(report.is_ok());
        assert_eq!(report.summary(), "Checked 0 relationship(s): 0 issue(s)");
    }

    #[test]
    fn test_counts_by_code() {
        let mut report = ValidationReport::default();
        for _ in 0..3 {
            report.record_checked();
        }
        report.push(issue(
            "a",
            RelationshipError::CounterpartNotFound {
                type_name: "Folder".to_string(),
                name: "a".to_string(),
            },
        ));
        report.push(issue(
            "b",
            RelationshipError::CounterpartNotFound {
                type_name: "Folder".to_string(),
                name: "b".to_string(),
            },
        ));
        report.mark_truncated();

        assert!(!report.is_ok());
        assert_eq!(report.issue_count_by_code()[&IssueCode::CounterpartNotFound], 2);
        assert_eq!(report.summary(), "Checked 3 relationship(s): 2 issue(s) (truncated)");
    }

    #[test]
    fn test_issue_display() {
        let issue = issue(
            "children",
            RelationshipError::KeysUneven {
                type_name: "Folder".to_string(),
            },
        );
        assert_eq!(
            issue.to_string(),
            concat!(
                "Folder.children: [RelationshipKeysUneven] ",
                "Relationship keys declared on 'Folder' do not form pairs"
            )
        );
    }
}
