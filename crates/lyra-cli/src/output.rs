//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use lyra_validator::ValidationReport;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Quiet format
    Quiet,
}

/// One declared relationship, as listed by `lyra list`.
#[derive(Debug, Clone, Serialize)]
pub struct RelationshipRow {
    /// Declaring type
    pub owning_type: String,
    /// Relationship name
    pub name: String,
    /// Referenced type as declared
    #[serde(rename = "type")]
    pub type_name: String,
    /// Relationship kind
    pub kind: String,
    /// Relationship cardinality
    pub cardinality: String,
    /// Flattened key pairs
    pub keys: Vec<String>,
    /// Counterpart name, if declared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_name: Option<String>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a validation report.
    pub fn format_report(&self, report: &ValidationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(self.format_report_quiet(report)),
        }
    }

    /// Format declared relationships.
    pub fn format_relationships(&self, rows: &[RelationshipRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            OutputFormat::Table => Ok(self.format_relationships_table(rows)),
            OutputFormat::Quiet => Ok(rows
                .iter()
                .map(|r| format!("{}.{}", r.owning_type, r.name))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_report_json(&self, report: &ValidationReport) -> Result<String> {
        let issues: Vec<serde_json::Value> = report
            .issues()
            .iter()
            .map(|issue| {
                serde_json::json!({
                    "type": issue.owning_type.as_str(),
                    "relationship": issue.relationship,
                    "code": issue.code(),
                    "details": issue.error.details(),
                    "message": issue.error.to_string(),
                })
            })
            .collect();

        let json = serde_json::json!({
            "checked": report.checked_count(),
            "truncated": report.is_truncated(),
            "issues": issues,
        });
        Ok(serde_json::to_string_pretty(&json)?)
    }

    fn format_report_table(&self, report: &ValidationReport) -> String {
        if report.is_ok() {
            return self.success(&report.summary());
        }

        let mut builder = Builder::default();
        builder.push_record(["Type", "Relationship", "Code", "Message"]);
        for issue in report.issues() {
            let message = issue.error.to_string();
            builder.push_record([
                issue.owning_type.as_str(),
                issue.relationship.as_str(),
                issue.code().as_str(),
                message.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let summary = if report.is_truncated() {
            self.warning(&report.summary())
        } else {
            self.error(&report.summary())
        };
        format!("{}\n{}", table, summary)
    }

    /// Quiet mode prints one `Type.relationship` per failing declaration.
    fn format_report_quiet(&self, report: &ValidationReport) -> String {
        report
            .issues()
            .iter()
            .map(|i| format!("{}.{}", i.owning_type, i.relationship))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_relationships_table(&self, rows: &[RelationshipRow]) -> String {
        if rows.is_empty() {
            return self.colorize("No relationships declared.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Type",
            "Relationship",
            "Target",
            "Kind",
            "Cardinality",
            "Keys",
            "Reverse",
        ]);
        for row in rows {
            let keys = row.keys.join(", ");
            builder.push_record([
                row.owning_type.as_str(),
                row.name.as_str(),
                row.type_name.as_str(),
                row.kind.as_str(),
                row.cardinality.as_str(),
                keys.as_str(),
                row.reverse_name.as_deref().unwrap_or("-"),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
