//! Display utilities for formatting CLI output.
//!
//! The report file is the primary output; this module prints a compact
//! summary of the same comparison to standard output.

use tabled::{Table, Tabled};

use schemacheck_core::types::{ComparisonSummary, FieldComparison};

/// Table row representation for one compared parent field.
#[derive(Tabled)]
pub struct FieldRow {
    /// Name of the parent field.
    #[tabled(rename = "Field")]
    pub name: String,
    /// `OK`, `Mismatch` or `Missing`.
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Parent Type")]
    pub parent_type: String,
    #[tabled(rename = "Child Type")]
    pub child_type: String,
    #[tabled(rename = "Parent Length")]
    pub parent_length: String,
    #[tabled(rename = "Child Length")]
    pub child_length: String,
}

fn length_cell(length: Option<i64>) -> String {
    length.map_or_else(|| "None".to_string(), |l| l.to_string())
}

impl From<&FieldComparison> for FieldRow {
    fn from(comparison: &FieldComparison) -> Self {
        let (child_type, child_length) = comparison.child.as_ref().map_or_else(
            || ("-".to_string(), "-".to_string()),
            |c| (c.field_type.clone(), length_cell(c.length)),
        );

        Self {
            name: comparison.parent.name.clone(),
            status: comparison.outcome.as_str().to_string(),
            parent_type: comparison.parent.field_type.clone(),
            child_type,
            parent_length: length_cell(comparison.parent.length),
            child_length,
        }
    }
}

/// One row per compared field, in report order.
pub fn field_rows(summary: &ComparisonSummary) -> Vec<FieldRow> {
    summary.fields.iter().map(FieldRow::from).collect()
}

/// Print the comparison summary as a table on standard output.
pub fn display_summary(summary: &ComparisonSummary) {
    println!("\nParent: {} ({})", summary.parent.name, summary.parent.kind);
    println!("Child: {} ({})", summary.child.name, summary.child.kind);
    println!("Report: {}", summary.output.display());

    if summary.fields.is_empty() {
        println!("\nNo fields compared");
        return;
    }

    println!("\n=== Fields ===");
    let table = Table::new(field_rows(summary)).to_string();
    println!("{table}");
    println!(
        "\n{} of {} field(s) with issues",
        summary.issue_count(),
        summary.fields.len()
    );
}
