//! Data types for schema comparison.

use std::path::PathBuf;

pub use schemacheck_core_common::{DatasetDescriptor, DatasetKind, FieldDescriptor};

/// One dataset's comparable schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSchema {
    /// Base name of the dataset
    pub name: String,
    /// Feature class or table
    pub kind: DatasetKind,
    /// Fields in catalog order
    pub fields: Vec<FieldDescriptor>,
}

impl DatasetSchema {
    /// Names of all fields, in catalog order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// Which parent fields are left out of the comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnorePolicy {
    /// Field names to skip
    pub ignore_list: Vec<String>,
    /// Compare names after lower-casing both sides
    pub case_insensitive: bool,
}

impl IgnorePolicy {
    #[must_use]
    pub fn new(ignore_list: Vec<String>, case_insensitive: bool) -> Self {
        Self {
            ignore_list,
            case_insensitive,
        }
    }

    /// Returns `true` if `field_name` equals any entry of the ignore list.
    #[must_use]
    pub fn should_ignore(&self, field_name: &str) -> bool {
        if self.case_insensitive {
            let field_name = field_name.to_lowercase();
            self.ignore_list
                .iter()
                .any(|entry| entry.to_lowercase() == field_name)
        } else {
            self.ignore_list.iter().any(|entry| entry == field_name)
        }
    }
}

/// The result of checking one parent field against the child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Found with identical type and length
    Match,
    /// Found with a differing type, length, or both
    Mismatch {
        /// `(parent, child)` types when they differ
        field_type: Option<(String, String)>,
        /// `(parent, child)` lengths when they differ
        length: Option<(Option<i64>, Option<i64>)>,
    },
    /// No child field has this name
    NotFound,
}

impl FieldOutcome {
    /// Short status label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "OK",
            Self::Mismatch { .. } => "Mismatch",
            Self::NotFound => "Missing",
        }
    }
}

/// One report block: a parent field and what the comparison found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldComparison {
    /// The parent field
    pub parent: FieldDescriptor,
    /// The same-named child field, if any
    pub child: Option<FieldDescriptor>,
    /// The outcome
    pub outcome: FieldOutcome,
}

/// What a full run compared and where the report went.
#[derive(Debug, Clone)]
pub struct ComparisonSummary {
    /// The parent dataset
    pub parent: DatasetDescriptor,
    /// The child dataset
    pub child: DatasetDescriptor,
    /// The report file
    pub output: PathBuf,
    /// One entry per non-ignored parent field, in parent order
    pub fields: Vec<FieldComparison>,
}

impl ComparisonSummary {
    /// Number of fields with any issue.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.outcome != FieldOutcome::Match)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(list: &[&str], case_insensitive: bool) -> IgnorePolicy {
        IgnorePolicy::new(list.iter().map(|s| (*s).to_string()).collect(), case_insensitive)
    }

    #[test]
    fn ignore_is_a_membership_test() {
        let policy = policy(&["OBJECTID", "Shape"], false);
        assert!(policy.should_ignore("OBJECTID"));
        assert!(policy.should_ignore("Shape"));
        assert!(!policy.should_ignore("NAME"));
    }

    #[test]
    fn ignore_cases_true_lowercases_both_sides() {
        let policy = policy(&["OBJECTID"], true);
        assert!(policy.should_ignore("objectid"));
        assert!(policy.should_ignore("ObjectId"));
    }

    #[test]
    fn ignore_cases_false_is_exact() {
        let policy = policy(&["OBJECTID"], false);
        assert!(!policy.should_ignore("objectid"));
    }

    #[test]
    fn empty_list_ignores_nothing() {
        assert!(!IgnorePolicy::default().should_ignore("ID"));
    }

    #[test]
    fn field_names_in_order() {
        let schema = DatasetSchema {
            name: "roads".to_string(),
            kind: DatasetKind::Featureclass,
            fields: vec![
                FieldDescriptor::new("B", "String"),
                FieldDescriptor::new("A", "Integer"),
            ],
        };
        assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["B", "A"]);
    }
}
