//! Parent-to-child field comparison.
//!
//! Only the parent's fields are walked: child fields the parent lacks are
//! never reported. For each field present in both, the type tag and the
//! length are compared; precision, scale and domain are carried but not
//! compared.

use std::io::{self, Write};

use log::{debug, info};

use crate::report::ReportWriter;
use crate::types::{DatasetSchema, FieldComparison, FieldDescriptor, FieldOutcome, IgnorePolicy};

/// First field named exactly `name`, if any.
#[must_use]
pub fn find_by_name<'a>(fields: &'a [FieldDescriptor], name: &str) -> Option<&'a FieldDescriptor> {
    fields.iter().find(|f| f.name == name)
}

/// Compare one parent field against the child's fields.
#[must_use]
pub fn compare_field(parent: &FieldDescriptor, child_fields: &[FieldDescriptor]) -> FieldComparison {
    let Some(child) = find_by_name(child_fields, &parent.name) else {
        info!("{} not found in child", parent.name);
        return FieldComparison {
            parent: parent.clone(),
            child: None,
            outcome: FieldOutcome::NotFound,
        };
    };

    debug!("Found field match: {}", parent.name);

    let field_type = (parent.field_type != child.field_type)
        .then(|| (parent.field_type.clone(), child.field_type.clone()));
    let length = (parent.length != child.length).then_some((parent.length, child.length));

    let outcome = if field_type.is_none() && length.is_none() {
        FieldOutcome::Match
    } else {
        FieldOutcome::Mismatch { field_type, length }
    };

    FieldComparison {
        parent: parent.clone(),
        child: Some(child.clone()),
        outcome,
    }
}

/// Compare every non-ignored parent field, writing one report block per field.
///
/// Blocks are written as each field is compared, in parent catalog order.
///
/// # Errors
///
/// Returns any error from the report sink.
pub fn compare<W: Write>(
    parent: &DatasetSchema,
    child: &DatasetSchema,
    policy: &IgnorePolicy,
    report: &mut ReportWriter<W>,
) -> io::Result<Vec<FieldComparison>> {
    let mut comparisons = Vec::with_capacity(parent.fields.len());

    for field in &parent.fields {
        if policy.should_ignore(&field.name) {
            debug!("Ignoring field {}", field.name);
            continue;
        }

        let comparison = compare_field(field, &child.fields);
        report.write_block(&comparison)?;
        comparisons.push(comparison);
    }

    Ok(comparisons)
}
