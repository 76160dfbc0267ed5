//! The end-to-end comparison of a parent and a child dataset.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::{info, warn};

use crate::compare::compare;
use crate::config::Config;
use crate::describe::{describe, extract_fields};
use crate::error::{IoError, Result};
use crate::report::ReportWriter;
use crate::types::ComparisonSummary;

/// Compares the fields of `parent` against `child` and writes the report to
/// the configured `output_loc`.
///
/// Both datasets are described and their fields extracted before the report
/// file is created, so a dataset error never leaves a truncated report behind.
///
/// # Errors
///
/// Returns an error if either dataset cannot be described or read, or if the
/// report cannot be created or written.
pub fn compare_datasets(
    parent: impl AsRef<Path>,
    child: impl AsRef<Path>,
    config: &Config,
) -> Result<ComparisonSummary> {
    let parent = parent.as_ref();
    let child = child.as_ref();
    info!("Comparing parent {} to child {}", parent.display(), child.display());

    let parent_meta = describe(parent)?;
    let child_meta = describe(child)?;
    if parent_meta.kind != child_meta.kind {
        warn!(
            "Parent '{}' is a {} but child '{}' is a {}",
            parent_meta.name, parent_meta.kind, child_meta.name, child_meta.kind
        );
    }

    let parent_schema = extract_fields(parent, &parent_meta)?;
    let child_schema = extract_fields(child, &child_meta)?;

    let output = config.output_loc.clone();
    let file = File::create(&output).map_err(|source| IoError::CreateReport {
        path: output.clone(),
        source,
    })?;
    let write_error = |source: std::io::Error| IoError::WriteReport {
        path: output.clone(),
        source,
    };

    let mut report = ReportWriter::new(BufWriter::new(file));
    let fields = compare(
        &parent_schema,
        &child_schema,
        &config.ignore_policy(),
        &mut report,
    )
    .map_err(write_error)?;
    report.finish().map_err(write_error)?;

    info!(
        "Wrote {} field block(s) to {}",
        fields.len(),
        output.display()
    );

    Ok(ComparisonSummary {
        parent: parent_meta,
        child: child_meta,
        output,
        fields,
    })
}
