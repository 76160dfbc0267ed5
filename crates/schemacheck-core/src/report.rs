//! Plain-text comparison report.
//!
//! Each non-ignored parent field gets one block:
//!
//! ```text
//! NAME
//! ------------------------------------------------------
//! NAME not found in child
//! ------------------------------------------------------
//!
//!
//! ```

use std::io::{self, Write};

use crate::types::{FieldComparison, FieldOutcome};

/// Delimiter line written after a block header and at the end of each block.
pub const RULE: &str = "------------------------------------------------------";

/// Message for a field present in both datasets with matching type and length.
pub const NO_ISSUES: &str = "No issues detected";

fn display_length(length: Option<i64>) -> String {
    length.map_or_else(|| "None".to_string(), |l| l.to_string())
}

/// Writes report blocks to any [`Write`] sink as they are produced.
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    inner: W,
    blocks: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, blocks: 0 }
    }

    /// Number of blocks written so far.
    #[must_use]
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Write the block for one compared field.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying sink.
    pub fn write_block(&mut self, comparison: &FieldComparison) -> io::Result<()> {
        let name = &comparison.parent.name;
        writeln!(self.inner, "{name}")?;
        writeln!(self.inner, "{RULE}")?;

        match &comparison.outcome {
            FieldOutcome::NotFound => {
                writeln!(self.inner, "{name} not found in child")?;
            },
            FieldOutcome::Mismatch { field_type, length } => {
                if let Some((parent, child)) = field_type {
                    writeln!(
                        self.inner,
                        "Type mismatch found in {name}. The parent has a type of {parent} \
                         and the child has a type of {child}"
                    )?;
                }
                if let Some((parent, child)) = length {
                    writeln!(
                        self.inner,
                        "Length mismatch found in {name}. The parent has a length of {} \
                         and the child has a length of {}",
                        display_length(*parent),
                        display_length(*child)
                    )?;
                }
            },
            FieldOutcome::Match => {
                writeln!(self.inner, "{NO_ISSUES}")?;
            },
        }

        writeln!(self.inner, "{RULE}")?;
        write!(self.inner, "\n\n")?;
        self.blocks += 1;
        Ok(())
    }

    /// Flush the sink and hand it back.
    ///
    /// # Errors
    ///
    /// Returns any error from flushing the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldDescriptor;

    fn render(comparison: &FieldComparison) -> String {
        let mut writer = ReportWriter::new(Vec::new());
        writer.write_block(comparison).unwrap();
        assert_eq!(writer.blocks(), 1);
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn rule_is_54_dashes() {
        assert_eq!(RULE.len(), 54);
        assert!(RULE.chars().all(|c| c == '-'));
    }

    #[test]
    fn not_found_block() {
        let text = render(&FieldComparison {
            parent: FieldDescriptor::new("NAME", "String").with_length(50),
            child: None,
            outcome: FieldOutcome::NotFound,
        });
        assert_eq!(text, format!("NAME\n{RULE}\nNAME not found in child\n{RULE}\n\n\n"));
    }

    #[test]
    fn match_block() {
        let field = FieldDescriptor::new("ID", "Integer").with_length(4);
        let text = render(&FieldComparison {
            parent: field.clone(),
            child: Some(field),
            outcome: FieldOutcome::Match,
        });
        assert_eq!(text, format!("ID\n{RULE}\nNo issues detected\n{RULE}\n\n\n"));
    }

    #[test]
    fn mismatch_block_uses_length_wording() {
        let text = render(&FieldComparison {
            parent: FieldDescriptor::new("CODE", "String").with_length(10),
            child: Some(FieldDescriptor::new("CODE", "Integer")),
            outcome: FieldOutcome::Mismatch {
                field_type: Some(("String".to_string(), "Integer".to_string())),
                length: Some((Some(10), None)),
            },
        });
        assert!(text.contains(
            "Type mismatch found in CODE. The parent has a type of String and the child has a type of Integer\n"
        ));
        assert!(text.contains(
            "Length mismatch found in CODE. The parent has a length of 10 and the child has a length of None\n"
        ));
        assert!(!text.contains(NO_ISSUES));
    }
}
