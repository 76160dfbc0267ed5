//! Driver descriptors for the dataset formats `schemacheck` can introspect.
//!
//! A driver ties a format name to the file extensions it claims and to its
//! current support status. The registry itself lives in `schemacheck-core`.

/// Whether a driver can introspect datasets yet.
///
/// Planned drivers are registered so their extensions resolve to a clear
/// "not supported yet" error instead of an unknown-format one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportStatus {
    /// A reader exists for this format.
    Supported,
    /// The format is recognised but has no reader yet.
    Planned,
}

impl SupportStatus {
    /// Returns `true` if a reader exists for the driver.
    #[must_use]
    pub fn is_supported(self) -> bool {
        self == Self::Supported
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Supported => "Supported",
            Self::Planned => "Planned",
        }
    }
}

/// Dataset format driver definition.
///
/// Each driver has a short name (used in messages and lookups), a descriptive
/// long name, the lower-case file extensions it claims, and a support status.
#[derive(Debug, Clone)]
pub struct Driver {
    /// Short name used for driver identification (e.g., `"GeoJSON"`).
    pub short_name: &'static str,
    /// Long descriptive name for display purposes.
    pub long_name: &'static str,
    /// Lower-case file extensions, without the leading dot.
    pub extensions: &'static [&'static str],
    /// Whether datasets of this format can be introspected.
    pub status: SupportStatus,
}

impl Driver {
    /// Creates a new driver definition.
    #[must_use]
    pub const fn new(
        short_name: &'static str,
        long_name: &'static str,
        extensions: &'static [&'static str],
        status: SupportStatus,
    ) -> Self {
        Self {
            short_name,
            long_name,
            extensions,
            status,
        }
    }

    /// Returns `true` if this driver claims the given extension (case-insensitive).
    #[must_use]
    pub fn handles_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
