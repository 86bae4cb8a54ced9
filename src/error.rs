#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the decoder crate."]

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free while still
//! exposing a thoroughly documented error surface for library consumers.

use std::path::{Path, PathBuf};

/// Unified error type returned by the manifest decoder and CLI.
///
/// The sentinel variants ([`Error::PanelNotConfigured`],
/// [`Error::VariableNotConfigured`], [`Error::TargetNotConfigured`]) signal
/// that a manifest entry has no recognizable content at all; they are kept
/// distinct from [`Error::Decode`] so callers can pattern-match on "not
/// configured" specifically instead of parsing messages.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading manifest files.
    #[error("failed to read manifest from {path:?}: {source}")]
    Io {
        /// Location of the manifest file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors.
    #[error("failed to parse manifest: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when a panel entry has none of its sub-kinds populated.
    #[error("panel not configured")]
    PanelNotConfigured,
    /// Returned when a variable entry has none of its sub-kinds populated.
    #[error("variable not configured")]
    VariableNotConfigured,
    /// Returned when a query target has no populated backend.
    #[error("target not configured")]
    TargetNotConfigured,
    /// Returned when a populated sub-kind carries invalid nested fields.
    #[error("invalid manifest entry: {message}")]
    Decode {
        /// Human readable message describing the decode problem.
        message: String
    },
    /// Returned by the dashboard constructor for invalid option sets.
    #[error("failed to build dashboard: {message}")]
    Build {
        /// Human readable message describing the construction problem.
        message: String
    },
    /// Wraps serialization errors when writing the built dashboard.
    #[error("failed to serialize dashboard: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    }
}

impl Error {
    /// Constructs a decode error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the decode failure.
    pub fn decode<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Decode {
            message: message.into()
        }
    }

    /// Constructs a construction error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the construction failure.
    pub fn build<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Build {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the manifest file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}
