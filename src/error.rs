//! Error types for the skywars-config library.
//!
//! This module provides the error hierarchy for every operation in the
//! configuration subsystem, using `thiserror` for ergonomic error handling.
//! Semantic configuration errors always carry the offending key and the
//! absolute path of the file they were found in, so the operator can fix
//! the file and restart.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a configuration error.
///
/// # Examples
///
/// ```
/// use skywars_config::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the skywars-config library.
///
/// Three kinds of failure flow through this enum: format errors (a file
/// exists but cannot be parsed), I/O errors (filesystem failures), and
/// configuration errors (semantic validation failures). All of them abort
/// the load procedure that raised them; there is no retry logic anywhere
/// in this subsystem.
#[derive(Debug, Error)]
pub enum Error {
    /// A settings file exists but is not parseable YAML.
    #[error("malformed settings file {}: {message}", path.display())]
    Format {
        /// Path of the unparseable file.
        path: PathBuf,
        /// Description of the parse failure.
        message: String,
    },

    /// An I/O error occurred while reading a file or creating a directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A settings file could not be written back to disk.
    #[error("failed to write settings file {}: {source}", path.display())]
    Save {
        /// Path that could not be written.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The arena directory path exists but is not a directory.
    #[error("{} exists but is not a directory", path.display())]
    NotADirectory {
        /// The conflicting path.
        path: PathBuf,
    },

    /// The stored configuration version is newer than this build supports.
    #[error("version '{found}' listed under '{key}' in {} is unknown (highest supported: {max})", path.display())]
    UnsupportedVersion {
        /// The version found in the file.
        found: i64,
        /// The highest version this build understands.
        max: i64,
        /// The key the version was read from.
        key: &'static str,
        /// Path of the main settings file.
        path: PathBuf,
    },

    /// The stored arena-order string matches no known order.
    #[error("invalid arena order '{value}' under '{key}' in {}; valid values: {valid}", path.display())]
    InvalidArenaOrder {
        /// The unrecognized string.
        value: String,
        /// Comma-separated list of accepted names.
        valid: String,
        /// The key the order was read from.
        key: &'static str,
        /// Path of the main settings file.
        path: PathBuf,
    },

    /// Experience or position-gamemode-health saving was enabled without
    /// inventory saving.
    #[error("inventory saving must be enabled to enable experience or position-gamemode-health saving (in {})", path.display())]
    SaveDependency {
        /// Path of the main settings file.
        path: PathBuf,
    },

    /// Single-queue mode is active but the enabled-arena list is empty.
    #[error("no arenas enabled under '{key}' in {}", path.display())]
    NoArenasEnabled {
        /// The enabled-arenas key.
        key: &'static str,
        /// Path of the main settings file.
        path: PathBuf,
    },

    /// Multiple queues are enabled but the queue-description map is empty.
    #[error("multiple queues enabled, yet '{key}' is empty in {}", path.display())]
    EmptyQueueDescriptions {
        /// The queue-descriptions key.
        key: &'static str,
        /// Path of the main settings file.
        path: PathBuf,
    },

    /// A described queue has no arenas assigned to it.
    #[error("queue '{queue}' under '{key}' in {} has no arenas", path.display())]
    EmptyQueue {
        /// Name of the offending queue.
        queue: String,
        /// The queue-descriptions key.
        key: &'static str,
        /// Path of the main settings file.
        path: PathBuf,
    },

    /// An enabled arena has neither a settings file on disk nor a bundled
    /// template to extract.
    #[error("'{arena}' is listed under '{key}' but {} could not be found and no bundled template exists for it", path.display())]
    MissingArenaTemplate {
        /// Name of the arena.
        arena: String,
        /// The key the arena name was listed under.
        key: &'static str,
        /// The expected arena file path.
        path: PathBuf,
    },

    /// An arena settings document failed semantic validation.
    #[error("arena '{arena}': invalid value for '{key}': {message}")]
    Arena {
        /// Name of the arena.
        arena: String,
        /// The offending key within the arena document.
        key: String,
        /// Description of the failure.
        message: String,
    },

    /// A value failed validation outside of any settings file.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check whether this error is a semantic configuration failure, as
    /// opposed to a parse or I/O failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use skywars_config::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotADirectory { path: PathBuf::from("/tmp/arenas") };
    /// assert!(err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::Format { .. } | Self::Io(_) | Self::Save { .. })
    }

    /// Check whether this error is a parse failure of an existing file.
    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}
