//! Error types for the persistence port.

use thiserror::Error;

/// Errors that can occur when reading, writing, or decoding persisted state.
///
/// None of these are fatal to the dashboard: read and parse failures fall
/// back to defaults at hydration time, and write failures are logged and
/// surfaced as a status message.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read a state entry from the backing store.
    #[error("failed to read state entry '{key}'")]
    Read {
        /// Key of the entry that could not be read.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a state entry to the backing store.
    #[error("failed to write state entry '{key}'")]
    Write {
        /// Key of the entry that could not be written.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A stored value is not valid JSON for its expected shape.
    #[error("stored value under '{key}' is not valid JSON")]
    Parse {
        /// Key of the corrupt entry.
        key: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to encode a value for storage.
    #[error("failed to encode state entry '{key}'")]
    Encode {
        /// Key of the entry that could not be encoded.
        key: String,
        /// Underlying encode error.
        #[source]
        source: serde_json::Error,
    },
}
