//! Typed error enum for the `schema-mock` library API.
//!
//! Only document loading, schema selection and rendering can fail; the
//! synthesis and flattening algorithms themselves are infallible. The CLI
//! (`main.rs`) converts these to `anyhow::Error` at the binary boundary for
//! richer context messages.

/// Errors produced by `schema-mock` library operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// File I/O failure (reading config or schema documents).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error(transparent)]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A mapping key that cannot be represented as a JSON object key.
    ///
    /// Scalar keys (`200:`, `true:`) are stringified; sequences, mappings
    /// and `null` keys are rejected.
    #[error("unsupported mapping key {key}; only scalar keys can be converted to JSON")]
    UnsupportedKey {
        /// Debug rendering of the offending key.
        key: String,
    },

    /// A JSON Pointer did not resolve to any node in the document.
    ///
    /// Pointers must start with `/` (e.g., `/components/schemas/Order`).
    #[error("no schema found at JSON pointer '{pointer}'")]
    PointerNotFound {
        /// The unresolved pointer.
        pointer: String,
    },
}

/// Convenience alias used throughout the library's public API.
pub type Result<T> = std::result::Result<T, Error>;
