//! Unified error types for bomtree.
//!
//! Fatal conditions stop a conversion at the point of detection and carry the
//! identity of the failing node or edge. Non-fatal information loss is not an
//! error; it is collected in a [`DegradationReport`](crate::serializers::DegradationReport).

use thiserror::Error;

/// Main error type for bomtree operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BomTreeError {
    /// An edge references a node id that is not in the registry
    #[error("Node lookup failed: {context}: unknown node '{id}'")]
    Lookup { context: String, id: String },

    /// An enumerated input value has no mapping in the target format
    #[error("Unsupported value: {context}: {value}")]
    UnsupportedEnum { context: String, value: String },

    /// Errors while encoding a document to bytes
    #[error("Encoding failed: {context}")]
    Encode {
        context: String,
        #[source]
        source: EncodeErrorKind,
    },

    /// The conversion was cancelled or ran past its deadline
    #[error("Conversion interrupted: {context}")]
    Cancelled { context: String },

    /// Strict mode: the conversion lost information
    #[error("Conversion degraded in strict mode ({count} entries), first: {first}")]
    Degraded { count: usize, first: String },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific encode error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EncodeErrorKind {
    #[error("Unsupported CycloneDX version: {version} (supported: {supported})")]
    UnsupportedVersion { version: String, supported: String },

    #[error("Unsupported encoding: {encoding} (supported: {supported})")]
    UnsupportedEncoding { encoding: String, supported: String },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("JSON serialization failed: {0}")]
    Json(String),

    #[error("XML serialization failed: {0}")]
    Xml(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for bomtree operations
pub type Result<T> = std::result::Result<T, BomTreeError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl BomTreeError {
    /// Create a lookup error for a missing node
    pub fn lookup(context: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Lookup {
            context: context.into(),
            id: id.into(),
        }
    }

    /// Create an unsupported-enum error
    pub fn unsupported_enum(context: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnsupportedEnum {
            context: context.into(),
            value: value.into(),
        }
    }

    /// Create an encode error with context
    pub fn encode(context: impl Into<String>, source: EncodeErrorKind) -> Self {
        Self::Encode {
            context: context.into(),
            source,
        }
    }

    /// Create a cancellation error
    pub fn cancelled(context: impl Into<String>) -> Self {
        Self::Cancelled {
            context: context.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error was raised by the encoder rather than the conversion
    #[must_use]
    pub const fn is_encode_error(&self) -> bool {
        matches!(self, Self::Encode { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for BomTreeError {
    fn from(err: std::io::Error) -> Self {
        Self::encode("writing output", EncodeErrorKind::Io(err))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to the error's existing context, so a
/// failure deep inside relationship resolution reads
/// `"serializing document: resolving relationships: edge #3 ..."`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<BomTreeError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: BomTreeError, new_ctx: &str) -> BomTreeError {
    match err {
        BomTreeError::Lookup { context, id } => BomTreeError::Lookup {
            context: chain_context(new_ctx, &context),
            id,
        },
        BomTreeError::UnsupportedEnum { context, value } => BomTreeError::UnsupportedEnum {
            context: chain_context(new_ctx, &context),
            value,
        },
        BomTreeError::Encode { context, source } => BomTreeError::Encode {
            context: chain_context(new_ctx, &context),
            source,
        },
        BomTreeError::Cancelled { context } => BomTreeError::Cancelled {
            context: chain_context(new_ctx, &context),
        },
        BomTreeError::Config(msg) => BomTreeError::Config(chain_context(new_ctx, &msg)),
        degraded @ BomTreeError::Degraded { .. } => degraded,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
