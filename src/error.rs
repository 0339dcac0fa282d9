//! Error types for quarry.

use thiserror::Error;

/// Why a descriptor could not be compiled into a statement.
///
/// Both kinds are caller-correctable data problems: the compiler reports them
/// as values and never panics on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// No column survived field resolution for an INSERT or UPDATE.
    #[error("No fields to write for scope '{scope}'")]
    EmptyFieldSet { scope: String },

    /// The override template has a broken or unknown placeholder.
    #[error("Malformed template at position {position}: {reason}")]
    MalformedTemplate { position: usize, reason: String },
}

impl CompileError {
    /// Create an empty field set error for the given scope.
    pub fn empty(scope: impl Into<String>) -> Self {
        Self::EmptyFieldSet {
            scope: scope.into(),
        }
    }

    /// Create a malformed template error at the given byte offset.
    pub fn template(position: usize, reason: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            position,
            reason: reason.into(),
        }
    }
}

/// Result type alias for compilation.
pub type CompileResult<T> = Result<T, CompileError>;

/// The main error type for everything around compilation.
#[derive(Debug, Error)]
pub enum QuarryError {
    /// Compilation failed.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Unknown dialect name.
    #[error("Invalid dialect: '{0}'. Expected: MySQL")]
    InvalidDialect(String),

    /// Unknown action name.
    #[error("Invalid action: '{0}'. Expected: create, read, update, delete, or count")]
    InvalidAction(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Descriptor or schema JSON could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Descriptor or config TOML could not be decoded.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for quarry operations.
pub type QuarryResult<T> = Result<T, QuarryError>;
