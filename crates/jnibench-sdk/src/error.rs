//! Error types for host accessor calls
//!
//! Unresolved handles (class or field lookups that come back empty) mean the
//! shim and the managed class were built out of sync. They are never returned
//! to the host: [`settle`] turns them into a process abort. Everything else is
//! left for the host to report through its own pending exception.

/// Result type for host accessor calls
pub type HostResult<T> = Result<T, HostError>;

/// Host accessor error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// Class lookup returned no class
    #[error("class not found: {class}")]
    ClassNotFound {
        /// Binary class name (slash separated)
        class: String,
    },

    /// Instance field lookup returned no field identifier
    #[error("field not found: {class}.{name} ({descriptor})")]
    FieldNotFound {
        /// Owning class
        class: String,
        /// Field name
        name: String,
        /// Type descriptor
        descriptor: String,
    },

    /// Static field lookup returned no field identifier
    #[error("static field not found: {class}.{name} ({descriptor})")]
    StaticFieldNotFound {
        /// Owning class
        class: String,
        /// Field name
        name: String,
        /// Type descriptor
        descriptor: String,
    },

    /// Region length below zero
    #[error("negative region length: {0}")]
    NegativeLength(i32),

    /// Region length past the end of an array
    #[error("region length {len} exceeds array length {available}")]
    RegionOutOfBounds {
        /// Requested element count
        len: usize,
        /// Length of the shorter array
        available: usize,
    },

    /// Accessor call failed; the host holds a pending exception
    #[error("accessor failed: {0}")]
    Accessor(String),
}

impl HostError {
    /// Whether this error is an unresolved handle.
    pub fn is_unresolved(&self) -> bool {
        matches!(
            self,
            HostError::ClassNotFound { .. }
                | HostError::FieldNotFound { .. }
                | HostError::StaticFieldNotFound { .. }
        )
    }
}

/// Log the error and abort the process.
pub fn fatal(error: &HostError) -> ! {
    tracing::error!(target: "jnibench", error = %error, "unresolved host handle, aborting");
    std::process::abort()
}

/// Apply the boundary policy to an accessor result.
///
/// Unresolved handles abort the process. Any other error is logged and
/// dropped, returning `None` so the entry point can return to the host.
pub fn settle<T>(result: HostResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) if error.is_unresolved() => fatal(&error),
        Err(error) => {
            tracing::debug!(target: "jnibench", error = %error, "accessor failed");
            None
        }
    }
}
