//! # Framework Errors
//!
//! Cloning a typed prototype cannot fail. The only failure lives at the
//! type-erased boundary: narrowing a `Box<dyn ErasedPrototype>` back to a
//! concrete type that does not match what is actually inside.

/// Errors that can occur when working with prototypes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrototypeError {
    /// The erased value is not of the requested concrete type.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// Shorthand result type for prototype operations.
pub type PrototypeResult<T> = Result<T, PrototypeError>;
