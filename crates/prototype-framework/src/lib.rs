//! # Prototype Framework
//!
//! Building blocks for the **Prototype** pattern: make new instances by copying an
//! existing one instead of constructing from scratch.
//!
//! ## Core Abstractions
//!
//! 1. **[`Prototype`]** - The typed capability. Cloning is [`Clone`]; the trait adds
//!    [`clone_with`](Prototype::clone_with) for "copy, then customize".
//! 2. **[`ErasedPrototype`]** - The object-safe form. Clones through `Box<dyn ErasedPrototype>`
//!    and narrows back with [`downcast`] / [`downcast_ref`].
//! 3. **[`Shared`]** - A reference-counted handle. A field of this type is copied by
//!    reference, which is what makes a clone shallow.
//!
//! ## Shallow vs. Deep
//!
//! | Field type | Effect of `clone()` | Mutation through the clone |
//! |------------|---------------------|----------------------------|
//! | `Shared<T>` | Copies the handle | Visible through the prototype |
//! | `T` | Clones `T` recursively | Invisible to the prototype |
//!
//! Deep copies recurse through every owned field exactly once. Cyclic graphs are not
//! supported; they would need `Shared` plus cycle tracking.
//!
//! ## Errors
//!
//! Typed cloning cannot fail. Narrowing an erased value to the wrong type returns
//! [`PrototypeError::TypeMismatch`].

pub mod erased;
pub mod error;
pub mod prototype;
pub mod shared;
pub mod tracing;

// Re-exports for convenience
pub use erased::{downcast, downcast_ref, erase, ErasedPrototype};
pub use error::{PrototypeError, PrototypeResult};
pub use prototype::Prototype;
pub use shared::Shared;
