//! # Prototype Trait
//!
//! The `Prototype` trait is the capability every cloneable model opts into. The clone
//! itself is plain [`Clone`]: whatever `clone()` does for a type decides whether the copy
//! is shallow or deep. `Prototype` adds the part the pattern is actually used for:
//! take an existing instance, copy it, then customize the copy.
//!
//! # Architecture Note
//! There is no base class and no registry. Any type that is `Clone + Debug` can implement
//! the trait directly, and the typed contract hands back `Self`, so callers never need to
//! cast the result. When a cast *is* needed (a value that travelled through
//! [`ErasedPrototype`](crate::ErasedPrototype)), narrowing is checked and fails with
//! [`PrototypeError::TypeMismatch`](crate::PrototypeError::TypeMismatch).
//!
//! # Shallow vs. Deep
//! - A field held through [`Shared`](crate::Shared) is copied by reference: the clone and
//!   the prototype see the same nested instance.
//! - A field held by value is cloned recursively: the clone gets its own nested instance.
//!
//! The trait does not pick one for you. The field types do.

use std::fmt::Debug;
use tracing::debug;

/// Capability contract for types that can serve as a prototype.
///
/// ```rust
/// use prototype_framework::Prototype;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Badge { label: String }
///
/// #[derive(Debug)]
/// struct BadgeUpdate { label: Option<String> }
///
/// impl Prototype for Badge {
///     type Patch = BadgeUpdate;
///
///     fn apply(&mut self, patch: BadgeUpdate) {
///         if let Some(label) = patch.label {
///             self.label = label;
///         }
///     }
/// }
///
/// let gold = Badge { label: "gold".into() };
/// let silver = gold.clone_with(BadgeUpdate { label: Some("silver".into()) });
///
/// assert_eq!(gold.label, "gold");
/// assert_eq!(silver.label, "silver");
/// ```
pub trait Prototype: Clone + Debug + 'static {
    /// Partial update applied to a copy. Fields left as `None` keep the prototype's value.
    type Patch: Debug;

    /// Applies `patch` to `self` in place.
    fn apply(&mut self, patch: Self::Patch);

    /// Clones the prototype and applies `patch` to the copy.
    ///
    /// The receiver's own fields are left untouched. Anything the receiver shares with the
    /// copy (see [`Shared`](crate::Shared)) is still shared, so a patch that reaches into
    /// shared state is visible through both.
    fn clone_with(&self, patch: Self::Patch) -> Self {
        debug!(prototype = short_type_name::<Self>(), ?patch, "Clone with patch");
        let mut copy = self.clone();
        copy.apply(patch);
        copy
    }
}

/// Extracts just the type name (e.g. "SmartPhone" instead of "prototype_sample::model::SmartPhone").
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.split('<')
        .next()
        .and_then(|path| path.rsplit("::").next())
        .unwrap_or(full)
}
