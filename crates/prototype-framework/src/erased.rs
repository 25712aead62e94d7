//! # Type-Erased Prototypes
//!
//! Sometimes a prototype has to travel without its concrete type, e.g. a heterogeneous
//! `Vec` of things that can all be cloned. [`ErasedPrototype`] is the object-safe
//! version of [`Prototype`]: it clones into a `Box<dyn ErasedPrototype>`, and getting the
//! concrete type back is an explicit, checked step.
//!
//! Every [`Prototype`] gets this trait for free through a blanket implementation, so
//! there is nothing to implement by hand.
//!
//! ## Narrowing
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`downcast`] | `Box<dyn ErasedPrototype>` | `T` (by value) |
//! | [`downcast_ref`] | `&dyn ErasedPrototype` | `&T` |
//!
//! Both return [`PrototypeError::TypeMismatch`] when the erased value is not a `T`.
//! Nothing is ever reinterpreted unchecked.

use crate::error::{PrototypeError, PrototypeResult};
use crate::prototype::{short_type_name, Prototype};
use std::any::Any;
use std::fmt::Debug;
use tracing::{debug, warn};

/// Object-safe clone capability.
///
/// ```rust
/// use prototype_framework::{downcast, erase, Prototype, PrototypeError};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Ticket { seat: u32 }
///
/// impl Prototype for Ticket {
///     type Patch = ();
///     fn apply(&mut self, _: ()) {}
/// }
///
/// let erased = erase(Ticket { seat: 7 });
/// let copy: Ticket = downcast(erased.clone_boxed()).unwrap();
/// assert_eq!(copy.seat, 7);
///
/// #[derive(Clone, Debug)]
/// struct Voucher;
/// # impl Prototype for Voucher { type Patch = (); fn apply(&mut self, _: ()) {} }
///
/// let wrong = downcast::<Voucher>(erased);
/// assert!(matches!(wrong, Err(PrototypeError::TypeMismatch { .. })));
/// ```
pub trait ErasedPrototype: Any + Debug {
    /// Clones the value behind the erased interface.
    fn clone_boxed(&self) -> Box<dyn ErasedPrototype>;

    /// Full type name of the concrete value.
    fn type_name(&self) -> &'static str;

    /// Borrows the value as `Any`, for checked narrowing.
    fn as_any(&self) -> &dyn Any;

    /// Converts the box into `Box<dyn Any>`, for checked narrowing by value.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Prototype> ErasedPrototype for T {
    fn clone_boxed(&self) -> Box<dyn ErasedPrototype> {
        debug!(prototype = short_type_name::<T>(), "Erased clone");
        Box::new(self.clone())
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl Clone for Box<dyn ErasedPrototype> {
    fn clone(&self) -> Self {
        (**self).clone_boxed()
    }
}

/// Boxes a prototype behind the erased interface.
pub fn erase<T: Prototype>(value: T) -> Box<dyn ErasedPrototype> {
    Box::new(value)
}

/// Narrows an erased prototype back to `T`, consuming the box.
pub fn downcast<T: Prototype>(erased: Box<dyn ErasedPrototype>) -> PrototypeResult<T> {
    let found = erased.type_name();
    match erased.into_any().downcast::<T>() {
        Ok(value) => Ok(*value),
        Err(_) => Err(mismatch::<T>(found)),
    }
}

/// Narrows a borrowed erased prototype back to `&T`.
pub fn downcast_ref<T: Prototype>(erased: &dyn ErasedPrototype) -> PrototypeResult<&T> {
    erased
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| mismatch::<T>(erased.type_name()))
}

fn mismatch<T>(found: &'static str) -> PrototypeError {
    let expected = std::any::type_name::<T>();
    warn!(expected, found, "Type mismatch");
    PrototypeError::TypeMismatch { expected, found }
}
