//! # Shared Handles
//!
//! [`Shared<T>`] is how a model says "this field is copied by reference". Cloning the
//! handle does not clone `T`: both handles point at the same instance, and the instance
//! lives as long as any handle does.
//!
//! The handle is `Rc<RefCell<T>>` underneath. Prototypes here are single-threaded, so
//! the handle is deliberately `!Send`; sharing a nested value across threads would need
//! a lock around it.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Reference-counted, interior-mutable handle to a nested value.
///
/// ```rust
/// use prototype_framework::Shared;
///
/// let original = Shared::new(String::from("F8"));
/// let copy = original.clone();
///
/// copy.borrow_mut().push_str("/2");
///
/// assert!(Shared::ptr_eq(&original, &copy));
/// assert_eq!(*original.borrow(), "F8/2");
/// ```
pub struct Shared<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Immutably borrows the shared value.
    ///
    /// # Panics
    /// Panics if the value is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    /// Mutably borrows the shared value. The change is visible through every handle.
    ///
    /// # Panics
    /// Panics if the value is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }

    /// Returns `true` if both handles point at the same instance.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.inner, &other.inner)
    }

    /// Number of handles currently sharing the value.
    pub fn handle_count(this: &Self) -> usize {
        Rc::strong_count(&this.inner)
    }
}

impl<T: Clone> Shared<T> {
    /// Returns a copy of the current value.
    pub fn snapshot(&self) -> T {
        self.inner.borrow().clone()
    }
}

// Not derived: the derive would require `T: Clone`, and cloning a handle never clones `T`.
impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Shared");
        match self.inner.try_borrow() {
            Ok(value) => d.field("value", &*value),
            Err(_) => d.field("value", &format_args!("<borrowed>")),
        };
        d.field("handles", &Rc::strong_count(&self.inner)).finish()
    }
}

impl<T: PartialEq> PartialEq for Shared<T> {
    /// Compares the values, not the identities. Use [`Shared::ptr_eq`] for identity.
    fn eq(&self, other: &Self) -> bool {
        *self.inner.borrow() == *other.inner.borrow()
    }
}
