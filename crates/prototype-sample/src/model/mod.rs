//! Pure data structures implementing the [`Prototype`](prototype_framework::Prototype) trait.

pub mod location;
pub mod smartphone;
pub mod store;

pub use location::*;
pub use smartphone::*;
pub use store::*;
