//! # Prototype Sample Library
//!
//! Domain models built on [`prototype_framework`], exposed for the walkthrough binary and
//! integration tests.
//!
//! - [`SmartPhone`](model::SmartPhone): a flat record; every clone is independent.
//! - [`ShallowStore`](model::ShallowStore): clones share one [`Location`](model::Location).
//! - [`DeepStore`](model::DeepStore): clones own their own [`Location`](model::Location).

pub mod model;
