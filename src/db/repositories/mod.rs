//! Repository implementations module.
//!
//! This module contains different implementations of the `HearingRepository`
//! trait:
//! - `local`: In-memory implementation for unit testing and local development
pub mod local;

pub use local::LocalRepository;
