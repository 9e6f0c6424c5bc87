//! Shared test helpers: model fixtures and scope assertions.

#![allow(dead_code)]

pub mod scope_assertions;

pub use model_fixtures::*;
pub use scope_assertions::*;
