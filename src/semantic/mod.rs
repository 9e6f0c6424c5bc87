//! # Semantic Indexes
//!
//! Read-only indexes computed once per linked [`Model`](crate::syntax::Model)
//! and shared by the query layer.

pub mod graphs;

pub use graphs::{ReferenceIndex, ReferenceInfo};
