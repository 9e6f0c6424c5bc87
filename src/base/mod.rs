//! Foundation types for the OML toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`ElementId`] - Stable arena index identifying a syntax element
//! - [`iri`] - IRI and abbreviated-IRI text helpers
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//!
//! This module has NO dependencies on other oml modules.

mod element_id;
pub mod iri;

pub use element_id::ElementId;
pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
