//! Diagram scope analysis.
//!
//! Computes the [`DiagramScope`] of one ontology: the elements a diagram of
//! it shows, the properties attributed to each classifier and the axioms and
//! assertions that survive filtering.
//!
//! ```text
//! analyze(model, ontology)
//!     │
//!     ├─ Discovery   ─► aspects, concepts, relation entities, structures,
//!     │                 scalars, instances (+ raw axiom candidates)
//!     │
//!     └─ Resolution  ─► scalar/structured properties per classifier,
//!                       entity axioms, relation incident elements
//! ```

mod error;
mod options;
mod scope;

pub use error::{Phase, ScopeError, ScopeResult};
pub use options::{Locality, ScopeOptions};
pub use scope::{DiagramScope, ElementState, analyze, analyze_with};
