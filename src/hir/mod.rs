//! High-level IR (HIR): queries over a linked model.
//!
//! ## Key Types
//!
//! - [`closure`]: transitive closure used for all supertype walks
//! - [`Search`]: inverse-reference queries (supertypes, properties by
//!   domain, keys, restrictions, relations, assertions)
//! - [`read`]: navigation helpers (dereferencing, ownership, IRIs)
//!
//! ## Query Layers
//!
//! ```text
//! Model                      ← INPUT: linked element arena
//!     │
//!     ▼
//! ReferenceIndex             ← target → referrers, built once
//!     │
//!     ▼
//! closure(root, expand)      ← each node expanded once
//!     │
//!     ▼
//! Search                     ← supertypes, features, axioms
//! ```

mod closure;
pub mod read;
mod search;

pub use closure::closure;
pub use search::Search;
