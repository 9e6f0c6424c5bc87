//! Reference graphs derived from a linked model.

mod reference_index;

pub use reference_index::{ReferenceIndex, ReferenceInfo};
