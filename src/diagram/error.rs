//! Error types for diagram scope analysis.
//!
//! Dangling references are not errors at this layer: they contribute nothing
//! to any set. The only failures are programming or schema errors, where an
//! element kind shows up somewhere the analysis has no rule for.

use std::fmt;

use text_size::TextRange;
use thiserror::Error;

use crate::base::ElementId;
use crate::syntax::ElementKind;

/// The analysis phase an element was processed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Phase 1: decide which elements belong in the view.
    Discovery,
    /// Phase 2: attribute inherited features and filter axioms.
    Resolution,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Discovery => f.write_str("discovery"),
            Phase::Resolution => f.write_str("resolution"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("element {0} does not exist in the model")]
    UnknownElement(ElementId),

    #[error("analysis root {element} is a {found}, not an ontology")]
    NotAnOntology {
        element: ElementId,
        found: ElementKind,
    },

    #[error("no {phase} rule for {kind} element {element} (range {range:?})")]
    UnhandledElement {
        element: ElementId,
        kind: ElementKind,
        phase: Phase,
        range: Option<TextRange>,
    },
}

pub type ScopeResult<T> = Result<T, ScopeError>;
