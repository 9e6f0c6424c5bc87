//! # oml-base
//!
//! Diagram scope analysis for OML (Ontological Modeling Language) models.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! diagram   → Two-phase diagram scope analysis (analyze, DiagramScope)
//!   ↓
//! hir       → Queries: closure, Search, read helpers
//!   ↓
//! semantic  → ReferenceIndex over resolved cross references
//!   ↓
//! syntax    → Element arena (Model, Element, ModelBuilder)
//!   ↓
//! base      → Primitives (ElementId, IRI helpers, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → semantic → hir → diagram)
// ============================================================================

/// Foundation types: ElementId, IRI helpers, TextRange
pub mod base;

/// Syntax: linked element tree and its builder
pub mod syntax;

/// Semantic indexes: reverse references
pub mod semantic;

/// High-level IR: inverse-reference queries
pub mod hir;

/// Diagram scope analysis
pub mod diagram;

// Re-export foundation types
pub use base::{ElementId, TextRange, TextSize};

// Re-export the analysis entry points
pub use diagram::{
    DiagramScope, ElementState, Locality, ScopeError, ScopeOptions, ScopeResult, analyze,
    analyze_with,
};
pub use syntax::{Element, ElementKind, Model, ModelBuilder};
