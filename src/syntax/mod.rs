//! Syntax: the resolved OML element tree.
//!
//! Parsing and linking happen upstream. This module models their output:
//! a [`Model`] arena of [`Node`]s, each wrapping one [`Element`] variant,
//! with cross references already resolved to [`ElementId`](crate::base::ElementId)s.

mod builder;
mod element;
mod model;

pub use builder::ModelBuilder;
pub use element::{
    ConceptInstance, Element, ElementKind, Import, ImportKind, KeyAxiom, LinkAssertion,
    MemberReference, Ontology, OntologyKind, PropertyKind, PropertyRestrictionAxiom,
    PropertyRestrictionKind, PropertyValueAssertion, ReferenceKind, ReferenceRole, Relation,
    RelationEntity, RelationInstance, RelationRestrictionAxiom, RelationRestrictionKind, Scalar,
    ScalarKind, SemanticProperty, SpecializationAxiom, StructureInstance, Term,
};
pub use model::{Model, Node};
