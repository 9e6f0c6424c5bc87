//! Element variants of a resolved OML syntax tree.
//!
//! Containment (which axiom belongs to which member, which statement belongs
//! to which ontology) lives in the [`Model`](super::Model) arena as
//! parent/child links. The payloads here only carry what a node *references*:
//! every cross reference has already been resolved by the linker into an
//! [`ElementId`], and `None` stands for a reference that did not resolve.

use std::fmt;

use smol_str::SmolStr;

use crate::base::ElementId;

// ============================================================================
// ONTOLOGIES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OntologyKind {
    Vocabulary,
    VocabularyBundle,
    Description,
    DescriptionBundle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    Extension,
    Usage,
    Inclusion,
}

/// An `extends`/`uses`/`includes` import of another ontology's namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    pub kind: ImportKind,
    pub namespace: SmolStr,
    /// Prefix override used for the imported namespace, if any.
    pub prefix: Option<SmolStr>,
}

/// Root container of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ontology {
    pub kind: OntologyKind,
    /// Globally unique absolute namespace, e.g. `http://example.com/dnd#`.
    pub namespace: SmolStr,
    /// Short alias for the namespace, e.g. `dnd`.
    pub prefix: SmolStr,
    pub imports: Vec<Import>,
}

// ============================================================================
// MEMBERS
// ============================================================================

/// A named type-like member with no cross references of its own
/// (aspects, concepts, structures, rules).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub name: SmolStr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Faceted,
    Enumerated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    pub name: SmolStr,
    pub kind: ScalarKind,
}

/// A reified relation between a source and a target entity.
///
/// Its forward and reverse relations are child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationEntity {
    pub name: SmolStr,
    pub source: Option<ElementId>,
    pub target: Option<ElementId>,
}

/// A scalar or structured property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticProperty {
    pub name: SmolStr,
    pub domain: Option<ElementId>,
    pub range: Option<ElementId>,
}

/// Forward or reverse relation of a relation entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub name: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptInstance {
    pub name: SmolStr,
    pub types: Vec<ElementId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationInstance {
    pub name: SmolStr,
    pub types: Vec<ElementId>,
    pub sources: Vec<ElementId>,
    pub targets: Vec<ElementId>,
}

/// An anonymous instance of a structure, nested in an assertion or
/// restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureInstance {
    pub structure: Option<ElementId>,
}

// ============================================================================
// AXIOMS AND ASSERTIONS
// ============================================================================

/// `sub < super`: owned by the sub term (or by a reference to it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecializationAxiom {
    pub specialized_term: Option<ElementId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAxiom {
    pub properties: Vec<ElementId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Scalar,
    Structured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyRestrictionKind {
    Range,
    Cardinality,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRestrictionAxiom {
    pub property_kind: PropertyKind,
    pub kind: PropertyRestrictionKind,
    pub property: Option<ElementId>,
    /// Restricted range for range restrictions.
    pub range: Option<ElementId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationRestrictionKind {
    Range { range: Option<ElementId> },
    Cardinality,
    Target { target: Option<ElementId> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationRestrictionAxiom {
    pub kind: RelationRestrictionKind,
    pub relation: Option<ElementId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyValueAssertion {
    pub property: Option<ElementId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAssertion {
    pub relation: Option<ElementId>,
    pub target: Option<ElementId>,
}

// ============================================================================
// REFERENCE WRAPPERS
// ============================================================================

/// Which kind of member a reference-wrapper points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Aspect,
    Concept,
    RelationEntity,
    Structure,
    Scalar,
    ScalarProperty,
    StructuredProperty,
    Relation,
    Rule,
    ConceptInstance,
    RelationInstance,
}

/// `ref concept dnd:Monster [ ... ]`: adds axioms or assertions to a member
/// declared elsewhere without being a member itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberReference {
    pub kind: ReferenceKind,
    pub member: Option<ElementId>,
}

// ============================================================================
// ELEMENT
// ============================================================================

/// Any node of the resolved syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Ontology(Ontology),
    Aspect(Term),
    Concept(Term),
    RelationEntity(RelationEntity),
    Structure(Term),
    Scalar(Scalar),
    ScalarProperty(SemanticProperty),
    StructuredProperty(SemanticProperty),
    ForwardRelation(Relation),
    ReverseRelation(Relation),
    Rule(Term),
    ConceptInstance(ConceptInstance),
    RelationInstance(RelationInstance),
    StructureInstance(StructureInstance),
    SpecializationAxiom(SpecializationAxiom),
    KeyAxiom(KeyAxiom),
    PropertyRestrictionAxiom(PropertyRestrictionAxiom),
    RelationRestrictionAxiom(RelationRestrictionAxiom),
    PropertyValueAssertion(PropertyValueAssertion),
    LinkAssertion(LinkAssertion),
    Reference(MemberReference),
}

/// Payload-free discriminant of [`Element`], used in logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Ontology,
    Aspect,
    Concept,
    RelationEntity,
    Structure,
    Scalar,
    ScalarProperty,
    StructuredProperty,
    ForwardRelation,
    ReverseRelation,
    Rule,
    ConceptInstance,
    RelationInstance,
    StructureInstance,
    SpecializationAxiom,
    KeyAxiom,
    PropertyRestrictionAxiom,
    RelationRestrictionAxiom,
    PropertyValueAssertion,
    LinkAssertion,
    Reference,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Ontology => "Ontology",
            ElementKind::Aspect => "Aspect",
            ElementKind::Concept => "Concept",
            ElementKind::RelationEntity => "RelationEntity",
            ElementKind::Structure => "Structure",
            ElementKind::Scalar => "Scalar",
            ElementKind::ScalarProperty => "ScalarProperty",
            ElementKind::StructuredProperty => "StructuredProperty",
            ElementKind::ForwardRelation => "ForwardRelation",
            ElementKind::ReverseRelation => "ReverseRelation",
            ElementKind::Rule => "Rule",
            ElementKind::ConceptInstance => "ConceptInstance",
            ElementKind::RelationInstance => "RelationInstance",
            ElementKind::StructureInstance => "StructureInstance",
            ElementKind::SpecializationAxiom => "SpecializationAxiom",
            ElementKind::KeyAxiom => "KeyAxiom",
            ElementKind::PropertyRestrictionAxiom => "PropertyRestrictionAxiom",
            ElementKind::RelationRestrictionAxiom => "RelationRestrictionAxiom",
            ElementKind::PropertyValueAssertion => "PropertyValueAssertion",
            ElementKind::LinkAssertion => "LinkAssertion",
            ElementKind::Reference => "Reference",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The role a cross reference plays in its referrer.
///
/// The reverse index stores roles so a query like "properties whose *domain*
/// is X" does not pick up properties whose *range* is X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceRole {
    Domain,
    Range,
    SpecializedTerm,
    Source,
    Target,
    KeyProperty,
    RestrictedProperty,
    RestrictedRelation,
    RestrictionRange,
    RestrictionTarget,
    AssertedProperty,
    LinkRelation,
    LinkTarget,
    InstanceType,
    InstanceSource,
    InstanceTarget,
    StructureType,
    Member,
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Ontology(_) => ElementKind::Ontology,
            Element::Aspect(_) => ElementKind::Aspect,
            Element::Concept(_) => ElementKind::Concept,
            Element::RelationEntity(_) => ElementKind::RelationEntity,
            Element::Structure(_) => ElementKind::Structure,
            Element::Scalar(_) => ElementKind::Scalar,
            Element::ScalarProperty(_) => ElementKind::ScalarProperty,
            Element::StructuredProperty(_) => ElementKind::StructuredProperty,
            Element::ForwardRelation(_) => ElementKind::ForwardRelation,
            Element::ReverseRelation(_) => ElementKind::ReverseRelation,
            Element::Rule(_) => ElementKind::Rule,
            Element::ConceptInstance(_) => ElementKind::ConceptInstance,
            Element::RelationInstance(_) => ElementKind::RelationInstance,
            Element::StructureInstance(_) => ElementKind::StructureInstance,
            Element::SpecializationAxiom(_) => ElementKind::SpecializationAxiom,
            Element::KeyAxiom(_) => ElementKind::KeyAxiom,
            Element::PropertyRestrictionAxiom(_) => ElementKind::PropertyRestrictionAxiom,
            Element::RelationRestrictionAxiom(_) => ElementKind::RelationRestrictionAxiom,
            Element::PropertyValueAssertion(_) => ElementKind::PropertyValueAssertion,
            Element::LinkAssertion(_) => ElementKind::LinkAssertion,
            Element::Reference(_) => ElementKind::Reference,
        }
    }

    /// Name of a member; `None` for ontologies, axioms, assertions,
    /// structure instances and reference-wrappers.
    pub fn name(&self) -> Option<&str> {
        match self {
            Element::Aspect(t) | Element::Concept(t) | Element::Structure(t) | Element::Rule(t) => {
                Some(&t.name)
            }
            Element::RelationEntity(e) => Some(&e.name),
            Element::Scalar(s) => Some(&s.name),
            Element::ScalarProperty(p) | Element::StructuredProperty(p) => Some(&p.name),
            Element::ForwardRelation(r) | Element::ReverseRelation(r) => Some(&r.name),
            Element::ConceptInstance(i) => Some(&i.name),
            Element::RelationInstance(i) => Some(&i.name),
            Element::Ontology(_)
            | Element::StructureInstance(_)
            | Element::SpecializationAxiom(_)
            | Element::KeyAxiom(_)
            | Element::PropertyRestrictionAxiom(_)
            | Element::RelationRestrictionAxiom(_)
            | Element::PropertyValueAssertion(_)
            | Element::LinkAssertion(_)
            | Element::Reference(_) => None,
        }
    }

    /// Classifiers can own properties through their domain.
    pub fn is_classifier(&self) -> bool {
        matches!(
            self,
            Element::Aspect(_) | Element::Concept(_) | Element::RelationEntity(_) | Element::Structure(_)
        )
    }

    /// Entities can additionally carry keys and restrictions.
    pub fn is_entity(&self) -> bool {
        matches!(
            self,
            Element::Aspect(_) | Element::Concept(_) | Element::RelationEntity(_)
        )
    }

    pub fn is_named_instance(&self) -> bool {
        matches!(self, Element::ConceptInstance(_) | Element::RelationInstance(_))
    }

    /// All resolved cross references held by this element.
    pub fn references(&self) -> Vec<(ReferenceRole, ElementId)> {
        let mut refs = Vec::new();
        let mut push = |role: ReferenceRole, target: Option<ElementId>| {
            if let Some(target) = target {
                refs.push((role, target));
            }
        };
        match self {
            Element::RelationEntity(e) => {
                push(ReferenceRole::Source, e.source);
                push(ReferenceRole::Target, e.target);
            }
            Element::ScalarProperty(p) | Element::StructuredProperty(p) => {
                push(ReferenceRole::Domain, p.domain);
                push(ReferenceRole::Range, p.range);
            }
            Element::ConceptInstance(i) => {
                for t in &i.types {
                    push(ReferenceRole::InstanceType, Some(*t));
                }
            }
            Element::RelationInstance(i) => {
                for t in &i.types {
                    push(ReferenceRole::InstanceType, Some(*t));
                }
                for s in &i.sources {
                    push(ReferenceRole::InstanceSource, Some(*s));
                }
                for t in &i.targets {
                    push(ReferenceRole::InstanceTarget, Some(*t));
                }
            }
            Element::StructureInstance(i) => push(ReferenceRole::StructureType, i.structure),
            Element::SpecializationAxiom(a) => {
                push(ReferenceRole::SpecializedTerm, a.specialized_term)
            }
            Element::KeyAxiom(k) => {
                for p in &k.properties {
                    push(ReferenceRole::KeyProperty, Some(*p));
                }
            }
            Element::PropertyRestrictionAxiom(r) => {
                push(ReferenceRole::RestrictedProperty, r.property);
                push(ReferenceRole::RestrictionRange, r.range);
            }
            Element::RelationRestrictionAxiom(r) => {
                push(ReferenceRole::RestrictedRelation, r.relation);
                match r.kind {
                    RelationRestrictionKind::Range { range } => {
                        push(ReferenceRole::RestrictionRange, range)
                    }
                    RelationRestrictionKind::Target { target } => {
                        push(ReferenceRole::RestrictionTarget, target)
                    }
                    RelationRestrictionKind::Cardinality => {}
                }
            }
            Element::PropertyValueAssertion(a) => push(ReferenceRole::AssertedProperty, a.property),
            Element::LinkAssertion(l) => {
                push(ReferenceRole::LinkRelation, l.relation);
                push(ReferenceRole::LinkTarget, l.target);
            }
            Element::Reference(r) => push(ReferenceRole::Member, r.member),
            Element::Ontology(_)
            | Element::Aspect(_)
            | Element::Concept(_)
            | Element::Structure(_)
            | Element::Scalar(_)
            | Element::ForwardRelation(_)
            | Element::ReverseRelation(_)
            | Element::Rule(_) => {}
        }
        refs
    }
}
