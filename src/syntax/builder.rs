//! Programmatic construction of linked models.
//!
//! The builder produces what the parser and linker hand to the analysis
//! layers: a containment tree whose cross references are already resolved
//! element ids. Referenced elements have to exist before their referrers are
//! added; passing `None` where a reference is expected models a reference
//! the linker could not resolve.

use smol_str::SmolStr;
use text_size::TextRange;

use super::element::*;
use super::model::{Model, Node};
use crate::base::ElementId;

#[derive(Debug, Default)]
pub struct ModelBuilder {
    nodes: Vec<Node>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Model {
        Model::from_nodes(self.nodes)
    }

    /// Add `element` as the last child of `container`.
    ///
    /// An unknown container leaves the element detached.
    pub fn add(&mut self, container: ElementId, element: Element) -> ElementId {
        let id = self.alloc(Some(container), element);
        if let Some(parent) = self.nodes.get_mut(container.index()) {
            parent.children.push(id);
        }
        id
    }

    /// Attach a source range to an element.
    pub fn set_range(&mut self, id: ElementId, range: TextRange) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.range = Some(range);
        }
    }

    fn alloc(&mut self, container: Option<ElementId>, element: Element) -> ElementId {
        let id = ElementId::new(self.nodes.len() as u32);
        self.nodes.push(Node {
            element,
            container,
            children: Vec::new(),
            range: None,
        });
        id
    }

    // ------------------------------------------------------------------------
    // Ontologies
    // ------------------------------------------------------------------------

    pub fn ontology(
        &mut self,
        kind: OntologyKind,
        namespace: impl Into<SmolStr>,
        prefix: impl Into<SmolStr>,
    ) -> ElementId {
        self.alloc(
            None,
            Element::Ontology(Ontology {
                kind,
                namespace: namespace.into(),
                prefix: prefix.into(),
                imports: Vec::new(),
            }),
        )
    }

    pub fn vocabulary(
        &mut self,
        namespace: impl Into<SmolStr>,
        prefix: impl Into<SmolStr>,
    ) -> ElementId {
        self.ontology(OntologyKind::Vocabulary, namespace, prefix)
    }

    pub fn description(
        &mut self,
        namespace: impl Into<SmolStr>,
        prefix: impl Into<SmolStr>,
    ) -> ElementId {
        self.ontology(OntologyKind::Description, namespace, prefix)
    }

    /// Record an import on an ontology. Non-ontologies are ignored.
    pub fn import(
        &mut self,
        ontology: ElementId,
        kind: ImportKind,
        namespace: impl Into<SmolStr>,
        prefix: Option<&str>,
    ) {
        if let Some(Node {
            element: Element::Ontology(o),
            ..
        }) = self.nodes.get_mut(ontology.index())
        {
            o.imports.push(Import {
                kind,
                namespace: namespace.into(),
                prefix: prefix.map(SmolStr::new),
            });
        }
    }

    // ------------------------------------------------------------------------
    // Members
    // ------------------------------------------------------------------------

    pub fn aspect(&mut self, ontology: ElementId, name: &str) -> ElementId {
        self.add(ontology, Element::Aspect(Term { name: name.into() }))
    }

    pub fn concept(&mut self, ontology: ElementId, name: &str) -> ElementId {
        self.add(ontology, Element::Concept(Term { name: name.into() }))
    }

    pub fn structure(&mut self, ontology: ElementId, name: &str) -> ElementId {
        self.add(ontology, Element::Structure(Term { name: name.into() }))
    }

    pub fn rule(&mut self, ontology: ElementId, name: &str) -> ElementId {
        self.add(ontology, Element::Rule(Term { name: name.into() }))
    }

    pub fn scalar(&mut self, ontology: ElementId, name: &str) -> ElementId {
        self.add(
            ontology,
            Element::Scalar(Scalar {
                name: name.into(),
                kind: ScalarKind::Faceted,
            }),
        )
    }

    pub fn relation_entity(
        &mut self,
        ontology: ElementId,
        name: &str,
        source: Option<ElementId>,
        target: Option<ElementId>,
    ) -> ElementId {
        self.add(
            ontology,
            Element::RelationEntity(RelationEntity {
                name: name.into(),
                source,
                target,
            }),
        )
    }

    pub fn forward_relation(&mut self, entity: ElementId, name: &str) -> ElementId {
        self.add(entity, Element::ForwardRelation(Relation { name: name.into() }))
    }

    pub fn reverse_relation(&mut self, entity: ElementId, name: &str) -> ElementId {
        self.add(entity, Element::ReverseRelation(Relation { name: name.into() }))
    }

    pub fn scalar_property(
        &mut self,
        ontology: ElementId,
        name: &str,
        domain: Option<ElementId>,
        range: Option<ElementId>,
    ) -> ElementId {
        self.add(
            ontology,
            Element::ScalarProperty(SemanticProperty {
                name: name.into(),
                domain,
                range,
            }),
        )
    }

    pub fn structured_property(
        &mut self,
        ontology: ElementId,
        name: &str,
        domain: Option<ElementId>,
        range: Option<ElementId>,
    ) -> ElementId {
        self.add(
            ontology,
            Element::StructuredProperty(SemanticProperty {
                name: name.into(),
                domain,
                range,
            }),
        )
    }

    pub fn concept_instance(
        &mut self,
        ontology: ElementId,
        name: &str,
        types: impl IntoIterator<Item = ElementId>,
    ) -> ElementId {
        self.add(
            ontology,
            Element::ConceptInstance(ConceptInstance {
                name: name.into(),
                types: types.into_iter().collect(),
            }),
        )
    }

    pub fn relation_instance(
        &mut self,
        ontology: ElementId,
        name: &str,
        sources: impl IntoIterator<Item = ElementId>,
        targets: impl IntoIterator<Item = ElementId>,
    ) -> ElementId {
        self.add(
            ontology,
            Element::RelationInstance(RelationInstance {
                name: name.into(),
                types: Vec::new(),
                sources: sources.into_iter().collect(),
                targets: targets.into_iter().collect(),
            }),
        )
    }

    /// A structure instance owned by `owner` (an assertion, a restriction or,
    /// for description fragments, an ontology).
    pub fn structure_instance(
        &mut self,
        owner: ElementId,
        structure: Option<ElementId>,
    ) -> ElementId {
        self.add(
            owner,
            Element::StructureInstance(StructureInstance { structure }),
        )
    }

    /// A reference-wrapper statement pointing at `member`.
    pub fn reference(
        &mut self,
        ontology: ElementId,
        kind: ReferenceKind,
        member: Option<ElementId>,
    ) -> ElementId {
        self.add(ontology, Element::Reference(MemberReference { kind, member }))
    }

    // ------------------------------------------------------------------------
    // Axioms and assertions
    // ------------------------------------------------------------------------

    /// `owner < specialized_term`. The owner may be a term or a reference to one.
    pub fn specialize(
        &mut self,
        owner: ElementId,
        specialized_term: Option<ElementId>,
    ) -> ElementId {
        self.add(
            owner,
            Element::SpecializationAxiom(SpecializationAxiom { specialized_term }),
        )
    }

    pub fn key(
        &mut self,
        owner: ElementId,
        properties: impl IntoIterator<Item = ElementId>,
    ) -> ElementId {
        self.add(
            owner,
            Element::KeyAxiom(KeyAxiom {
                properties: properties.into_iter().collect(),
            }),
        )
    }

    pub fn property_restriction(
        &mut self,
        owner: ElementId,
        property_kind: PropertyKind,
        kind: PropertyRestrictionKind,
        property: Option<ElementId>,
        range: Option<ElementId>,
    ) -> ElementId {
        self.add(
            owner,
            Element::PropertyRestrictionAxiom(PropertyRestrictionAxiom {
                property_kind,
                kind,
                property,
                range,
            }),
        )
    }

    pub fn relation_restriction(
        &mut self,
        owner: ElementId,
        kind: RelationRestrictionKind,
        relation: Option<ElementId>,
    ) -> ElementId {
        self.add(
            owner,
            Element::RelationRestrictionAxiom(RelationRestrictionAxiom { kind, relation }),
        )
    }

    pub fn property_value(&mut self, owner: ElementId, property: Option<ElementId>) -> ElementId {
        self.add(
            owner,
            Element::PropertyValueAssertion(PropertyValueAssertion { property }),
        )
    }

    pub fn link(
        &mut self,
        owner: ElementId,
        relation: Option<ElementId>,
        target: Option<ElementId>,
    ) -> ElementId {
        self.add(owner, Element::LinkAssertion(LinkAssertion { relation, target }))
    }
}
