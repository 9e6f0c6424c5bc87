//! Inverse-reference queries: supertypes, features and axioms of a member.
//!
//! Most queries return the union of what a member owns directly and what is
//! declared on reference-wrappers pointing at it. A wrapper can add
//! specializations, keys, restrictions or assertions to a member declared
//! elsewhere without changing the member itself.

use indexmap::IndexSet;

use super::closure::closure;
use super::read;
use crate::base::ElementId;
use crate::semantic::ReferenceIndex;
use crate::syntax::{Element, Model, ReferenceRole, RelationRestrictionKind};

/// Query library over a model and its reference index.
#[derive(Clone, Copy)]
pub struct Search<'a> {
    model: &'a Model,
    index: &'a ReferenceIndex,
}

impl<'a> Search<'a> {
    pub fn new(model: &'a Model, index: &'a ReferenceIndex) -> Self {
        Self { model, index }
    }

    pub fn model(&self) -> &'a Model {
        self.model
    }

    pub fn index(&self) -> &'a ReferenceIndex {
        self.index
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    /// Referrers of `target` through `role` whose element satisfies `accept`.
    fn referrers(
        &self,
        target: ElementId,
        role: ReferenceRole,
        accept: impl Fn(&Element) -> bool,
    ) -> Vec<ElementId> {
        self.index
            .get_sources_with_role(target, role)
            .into_iter()
            .filter(|source| self.model.element(*source).is_some_and(&accept))
            .collect()
    }

    /// Children of `member` and of every reference-wrapper to it that satisfy
    /// `accept`.
    fn owned_including_references(
        &self,
        member: ElementId,
        accept: impl Fn(&Element) -> bool,
    ) -> Vec<ElementId> {
        let mut owners = vec![member];
        owners.extend(self.references_to(member));

        owners
            .into_iter()
            .flat_map(|owner| self.model.children(owner).iter().copied())
            .filter(|child| self.model.element(*child).is_some_and(&accept))
            .collect()
    }

    // ========================================================================
    // REFERENCES AND SPECIALIZATION
    // ========================================================================

    /// Reference-wrappers that dereference to `member`.
    pub fn references_to(&self, member: ElementId) -> Vec<ElementId> {
        self.referrers(member, ReferenceRole::Member, |e| {
            matches!(e, Element::Reference(_))
        })
    }

    /// Specialization axioms that have `term` as their sub term.
    pub fn specializations_with_subterm(&self, term: ElementId) -> Vec<ElementId> {
        self.owned_including_references(term, |e| matches!(e, Element::SpecializationAxiom(_)))
    }

    /// Specialization axioms that have `term` as their super term.
    pub fn specializations_with_superterm(&self, term: ElementId) -> Vec<ElementId> {
        self.referrers(term, ReferenceRole::SpecializedTerm, |e| {
            matches!(e, Element::SpecializationAxiom(_))
        })
    }

    /// Terms that `term` directly specializes.
    pub fn direct_supertypes(&self, term: ElementId) -> Vec<ElementId> {
        self.specializations_with_subterm(term)
            .into_iter()
            .filter_map(|axiom| read::super_term(self.model, axiom))
            .collect()
    }

    /// Terms that `term` directly or transitively specializes.
    pub fn all_supertypes(&self, term: ElementId, inclusive: bool) -> IndexSet<ElementId> {
        closure(term, inclusive, |t| self.direct_supertypes(t))
    }

    // ========================================================================
    // PROPERTIES
    // ========================================================================

    pub fn scalar_properties_with_domain(&self, domain: ElementId) -> Vec<ElementId> {
        self.referrers(domain, ReferenceRole::Domain, |e| {
            matches!(e, Element::ScalarProperty(_))
        })
    }

    pub fn structured_properties_with_domain(&self, domain: ElementId) -> Vec<ElementId> {
        self.referrers(domain, ReferenceRole::Domain, |e| {
            matches!(e, Element::StructuredProperty(_))
        })
    }

    /// Scalar then structured properties whose domain is `domain`.
    pub fn properties_with_domain(&self, domain: ElementId) -> Vec<ElementId> {
        let mut properties = self.scalar_properties_with_domain(domain);
        properties.extend(self.structured_properties_with_domain(domain));
        properties
    }

    // ========================================================================
    // AXIOMS
    // ========================================================================

    pub fn keys_of(&self, entity: ElementId) -> Vec<ElementId> {
        self.owned_including_references(entity, |e| matches!(e, Element::KeyAxiom(_)))
    }

    pub fn property_restrictions_of(&self, classifier: ElementId) -> Vec<ElementId> {
        self.owned_including_references(classifier, |e| {
            matches!(e, Element::PropertyRestrictionAxiom(_))
        })
    }

    pub fn relation_restrictions_of(&self, entity: ElementId) -> Vec<ElementId> {
        self.owned_including_references(entity, |e| {
            matches!(e, Element::RelationRestrictionAxiom(_))
        })
    }

    /// Relation range restrictions whose range is `range`.
    pub fn relation_range_restrictions_with_range(&self, range: ElementId) -> Vec<ElementId> {
        self.referrers(range, ReferenceRole::RestrictionRange, |e| {
            matches!(
                e,
                Element::RelationRestrictionAxiom(r)
                    if matches!(r.kind, RelationRestrictionKind::Range { .. })
            )
        })
    }

    // ========================================================================
    // RELATIONS
    // ========================================================================

    pub fn relation_entities_with_source(&self, source: ElementId) -> Vec<ElementId> {
        self.referrers(source, ReferenceRole::Source, |e| {
            matches!(e, Element::RelationEntity(_))
        })
    }

    pub fn relation_entities_with_target(&self, target: ElementId) -> Vec<ElementId> {
        self.referrers(target, ReferenceRole::Target, |e| {
            matches!(e, Element::RelationEntity(_))
        })
    }

    /// Relations that start at `entity`: forward relations of relation
    /// entities sourced at it, and reverse relations of those targeting it.
    pub fn source_relations_of(&self, entity: ElementId) -> Vec<ElementId> {
        let forward = self
            .relation_entities_with_source(entity)
            .into_iter()
            .filter_map(|r| read::forward_relation(self.model, r));
        let reverse = self
            .relation_entities_with_target(entity)
            .into_iter()
            .filter_map(|r| read::reverse_relation(self.model, r));
        forward.chain(reverse).collect()
    }

    /// Relations that end at `entity`; the mirror of
    /// [`source_relations_of`](Self::source_relations_of).
    pub fn target_relations_of(&self, entity: ElementId) -> Vec<ElementId> {
        let forward = self
            .relation_entities_with_target(entity)
            .into_iter()
            .filter_map(|r| read::forward_relation(self.model, r));
        let reverse = self
            .relation_entities_with_source(entity)
            .into_iter()
            .filter_map(|r| read::reverse_relation(self.model, r));
        forward.chain(reverse).collect()
    }

    // ========================================================================
    // INSTANCES
    // ========================================================================

    /// Property value assertions on an instance.
    ///
    /// Only named instances can be referenced, so wrappers are consulted for
    /// them alone.
    pub fn property_value_assertions_of(&self, instance: ElementId) -> Vec<ElementId> {
        let accept = |e: &Element| matches!(e, Element::PropertyValueAssertion(_));
        match self.model.element(instance) {
            Some(e) if e.is_named_instance() => self.owned_including_references(instance, accept),
            _ => self
                .model
                .children(instance)
                .iter()
                .copied()
                .filter(|c| self.model.element(*c).is_some_and(accept))
                .collect(),
        }
    }

    pub fn link_assertions_of(&self, instance: ElementId) -> Vec<ElementId> {
        self.owned_including_references(instance, |e| matches!(e, Element::LinkAssertion(_)))
    }

    /// Relation instances listing `source` among their sources.
    pub fn relation_instances_with_source(&self, source: ElementId) -> Vec<ElementId> {
        self.referrers(source, ReferenceRole::InstanceSource, |e| {
            matches!(e, Element::RelationInstance(_))
        })
    }
}
