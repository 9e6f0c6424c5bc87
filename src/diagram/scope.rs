//! Diagram scope computation.
//!
//! Decides which elements of an ontology belong in its diagram, which
//! properties each classifier shows, and which axioms and assertions
//! survive. The analysis runs in two phases over one `ScopeComputation`:
//!
//! ```text
//! Phase 1 (Discovery)   statements ──visit──► scope maps + raw candidates
//!                                              + Phase 2 worklist
//! Phase 2 (Resolution)  worklist   ──visit──► attributed properties
//!                                              + filtered axioms
//! ```
//!
//! A property is attributed to the most general ancestor of a classifier
//! that is itself part of the view. When that ancestor is not part of the
//! view the property sinks to the classifier being resolved.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::error::{Phase, ScopeError, ScopeResult};
use super::options::{Locality, ScopeOptions};
use crate::base::ElementId;
use crate::hir::{Search, read};
use crate::semantic::ReferenceIndex;
use crate::syntax::{Element, Model, RelationRestrictionKind};

type ElementSets = IndexMap<ElementId, IndexSet<ElementId>>;

/// Lifecycle of an element during one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementState {
    /// Not part of the view.
    Unseen,
    /// Added to the view in Phase 1.
    Discovered,
    /// Classifier or structure whose features and axioms were resolved in
    /// Phase 2.
    Resolved,
}

// ============================================================================
// RESULT
// ============================================================================

/// The materialized view of an ontology, handed to diagram rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramScope {
    aspects: IndexSet<ElementId>,
    concepts: IndexSet<ElementId>,
    scalars: IndexSet<ElementId>,
    structures: IndexSet<ElementId>,
    relation_entities: IndexSet<ElementId>,
    scalar_properties: ElementSets,
    structured_properties: ElementSets,
    entity_axioms: ElementSets,
    relation_incident_elements: ElementSets,
    instance_assertions: ElementSets,
    resolved: IndexSet<ElementId>,
}

impl DiagramScope {
    /// Every element shown in the view.
    pub fn scope(&self) -> IndexSet<ElementId> {
        self.aspects
            .iter()
            .chain(&self.concepts)
            .chain(&self.scalars)
            .chain(&self.structures)
            .chain(&self.relation_entities)
            .chain(self.instance_assertions.keys())
            .copied()
            .collect()
    }

    /// Whether `id` is in one of the top-level scope maps.
    pub fn contains(&self, id: ElementId) -> bool {
        self.aspects.contains(&id)
            || self.concepts.contains(&id)
            || self.scalars.contains(&id)
            || self.structures.contains(&id)
            || self.relation_entities.contains(&id)
            || self.instance_assertions.contains_key(&id)
    }

    pub fn aspects(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.aspects.iter().copied()
    }

    pub fn concepts(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.concepts.iter().copied()
    }

    pub fn scalars(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.scalars.iter().copied()
    }

    pub fn structures(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.structures.iter().copied()
    }

    pub fn relation_entities(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.relation_entities.iter().copied()
    }

    /// Named and structure instances in the view.
    pub fn instances(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.instance_assertions.keys().copied()
    }

    /// Scalar properties shown on a classifier; `None` if it is not one in
    /// the view.
    pub fn scalar_properties(&self, classifier: ElementId) -> Option<&IndexSet<ElementId>> {
        self.scalar_properties.get(&classifier)
    }

    pub fn structured_properties(&self, classifier: ElementId) -> Option<&IndexSet<ElementId>> {
        self.structured_properties.get(&classifier)
    }

    /// Axioms of an entity whose referenced elements are all in the view.
    pub fn entity_axioms(&self, entity: ElementId) -> Option<&IndexSet<ElementId>> {
        self.entity_axioms.get(&entity)
    }

    /// All entities with their retained axioms.
    pub fn all_entity_axioms(&self) -> impl Iterator<Item = (ElementId, &IndexSet<ElementId>)> {
        self.entity_axioms.iter().map(|(id, axioms)| (*id, axioms))
    }

    /// Assertions and links of an instance.
    pub fn instance_assertions(&self, instance: ElementId) -> Option<&IndexSet<ElementId>> {
        self.instance_assertions.get(&instance)
    }

    /// Retained specializations, range restrictions and relations pointing
    /// at a relation entity.
    pub fn relation_incident_elements(&self, entity: ElementId) -> Option<&IndexSet<ElementId>> {
        self.relation_incident_elements.get(&entity)
    }

    /// Whether a classifier shows any property, or a relation entity has
    /// incident edges. Relation entities without either are drawn as plain
    /// edges between their source and target.
    pub fn classifier_has_features_or_edges(&self, classifier: ElementId) -> bool {
        let non_empty =
            |map: &ElementSets| map.get(&classifier).is_some_and(|set| !set.is_empty());
        non_empty(&self.scalar_properties)
            || non_empty(&self.structured_properties)
            || non_empty(&self.relation_incident_elements)
    }

    pub fn phase_of(&self, id: ElementId) -> ElementState {
        if self.resolved.contains(&id) {
            ElementState::Resolved
        } else if self.contains(id) {
            ElementState::Discovered
        } else {
            ElementState::Unseen
        }
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Analyze the ontology `root` with default options.
pub fn analyze(model: &Model, root: ElementId) -> ScopeResult<DiagramScope> {
    let index = ReferenceIndex::build(model);
    analyze_with(Search::new(model, &index), root, &ScopeOptions::default())
}

/// Analyze the ontology `root` against a prebuilt reference index.
pub fn analyze_with(
    search: Search<'_>,
    root: ElementId,
    options: &ScopeOptions,
) -> ScopeResult<DiagramScope> {
    ScopeComputation::new(search, root, options)?.run()
}

// ============================================================================
// COMPUTATION
// ============================================================================

/// Per-call analysis context. Owned exclusively by one analysis and dropped
/// when it finishes.
struct ScopeComputation<'a> {
    search: Search<'a>,
    root: ElementId,
    phase: Phase,
    /// Elements declared by the analysed ontology.
    local: FxHashSet<ElementId>,
    /// Raw axiom candidates per entity, gathered in Phase 1.
    axiom_candidates: ElementSets,
    /// Raw incident candidates per relation entity, gathered in Phase 1.
    incident_candidates: ElementSets,
    /// Classifiers and structures queued for Phase 2.
    second_phase: IndexSet<ElementId>,
    scope: DiagramScope,
}

impl<'a> ScopeComputation<'a> {
    fn new(search: Search<'a>, root: ElementId, options: &ScopeOptions) -> ScopeResult<Self> {
        let model = search.model();
        match model.element(root) {
            Some(Element::Ontology(_)) => {}
            Some(other) => {
                return Err(ScopeError::NotAnOntology {
                    element: root,
                    found: other.kind(),
                });
            }
            None => return Err(ScopeError::UnknownElement(root)),
        }

        let local = local_elements(model, root, options.locality);
        debug!(
            "[SCOPE] ontology {} declares {} local elements ({:?})",
            root,
            local.len(),
            options.locality
        );

        Ok(Self {
            search,
            root,
            phase: Phase::Discovery,
            local,
            axiom_candidates: IndexMap::new(),
            incident_candidates: IndexMap::new(),
            second_phase: IndexSet::new(),
            scope: DiagramScope::default(),
        })
    }

    fn model(&self) -> &'a Model {
        self.search.model()
    }

    fn run(mut self) -> ScopeResult<DiagramScope> {
        // Imported ontologies are never walked.
        let statements = self.model().statements(self.root).to_vec();
        for statement in statements {
            self.visit(statement)?;
        }
        debug!(
            "[SCOPE] discovery done: {} elements, {} queued",
            self.scope.scope().len(),
            self.second_phase.len()
        );

        self.phase = Phase::Resolution;
        let queued: Vec<ElementId> = self.second_phase.iter().copied().collect();
        for id in queued {
            self.visit(id)?;
        }
        debug!("[SCOPE] resolution done: {} resolved", self.scope.resolved.len());

        Ok(self.scope)
    }

    fn visit(&mut self, id: ElementId) -> ScopeResult<()> {
        match self.phase {
            Phase::Discovery => self.discover(id),
            Phase::Resolution => self.resolve(id),
        }
    }

    fn unhandled(&self, id: ElementId, element: &Element) -> ScopeError {
        ScopeError::UnhandledElement {
            element: id,
            kind: element.kind(),
            phase: self.phase,
            range: self.model().range(id),
        }
    }

    // ------------------------------------------------------------------------
    // Inclusion
    // ------------------------------------------------------------------------

    fn is_local(&self, id: ElementId) -> bool {
        self.local.contains(&id)
    }

    /// Whether an element is part of the view.
    ///
    /// A specialization needs both of its terms, a reference-wrapper needs its
    /// member, anything else has to be declared locally or discovered.
    fn is_included(&self, id: ElementId) -> bool {
        let model = self.model();
        match model.element(id) {
            Some(Element::SpecializationAxiom(_)) => {
                read::super_term(model, id).is_some_and(|t| self.is_included(t))
                    && read::sub_term(model, id).is_some_and(|t| self.is_included(t))
            }
            Some(Element::Reference(_)) => {
                read::resolve_member(model, id).is_some_and(|m| self.is_included(m))
            }
            Some(_) => self.is_local(id) || self.scope.contains(id),
            None => false,
        }
    }

    fn local_only(&self, candidates: impl IntoIterator<Item = ElementId>) -> IndexSet<ElementId> {
        candidates.into_iter().filter(|c| self.is_local(*c)).collect()
    }

    // ------------------------------------------------------------------------
    // Phase 1
    // ------------------------------------------------------------------------

    fn discover(&mut self, id: ElementId) -> ScopeResult<()> {
        if self.scope.contains(id) {
            trace!("[SCOPE] {} already discovered", id);
            return Ok(());
        }
        let model = self.model();
        let element = model.element(id).ok_or(ScopeError::UnknownElement(id))?;
        trace!("[SCOPE] discover {} {:?}", element.kind(), model.name(id));

        match element {
            Element::Aspect(_) => {
                self.scope.aspects.insert(id);
                self.discover_entity(id);
            }
            Element::Concept(_) => {
                self.scope.concepts.insert(id);
                self.discover_entity(id);
            }
            Element::RelationEntity(entity) => {
                self.scope.relation_entities.insert(id);
                self.discover_entity(id);

                let search = self.search;
                let incident = self.local_only(
                    search
                        .specializations_with_superterm(id)
                        .into_iter()
                        .chain(search.relation_range_restrictions_with_range(id))
                        .chain(search.source_relations_of(id))
                        .chain(search.target_relations_of(id)),
                );
                self.incident_candidates.insert(id, incident);

                if let Some(source) = entity.source {
                    self.visit(source)?;
                }
                if let Some(target) = entity.target {
                    self.visit(target)?;
                }
            }
            Element::Structure(_) => {
                self.scope.structures.insert(id);
                self.init_classifier(id);
                self.second_phase.insert(id);
            }
            Element::Scalar(_) => {
                self.scope.scalars.insert(id);
            }
            Element::ConceptInstance(_) => {
                let search = self.search;
                let assertions = self.local_only(
                    search
                        .property_value_assertions_of(id)
                        .into_iter()
                        .chain(search.link_assertions_of(id))
                        .chain(search.relation_instances_with_source(id)),
                );
                self.scope.instance_assertions.insert(id, assertions);
            }
            Element::RelationInstance(_) => {
                let search = self.search;
                let assertions = self.local_only(
                    search
                        .property_value_assertions_of(id)
                        .into_iter()
                        .chain(search.link_assertions_of(id)),
                );
                self.scope.instance_assertions.insert(id, assertions);
            }
            Element::StructureInstance(_) => {
                // Assertions of structure instances are not collected.
                self.scope.instance_assertions.insert(id, IndexSet::new());
            }
            Element::Reference(reference) => {
                if let Some(member) = reference.member {
                    self.visit(member)?;
                }
            }
            // Properties are attributed to classifiers in Phase 2; relations
            // are drawn through their relation entity; rules have no node.
            // Axioms and assertions only count as local declarations.
            Element::ScalarProperty(_)
            | Element::StructuredProperty(_)
            | Element::ForwardRelation(_)
            | Element::ReverseRelation(_)
            | Element::Rule(_)
            | Element::SpecializationAxiom(_)
            | Element::KeyAxiom(_)
            | Element::PropertyRestrictionAxiom(_)
            | Element::RelationRestrictionAxiom(_)
            | Element::PropertyValueAssertion(_)
            | Element::LinkAssertion(_) => {}
            Element::Ontology(_) => return Err(self.unhandled(id, element)),
        }
        Ok(())
    }

    fn init_classifier(&mut self, id: ElementId) {
        self.scope.scalar_properties.entry(id).or_default();
        self.scope.structured_properties.entry(id).or_default();
    }

    /// Register an entity and gather its raw axiom candidates.
    fn discover_entity(&mut self, id: ElementId) {
        self.init_classifier(id);
        self.scope.entity_axioms.entry(id).or_default();

        let search = self.search;
        let candidates = self.local_only(
            search
                .keys_of(id)
                .into_iter()
                .chain(search.specializations_with_subterm(id))
                .chain(search.property_restrictions_of(id))
                .chain(search.relation_restrictions_of(id)),
        );
        trace!("[SCOPE] {} has {} axiom candidates", id, candidates.len());
        self.axiom_candidates
            .entry(id)
            .or_default()
            .extend(candidates);
        self.second_phase.insert(id);
    }

    // ------------------------------------------------------------------------
    // Phase 2
    // ------------------------------------------------------------------------

    fn resolve(&mut self, id: ElementId) -> ScopeResult<()> {
        if self.scope.resolved.contains(&id) {
            return Ok(());
        }
        let element = self
            .model()
            .element(id)
            .ok_or(ScopeError::UnknownElement(id))?;

        match element {
            Element::Aspect(_) | Element::Concept(_) => {
                self.attribute_properties(id);
                self.filter_entity_axioms(id)?;
            }
            Element::RelationEntity(_) => {
                self.attribute_properties(id);
                self.filter_entity_axioms(id)?;
                self.filter_incident_elements(id)?;
            }
            Element::Structure(_) => {
                self.attribute_properties(id);
            }
            Element::Ontology(_)
            | Element::Scalar(_)
            | Element::ScalarProperty(_)
            | Element::StructuredProperty(_)
            | Element::ForwardRelation(_)
            | Element::ReverseRelation(_)
            | Element::Rule(_)
            | Element::ConceptInstance(_)
            | Element::RelationInstance(_)
            | Element::StructureInstance(_)
            | Element::SpecializationAxiom(_)
            | Element::KeyAxiom(_)
            | Element::PropertyRestrictionAxiom(_)
            | Element::RelationRestrictionAxiom(_)
            | Element::PropertyValueAssertion(_)
            | Element::LinkAssertion(_)
            | Element::Reference(_) => return Err(self.unhandled(id, element)),
        }
        self.scope.resolved.insert(id);
        Ok(())
    }

    /// Attribute every local property declared on `classifier` or one of its
    /// supertypes to the most general owner that is in the view.
    fn attribute_properties(&mut self, classifier: ElementId) {
        let search = self.search;
        for parent in search.all_supertypes(classifier, true) {
            let owner = if self.is_included(parent) {
                parent
            } else {
                classifier
            };

            for property in search.scalar_properties_with_domain(parent) {
                if self.is_local(property) {
                    trace!("[SCOPE] scalar property {} -> {}", property, owner);
                    self.scope
                        .scalar_properties
                        .entry(owner)
                        .or_default()
                        .insert(property);
                }
            }
            for property in search.structured_properties_with_domain(parent) {
                if self.is_local(property) {
                    trace!("[SCOPE] structured property {} -> {}", property, owner);
                    self.scope
                        .structured_properties
                        .entry(owner)
                        .or_default()
                        .insert(property);
                }
            }
        }
    }

    fn filter_entity_axioms(&mut self, entity: ElementId) -> ScopeResult<()> {
        let candidates = self.axiom_candidates.get(&entity).cloned().unwrap_or_default();
        let mut kept = IndexSet::new();
        for candidate in candidates {
            if self.retains_axiom(candidate)? {
                kept.insert(candidate);
            } else {
                trace!("[SCOPE] drop axiom {} of {}", candidate, entity);
            }
        }
        self.scope
            .entity_axioms
            .entry(entity)
            .or_default()
            .extend(kept);
        Ok(())
    }

    fn filter_incident_elements(&mut self, entity: ElementId) -> ScopeResult<()> {
        let candidates = self
            .incident_candidates
            .get(&entity)
            .cloned()
            .unwrap_or_default();
        let mut kept = IndexSet::new();
        for candidate in candidates {
            let retained = match self.model().element(candidate) {
                // An incident specialization is an edge; both ends must show.
                Some(Element::SpecializationAxiom(_)) => self.is_included(candidate),
                _ => self.retains_axiom(candidate)?,
            };
            if retained {
                kept.insert(candidate);
            }
        }
        self.scope
            .relation_incident_elements
            .entry(entity)
            .or_default()
            .extend(kept);
        Ok(())
    }

    /// Whether every element an axiom (or incident relation) refers to is in
    /// the view.
    fn retains_axiom(&self, candidate: ElementId) -> ScopeResult<bool> {
        let model = self.model();
        let element = model
            .element(candidate)
            .ok_or(ScopeError::UnknownElement(candidate))?;
        let included = |id: Option<ElementId>| id.is_some_and(|id| self.is_included(id));

        let retained = match element {
            Element::KeyAxiom(key) => key.properties.iter().all(|p| self.is_included(*p)),
            Element::SpecializationAxiom(axiom) => included(axiom.specialized_term),
            Element::PropertyRestrictionAxiom(restriction) => included(restriction.property),
            Element::RelationRestrictionAxiom(restriction) => {
                let owner = restriction
                    .relation
                    .and_then(|relation| read::owning_entity(model, relation));
                match restriction.kind {
                    RelationRestrictionKind::Cardinality => included(owner),
                    RelationRestrictionKind::Range { range } => included(owner) && included(range),
                    RelationRestrictionKind::Target { target } => {
                        included(owner) && included(target)
                    }
                }
            }
            Element::ForwardRelation(_) | Element::ReverseRelation(_) => {
                included(read::owning_entity(model, candidate))
            }
            Element::Ontology(_)
            | Element::Aspect(_)
            | Element::Concept(_)
            | Element::RelationEntity(_)
            | Element::Structure(_)
            | Element::Scalar(_)
            | Element::ScalarProperty(_)
            | Element::StructuredProperty(_)
            | Element::Rule(_)
            | Element::ConceptInstance(_)
            | Element::RelationInstance(_)
            | Element::StructureInstance(_)
            | Element::PropertyValueAssertion(_)
            | Element::LinkAssertion(_)
            | Element::Reference(_) => return Err(self.unhandled(candidate, element)),
        };
        Ok(retained)
    }
}

/// Elements declared by `root` under the given locality.
fn local_elements(model: &Model, root: ElementId, locality: Locality) -> FxHashSet<ElementId> {
    let statements = model.statements(root);
    match locality {
        Locality::TopLevelStatements => statements.iter().copied().collect(),
        Locality::OwnedContent => {
            let mut local = FxHashSet::default();
            let mut pending: Vec<ElementId> = statements.to_vec();
            while let Some(id) = pending.pop() {
                if local.insert(id) {
                    pending.extend_from_slice(model.children(id));
                }
            }
            local
        }
    }
}
