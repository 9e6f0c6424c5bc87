//! Read helpers over a linked model: dereferencing, ownership and IRIs.
//!
//! These are pure navigation functions. None of them consult the reference
//! index; the inverse lookups live in [`Search`](super::Search).

use std::borrow::Cow;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::ElementId;
use crate::base::iri;
use crate::syntax::{Element, Model};

/// The super (general) term of a specialization axiom.
pub fn super_term(model: &Model, axiom: ElementId) -> Option<ElementId> {
    match model.element(axiom)? {
        Element::SpecializationAxiom(ax) => ax.specialized_term,
        _ => None,
    }
}

/// The sub (specific) term of a specialization axiom.
///
/// Axioms declared on a reference-wrapper belong to the referenced member.
pub fn sub_term(model: &Model, axiom: ElementId) -> Option<ElementId> {
    match model.element(axiom)? {
        Element::SpecializationAxiom(_) => resolve_member(model, model.container(axiom)?),
        _ => None,
    }
}

/// Dereference a reference-wrapper to its member.
///
/// Any other element resolves to itself; a dangling wrapper resolves to `None`.
pub fn resolve_member(model: &Model, id: ElementId) -> Option<ElementId> {
    match model.element(id)? {
        Element::Reference(reference) => reference.member,
        _ => Some(id),
    }
}

/// The relation entity owning a forward or reverse relation.
pub fn owning_entity(model: &Model, relation: ElementId) -> Option<ElementId> {
    match model.element(relation)? {
        Element::ForwardRelation(_) | Element::ReverseRelation(_) => {
            let owner = model.container(relation)?;
            matches!(model.element(owner)?, Element::RelationEntity(_)).then_some(owner)
        }
        _ => None,
    }
}

pub fn forward_relation(model: &Model, entity: ElementId) -> Option<ElementId> {
    model
        .children(entity)
        .iter()
        .copied()
        .find(|c| matches!(model.element(*c), Some(Element::ForwardRelation(_))))
}

pub fn reverse_relation(model: &Model, entity: ElementId) -> Option<ElementId> {
    model
        .children(entity)
        .iter()
        .copied()
        .find(|c| matches!(model.element(*c), Some(Element::ReverseRelation(_))))
}

/// Walk containers up to the ontology owning `id`.
pub fn root_ontology(model: &Model, id: ElementId) -> Option<ElementId> {
    let mut root = id;
    while let Some(parent) = model.container(root) {
        root = parent;
    }
    model.ontology(root).map(|_| root)
}

/// Map from imported namespace to the prefix it is imported under.
///
/// Imports without a prefix override are skipped.
pub fn import_prefixes(model: &Model, ontology: ElementId) -> IndexMap<SmolStr, SmolStr> {
    let mut map = IndexMap::new();
    if let Some(o) = model.ontology(ontology) {
        for import in &o.imports {
            if let Some(prefix) = &import.prefix {
                map.insert(import.namespace.clone(), prefix.clone());
            }
        }
    }
    map
}

/// Prefix under which `ontology` is known inside `context`.
///
/// This is the ontology's own prefix when both are the same ontology, and
/// the import prefix override otherwise.
pub fn prefix_in(model: &Model, ontology: ElementId, context: ElementId) -> Option<SmolStr> {
    let own = model.ontology(ontology)?;
    if ontology == context {
        return Some(own.prefix.clone());
    }
    import_prefixes(model, context).get(&own.namespace).cloned()
}

/// `prefix:name` of a member, using its own ontology's prefix.
pub fn abbreviated_iri(model: &Model, member: ElementId) -> Option<String> {
    let name = model.name(member)?;
    match root_ontology(model, member).and_then(|o| model.ontology(o)) {
        Some(ontology) => Some(format!("{}:{}", ontology.prefix, name)),
        None => Some(name.to_string()),
    }
}

/// How `member` is written inside `context`: the bare name for local
/// members, `prefix:name` for imported ones.
///
/// `None` when the member's ontology is not imported with a prefix.
pub fn abbreviated_iri_in(model: &Model, member: ElementId, context: ElementId) -> Option<String> {
    let name = model.name(member)?;
    let ontology = root_ontology(model, member)?;
    if ontology == context {
        return Some(name.to_string());
    }
    let prefix = prefix_in(model, ontology, context)?;
    Some(format!("{}:{}", prefix, name))
}

/// `<namespace#name>` of a member.
pub fn full_iri(model: &Model, member: ElementId) -> Option<String> {
    let name = model.name(member)?;
    let ontology = model.ontology(root_ontology(model, member)?)?;
    Some(iri::member_full_iri(&ontology.namespace, name))
}

/// Expand reference text written inside `context` into a full IRI when it
/// uses a known prefix.
pub fn expand_reference_text<'t>(model: &Model, context: ElementId, text: &'t str) -> Cow<'t, str> {
    let mut prefixes: IndexMap<SmolStr, SmolStr> = IndexMap::new();
    if let Some(ontology) = model.ontology(context) {
        prefixes.insert(ontology.prefix.clone(), ontology.namespace.clone());
    }
    for (namespace, prefix) in import_prefixes(model, context) {
        prefixes.entry(prefix).or_insert(namespace);
    }
    iri::expand_abbreviated_iri(text, &prefixes)
}
