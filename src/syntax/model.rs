//! Arena holding every element of a linked OML model.
//!
//! Elements are never copied: other structures refer to them by
//! [`ElementId`], which is an index into the model's node list.

use text_size::TextRange;

use super::element::{Element, Ontology};
use crate::base::ElementId;

/// An element together with its place in the containment tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub element: Element,
    /// Owning element; `None` only for ontologies.
    pub container: Option<ElementId>,
    /// Owned elements in declaration order.
    pub children: Vec<ElementId>,
    /// Source range of the element, when it came from text.
    pub range: Option<TextRange>,
}

/// A fully parsed and linked model.
///
/// Usually holds one document's ontology plus the ontologies its references
/// were linked into. The model is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    nodes: Vec<Node>,
}

impl Model {
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.get(id).map(|node| &node.element)
    }

    pub fn container(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|node| node.container)
    }

    /// Owned elements of `id`; empty for unknown ids.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(|node| node.children.as_slice()).unwrap_or_default()
    }

    pub fn range(&self, id: ElementId) -> Option<TextRange> {
        self.get(id).and_then(|node| node.range)
    }

    /// Iterate all nodes with their ids, in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (ElementId::new(idx as u32), node))
    }

    /// All ontologies in the model.
    pub fn ontologies(&self) -> impl Iterator<Item = (ElementId, &Ontology)> {
        self.iter().filter_map(|(id, node)| match &node.element {
            Element::Ontology(ontology) => Some((id, ontology)),
            _ => None,
        })
    }

    pub fn ontology(&self, id: ElementId) -> Option<&Ontology> {
        match self.element(id)? {
            Element::Ontology(ontology) => Some(ontology),
            _ => None,
        }
    }

    /// Find an ontology by its namespace.
    pub fn ontology_by_namespace(&self, namespace: &str) -> Option<ElementId> {
        self.ontologies()
            .find(|(_, ontology)| ontology.namespace.as_str() == namespace)
            .map(|(id, _)| id)
    }

    /// Top-level statements of an ontology.
    pub fn statements(&self, ontology: ElementId) -> &[ElementId] {
        match self.element(ontology) {
            Some(Element::Ontology(_)) => self.children(ontology),
            _ => &[],
        }
    }

    /// Whether `ancestor` contains `id`, directly or transitively.
    ///
    /// An element does not contain itself.
    pub fn is_contained_in(&self, id: ElementId, ancestor: ElementId) -> bool {
        let mut current = self.container(id);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.container(parent);
        }
        false
    }

    /// Name of a member, if the element is one.
    pub fn name(&self, id: ElementId) -> Option<&str> {
        self.element(id).and_then(Element::name)
    }
}
