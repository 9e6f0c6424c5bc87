//! Bidirectional index for resolved cross references.
//!
//! Stores every `(referrer, role, target)` edge of a linked model.
//! Enables both:
//! - "Find Referencers": given a target, find all elements that reference it
//! - "Find Targets": given a referrer, find all elements it references

use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::base::ElementId;
use crate::syntax::{Model, ReferenceRole};

/// A single reference from a referrer element to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceInfo {
    /// Element holding the reference.
    pub source: ElementId,
    /// Which of the referrer's fields holds it.
    pub role: ReferenceRole,
}

/// Entry in the reverse index: all references to a target
#[derive(Debug, Clone, Default)]
struct ReferenceEntry {
    /// All references to this target, deduplicated, in model order
    references: IndexSet<ReferenceInfo>,
}

/// Bidirectional index for references.
///
/// Built once per model. Unresolved references never reach the index, so a
/// dangling reference simply contributes nothing to any lookup.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    /// Reverse index: target → references to it
    reverse: FxHashMap<ElementId, ReferenceEntry>,

    /// Forward index: referrer → targets it references
    forward: FxHashMap<ElementId, IndexSet<ElementId>>,
}

impl ReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every resolved cross reference in the model.
    pub fn build(model: &Model) -> Self {
        let mut index = Self::new();
        for (id, node) in model.iter() {
            for (role, target) in node.element.references() {
                index.add_reference(id, target, role);
            }
        }
        debug!(
            "[REF_INDEX] indexed {} references to {} targets",
            index.reference_count(),
            index.target_count()
        );
        index
    }

    /// Add a reference from `source` to `target` held in the given role.
    pub fn add_reference(&mut self, source: ElementId, target: ElementId, role: ReferenceRole) {
        trace!(
            "[REF_INDEX] add_reference: source={} target={} role={:?}",
            source, target, role
        );

        // Add to reverse index (target → sources)
        self.reverse
            .entry(target)
            .or_default()
            .references
            .insert(ReferenceInfo { source, role });

        // Add to forward index (source → targets)
        self.forward.entry(source).or_default().insert(target);
    }

    /// Get all references to a target.
    pub fn get_references(&self, target: ElementId) -> Vec<&ReferenceInfo> {
        self.reverse
            .get(&target)
            .map(|entry| entry.references.iter().collect())
            .unwrap_or_default()
    }

    /// Get all elements that reference a target, each listed once.
    pub fn get_sources(&self, target: ElementId) -> Vec<ElementId> {
        let mut sources = IndexSet::new();
        if let Some(entry) = self.reverse.get(&target) {
            sources.extend(entry.references.iter().map(|r| r.source));
        }
        sources.into_iter().collect()
    }

    /// Get all elements that reference a target through one specific role.
    pub fn get_sources_with_role(&self, target: ElementId, role: ReferenceRole) -> Vec<ElementId> {
        self.reverse
            .get(&target)
            .map(|entry| {
                entry
                    .references
                    .iter()
                    .filter(|r| r.role == role)
                    .map(|r| r.source)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get all targets that a source references (forward lookup).
    pub fn get_targets(&self, source: ElementId) -> Vec<ElementId> {
        self.forward
            .get(&source)
            .map(|targets| targets.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Check if a target has any references.
    pub fn has_references(&self, target: ElementId) -> bool {
        self.reverse
            .get(&target)
            .map(|entry| !entry.references.is_empty())
            .unwrap_or(false)
    }

    /// Get the number of unique targets.
    pub fn target_count(&self) -> usize {
        self.reverse.len()
    }

    /// Get the total number of references.
    pub fn reference_count(&self) -> usize {
        self.reverse.values().map(|e| e.references.len()).sum()
    }
}
