//! Assertions over a computed [`DiagramScope`].

use indexmap::IndexSet;
use oml::{DiagramScope, ElementId};

/// Collect ids into a set for order-insensitive comparison.
pub fn set_of(ids: &[ElementId]) -> IndexSet<ElementId> {
    ids.iter().copied().collect()
}

/// Assert that the scope holds exactly `expected`, in any order.
pub fn assert_scope_eq(scope: &DiagramScope, expected: &[ElementId]) {
    let actual = scope.scope();
    let expected = set_of(expected);
    assert_eq!(
        actual.len(),
        expected.len(),
        "scope {:?} != expected {:?}",
        actual,
        expected
    );
    for id in &expected {
        assert!(actual.contains(id), "{} missing from scope {:?}", id, actual);
    }
}

/// Scalar properties attributed to `classifier`, empty if it has none.
pub fn scalar_properties_of(scope: &DiagramScope, classifier: ElementId) -> Vec<ElementId> {
    scope
        .scalar_properties(classifier)
        .map(|set| set.iter().copied().collect())
        .unwrap_or_default()
}

pub fn structured_properties_of(scope: &DiagramScope, classifier: ElementId) -> Vec<ElementId> {
    scope
        .structured_properties(classifier)
        .map(|set| set.iter().copied().collect())
        .unwrap_or_default()
}

pub fn axioms_of(scope: &DiagramScope, entity: ElementId) -> Vec<ElementId> {
    scope
        .entity_axioms(entity)
        .map(|set| set.iter().copied().collect())
        .unwrap_or_default()
}

pub fn assertions_of(scope: &DiagramScope, instance: ElementId) -> Vec<ElementId> {
    scope
        .instance_assertions(instance)
        .map(|set| set.iter().copied().collect())
        .unwrap_or_default()
}

pub fn incident_of(scope: &DiagramScope, entity: ElementId) -> Vec<ElementId> {
    scope
        .relation_incident_elements(entity)
        .map(|set| set.iter().copied().collect())
        .unwrap_or_default()
}
