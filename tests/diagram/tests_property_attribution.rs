//! Attribution of properties to the most general visible owner.

use oml::syntax::ModelBuilder;
use oml::{ElementId, analyze};

use crate::helpers::*;

#[test]
fn test_property_sinks_past_hidden_supertype() {
    let fx = chain_fixture();
    let scope = analyze(&fx.model, fx.ontology).unwrap();

    assert!(!scope.contains(fx.b));
    assert_eq!(scalar_properties_of(&scope, fx.a), vec![fx.a_prop]);
    assert_eq!(scalar_properties_of(&scope, fx.c), vec![fx.b_prop]);
    assert!(scope.scalar_properties(fx.b).is_none());
}

#[test]
fn test_inherited_property_is_not_duplicated() {
    let fx = chain_fixture();
    let scope = analyze(&fx.model, fx.ontology).unwrap();

    let owners: Vec<ElementId> = [fx.a, fx.c]
        .into_iter()
        .filter(|c| scalar_properties_of(&scope, *c).contains(&fx.a_prop))
        .collect();
    assert_eq!(owners, vec![fx.a]);
}

#[test]
fn test_imported_properties_are_not_shown() {
    let mut b = ModelBuilder::new();
    let base = b.vocabulary(BASE_NS, "base");
    let dnd = b.vocabulary(DND_NS, "dnd");
    let monster = b.concept(dnd, "Monster");
    let imported = b.scalar_property(base, "name", Some(monster), None);
    let local = b.scalar_property(dnd, "hitPoints", Some(monster), None);
    let model = b.build();

    let scope = analyze(&model, dnd).unwrap();

    assert_eq!(scalar_properties_of(&scope, monster), vec![local]);
    assert!(!scalar_properties_of(&scope, monster).contains(&imported));
}

#[test]
fn test_structured_properties_on_structures() {
    let mut b = ModelBuilder::new();
    let dnd = b.vocabulary(DND_NS, "dnd");
    let stats = b.structure(dnd, "Stats");
    let armor = b.structure(dnd, "Armor");
    let monster = b.concept(dnd, "Monster");
    let has_stats = b.structured_property(dnd, "hasStats", Some(monster), Some(stats));
    let has_armor = b.structured_property(dnd, "hasArmor", Some(stats), Some(armor));
    let strength = b.scalar_property(dnd, "strength", Some(stats), None);
    let model = b.build();

    let scope = analyze(&model, dnd).unwrap();

    assert_eq!(structured_properties_of(&scope, monster), vec![has_stats]);
    assert_eq!(structured_properties_of(&scope, stats), vec![has_armor]);
    assert_eq!(scalar_properties_of(&scope, stats), vec![strength]);
    assert!(scalar_properties_of(&scope, armor).is_empty());
    assert!(scope.classifier_has_features_or_edges(stats));
    assert!(!scope.classifier_has_features_or_edges(armor));
}

#[test]
fn test_supertype_cycle_terminates() {
    let mut b = ModelBuilder::new();
    let dnd = b.vocabulary(DND_NS, "dnd");
    let x = b.concept(dnd, "X");
    let y = b.concept(dnd, "Y");
    let x_to_y = b.specialize(x, Some(y));
    let y_to_x = b.specialize(y, Some(x));
    let prop = b.scalar_property(dnd, "p", Some(y), None);
    let model = b.build();

    let scope = analyze_owned(&model, dnd).unwrap();

    assert_eq!(scalar_properties_of(&scope, y), vec![prop]);
    assert!(scalar_properties_of(&scope, x).is_empty());
    assert_eq!(axioms_of(&scope, x), vec![x_to_y]);
    assert_eq!(axioms_of(&scope, y), vec![y_to_x]);
}

#[test]
fn test_properties_of_pulled_in_supertype_stay_hidden() {
    // Monster < base:Creature; Creature is not in the view and its property
    // is declared in base, so nothing is attributed.
    let mut b = ModelBuilder::new();
    let base = b.vocabulary(BASE_NS, "base");
    let creature = b.concept(base, "Creature");
    b.scalar_property(base, "age", Some(creature), None);
    let dnd = b.vocabulary(DND_NS, "dnd");
    let monster = b.concept(dnd, "Monster");
    b.specialize(monster, Some(creature));
    let model = b.build();

    let scope = analyze(&model, dnd).unwrap();

    assert!(scalar_properties_of(&scope, monster).is_empty());
    assert!(axioms_of(&scope, monster).is_empty());
}
