//! Axioms survive only when everything they refer to is shown.
//!
//! Axioms are owned by their entity, so these tests count owned content as
//! local.

use oml::analyze;
use oml::syntax::{ModelBuilder, PropertyKind, PropertyRestrictionKind, RelationRestrictionKind};
use rstest::rstest;

use crate::helpers::*;

#[test]
fn test_specialization_to_hidden_term_is_dropped() {
    let fx = chain_fixture();
    let scope = analyze_owned(&fx.model, fx.ontology).unwrap();

    // C < B where B is not in the view.
    assert!(axioms_of(&scope, fx.c).is_empty());
    assert!(axioms_of(&scope, fx.a).is_empty());
}

#[test]
fn test_specialization_to_visible_term_is_kept() {
    let mut b = ModelBuilder::new();
    let dnd = b.vocabulary(DND_NS, "dnd");
    let creature = b.concept(dnd, "Creature");
    let monster = b.concept(dnd, "Monster");
    let axiom = b.specialize(monster, Some(creature));
    let dangling = b.specialize(monster, None);
    let model = b.build();

    let scope = analyze_owned(&model, dnd).unwrap();

    assert_eq!(axioms_of(&scope, monster), vec![axiom]);
    assert!(!axioms_of(&scope, monster).contains(&dangling));
}

#[rstest]
#[case(true, true, true)]
#[case(true, false, false)]
#[case(false, false, false)]
fn test_key_needs_every_property(
    #[case] first_local: bool,
    #[case] second_local: bool,
    #[case] kept: bool,
) {
    let mut b = ModelBuilder::new();
    let base = b.vocabulary(BASE_NS, "base");
    let dnd = b.vocabulary(DND_NS, "dnd");
    let monster = b.concept(dnd, "Monster");
    let first = b.scalar_property(if first_local { dnd } else { base }, "id", Some(monster), None);
    let second =
        b.scalar_property(if second_local { dnd } else { base }, "name", Some(monster), None);
    let key = b.key(monster, [first, second]);
    let model = b.build();

    let scope = analyze_owned(&model, dnd).unwrap();

    assert_eq!(axioms_of(&scope, monster).contains(&key), kept);
}

#[test]
fn test_property_restrictions() {
    let mut b = ModelBuilder::new();
    let base = b.vocabulary(BASE_NS, "base");
    let dnd = b.vocabulary(DND_NS, "dnd");
    let monster = b.concept(dnd, "Monster");
    let hp = b.scalar_property(dnd, "hitPoints", Some(monster), None);
    let imported = b.scalar_property(base, "age", Some(monster), None);
    let on_local = b.property_restriction(
        monster,
        PropertyKind::Scalar,
        PropertyRestrictionKind::Cardinality,
        Some(hp),
        None,
    );
    let on_imported = b.property_restriction(
        monster,
        PropertyKind::Scalar,
        PropertyRestrictionKind::Value,
        Some(imported),
        None,
    );
    let model = b.build();

    let scope = analyze_owned(&model, dnd).unwrap();

    assert_eq!(axioms_of(&scope, monster), vec![on_local]);
    assert!(!axioms_of(&scope, monster).contains(&on_imported));
}

#[test]
fn test_relation_restrictions() {
    let mut b = ModelBuilder::new();
    let base = b.vocabulary(BASE_NS, "base");
    let ghost = b.concept(base, "Ghost");
    let dnd = b.vocabulary(DND_NS, "dnd");
    let dungeon = b.aspect(dnd, "Dungeon");
    let monster = b.concept(dnd, "Monster");
    let contains = b.relation_entity(dnd, "Contains", Some(dungeon), Some(monster));
    let forward = b.forward_relation(contains, "contains");

    let cardinality =
        b.relation_restriction(dungeon, RelationRestrictionKind::Cardinality, Some(forward));
    let range_visible = b.relation_restriction(
        dungeon,
        RelationRestrictionKind::Range {
            range: Some(monster),
        },
        Some(forward),
    );
    let range_hidden = b.relation_restriction(
        dungeon,
        RelationRestrictionKind::Range { range: Some(ghost) },
        Some(forward),
    );
    let target_visible = b.relation_restriction(
        dungeon,
        RelationRestrictionKind::Target {
            target: Some(monster),
        },
        Some(forward),
    );
    let unresolved =
        b.relation_restriction(dungeon, RelationRestrictionKind::Cardinality, None);
    let model = b.build();

    let scope = analyze_owned(&model, dnd).unwrap();

    assert_eq!(
        axioms_of(&scope, dungeon),
        vec![cardinality, range_visible, target_visible]
    );
    assert!(!axioms_of(&scope, dungeon).contains(&range_hidden));
    assert!(!axioms_of(&scope, dungeon).contains(&unresolved));
}

#[test]
fn test_restriction_on_hidden_relation_entity_is_dropped() {
    let mut b = ModelBuilder::new();
    let base = b.vocabulary(BASE_NS, "base");
    let room = b.aspect(base, "Room");
    let owns = b.relation_entity(base, "Owns", Some(room), Some(room));
    let owns_forward = b.forward_relation(owns, "owns");
    let dnd = b.vocabulary(DND_NS, "dnd");
    let dungeon = b.aspect(dnd, "Dungeon");
    b.relation_restriction(dungeon, RelationRestrictionKind::Cardinality, Some(owns_forward));
    let model = b.build();

    let scope = analyze_owned(&model, dnd).unwrap();

    assert!(axioms_of(&scope, dungeon).is_empty());
}

#[test]
fn test_incident_elements_of_relation_entity() {
    let mut b = ModelBuilder::new();
    let base = b.vocabulary(BASE_NS, "base");
    let hidden_sub = b.relation_entity(base, "Hidden", None, None);
    let dnd = b.vocabulary(DND_NS, "dnd");
    let dungeon = b.aspect(dnd, "Dungeon");
    let monster = b.aspect(dnd, "Monster");
    let contains = b.relation_entity(dnd, "Contains", Some(dungeon), Some(monster));
    let guards = b.relation_entity(dnd, "Guards", Some(contains), Some(monster));
    let guards_forward = b.forward_relation(guards, "guards");
    let holds = b.relation_entity(dnd, "Holds", None, None);
    let holds_axiom = b.specialize(holds, Some(contains));
    b.specialize(hidden_sub, Some(contains));
    let model = b.build();

    let scope = analyze_owned(&model, dnd).unwrap();

    // Holds < Contains is shown; the imported Hidden < Contains is not local.
    assert_eq!(
        incident_of(&scope, contains),
        vec![holds_axiom, guards_forward]
    );
    assert!(scope.classifier_has_features_or_edges(contains));
    assert_eq!(axioms_of(&scope, holds), vec![holds_axiom]);
}

#[test]
fn test_range_restrictions_and_reverse_relations_incident_to_relation_entity() {
    let mut b = ModelBuilder::new();
    let base = b.vocabulary(BASE_NS, "base");
    let rules = b.relation_entity(base, "Rules", None, None);
    let rules_forward = b.forward_relation(rules, "rules");
    let dnd = b.vocabulary(DND_NS, "dnd");
    let dungeon = b.aspect(dnd, "Dungeon");
    let monster = b.aspect(dnd, "Monster");
    let contains = b.relation_entity(dnd, "Contains", Some(dungeon), Some(monster));
    let owns = b.relation_entity(dnd, "Owns", Some(contains), Some(monster));
    let owned_by = b.reverse_relation(owns, "isOwnedBy");
    let range = b.relation_restriction(
        dungeon,
        RelationRestrictionKind::Range {
            range: Some(contains),
        },
        Some(owned_by),
    );
    let hidden_range = b.relation_restriction(
        dungeon,
        RelationRestrictionKind::Range {
            range: Some(contains),
        },
        Some(rules_forward),
    );
    let model = b.build();

    let owned = analyze_owned(&model, dnd).unwrap();

    // Owns is sourced at Contains, so its reverse relation ends at Contains.
    assert_eq!(incident_of(&owned, contains), vec![range, owned_by]);
    assert!(!incident_of(&owned, contains).contains(&hidden_range));

    // Restrictions and relations are owned content, never statements.
    let top = analyze(&model, dnd).unwrap();
    assert!(incident_of(&top, contains).is_empty());
    assert!(!top.classifier_has_features_or_edges(contains));
}
