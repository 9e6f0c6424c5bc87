//! Locality options.

use oml::syntax::ModelBuilder;
use oml::{Locality, ScopeOptions, analyze, analyze_with};

use crate::helpers::*;

#[test]
fn test_default_locality_is_top_level_statements() {
    assert_eq!(ScopeOptions::default().locality, Locality::TopLevelStatements);
}

#[test]
fn test_default_analysis_drops_owned_axioms() {
    let mut b = ModelBuilder::new();
    let dnd = b.vocabulary(DND_NS, "dnd");
    let creature = b.concept(dnd, "Creature");
    let monster = b.concept(dnd, "Monster");
    let hp = b.scalar_property(dnd, "hitPoints", Some(monster), None);
    b.specialize(monster, Some(creature));
    b.key(monster, [hp]);
    let model = b.build();

    let scope = analyze(&model, dnd).unwrap();

    assert!(axioms_of(&scope, monster).is_empty());
    // Properties are statements, so they are still attributed.
    assert_eq!(scalar_properties_of(&scope, monster), vec![hp]);
}

#[test]
fn test_owned_content_keeps_owned_axioms() {
    let mut b = ModelBuilder::new();
    let dnd = b.vocabulary(DND_NS, "dnd");
    let creature = b.concept(dnd, "Creature");
    let monster = b.concept(dnd, "Monster");
    let hp = b.scalar_property(dnd, "hitPoints", Some(monster), None);
    let axiom = b.specialize(monster, Some(creature));
    let key = b.key(monster, [hp]);
    let model = b.build();

    let owned = analyze_owned(&model, dnd).unwrap();
    let top = analyze(&model, dnd).unwrap();

    // Keys are gathered before specializations.
    assert_eq!(axioms_of(&owned, monster), vec![key, axiom]);
    assert_eq!(top.scope(), owned.scope());
}

#[test]
fn test_analyze_with_default_options_matches_analyze() {
    let fx = dungeon_fixture();
    let options = ScopeOptions::default();
    let with = with_search(&fx.model, |search| analyze_with(search, fx.ontology, &options));
    assert_eq!(with, analyze(&fx.model, fx.ontology));
}
