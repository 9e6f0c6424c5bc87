//! Supertype closure over specialization axioms.

use oml::syntax::{ModelBuilder, ReferenceKind};

use crate::helpers::*;

#[test]
fn test_all_supertypes_follows_chain() {
    let fx = chain_fixture();
    with_search(&fx.model, |search| {
        let inclusive: Vec<_> = search.all_supertypes(fx.c, true).into_iter().collect();
        assert_eq!(inclusive, vec![fx.c, fx.b, fx.a]);

        let exclusive: Vec<_> = search.all_supertypes(fx.c, false).into_iter().collect();
        assert_eq!(exclusive, vec![fx.b, fx.a]);
    });
}

#[test]
fn test_all_supertypes_terminates_on_cycle() {
    let mut b = ModelBuilder::new();
    let dnd = b.vocabulary(DND_NS, "dnd");
    let x = b.concept(dnd, "X");
    let y = b.concept(dnd, "Y");
    b.specialize(x, Some(y));
    b.specialize(y, Some(x));
    let model = b.build();

    with_search(&model, |search| {
        let all = search.all_supertypes(x, true);
        assert_eq!(all.len(), 2);
        assert!(all.contains(&x) && all.contains(&y));
    });
}

#[test]
fn test_all_supertypes_through_reference_wrapper() {
    let mut b = ModelBuilder::new();
    let base = b.vocabulary(BASE_NS, "base");
    let creature = b.concept(base, "Creature");
    let dnd = b.vocabulary(DND_NS, "dnd");
    let hostile = b.aspect(dnd, "Hostile");
    let wrapper = b.reference(dnd, ReferenceKind::Concept, Some(creature));
    b.specialize(wrapper, Some(hostile));
    let monster = b.concept(dnd, "Monster");
    b.specialize(monster, Some(creature));
    let model = b.build();

    with_search(&model, |search| {
        let all: Vec<_> = search.all_supertypes(monster, false).into_iter().collect();
        assert_eq!(all, vec![creature, hostile]);
    });
}

#[test]
fn test_diamond_is_listed_once() {
    let mut b = ModelBuilder::new();
    let dnd = b.vocabulary(DND_NS, "dnd");
    let thing = b.aspect(dnd, "Thing");
    let creature = b.concept(dnd, "Creature");
    let hostile = b.aspect(dnd, "Hostile");
    let monster = b.concept(dnd, "Monster");
    b.specialize(creature, Some(thing));
    b.specialize(hostile, Some(thing));
    b.specialize(monster, Some(creature));
    b.specialize(monster, Some(hostile));
    let model = b.build();

    with_search(&model, |search| {
        let all = search.all_supertypes(monster, false);
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().filter(|t| **t == thing).count(), 1);
    });
}
