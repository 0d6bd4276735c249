//! End-to-end command sequences against an in-memory scene.

use remap_core::{ResourceHost, Scene, SceneObject, Session, SlotAddress, suggest_names};
use remap_model::{Rule, RuleField, RuleList};

fn furniture_scene() -> Scene {
    let mut scene = Scene::new();
    let oak = scene.add_material("Oak 01");
    let steel = scene.add_material("Steel (old)");
    let oak_copy = scene.add_material("Oak#2");
    scene.add_material("Walnut");
    scene.add_material("Chrome");
    scene.add_object(SceneObject::mesh("Table", vec![Some(oak), Some(steel)]));
    scene.add_object(SceneObject::mesh("Chair", vec![Some(oak_copy), None, Some(steel)]));
    scene
}

#[test]
fn populate_fills_rows_after_manual_rule() {
    let mut scene = Scene::new();
    let green = scene.add_material("Green");
    let yellow = scene.add_material("Yellow");
    scene.add_object(SceneObject::mesh("Cube", vec![Some(green), Some(yellow)]));

    let mut session = Session::from_rules(
        vec![Rule::new("Red", "Blue"), Rule::default(), Rule::default()].into(),
    );
    session.populate_from_selection(&scene);

    assert_eq!(
        session.rules().as_slice(),
        &[
            Rule::new("Red", "Blue"),
            Rule::from_old("Green"),
            Rule::from_old("Yellow"),
        ]
    );
}

#[test]
fn populate_rewinds_blank_list_and_grows_it() {
    let mut scene = Scene::new();
    let slots = ["A", "B", "C"]
        .iter()
        .map(|name| Some(scene.add_material(name)))
        .collect();
    scene.add_object(SceneObject::mesh("Cube", slots));

    let mut session = Session::from_rules(vec![Rule::default(), Rule::default()].into());
    session.populate_from_selection(&scene);

    let expected: RuleList = ["A", "B", "C"].into_iter().map(Rule::from_old).collect();
    assert_eq!(session.rules(), &expected);
}

#[test]
fn apply_uses_last_complete_rule_and_skips_missing_targets() {
    let mut scene = Scene::new();
    let red = scene.add_material("Red");
    let blue = scene.add_material("Blue");
    scene.add_object(SceneObject::mesh("Cube", vec![Some(red)]));

    let rules: RuleList = vec![Rule::new("Red", "Gone"), Rule::new("Red", "Blue")].into();
    Session::from_rules(rules).apply(&mut scene);
    assert_eq!(scene.slot_resource(SlotAddress::new(0, 0)), Some(blue));

    let mut scene_without_target = Scene::new();
    let red = scene_without_target.add_material("Red");
    scene_without_target.add_object(SceneObject::mesh("Cube", vec![Some(red)]));
    Session::from_rules(vec![Rule::new("Red", "Blue")].into()).apply(&mut scene_without_target);
    assert_eq!(
        scene_without_target.slot_resource(SlotAddress::new(0, 0)),
        Some(red)
    );
}

#[test]
fn clean_populate_edit_apply_swap_workflow() {
    let mut scene = furniture_scene();
    let mut session = Session::new();
    session.initialize_default();

    session.clean_names(&mut scene);
    assert_eq!(
        remap_core::collect_selected_names(&scene),
        vec!["Oak", "Steelold", "Oak_001"]
    );

    session.populate_from_selection(&scene);
    assert_eq!(session.rules().len(), 3);

    session.set_field(0, RuleField::New, "Walnut");
    session.set_field(1, RuleField::New, "Chrome");
    session.set_field(2, RuleField::New, "Walnut");
    let report = session.apply(&mut scene);
    assert_eq!(report.message, "Replaced 4 of 5 material slots");

    let names: Vec<Option<&str>> = [(0, 0), (0, 1), (1, 0), (1, 1), (1, 2)]
        .into_iter()
        .map(|(o, s)| scene.slot_material_name(SlotAddress::new(o, s)))
        .collect();
    assert_eq!(
        names,
        vec![
            Some("Walnut"),
            Some("Chrome"),
            Some("Walnut"),
            None,
            Some("Chrome")
        ]
    );

    // Swapped rules send the chrome slots back to steel.
    session.swap_all();
    session.apply(&mut scene);
    assert_eq!(scene.slot_material_name(SlotAddress::new(0, 1)), Some("Steelold"));
    assert_eq!(scene.slot_material_name(SlotAddress::new(1, 2)), Some("Steelold"));
}

#[test]
fn remove_commands_are_lenient() {
    let mut session = Session::new();
    session.initialize_default();
    session.remove(10);
    assert_eq!(session.rules().len(), 3);

    session.remove_last();
    session.remove_last();
    session.remove_last();
    session.remove_last();
    assert!(session.rules().is_empty());
}

#[test]
fn suggestions_come_from_the_pool() {
    let scene = furniture_scene();
    let names: Vec<String> = suggest_names(&scene, "wal", 3)
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names.first().map(String::as_str), Some("Walnut"));
    assert!(scene.lookup("Walnut").is_some());
}
