use super::*;
use crate::animation::engine::init;

const LANDING: &str = include_str!("../../data/landing.json");

#[test]
fn landing_fixture_builds() {
    let def = SceneDef::from_json(LANDING).unwrap();
    assert_eq!(def.blocks.len(), 3);
    assert_eq!(def.blocks[1].config, RunConfig::default());
    assert_eq!(def.blocks[2].texts[0].tag, "p");

    let scene = def.build(init()).unwrap();
    let snap = scene.snapshot();
    let hero = &snap.blocks[0];
    assert_eq!(hero.units, 6);
    assert_eq!(hero.trigger, TriggerState::Fired);
    assert!(hero.offsets.iter().all(|o| *o == 100.0));

    let services = &snap.blocks[1];
    assert_eq!(services.units, "Webuildsites".len());
    assert_eq!(services.trigger, TriggerState::Armed);
}

#[test]
fn wrapper_is_used_for_multi_text_blocks() {
    let scene = SceneDef::from_json(LANDING).unwrap().build(init()).unwrap();
    let services = scene.block("services").unwrap();
    let container = services.reveal.container().unwrap();
    assert_ne!(container, services.section);
    assert!(
        scene
            .stage
            .document()
            .has_attr(container, crate::split::segmenter::WRAPPER_ATTR)
    );
}

#[test]
fn dropping_a_scene_restores_text() {
    let mut scene = SceneDef::from_json(LANDING).unwrap().build(init()).unwrap();
    scene.unmount_all();
    let root = scene.stage.document().root();
    assert_eq!(scene.stage.document().query_class(root, "char").len(), 0);
    assert_eq!(
        scene.stage.document().text_content(root),
        "StudioWe buildsitesSay hi"
    );
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"{ "blocks": [
        { "id": "a", "top": 0, "texts": [] },
        { "id": "a", "top": 10, "texts": [] }
    ] }"#;
    assert!(SceneDef::from_json(json).is_err());
}

#[test]
fn bad_placement_is_rejected() {
    let json = r#"{ "blocks": [ { "id": "a", "top": 0, "height": -5, "texts": [] } ] }"#;
    assert!(SceneDef::from_json(json).is_err());
}
