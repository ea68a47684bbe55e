use super::*;
use crate::animation::engine::init;
use crate::animation::profile::RevealProfile;
use crate::animation::tween::unit_offset;
use crate::foundation::core::Rect;

fn stage_with_block(top: f64) -> (Stage, NodeId, Vec<NodeId>) {
    let mut stage = Stage::new(init(), Viewport::new(1000.0, 800.0));
    let doc = stage.document_mut();
    let root = doc.root();
    let block = doc.create_element("p");
    doc.set_bounds(block, Rect::new(0.0, top, 500.0, top + 50.0))
        .unwrap();
    doc.append_child(root, block).unwrap();
    let units: Vec<NodeId> = (0..2)
        .map(|_| {
            let u = doc.create_element("div");
            doc.append_child(block, u).unwrap();
            u
        })
        .collect();
    (stage, block, units)
}

fn plan(stage: &mut Stage, run: RunId, units: &[NodeId]) -> RevealPlan {
    let handle = AnimationHandle::new(stage.next_animation_id());
    RevealPlan::new(handle, run, units.to_vec(), &RevealProfile::default(), 0.0)
}

#[test]
fn watch_fires_once_when_line_is_crossed() {
    let (mut stage, block, units) = stage_with_block(1400.0);
    let run = stage.next_run_id();
    let p = plan(&mut stage, run, &units);
    let watch = stage.arm_watch(run, block, ScrollStart::default(), p);
    assert!(stage.scroll_hub().is_armed(watch));
    assert!(stage.timeline().is_empty());

    stage.scroll_to(500.0);
    assert!(stage.scroll_hub().is_armed(watch));

    stage.scroll_to(900.0);
    assert!(!stage.scroll_hub().is_armed(watch));
    assert!(stage.scroll_hub().has_fired(watch));
    assert_eq!(stage.timeline().len(), 1);

    stage.scroll_to(0.0);
    stage.scroll_to(1200.0);
    let fired = stage
        .events()
        .iter()
        .filter(|e| matches!(e, StageEvent::TriggerFired { .. }))
        .count();
    assert_eq!(fired, 1);
}

#[test]
fn already_visible_target_fires_on_arm() {
    let (mut stage, block, units) = stage_with_block(100.0);
    let run = stage.next_run_id();
    let p = plan(&mut stage, run, &units);
    let watch = stage.arm_watch(run, block, ScrollStart::default(), p);
    assert!(stage.scroll_hub().has_fired(watch));
    assert_eq!(stage.timeline().len(), 1);
}

#[test]
fn released_watch_never_fires() {
    let (mut stage, block, units) = stage_with_block(1400.0);
    let run = stage.next_run_id();
    let p = plan(&mut stage, run, &units);
    let watch = stage.arm_watch(run, block, ScrollStart::default(), p);
    stage.release_watch(run, watch);
    stage.scroll_to(5000.0);
    assert!(stage.timeline().is_empty());
    assert!(!stage.scroll_hub().has_fired(watch));
    assert!(
        stage
            .events()
            .contains(&StageEvent::TriggerReleased { run, watch })
    );
}

#[test]
fn advance_runs_the_group_to_completion() {
    let (mut stage, _block, units) = stage_with_block(0.0);
    let run = stage.next_run_id();
    let p = plan(&mut stage, run, &units);
    let animation = p.handle.id();
    stage.fire_now(run, p);
    stage.run_until(1.2, 0.1);
    assert!(stage.timeline().is_empty());
    assert_eq!(unit_offset(stage.document(), units[1]), Some(0.0));
    assert!(
        stage
            .events()
            .contains(&StageEvent::RevealCompleted { run, animation })
    );
}

#[test]
fn cancel_reports_only_live_groups() {
    let (mut stage, _block, units) = stage_with_block(0.0);
    let run = stage.next_run_id();
    let p = plan(&mut stage, run, &units);
    let handle = p.handle;
    stage.fire_now(run, p);
    assert!(stage.cancel_animation(handle));
    assert!(!stage.cancel_animation(handle));
}

#[test]
fn clock_and_scroll_ignore_garbage() {
    let mut stage = Stage::new(init(), Viewport::default());
    stage.advance(-1.0);
    stage.advance(f64::NAN);
    assert_eq!(stage.now(), 0.0);
    stage.scroll_to(-50.0);
    assert_eq!(stage.scroll_y(), 0.0);
    stage.scroll_by(f64::INFINITY);
    assert_eq!(stage.scroll_y(), 0.0);
}
