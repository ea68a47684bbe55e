use super::*;

fn motion() -> Motion {
    Motion {
        from: 100.0,
        to: 0.0,
        duration: 1.0,
        stagger: 0.03,
        ease: Ease::Linear,
    }
}

fn units(doc: &mut Document, n: usize) -> Vec<NodeId> {
    (0..n).map(|_| doc.create_element("div")).collect()
}

#[test]
fn sample_waits_for_each_units_offset() {
    let m = motion();
    assert_eq!(m.sample(0, 0.0), Some(100.0));
    assert_eq!(m.sample(1, 0.0), None);
    assert_eq!(m.sample(1, 0.03), Some(100.0));
    assert_eq!(m.sample(0, 0.5), Some(50.0));
    assert_eq!(m.sample(0, 2.0), Some(0.0));
}

#[test]
fn offsets_round_trip_through_style() {
    let mut doc = Document::new();
    let n = doc.create_element("div");
    assert!(write_offset(&mut doc, n, 37.5));
    assert_eq!(doc.style(n, TRANSFORM_PROP), Some("translate(0px, 37.5%)"));
    assert_eq!(unit_offset(&doc, n), Some(37.5));
    write_offset(&mut doc, n, -0.0);
    assert_eq!(doc.style(n, TRANSFORM_PROP), Some("translate(0px, 0%)"));
}

#[test]
fn tick_completes_after_the_last_unit() {
    let mut doc = Document::new();
    let nodes = units(&mut doc, 3);
    let mut tl = Timeline::default();
    tl.add(TweenGroup {
        id: AnimationId(1),
        run: RunId(7),
        units: nodes.clone(),
        begin: 0.0,
        motion: motion(),
    });

    assert!(tl.tick(0.5, &mut doc).is_empty());
    assert_eq!(unit_offset(&doc, nodes[0]), Some(50.0));
    assert_eq!(unit_offset(&doc, nodes[2]), Some(56.0));

    assert!(tl.tick(1.05, &mut doc).is_empty());
    let done = tl.tick(1.1, &mut doc);
    assert_eq!(
        done,
        vec![GroupDone {
            id: AnimationId(1),
            run: RunId(7)
        }]
    );
    assert!(tl.is_empty());
    for n in nodes {
        assert_eq!(unit_offset(&doc, n), Some(0.0));
    }
}

#[test]
fn cancel_freezes_units_in_place() {
    let mut doc = Document::new();
    let nodes = units(&mut doc, 2);
    let mut tl = Timeline::default();
    tl.add(TweenGroup {
        id: AnimationId(1),
        run: RunId(1),
        units: nodes.clone(),
        begin: 0.0,
        motion: motion(),
    });
    tl.tick(0.25, &mut doc);
    assert!(tl.cancel(AnimationId(1)).is_some());
    assert!(tl.cancel(AnimationId(1)).is_none());
    tl.tick(5.0, &mut doc);
    assert_eq!(unit_offset(&doc, nodes[0]), Some(75.0));
}

#[test]
fn stale_units_are_skipped() {
    let mut doc = Document::new();
    let nodes = units(&mut doc, 1);
    doc.remove(nodes[0]);
    let mut tl = Timeline::default();
    tl.add(TweenGroup {
        id: AnimationId(2),
        run: RunId(1),
        units: nodes,
        begin: 0.0,
        motion: motion(),
    });
    assert_eq!(tl.tick(2.0, &mut doc).len(), 1);
}
