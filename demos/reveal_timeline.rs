use copyreveal::{CopyReveal, Rect, RunConfig, Stage, Viewport, to_markup, unit_offset};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut stage = Stage::new(copyreveal::init(), Viewport::new(1280.0, 800.0));
    let doc = stage.document_mut();
    let h1 = doc.create_element("h1");
    let text = doc.create_text("Hello");
    doc.append_child(h1, text)?;
    doc.set_bounds(h1, Rect::new(0.0, 1200.0, 1280.0, 1300.0))?;
    let root = doc.root();
    doc.append_child(root, h1)?;
    let before = to_markup(stage.document(), h1);

    let mut copy = CopyReveal::mount(&mut stage, h1, RunConfig::on_scroll(0.2))?;
    println!("armed: {:?}, {} units", copy.trigger_state(&stage), copy.units().len());

    stage.scroll_to(700.0);
    println!("scrolled to 700: {:?}", copy.trigger_state(&stage));

    let nodes: Vec<_> = copy.units().iter().map(|u| u.node).collect();
    while stage.now() < 1.4 {
        stage.advance(0.1);
        let offsets: Vec<String> = nodes
            .iter()
            .map(|n| format!("{:6.2}", unit_offset(stage.document(), *n).unwrap_or(0.0)))
            .collect();
        println!("t={:.1} [{}]", stage.now(), offsets.join(" "));
    }

    copy.unmount(&mut stage);
    assert_eq!(to_markup(stage.document(), h1), before);
    for event in stage.events() {
        println!("{}", serde_json::to_string(event)?);
    }
    Ok(())
}
