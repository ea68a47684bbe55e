use super::*;

#[test]
fn attributes_and_style_are_sorted() {
    let mut doc = Document::new();
    let h1 = doc.create_element("h1");
    doc.set_attr(h1, "id", "title").unwrap();
    doc.set_attr(h1, "class", "hero").unwrap();
    doc.set_style(h1, "position", "relative").unwrap();
    doc.set_style(h1, "display", "block").unwrap();
    let t = doc.create_text("Hi");
    doc.append_child(h1, t).unwrap();

    assert_eq!(
        to_markup(&doc, h1),
        r#"<h1 class="hero" id="title" style="display:block;position:relative">Hi</h1>"#
    );
}

#[test]
fn text_and_attributes_are_escaped() {
    let mut doc = Document::new();
    let p = doc.create_element("p");
    doc.set_attr(p, "title", "a \"b\"").unwrap();
    let t = doc.create_text("1 < 2 & 3");
    doc.append_child(p, t).unwrap();
    assert_eq!(
        to_markup(&doc, p),
        r#"<p title="a &quot;b&quot;">1 &lt; 2 &amp; 3</p>"#
    );
}

#[test]
fn inner_markup_skips_the_wrapper() {
    let mut doc = Document::new();
    let p = doc.create_element("p");
    let em = doc.create_element("em");
    let a = doc.create_text("x");
    let b = doc.create_text("y");
    doc.append_child(em, b).unwrap();
    doc.append_child(p, a).unwrap();
    doc.append_child(p, em).unwrap();
    assert_eq!(inner_markup(&doc, p), "x<em>y</em>");
}

#[test]
fn stale_nodes_serialize_to_nothing() {
    let mut doc = Document::new();
    let p = doc.create_element("p");
    doc.remove(p);
    assert_eq!(to_markup(&doc, p), "");
}
