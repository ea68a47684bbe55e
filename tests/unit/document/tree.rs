use super::*;

fn text_block(doc: &mut Document, tag: &str, text: &str) -> NodeId {
    let el = doc.create_element(tag);
    let t = doc.create_text(text);
    doc.append_child(el, t).unwrap();
    el
}

#[test]
fn append_and_detach_track_parents() {
    let mut doc = Document::new();
    let root = doc.root();
    let h1 = text_block(&mut doc, "h1", "Hello");
    assert!(!doc.is_attached(h1));

    doc.append_child(root, h1).unwrap();
    assert!(doc.is_attached(h1));
    assert_eq!(doc.parent(h1).unwrap(), Some(root));
    assert_eq!(doc.text_content(root), "Hello");

    doc.detach(h1).unwrap();
    assert!(!doc.is_attached(h1));
    assert!(doc.is_alive(h1));
    assert!(doc.children(root).unwrap().is_empty());
}

#[test]
fn removed_slots_are_reused_with_new_generation() {
    let mut doc = Document::new();
    let a = doc.create_element("div");
    doc.remove(a);
    assert!(!doc.is_alive(a));

    let b = doc.create_element("div");
    assert!(doc.is_alive(b));
    assert!(!doc.is_alive(a));
    assert_ne!(a, b);
    assert!(doc.set_attr(a, "x", "y").is_err());
}

#[test]
fn remove_frees_whole_subtree() {
    let mut doc = Document::new();
    let before = doc.live_count();
    let p = text_block(&mut doc, "p", "abc");
    let root = doc.root();
    doc.append_child(root, p).unwrap();
    assert_eq!(doc.live_count(), before + 2);
    doc.remove(p);
    assert_eq!(doc.live_count(), before);
    assert!(doc.children(root).unwrap().is_empty());
}

#[test]
fn cycles_are_rejected() {
    let mut doc = Document::new();
    let outer = doc.create_element("div");
    let inner = doc.create_element("div");
    doc.append_child(outer, inner).unwrap();
    assert!(doc.append_child(inner, outer).is_err());
    assert!(doc.append_child(outer, outer).is_err());
}

#[test]
fn text_nodes_cannot_adopt() {
    let mut doc = Document::new();
    let t = doc.create_text("x");
    let el = doc.create_element("span");
    assert!(doc.append_child(t, el).is_err());
    assert!(doc.set_style(t, "color", "red").is_err());
}

#[test]
fn insert_before_keeps_order() {
    let mut doc = Document::new();
    let p = doc.create_element("p");
    let a = doc.create_text("a");
    let c = doc.create_text("c");
    let b = doc.create_text("b");
    doc.append_child(p, a).unwrap();
    doc.append_child(p, c).unwrap();
    doc.insert_before(p, b, c).unwrap();
    assert_eq!(doc.text_content(p), "abc");
}

#[test]
fn take_children_detaches_in_order() {
    let mut doc = Document::new();
    let p = doc.create_element("p");
    let a = doc.create_text("a");
    let b = doc.create_text("b");
    doc.append_child(p, a).unwrap();
    doc.append_child(p, b).unwrap();
    let taken = doc.take_children(p).unwrap();
    assert_eq!(taken, vec![a, b]);
    assert_eq!(doc.parent(a).unwrap(), None);
    assert_eq!(doc.text_content(p), "");
}

#[test]
fn classes_and_styles() {
    let mut doc = Document::new();
    let el = doc.create_element("div");
    doc.add_class(el, "char").unwrap();
    doc.add_class(el, "char1").unwrap();
    doc.add_class(el, "char").unwrap();
    assert_eq!(doc.attr(el, "class"), Some("char char1"));
    assert!(doc.has_class(el, "char1"));
    assert!(!doc.has_class(el, "char2"));

    doc.set_style(el, "transform", "translate(0px, 100%)").unwrap();
    assert_eq!(doc.style(el, "transform"), Some("translate(0px, 100%)"));
    doc.remove_style(el, "transform").unwrap();
    assert_eq!(doc.style(el, "transform"), None);
}

#[test]
fn bounds_fall_back_to_ancestors() {
    let mut doc = Document::new();
    let section = doc.create_element("section");
    let p = doc.create_element("p");
    doc.append_child(section, p).unwrap();
    assert_eq!(doc.bounds(p), None);
    let r = Rect::new(0.0, 900.0, 400.0, 960.0);
    doc.set_bounds(section, r).unwrap();
    assert_eq!(doc.bounds(p), Some(r));
}

#[test]
fn query_class_walks_in_document_order() {
    let mut doc = Document::new();
    let root = doc.root();
    let a = doc.create_element("span");
    let b = doc.create_element("span");
    doc.add_class(a, "char").unwrap();
    doc.add_class(b, "char").unwrap();
    doc.append_child(root, a).unwrap();
    doc.append_child(root, b).unwrap();
    assert_eq!(doc.query_class(root, "char"), vec![a, b]);
}
