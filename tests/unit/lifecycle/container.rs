use super::*;
use crate::document::markup::to_markup;

#[test]
fn single_element_is_bound_directly() {
    let mut doc = Document::new();
    let root = doc.root();
    let h1 = doc.create_element("h1");
    let got = compose_container(&mut doc, root, &[h1]).unwrap();
    assert_eq!(got, Some(h1));
    assert_eq!(doc.parent(h1).unwrap(), Some(root));
}

#[test]
fn several_children_get_a_wrapper() {
    let mut doc = Document::new();
    let root = doc.root();
    let h1 = doc.create_element("h1");
    let p = doc.create_element("p");
    let wrapper = compose_container(&mut doc, root, &[h1, p]).unwrap().unwrap();
    assert_eq!(doc.attr(wrapper, WRAPPER_ATTR), Some("true"));
    assert_eq!(doc.children(wrapper).unwrap(), &[h1, p]);
    assert_eq!(
        to_markup(&doc, wrapper),
        r#"<div data-copy-wrapper="true"><h1></h1><p></p></div>"#
    );
}

#[test]
fn lone_text_has_no_container() {
    let mut doc = Document::new();
    let root = doc.root();
    let t = doc.create_text("plain");
    assert_eq!(compose_container(&mut doc, root, &[t]).unwrap(), None);
    assert_eq!(doc.text_content(root), "plain");
}
