use crate::document::tree::{Document, NodeData, NodeId};

/// Serialize `id` and its subtree as deterministic HTML-like markup.
///
/// Attributes are emitted in name order with `style` folded in as one attribute whose
/// properties are also name-ordered, so equal trees always produce equal strings.
pub fn to_markup(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, id, &mut out);
    out
}

/// Serialize only the children of `id`.
pub fn inner_markup(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    if let Ok(children) = doc.children(id) {
        for c in children {
            write_node(doc, *c, &mut out);
        }
    }
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    let Ok(data) = doc.data(id) else {
        return;
    };
    match data {
        NodeData::Text(t) => escape_into(t, false, out),
        NodeData::Element(el) => {
            out.push('<');
            out.push_str(&el.tag);

            let style = (!el.style.is_empty()).then(|| {
                el.style
                    .iter()
                    .map(|(k, v)| format!("{k}:{v}"))
                    .collect::<Vec<_>>()
                    .join(";")
            });
            let mut attrs: Vec<(&str, &str)> = el
                .attrs
                .iter()
                .filter(|(k, _)| k.as_str() != "style")
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            if let Some(style) = style.as_deref() {
                attrs.push(("style", style));
                attrs.sort_by(|a, b| a.0.cmp(b.0));
            }
            for (k, v) in attrs {
                out.push(' ');
                out.push_str(k);
                out.push_str("=\"");
                escape_into(v, true, out);
                out.push('"');
            }
            out.push('>');

            if let Ok(children) = doc.children(id) {
                for c in children {
                    write_node(doc, *c, out);
                }
            }

            out.push_str("</");
            out.push_str(&el.tag);
            out.push('>');
        }
    }
}

fn escape_into(s: &str, attr: bool, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/markup.rs"]
mod tests;
