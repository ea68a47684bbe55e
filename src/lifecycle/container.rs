use crate::document::tree::{Document, NodeId};
use crate::foundation::error::RevealResult;
use crate::split::segmenter::WRAPPER_ATTR;

/// Bind the content handed to an orchestrator to a single container under `parent`.
///
/// One element child becomes the container itself. Several children (or none) are moved into
/// a new `div` marked with [`WRAPPER_ATTR`], which becomes the container. A lone text node has
/// no element to bind to: it is attached as-is and `None` is returned, which makes every run
/// a deferred no-op.
pub fn compose_container(
    doc: &mut Document,
    parent: NodeId,
    children: &[NodeId],
) -> RevealResult<Option<NodeId>> {
    if let [only] = children {
        doc.append_child(parent, *only)?;
        return Ok(doc.is_element(*only).then_some(*only));
    }

    let wrapper = doc.create_element("div");
    doc.set_attr(wrapper, WRAPPER_ATTR, "true")?;
    for child in children {
        doc.append_child(wrapper, *child)?;
    }
    doc.append_child(parent, wrapper)?;
    Ok(Some(wrapper))
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/container.rs"]
mod tests;
