//! Arena-backed element/text tree standing in for the host's rendered content.

use std::collections::BTreeMap;

use crate::foundation::core::Rect;
use crate::foundation::error::{RevealError, RevealResult};

/// Identifier for a node in a [`Document`].
///
/// A slot index plus a generation counter. Removing a node frees its slot; a later node that
/// reuses the slot gets a higher generation, so stale ids never alias a live node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32, u32);

impl NodeId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Element payload: tag, attributes, inline style and optional host-assigned bounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementData {
    /// Lowercase tag name.
    pub tag: String,
    /// Attributes other than inline style.
    pub attrs: BTreeMap<String, String>,
    /// Inline style declarations, property to value.
    pub style: BTreeMap<String, String>,
    /// Document-space box, assigned by the host (there is no layout pass).
    pub bounds: Option<Rect>,
}

impl ElementData {
    /// A shallow copy: tag, attributes and style, without bounds.
    pub fn shallow_clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            attrs: self.attrs.clone(),
            style: self.style.clone(),
            bounds: None,
        }
    }
}

/// What a node holds.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeData {
    /// An element with tag, attributes, style and bounds.
    Element(ElementData),
    /// A run of text.
    Text(String),
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
}

/// A tree of element and text nodes rooted at a `body` element.
pub struct Document {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    root: NodeId,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Document")
            .field("nodes_total", &self.nodes.len())
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("root", &self.root)
            .finish()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document holding only the `body` root.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: NodeId::new(0, 0),
        };
        doc.root = doc.alloc(NodeData::Element(ElementData {
            tag: "body".to_owned(),
            ..ElementData::default()
        }));
        doc
    }

    /// The `body` element every attached node descends from.
    pub fn root(&self) -> NodeId {
        self.root
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            (idx, generation)
        } else {
            self.nodes.push(None);
            self.generations.push(1);
            (self.nodes.len() - 1, 1)
        };
        self.nodes[idx] = Some(Node {
            generation,
            parent: None,
            children: Vec::new(),
            data,
        });
        NodeId::new(idx as u32, generation)
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Element(ElementData {
            tag: tag.into(),
            ..ElementData::default()
        }))
    }

    /// Create a detached element from existing element data.
    pub fn create_element_with(&mut self, data: ElementData) -> NodeId {
        self.alloc(NodeData::Element(data))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Text(text.into()))
    }

    /// Whether `id` still refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id.idx()), Some(Some(n)) if n.generation == id.1)
    }

    /// Whether `id` is reachable from the document root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut cur = Some(id);
        while let Some(c) = cur {
            if c == self.root {
                return true;
            }
            cur = self.node(c).ok().and_then(|n| n.parent);
        }
        false
    }

    fn node(&self, id: NodeId) -> RevealResult<&Node> {
        match self.nodes.get(id.idx()) {
            Some(Some(n)) if n.generation == id.1 => Ok(n),
            _ => Err(RevealError::document(format!("stale or unknown node {id:?}"))),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> RevealResult<&mut Node> {
        match self.nodes.get_mut(id.idx()) {
            Some(Some(n)) if n.generation == id.1 => Ok(n),
            _ => Err(RevealError::document(format!("stale or unknown node {id:?}"))),
        }
    }

    /// Payload of a live node.
    pub fn data(&self, id: NodeId) -> RevealResult<&NodeData> {
        Ok(&self.node(id)?.data)
    }

    /// Element payload of `id`; errors for text nodes and stale ids.
    pub fn element(&self, id: NodeId) -> RevealResult<&ElementData> {
        match &self.node(id)?.data {
            NodeData::Element(el) => Ok(el),
            NodeData::Text(_) => Err(RevealError::document(format!(
                "node {id:?} is a text node, expected an element"
            ))),
        }
    }

    fn element_mut(&mut self, id: NodeId) -> RevealResult<&mut ElementData> {
        match &mut self.node_mut(id)?.data {
            NodeData::Element(el) => Ok(el),
            NodeData::Text(_) => Err(RevealError::document(format!(
                "node {id:?} is a text node, expected an element"
            ))),
        }
    }

    /// Whether `id` is a live element.
    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.data(id), Ok(NodeData::Element(_)))
    }

    /// Parent of `id`, `None` for detached nodes and the root.
    pub fn parent(&self, id: NodeId) -> RevealResult<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    /// Children of `id` in order.
    pub fn children(&self, id: NodeId) -> RevealResult<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    /// Direct children that are elements, in order.
    pub fn element_children(&self, id: NodeId) -> RevealResult<Vec<NodeId>> {
        Ok(self
            .children(id)?
            .iter()
            .copied()
            .filter(|c| self.is_element(*c))
            .collect())
    }

    fn check_can_adopt(&self, parent: NodeId, child: NodeId) -> RevealResult<()> {
        if !self.is_element(parent) {
            return Err(RevealError::document("only elements can have children"));
        }
        self.node(child)?;
        if child == self.root {
            return Err(RevealError::document("the root cannot be reparented"));
        }
        let mut cur = Some(parent);
        while let Some(c) = cur {
            if c == child {
                return Err(RevealError::document(
                    "cannot insert a node into its own subtree",
                ));
            }
            cur = self.node(c)?.parent;
        }
        Ok(())
    }

    /// Append `child` as the last child of `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> RevealResult<()> {
        self.check_can_adopt(parent, child)?;
        self.detach(child)?;
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Insert `child` before `reference`, which must be a child of `parent`.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: NodeId,
    ) -> RevealResult<()> {
        self.check_can_adopt(parent, child)?;
        if child == reference {
            return Ok(());
        }
        self.detach(child)?;
        let siblings = &mut self.node_mut(parent)?.children;
        let Some(pos) = siblings.iter().position(|c| *c == reference) else {
            return Err(RevealError::document(format!(
                "{reference:?} is not a child of {parent:?}"
            )));
        };
        siblings.insert(pos, child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Unlink `id` from its parent; the subtree stays alive.
    pub fn detach(&mut self, id: NodeId) -> RevealResult<()> {
        let Some(parent) = self.node(id)?.parent else {
            return Ok(());
        };
        self.node_mut(parent)?.children.retain(|c| *c != id);
        self.node_mut(id)?.parent = None;
        Ok(())
    }

    /// Detach every child of `id` and return them in order.
    pub fn take_children(&mut self, id: NodeId) -> RevealResult<Vec<NodeId>> {
        let children = std::mem::take(&mut self.node_mut(id)?.children);
        for c in &children {
            self.node_mut(*c)?.parent = None;
        }
        Ok(children)
    }

    /// Remove a node and its subtree, freeing their slots. Removing a stale id is a no-op.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) || id == self.root {
            return;
        }
        let _ = self.detach(id);
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            let Some(node) = self.nodes[cur.idx()].take() else {
                continue;
            };
            stack.extend(node.children);
            self.free_list.push(cur.idx());
        }
    }

    /// Attribute value, if `id` is an element that has it.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)
            .ok()
            .and_then(|el| el.attrs.get(name))
            .map(String::as_str)
    }

    /// Whether `id` carries attribute `name`.
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    /// Set attribute `name`, replacing any previous value.
    pub fn set_attr(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> RevealResult<()> {
        self.element_mut(id)?.attrs.insert(name.into(), value.into());
        Ok(())
    }

    /// Remove attribute `name`, returning its old value.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> RevealResult<Option<String>> {
        Ok(self.element_mut(id)?.attrs.remove(name))
    }

    /// Whether the `class` attribute lists `class`.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }

    /// Append `class` to the class list unless already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> RevealResult<()> {
        if self.has_class(id, class) {
            return Ok(());
        }
        let el = self.element_mut(id)?;
        let list = el.attrs.entry("class".to_owned()).or_default();
        if !list.is_empty() {
            list.push(' ');
        }
        list.push_str(class);
        Ok(())
    }

    /// Inline style value of `prop`.
    pub fn style(&self, id: NodeId, prop: &str) -> Option<&str> {
        self.element(id)
            .ok()
            .and_then(|el| el.style.get(prop))
            .map(String::as_str)
    }

    /// Set inline style `prop`.
    pub fn set_style(
        &mut self,
        id: NodeId,
        prop: impl Into<String>,
        value: impl Into<String>,
    ) -> RevealResult<()> {
        self.element_mut(id)?.style.insert(prop.into(), value.into());
        Ok(())
    }

    /// Remove inline style `prop`, returning its old value.
    pub fn remove_style(&mut self, id: NodeId, prop: &str) -> RevealResult<Option<String>> {
        Ok(self.element_mut(id)?.style.remove(prop))
    }

    /// Assign layout bounds in document coordinates.
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) -> RevealResult<()> {
        self.element_mut(id)?.bounds = Some(bounds);
        Ok(())
    }

    /// Bounds of `id`, falling back to the nearest ancestor that has bounds.
    pub fn bounds(&self, id: NodeId) -> Option<Rect> {
        let mut cur = Some(id);
        while let Some(c) = cur {
            let node = self.node(c).ok()?;
            if let NodeData::Element(el) = &node.data
                && let Some(b) = el.bounds
            {
                return Some(b);
            }
            cur = node.parent;
        }
        None
    }

    /// Concatenated text of the subtree in reading order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.visit(id, &mut |_, data| {
            if let NodeData::Text(t) = data {
                out.push_str(t);
            }
        });
        out
    }

    /// Elements in the subtree of `id` (inclusive) carrying `class`, in document order.
    pub fn query_class(&self, id: NodeId, class: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.visit(id, &mut |node, _| {
            if self.has_class(node, class) {
                out.push(node);
            }
        });
        out
    }

    /// Pre-order walk of the subtree rooted at `id`. Stale ids visit nothing.
    pub fn visit(&self, id: NodeId, f: &mut dyn FnMut(NodeId, &NodeData)) {
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            let Ok(node) = self.node(cur) else {
                continue;
            };
            f(cur, &node.data);
            stack.extend(node.children.iter().rev().copied());
        }
    }

    /// Number of live nodes, root included.
    pub fn live_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/tree.rs"]
mod tests;
