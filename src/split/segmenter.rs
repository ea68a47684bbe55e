use unicode_segmentation::UnicodeSegmentation as _;

use crate::document::tree::{Document, NodeData, NodeId};
use crate::foundation::error::{RevealError, RevealResult};

/// Attribute marking a container whose direct element children are split independently.
pub const WRAPPER_ATTR: &str = "data-copy-wrapper";

/// How text is decorated while split.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// Wrap every unit in a clipping element so displaced glyphs are masked.
    pub mask: bool,
    /// Class pattern for units. A trailing `++` adds a numbered class per unit
    /// (`"char++"` gives `class="char char1"`, `"char char2"`, ...).
    pub unit_class: String,
    /// Label split targets with their original text and hide the units from assistive tech.
    pub aria: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            mask: true,
            unit_class: "char++".to_owned(),
            aria: true,
        }
    }
}

impl SplitOptions {
    /// Reject a unit class that is empty or contains whitespace.
    pub fn validate(&self) -> RevealResult<()> {
        let base = self.base_class();
        if base.is_empty() || base.contains(char::is_whitespace) {
            return Err(RevealError::validation(format!(
                "unit class '{}' must be a single non-empty class name",
                self.unit_class
            )));
        }
        Ok(())
    }

    /// Class carried by every unit.
    pub fn base_class(&self) -> &str {
        self.unit_class
            .strip_suffix("++")
            .unwrap_or(&self.unit_class)
    }

    fn numbered(&self) -> bool {
        self.unit_class.ends_with("++")
    }

    fn mask_class(&self) -> String {
        format!("{}-mask", self.base_class())
    }
}

/// One independently styleable fragment of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphUnit {
    /// The element that gets animated.
    pub node: NodeId,
    /// Clipping wrapper around `node`, when masking is enabled.
    pub mask: Option<NodeId>,
    /// The grapheme cluster this unit shows.
    pub text: String,
    /// Index of the split target (container child) this unit belongs to.
    pub target: usize,
}

#[derive(Debug)]
struct SplitTarget {
    element: NodeId,
    originals: Vec<NodeId>,
    /// Top-level children created by the split, in order.
    decorated: Vec<NodeId>,
    prev_aria_label: Option<Option<String>>,
}

/// The live result of splitting a container: ordered glyph units plus what is needed to undo
/// the decoration.
#[derive(Debug)]
pub struct Segmentation {
    targets: Vec<SplitTarget>,
    units: Vec<GlyphUnit>,
    reverted: bool,
}

impl Segmentation {
    /// Glyph units in reveal order; empty once reverted.
    pub fn units(&self) -> &[GlyphUnit] {
        &self.units
    }

    /// Animated unit elements, in reveal order.
    pub fn unit_nodes(&self) -> Vec<NodeId> {
        self.units.iter().map(|u| u.node).collect()
    }

    /// Number of elements that were split.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Whether [`revert`](Self::revert) has run.
    pub fn is_reverted(&self) -> bool {
        self.reverted
    }

    /// Restore every split target to its original children and attributes, freeing all
    /// decoration. A second call does nothing.
    ///
    /// A target whose children are no longer exactly the decoration (the host replaced its
    /// content while split) keeps the host's content; the saved originals and any leftover
    /// decoration are freed instead.
    pub fn revert(&mut self, doc: &mut Document) {
        if self.reverted {
            return;
        }
        self.reverted = true;
        self.units.clear();

        for target in self.targets.drain(..) {
            if !doc.is_alive(target.element) {
                // The host dropped the element; the detached originals have no home left.
                for orig in target.originals {
                    doc.remove(orig);
                }
                continue;
            }

            let untouched = doc
                .children(target.element)
                .is_ok_and(|c| c == target.decorated.as_slice());
            if untouched {
                if let Ok(decorated) = doc.take_children(target.element) {
                    for node in decorated {
                        doc.remove(node);
                    }
                }
                for orig in target.originals {
                    if let Err(err) = doc.append_child(target.element, orig) {
                        tracing::warn!(?err, "failed to restore original child during revert");
                    }
                }
            } else {
                tracing::debug!(
                    element = ?target.element,
                    "content replaced while split; keeping the new content"
                );
                for node in target.decorated {
                    doc.remove(node);
                }
                // Originals the host re-attached are its content now.
                for orig in target.originals {
                    if doc.parent(orig).is_ok_and(|p| p.is_none()) {
                        doc.remove(orig);
                    }
                }
            }

            let restored = match target.prev_aria_label {
                Some(Some(label)) => doc.set_attr(target.element, "aria-label", label),
                Some(None) => doc.remove_attr(target.element, "aria-label").map(drop),
                None => Ok(()),
            };
            if let Err(err) = restored {
                tracing::warn!(?err, "failed to restore aria-label during revert");
            }
        }
    }

    fn split_target(
        &mut self,
        doc: &mut Document,
        element: NodeId,
        options: &SplitOptions,
    ) -> RevealResult<()> {
        let target_index = self.targets.len();
        let text = doc.text_content(element);
        let originals = doc.take_children(element)?;
        self.targets.push(SplitTarget {
            element,
            originals: originals.clone(),
            decorated: Vec::new(),
            prev_aria_label: None,
        });

        if options.aria && !text.trim().is_empty() {
            let prev = doc.attr(element, "aria-label").map(str::to_owned);
            if let Some(t) = self.targets.last_mut() {
                t.prev_aria_label = Some(prev);
            }
            doc.set_attr(element, "aria-label", text.trim())?;
        }

        let mut builder = UnitBuilder {
            options,
            target: target_index,
            counter: 0,
            units: &mut self.units,
        };
        let built = originals
            .into_iter()
            .try_for_each(|orig| builder.decorate(doc, orig, element));

        // Record even a partial build so a failed split still reverts cleanly.
        let decorated = doc.children(element)?.to_vec();
        if let Some(t) = self.targets.last_mut() {
            t.decorated = decorated;
        }
        built
    }
}

struct UnitBuilder<'a> {
    options: &'a SplitOptions,
    target: usize,
    counter: usize,
    units: &'a mut Vec<GlyphUnit>,
}

impl UnitBuilder<'_> {
    /// Mirror `source` under `parent`, replacing text with glyph units.
    fn decorate(&mut self, doc: &mut Document, source: NodeId, parent: NodeId) -> RevealResult<()> {
        match doc.data(source)?.clone() {
            NodeData::Text(text) => self.split_text(doc, &text, parent),
            NodeData::Element(el) => {
                let copy = doc.create_element_with(el.shallow_clone());
                doc.append_child(parent, copy)?;
                let children = doc.children(source)?.to_vec();
                for child in children {
                    self.decorate(doc, child, copy)?;
                }
                Ok(())
            }
        }
    }

    fn split_text(&mut self, doc: &mut Document, text: &str, parent: NodeId) -> RevealResult<()> {
        let mut gap = String::new();
        for g in text.graphemes(true) {
            if g.chars().all(char::is_whitespace) {
                gap.push_str(g);
                continue;
            }
            if !gap.is_empty() {
                let t = doc.create_text(std::mem::take(&mut gap));
                doc.append_child(parent, t)?;
            }
            self.push_unit(doc, g, parent)?;
        }
        if !gap.is_empty() {
            let t = doc.create_text(gap);
            doc.append_child(parent, t)?;
        }
        Ok(())
    }

    fn push_unit(&mut self, doc: &mut Document, grapheme: &str, parent: NodeId) -> RevealResult<()> {
        self.counter += 1;

        let unit = doc.create_element("div");
        doc.add_class(unit, self.options.base_class())?;
        if self.options.numbered() {
            doc.add_class(unit, &format!("{}{}", self.options.base_class(), self.counter))?;
        }
        doc.set_style(unit, "display", "inline-block")?;
        doc.set_style(unit, "position", "relative")?;
        if self.options.aria {
            doc.set_attr(unit, "aria-hidden", "true")?;
        }
        let glyph = doc.create_text(grapheme);
        doc.append_child(unit, glyph)?;

        let mask = if self.options.mask {
            let mask = doc.create_element("div");
            doc.add_class(mask, &self.options.mask_class())?;
            doc.set_style(mask, "display", "inline-block")?;
            doc.set_style(mask, "overflow", "clip")?;
            doc.set_style(mask, "position", "relative")?;
            doc.append_child(mask, unit)?;
            doc.append_child(parent, mask)?;
            Some(mask)
        } else {
            doc.append_child(parent, unit)?;
            None
        };

        self.units.push(GlyphUnit {
            node: unit,
            mask,
            text: grapheme.to_owned(),
            target: self.target,
        });
        Ok(())
    }
}

/// Elements that get split for `container`: its direct element children when it is a group
/// wrapper, otherwise the container itself.
pub fn split_targets(doc: &Document, container: NodeId) -> RevealResult<Vec<NodeId>> {
    if doc.has_attr(container, WRAPPER_ATTR) {
        doc.element_children(container)
    } else {
        doc.element(container)?;
        Ok(vec![container])
    }
}

/// Split the text of `container` into glyph units.
///
/// On failure any partial decoration is undone before the error is returned.
#[tracing::instrument(skip(doc, options))]
pub fn segment(
    doc: &mut Document,
    container: NodeId,
    options: &SplitOptions,
) -> RevealResult<Segmentation> {
    options.validate()?;
    let targets = split_targets(doc, container)?;

    let mut seg = Segmentation {
        targets: Vec::with_capacity(targets.len()),
        units: Vec::new(),
        reverted: false,
    };
    for target in targets {
        if let Err(err) = seg.split_target(doc, target, options) {
            seg.revert(doc);
            return Err(err);
        }
    }

    tracing::debug!(
        targets = seg.targets.len(),
        units = seg.units.len(),
        "split container into glyph units"
    );
    Ok(seg)
}

#[cfg(test)]
#[path = "../../tests/unit/split/segmenter.rs"]
mod tests;
