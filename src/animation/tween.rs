use crate::animation::ease::Ease;
use crate::document::tree::{Document, NodeId};
use crate::foundation::ids::{AnimationId, RunId};

/// Inline style property the reveal writes.
pub const TRANSFORM_PROP: &str = "transform";

/// Write a block-axis offset (percent of the unit's own height) to `node`.
pub(crate) fn write_offset(doc: &mut Document, node: NodeId, percent: f64) -> bool {
    let rounded = (percent * 10_000.0).round() / 10_000.0;
    // Normalize -0 so settled units always read back as "0%".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    doc.set_style(node, TRANSFORM_PROP, format!("translate(0px, {rounded}%)"))
        .is_ok()
}

/// Read back the block-axis offset written by the reveal, if any.
pub fn unit_offset(doc: &Document, node: NodeId) -> Option<f64> {
    let value = doc.style(node, TRANSFORM_PROP)?;
    let inner = value.strip_prefix("translate(0px, ")?.strip_suffix("%)")?;
    inner.parse().ok()
}

/// Shared motion parameters of a tween group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Motion {
    pub(crate) from: f64,
    pub(crate) to: f64,
    pub(crate) duration: f64,
    pub(crate) stagger: f64,
    pub(crate) ease: Ease,
}

impl Motion {
    /// Value of unit `index` at `elapsed` seconds after the group began, or `None` before the
    /// unit's own start.
    pub(crate) fn sample(&self, index: usize, elapsed: f64) -> Option<f64> {
        let local = elapsed - index as f64 * self.stagger;
        if local < 0.0 {
            return None;
        }
        let t = if self.duration > 0.0 {
            (local / self.duration).min(1.0)
        } else {
            1.0
        };
        let te = self.ease.apply(t);
        Some(self.from + (self.to - self.from) * te)
    }

    pub(crate) fn span(&self, units: usize) -> f64 {
        if units == 0 {
            0.0
        } else {
            (units - 1) as f64 * self.stagger + self.duration
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct TweenGroup {
    pub(crate) id: AnimationId,
    pub(crate) run: RunId,
    pub(crate) units: Vec<NodeId>,
    /// Absolute time at which unit 0 begins moving.
    pub(crate) begin: f64,
    pub(crate) motion: Motion,
}

impl TweenGroup {
    pub(crate) fn end(&self) -> f64 {
        self.begin + self.motion.span(self.units.len())
    }
}

/// A finished or cancelled group, reported back to the stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GroupDone {
    pub(crate) id: AnimationId,
    pub(crate) run: RunId,
}

/// Every scheduled and in-flight tween group of a stage.
#[derive(Debug, Default)]
pub struct Timeline {
    groups: Vec<TweenGroup>,
}

impl Timeline {
    pub(crate) fn add(&mut self, group: TweenGroup) {
        tracing::trace!(id = ?group.id, units = group.units.len(), begin = group.begin, "tween group scheduled");
        self.groups.push(group);
    }

    /// Drop a group without touching its units. Returns whether it was still scheduled.
    pub(crate) fn cancel(&mut self, id: AnimationId) -> Option<GroupDone> {
        let pos = self.groups.iter().position(|g| g.id == id)?;
        let g = self.groups.remove(pos);
        Some(GroupDone { id: g.id, run: g.run })
    }

    /// Whether the group `id` is scheduled or still moving.
    pub fn is_active(&self, id: AnimationId) -> bool {
        self.groups.iter().any(|g| g.id == id)
    }

    /// Number of live groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Write every started unit's value at `now` and retire groups that have come to rest.
    pub(crate) fn tick(&mut self, now: f64, doc: &mut Document) -> Vec<GroupDone> {
        let mut done = Vec::new();
        self.groups.retain(|g| {
            let elapsed = now - g.begin;
            for (i, node) in g.units.iter().enumerate() {
                if let Some(v) = g.motion.sample(i, elapsed) {
                    write_offset(doc, *node, v);
                }
            }
            if now >= g.end() {
                done.push(GroupDone { id: g.id, run: g.run });
                false
            } else {
                true
            }
        });
        done
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
