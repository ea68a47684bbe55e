use std::collections::BTreeSet;

use crate::animation::stagger::RevealPlan;
use crate::document::tree::{Document, NodeId};
use crate::foundation::core::{Rect, Viewport};
use crate::foundation::ids::{RunId, WatchId};
use crate::trigger::start::ScrollStart;

#[derive(Debug)]
struct Watch {
    id: WatchId,
    run: RunId,
    target: NodeId,
    start: ScrollStart,
    plan: RevealPlan,
}

/// A watch whose start line was reached; it has already been removed from the hub.
#[derive(Debug)]
pub(crate) struct FiredWatch {
    pub(crate) id: WatchId,
    pub(crate) run: RunId,
    pub(crate) plan: RevealPlan,
}

/// One-shot visibility watches keyed by [`WatchId`].
#[derive(Debug, Default)]
pub struct ScrollHub {
    armed: Vec<Watch>,
    fired: BTreeSet<WatchId>,
}

impl ScrollHub {
    pub(crate) fn arm(
        &mut self,
        id: WatchId,
        run: RunId,
        target: NodeId,
        start: ScrollStart,
        plan: RevealPlan,
    ) {
        self.armed.push(Watch {
            id,
            run,
            target,
            start,
            plan,
        });
    }

    /// Whether `id` is still waiting.
    pub fn is_armed(&self, id: WatchId) -> bool {
        self.armed.iter().any(|w| w.id == id)
    }

    /// Whether `id` fired and has not been released since.
    pub fn has_fired(&self, id: WatchId) -> bool {
        self.fired.contains(&id)
    }

    /// Number of waiting watches.
    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    /// Forget `id` entirely. Returns whether it was still armed (released before firing).
    pub(crate) fn release(&mut self, id: WatchId) -> bool {
        self.fired.remove(&id);
        let before = self.armed.len();
        self.armed.retain(|w| w.id != id);
        self.armed.len() != before
    }

    /// Remove and return every armed watch whose start line has been reached.
    ///
    /// Targets without bounds are treated as sitting at the document origin. Detached targets
    /// never fire.
    pub(crate) fn take_reached(
        &mut self,
        doc: &Document,
        viewport: Viewport,
        scroll_y: f64,
    ) -> Vec<FiredWatch> {
        let mut out = Vec::new();
        let mut i = 0;
        while i < self.armed.len() {
            let w = &self.armed[i];
            let reached = doc.is_attached(w.target)
                && w.start.is_reached(
                    doc.bounds(w.target).unwrap_or(Rect::ZERO),
                    viewport,
                    scroll_y,
                );
            if reached {
                let w = self.armed.remove(i);
                self.fired.insert(w.id);
                out.push(FiredWatch {
                    id: w.id,
                    run: w.run,
                    plan: w.plan,
                });
            } else {
                i += 1;
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/watch.rs"]
mod tests;
