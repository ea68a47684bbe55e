use crate::animation::profile::RevealProfile;
use crate::animation::tween::{Motion, Timeline, TweenGroup, write_offset};
use crate::document::tree::{Document, NodeId};
use crate::foundation::error::{RevealError, RevealResult};
use crate::foundation::ids::{AnimationId, RunId};

/// Cancellable reference to one run's tween group.
///
/// The id is allocated when the run is set up, before the group exists; cancelling a handle
/// whose group never started (or already finished) does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationHandle {
    id: AnimationId,
}

impl AnimationHandle {
    pub(crate) fn new(id: AnimationId) -> Self {
        Self { id }
    }

    /// Id of the tween group this handle controls.
    pub fn id(self) -> AnimationId {
        self.id
    }

    /// Whether the group is scheduled or still moving.
    pub fn is_active(self, timeline: &Timeline) -> bool {
        timeline.is_active(self.id)
    }

    /// Stop all scheduled and in-flight unit tweens. Units keep their last written offset.
    pub fn cancel(self, timeline: &mut Timeline) -> bool {
        timeline.cancel(self.id).is_some()
    }
}

/// Set every unit to the hidden pre-reveal offset.
pub fn prime(doc: &mut Document, units: &[NodeId], profile: &RevealProfile) -> RevealResult<()> {
    for node in units {
        if !write_offset(doc, *node, profile.offset_percent) {
            return Err(RevealError::animation(format!(
                "cannot prime glyph unit {node:?}"
            )));
        }
    }
    Ok(())
}

/// A reveal ready to start: which units, how they move, and how long to wait once started.
#[derive(Clone, Debug)]
pub struct RevealPlan {
    pub(crate) handle: AnimationHandle,
    pub(crate) run: RunId,
    pub(crate) units: Vec<NodeId>,
    pub(crate) delay: f64,
    pub(crate) motion: Motion,
}

impl RevealPlan {
    pub(crate) fn new(
        handle: AnimationHandle,
        run: RunId,
        units: Vec<NodeId>,
        profile: &RevealProfile,
        delay: f64,
    ) -> Self {
        Self {
            handle,
            run,
            units,
            delay,
            motion: Motion {
                from: profile.offset_percent,
                to: 0.0,
                duration: profile.duration,
                stagger: profile.stagger,
                ease: profile.ease,
            },
        }
    }

    /// Schedule the group on `timeline`; unit `i` begins at `now + delay + i * stagger`.
    pub(crate) fn start(self, timeline: &mut Timeline, now: f64) {
        timeline.add(TweenGroup {
            id: self.handle.id,
            run: self.run,
            units: self.units,
            begin: now + self.delay,
            motion: self.motion,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
