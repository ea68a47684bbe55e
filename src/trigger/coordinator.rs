use crate::animation::stagger::RevealPlan;
use crate::document::tree::NodeId;
use crate::foundation::ids::{RunId, WatchId};
use crate::stage::stage::Stage;
use crate::trigger::start::ScrollStart;

/// Where a run's trigger is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TriggerState {
    /// Not engaged yet, or released before firing.
    Idle,
    /// Waiting for the container to reach the scroll start line.
    Armed,
    /// The reveal has been started; never leaves this state for the rest of the run.
    Fired,
}

/// Decides when a run's reveal starts.
#[derive(Debug)]
pub struct TriggerCoordinator {
    run: RunId,
    watch: Option<WatchId>,
    fired_immediately: bool,
    released: bool,
}

impl TriggerCoordinator {
    pub(crate) fn new(run: RunId) -> Self {
        Self {
            run,
            watch: None,
            fired_immediately: false,
            released: false,
        }
    }

    /// Start `plan` now, or arm a one-shot watch on `container` that starts it later.
    pub(crate) fn engage(
        &mut self,
        stage: &mut Stage,
        container: NodeId,
        scroll_gated: bool,
        start: ScrollStart,
        plan: RevealPlan,
    ) {
        if self.watch.is_some() || self.fired_immediately || self.released {
            tracing::warn!(run = ?self.run, "trigger engaged twice; ignoring");
            return;
        }
        if scroll_gated {
            let watch = stage.arm_watch(self.run, container, start, plan);
            self.watch = Some(watch);
        } else {
            self.fired_immediately = true;
            stage.fire_now(self.run, plan);
        }
    }

    /// Current state, as seen from `stage`.
    pub fn state(&self, stage: &Stage) -> TriggerState {
        if self.released {
            return TriggerState::Idle;
        }
        if self.fired_immediately {
            return TriggerState::Fired;
        }
        match self.watch {
            Some(w) if stage.scroll_hub().is_armed(w) => TriggerState::Armed,
            Some(w) if stage.scroll_hub().has_fired(w) => TriggerState::Fired,
            _ => TriggerState::Idle,
        }
    }

    /// Watch armed for a scroll-gated run.
    pub fn watch(&self) -> Option<WatchId> {
        self.watch
    }

    /// Drop the watch without firing. Idempotent.
    pub(crate) fn release(&mut self, stage: &mut Stage) {
        if self.released {
            return;
        }
        self.released = true;
        if let Some(w) = self.watch {
            stage.release_watch(self.run, w);
        }
    }
}
