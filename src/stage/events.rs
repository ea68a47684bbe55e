use crate::foundation::ids::{AnimationId, RunId, WatchId};

/// Observable side effects of orchestrator runs, in the order they happened.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StageEvent {
    /// The container was missing or detached; the run does nothing.
    Deferred {
        /// Deferred run.
        run: RunId,
    },
    /// The container's text was split.
    Segmented {
        /// Run that split the text.
        run: RunId,
        /// Glyph units created.
        units: usize,
    },
    /// Every unit was moved to the hidden offset.
    Primed {
        /// Run that primed the units.
        run: RunId,
        /// Glyph units primed.
        units: usize,
    },
    /// A scroll watch is waiting for the container.
    TriggerArmed {
        /// Run that armed the watch.
        run: RunId,
        /// The armed watch.
        watch: WatchId,
    },
    /// The reveal was released to start.
    TriggerFired {
        /// Run whose trigger fired.
        run: RunId,
        /// `None` for immediate runs.
        watch: Option<WatchId>,
    },
    /// An armed watch was dropped during teardown without firing.
    TriggerReleased {
        /// Run being torn down.
        run: RunId,
        /// The released watch.
        watch: WatchId,
    },
    /// The tween group was scheduled.
    RevealStarted {
        /// Run being revealed.
        run: RunId,
        /// Group id.
        animation: AnimationId,
        /// Stage time at which the first unit starts moving.
        at: f64,
    },
    /// Every unit came to rest.
    RevealCompleted {
        /// Run that finished.
        run: RunId,
        /// Finished group.
        animation: AnimationId,
    },
    /// The group was cancelled before every unit came to rest.
    RevealCancelled {
        /// Run being torn down.
        run: RunId,
        /// Cancelled group.
        animation: AnimationId,
    },
    /// The original content was restored.
    Reverted {
        /// Run being torn down.
        run: RunId,
    },
}

impl StageEvent {
    /// Run the event belongs to.
    pub fn run(&self) -> RunId {
        match self {
            Self::Deferred { run }
            | Self::Segmented { run, .. }
            | Self::Primed { run, .. }
            | Self::TriggerArmed { run, .. }
            | Self::TriggerFired { run, .. }
            | Self::TriggerReleased { run, .. }
            | Self::RevealStarted { run, .. }
            | Self::RevealCompleted { run, .. }
            | Self::RevealCancelled { run, .. }
            | Self::Reverted { run } => *run,
        }
    }
}
