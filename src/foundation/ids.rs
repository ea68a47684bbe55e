/// Identifies one run (segment → prime → trigger → reveal → teardown) of an orchestrator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct RunId(pub u64);

/// Identifies a one-shot scroll watch registered on a [`crate::Stage`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct WatchId(pub u64);

/// Identifies one tween group on the stage timeline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct AnimationId(pub u64);

/// Monotonic id source; ids are never reused within one stage.
#[derive(Debug, Default)]
pub(crate) struct IdCounter(u64);

impl IdCounter {
    pub(crate) fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}
