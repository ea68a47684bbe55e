use crate::animation::engine::Engine;
use crate::animation::stagger::{AnimationHandle, RevealPlan};
use crate::animation::tween::Timeline;
use crate::document::tree::{Document, NodeId};
use crate::foundation::core::{Viewport, non_negative};
use crate::foundation::ids::{AnimationId, IdCounter, RunId, WatchId};
use crate::stage::events::StageEvent;
use crate::trigger::start::ScrollStart;
use crate::trigger::watch::ScrollHub;

/// The host side of the orchestrator: document, scroll position, clock, and all scheduled
/// work (tween groups and scroll watches).
///
/// Everything is driven explicitly by the host through [`Stage::advance`] and
/// [`Stage::scroll_to`]; nothing runs on its own.
#[derive(Debug)]
pub struct Stage {
    engine: &'static Engine,
    doc: Document,
    viewport: Viewport,
    scroll_y: f64,
    now: f64,
    timeline: Timeline,
    scroll: ScrollHub,
    events: Vec<StageEvent>,
    ids: IdCounter,
}

impl Stage {
    /// A stage over an empty document, at time 0 and scroll offset 0.
    pub fn new(engine: &'static Engine, viewport: Viewport) -> Self {
        Self::with_document(engine, viewport, Document::new())
    }

    /// A stage over an existing document.
    pub fn with_document(engine: &'static Engine, viewport: Viewport, doc: Document) -> Self {
        Self {
            engine,
            doc,
            viewport,
            scroll_y: 0.0,
            now: 0.0,
            timeline: Timeline::default(),
            scroll: ScrollHub::default(),
            events: Vec::new(),
            ids: IdCounter::default(),
        }
    }

    /// Engine the stage was created with.
    pub fn engine(&self) -> &'static Engine {
        self.engine
    }

    /// The document being decorated.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Mutable access for hosts building or editing content.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Seconds since the stage was created.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Current scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Scheduled and in-flight tween groups.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Armed scroll watches.
    pub fn scroll_hub(&self) -> &ScrollHub {
        &self.scroll
    }

    /// Events recorded since creation or the last [`drain_events`](Self::drain_events).
    pub fn events(&self) -> &[StageEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<StageEvent> {
        std::mem::take(&mut self.events)
    }

    /// Move the clock forward by `dt` seconds and write every started unit's offset.
    pub fn advance(&mut self, dt: f64) {
        self.now += non_negative(dt);
        for done in self.timeline.tick(self.now, &mut self.doc) {
            tracing::debug!(run = ?done.run, animation = ?done.id, "reveal completed");
            self.events.push(StageEvent::RevealCompleted {
                run: done.run,
                animation: done.id,
            });
        }
    }

    /// Advance in `step`-sized increments until `until` seconds.
    pub fn run_until(&mut self, until: f64, step: f64) {
        let step = if step > 0.0 { step } else { 1.0 / 60.0 };
        while self.now + 1e-9 < until {
            self.advance(step.min(until - self.now));
        }
    }

    /// Scroll to `y` and fire every watch whose start line is now reached.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = non_negative(y);
        self.poll_watches();
    }

    /// Scroll by `dy`; non-finite deltas count as zero.
    pub fn scroll_by(&mut self, dy: f64) {
        let dy = if dy.is_finite() { dy } else { 0.0 };
        self.scroll_to(self.scroll_y + dy);
    }

    /// Resize the viewport and re-check armed watches.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.poll_watches();
    }

    /// Re-check armed watches, e.g. after the host moved content.
    pub fn refresh(&mut self) {
        self.poll_watches();
    }

    fn poll_watches(&mut self) {
        let fired = self
            .scroll
            .take_reached(&self.doc, self.viewport, self.scroll_y);
        for w in fired {
            tracing::debug!(run = ?w.run, watch = ?w.id, scroll_y = self.scroll_y, "scroll trigger fired");
            self.events.push(StageEvent::TriggerFired {
                run: w.run,
                watch: Some(w.id),
            });
            self.start_plan(w.plan);
        }
    }

    fn start_plan(&mut self, plan: RevealPlan) {
        self.events.push(StageEvent::RevealStarted {
            run: plan.run,
            animation: plan.handle.id(),
            at: self.now + plan.delay,
        });
        plan.start(&mut self.timeline, self.now);
    }

    pub(crate) fn next_run_id(&mut self) -> RunId {
        RunId(self.ids.next())
    }

    pub(crate) fn next_animation_id(&mut self) -> AnimationId {
        AnimationId(self.ids.next())
    }

    pub(crate) fn emit(&mut self, event: StageEvent) {
        self.events.push(event);
    }

    pub(crate) fn fire_now(&mut self, run: RunId, plan: RevealPlan) {
        self.events.push(StageEvent::TriggerFired { run, watch: None });
        self.start_plan(plan);
    }

    /// Arm a one-shot watch; a container already past the start line fires right away.
    pub(crate) fn arm_watch(
        &mut self,
        run: RunId,
        target: NodeId,
        start: ScrollStart,
        plan: RevealPlan,
    ) -> WatchId {
        let id = WatchId(self.ids.next());
        self.scroll.arm(id, run, target, start, plan);
        self.events.push(StageEvent::TriggerArmed { run, watch: id });
        self.poll_watches();
        id
    }

    pub(crate) fn release_watch(&mut self, run: RunId, watch: WatchId) {
        if self.scroll.release(watch) {
            self.events.push(StageEvent::TriggerReleased { run, watch });
        }
    }

    pub(crate) fn cancel_animation(&mut self, handle: AnimationHandle) -> bool {
        match self.timeline.cancel(handle.id()) {
            Some(done) => {
                self.events.push(StageEvent::RevealCancelled {
                    run: done.run,
                    animation: done.id,
                });
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/stage.rs"]
mod tests;
