use crate::animation::profile::RevealProfile;
use crate::animation::stagger::{AnimationHandle, RevealPlan, prime};
use crate::document::tree::NodeId;
use crate::foundation::error::RevealResult;
use crate::foundation::ids::RunId;
use crate::lifecycle::config::RunConfig;
use crate::split::segmenter::{GlyphUnit, Segmentation, segment};
use crate::stage::events::StageEvent;
use crate::stage::stage::Stage;
use crate::trigger::coordinator::{TriggerCoordinator, TriggerState};

/// Resources owned by one run. Dropped only through [`CopyReveal::teardown`].
#[derive(Debug)]
struct Run {
    id: RunId,
    segmentation: Segmentation,
    trigger: TriggerCoordinator,
    animation: AnimationHandle,
}

/// Text reveal orchestrator bound to one content container.
///
/// Every run splits the container into glyph units, hides them, and reveals them with a
/// stagger, either at once or when the container scrolls into view. A new run replaces the
/// previous one whenever the [`RunConfig`] or the container changes; the previous run is
/// always torn down first (watch released, tweens cancelled, text restored), so two sets of
/// glyph units never coexist.
///
/// All resources live on the [`Stage`], so an instance must be [unmounted](Self::unmount)
/// before it is dropped.
#[derive(Debug)]
pub struct CopyReveal {
    container: Option<NodeId>,
    config: RunConfig,
    profile: RevealProfile,
    run: Option<Run>,
    last_run: Option<RunId>,
    mounted: bool,
}

impl CopyReveal {
    /// Mount with the engine's default profile and start the first run.
    pub fn mount(
        stage: &mut Stage,
        container: impl Into<Option<NodeId>>,
        config: RunConfig,
    ) -> RevealResult<Self> {
        let profile = stage.engine().default_profile().clone();
        Self::mount_with_profile(stage, container, config, profile)
    }

    /// Mount with an explicit profile. The profile is validated before the document is touched.
    #[tracing::instrument(skip(stage, container, profile))]
    pub fn mount_with_profile(
        stage: &mut Stage,
        container: impl Into<Option<NodeId>>,
        config: RunConfig,
        profile: RevealProfile,
    ) -> RevealResult<Self> {
        profile.validate()?;
        let mut this = Self {
            container: container.into(),
            config: config.sanitized(),
            profile,
            run: None,
            last_run: None,
            mounted: true,
        };
        this.start_run(stage)?;
        Ok(this)
    }

    /// Apply a new configuration. Equal configurations are a no-op; anything else tears the
    /// current run down and starts a new one.
    #[tracing::instrument(skip(self, stage))]
    pub fn update(&mut self, stage: &mut Stage, config: RunConfig) -> RevealResult<()> {
        let config = config.sanitized();
        if !self.mounted {
            tracing::warn!("update on an unmounted reveal ignored");
            return Ok(());
        }
        if config == self.config {
            return Ok(());
        }
        self.config = config;
        self.rerun(stage)
    }

    /// Bind to a different (or newly attached) container and start a new run.
    pub fn set_container(
        &mut self,
        stage: &mut Stage,
        container: impl Into<Option<NodeId>>,
    ) -> RevealResult<()> {
        self.container = container.into();
        if !self.mounted {
            return Ok(());
        }
        self.rerun(stage)
    }

    /// Tear down the current run and start a fresh one with the current configuration, e.g.
    /// after the host replaced the container's text.
    pub fn rerun(&mut self, stage: &mut Stage) -> RevealResult<()> {
        if !self.mounted {
            return Ok(());
        }
        self.teardown(stage);
        self.start_run(stage)
    }

    /// Tear down the current run for good. Idempotent.
    #[tracing::instrument(skip(self, stage))]
    pub fn unmount(&mut self, stage: &mut Stage) {
        self.teardown(stage);
        self.mounted = false;
    }

    /// False once [`unmount`](Self::unmount) has run.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current (sanitized) configuration.
    pub fn config(&self) -> RunConfig {
        self.config
    }

    /// Profile every run of this instance uses.
    pub fn profile(&self) -> &RevealProfile {
        &self.profile
    }

    /// Container the next run binds to.
    pub fn container(&self) -> Option<NodeId> {
        self.container
    }

    /// Id of the live run, if one is set up.
    pub fn run_id(&self) -> Option<RunId> {
        self.run.as_ref().map(|r| r.id)
    }

    /// Id of the most recent run, including deferred ones.
    pub fn last_run_id(&self) -> Option<RunId> {
        self.last_run
    }

    /// Glyph units of the live run; empty when deferred or unmounted.
    pub fn units(&self) -> &[GlyphUnit] {
        self.run
            .as_ref()
            .map(|r| r.segmentation.units())
            .unwrap_or_default()
    }

    /// Trigger state of the live run; `Idle` when there is none.
    pub fn trigger_state(&self, stage: &Stage) -> TriggerState {
        self.run
            .as_ref()
            .map_or(TriggerState::Idle, |r| r.trigger.state(stage))
    }

    /// Whether the live run's tween group is scheduled or moving.
    pub fn is_animating(&self, stage: &Stage) -> bool {
        self.run
            .as_ref()
            .is_some_and(|r| r.animation.is_active(stage.timeline()))
    }

    /// segment → prime → arm-or-start. Requires that no run is live.
    fn start_run(&mut self, stage: &mut Stage) -> RevealResult<()> {
        debug_assert!(self.run.is_none(), "previous run must be torn down first");
        let id = stage.next_run_id();
        self.last_run = Some(id);

        let Some(container) = self
            .container
            .filter(|c| stage.document().is_attached(*c))
        else {
            tracing::debug!(run = ?id, "container missing or detached; run deferred");
            stage.emit(StageEvent::Deferred { run: id });
            return Ok(());
        };

        let mut segmentation = segment(stage.document_mut(), container, &self.profile.split)?;
        let units = segmentation.unit_nodes();
        stage.emit(StageEvent::Segmented {
            run: id,
            units: units.len(),
        });

        if let Err(err) = prime(stage.document_mut(), &units, &self.profile) {
            segmentation.revert(stage.document_mut());
            stage.emit(StageEvent::Reverted { run: id });
            return Err(err);
        }
        stage.emit(StageEvent::Primed {
            run: id,
            units: units.len(),
        });

        let animation = AnimationHandle::new(stage.next_animation_id());
        let plan = RevealPlan::new(animation, id, units, &self.profile, self.config.start_delay);
        let mut trigger = TriggerCoordinator::new(id);
        trigger.engage(
            stage,
            container,
            self.config.scroll_gated,
            self.profile.start,
            plan,
        );

        tracing::debug!(
            run = ?id,
            units = segmentation.units().len(),
            scroll_gated = self.config.scroll_gated,
            "run started"
        );
        self.run = Some(Run {
            id,
            segmentation,
            trigger,
            animation,
        });
        Ok(())
    }

    /// Release the watch, cancel the tweens, then restore the text.
    fn teardown(&mut self, stage: &mut Stage) {
        let Some(mut run) = self.run.take() else {
            return;
        };
        run.trigger.release(stage);
        stage.cancel_animation(run.animation);
        run.segmentation.revert(stage.document_mut());
        stage.emit(StageEvent::Reverted { run: run.id });
        tracing::debug!(run = ?run.id, "run torn down");
    }
}

impl Drop for CopyReveal {
    fn drop(&mut self) {
        if let Some(run) = &self.run {
            tracing::warn!(
                run = ?run.id,
                "CopyReveal dropped while mounted; its units stay split until the stage is dropped"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/copy.rs"]
mod tests;
