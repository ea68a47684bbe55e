use std::sync::OnceLock;

use crate::animation::ease::Ease;
use crate::animation::profile::RevealProfile;
use crate::foundation::error::RevealResult;

static ENGINE: OnceLock<Engine> = OnceLock::new();

/// Process-wide animation subsystem state, fixed at [`init`] time.
#[derive(Debug)]
pub struct Engine {
    profile: RevealProfile,
}

impl Engine {
    /// Profile used by orchestrators mounted without an explicit one.
    pub fn default_profile(&self) -> &RevealProfile {
        &self.profile
    }

    /// Resolve an ease curve by name.
    pub fn ease(&self, name: &str) -> RevealResult<Ease> {
        Ease::parse(name)
    }
}

/// Initialize the animation subsystem. Safe to call repeatedly; every call returns the same
/// engine.
pub fn init() -> &'static Engine {
    ENGINE.get_or_init(|| {
        tracing::debug!("animation engine initialized");
        Engine {
            profile: RevealProfile::default(),
        }
    })
}

/// The engine, if [`init`] has run.
pub fn engine() -> Option<&'static Engine> {
    ENGINE.get()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/engine.rs"]
mod tests;
