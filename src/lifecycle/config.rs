use crate::foundation::core::non_negative;

/// Caller-supplied settings for one orchestrator. Any change starts a fresh run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Wait for the container to scroll into view instead of revealing at once.
    pub scroll_gated: bool,
    /// Seconds between the trigger firing and the first unit moving.
    pub start_delay: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            scroll_gated: true,
            start_delay: 0.0,
        }
    }
}

impl RunConfig {
    /// Reveal as soon as the run is set up.
    pub fn immediate(start_delay: f64) -> Self {
        Self {
            scroll_gated: false,
            start_delay,
        }
    }

    /// Reveal the first time the container reaches the scroll start line.
    pub fn on_scroll(start_delay: f64) -> Self {
        Self {
            scroll_gated: true,
            start_delay,
        }
    }

    /// Clamp negative or non-finite delays to zero.
    pub fn sanitized(self) -> Self {
        let start_delay = non_negative(self.start_delay);
        if start_delay != self.start_delay {
            tracing::warn!(
                requested = self.start_delay,
                "start delay must be a finite, non-negative number of seconds; using 0"
            );
        }
        Self {
            scroll_gated: self.scroll_gated,
            start_delay,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/config.rs"]
mod tests;
