use crate::animation::ease::Ease;
use crate::foundation::error::{RevealError, RevealResult};
use crate::split::segmenter::SplitOptions;
use crate::trigger::start::ScrollStart;

/// Timing, motion and decoration settings shared by every unit of a reveal.
///
/// Defaults reproduce the house style: one-second quint-out slide up from a full unit height,
/// 30ms apart, starting when the container's top reaches 75% of the viewport.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealProfile {
    /// Seconds each unit takes to travel from the hidden offset to rest.
    pub duration: f64,
    /// Seconds between consecutive unit start times.
    pub stagger: f64,
    /// Curve shared by every unit.
    pub ease: Ease,
    /// Hidden offset along the block axis, in percent of the unit's own height.
    pub offset_percent: f64,
    /// When a scroll-gated run fires.
    pub start: ScrollStart,
    /// How the container's text is split.
    pub split: SplitOptions,
}

impl Default for RevealProfile {
    fn default() -> Self {
        Self {
            duration: 1.0,
            stagger: 0.03,
            ease: Ease::OutQuint,
            offset_percent: 100.0,
            start: ScrollStart::default(),
            split: SplitOptions::default(),
        }
    }
}

impl RevealProfile {
    /// Reject non-positive durations, negative staggers and malformed split options.
    pub fn validate(&self) -> RevealResult<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(RevealError::validation("reveal duration must be > 0"));
        }
        if !(self.stagger.is_finite() && self.stagger >= 0.0) {
            return Err(RevealError::validation("reveal stagger must be >= 0"));
        }
        if !self.offset_percent.is_finite() {
            return Err(RevealError::validation("reveal offset must be finite"));
        }
        self.split.validate()
    }

    /// Seconds from the first unit's start until the last unit comes to rest.
    pub fn total_duration(&self, units: usize) -> f64 {
        if units == 0 {
            return 0.0;
        }
        (units - 1) as f64 * self.stagger + self.duration
    }

    /// Parse and validate a profile; missing fields take their defaults.
    pub fn from_json(s: &str) -> RevealResult<Self> {
        let profile: Self = serde_json::from_str(s)?;
        profile.validate()?;
        Ok(profile)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/profile.rs"]
mod tests;
