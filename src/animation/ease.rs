use crate::foundation::error::{RevealError, RevealResult};

/// Easing curves applied to normalized tween progress.
///
/// The `PowerN` names used by web animation libraries map onto the polynomial families:
/// `power1` = quad, `power2` = cubic, `power3` = quart, `power4` = quint.
///
/// Serialized as the snake_case name (`"out_quint"`); any name [`Ease::parse`] accepts
/// deserializes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Accelerating from rest (`t^2`).
    InQuad,
    /// Decelerating to rest.
    OutQuad,
    /// Accelerating, then decelerating.
    InOutQuad,
    /// Accelerating from rest (`t^3`).
    InCubic,
    /// Decelerating to rest.
    OutCubic,
    /// Accelerating, then decelerating.
    InOutCubic,
    /// Accelerating from rest (`t^4`).
    InQuart,
    /// Decelerating to rest.
    OutQuart,
    /// Accelerating, then decelerating.
    InOutQuart,
    /// Accelerating from rest (`t^5`).
    InQuint,
    /// Decelerating to rest.
    OutQuint,
    /// Accelerating, then decelerating.
    InOutQuint,
    /// Accelerating from rest (`2^(10t - 10)`).
    InExpo,
    /// Decelerating to rest.
    OutExpo,
    /// Accelerating, then decelerating.
    InOutExpo,
}

impl Ease {
    /// Every curve, in declaration order.
    pub const ALL: [Ease; 16] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
        Ease::InExpo,
        Ease::OutExpo,
        Ease::InOutExpo,
    ];

    /// Map normalized progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => in_out_pow(t, 2),
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => in_out_pow(t, 3),
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => in_out_pow(t, 4),
            Self::InQuint => t.powi(5),
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            Self::InOutQuint => in_out_pow(t, 5),
            Self::InExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Self::OutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::InOutExpo => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }

    /// Canonical snake_case name; round-trips through [`Ease::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "in_quad",
            Self::OutQuad => "out_quad",
            Self::InOutQuad => "in_out_quad",
            Self::InCubic => "in_cubic",
            Self::OutCubic => "out_cubic",
            Self::InOutCubic => "in_out_cubic",
            Self::InQuart => "in_quart",
            Self::OutQuart => "out_quart",
            Self::InOutQuart => "in_out_quart",
            Self::InQuint => "in_quint",
            Self::OutQuint => "out_quint",
            Self::InOutQuint => "in_out_quint",
            Self::InExpo => "in_expo",
            Self::OutExpo => "out_expo",
            Self::InOutExpo => "in_out_expo",
        }
    }

    /// Parse a curve name such as `"power4.out"`, `"expo.inOut"`, `"none"` or `"out_quint"`.
    pub fn parse(name: &str) -> RevealResult<Self> {
        let lowered = name.trim().to_ascii_lowercase();
        let ease = match lowered.as_str() {
            "none" | "linear" | "power0" | "power0.in" | "power0.out" | "power0.inout" => {
                Self::Linear
            }
            "power1.in" | "quad.in" | "in_quad" => Self::InQuad,
            "power1" | "power1.out" | "quad.out" | "out_quad" => Self::OutQuad,
            "power1.inout" | "quad.inout" | "in_out_quad" => Self::InOutQuad,
            "power2.in" | "cubic.in" | "in_cubic" => Self::InCubic,
            "power2" | "power2.out" | "cubic.out" | "out_cubic" => Self::OutCubic,
            "power2.inout" | "cubic.inout" | "in_out_cubic" => Self::InOutCubic,
            "power3.in" | "quart.in" | "in_quart" => Self::InQuart,
            "power3" | "power3.out" | "quart.out" | "out_quart" => Self::OutQuart,
            "power3.inout" | "quart.inout" | "in_out_quart" => Self::InOutQuart,
            "power4.in" | "quint.in" | "strong.in" | "in_quint" => Self::InQuint,
            "power4" | "power4.out" | "quint.out" | "strong.out" | "out_quint" => Self::OutQuint,
            "power4.inout" | "quint.inout" | "strong.inout" | "in_out_quint" => Self::InOutQuint,
            "expo.in" | "in_expo" => Self::InExpo,
            "expo" | "expo.out" | "out_expo" => Self::OutExpo,
            "expo.inout" | "in_out_expo" => Self::InOutExpo,
            _ => {
                return Err(RevealError::validation(format!(
                    "unknown ease curve '{name}'"
                )));
            }
        };
        Ok(ease)
    }
}

impl TryFrom<String> for Ease {
    type Error = RevealError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ease> for &'static str {
    fn from(ease: Ease) -> Self {
        ease.name()
    }
}

fn in_out_pow(t: f64, n: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(n - 1) * t.powi(n)
    } else {
        1.0 - ((-2.0 * t + 2.0).powi(n) / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
