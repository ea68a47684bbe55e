use std::fmt;
use std::str::FromStr;

use crate::foundation::core::{Rect, Viewport};
use crate::foundation::error::{RevealError, RevealResult};

/// A position along the block axis of a box: a fraction of its height or a pixel offset
/// from its top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// Fraction of the extent: 0 is the top, 1 the bottom.
    Fraction(f64),
    /// Pixels from the top.
    Px(f64),
}

impl Anchor {
    /// Leading edge.
    pub const TOP: Anchor = Anchor::Fraction(0.0);
    /// Midpoint.
    pub const CENTER: Anchor = Anchor::Fraction(0.5);
    /// Trailing edge.
    pub const BOTTOM: Anchor = Anchor::Fraction(1.0);

    /// Offset of the anchor from the start of a span of `extent`.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Fraction(f) => extent * f,
            Self::Px(px) => px,
        }
    }

    fn parse(token: &str) -> RevealResult<Self> {
        match token {
            "top" => return Ok(Self::TOP),
            "center" => return Ok(Self::CENTER),
            "bottom" => return Ok(Self::BOTTOM),
            _ => {}
        }
        let number = |s: &str| {
            s.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| RevealError::validation(format!("bad scroll anchor '{token}'")))
        };
        if let Some(pct) = token.strip_suffix('%') {
            Ok(Self::Fraction(number(pct)? / 100.0))
        } else if let Some(px) = token.strip_suffix("px") {
            Ok(Self::Px(number(px)?))
        } else {
            Ok(Self::Px(number(token)?))
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            a if a == Self::TOP => f.write_str("top"),
            a if a == Self::CENTER => f.write_str("center"),
            a if a == Self::BOTTOM => f.write_str("bottom"),
            Self::Fraction(v) => write!(f, "{}%", v * 100.0),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// When a scroll-gated reveal fires: the moment `element` (a point on the container) reaches
/// `viewport` (a point on the visible window, measured from its top) while scrolling down.
///
/// Written as `"<element> <viewport>"`, e.g. `"top 75%"`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScrollStart {
    /// Point on the container.
    pub element: Anchor,
    /// Point on the viewport, measured from its top.
    pub viewport: Anchor,
}

impl Default for ScrollStart {
    fn default() -> Self {
        Self {
            element: Anchor::TOP,
            viewport: Anchor::Fraction(0.75),
        }
    }
}

impl ScrollStart {
    /// Parse `"<element> [<viewport>]"`; tokens are `top`, `center`, `bottom`, `N%` or `Npx`. A lone token uses `bottom` for the viewport.
    pub fn parse(spec: &str) -> RevealResult<Self> {
        let mut tokens = spec.split_ascii_whitespace();
        let Some(first) = tokens.next() else {
            return Err(RevealError::validation("empty scroll start"));
        };
        let element = Anchor::parse(first)?;
        let viewport = match tokens.next() {
            Some(t) => Anchor::parse(t)?,
            None => Anchor::BOTTOM,
        };
        if tokens.next().is_some() {
            return Err(RevealError::validation(format!(
                "scroll start '{spec}' has more than two positions"
            )));
        }
        Ok(Self { element, viewport })
    }

    /// Whether a container with `bounds` has reached the start line at `scroll_y`.
    pub fn is_reached(&self, bounds: Rect, viewport: Viewport, scroll_y: f64) -> bool {
        let element_line = bounds.y0 + self.element.resolve(bounds.height()) - scroll_y;
        let viewport_line = self.viewport.resolve(viewport.height);
        element_line <= viewport_line
    }
}

impl fmt::Display for ScrollStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

impl FromStr for ScrollStart {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ScrollStart {
    type Error = RevealError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ScrollStart> for String {
    fn from(value: ScrollStart) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/start.rs"]
mod tests;
