//! copyreveal splits blocks of text into per-grapheme units and reveals them with a staggered
//! slide-up, either as soon as they are mounted or the first time they scroll into view.
//!
//! The crate is built around an explicit [`Stage`]: a document tree, a viewport, a scroll
//! position, a clock, and the tween timeline. Hosts drive it by advancing time and scrolling:
//!
//! - Build or load a [`Document`] and wrap it in a [`Stage`]
//! - Mount a [`CopyReveal`] on a container with a [`RunConfig`]
//! - Call [`Stage::advance`] and [`Stage::scroll_to`]; inspect [`Stage::events`]
//! - [`CopyReveal::unmount`] restores the original markup
//!
//! [`SceneDef`] loads a whole page of blocks from JSON, which is what the `copyreveal` binary
//! simulates.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod document;
pub(crate) mod lifecycle;
pub(crate) mod scene;
pub(crate) mod split;
pub(crate) mod stage;
pub(crate) mod trigger;

pub use crate::foundation::core::{Point, Rect, Size, Viewport, non_negative};
pub use crate::foundation::error::{RevealError, RevealResult};
pub use crate::foundation::ids::{AnimationId, RunId, WatchId};

pub use crate::document::markup::{inner_markup, to_markup};
pub use crate::document::tree::{Document, ElementData, NodeData, NodeId};

pub use crate::split::segmenter::{
    GlyphUnit, Segmentation, SplitOptions, WRAPPER_ATTR, segment, split_targets,
};

pub use crate::animation::ease::Ease;
pub use crate::animation::engine::{Engine, engine, init};
pub use crate::animation::profile::RevealProfile;
pub use crate::animation::stagger::{AnimationHandle, RevealPlan, prime};
pub use crate::animation::tween::{TRANSFORM_PROP, Timeline, unit_offset};

pub use crate::trigger::coordinator::{TriggerCoordinator, TriggerState};
pub use crate::trigger::start::{Anchor, ScrollStart};
pub use crate::trigger::watch::ScrollHub;

pub use crate::stage::events::StageEvent;
pub use crate::stage::stage::Stage;

pub use crate::lifecycle::config::RunConfig;
pub use crate::lifecycle::container::compose_container;
pub use crate::lifecycle::copy::CopyReveal;

pub use crate::scene::model::{
    BlockDef, BlockSnapshot, Scene, SceneBlock, SceneDef, SceneSnapshot, TextDef,
};
