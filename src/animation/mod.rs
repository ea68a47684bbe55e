pub(crate) mod ease;
pub(crate) mod engine;
pub(crate) mod profile;
pub(crate) mod stagger;
pub(crate) mod tween;
