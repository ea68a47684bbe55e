pub(crate) mod events;
pub(crate) mod stage;
