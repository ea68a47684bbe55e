pub(crate) mod config;
pub(crate) mod container;
pub(crate) mod copy;
