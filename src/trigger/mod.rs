pub(crate) mod coordinator;
pub(crate) mod start;
pub(crate) mod watch;
