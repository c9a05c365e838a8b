pub mod compare;
pub mod watch;
