pub mod build;
pub mod tree;

#[cfg(feature = "watch")]
pub mod watch;
