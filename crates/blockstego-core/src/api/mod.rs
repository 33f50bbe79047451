//! File based builders around [`crate::pipeline`].

pub mod hide;
pub(crate) mod shared;
pub mod unveil;

pub use shared::Password;
