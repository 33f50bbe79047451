//! One function per command line action, thin wrappers around [`crate::api`].

mod capacity;
mod hide;
mod unveil;

pub use capacity::*;
pub use hide::*;
pub use unveil::*;
