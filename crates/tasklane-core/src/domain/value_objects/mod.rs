//! Domain value objects.

pub mod email;

pub use email::*;
