//! Common data types

pub mod distance;
pub mod length;
pub mod orientation;

pub use distance::*;
pub use length::*;
pub use orientation::*;
