#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod merge;
pub mod node;
pub mod normalize;

pub use merge::{merge_deep, merge_into};
pub use normalize::{composition, normalize, resolve, Composition};
