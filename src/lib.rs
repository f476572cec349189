#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod any;
pub mod array;
pub mod boxed;
pub mod check;
pub mod collect;
pub mod flatten;
pub mod generate;
pub mod lazy;
pub mod map;
mod prelude;
pub mod primitive;
pub mod prove;
pub mod random;
pub mod same;
pub mod sample;
pub mod size;
pub mod standard;
pub mod stats;
mod utility;

pub use check::Check;
pub use generate::{FullGenerate, Generate};
pub use prelude::*;
pub use prove::Prove;
pub use sample::Sample;
