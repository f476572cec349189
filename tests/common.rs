pub use recheck::{
    check::Cause,
    random::{ParseSeedError, Pcg, Seed},
    size::Size,
    *,
};
use std::{error, result};

pub type Result = result::Result<(), Box<dyn error::Error>>;
pub const COUNT: usize = 1000;
