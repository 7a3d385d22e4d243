mod fixture;
pub use fixture::Fixture;

pub use std_util::*;
