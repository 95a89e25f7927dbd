mod fixtures;
mod universe;

pub use crate::fixtures::*;
pub use crate::universe::{derives_prefix, strings_up_to};
