pub mod common;
pub mod test_utils;

pub use common::error::{DatasetError, Result};
