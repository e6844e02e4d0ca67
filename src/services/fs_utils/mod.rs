pub mod display;
pub mod file_utils;

pub use display::{display_name, display_path};

#[cfg(test)]
#[path = "tests/file_utils_tests.rs"]
mod file_utils_tests;

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod display_tests;
