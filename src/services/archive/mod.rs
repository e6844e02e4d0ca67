//! Batch ZIP extraction into the destination directory.

mod extract;
mod types;

pub use extract::{extract_all, extract_archive, find_archives};
pub use types::ExtractionResult;

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
