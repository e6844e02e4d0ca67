pub mod organize_cmds;

pub use organize_cmds::{execute, run, Cli};

#[cfg(test)]
#[path = "tests/organize_cmds_tests.rs"]
mod tests;
