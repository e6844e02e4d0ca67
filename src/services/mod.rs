pub mod archive;
pub mod config;
pub mod flatten;
pub mod fs_utils;
pub mod organizer;
