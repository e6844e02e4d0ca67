//! One-level flattening of the destination tree.
//!
//! After extraction the destination typically holds one wrapper folder per
//! archive. Wrapper ("container") folders are dissolved into the destination
//! root; category folders (see [`CategoryRule`]) are kept as-is and junk
//! folders such as `__MACOSX` are deleted. Name collisions merge recursively
//! with the incoming entry winning on files.
//!
//! Every filesystem call is allowed to fail. Failures land in the
//! [`RunReport`] and the pass carries on with the next entry.
//!
//! [`CategoryRule`]: crate::services::config::CategoryRule

mod container;
mod merge;

use crate::services::config::OrganizerConfig;
use crate::services::fs_utils::display_name;
use crate::types::{OrganizeResult, RunReport};
use std::ffi::OsStr;
use std::path::Path;

pub struct Flattener<'a> {
    config: &'a OrganizerConfig,
    report: &'a mut RunReport,
}

impl<'a> Flattener<'a> {
    pub fn new(config: &'a OrganizerConfig, report: &'a mut RunReport) -> Self {
        Self { config, report }
    }

    fn show(&self, name: &OsStr) -> String {
        display_name(name, self.config.console_encoding)
    }

    fn show_path(&self, path: &Path) -> String {
        path.file_name()
            .map(|n| self.show(n))
            .unwrap_or_else(|| path.display().to_string())
    }
}

/// Flatten `config.dest_dir` in place.
pub fn flatten_destination(config: &OrganizerConfig, report: &mut RunReport) -> OrganizeResult<()> {
    Flattener::new(config, report).run()
}

/// Merge `src` into `dst` (created if missing). Files from `src` replace
/// same-named files in `dst`; `src` is removed once emptied.
pub fn merge_dirs(config: &OrganizerConfig, report: &mut RunReport, src: &Path, dst: &Path) {
    Flattener::new(config, report).merge_dirs(src, dst);
}

#[cfg(test)]
#[path = "tests/merge_tests.rs"]
mod merge_tests;

#[cfg(test)]
#[path = "tests/flatten_tests.rs"]
mod flatten_tests;
