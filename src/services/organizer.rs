//! Top-level run: extract every archive, then flatten the destination.

use crate::services::archive::extract_all;
use crate::services::config::OrganizerConfig;
use crate::services::flatten::flatten_destination;
use crate::services::fs_utils::display_path;
use crate::types::{OrganizeError, OrganizeResult, RunReport};
use std::fs;

/// Run both phases against `config`.
///
/// Only setup problems (destination cannot be created, source or destination
/// cannot be listed) are returned as errors. Everything else is recorded in
/// the returned report.
pub fn run(config: &OrganizerConfig) -> OrganizeResult<RunReport> {
    fs::create_dir_all(&config.dest_dir).map_err(|e| {
        OrganizeError::Setup(format!(
            "Failed to create destination {}: {e}",
            config.dest_dir.display()
        ))
    })?;

    let mut report = RunReport::new();
    extract_all(config, &mut report)?;
    flatten_destination(config, &mut report)?;

    let summary = report.summary();
    log::info!(
        "Extracted {} archives ({} failed), relocated {} entries, removed {} junk folders",
        summary.archives_extracted,
        summary.archives_failed,
        summary.entries_relocated,
        summary.junk_removed
    );
    for failure in report.failures() {
        log::warn!(
            "  {:?} {}: {}",
            failure.operation,
            display_path(&failure.path, config.console_encoding),
            failure.error.as_ref().map(|e| e.to_string()).unwrap_or_default()
        );
    }
    log::info!("Done");

    Ok(report)
}
