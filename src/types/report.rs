//! Run-level record of every filesystem operation the organizer attempted.

use super::errors::{OrganizeError, OrganizeResult};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Kind of operation recorded in a [`RunReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// One archive extracted into the destination.
    Extract,
    /// Archive entries dropped during extraction because their paths escape the destination.
    SkipEntry,
    /// Recursive removal of a junk directory such as `__MACOSX`.
    RemoveJunk,
    /// Category folder left untouched.
    SkipCategory,
    /// Entry relocated to a free target path.
    Move,
    /// Existing file replaced by the incoming entry.
    Overwrite,
    /// Directory combined into an existing directory.
    Merge,
    /// Removal of an emptied container or merge source.
    RemoveDir,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub operation: Operation,
    #[serde(serialize_with = "serialize_lossy")]
    pub path: PathBuf,
    pub error: Option<OrganizeError>,
}

impl ReportEntry {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

// Legacy-encoded archive names may not be UTF-8.
fn serialize_lossy<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&path.to_string_lossy())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
    pub entries: Vec<ReportEntry>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of `operation` on `path`, logging failures.
    pub fn record<T>(
        &mut self,
        operation: Operation,
        path: &Path,
        outcome: &OrganizeResult<T>,
    ) {
        let error = match outcome {
            Ok(_) => None,
            Err(e) => {
                log::warn!("{:?} failed for {}: {e}", operation, path.display());
                Some(e.clone())
            }
        };
        self.entries.push(ReportEntry {
            operation,
            path: path.to_path_buf(),
            error,
        });
    }

    pub fn record_ok(&mut self, operation: Operation, path: &Path) {
        self.record::<()>(operation, path, &Ok(()));
    }

    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| !e.succeeded())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn count(&self, operation: Operation) -> usize {
        self.entries
            .iter()
            .filter(|e| e.operation == operation && e.succeeded())
            .count()
    }

    pub fn count_failed(&self, operation: Operation) -> usize {
        self.failures().filter(|e| e.operation == operation).count()
    }

    pub fn entries_for(&self, operation: Operation) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(move |e| e.operation == operation)
    }
}

/// Totals logged at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub archives_extracted: usize,
    pub archives_failed: usize,
    pub entries_relocated: usize,
    pub junk_removed: usize,
    pub failures: usize,
}

impl RunReport {
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            archives_extracted: self.count(Operation::Extract),
            archives_failed: self.count_failed(Operation::Extract),
            entries_relocated: self.count(Operation::Move)
                + self.count(Operation::Overwrite)
                + self.count(Operation::Merge),
            junk_removed: self.count(Operation::RemoveJunk),
            failures: self.failures().count(),
        }
    }
}
