use super::Flattener;
use crate::services::fs_utils::file_utils::{list_children, move_entry, remove_empty_dir, replace_file};
use crate::types::{Operation, OrganizeError, OrganizeResult};
use std::fs;
use std::path::Path;

impl Flattener<'_> {
    /// Recursively combine `src` into `dst`.
    ///
    /// A missing `src` is a no-op, so re-running on an already merged pair
    /// changes nothing.
    pub fn merge_dirs(&mut self, src: &Path, dst: &Path) {
        if fs::symlink_metadata(src).is_err() {
            return;
        }

        log::info!("  Merging folder {}...", self.show_path(src));
        let prepared = prepare_merge_target(dst);
        let failed = prepared.is_err();
        self.report.record(Operation::Merge, dst, &prepared);
        if failed {
            return;
        }

        let children = match list_children(src) {
            Ok(children) => children,
            Err(e) => {
                self.report
                    .record::<()>(Operation::Merge, src, &Err(OrganizeError::from(e)));
                return;
            }
        };

        for child in children {
            let from = child.path();
            let to = dst.join(child.file_name());
            let is_dir = child.file_type().map(|t| t.is_dir()).unwrap_or(false);

            if is_dir {
                self.merge_dirs(&from, &to);
            } else {
                self.place_file(&from, &to);
            }
        }

        self.remove_emptied(src);
    }

    /// Move a single file to `to`, replacing a file already there.
    pub(super) fn place_file(&mut self, from: &Path, to: &Path) {
        match fs::symlink_metadata(to) {
            Err(_) => {
                log::info!("  Moving {}...", self.show_path(from));
                let outcome = move_entry(from, to).map_err(OrganizeError::from);
                self.report.record(Operation::Move, to, &outcome);
            }
            Ok(meta) if meta.is_dir() => {
                let outcome: OrganizeResult<()> = Err(OrganizeError::Conflict(format!(
                    "cannot replace directory {} with a file",
                    to.display()
                )));
                self.report.record(Operation::Overwrite, to, &outcome);
            }
            Ok(_) => {
                log::info!("  Overwriting file {}...", self.show_path(from));
                let outcome = replace_file(from, to).map_err(OrganizeError::from);
                self.report.record(Operation::Overwrite, to, &outcome);
            }
        }
    }

    /// Remove a directory that should now be empty. Failure is non-fatal.
    pub(super) fn remove_emptied(&mut self, dir: &Path) {
        let outcome = remove_empty_dir(dir).map_err(OrganizeError::from);
        if outcome.is_ok() {
            log::debug!("  Removed empty folder {}", self.show_path(dir));
        }
        self.report.record(Operation::RemoveDir, dir, &outcome);
    }
}

/// Ensure `dst` is a directory. A file in the way is deleted first.
fn prepare_merge_target(dst: &Path) -> OrganizeResult<()> {
    if let Ok(meta) = fs::symlink_metadata(dst) {
        if !meta.is_dir() {
            fs::remove_file(dst)?;
        }
    }
    fs::create_dir_all(dst)?;
    Ok(())
}
