use super::Flattener;
use crate::services::fs_utils::file_utils::{list_children, move_entry, remove_tree, replace_file};
use crate::types::{Operation, OrganizeError, OrganizeResult};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

impl Flattener<'_> {
    /// Single pass over the destination's immediate children. Entries moved
    /// up during the pass are not revisited.
    pub fn run(&mut self) -> OrganizeResult<()> {
        log::info!("Organizing folders...");
        let dest_root = self.config.dest_dir.clone();
        let children = list_children(&dest_root).map_err(|e| {
            OrganizeError::Setup(format!(
                "Failed to read destination {}: {e}",
                dest_root.display()
            ))
        })?;

        for child in children {
            let is_dir = child.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }

            let name = child.file_name();
            let path = child.path();
            let name_lossy = name.to_string_lossy();

            if self.config.is_junk(&name_lossy) {
                self.remove_junk(&path);
            } else if self.config.category_rule.is_category(&name_lossy) {
                log::debug!("Keeping category folder {}", self.show(&name));
                self.report.record_ok(Operation::SkipCategory, &path);
            } else {
                self.dissolve_container(&path, &dest_root);
            }
        }

        Ok(())
    }

    /// Move every entry of `container` into `dest_root`, then remove it.
    pub fn dissolve_container(&mut self, container: &Path, dest_root: &Path) {
        log::info!("Flattening container folder: {}", self.show_path(container));

        let container = match self.step_aside_if_shadowed(container, dest_root) {
            Ok(path) => path,
            Err(e) => {
                self.report.record::<()>(Operation::Move, container, &Err(e));
                return;
            }
        };

        let children = match list_children(&container) {
            Ok(children) => children,
            Err(e) => {
                self.report
                    .record::<()>(Operation::Move, &container, &Err(OrganizeError::from(e)));
                return;
            }
        };

        for child in children {
            let name = child.file_name();
            let from = child.path();
            let to = dest_root.join(&name);
            let is_dir = child.file_type().map(|t| t.is_dir()).unwrap_or(false);

            if is_dir && self.config.is_junk(&name.to_string_lossy()) {
                self.remove_junk(&from);
                continue;
            }

            match fs::symlink_metadata(&to) {
                Err(_) => {
                    log::info!("  Moving {}...", self.show(&name));
                    let outcome = move_entry(&from, &to).map_err(OrganizeError::from);
                    self.report.record(Operation::Move, &to, &outcome);
                }
                Ok(meta) if meta.is_dir() && is_dir => self.merge_dirs(&from, &to),
                Ok(meta) if meta.is_dir() => self.place_file(&from, &to),
                Ok(_) => {
                    log::info!("  Overwriting {}...", self.show(&name));
                    let outcome = replace_file(&from, &to).map_err(OrganizeError::from);
                    self.report.record(Operation::Overwrite, &to, &outcome);
                }
            }
        }

        self.remove_emptied(&container);
        if fs::symlink_metadata(&container).is_err() {
            log::info!("  Removed empty container folder");
        }
    }

    fn remove_junk(&mut self, path: &Path) {
        log::info!("Removing {}...", self.show_path(path));
        let outcome = remove_tree(path).map_err(OrganizeError::from);
        self.report.record(Operation::RemoveJunk, path, &outcome);
    }

    /// A container holding an entry with its own name would have that entry
    /// merged into the container itself. Rename the container out of the way
    /// first.
    fn step_aside_if_shadowed(
        &self,
        container: &Path,
        dest_root: &Path,
    ) -> OrganizeResult<PathBuf> {
        let Some(name) = container.file_name() else {
            return Ok(container.to_path_buf());
        };
        if container.parent() != Some(dest_root) || !container.join(name).exists() {
            return Ok(container.to_path_buf());
        }

        let mut counter = 1;
        let renamed = loop {
            let mut candidate = OsString::from(name);
            candidate.push(format!(".flatten-{counter}"));
            let check_path = dest_root.join(candidate);
            if !check_path.exists() {
                break check_path;
            }
            counter += 1;
        };

        log::debug!(
            "Container {} shadows its own entry, renaming before flattening",
            self.show(name)
        );
        move_entry(container, &renamed)?;
        Ok(renamed)
    }
}
