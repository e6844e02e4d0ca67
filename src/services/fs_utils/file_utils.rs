use std::fs;
use std::io;
use std::path::Path;

/// Moves a file or directory to `to`, which must not exist yet.
///
/// Tries `std::fs::rename` first. If that fails (likely a cross-device link
/// error), falls back to `fs_extra` copy-and-remove.
pub fn move_entry(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::debug!(
                "fs::rename failed (cross-device?): {}. Attempting fallback move...",
                e
            );

            if !from.exists() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    "Source path does not exist",
                ));
            }

            if to.exists() {
                return Err(e);
            }

            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent)?;
            }

            if from.is_dir() {
                let mut options = fs_extra::dir::CopyOptions::new();
                // `to` is absent, so copy_inside lands the tree at `to` itself
                options.copy_inside = true;

                fs_extra::dir::move_dir(from, to, &options)
                    .map(|_| ())
                    .map_err(|err| io::Error::other(err.to_string()))
            } else {
                let options = fs_extra::file::CopyOptions::new();

                fs_extra::file::move_file(from, to, &options)
                    .map(|_| ())
                    .map_err(|err| io::Error::other(err.to_string()))
            }
        }
    }
}

/// Deletes the file at `to`, then moves `from` into its place.
pub fn replace_file(from: &Path, to: &Path) -> io::Result<()> {
    fs::remove_file(to)?;
    move_entry(from, to)
}

/// Removes `path` only if it is an empty directory.
pub fn remove_empty_dir(path: &Path) -> io::Result<()> {
    fs::remove_dir(path)
}

/// Removes a directory and everything below it.
pub fn remove_tree(path: &Path) -> io::Result<()> {
    fs::remove_dir_all(path)
}

/// Immediate children of `dir`, sorted by name for stable logs.
pub fn list_children(dir: &Path) -> io::Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}
