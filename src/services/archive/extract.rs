use super::types::ExtractionResult;
use crate::services::config::OrganizerConfig;
use crate::services::fs_utils::display_path;
use crate::types::{Operation, OrganizeError, OrganizeResult, RunReport};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Archives directly inside `source_dir` (non-recursive), sorted by path.
pub fn find_archives(config: &OrganizerConfig) -> OrganizeResult<Vec<PathBuf>> {
    let entries = fs::read_dir(&config.source_dir).map_err(|e| {
        OrganizeError::Setup(format!(
            "Failed to read source {}: {e}",
            config.source_dir.display()
        ))
    })?;

    let mut archives: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| config.is_archive_extension(ext))
        })
        .collect();
    archives.sort();
    Ok(archives)
}

/// Extract every entry of a ZIP archive under `dest_path`, keeping the
/// archive's internal relative paths. Existing files are overwritten.
pub fn extract_archive(archive_path: &Path, dest_path: &Path) -> OrganizeResult<ExtractionResult> {
    let file = fs::File::open(archive_path)
        .map_err(|e| OrganizeError::Archive(format!("Failed to open archive: {e}")))?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| OrganizeError::Archive(format!("Invalid or corrupt ZIP: {e}")))?;

    let mut files_extracted: usize = 0;
    let mut entries_skipped: usize = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| OrganizeError::Archive(format!("Failed to read entry {i}: {e}")))?;

        let entry_path = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => {
                log::warn!("Skipping unsafe entry path: {}", entry.name());
                entries_skipped += 1;
                continue;
            }
        };

        let output_path = dest_path.join(&entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path)?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = fs::File::create(&output_path)?;
            io::copy(&mut entry, &mut outfile)?;
            files_extracted += 1;
        }
    }

    Ok(ExtractionResult {
        archive_name: archive_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default(),
        dest_path: dest_path.to_string_lossy().to_string(),
        files_extracted,
        entries_skipped,
    })
}

/// Extract all archives found in the source directory into the destination.
///
/// A failing archive is recorded and the batch moves on; archives are never
/// deleted or moved.
pub fn extract_all(config: &OrganizerConfig, report: &mut RunReport) -> OrganizeResult<()> {
    let console = config.console_encoding;
    let archives = find_archives(config)?;

    log::info!(
        "Found {} archives in {}",
        archives.len(),
        display_path(&config.source_dir, console)
    );
    for archive in &archives {
        log::info!(" - {}", display_path(archive, console));
    }

    for archive in &archives {
        log::info!("Processing: {}", display_path(archive, console));
        let outcome = extract_archive(archive, &config.dest_dir);
        if let Ok(result) = &outcome {
            log::info!(
                "Extracted {} ({} files, {} skipped)",
                display_path(archive, console),
                result.files_extracted,
                result.entries_skipped
            );
        }
        report.record(Operation::Extract, archive, &outcome);

        if let Ok(result) = &outcome {
            if result.entries_skipped > 0 {
                let skipped: OrganizeResult<()> = Err(OrganizeError::Archive(format!(
                    "{} entries with unsafe paths skipped",
                    result.entries_skipped
                )));
                report.record(Operation::SkipEntry, archive, &skipped);
            }
        }
    }

    Ok(())
}
