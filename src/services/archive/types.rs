use serde::{Deserialize, Serialize};

/// Result of extracting one archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub archive_name: String,
    pub dest_path: String,
    pub files_extracted: usize,
    /// Entries dropped because their names escape the destination.
    pub entries_skipped: usize,
}
