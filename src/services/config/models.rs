use crate::types::{OrganizeError, OrganizeResult};
use encoding_rs::Encoding;
use regex::Regex;
use std::path::PathBuf;

/// Default destination folder name when only a source is given.
pub const DEFAULT_DEST_NAME: &str = "extracted";

/// macOS resource-fork folder added by Finder's "Compress".
pub const MACOS_JUNK_DIR: &str = "__MACOSX";

/// Decides which destination children are category folders (kept as-is)
/// rather than containers to dissolve.
#[derive(Debug, Clone, Default)]
pub enum CategoryRule {
    /// First character is a digit, e.g. `01-Report` or full-width `０１_売上`.
    #[default]
    LeadingDigit,
    /// Name matches the given expression.
    Pattern(Regex),
}

impl CategoryRule {
    pub fn pattern(expr: &str) -> OrganizeResult<Self> {
        Regex::new(expr)
            .map(Self::Pattern)
            .map_err(|e| OrganizeError::Config(format!("Invalid category pattern '{expr}': {e}")))
    }

    pub fn is_category(&self, name: &str) -> bool {
        match self {
            Self::LeadingDigit => name.chars().next().is_some_and(|c| c.is_numeric()),
            Self::Pattern(re) => re.is_match(name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrganizerConfig {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    /// Lowercase extensions without the leading dot.
    pub archive_extensions: Vec<String>,
    pub junk_dir_names: Vec<String>,
    pub category_rule: CategoryRule,
    /// Console charset used when logging names. `None` logs UTF-8 as-is.
    pub console_encoding: Option<&'static Encoding>,
}

impl OrganizerConfig {
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            archive_extensions: vec!["zip".into()],
            junk_dir_names: vec![MACOS_JUNK_DIR.into()],
            category_rule: CategoryRule::default(),
            console_encoding: None,
        }
    }

    /// Destination defaults to `<source>/extracted`.
    pub fn from_source(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let dest_dir = source_dir.join(DEFAULT_DEST_NAME);
        Self::new(source_dir, dest_dir)
    }

    pub fn with_category_rule(mut self, rule: CategoryRule) -> Self {
        self.category_rule = rule;
        self
    }

    /// Accepts any WHATWG label, e.g. `shift_jis`, `windows-31j`, `cp1252`.
    pub fn with_console_encoding(mut self, label: &str) -> OrganizeResult<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| OrganizeError::Config(format!("Unknown console encoding: {label}")))?;
        self.console_encoding = Some(encoding);
        Ok(self)
    }

    pub fn is_junk(&self, name: &str) -> bool {
        self.junk_dir_names.iter().any(|j| j == name)
    }

    pub fn is_archive_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.archive_extensions.iter().any(|e| *e == ext)
    }
}
