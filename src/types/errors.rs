use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrganizeError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Archive error: {0}")]
    Archive(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Setup error: {0}")]
    Setup(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for OrganizeError {
    fn from(error: std::io::Error) -> Self {
        OrganizeError::Io(error.to_string())
    }
}

impl From<zip::result::ZipError> for OrganizeError {
    fn from(error: zip::result::ZipError) -> Self {
        OrganizeError::Archive(error.to_string())
    }
}

impl Serialize for OrganizeError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type OrganizeResult<T> = Result<T, OrganizeError>;
