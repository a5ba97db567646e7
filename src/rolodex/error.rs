use std::path::PathBuf;
use thiserror::Error;

/// A field or query value that failed its format rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Phone number must be a 10-digit number, got \"{0}\"")]
    Phone(String),

    #[error("Invalid birthday \"{0}\". Use YYYY-MM-DD.")]
    Birthday(String),

    #[error("Invalid search query \"{0}\": use only letters, only digits, or a DD.MM.YYYY date")]
    Query(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("No address book found at {}", .0.display())]
    Missing(PathBuf),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Could not determine a home directory for rolodex")]
    NoHomeDir,
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact with name \"{0}\" not found in the address book.")]
    ContactNotFound(String),

    #[error("Phone {phone} not found in the record: {name}")]
    PhoneNotFound { name: String, phone: String },

    #[error("{0}")]
    Argument(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RolodexError>;
