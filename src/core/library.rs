use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // A domain rule rejected the request, e.g. issuing a book that is already issued.
    // The reason_code tells callers which transition was refused.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

pub const ALREADY_ISSUED: &str = "already_issued";
pub const ALREADY_AVAILABLE: &str = "already_available";

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LibraryError::NotFound { .. })
    }

    pub fn reason_code(&self) -> Option<&str> {
        match self {
            LibraryError::Validation { reason_code, .. } => { reason_code.as_deref() }
            LibraryError::Runtime { reason_code, .. } => { reason_code.as_deref() }
            _ => { None }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            return LibraryError::not_found(format!("io {}", err).as_str());
        }
        LibraryError::runtime(
            format!("io {}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the library inventory.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

// Status strings are matched case-insensitively; anything unrecognized falls back to available.
impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "issued" => BookStatus::Issued,
            _ => BookStatus::Available,
        }
    }
}

impl From<&str> for BookStatus {
    fn from(s: &str) -> Self {
        BookStatus::from(s.to_string())
    }
}

impl<'de> Deserialize<'de> for BookStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let str_status: Option<String> = Deserialize::deserialize(deserializer)?;
        Ok(str_status.map(BookStatus::from).unwrap_or_default())
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "available"),
            BookStatus::Issued => write!(f, "issued"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookStatus, LibraryError};

    #[test]
    fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
    }

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
        assert!(LibraryError::not_found("test").is_not_found());
    }

    #[test]
    fn test_should_create_validation_error() {
        let err = LibraryError::validation("test", Some("already_issued".to_string()));
        assert!(matches!(err, LibraryError::Validation{ message: _, reason_code: _ }));
        assert_eq!(Some("already_issued"), err.reason_code());
    }

    #[test]
    fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_map_io_errors() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(LibraryError::from(missing).is_not_found());
        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(LibraryError::from(denied), LibraryError::Runtime{ message: _, reason_code: Some(_) }));
    }

    #[test]
    fn test_should_format_book_status() {
        for status in [BookStatus::Available, BookStatus::Issued] {
            let str = status.to_string();
            let str_status = BookStatus::from(str);
            assert_eq!(status, str_status);
        }
    }

    #[test]
    fn test_should_normalize_book_status() {
        assert_eq!(BookStatus::Issued, BookStatus::from("ISSUED"));
        assert_eq!(BookStatus::Issued, BookStatus::from(" Issued "));
        assert_eq!(BookStatus::Available, BookStatus::from("Available"));
        assert_eq!(BookStatus::Available, BookStatus::from("lost"));
        let status: BookStatus = serde_json::from_str("\"IsSuEd\"").expect("should parse status");
        assert_eq!(BookStatus::Issued, status);
        let status: BookStatus = serde_json::from_str("null").expect("should parse null status");
        assert_eq!(BookStatus::Available, status);
        assert_eq!("\"issued\"", serde_json::to_string(&BookStatus::Issued).expect("should write status"));
    }
}
