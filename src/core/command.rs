use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::{ALREADY_AVAILABLE, ALREADY_ISSUED, LibraryError};

#[derive(Debug)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Storage {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Storage { message, reason_code: None }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Storage { message, reason_code }
            }
        }
    }
}

// Display is what the menu shows the user.
impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::DuplicateKey { .. } => {
                write!(f, "A book with that ISBN already exists.")
            }
            CommandError::NotFound { .. } => {
                write!(f, "No book with that ISBN.")
            }
            CommandError::Validation { reason_code, message } => {
                match reason_code.as_deref() {
                    Some(ALREADY_ISSUED) => write!(f, "That book is already issued."),
                    Some(ALREADY_AVAILABLE) => write!(f, "That book is not issued."),
                    _ => write!(f, "{}", message),
                }
            }
            CommandError::Storage { message, .. } => {
                write!(f, "The catalog could not be saved: {}", message)
            }
        }
    }
}
