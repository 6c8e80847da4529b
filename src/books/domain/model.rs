use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::json::lenient_string;

// BookEntity is one catalog entry. Its isbn is the key within an inventory; every field is
// an opaque string and nothing is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntity {
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    pub isbn: String,
    #[serde(default)]
    pub status: BookStatus,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.trim().to_string(),
            status: BookStatus::Available,
        }
    }

    pub fn with_status<S: Into<BookStatus>>(mut self, status: S) -> Self {
        self.status = status.into();
        self
    }

    // available -> issued, false when the book is already out
    pub fn issue(&mut self) -> bool {
        if self.status == BookStatus::Available {
            self.status = BookStatus::Issued;
            return true;
        }
        false
    }

    // issued -> available, false when the book is already on the shelf
    pub fn return_book(&mut self) -> bool {
        if self.status == BookStatus::Issued {
            self.status = BookStatus::Available;
            return true;
        }
        false
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.trim().to_string()
    }
}

impl Book for BookEntity {
    fn status(&self) -> BookStatus {
        self.status
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} — {} (ISBN: {}) [{}]", self.title, self.author, self.isbn, self.status)
    }
}
