use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub title: String,
}

impl SearchBooksCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookEntity>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'_> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = self.catalog_service.find_books_by_title(req.title.as_str())
            .into_iter().cloned().collect();
        Ok(SearchBooksCommandResponse::new(books))
    }
}
