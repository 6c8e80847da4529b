pub mod service;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

// CatalogService owns the ordered catalog, loaded once when the service is built. Every
// successful mutation is persisted before the call returns.
pub trait CatalogService {
    // appends the book, DuplicateKey when its isbn is already catalogued
    fn add_book(&mut self, book: BookEntity) -> LibraryResult<BookEntity>;

    // NotFound for an unknown isbn, Validation when the book is already issued
    fn issue_book(&mut self, isbn: &str) -> LibraryResult<BookEntity>;

    // NotFound for an unknown isbn, Validation when the book is already available
    fn return_book(&mut self, isbn: &str) -> LibraryResult<BookEntity>;

    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<&BookEntity>;

    fn find_books_by_title(&self, query: &str) -> Vec<&BookEntity>;

    fn display_all(&self) -> Vec<String>;

    fn books(&self) -> &[BookEntity];

    fn save(&self) -> LibraryResult<()>;
}
