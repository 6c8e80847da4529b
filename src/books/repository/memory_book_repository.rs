use std::cell::RefCell;
use std::rc::Rc;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the last saved catalog in memory. Clones share storage, which
// lets a second inventory reload what the first one saved.
#[derive(Debug, Default, Clone)]
pub struct MemoryBookRepository {
    books: Rc<RefCell<Option<Vec<BookEntity>>>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<BookEntity>) -> Self {
        Self {
            books: Rc::new(RefCell::new(Some(books))),
        }
    }

    pub fn stored(&self) -> Option<Vec<BookEntity>> {
        self.books.borrow().clone()
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        self.books.borrow().clone()
            .ok_or_else(|| LibraryError::not_found("no catalog saved in memory"))
    }

    fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        *self.books.borrow_mut() = Some(entities.to_vec());
        Ok(entities.len())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
