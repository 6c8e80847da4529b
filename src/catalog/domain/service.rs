use std::collections::HashMap;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable, PersistPolicy};
use crate::core::events::DomainEvent;
use crate::core::library::{ALREADY_AVAILABLE, ALREADY_ISSUED, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

const BOOKS_EVENT: &str = "books";
const CATALOG_EVENT: &str = "catalog";

// CatalogServiceImpl keeps books in insertion order with an isbn -> position index beside
// them. Books are never removed, so positions stay valid once indexed.
pub struct CatalogServiceImpl {
    persist_policy: PersistPolicy,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
    books: Vec<BookEntity>,
    isbn_ndx: HashMap<String, usize>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        let mut svc = Self {
            persist_policy: config.on_persist_error,
            book_repository,
            events_publisher,
            books: vec![],
            isbn_ndx: HashMap::new(),
        };
        svc.load();
        svc
    }

    fn position(&self, isbn: &str) -> LibraryResult<usize> {
        let key = isbn.trim();
        self.isbn_ndx.get(key).copied().ok_or_else(|| {
            LibraryError::not_found(format!("no book with isbn {}", key).as_str())
        })
    }

    fn reindex(&mut self, books: Vec<BookEntity>) {
        self.books.clear();
        self.isbn_ndx.clear();
        for book in books {
            let key = book.id();
            if self.isbn_ndx.contains_key(&key) {
                let _ = self.reject(key.as_str(), LibraryError::duplicate_key(
                    format!("skipped duplicate isbn {} while loading: {}", key, book).as_str()));
                continue;
            }
            self.isbn_ndx.insert(key, self.books.len());
            self.books.push(book);
        }
    }

    fn reject(&self, key: &str, err: LibraryError) -> LibraryError {
        self.events_publisher.publish(&DomainEvent::rejected(BOOKS_EVENT, key, &err));
        err
    }

    // save failures were already reported by save(); the policy only decides whether the
    // caller sees them too
    fn persist(&self) -> LibraryResult<()> {
        match self.save() {
            Ok(()) => Ok(()),
            Err(err) => match self.persist_policy {
                PersistPolicy::Ignore => Ok(()),
                PersistPolicy::Propagate => Err(err),
            },
        }
    }

    // a missing catalog is a normal first run; anything else unreadable is reported and the
    // inventory starts empty either way
    fn load(&mut self) {
        let location = self.book_repository.location();
        match self.book_repository.load() {
            Ok(books) => {
                self.reindex(books);
                self.events_publisher.publish(&DomainEvent::loaded(CATALOG_EVENT, location.as_str(), self.books.len()));
            }
            Err(err) if err.is_not_found() => {
                self.reindex(vec![]);
                let mut event = DomainEvent::loaded(CATALOG_EVENT, location.as_str(), 0);
                event.message = format!("{}, starting with an empty catalog", err);
                self.events_publisher.publish(&event);
            }
            Err(err) => {
                self.reindex(vec![]);
                self.events_publisher.publish(&DomainEvent::failed(CATALOG_EVENT, location.as_str(), &err));
            }
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: BookEntity) -> LibraryResult<BookEntity> {
        let key = book.id();
        if self.isbn_ndx.contains_key(&key) {
            return Err(self.reject(key.as_str(), LibraryError::duplicate_key(
                format!("book with isbn {} already exists", key).as_str())));
        }
        self.isbn_ndx.insert(key.clone(), self.books.len());
        self.books.push(book.clone());
        self.events_publisher.publish(&DomainEvent::added(BOOKS_EVENT, key.as_str(), &book));
        self.persist()?;
        Ok(book)
    }

    fn issue_book(&mut self, isbn: &str) -> LibraryResult<BookEntity> {
        let pos = self.position(isbn).map_err(|err| self.reject(isbn.trim(), err))?;
        if !self.books[pos].issue() {
            let err = LibraryError::validation(
                format!("book already issued {}", self.books[pos]).as_str(), Some(ALREADY_ISSUED.to_string()));
            return Err(self.reject(isbn.trim(), err));
        }
        let book = self.books[pos].clone();
        self.events_publisher.publish(&DomainEvent::issued(BOOKS_EVENT, book.id().as_str(), &book));
        self.persist()?;
        Ok(book)
    }

    fn return_book(&mut self, isbn: &str) -> LibraryResult<BookEntity> {
        let pos = self.position(isbn).map_err(|err| self.reject(isbn.trim(), err))?;
        if !self.books[pos].return_book() {
            let err = LibraryError::validation(
                format!("book already available {}", self.books[pos]).as_str(), Some(ALREADY_AVAILABLE.to_string()));
            return Err(self.reject(isbn.trim(), err));
        }
        let book = self.books[pos].clone();
        self.events_publisher.publish(&DomainEvent::returned(BOOKS_EVENT, book.id().as_str(), &book));
        self.persist()?;
        Ok(book)
    }

    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<&BookEntity> {
        self.position(isbn).map(|pos| &self.books[pos])
    }

    fn find_books_by_title(&self, query: &str) -> Vec<&BookEntity> {
        let query = query.trim().to_lowercase();
        self.books.iter()
            .filter(|b| b.title.to_lowercase().contains(query.as_str()))
            .collect()
    }

    fn display_all(&self) -> Vec<String> {
        self.books.iter().map(|b| b.to_string()).collect()
    }

    fn books(&self) -> &[BookEntity] {
        self.books.as_slice()
    }

    fn save(&self) -> LibraryResult<()> {
        let location = self.book_repository.location();
        match self.book_repository.save(&self.books) {
            Ok(size) => {
                self.events_publisher.publish(&DomainEvent::saved(CATALOG_EVENT, location.as_str(), size));
                Ok(())
            }
            Err(err) => {
                self.events_publisher.publish(&DomainEvent::failed(CATALOG_EVENT, location.as_str(), &err));
                Err(err)
            }
        }
    }
}
