use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> GetBookCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub isbn: String,
}

impl GetBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookEntity,
}

impl GetBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand<'_> {
    fn execute(&mut self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_isbn(req.isbn.as_str())
            .map_err(CommandError::from).map(|b| GetBookCommandResponse::new(b.clone()))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_run_get_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory);
        let res = AddBookCommand::new(svc.as_mut())
            .execute(AddBookCommandRequest::new("Dune", "Herbert", "111")).expect("should add book");

        let mut get_cmd = GetBookCommand::new(svc.as_ref());
        let loaded = get_cmd.execute(GetBookCommandRequest::new("111")).expect("should get book");
        assert_eq!(res.book, loaded.book);

        let missing = get_cmd.execute(GetBookCommandRequest::new("222"));
        assert!(matches!(missing, Err(CommandError::NotFound { .. })));
    }
}
