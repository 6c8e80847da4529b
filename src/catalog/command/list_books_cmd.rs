use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub lines: Vec<String>,
}

impl Command<(), ListBooksCommandResponse> for ListBooksCommand<'_> {
    fn execute(&mut self, _req: ()) -> Result<ListBooksCommandResponse, CommandError> {
        Ok(ListBooksCommandResponse { lines: self.catalog_service.display_all() })
    }
}
