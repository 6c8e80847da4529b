use std::io;
use std::io::{BufRead, Write};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
use crate::catalog::command::list_books_cmd::ListBooksCommand;
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuChoice {
    AddBook,
    IssueBook,
    ReturnBook,
    ViewAll,
    SearchByTitle,
    SearchByIsbn,
    Exit,
    Invalid,
}

impl From<&str> for MenuChoice {
    fn from(s: &str) -> Self {
        match s.trim() {
            "1" => MenuChoice::AddBook,
            "2" => MenuChoice::IssueBook,
            "3" => MenuChoice::ReturnBook,
            "4" => MenuChoice::ViewAll,
            "5" => MenuChoice::SearchByTitle,
            "6" => MenuChoice::SearchByIsbn,
            "7" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

// MenuController drives the inventory from a line-oriented reader and writer. End of input
// ends the session the same way as choosing Exit.
pub struct MenuController<'a, R: BufRead, W: Write> {
    catalog_service: &'a mut dyn CatalogService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> MenuController<'a, R, W> {
    pub fn new(catalog_service: &'a mut dyn CatalogService, input: R, output: W) -> Self {
        Self {
            catalog_service,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let choice = match self.read_line("Choose an option [1-7]: ")? {
                Some(line) => MenuChoice::from(line.as_str()),
                None => MenuChoice::Exit,
            };
            let finished = match choice {
                MenuChoice::AddBook => self.add_book()?,
                MenuChoice::IssueBook => self.issue_book()?,
                MenuChoice::ReturnBook => self.return_book()?,
                MenuChoice::ViewAll => self.view_all()?,
                MenuChoice::SearchByTitle => self.search_by_title()?,
                MenuChoice::SearchByIsbn => self.search_by_isbn()?,
                MenuChoice::Exit => true,
                MenuChoice::Invalid => {
                    writeln!(self.output, "Invalid option. Enter a number between 1 and 7.")?;
                    false
                }
            };
            if finished {
                writeln!(self.output, "Exiting. Goodbye.")?;
                return self.output.flush();
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Library Inventory Manager")?;
        writeln!(self.output, "1. Add Book")?;
        writeln!(self.output, "2. Issue Book")?;
        writeln!(self.output, "3. Return Book")?;
        writeln!(self.output, "4. View All Books")?;
        writeln!(self.output, "5. Search by Title")?;
        writeln!(self.output, "6. Search by ISBN")?;
        writeln!(self.output, "7. Exit")
    }

    // None once the input is exhausted
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_non_empty(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            match self.read_line(prompt)? {
                Some(val) if val.is_empty() => {
                    writeln!(self.output, "Input cannot be empty. Try again.")?;
                }
                other => return Ok(other),
            }
        }
    }

    // each handler returns true when input ran out mid-prompt

    fn add_book(&mut self) -> io::Result<bool> {
        let Some(title) = self.prompt_non_empty("Title: ")? else { return Ok(true) };
        let Some(author) = self.prompt_non_empty("Author: ")? else { return Ok(true) };
        let Some(isbn) = self.prompt_non_empty("ISBN: ")? else { return Ok(true) };
        let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), isbn.as_str());
        match AddBookCommand::new(&mut *self.catalog_service).execute(req) {
            Ok(_) => writeln!(self.output, "Book added successfully.")?,
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(false)
    }

    fn issue_book(&mut self) -> io::Result<bool> {
        let Some(isbn) = self.prompt_non_empty("ISBN to issue: ")? else { return Ok(true) };
        match IssueBookCommand::new(&mut *self.catalog_service).execute(IssueBookCommandRequest::new(isbn.as_str())) {
            Ok(_) => writeln!(self.output, "Book issued successfully.")?,
            Err(err) => writeln!(self.output, "Issue failed: {}", err)?,
        }
        Ok(false)
    }

    fn return_book(&mut self) -> io::Result<bool> {
        let Some(isbn) = self.prompt_non_empty("ISBN to return: ")? else { return Ok(true) };
        match ReturnBookCommand::new(&mut *self.catalog_service).execute(ReturnBookCommandRequest::new(isbn.as_str())) {
            Ok(_) => writeln!(self.output, "Book returned successfully.")?,
            Err(err) => writeln!(self.output, "Return failed: {}", err)?,
        }
        Ok(false)
    }

    fn view_all(&mut self) -> io::Result<bool> {
        match ListBooksCommand::new(&*self.catalog_service).execute(()) {
            Ok(res) if res.lines.is_empty() => writeln!(self.output, "No books in inventory.")?,
            Ok(res) => {
                writeln!(self.output)?;
                writeln!(self.output, "All Books:")?;
                for line in res.lines {
                    writeln!(self.output, " - {}", line)?;
                }
            }
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(false)
    }

    fn search_by_title(&mut self) -> io::Result<bool> {
        let Some(query) = self.prompt_non_empty("Title query: ")? else { return Ok(true) };
        match SearchBooksCommand::new(&*self.catalog_service).execute(SearchBooksCommandRequest::new(query.as_str())) {
            Ok(res) if res.books.is_empty() => writeln!(self.output, "No books match that title.")?,
            Ok(res) => {
                writeln!(self.output, "Found {} book(s):", res.books.len())?;
                for book in res.books {
                    writeln!(self.output, " - {}", book)?;
                }
            }
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(false)
    }

    fn search_by_isbn(&mut self) -> io::Result<bool> {
        let Some(isbn) = self.prompt_non_empty("ISBN to search: ")? else { return Ok(true) };
        match GetBookCommand::new(&*self.catalog_service).execute(GetBookCommandRequest::new(isbn.as_str())) {
            Ok(res) => writeln!(self.output, "Found: {}", res.book)?,
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(false)
    }
}
