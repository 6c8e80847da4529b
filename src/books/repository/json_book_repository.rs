use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use serde_json::Value;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// JsonBookRepository keeps the catalog as a JSON array in a single file. Every save rewrites
// the whole file in place.
#[derive(Debug, Clone)]
pub struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    fn ensure_parent(&self) -> LibraryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl Repository<BookEntity> for JsonBookRepository {
    fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        if !self.path.exists() {
            return Err(LibraryError::not_found(
                format!("catalog file not found {}", self.path.display()).as_str()));
        }
        let data = fs::read_to_string(&self.path)?;
        let val: Value = serde_json::from_str(data.as_str())?;
        if !val.is_array() {
            return Err(LibraryError::serialization(
                format!("catalog JSON root must be a list in {}", self.path.display()).as_str()));
        }
        Ok(serde_json::from_value(val)?)
    }

    fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        self.ensure_parent()?;
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, entities)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(entities.len())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::json_book_repository::JsonBookRepository;
    use crate::core::library::{BookStatus, LibraryError};
    use crate::core::repository::Repository;

    #[test]
    fn test_should_save_and_load_books() {
        let dir = tempfile::tempdir().expect("should create dir");
        let repo = JsonBookRepository::new(dir.path().join("catalog.json"));
        let books = vec![
            BookEntity::new("Dune", "Herbert", "111"),
            BookEntity::new("Emma", "Austen", "222").with_status(BookStatus::Issued),
            BookEntity::new("Ulysses", "Joyce", "333"),
        ];
        let size = repo.save(&books).expect("should save books");
        assert_eq!(3, size);

        let loaded = repo.load().expect("should load books");
        assert_eq!(books, loaded);
    }

    #[test]
    fn test_should_write_json_array() {
        let dir = tempfile::tempdir().expect("should create dir");
        let path = dir.path().join("catalog.json");
        let repo = JsonBookRepository::new(&path);
        let _ = repo.save(&[BookEntity::new("Dune", "Herbert", "111")]).expect("should save books");

        let raw = fs::read_to_string(&path).expect("should read file");
        let val: serde_json::Value = serde_json::from_str(raw.as_str()).expect("should parse file");
        assert_eq!(serde_json::json!([
            {"title": "Dune", "author": "Herbert", "isbn": "111", "status": "available"}
        ]), val);
    }

    #[test]
    fn test_should_create_parent_directories() {
        let dir = tempfile::tempdir().expect("should create dir");
        let path = dir.path().join("nested").join("deeper").join("catalog.json");
        let repo = JsonBookRepository::new(&path);
        let _ = repo.save(&[]).expect("should save books");
        assert!(path.exists());
        assert!(repo.load().expect("should load books").is_empty());
    }

    #[test]
    fn test_should_report_missing_file() {
        let dir = tempfile::tempdir().expect("should create dir");
        let repo = JsonBookRepository::new(dir.path().join("missing.json"));
        let res = repo.load();
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }

    #[test]
    fn test_should_reject_object_root() {
        let dir = tempfile::tempdir().expect("should create dir");
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"{"title": "Dune"}"#).expect("should write file");
        let res = JsonBookRepository::new(&path).load();
        assert!(matches!(res, Err(LibraryError::Serialization { .. })));
    }

    #[test]
    fn test_should_reject_malformed_json() {
        let dir = tempfile::tempdir().expect("should create dir");
        let path = dir.path().join("catalog.json");
        fs::write(&path, "[{\"title\": ").expect("should write file");
        let res = JsonBookRepository::new(&path).load();
        assert!(matches!(res, Err(LibraryError::Serialization { .. })));

        fs::write(&path, "[1, 2]").expect("should write file");
        let res = JsonBookRepository::new(&path).load();
        assert!(matches!(res, Err(LibraryError::Serialization { .. })));
    }

    #[test]
    fn test_should_fail_saving_over_directory() {
        let dir = tempfile::tempdir().expect("should create dir");
        let repo = JsonBookRepository::new(dir.path());
        let res = repo.save(&[BookEntity::new("Dune", "Herbert", "111")]);
        assert!(matches!(res, Err(LibraryError::Runtime { .. })));
        assert_eq!(dir.path().display().to_string(), repo.location());
    }
}
