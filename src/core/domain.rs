use std::env;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATALOG_PATH: &str = "catalog.json";
pub const CATALOG_PATH_ENV: &str = "LMS_CATALOG_PATH";
pub const PERSIST_ERRORS_ENV: &str = "LMS_PERSIST_ERRORS";
pub const LOG_LEVEL_ENV: &str = "LMS_LOG_LEVEL";

// Identifiable defines the key shared by records kept in the catalog
pub trait Identifiable {
    fn id(&self) -> String;
}

// PersistPolicy decides what happens to a mutating call when the catalog cannot be saved.
// Either way the in-memory change is kept and the failure is reported.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PersistPolicy {
    #[default]
    Ignore,
    Propagate,
}

impl From<String> for PersistPolicy {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "propagate" => PersistPolicy::Propagate,
            _ => PersistPolicy::Ignore,
        }
    }
}

impl Display for PersistPolicy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PersistPolicy::Ignore => write!(f, "ignore"),
            PersistPolicy::Propagate => write!(f, "propagate"),
        }
    }
}

// Configuration abstracts config options for the inventory
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub catalog_path: PathBuf,
    pub on_persist_error: PersistPolicy,
    pub log_level: String,
}

impl Configuration {
    pub fn new<P: AsRef<Path>>(catalog_path: P) -> Self {
        Configuration {
            catalog_path: catalog_path.as_ref().to_path_buf(),
            on_persist_error: PersistPolicy::Ignore,
            log_level: "info".to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let path = lookup(CATALOG_PATH_ENV)
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());
        let mut config = Configuration::new(path);
        if let Some(policy) = lookup(PERSIST_ERRORS_ENV) {
            config.on_persist_error = PersistPolicy::from(policy);
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.log_level = level.trim().to_lowercase();
        }
        config
    }

    pub fn with_persist_policy(mut self, policy: PersistPolicy) -> Self {
        self.on_persist_error = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use crate::core::domain::{Configuration, PersistPolicy};

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("books.json");
        assert_eq!(PathBuf::from("books.json"), config.catalog_path);
        assert_eq!(PersistPolicy::Ignore, config.on_persist_error);
        assert_eq!("info", config.log_level.as_str());
    }

    #[test]
    fn test_should_build_config_from_lookup() {
        let vars = HashMap::from([
            ("LMS_CATALOG_PATH", "data/catalog.json"),
            ("LMS_PERSIST_ERRORS", "Propagate"),
            ("LMS_LOG_LEVEL", "DEBUG"),
        ]);
        let config = Configuration::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(PathBuf::from("data/catalog.json"), config.catalog_path);
        assert_eq!(PersistPolicy::Propagate, config.on_persist_error);
        assert_eq!("debug", config.log_level.as_str());
    }

    #[test]
    fn test_should_default_config_without_vars() {
        let config = Configuration::from_lookup(|_| None);
        assert_eq!(Configuration::new("catalog.json"), config);
    }

    #[test]
    fn test_should_parse_persist_policy() {
        assert_eq!(PersistPolicy::Propagate, PersistPolicy::from("PROPAGATE".to_string()));
        assert_eq!(PersistPolicy::Ignore, PersistPolicy::from("ignore".to_string()));
        assert_eq!(PersistPolicy::Ignore, PersistPolicy::from("whatever".to_string()));
        assert_eq!("propagate", PersistPolicy::Propagate.to_string());
    }
}
