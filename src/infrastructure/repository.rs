//! File system repository

use crate::domain::{slug_for_title, Journal};
use crate::error::{Result, TriplogError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

const STORE_DIR: &str = ".triplog";
const JOURNALS_DIR: &str = "journals";

/// Abstract repository for journal storage
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .triplog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .triplog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .triplog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .triplog directory structure
    fn initialize(&self) -> Result<()>;

    fn journal_exists(&self, id: &str) -> bool;

    fn load_journal(&self, id: &str) -> Result<Journal>;

    /// Write a journal, replacing any previous version
    fn save_journal(&self, journal: &Journal) -> Result<()>;

    /// All journals, in no particular order
    fn list_journals(&self) -> Result<Vec<Journal>>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the store root by walking up from current directory
    /// First checks TRIPLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TRIPLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_store_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TriplogError::Config(format!(
                    "TRIPLOG_ROOT is set to '{}' but no .triplog directory found. \
                    Run 'triplog init' in that directory or unset TRIPLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the store root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_store_dir(&current) {
                debug!(root = %current.display(), "found triplog store");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(TriplogError::NotTriplogDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_store_dir(path: &Path) -> bool {
        path.join(STORE_DIR).is_dir()
    }

    fn journals_dir(&self) -> PathBuf {
        self.root.join(STORE_DIR).join(JOURNALS_DIR)
    }

    /// Ids are slugs, so they never leave the journals folder
    fn journal_path(&self, id: &str) -> Result<PathBuf> {
        if id.is_empty() || slug_for_title(id) != id {
            return Err(TriplogError::InvalidJournal(format!(
                "Invalid journal id '{}': use lowercase letters, digits and '-'",
                id
            )));
        }
        Ok(self.journals_dir().join(format!("{}.toml", id)))
    }

    /// Parse a journal file, rejecting ranges that end before they start
    fn read_journal_file(path: &Path) -> Result<Journal> {
        let contents = fs::read_to_string(path)?;
        let journal: Journal = toml::from_str(&contents)?;

        if journal.end_date < journal.start_date {
            return Err(TriplogError::InvalidJournal(format!(
                "{}: end date {} is before start date {}",
                path.display(),
                journal.end_date,
                journal.start_date
            )));
        }

        Ok(journal)
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_store_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let store_dir = self.root.join(STORE_DIR);

        if store_dir.exists() {
            return Err(TriplogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.journals_dir())?;
        Ok(())
    }

    fn journal_exists(&self, id: &str) -> bool {
        self.journal_path(id)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    fn load_journal(&self, id: &str) -> Result<Journal> {
        let path = self.journal_path(id)?;
        if !path.is_file() {
            return Err(TriplogError::JournalNotFound(id.to_string()));
        }
        debug!(path = %path.display(), "loading journal");
        Self::read_journal_file(&path)
    }

    /// Writes to a temp file next to the target, then renames it into place.
    fn save_journal(&self, journal: &Journal) -> Result<()> {
        let dir = self.journals_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let path = self.journal_path(&journal.id)?;
        let tmp_path = dir.join(format!(
            "{}.toml.triplog-tmp-{}",
            journal.id,
            std::process::id()
        ));

        let contents = toml::to_string_pretty(journal)?;
        fs::write(&tmp_path, contents)?;

        if path.exists() {
            // rename does not overwrite on Windows
            fs::remove_file(&path)?;
        }
        fs::rename(&tmp_path, &path)?;

        debug!(path = %path.display(), places = journal.places.len(), "saved journal");
        Ok(())
    }

    fn list_journals(&self) -> Result<Vec<Journal>> {
        let dir = self.journals_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut journals = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some("toml")
            {
                continue;
            }

            match Self::read_journal_file(path) {
                Ok(journal) => journals.push(journal),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable journal"),
            }
        }

        Ok(journals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn initialized_repo(temp: &TempDir) -> FileSystemRepository {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo
    }

    #[test]
    fn test_initialize_creates_structure() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();

        assert!(repo.is_initialized());
        assert!(temp.path().join(".triplog/journals").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);
        assert!(matches!(repo.initialize(), Err(TriplogError::Config(_))));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        initialized_repo(&temp);
        let nested = temp.path().join("photos").join("day1");
        fs::create_dir_all(&nested).unwrap();

        let repo = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_without_store_fails() {
        let temp = TempDir::new().unwrap();
        let result = FileSystemRepository::discover_from(temp.path());
        assert!(matches!(result, Err(TriplogError::NotTriplogDirectory(_))));
    }

    #[test]
    fn test_save_and_load_journal() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);
        let journal = Journal::new("japan", "Japan", date(2025, 1, 10), date(2025, 1, 20)).unwrap();

        repo.save_journal(&journal).unwrap();

        assert!(repo.journal_exists("japan"));
        assert!(temp.path().join(".triplog/journals/japan.toml").is_file());
        assert_eq!(repo.load_journal("japan").unwrap(), journal);
    }

    #[test]
    fn test_save_overwrites_without_leftovers() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);
        let mut journal =
            Journal::new("japan", "Japan", date(2025, 1, 10), date(2025, 1, 20)).unwrap();
        repo.save_journal(&journal).unwrap();

        journal.title = "Japan in winter".to_string();
        repo.save_journal(&journal).unwrap();

        assert_eq!(repo.load_journal("japan").unwrap().title, "Japan in winter");
        let files: Vec<_> = fs::read_dir(temp.path().join(".triplog/journals"))
            .unwrap()
            .collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_load_missing_journal() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);
        assert!(matches!(
            repo.load_journal("nowhere"),
            Err(TriplogError::JournalNotFound(_))
        ));
    }

    #[test]
    fn test_load_reversed_range_rejected() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);
        fs::write(
            temp.path().join(".triplog/journals/japan.toml"),
            "id = \"japan\"\n\
            title = \"Japan\"\n\
            start_date = \"2025-01-20\"\n\
            end_date = \"2025-01-10\"\n\
            created = \"2025-01-01T00:00:00Z\"\n",
        )
        .unwrap();

        match repo.load_journal("japan") {
            Err(TriplogError::InvalidJournal(msg)) => {
                assert!(msg.contains("before start date"))
            }
            other => panic!("Expected InvalidJournal, got {:?}", other),
        }
        assert!(repo.list_journals().unwrap().is_empty());
    }

    #[test]
    fn test_ids_outside_journals_folder_rejected() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);

        for id in ["../config", "a/b", "", "Japan"] {
            assert!(matches!(
                repo.load_journal(id),
                Err(TriplogError::InvalidJournal(_))
            ));
            assert!(!repo.journal_exists(id));
        }

        let mut journal =
            Journal::new("japan", "Japan", date(2025, 1, 10), date(2025, 1, 20)).unwrap();
        journal.id = "../escape".to_string();
        assert!(repo.save_journal(&journal).is_err());
        assert!(!temp.path().join(".triplog/escape.toml").exists());
    }

    #[test]
    fn test_list_journals_skips_other_files() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);
        repo.save_journal(
            &Journal::new("japan", "Japan", date(2025, 1, 10), date(2025, 1, 20)).unwrap(),
        )
        .unwrap();
        repo.save_journal(
            &Journal::new("peru", "Peru", date(2024, 5, 1), date(2024, 5, 14)).unwrap(),
        )
        .unwrap();
        fs::write(temp.path().join(".triplog/journals/readme.txt"), "hi").unwrap();
        fs::write(temp.path().join(".triplog/journals/broken.toml"), "id = ").unwrap();

        let mut ids: Vec<String> = repo
            .list_journals()
            .unwrap()
            .into_iter()
            .map(|j| j.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["japan", "peru"]);
    }
}
