/// File organization: scanning a directory and moving files into
/// category subdirectories.
///
/// The organizer walks the immediate children of a target directory,
/// resolves a category for each eligible file, and relocates it into
/// `<target>/<category>/`, creating the subfolder on demand. Every
/// processed file yields an [`OrganizeOutcome`]; per-file failures are
/// recorded rather than propagated, so one bad move never aborts a run.
use std::fs;
use std::path::{Path, PathBuf};

use crate::file_category::CategoryMap;

/// A top-level entry observed while scanning the target directory.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// The entry's file name.
    pub name: String,
    /// The full path to the entry.
    pub path: PathBuf,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Whether the name starts with the hidden-file marker (`.`).
    pub hidden: bool,
}

impl DirectoryEntry {
    /// Builds an entry from a raw `fs::DirEntry`. Returns `None` when the
    /// entry's type cannot be determined (it is then skipped).
    fn from_fs_entry(entry: &fs::DirEntry) -> Option<Self> {
        let name = entry.file_name().to_string_lossy().to_string();
        let is_dir = entry.file_type().ok()?.is_dir();
        Some(Self {
            hidden: name.starts_with('.'),
            path: entry.path(),
            name,
            is_dir,
        })
    }

    /// Only top-level, non-hidden files are organized.
    pub fn is_eligible(&self) -> bool {
        !self.is_dir && !self.hidden
    }
}

/// Per-file result of an organization run.
#[derive(Debug)]
pub enum OrganizeOutcome {
    /// The file was relocated into its category subfolder.
    Moved {
        file_name: String,
        category: String,
    },
    /// The file could not be moved; later files are still processed.
    Failed {
        file_name: String,
        error: OrganizeError,
    },
}

/// Errors that can occur during file organization operations.
#[derive(Debug)]
pub enum OrganizeError {
    /// The target directory could not be enumerated. This is the only
    /// fatal error; everything else is recorded per file.
    ReadDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create a category subfolder.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move a file into its category subfolder.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadDirFailed { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Organizes files by moving them into category subdirectories.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Organizes the immediate children of `target_dir`.
    ///
    /// Directories and hidden entries are skipped silently. Every other
    /// entry is categorized against `categories` and moved; the returned
    /// sequence holds one outcome per processed file, in scan order. An
    /// empty sequence means nothing was eligible.
    ///
    /// # Errors
    ///
    /// Fails only when `target_dir` itself cannot be enumerated.
    pub fn organize(
        target_dir: &Path,
        categories: &CategoryMap,
    ) -> OrganizeResult<Vec<OrganizeOutcome>> {
        let entries = fs::read_dir(target_dir).map_err(|e| OrganizeError::ReadDirFailed {
            path: target_dir.to_path_buf(),
            source: e,
        })?;

        let mut outcomes = Vec::new();

        for entry in entries.flatten() {
            let Some(entry) = DirectoryEntry::from_fs_entry(&entry) else {
                continue;
            };
            if !entry.is_eligible() {
                continue;
            }

            let category = categories.categorize(&entry.name);

            match Self::move_to_category(target_dir, &entry.path, category) {
                Ok(_) => outcomes.push(OrganizeOutcome::Moved {
                    file_name: entry.name,
                    category: category.to_string(),
                }),
                Err(error) => outcomes.push(OrganizeOutcome::Failed {
                    file_name: entry.name,
                    error,
                }),
            }
        }

        Ok(outcomes)
    }

    /// Moves a file into its category subfolder under the base path,
    /// creating the subfolder if it does not yet exist. The file keeps
    /// its original name; a same-named file already present at the
    /// destination makes the move fail rather than overwrite.
    ///
    /// # Errors
    ///
    /// Returns `OrganizeError::DirectoryCreationFailed` if the subfolder
    /// cannot be created and `OrganizeError::FileMoveFailure` if the move
    /// itself fails (including name collisions at the destination).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use downsort::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let result = FileOrganizer::move_to_category(
    ///     Path::new("/home/user/Downloads"),
    ///     Path::new("/home/user/Downloads/photo.png"),
    ///     "Images",
    /// );
    ///
    /// match result {
    ///     Ok(destination) => println!("Moved to {}", destination.display()),
    ///     Err(e) => eprintln!("Move failed: {}", e),
    /// }
    /// ```
    pub fn move_to_category(
        base_path: &Path,
        file_path: &Path,
        category_dir_name: &str,
    ) -> OrganizeResult<PathBuf> {
        let category_path = base_path.join(category_dir_name);

        // Idempotent create: an already-existing subfolder is fine.
        if !category_path.exists() {
            fs::create_dir(&category_path).map_err(|e| OrganizeError::DirectoryCreationFailed {
                path: category_path.clone(),
                source: e,
            })?;
        }

        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::FileMoveFailure {
                source: file_path.to_path_buf(),
                destination: category_path.clone(),
                source_error: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "file has no name component",
                ),
            })?;

        let destination_path = category_path.join(file_name);

        // fs::rename would silently replace an existing destination.
        if destination_path.exists() {
            return Err(OrganizeError::FileMoveFailure {
                source: file_path.to_path_buf(),
                destination: destination_path.clone(),
                source_error: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "destination already exists",
                ),
            });
        }

        fs::rename(file_path, &destination_path).map_err(|e| OrganizeError::FileMoveFailure {
            source: file_path.to_path_buf(),
            destination: destination_path.clone(),
            source_error: e,
        })?;

        Ok(destination_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_move_to_category_creates_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        let file_path = base_path.join("test.txt");
        fs::write(&file_path, "test content").expect("Failed to write test file");

        let destination = FileOrganizer::move_to_category(base_path, &file_path, "Documents")
            .expect("Failed to move file");

        let category_dir = base_path.join("Documents");
        assert!(category_dir.is_dir());
        assert!(!file_path.exists());
        assert_eq!(destination, category_dir.join("test.txt"));
        assert!(destination.exists());
    }

    #[test]
    fn test_move_to_category_uses_existing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        let category_dir = base_path.join("Images");
        fs::create_dir(&category_dir).expect("Failed to create category directory");

        let file_path = base_path.join("test.png");
        fs::write(&file_path, "test content").expect("Failed to write test file");

        FileOrganizer::move_to_category(base_path, &file_path, "Images")
            .expect("Failed to move file");

        assert!(!file_path.exists());
        assert!(category_dir.join("test.png").exists());
    }

    #[test]
    fn test_move_to_category_refuses_collision() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        let category_dir = base_path.join("Documents");
        fs::create_dir(&category_dir).expect("Failed to create category directory");
        fs::write(category_dir.join("x.txt"), "already here").expect("Failed to write occupant");

        let file_path = base_path.join("x.txt");
        fs::write(&file_path, "newcomer").expect("Failed to write test file");

        let result = FileOrganizer::move_to_category(base_path, &file_path, "Documents");
        assert!(matches!(
            result,
            Err(OrganizeError::FileMoveFailure { .. })
        ));

        // Neither file was touched.
        assert!(file_path.exists());
        let occupant = fs::read_to_string(category_dir.join("x.txt")).expect("Failed to read");
        assert_eq!(occupant, "already here");
    }

    #[test]
    fn test_organize_moves_eligible_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::write(base_path.join("song.mp3"), "audio").expect("Failed to write");
        fs::write(base_path.join("report.pdf"), "pdf").expect("Failed to write");

        let outcomes = FileOrganizer::organize(base_path, &CategoryMap::default())
            .expect("Organize should succeed");

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes
            .iter()
            .all(|o| matches!(o, OrganizeOutcome::Moved { .. })));
        assert!(base_path.join("Audio").join("song.mp3").exists());
        assert!(base_path.join("Documents").join("report.pdf").exists());
    }

    #[test]
    fn test_organize_skips_directories_and_hidden_entries() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::create_dir(base_path.join("subdir")).expect("Failed to create subdir");
        fs::write(base_path.join(".secret"), "hidden").expect("Failed to write");

        let outcomes = FileOrganizer::organize(base_path, &CategoryMap::default())
            .expect("Organize should succeed");

        // Skipped entries produce no outcome at all.
        assert!(outcomes.is_empty());
        assert!(base_path.join("subdir").is_dir());
        assert!(base_path.join(".secret").exists());
    }

    #[test]
    fn test_organize_continues_past_failed_move() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        // Occupy the destination slot for x.txt ahead of time.
        fs::create_dir(base_path.join("Documents")).expect("Failed to create dir");
        fs::write(base_path.join("Documents").join("x.txt"), "occupant")
            .expect("Failed to write occupant");

        fs::write(base_path.join("x.txt"), "newcomer").expect("Failed to write");
        fs::write(base_path.join("song.mp3"), "audio").expect("Failed to write");

        let outcomes = FileOrganizer::organize(base_path, &CategoryMap::default())
            .expect("Organize should succeed");

        assert_eq!(outcomes.len(), 2);
        let moved = outcomes
            .iter()
            .filter(|o| matches!(o, OrganizeOutcome::Moved { .. }))
            .count();
        let failed = outcomes
            .iter()
            .filter(|o| matches!(o, OrganizeOutcome::Failed { .. }))
            .count();
        assert_eq!(moved, 1);
        assert_eq!(failed, 1);
        assert!(base_path.join("Audio").join("song.mp3").exists());
        assert!(base_path.join("x.txt").exists());
    }

    #[test]
    fn test_organize_missing_target_is_fatal() {
        let result = FileOrganizer::organize(
            Path::new("/non/existent/path"),
            &CategoryMap::default(),
        );
        assert!(matches!(result, Err(OrganizeError::ReadDirFailed { .. })));
    }

    #[test]
    fn test_directory_entry_eligibility() {
        let entry = DirectoryEntry {
            name: "report.pdf".to_string(),
            path: PathBuf::from("/tmp/report.pdf"),
            is_dir: false,
            hidden: false,
        };
        assert!(entry.is_eligible());

        let hidden = DirectoryEntry {
            hidden: true,
            ..entry.clone()
        };
        assert!(!hidden.is_eligible());

        let dir = DirectoryEntry {
            is_dir: true,
            ..entry
        };
        assert!(!dir.is_eligible());
    }
}
