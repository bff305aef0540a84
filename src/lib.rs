//! downsort - sort a Downloads folder into category subfolders
//!
//! This library scans the top level of a directory, classifies each file
//! by extension (with a MIME-based fallback), and moves it into a
//! category subfolder. The mapping is user-configurable through a JSON
//! file in the home directory, with built-in defaults when the file is
//! absent or invalid.

pub mod cli;
pub mod config;
pub mod file_category;
pub mod file_organizer;
pub mod output;

pub use config::{ConfigError, Configuration, config_file_path};
pub use file_category::{CategoryMap, FALLBACK_CATEGORY};
pub use file_organizer::{FileOrganizer, OrganizeError, OrganizeOutcome, OrganizeResult};

pub use cli::{Cli, run_cli};
