//! Console output and styling.
//!
//! All terminal decoration lives here; the organizer and loader never
//! print. Styling is cosmetic only, so tests drive the core and ignore
//! this layer.

use colored::*;

/// Styled console output helpers.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Reports a successful move, naming the file and its category.
    pub fn moved(file_name: &str, category: &str) {
        println!(
            "{} {} {} {}",
            "Moved".cyan(),
            file_name,
            "to".dimmed(),
            category.cyan()
        );
    }

    /// Prints an error message in red to stderr.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }
}
