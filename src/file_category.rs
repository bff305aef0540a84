/// File categorization for organizing downloads by type.
///
/// This module maps file names to category labels. Lookup is a two-stage
/// cascade: the configured extension mapping is consulted first, then a
/// MIME type guessed from the file name, and finally everything falls
/// through to [`FALLBACK_CATEGORY`].
///
/// # Examples
///
/// ```
/// use downsort::file_category::CategoryMap;
///
/// let map = CategoryMap::default();
/// assert_eq!(map.categorize("song.mp3"), "Audio");
/// assert_eq!(map.categorize("report.pdf"), "Documents");
/// assert_eq!(map.categorize("mystery.xyz"), "Miscellaneous");
/// ```
use std::collections::HashSet;

/// Category assigned when neither the extension mapping nor MIME
/// inference produces a match.
pub const FALLBACK_CATEGORY: &str = "Miscellaneous";

/// The built-in extension table, in match order.
const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    ("Audio", &["mp3", "wav", "flac", "m4a", "aac", "ogg"]),
    ("Archive", &["zip", "rar", "7z", "tar", "gz"]),
    ("Code", &["py", "js", "html", "css", "java", "cpp", "c", "cs"]),
    ("Documents", &["pdf", "doc", "docx", "txt", "rtf", "xlsx", "pptx"]),
    ("Ebooks", &["epub", "mobi", "azw3"]),
    ("Images", &["jpg", "jpeg", "png", "gif", "bmp", "tiff"]),
    ("Programs", &["exe", "msi", "bat"]),
    ("Videos", &["mp4", "avi", "mkv", "mov", "wmv"]),
    ("Fonts", &["ttf", "otf", "woff"]),
    ("Torrents", &["torrent"]),
];

/// A single category with its recognized extensions.
#[derive(Debug, Clone)]
struct CategoryRule {
    name: String,
    extensions: HashSet<String>,
}

/// An ordered association of category names to extension sets.
///
/// Rule order is significant: an extension claimed by several categories
/// resolves to the first one. The order is the built-in table's order, or
/// the key order of the user's JSON object.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    rules: Vec<CategoryRule>,
}

impl CategoryMap {
    /// Builds a map from `(name, extensions)` pairs, preserving their
    /// order. Extensions are lowercased so matching is case-insensitive.
    pub fn from_entries(entries: Vec<(String, Vec<String>)>) -> Self {
        let rules = entries
            .into_iter()
            .map(|(name, extensions)| CategoryRule {
                name,
                extensions: extensions.iter().map(|ext| ext.to_lowercase()).collect(),
            })
            .collect();
        Self { rules }
    }

    /// Returns the category names in match order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name.as_str())
    }

    /// Resolves the category for a file name.
    ///
    /// The extension (text after the last `.`, lowercased) is looked up
    /// against the rules in order; on a miss, a MIME type guessed from the
    /// name decides; otherwise the fallback applies. Only the name is
    /// inspected, never the file's contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use downsort::file_category::CategoryMap;
    ///
    /// let map = CategoryMap::default();
    /// assert_eq!(map.categorize("X.MP3"), "Audio");
    /// assert_eq!(map.categorize("backup.tar.gz"), "Archive");
    /// ```
    pub fn categorize(&self, file_name: &str) -> &str {
        let extension = extension_of(file_name);

        for rule in &self.rules {
            if rule.extensions.contains(&extension) {
                return &rule.name;
            }
        }

        if let Some(mime) = mime_guess::from_path(file_name).first()
            && let Some(category) = mime_category(mime.essence_str())
        {
            return category;
        }

        FALLBACK_CATEGORY
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::from_entries(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(name, extensions)| {
                    (
                        (*name).to_string(),
                        extensions.iter().map(|ext| (*ext).to_string()).collect(),
                    )
                })
                .collect(),
        )
    }
}

/// Extracts the lowercased extension from a file name, without the dot.
/// Names with no dot yield the empty string.
fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Maps a guessed MIME essence string to one of the default category
/// names. The branches are checked in this order; `text/*` wins over the
/// `application/*` rules for types like `text/javascript`.
fn mime_category(mime: &str) -> Option<&'static str> {
    if mime.starts_with("audio/") {
        Some("Audio")
    } else if mime.starts_with("video/") {
        Some("Videos")
    } else if mime.starts_with("image/") {
        Some("Images")
    } else if mime.starts_with("text/") {
        Some("Documents")
    } else if mime.starts_with("application/") {
        if mime.contains("pdf") {
            Some("Documents")
        } else if mime.contains("x-python") || mime.contains("javascript") {
            Some("Code")
        } else {
            None
        }
    } else {
        None
    }
}
