// Turns what the user typed into a query and, when needed, a folder name
//
// Folder names must stay inside the base directory, so path separators and
// control characters never make it into the slug.

use regex::Regex;

// Characters replaced by '-' when building a folder name
const UNSAFE_PATTERNS: &[&str] = &[
    r"[/\\]",       // path separators
    r"[[:cntrl:]]", // newlines, tabs, escape sequences
];

pub struct QueryCleaner {
    unsafe_regex: Vec<Regex>,
}

impl Default for QueryCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCleaner {
    pub fn new() -> Self {
        // Build the patterns once
        let unsafe_regex = UNSAFE_PATTERNS
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect();

        Self { unsafe_regex }
    }

    /// Join CLI words into one query
    pub fn from_args(&self, args: &[String]) -> String {
        self.normalize(&args.join(" "))
    }

    /// Normalize a query string
    ///
    /// - Removes null bytes
    /// - Trims whitespace
    /// - Collapses runs of whitespace to a single space
    pub fn normalize(&self, raw: &str) -> String {
        raw.replace('\0', "")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Folder-safe form of a query
    pub fn slug(&self, query: &str) -> String {
        self.unsafe_regex
            .iter()
            .fold(self.normalize(query), |acc, regex| {
                regex.replace_all(&acc, "-").into_owned()
            })
    }

    /// `<date>-<slug>`; an empty query leaves just `<date>-`
    ///
    /// Length is left to the filesystem, which reports overlong names when
    /// the directory is created.
    pub fn folder_name(&self, date: &str, query: &str) -> String {
        format!("{}-{}", date, self.slug(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let cleaner = QueryCleaner::new();

        assert_eq!(cleaner.normalize("  rust    playground  "), "rust playground");
        assert_eq!(cleaner.normalize("a\0b"), "ab");
        assert_eq!(cleaner.normalize("   "), "");
    }

    #[test]
    fn test_from_args() {
        let cleaner = QueryCleaner::new();
        let args = vec!["my".to_string(), " new ".to_string(), "idea".to_string()];

        assert_eq!(cleaner.from_args(&args), "my new idea");
    }

    #[test]
    fn test_slug_keeps_folder_inside_base() {
        let cleaner = QueryCleaner::new();

        assert_eq!(cleaner.slug("../../etc"), "..-..-etc");
        assert_eq!(cleaner.slug("a\\b"), "a-b");
        assert_eq!(cleaner.slug("tab\there"), "tab here");
        assert_eq!(cleaner.slug("bell\u{7}"), "bell-");
        assert_eq!(cleaner.slug("plain words"), "plain words");
    }

    #[test]
    fn test_folder_name() {
        let cleaner = QueryCleaner::new();

        assert_eq!(
            cleaner.folder_name("2025-11-25", "api/spike"),
            "2025-11-25-api-spike"
        );
    }

    #[test]
    fn test_folder_name_empty_query() {
        let cleaner = QueryCleaner::new();

        assert_eq!(cleaner.folder_name("2025-11-25", "  "), "2025-11-25-");
    }

    #[test]
    fn test_folder_name_long_query_kept_whole() {
        let cleaner = QueryCleaner::new();
        let long = "a".repeat(240);

        assert_eq!(cleaner.folder_name("2025-11-25", &long).len(), 251);
    }
}
