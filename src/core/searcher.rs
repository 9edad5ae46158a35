/// Folder searcher with fuzzy matching
///
/// Scores a query against folder names. Matching is order-preserving
/// subsequence matching (skim's V2 algorithm), which favours contiguous runs,
/// word starts and early matches. Case is ignored, so `Alpha` finds `alpha`.

use crate::db::FolderRecord;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Score given to every folder when the query carries no text
pub const NEUTRAL_SCORE: i64 = 0;

/// A folder under consideration for the current query
#[derive(Debug, Clone)]
pub struct Candidate {
    pub record: FolderRecord,
    pub score: i64,
}

/// Handles folder name matching
pub struct Searcher {
    matcher: SkimMatcherV2,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// Create a new searcher instance
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Match `query` against the name of every folder
    ///
    /// # Arguments
    /// * `query` - Search query; blank means "everything"
    /// * `folders` - Full history in store order
    ///
    /// # Returns
    /// * Matching folders with their scores, still in store order.
    ///   Folders whose name does not contain the query as a subsequence are dropped.
    pub fn search(&self, query: &str, folders: Vec<FolderRecord>) -> Vec<Candidate> {
        let query = query.trim();

        if query.is_empty() {
            return folders
                .into_iter()
                .map(|record| Candidate {
                    record,
                    score: NEUTRAL_SCORE,
                })
                .collect();
        }

        folders
            .into_iter()
            .filter_map(|record| {
                self.matcher
                    .fuzzy_match(&record.name, query)
                    .map(|score| Candidate { record, score })
            })
            .collect()
    }

}
