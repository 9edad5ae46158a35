/// Core functionality modules
///
/// Matching, ranking and the decision between reusing and creating a folder.

pub mod launcher;
pub mod query;
pub mod ranking;
pub mod searcher;
pub mod selector;

pub use launcher::{Decision, Launcher, MatchState, Outcome, Resolved};
pub use query::QueryCleaner;
pub use ranking::{rank, RankKey};
pub use searcher::{Candidate, Searcher};
pub use selector::{AutoFirst, Choice, Interactive, Menu, SelectionStrategy};
