/// Query resolution
///
/// Reads the history, ranks it, decides between reusing a folder and creating
/// one, then applies that decision to the store and the filesystem. Nothing is
/// handed back to the caller until the store agrees.

use crate::core::query::QueryCleaner;
use crate::core::ranking::rank;
use crate::core::searcher::{Candidate, Searcher};
use crate::core::selector::{Choice, Menu, SelectionStrategy};
use crate::db::{format_date, Database, FolderRecord, NewFolder};
use crate::error::{Result, TryError};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where the history lookup landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    NoHistory,
    NoMatch,
    SingleMatch,
    MultiMatch,
}

/// What to do about the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reuse(FolderRecord),
    CreateNew,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub state: MatchState,
    pub outcome: Outcome,
}

/// The folder to change into, after the store has been updated
#[derive(Debug, Clone)]
pub struct Resolved {
    pub state: MatchState,
    pub folder: FolderRecord,
    pub created: bool,
}

impl Resolved {
    pub fn path(&self) -> &Path {
        Path::new(&self.folder.path)
    }
}

pub struct Launcher {
    db: Arc<Database>,
    base_dir: PathBuf,
    searcher: Searcher,
    cleaner: QueryCleaner,
}

impl Launcher {
    pub fn new(db: Arc<Database>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            db,
            base_dir: base_dir.into(),
            searcher: Searcher::new(),
            cleaner: QueryCleaner::new(),
        }
    }

    /// Ranked candidates for a query, best first
    pub fn candidates(&self, query: &str, folders: Vec<FolderRecord>) -> Vec<Candidate> {
        rank(self.searcher.search(query, folders))
    }

    /// Decide between reuse and creation without touching anything
    ///
    /// The strategy is only consulted when more than one folder matches.
    pub fn decide(
        &self,
        query: &str,
        folders: Vec<FolderRecord>,
        strategy: &mut dyn SelectionStrategy,
    ) -> Result<Decision> {
        if folders.is_empty() {
            return Ok(Decision {
                state: MatchState::NoHistory,
                outcome: Outcome::CreateNew,
            });
        }

        let total = folders.len();
        let mut ranked = self.candidates(query, folders);
        debug!(query, total, matched = ranked.len(), "ranked history");

        let decision = match ranked.len() {
            0 => Decision {
                state: MatchState::NoMatch,
                outcome: Outcome::CreateNew,
            },
            1 => Decision {
                state: MatchState::SingleMatch,
                outcome: Outcome::Reuse(ranked.remove(0).record),
            },
            _ => {
                let menu = Menu::new(query, &ranked);
                let outcome = match strategy.select(&menu)? {
                    Choice::Folder(index) => Outcome::Reuse(ranked.swap_remove(index).record),
                    Choice::CreateNew => Outcome::CreateNew,
                };
                Decision {
                    state: MatchState::MultiMatch,
                    outcome,
                }
            }
        };

        Ok(decision)
    }

    /// Resolve a query to a folder, creating or reopening it
    ///
    /// # Returns
    /// * `Ok(Resolved)` - The folder to change into; its usage is already persisted
    /// * `Err(TryError::UserCancelled)` - The picker was dismissed; nothing changed
    pub async fn resolve(
        &self,
        raw_query: &str,
        strategy: &mut dyn SelectionStrategy,
    ) -> Result<Resolved> {
        let query = self.cleaner.normalize(raw_query);
        let folders = self.db.list_folders().await?;

        let Decision { state, outcome } = self.decide(&query, folders, strategy)?;
        info!(?state, "query resolved");

        let now = Utc::now();
        let (folder, created) = match outcome {
            Outcome::Reuse(record) => (self.reopen(record, now).await?, false),
            Outcome::CreateNew => (self.create(&query, now).await?, true),
        };

        Ok(Resolved {
            state,
            folder,
            created,
        })
    }

    /// Count one more selection of an existing folder
    pub async fn reopen(&self, record: FolderRecord, now: DateTime<Utc>) -> Result<FolderRecord> {
        let (times_opened, last_opened) = record.next_usage(now);
        self.db
            .update_usage(record.id, times_opened, last_opened)
            .await?;

        debug!(id = record.id, times_opened, "bumped folder usage");

        Ok(FolderRecord {
            times_opened,
            last_opened: crate::db::format_timestamp(last_opened),
            ..record
        })
    }

    /// Make `<date>-<query>` under the base directory and record it
    pub async fn create(&self, query: &str, now: DateTime<Utc>) -> Result<FolderRecord> {
        let date = format_date(now);
        let dir_name = self.cleaner.folder_name(&date, query);
        let path = self.base_dir.join(dir_name);

        // Fails if the folder is already there, e.g. another shell just made it
        std::fs::create_dir(&path).map_err(|source| TryError::Filesystem {
            path: path.clone(),
            source,
        })?;

        let new_folder = NewFolder::new(
            path.to_string_lossy().into_owned(),
            self.cleaner.normalize(query),
            now,
        );

        let id = match self.db.insert_folder(&new_folder).await {
            Ok(id) => id,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "folder created but not recorded");
                return Err(e);
            }
        };

        info!(id, path = %path.display(), "created folder");

        let created_at = crate::db::format_timestamp(now);
        Ok(FolderRecord {
            id,
            path: new_folder.path,
            name: new_folder.name,
            date: new_folder.date,
            created_at: created_at.clone(),
            times_opened: 1,
            last_opened: created_at,
        })
    }
}
