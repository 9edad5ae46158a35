/// SQL query functions for the folders table

use crate::db::models::*;
use crate::db::Database;
use crate::error::{Result, TryError};
use chrono::{DateTime, Utc};
use sqlx::Row;

impl Database {
    /// Every tracked folder, most recently opened first
    ///
    /// The order is only a hint; the ranker re-sorts.
    pub async fn list_folders(&self) -> Result<Vec<FolderRecord>> {
        let folders = sqlx::query_as::<_, FolderRecord>(
            r#"
            SELECT id, path, name, date, created_at, times_opened, last_opened
            FROM folders
            ORDER BY last_opened DESC, times_opened DESC
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(folders)
    }

    /// Insert a newly created folder
    ///
    /// # Returns
    /// * `Ok(i64)` - The new record ID
    /// * `Err(TryError::DuplicatePath)` - A record already owns `folder.path`
    pub async fn insert_folder(&self, folder: &NewFolder) -> Result<i64> {
        let created_at = format_timestamp(folder.created_at);

        let row = sqlx::query(
            r#"
            INSERT INTO folders (path, name, date, created_at, times_opened, last_opened)
            VALUES (?, ?, ?, ?, 1, ?)
            RETURNING id
            "#,
        )
        .bind(&folder.path)
        .bind(&folder.name)
        .bind(&folder.date)
        .bind(&created_at)
        .bind(&created_at)
        .fetch_one(self.pool())
        .await
        .map_err(|e| TryError::from_insert(e, &folder.path))?;

        Ok(row.get(0))
    }

    /// Write back usage counters for a selected folder
    ///
    /// # Returns
    /// * `Err(TryError::FolderNotFound)` - No record with this id
    pub async fn update_usage(
        &self,
        id: i64,
        times_opened: i64,
        last_opened: DateTime<Utc>,
    ) -> Result<()> {
        let result = sqlx::query("UPDATE folders SET times_opened = ?, last_opened = ? WHERE id = ?")
            .bind(times_opened)
            .bind(format_timestamp(last_opened))
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(TryError::FolderNotFound(id));
        }

        Ok(())
    }

    /// Get folder by ID
    pub async fn get_folder(&self, id: i64) -> Result<Option<FolderRecord>> {
        let folder = sqlx::query_as::<_, FolderRecord>("SELECT * FROM folders WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(folder)
    }
}
