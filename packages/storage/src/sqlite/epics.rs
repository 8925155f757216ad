use async_trait::async_trait;
use chrono::Utc;
use spriint_core::{Epic, EpicCreateInput, EpicUpdateInput, Status};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::debug;
use uuid::Uuid;

use super::{parse_timestamp, parse_uuid};
use crate::{EpicRepository, StorageError, StorageResult};

// Status is rolled up from the epic's issues on every read
const SELECT_EPIC: &str = r#"
    SELECT e.id, e.public_id, e.project_id, e.name, e.description, e.created_at,
           COUNT(i.id) AS issue_count,
           MIN(i.status) AS lowest_status,
           MAX(i.status) AS highest_status
    FROM epics e
    LEFT JOIN issues i ON i.epic_id = e.id
"#;

/// SQLite implementation of EpicRepository
#[derive(Clone)]
pub struct SqliteEpicRepository {
    pool: SqlitePool,
}

impl SqliteEpicRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_epic(row: &SqliteRow) -> StorageResult<Epic> {
        let public_id: String = row.try_get("public_id")?;
        let created_at: String = row.try_get("created_at")?;
        let issue_count: i64 = row.try_get("issue_count")?;
        let lowest: Option<i64> = row.try_get("lowest_status")?;
        let highest: Option<i64> = row.try_get("highest_status")?;

        let lowest = lowest.map(Status::try_from).transpose()?;
        let highest = highest.map(Status::try_from).transpose()?;

        Ok(Epic {
            id: row.try_get("id")?,
            public_id: parse_uuid(&public_id)?,
            project_id: row.try_get("project_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            status: Status::rollup(issue_count, lowest, highest),
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

#[async_trait]
impl EpicRepository for SqliteEpicRepository {
    async fn create_epic(&self, input: EpicCreateInput) -> StorageResult<Epic> {
        let public_id = Uuid::new_v4();
        debug!(
            "Inserting epic {} ({}) into project {}",
            input.name, public_id, input.project_id
        );

        sqlx::query(
            "INSERT INTO epics (public_id, project_id, name, description, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(public_id.to_string())
        .bind(input.project_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        self.get_epic(public_id).await?.ok_or(StorageError::NotFound)
    }

    async fn list_epics(&self, project_id: i64) -> StorageResult<Vec<Epic>> {
        debug!("Listing epics for project {}", project_id);

        let rows = sqlx::query(&format!(
            "{} WHERE e.project_id = ? GROUP BY e.id ORDER BY e.id",
            SELECT_EPIC
        ))
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_epic).collect()
    }

    async fn get_epic(&self, public_id: Uuid) -> StorageResult<Option<Epic>> {
        debug!("Fetching epic {}", public_id);

        let row = sqlx::query(&format!("{} WHERE e.public_id = ? GROUP BY e.id", SELECT_EPIC))
            .bind(public_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_epic).transpose()
    }

    async fn get_epic_by_id(&self, id: i64) -> StorageResult<Option<Epic>> {
        debug!("Fetching epic by internal id {}", id);

        let row = sqlx::query(&format!("{} WHERE e.id = ? GROUP BY e.id", SELECT_EPIC))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_epic).transpose()
    }

    async fn update_epic(&self, public_id: Uuid, input: EpicUpdateInput) -> StorageResult<Epic> {
        debug!("Updating epic {}", public_id);

        let result = sqlx::query("UPDATE epics SET name = ?, description = ? WHERE public_id = ?")
            .bind(&input.name)
            .bind(&input.description)
            .bind(public_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.get_epic(public_id).await?.ok_or(StorageError::NotFound)
    }

    async fn delete_epic(&self, public_id: Uuid) -> StorageResult<()> {
        debug!("Deleting epic {}", public_id);

        let result = sqlx::query("DELETE FROM epics WHERE public_id = ?")
            .bind(public_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
