use async_trait::async_trait;
use chrono::Utc;
use spriint_core::{Issue, IssueCreateInput, IssueType, IssueUpdateInput, Status};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::debug;
use uuid::Uuid;

use super::{parse_timestamp, parse_uuid};
use crate::{IssueRepository, StorageError, StorageResult};

const SELECT_ISSUE: &str = r#"
    SELECT i.id, i.public_id, i.project_id, i.epic_id, e.public_id AS epic_public_id,
           i.issue_type, i.name, i.description, i.status, i.estimate, i.created_at
    FROM issues i
    LEFT JOIN epics e ON e.id = i.epic_id
"#;

/// SQLite implementation of IssueRepository
#[derive(Clone)]
pub struct SqliteIssueRepository {
    pool: SqlitePool,
}

impl SqliteIssueRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_issue(row: &SqliteRow) -> StorageResult<Issue> {
        let public_id: String = row.try_get("public_id")?;
        let epic_public_id: Option<String> = row.try_get("epic_public_id")?;
        let issue_type: i64 = row.try_get("issue_type")?;
        let status: i64 = row.try_get("status")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Issue {
            id: row.try_get("id")?,
            public_id: parse_uuid(&public_id)?,
            project_id: row.try_get("project_id")?,
            epic_id: row.try_get("epic_id")?,
            epic_public_id: epic_public_id.as_deref().map(parse_uuid).transpose()?,
            issue_type: IssueType::try_from(issue_type)?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            status: Status::try_from(status)?,
            estimate: row.try_get("estimate")?,
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

#[async_trait]
impl IssueRepository for SqliteIssueRepository {
    async fn create_issue(&self, input: IssueCreateInput) -> StorageResult<Issue> {
        let public_id = Uuid::new_v4();
        debug!(
            "Inserting {} {} ({}) into project {}",
            input.issue_type, input.name, public_id, input.project_id
        );

        sqlx::query(
            r#"
            INSERT INTO issues (public_id, project_id, epic_id, issue_type, name, description, status, estimate, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(public_id.to_string())
        .bind(input.project_id)
        .bind(input.epic_id)
        .bind(input.issue_type.as_i64())
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.status.as_i64())
        .bind(input.estimate)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        self.get_issue(public_id).await?.ok_or(StorageError::NotFound)
    }

    async fn list_issues(&self, project_id: i64) -> StorageResult<Vec<Issue>> {
        debug!("Listing issues for project {}", project_id);

        let rows = sqlx::query(&format!(
            "{} WHERE i.project_id = ? ORDER BY i.id",
            SELECT_ISSUE
        ))
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_issue).collect()
    }

    async fn get_issue(&self, public_id: Uuid) -> StorageResult<Option<Issue>> {
        debug!("Fetching issue {}", public_id);

        let row = sqlx::query(&format!("{} WHERE i.public_id = ?", SELECT_ISSUE))
            .bind(public_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_issue).transpose()
    }

    async fn update_issue(
        &self,
        public_id: Uuid,
        input: IssueUpdateInput,
    ) -> StorageResult<Issue> {
        debug!("Updating issue {}", public_id);

        let result = sqlx::query(
            r#"
            UPDATE issues
            SET epic_id = ?, issue_type = ?, name = ?, description = ?, status = ?, estimate = ?
            WHERE public_id = ?
            "#,
        )
        .bind(input.epic_id)
        .bind(input.issue_type.as_i64())
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.status.as_i64())
        .bind(input.estimate)
        .bind(public_id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.get_issue(public_id).await?.ok_or(StorageError::NotFound)
    }

    async fn update_issue_status(&self, public_id: Uuid, status: Status) -> StorageResult<Issue> {
        debug!("Setting issue {} status to {}", public_id, status);

        let result = sqlx::query("UPDATE issues SET status = ? WHERE public_id = ?")
            .bind(status.as_i64())
            .bind(public_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.get_issue(public_id).await?.ok_or(StorageError::NotFound)
    }

    async fn delete_issue(&self, public_id: Uuid) -> StorageResult<()> {
        debug!("Deleting issue {}", public_id);

        let result = sqlx::query("DELETE FROM issues WHERE public_id = ?")
            .bind(public_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
