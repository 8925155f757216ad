use async_trait::async_trait;
use chrono::Utc;
use spriint_core::{Project, ProjectCounts, ProjectCreateInput, ProjectUpdateInput};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::debug;
use uuid::Uuid;

use super::{parse_timestamp, parse_uuid};
use crate::{ProjectRepository, StorageError, StorageResult};

const SELECT_PROJECT: &str =
    "SELECT id, public_id, name, description, created_at FROM projects";

/// SQLite implementation of ProjectRepository
#[derive(Clone)]
pub struct SqliteProjectRepository {
    pool: SqlitePool,
}

impl SqliteProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_project(row: &SqliteRow) -> StorageResult<Project> {
        let public_id: String = row.try_get("public_id")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Project {
            id: row.try_get("id")?,
            public_id: parse_uuid(&public_id)?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

#[async_trait]
impl ProjectRepository for SqliteProjectRepository {
    async fn create_project(&self, input: ProjectCreateInput) -> StorageResult<Project> {
        let public_id = Uuid::new_v4();
        debug!("Inserting project {} ({})", input.name, public_id);

        sqlx::query(
            "INSERT INTO projects (public_id, name, description, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(public_id.to_string())
        .bind(&input.name)
        .bind(&input.description)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        self.get_project(public_id)
            .await?
            .ok_or(StorageError::NotFound)
    }

    async fn list_projects(&self) -> StorageResult<Vec<Project>> {
        debug!("Listing projects");

        let rows = sqlx::query(&format!("{} ORDER BY id", SELECT_PROJECT))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_project).collect()
    }

    async fn get_project(&self, public_id: Uuid) -> StorageResult<Option<Project>> {
        debug!("Fetching project {}", public_id);

        let row = sqlx::query(&format!("{} WHERE public_id = ?", SELECT_PROJECT))
            .bind(public_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_project).transpose()
    }

    async fn get_project_counts(&self, project_id: i64) -> StorageResult<ProjectCounts> {
        debug!("Counting children of project {}", project_id);

        let row = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM epics WHERE project_id = ?1) AS epic_count,
                (SELECT COUNT(*) FROM issues WHERE project_id = ?1 AND issue_type = 1) AS story_count,
                (SELECT COUNT(*) FROM issues WHERE project_id = ?1 AND issue_type = 2) AS bug_count
            "#,
        )
        .bind(project_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(ProjectCounts {
            epic_count: row.try_get("epic_count")?,
            story_count: row.try_get("story_count")?,
            bug_count: row.try_get("bug_count")?,
        })
    }

    async fn update_project(
        &self,
        public_id: Uuid,
        input: ProjectUpdateInput,
    ) -> StorageResult<Project> {
        debug!("Updating project {}", public_id);

        let result = sqlx::query("UPDATE projects SET name = ?, description = ? WHERE public_id = ?")
            .bind(&input.name)
            .bind(&input.description)
            .bind(public_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.get_project(public_id)
            .await?
            .ok_or(StorageError::NotFound)
    }

    async fn delete_project(&self, public_id: Uuid) -> StorageResult<()> {
        debug!("Deleting project {}", public_id);

        let result = sqlx::query("DELETE FROM projects WHERE public_id = ?")
            .bind(public_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
