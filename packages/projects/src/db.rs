// ABOUTME: Database connection management and manager wiring
// ABOUTME: Provides shared access to the SQLite pool and the three managers

use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::info;

use spriint_storage::{
    connect, connect_in_memory, run_migrations, EpicRepository, IssueRepository,
    ProjectRepository, SqliteEpicRepository, SqliteIssueRepository, SqliteProjectRepository,
    StorageConfig, StorageResult,
};

use crate::manager::{EpicManager, IssueManager, ProjectManager};

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub project_manager: Arc<ProjectManager>,
    pub epic_manager: Arc<EpicManager>,
    pub issue_manager: Arc<IssueManager>,
}

impl DbState {
    /// Create new database state from a migrated SQLite pool
    pub fn new(pool: SqlitePool) -> Self {
        let projects: Arc<dyn ProjectRepository> =
            Arc::new(SqliteProjectRepository::new(pool.clone()));
        let epics: Arc<dyn EpicRepository> = Arc::new(SqliteEpicRepository::new(pool.clone()));
        let issues: Arc<dyn IssueRepository> =
            Arc::new(SqliteIssueRepository::new(pool.clone()));

        Self {
            pool,
            project_manager: Arc::new(ProjectManager::new(projects.clone())),
            epic_manager: Arc::new(EpicManager::new(projects.clone(), epics.clone())),
            issue_manager: Arc::new(IssueManager::new(projects, epics, issues)),
        }
    }

    /// Open the configured database, apply migrations, and wire the managers
    pub async fn init(config: &StorageConfig) -> StorageResult<Self> {
        let pool = connect(config).await?;
        run_migrations(&pool).await?;

        info!("Database initialized at {}", config.path.display());
        Ok(Self::new(pool))
    }

    /// Fresh migrated in-memory database
    pub async fn in_memory() -> StorageResult<Self> {
        let pool = connect_in_memory().await?;
        run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    /// Wait for in-flight queries, then close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connections closed");
    }
}
