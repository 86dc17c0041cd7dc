//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod results;
mod students;
mod subjects;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{ResultBoardError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database).await
    }

    /// 按给定数据库配置建立连接池并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ResultBoardError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ResultBoardError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        // 连接池有上限，耗尽时排队等待，等待超过 timeout 秒即失败
        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ResultBoardError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ResultBoardError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ResultBoardError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 内存 SQLite，测试用
    pub async fn in_memory() -> Result<Self> {
        Self::connect(&DatabaseConfig {
            url: ":memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        })
        .await
    }
}

// Storage trait 实现
use crate::models::{
    results::{
        entities::StudentResult,
        requests::{CreateResultRequest, ResultFilter, UpdateMarksRequest},
        responses::{DashboardRow, SubjectStanding},
    },
    students::{
        entities::StudentSummary,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    subjects::SubjectTitleItem,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 科目与聚合
    async fn list_subject_titles(&self, year: Option<String>) -> Result<Vec<SubjectTitleItem>> {
        self.list_subject_titles_impl(year).await
    }

    async fn list_subject_standings(
        &self,
        subject_title: &str,
        filter: ResultFilter,
    ) -> Result<Vec<SubjectStanding>> {
        self.list_subject_standings_impl(subject_title, filter).await
    }

    async fn list_dashboard(&self, filter: ResultFilter) -> Result<Vec<DashboardRow>> {
        self.list_dashboard_impl(filter).await
    }

    // 科目成绩
    async fn list_student_subjects(&self, regno: &str) -> Result<Vec<StudentResult>> {
        self.list_student_subjects_impl(regno).await
    }

    async fn create_result(&self, req: CreateResultRequest) -> Result<StudentResult> {
        self.create_result_impl(req).await
    }

    async fn update_marks(&self, id: i64, req: UpdateMarksRequest) -> Result<bool> {
        self.update_marks_impl(id, req).await
    }

    async fn delete_result(&self, id: i64) -> Result<bool> {
        self.delete_result_impl(id).await
    }

    // 学生档案
    async fn list_students(&self) -> Result<Vec<StudentSummary>> {
        self.list_students_impl().await
    }

    async fn create_student(&self, req: CreateStudentRequest) -> Result<StudentResult> {
        self.create_student_impl(req).await
    }

    async fn find_regno_by_id(&self, id: i64) -> Result<Option<String>> {
        self.find_regno_by_id_impl(id).await
    }

    async fn update_students_by_regno(
        &self,
        old_regno: &str,
        update: UpdateStudentRequest,
    ) -> Result<u64> {
        self.update_students_by_regno_impl(old_regno, update).await
    }

    async fn delete_results_by_regno(&self, regno: &str) -> Result<u64> {
        self.delete_results_by_regno_impl(regno).await
    }
}
