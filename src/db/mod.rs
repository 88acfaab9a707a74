//! Database Module
//!
//! # Interview Q&A
//!
//! Q: 커넥션 풀은 어떻게 관리하는가?
//! A: SQLx의 PgPool 사용
//!    - max_connections: 10 (고정 크기)
//!    - max_lifetime: 300초 — idle 후 끊긴 커넥션이 재사용되지 않도록
//!      일정 시간이 지난 커넥션은 버리고 새로 연결 (recycle)
//!    - acquire_timeout: 3초 (커넥션 획득 대기)
//!
//! Q: 마이그레이션 대신 CREATE TABLE IF NOT EXISTS를 쓰는 이유는?
//! A: 스키마가 테이블 하나로 고정되어 있고 이후 변경이 없음
//!    - 서비스 시작 시 한 번, 멱등하게 실행
//!    - 마이그레이션 프레임워크는 이 규모에서 오버엔지니어링
//!
//! Q: TLS는 왜 강제하는가?
//! A: 관리형 PostgreSQL(Neon 등)은 공용 네트워크를 지나므로
//!    sslmode=require에 해당하는 PgSslMode::Require를 모든 커넥션에 적용

mod models;
mod repository;

pub use models::*;
pub use repository::TodoRepository;

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use secrecy::ExposeSecret;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use crate::config::Config;

/// 풀 크기 (고정)
const POOL_SIZE: u32 = 10;
/// 커넥션 recycle 간격
const POOL_RECYCLE: Duration = Duration::from_secs(300);
/// 커넥션 획득 타임아웃
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// 데이터베이스 연결 및 쿼리 담당
///
/// 프로세스당 하나, 모든 요청이 공유. 핸들러는 쿼리 한 건 동안만
/// 풀에서 커넥션을 빌려 쓰고 어떤 경로로 끝나든 자동 반납된다.
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// 데이터베이스 연결
    ///
    /// 연결 문자열의 `postgresql://` 스킴은 드라이버가 문서화한
    /// `postgres://`로 정규화한다.
    pub async fn connect(config: &Config) -> Result<Self> {
        let url = normalize_scheme(config.database_url.expose_secret());

        let options = PgConnectOptions::from_str(&url)
            .context("DATABASE_URL is not a valid PostgreSQL connection string")?
            .ssl_mode(PgSslMode::Require);

        let pool = PgPoolOptions::new()
            .max_connections(POOL_SIZE)
            .max_lifetime(POOL_RECYCLE)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await
            .context("failed to connect to PostgreSQL")?;

        Ok(Self { pool })
    }

    /// 스키마 생성 (멱등)
    ///
    /// 서비스가 요청을 받기 전에 한 번 실행. 이후 재실행/변경 없음.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS todos (
                id          SERIAL PRIMARY KEY,
                content     VARCHAR(50) NOT NULL,
                is_complete BOOLEAN NOT NULL DEFAULT FALSE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // content로 조회하는 엔드포인트는 없지만 원 스키마대로 인덱스 유지
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_todos_content ON todos (content)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Todo 생성. id는 DB가 할당
    pub async fn insert_todo(&self, draft: &TodoDraft) -> Result<Todo> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (content, is_complete)
            VALUES ($1, $2)
            RETURNING id, content, is_complete
            "#,
        )
        .bind(&draft.content)
        .bind(draft.is_complete)
        .fetch_one(&self.pool)
        .await?;

        Ok(todo)
    }

    /// 전체 조회
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, content, is_complete FROM todos ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    /// id로 조회
    pub async fn get_todo(&self, id: i32) -> Result<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(
            "SELECT id, content, is_complete FROM todos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo)
    }

    /// id로 찾아 content와 is_complete를 덮어씀. 없으면 None
    pub async fn update_todo(&self, id: i32, draft: &TodoDraft) -> Result<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET content = $1, is_complete = $2
            WHERE id = $3
            RETURNING id, content, is_complete
            "#,
        )
        .bind(&draft.content)
        .bind(draft.is_complete)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo)
    }

    /// id로 삭제. 지운 행이 있으면 true
    pub async fn delete_todo(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// `postgresql://` → `postgres://` 스킴 정규화
fn normalize_scheme(url: &str) -> String {
    match url.strip_prefix("postgresql://") {
        Some(rest) => format!("postgres://{}", rest),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scheme_rewrites_postgresql() {
        assert_eq!(
            normalize_scheme("postgresql://u:p@host:5432/db"),
            "postgres://u:p@host:5432/db"
        );
    }

    #[test]
    fn test_normalize_scheme_keeps_postgres() {
        assert_eq!(
            normalize_scheme("postgres://u:p@host:5432/db"),
            "postgres://u:p@host:5432/db"
        );
    }
}
