//! ToDo App API Library
//!
//! # Overview
//!
//! 이 라이브러리는 ToDo 앱의 백엔드 API를 제공합니다.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                         API                              │
//! │                                                          │
//! │  ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐    │
//! │  │ Routes  │  │  Error  │  │   DB    │  │ Config  │    │
//! │  └────┬────┘  └────┬────┘  └────┬────┘  └────┬────┘    │
//! │       │            │            │            │          │
//! │       └────────────┴────────────┴────────────┘          │
//! │                         │                                │
//! └─────────────────────────┼────────────────────────────────┘
//!                           │
//!                           ▼
//!                  ┌────────────────┐
//!                  │   PostgreSQL   │
//!                  └────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: 환경 설정 관리 (DATABASE_URL은 secret으로 취급)
//! - `error`: 에러 타입 및 HTTP 상태 코드 매핑
//! - `routes`: HTTP 엔드포인트 핸들러
//! - `db`: 데이터베이스 연동 (커넥션 풀, 스키마, CRUD 쿼리)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use todo_api::{Config, Database};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let db = Database::connect(&config).await?;
//!     db.init_schema().await?;
//!
//!     // ... 서버 시작
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

pub mod config;
pub mod db;
pub mod error;
pub mod routes;

// Re-exports for convenience
pub use config::Config;
pub use db::Database;
pub use error::ApiError;

/// 애플리케이션 전역 상태
///
/// 엔진(커넥션 풀)은 프로세스당 하나, 핸들러에는 `State`로 명시적 주입.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub config: Arc<Config>,
}
