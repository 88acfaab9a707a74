//! ToDo App API Server
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Client (Frontend)                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Axum Web Server                         │
//! │  ┌─────────────────────────────────────────────────────────┐│
//! │  │                      Routes Layer                        ││
//! │  │  /   /health   /todos/   /todos/:id                     ││
//! │  └─────────────────────────────────────────────────────────┘│
//! │  ┌─────────────────────────────────────────────────────────┐│
//! │  │                    Data Layer                            ││
//! │  │  PostgreSQL Connection Pool (size 10, recycle 300s)     ││
//! │  └─────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      PostgreSQL (TLS)                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_api::{routes, AppState, Config, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 환경변수 로드 (.env 없으면 프로세스 환경변수만 사용)
    dotenvy::dotenv().ok();

    // 로깅 초기화
    // RUST_LOG=debug,sqlx=warn 형태로 레벨 제어 가능
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Starting ToDo App API Server");

    // 설정 로드 (DATABASE_URL 없으면 여기서 즉시 실패)
    let config = Config::from_env()?;
    tracing::info!("📋 Configuration loaded");

    // 데이터베이스 연결
    let db = Database::connect(&config).await?;
    tracing::info!("🗄️  Database connected");

    // 스키마 생성 (멱등, 요청 받기 전에 한 번)
    db.init_schema().await?;
    tracing::info!("📦 Schema ready");

    // 앱 상태 구성
    let port = config.port;
    let state = AppState {
        db: Arc::new(db),
        config: Arc::new(config),
    };

    // 라우터 구성
    let app = create_router(state);

    // 서버 시작
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🌐 Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// 라우터 생성
///
/// # Route Structure
///
/// ```text
/// GET    /            - 환영 메시지
/// GET    /health      - 서버 상태 확인
///
/// POST   /todos/      - Todo 생성
/// GET    /todos/      - Todo 전체 조회 (비어 있으면 404)
/// GET    /todos/:id   - Todo 단건 조회
/// PUT    /todos/:id   - Todo 수정
/// DELETE /todos/:id   - Todo 삭제
/// ```
fn create_router(state: AppState) -> Router {
    // CORS: 모든 origin/method/header + credentials 허용.
    // 와일드카드 origin은 credentials와 함께 쓸 수 없으므로
    // very_permissive()가 요청 origin을 미러링하는 방식으로 처리
    let cors = CorsLayer::very_permissive();

    Router::new()
        .route("/", get(routes::root::welcome))
        .route("/health", get(routes::health::health_check))
        // /todos/는 원 API 경로 그대로 (trailing slash 포함)
        .route(
            "/todos/",
            post(routes::todos::create_todo).get(routes::todos::list_todos),
        )
        .route(
            "/todos/:id",
            get(routes::todos::get_todo)
                .put(routes::todos::update_todo)
                .delete(routes::todos::delete_todo),
        )
        // 미들웨어
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // 상태 주입
        .with_state(state)
}
