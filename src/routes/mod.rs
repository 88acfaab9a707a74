//! API Routes Module
//!
//! 모든 HTTP 엔드포인트 정의
//!
//! # Routes
//! - `/` - 환영 메시지
//! - `/health` - 헬스 체크
//! - `/todos/` - Todo 생성/전체 조회
//! - `/todos/:id` - Todo 단건 조회/수정/삭제

pub mod health;
pub mod root;
pub mod todos;
