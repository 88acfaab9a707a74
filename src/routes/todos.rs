//! Todo CRUD Endpoints
//!
//! 다섯 개의 단발성 오퍼레이션. 공통 흐름:
//! 풀에서 커넥션 획득 → 쿼리/뮤테이션 한 건 → 결과(또는 부재)를
//! 성공 응답 또는 404로 변환. 핸들러 간 공유 상태는 풀뿐이다.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::{
    db::{Todo, TodoDraft},
    error::ApiError,
    AppState,
};

// ============ Response Types ============

/// 삭제 확인 응답
#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

// ============ Handlers ============

/// POST /todos/
///
/// Todo 생성. id는 DB가 할당해 응답에 포함된다.
///
/// # Response
///
/// ```json
/// {"id": 1, "content": "Buy milk", "is_complete": false}
/// ```
pub async fn create_todo(
    State(state): State<AppState>,
    Json(draft): Json<TodoDraft>,
) -> Result<Json<Todo>, ApiError> {
    draft.validate()?;

    let todo = state.db.insert_todo(&draft).await?;
    tracing::debug!(id = todo.id, "todo created");

    Ok(Json(todo))
}

/// GET /todos/
///
/// 전체 조회. 빈 목록은 빈 배열이 아니라 404
/// (원 API의 계약을 그대로 유지 — 회귀 주의)
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.db.list_todos().await?;
    list_to_response(todos)
}

/// 전체 조회 결과 → 응답 매핑. 빈 목록은 404로 변환된다
fn list_to_response(todos: Vec<Todo>) -> Result<Json<Vec<Todo>>, ApiError> {
    if todos.is_empty() {
        return Err(ApiError::NotFound("No task found".to_string()));
    }
    Ok(Json(todos))
}

/// GET /todos/:id
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Todo>, ApiError> {
    match state.db.get_todo(id).await? {
        Some(todo) => Ok(Json(todo)),
        None => Err(ApiError::NotFound("No task found".to_string())),
    }
}

/// PUT /todos/:id
///
/// 경로의 id로 기존 행을 찾아 content와 is_complete를 요청 바디 값으로
/// 덮어쓴다. 바디의 id는 무시.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(draft): Json<TodoDraft>,
) -> Result<Json<Todo>, ApiError> {
    draft.validate()?;

    match state.db.update_todo(id, &draft).await? {
        Some(todo) => {
            tracing::debug!(id, "todo updated");
            Ok(Json(todo))
        }
        None => Err(ApiError::NotFound("No data Found".to_string())),
    }
}

/// DELETE /todos/:id
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if state.db.delete_todo(id).await? {
        tracing::debug!(id, "todo deleted");
        Ok(Json(DeleteResponse {
            message: "Todo Successfully deleted".to_string(),
        }))
    } else {
        Err(ApiError::NotFound("No Todo found to be deleted".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_maps_to_not_found() {
        // 빈 목록은 빈 배열 200이 아니라 404 "No task found" — 계약 회귀 방지
        let result = list_to_response(vec![]);
        match result {
            Err(ApiError::NotFound(msg)) => assert_eq!(msg, "No task found"),
            _ => panic!("empty list must map to NotFound"),
        }
    }

    #[test]
    fn test_non_empty_list_passes_through() {
        let todos = vec![Todo {
            id: 1,
            content: "Buy milk".to_string(),
            is_complete: false,
        }];

        let Json(body) = list_to_response(todos.clone()).unwrap();
        assert_eq!(body, todos);
    }
}
