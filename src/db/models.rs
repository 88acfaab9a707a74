//! Database Models
//!
//! Row and payload types for the single `todos` table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;

/// content 길이 제약 (문자 수 기준, 양 끝 포함)
pub const CONTENT_MIN_LEN: usize = 2;
pub const CONTENT_MAX_LEN: usize = 50;

/// Todo 한 건
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    /// 기본 키. DB가 할당하며(SERIAL), 할당 후 변경 불가
    pub id: i32,

    /// 할 일 내용 (2~50자, 인덱스 대상)
    pub content: String,

    /// 완료 여부
    pub is_complete: bool,
}

/// 생성/수정 요청 바디
///
/// id는 클라이언트가 주지 않음. 바디에 id가 있어도 무시됨(경로 파라미터가 기준).
#[derive(Debug, Clone, Deserialize)]
pub struct TodoDraft {
    pub content: String,

    /// 생략 시 false
    #[serde(default)]
    pub is_complete: bool,
}

impl TodoDraft {
    /// content 길이 검증. DB에 닿기 전에 거절한다.
    pub fn validate(&self) -> Result<(), ApiError> {
        let len = self.content.chars().count();
        if len < CONTENT_MIN_LEN || len > CONTENT_MAX_LEN {
            return Err(ApiError::ValidationError(format!(
                "content must be {}-{} characters, got {}",
                CONTENT_MIN_LEN, CONTENT_MAX_LEN, len
            )));
        }
        Ok(())
    }
}
