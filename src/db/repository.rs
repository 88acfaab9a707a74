//! Repository Pattern Implementation
//!
//! # Interview Q&A
//!
//! Q: Repository 패턴이란?
//! A: 데이터 접근 로직을 추상화하는 패턴
//!
//!    장점:
//!    - 비즈니스 로직과 데이터 접근 분리
//!    - 테스트 시 Mock 구현 쉬움
//!    - DB 교체 시 영향 최소화
//!
//! Q: 현재 핸들러가 trait이 아닌 Database를 직접 쓰는 이유는?
//! A: 단일 DB(PostgreSQL)만 쓰는 규모에서 오버엔지니어링 방지
//!    - trait은 CRUD 계약을 문서화하고, Mock 구현이 DB 없이
//!      계약의 성질(id 할당, 삭제 후 조회 실패 등)을 검증하는 데 쓰임

use anyhow::Result;
use async_trait::async_trait;

use super::models::{Todo, TodoDraft};

/// Todo 저장소 계약
///
/// PostgreSQL 구현은 db/mod.rs의 Database 구조체, 테스트용 Mock은 아래
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 삽입. 저장소가 id를 할당해 완성된 Todo를 돌려준다
    async fn insert(&self, draft: &TodoDraft) -> Result<Todo>;
    async fn find_all(&self) -> Result<Vec<Todo>>;
    async fn find(&self, id: i32) -> Result<Option<Todo>>;
    /// id가 없으면 None, 있으면 덮어쓴 결과
    async fn update(&self, id: i32, draft: &TodoDraft) -> Result<Option<Todo>>;
    /// 지운 행이 있으면 true
    async fn delete(&self, id: i32) -> Result<bool>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::RwLock;

    /// 인메모리 구현. id 할당 규칙(단조 증가, 재사용 없음)은 SERIAL과 동일
    pub struct MockTodoRepository {
        inner: RwLock<MockState>,
    }

    struct MockState {
        todos: BTreeMap<i32, Todo>,
        next_id: i32,
    }

    impl MockTodoRepository {
        pub fn new() -> Self {
            Self {
                inner: RwLock::new(MockState {
                    todos: BTreeMap::new(),
                    next_id: 1,
                }),
            }
        }
    }

    #[async_trait]
    impl TodoRepository for MockTodoRepository {
        async fn insert(&self, draft: &TodoDraft) -> Result<Todo> {
            let mut state = self.inner.write().unwrap();
            let id = state.next_id;
            state.next_id += 1;

            let todo = Todo {
                id,
                content: draft.content.clone(),
                is_complete: draft.is_complete,
            };
            state.todos.insert(id, todo.clone());
            Ok(todo)
        }

        async fn find_all(&self) -> Result<Vec<Todo>> {
            let state = self.inner.read().unwrap();
            Ok(state.todos.values().cloned().collect())
        }

        async fn find(&self, id: i32) -> Result<Option<Todo>> {
            let state = self.inner.read().unwrap();
            Ok(state.todos.get(&id).cloned())
        }

        async fn update(&self, id: i32, draft: &TodoDraft) -> Result<Option<Todo>> {
            let mut state = self.inner.write().unwrap();
            match state.todos.get_mut(&id) {
                Some(todo) => {
                    todo.content = draft.content.clone();
                    todo.is_complete = draft.is_complete;
                    Ok(Some(todo.clone()))
                }
                None => Ok(None),
            }
        }

        async fn delete(&self, id: i32) -> Result<bool> {
            let mut state = self.inner.write().unwrap();
            Ok(state.todos.remove(&id).is_some())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockTodoRepository;
    use super::*;

    fn draft(content: &str) -> TodoDraft {
        TodoDraft {
            content: content.to_string(),
            is_complete: false,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let repo = MockTodoRepository::new();

        let a = repo.insert(&draft("Buy milk")).await.unwrap();
        let b = repo.insert(&draft("Walk dog")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_find_after_insert_returns_equal_record() {
        let repo = MockTodoRepository::new();

        let created = repo.insert(&draft("Buy milk")).await.unwrap();
        let fetched = repo.find(created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_find_after_delete_returns_none() {
        let repo = MockTodoRepository::new();

        let created = repo.insert(&draft("Buy milk")).await.unwrap();
        assert!(repo.delete(created.id).await.unwrap());
        assert_eq!(repo.find(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_id_returns_false() {
        let repo = MockTodoRepository::new();
        assert!(!repo.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_overwrites_both_fields() {
        let repo = MockTodoRepository::new();

        let created = repo.insert(&draft("Buy milk")).await.unwrap();
        let updated = repo
            .update(
                created.id,
                &TodoDraft {
                    content: "Buy oat milk".to_string(),
                    is_complete: true,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.content, "Buy oat milk");
        assert!(updated.is_complete);
    }

    #[tokio::test]
    async fn test_update_missing_id_leaves_store_unchanged() {
        let repo = MockTodoRepository::new();

        let created = repo.insert(&draft("Buy milk")).await.unwrap();
        let before = repo.find_all().await.unwrap();

        let result = repo.update(999, &draft("Overwrite")).await.unwrap();
        assert_eq!(result, None);
        assert_eq!(repo.find_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_find_all_empty_store() {
        let repo = MockTodoRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
