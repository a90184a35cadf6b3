use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizSession,
};

/// Session-scoped key/value storage for quiz sessions. Every interaction
/// loads the session, applies one transition and saves it back.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self) -> AppResult<Uuid>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizSession>>;
    async fn save(&self, id: &Uuid, session: QuizSession) -> AppResult<()>;
}

/// The only storage this system has. Nothing is persisted to disk; sessions
/// live for the lifetime of the process.
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, QuizSession>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write().await;
        sessions.insert(id, QuizSession::default());
        Ok(id)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn save(&self, id: &Uuid, session: QuizSession) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(id) {
            Some(slot) => {
                *slot = session;
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Session '{}' not found", id))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::QuizPhase;
    use crate::test_utils::fixtures::sample_quiz;

    #[actix_rt::test]
    async fn create_then_find_returns_fresh_session() {
        let repo = InMemorySessionRepository::new();

        let id = repo.create().await.unwrap();
        let session = repo.find_by_id(&id).await.unwrap().unwrap();

        assert_eq!(session.phase, QuizPhase::NotStarted);
        assert!(session.quiz.is_none());
    }

    #[actix_rt::test]
    async fn find_unknown_session_is_none() {
        let repo = InMemorySessionRepository::new();

        assert!(repo.find_by_id(&Uuid::new_v4()).await.unwrap().is_none());
    }

    #[actix_rt::test]
    async fn save_round_trips_session_state() {
        let repo = InMemorySessionRepository::new();
        let id = repo.create().await.unwrap();

        let mut session = repo.find_by_id(&id).await.unwrap().unwrap();
        session.install_quiz(sample_quiz());
        repo.save(&id, session.clone()).await.unwrap();

        let loaded = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(loaded, session);
    }

    #[actix_rt::test]
    async fn save_to_unknown_session_is_not_found() {
        let repo = InMemorySessionRepository::new();

        let err = repo
            .save(&Uuid::new_v4(), QuizSession::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
