use std::sync::Arc;

use secrecy::SecretString;
use tokio::sync::RwLock;

use crate::{
    config::Config,
    repositories::{InMemorySessionRepository, SessionRepository},
    services::{HttpContentFetcher, ContentFetcher, OpenAiChatModel, QuizGeneratorService},
};

/// The resolved API credential, shared between the startup resolution chain,
/// the interactive credential endpoint and the chat model. Interactive keys
/// live here and nowhere else.
pub type SharedCredential = Arc<RwLock<Option<SecretString>>>;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionRepository>,
    pub content: Arc<dyn ContentFetcher>,
    pub generator: Arc<QuizGeneratorService>,
    pub credential: SharedCredential,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let credential: SharedCredential = Arc::new(RwLock::new(config.resolve_api_key()));
        let model = Arc::new(OpenAiChatModel::new(
            credential.clone(),
            config.model_name.clone(),
        ));

        Self {
            sessions: Arc::new(InMemorySessionRepository::new()),
            content: Arc::new(HttpContentFetcher::new()),
            generator: Arc::new(QuizGeneratorService::new(model)),
            credential,
            config: Arc::new(config),
        }
    }

    pub async fn has_credential(&self) -> bool {
        self.credential.read().await.is_some()
    }

    pub async fn set_credential(&self, api_key: SecretString) {
        let mut slot = self.credential.write().await;
        *slot = Some(api_key);
    }
}
