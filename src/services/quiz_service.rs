use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::ExposeSecret;

use crate::{
    app_state::SharedCredential,
    constants::prompts::{system_prompt, truncate_source, user_prompt},
    errors::{AppError, AppResult},
    models::domain::{DifficultyLevel, Quiz},
};

/// Low temperature: quiz generation is correctness-sensitive, not creative.
const GENERATION_TEMPERATURE: f32 = 0.3;

/// One chat completion round-trip. The seam between the generator and the
/// hosted model, mocked in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> AppResult<String>;
}

/// Chat model backed by the OpenAI API in strict JSON mode.
pub struct OpenAiChatModel {
    credential: SharedCredential,
    model_name: String,
}

impl OpenAiChatModel {
    pub fn new(credential: SharedCredential, model_name: String) -> Self {
        Self {
            credential,
            model_name,
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, system: &str, user: &str) -> AppResult<String> {
        let api_key = self
            .credential
            .read()
            .await
            .as_ref()
            .map(|key| key.expose_secret().to_string())
            .ok_or_else(|| {
                AppError::MissingCredential(
                    "no OpenAI API key resolved; set OPENAI_API_KEY or supply one via POST /api/credential".to_string(),
                )
            })?;

        let client = Client::with_config(OpenAIConfig::new().with_api_key(api_key));

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .temperature(GENERATION_TEMPERATURE)
            .response_format(ResponseFormat::JsonObject)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system)
                    .build()
                    .map_err(|e| AppError::Generation(e.to_string()))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user)
                    .build()
                    .map_err(|e| AppError::Generation(e.to_string()))?
                    .into(),
            ])
            .build()
            .map_err(|e| AppError::Generation(e.to_string()))?;

        let response = client
            .chat()
            .create(request)
            .await
            .map_err(|e| AppError::Generation(format!("model call failed: {e}")))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::Generation("model returned no content".to_string()))
    }
}

/// Builds the leveled prompt, calls the model once and parses the response
/// into a validated [`Quiz`]. No retry; any failure surfaces as
/// `AppError::Generation` and no partial quiz escapes.
pub struct QuizGeneratorService {
    model: Arc<dyn ChatModel>,
}

impl QuizGeneratorService {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    pub async fn generate(&self, source: &str, level: DifficultyLevel) -> AppResult<Quiz> {
        let truncated = truncate_source(source);
        log::info!(
            "generating quiz: level={} source_chars={}",
            level.label(),
            truncated.chars().count()
        );

        let content = self
            .model
            .complete(&system_prompt(level), &user_prompt(truncated))
            .await?;

        parse_quiz(&content)
    }
}

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$").expect("code fence pattern is valid")
});

/// The model is instructed not to wrap its output in markdown fences, but
/// occasionally does anyway even in JSON mode.
fn strip_code_fences(content: &str) -> &str {
    match CODE_FENCE.captures(content).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str(),
        None => content.trim(),
    }
}

pub fn parse_quiz(content: &str) -> AppResult<Quiz> {
    let quiz: Quiz = serde_json::from_str(strip_code_fences(content))
        .map_err(|e| AppError::Generation(format!("response was not valid quiz JSON: {e}")))?;

    quiz.validate().map_err(AppError::Generation)?;
    Ok(quiz)
}
