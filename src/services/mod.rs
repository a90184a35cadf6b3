pub mod content_service;
pub mod grading_service;
pub mod quiz_service;

pub use content_service::{ContentFetcher, HttpContentFetcher};
pub use quiz_service::{ChatModel, OpenAiChatModel, QuizGeneratorService};
