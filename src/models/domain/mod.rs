pub mod level;
pub mod quiz;
pub mod report;
pub mod session;

pub use level::DifficultyLevel;
pub use quiz::{Question, Quiz};
pub use report::{CategoryAdvice, GradingReport, QuestionResult};
pub use session::{QuizPhase, QuizSession};
