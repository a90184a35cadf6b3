use serde::{Deserialize, Serialize};

/// Result of grading one submitted quiz. Derived on demand from the session,
/// never stored.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GradingReport {
    pub correct_count: usize,
    pub total_count: usize,
    /// 0-100, truncated to an integer.
    pub score: u8,
    pub elapsed_seconds: f64,
    pub words_per_minute: f64,
    /// Faster/slower-than-average phrasing for the WPM metric.
    pub speed_delta: String,
    pub per_question: Vec<QuestionResult>,
    /// Distinct categories of missed questions, first-seen order, each with
    /// its study advice.
    pub weak_categories: Vec<CategoryAdvice>,
    pub overall_feedback: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionResult {
    pub question_id: u32,
    pub category: String,
    /// `None` when the question was left unanswered.
    pub chosen: Option<u8>,
    pub correct_answer: u8,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryAdvice {
    pub category: String,
    pub advice: String,
}
