use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{GradingReport, Question, Quiz, QuizPhase, QuizSession};

#[derive(Debug, Clone, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

/// Quiz as shown while solving: answers and explanations are withheld until
/// the session is submitted and graded.
#[derive(Debug, Clone, Serialize)]
pub struct QuizView {
    pub summary: String,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: u32,
    #[serde(rename = "type")]
    pub category: String,
    pub question: String,
    pub options: Vec<String>,
}

impl From<&Quiz> for QuizView {
    fn from(quiz: &Quiz) -> Self {
        QuizView {
            summary: quiz.summary.clone(),
            questions: quiz.questions.iter().map(QuestionView::from).collect(),
        }
    }
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        QuestionView {
            id: question.id,
            category: question.category.clone(),
            question: question.question.clone(),
            options: question.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub phase: QuizPhase,
    pub quiz: Option<QuizView>,
    /// Ids the user has answered so far; selections themselves stay hidden.
    pub answered_question_ids: Vec<u32>,
    /// Present only once the session is submitted.
    pub report: Option<GradingReport>,
}

impl SessionView {
    pub fn new(session: &QuizSession, report: Option<GradingReport>) -> Self {
        let mut answered: Vec<u32> = session.user_answers.keys().copied().collect();
        answered.sort_unstable();

        SessionView {
            phase: session.phase,
            quiz: session.quiz.as_ref().map(QuizView::from),
            answered_question_ids: answered,
            report,
        }
    }
}
