use serde::{Deserialize, Serialize};

use crate::constants::prompts::{OPTION_COUNT, QUESTION_COUNT};

/// A generated reading quiz. Created atomically from one model response,
/// immutable afterwards; a new generation replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub summary: String,
    pub questions: Vec<Question>,
    pub tutor_context: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: u32,
    /// Free-form category label chosen by the model per passage,
    /// e.g. "주제 찾기".
    #[serde(rename = "type")]
    pub category: String,
    /// May embed a delimited reference passage block (`<보기> ... </보기>`).
    pub question: String,
    pub options: Vec<String>,
    /// 1-based index into `options`.
    pub answer: u8,
    pub explanation: String,
}

impl Quiz {
    /// Check the fixed generation contract: exactly 5 questions, each with
    /// exactly 5 options, answers indexing into them, ids unique.
    pub fn validate(&self) -> Result<(), String> {
        if self.questions.len() != QUESTION_COUNT {
            return Err(format!(
                "expected {} questions, got {}",
                QUESTION_COUNT,
                self.questions.len()
            ));
        }

        let mut seen_ids = Vec::with_capacity(self.questions.len());
        for question in &self.questions {
            if question.options.len() != OPTION_COUNT {
                return Err(format!(
                    "question {} has {} options, expected {}",
                    question.id,
                    question.options.len(),
                    OPTION_COUNT
                ));
            }
            if question.answer < 1 || question.answer as usize > OPTION_COUNT {
                return Err(format!(
                    "question {} answer {} is out of range 1..={}",
                    question.id, question.answer, OPTION_COUNT
                ));
            }
            if seen_ids.contains(&question.id) {
                return Err(format!("duplicate question id {}", question.id));
            }
            seen_ids.push(question.id);
        }

        Ok(())
    }

    pub fn question_by_id(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}
