#[cfg(test)]
pub mod fixtures {
    use std::collections::HashMap;

    use crate::models::domain::{Question, Quiz};

    pub fn sample_question(id: u32, category: &str, answer: u8) -> Question {
        Question {
            id,
            category: category.to_string(),
            question: format!("문제 {id}: 글의 내용과 일치하는 것은?"),
            options: (1..=5).map(|n| format!("선택지 {n}")).collect(),
            answer,
            explanation: format!("문제 {id}의 해설입니다."),
        }
    }

    /// Five-question quiz with the answer key {1:2, 2:2, 3:3, 4:1, 5:4}.
    pub fn sample_quiz() -> Quiz {
        Quiz {
            summary: "인공지능 기술의 발전과 그 사회적 영향에 대해 다룬 요약문입니다.".to_string(),
            questions: vec![
                sample_question(1, "주제 찾기", 2),
                sample_question(2, "내용 일치", 2),
                sample_question(3, "추론하기", 3),
                sample_question(4, "어휘 선택", 1),
                sample_question(5, "비교 지문 분석", 4),
            ],
            tutor_context: "핵심 개념: 인공지능, 사회적 영향.".to_string(),
        }
    }

    /// The model's wire format for [`sample_quiz`].
    pub fn sample_quiz_json() -> String {
        serde_json::to_string(&sample_quiz()).expect("fixture quiz serializes")
    }

    /// Selections that get questions 1, 3 and 4 right and 2 and 5 wrong.
    pub fn scenario_answers() -> HashMap<u32, u8> {
        HashMap::from([(1, 2), (2, 3), (3, 3), (4, 1), (5, 5)])
    }
}
