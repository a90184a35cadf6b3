use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{
    constants::feedback::{advice_for, overall_feedback, speed_delta_message},
    models::domain::{CategoryAdvice, GradingReport, QuestionResult, Quiz},
};

/// Grade a submitted quiz. Pure: identical inputs always produce an
/// identical report, so the report can be recomputed on demand instead of
/// being stored.
pub fn grade(
    quiz: &Quiz,
    user_answers: &HashMap<u32, u8>,
    started_at: Option<DateTime<Utc>>,
    submitted_at: Option<DateTime<Utc>>,
) -> GradingReport {
    let elapsed_seconds = elapsed_seconds(started_at, submitted_at);
    let words_per_minute = words_per_minute(quiz_word_count(quiz), elapsed_seconds);

    let per_question: Vec<QuestionResult> = quiz
        .questions
        .iter()
        .map(|question| {
            let chosen = user_answers.get(&question.id).copied();
            QuestionResult {
                question_id: question.id,
                category: question.category.clone(),
                chosen,
                correct_answer: question.answer,
                is_correct: chosen == Some(question.answer),
                explanation: question.explanation.clone(),
            }
        })
        .collect();

    let correct_count = per_question.iter().filter(|r| r.is_correct).count();
    let total_count = quiz.questions.len();
    let score = if total_count == 0 {
        0
    } else {
        (100 * correct_count / total_count) as u8
    };

    let mut weak_categories: Vec<CategoryAdvice> = Vec::new();
    for result in per_question.iter().filter(|r| !r.is_correct) {
        if !weak_categories.iter().any(|w| w.category == result.category) {
            weak_categories.push(CategoryAdvice {
                category: result.category.clone(),
                advice: advice_for(&result.category).to_string(),
            });
        }
    }

    GradingReport {
        correct_count,
        total_count,
        score,
        elapsed_seconds,
        words_per_minute,
        speed_delta: speed_delta_message(words_per_minute),
        per_question,
        weak_categories,
        overall_feedback: overall_feedback(score).to_string(),
    }
}

/// Elapsed reading time in seconds. A missing timestamp on either end is
/// treated as zero duration, not an error.
pub fn elapsed_seconds(
    started_at: Option<DateTime<Utc>>,
    submitted_at: Option<DateTime<Utc>>,
) -> f64 {
    match (started_at, submitted_at) {
        (Some(start), Some(end)) => {
            ((end - start).num_milliseconds() as f64 / 1000.0).max(0.0)
        }
        _ => 0.0,
    }
}

/// Whitespace-token count of everything the reader was shown: the summary
/// plus every question text and every option.
pub fn quiz_word_count(quiz: &Quiz) -> usize {
    let mut count = word_count(&quiz.summary);
    for question in &quiz.questions {
        count += word_count(&question.question);
        for option in &question.options {
            count += word_count(option);
        }
    }
    count
}

pub fn words_per_minute(word_count: usize, elapsed_seconds: f64) -> f64 {
    if elapsed_seconds > 0.0 {
        word_count as f64 / elapsed_seconds * 60.0
    } else {
        0.0
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::feedback::{
        ENCOURAGING_MESSAGE, GENERIC_ADVICE, PERFECT_MESSAGE, REMEDIAL_MESSAGE,
    };
    use crate::test_utils::fixtures::{sample_quiz, scenario_answers};
    use chrono::TimeZone;

    fn all_correct_answers() -> HashMap<u32, u8> {
        sample_quiz()
            .questions
            .iter()
            .map(|q| (q.id, q.answer))
            .collect()
    }

    #[test]
    fn three_of_five_scores_sixty_with_two_weak_categories() {
        let quiz = sample_quiz();
        let report = grade(&quiz, &scenario_answers(), None, None);

        assert_eq!(report.correct_count, 3);
        assert_eq!(report.total_count, 5);
        assert_eq!(report.score, 60);
        assert_eq!(report.overall_feedback, ENCOURAGING_MESSAGE);

        let weak: Vec<&str> = report
            .weak_categories
            .iter()
            .map(|w| w.category.as_str())
            .collect();
        assert_eq!(weak, vec!["내용 일치", "비교 지문 분석"]);
    }

    #[test]
    fn perfect_score_takes_top_tier_message() {
        let quiz = sample_quiz();
        let report = grade(&quiz, &all_correct_answers(), None, None);

        assert_eq!(report.score, 100);
        assert_eq!(report.overall_feedback, PERFECT_MESSAGE);
        assert!(report.weak_categories.is_empty());
    }

    #[test]
    fn two_of_five_scores_forty_with_remedial_message() {
        let quiz = sample_quiz();
        let mut answers = all_correct_answers();
        answers.insert(1, 5);
        answers.insert(2, 5);
        answers.insert(3, 5);

        let report = grade(&quiz, &answers, None, None);

        assert_eq!(report.score, 40);
        assert_eq!(report.overall_feedback, REMEDIAL_MESSAGE);
    }

    #[test]
    fn unanswered_questions_grade_as_incorrect() {
        let quiz = sample_quiz();
        let report = grade(&quiz, &HashMap::new(), None, None);

        assert_eq!(report.correct_count, 0);
        assert_eq!(report.score, 0);
        assert!(report.per_question.iter().all(|r| r.chosen.is_none()));
        assert!(report.per_question.iter().all(|r| !r.is_correct));
    }

    #[test]
    fn unknown_category_gets_generic_advice() {
        let mut quiz = sample_quiz();
        quiz.questions[0].category = "논지 전개 방식".to_string();

        let report = grade(&quiz, &HashMap::new(), None, None);

        let advice = report
            .weak_categories
            .iter()
            .find(|w| w.category == "논지 전개 방식")
            .unwrap();
        assert_eq!(advice.advice, GENERIC_ADVICE);
    }

    #[test]
    fn grading_is_pure() {
        let quiz = sample_quiz();
        let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let end = Utc.timestamp_opt(1_700_000_090, 0).unwrap();

        let first = grade(&quiz, &scenario_answers(), Some(start), Some(end));
        let second = grade(&quiz, &scenario_answers(), Some(start), Some(end));

        assert_eq!(first, second);
    }

    #[test]
    fn elapsed_is_zero_when_a_timestamp_is_missing() {
        let now = Utc::now();

        assert_eq!(elapsed_seconds(None, None), 0.0);
        assert_eq!(elapsed_seconds(Some(now), None), 0.0);
        assert_eq!(elapsed_seconds(None, Some(now)), 0.0);
    }

    #[test]
    fn elapsed_is_clamped_to_zero_when_clocks_run_backwards() {
        let start = Utc.timestamp_opt(1_700_000_100, 0).unwrap();
        let end = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        assert_eq!(elapsed_seconds(Some(start), Some(end)), 0.0);
    }

    #[test]
    fn five_hundred_words_in_a_minute_is_five_hundred_wpm() {
        assert_eq!(words_per_minute(500, 60.0), 500.0);
    }

    #[test]
    fn zero_elapsed_yields_zero_wpm() {
        assert_eq!(words_per_minute(500, 0.0), 0.0);
    }

    #[test]
    fn word_count_covers_summary_questions_and_options() {
        let mut quiz = sample_quiz();
        quiz.summary = "하나 둘 셋".to_string();
        for question in &mut quiz.questions {
            question.question = "질문 한 줄".to_string();
            question.options = vec!["가".to_string(); 5];
        }

        // 3 + 5 * (3 + 5)
        assert_eq!(quiz_word_count(&quiz), 43);
    }
}
