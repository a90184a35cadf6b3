use crate::models::domain::level::DifficultyLevel;

/// Source text is cut to this many characters before prompting, to stay well
/// inside the model's input token limit.
pub const MAX_SOURCE_CHARS: usize = 15_000;

/// Source texts shorter than this are rejected before the generator is called.
pub const MIN_SOURCE_CHARS: usize = 50;

pub const QUESTION_COUNT: usize = 5;
pub const OPTION_COUNT: usize = 5;

/// Delimiters the model must use to mark an embedded reference passage
/// inside a question text.
pub const REFERENCE_BLOCK_OPEN: &str = "<보기>";
pub const REFERENCE_BLOCK_CLOSE: &str = "</보기>";

const ELEMENTARY_GUIDE: &str = "초등학교 5~6학년 수준의 쉬운 어휘와 짧고 간결한 문장을 사용하세요. 이해하기 쉬운 구어체 느낌을 살짝 섞어도 좋습니다. 전문 용어는 반드시 풀어서 설명하거나 쉬운 말로 바꾸세요.";
const MIDDLE_SCHOOL_GUIDE: &str = "중학교 교과서 수준의 표준 어휘와 문장을 사용하세요. 논리적인 흐름을 유지하되 지나치게 추상적인 표현은 피하세요.";
const HIGH_SCHOOL_GUIDE: &str = "고등학교 비문학 독해 지문 수준으로 작성하세요. 고급 어휘와 복합 문장을 사용하여 논리적 추론 능력을 요하도록 구성하세요.";
const ADULT_GUIDE: &str = "대학교재나 전문 아티클 수준의 깊이 있는 문체와 전문적인 어휘를 사용하세요. 복잡한 논리 구조와 함축적 의미를 포함하여 고차원적인 독해력을 요구하세요.";

/// Style guidance for a difficulty level. Total over the enum, so an
/// unrecognized level label can never fall through once parsed.
pub fn guidance_for(level: DifficultyLevel) -> &'static str {
    match level {
        DifficultyLevel::Elementary => ELEMENTARY_GUIDE,
        DifficultyLevel::MiddleSchool => MIDDLE_SCHOOL_GUIDE,
        DifficultyLevel::HighSchool => HIGH_SCHOOL_GUIDE,
        DifficultyLevel::Adult => ADULT_GUIDE,
    }
}

pub fn system_prompt(level: DifficultyLevel) -> String {
    let label = level.label();
    let guide = guidance_for(level);

    format!(
        "당신은 한국어 독해 교육 전문가입니다.
사용자가 제공한 원문 텍스트를 바탕으로 '{label}' 독자를 대상으로 한 맞춤형 독해 퀴즈를 출제합니다.

[난이도 지침]
{guide}

[작업 절차]
1. 먼저 원문의 내용을 대상 독자 수준('{label}')에 맞게 순화하거나 재구성하여 요약(summary)을 작성하세요.
2. 생성된 요약문을 바탕으로, 글의 내용을 다각도로 평가할 수 있는 문제 5개를 출제하세요.

[문제 유형 가이드]
고정된 유형 없이, 지문의 특성에 맞춰 가장 적절한 문제 유형 5가지를 동적으로 선정하여 출제하세요.
예시 유형 (참고용일 뿐, 이에 국한되지 않음):
- 주제 파악, 세부 내용 일치, 추론하기, 글의 구조 파악, 비판적 읽기, 어휘의 문맥적 의미, 논지 전개 방식 등.
- 상황에 따라 <보기>를 활용한 비교/분석 문제도 적극 활용하세요.
- [중요] 오답(선택지) 생성 시 주의사항:
    - 25억 환율 같은 터무니없거나 비현실적인 수치는 절대 사용하지 마세요.
    - 헷갈리지만 논리적으로 말이 되는 현실적인 오답을 만드세요.

[필수 규칙]
- 질문(question) 안에 \"<보기> ... </보기>\" 태그를 사용하여 비교 지문이나 추가 자료를 명확히 구분하세요.
- 결과는 반드시 JSON 형식으로만 출력하세요. 마크다운 태그(```json)를 포함하지 마세요.
- `tutor_context` 필드를 추가하여 챗봇 튜터가 사용할 핵심 요약 정보를 포함하세요."
    )
}

pub fn user_prompt(truncated_source: &str) -> String {
    format!(
        "다음 원문을 읽고 독해 퀴즈를 생성하세요:

{truncated_source}

[JSON 출력 형식]
{{
  \"summary\": \"난이도가 조절된 요약문\",
  \"questions\": [
    {{
      \"id\": 1,
      \"type\": \"유형 (예: 주제 파악)\",
      \"question\": \"문제 지문\",
      \"options\": [\"선택지1\", \"선택지2\", \"선택지3\", \"선택지4\", \"선택지5\"],
      \"answer\": 1,
      \"explanation\": \"해설\"
    }}
  ],
  \"tutor_context\": \"핵심 요약 및 튜터링을 위한 메타 데이터\"
}}"
    )
}

/// Truncate on a character boundary; the source is usually Korean, so byte
/// slicing is not an option.
pub fn truncate_source(source: &str) -> &str {
    match source.char_indices().nth(MAX_SOURCE_CHARS) {
        Some((byte_index, _)) => &source[..byte_index],
        None => source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guidance_is_total_over_all_levels() {
        for level in [
            DifficultyLevel::Elementary,
            DifficultyLevel::MiddleSchool,
            DifficultyLevel::HighSchool,
            DifficultyLevel::Adult,
        ] {
            assert!(!guidance_for(level).is_empty());
        }
    }

    #[test]
    fn system_prompt_embeds_level_label_and_guidance() {
        let prompt = system_prompt(DifficultyLevel::MiddleSchool);

        assert!(prompt.contains("'중등생'"));
        assert!(prompt.contains(MIDDLE_SCHOOL_GUIDE));
        assert!(prompt.contains("<보기>"));
    }

    #[test]
    fn user_prompt_contains_source_and_target_shape() {
        let prompt = user_prompt("짧은 지문입니다.");

        assert!(prompt.contains("짧은 지문입니다."));
        assert!(prompt.contains("\"tutor_context\""));
        assert!(prompt.contains("\"answer\""));
    }

    #[test]
    fn truncate_source_leaves_short_text_unmodified() {
        let source = "a".repeat(60);
        assert_eq!(truncate_source(&source), source);
    }

    #[test]
    fn truncate_source_cuts_on_char_boundary() {
        let source = "한".repeat(MAX_SOURCE_CHARS + 10);
        let truncated = truncate_source(&source);

        assert_eq!(truncated.chars().count(), MAX_SOURCE_CHARS);
        assert!(source.starts_with(truncated));
    }
}
