use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Reference reading speed used for the faster/slower-than-average delta.
pub const AVERAGE_WPM: f64 = 250.0;

/// Score at or above which the encouraging tier applies.
pub const ENCOURAGING_SCORE: u8 = 60;
pub const PERFECT_SCORE: u8 = 100;

pub const PERFECT_MESSAGE: &str = "🏆 완벽합니다! 독해력이 매우 뛰어나시네요.";
pub const ENCOURAGING_MESSAGE: &str = "👍 잘하셨습니다! 틀린 문제의 해설을 꼭 확인해보세요.";
pub const REMEDIAL_MESSAGE: &str = "🔥 조금 더 연습이 필요해 보입니다. 지문을 천천히 다시 읽어보세요.";

pub const GENERIC_ADVICE: &str =
    "해당 유형은 지문을 꼼꼼히 다시 읽고 근거를 찾는 연습이 필요합니다.";

static STRATEGIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "주제 찾기",
            "글의 첫 문단과 마지막 문단을 다시 읽으며 핵심 키워드를 찾아보세요. 반복되는 단어가 주제일 가능성이 높습니다.",
        ),
        (
            "어휘 선택",
            "단어의 사전적 의미보다 문맥 속에서의 의미를 파악하는 연습이 필요합니다. 앞뒤 문장의 흐름을 단서로 사용하세요.",
        ),
        (
            "빈칸 삽입",
            "빈칸 앞뒤의 접속사(그러나, 따라서 등)에 주목하세요. 문장의 논리적 연결(인과, 대조, 역접)을 파악해야 합니다.",
        ),
        (
            "내용 일치",
            "본문의 서술어(있다/없다, 증가했다/감소했다)를 꼼꼼히 확인하세요. 사용자의 배경지식이 아닌 '지문에 적힌 사실'만 믿어야 합니다.",
        ),
        (
            "비교 지문 분석",
            "두 지문의 공통점보다는 '차이점'에 집중하세요. 관점의 차이나 태도의 차이를 묻는 경우가 많습니다.",
        ),
    ])
});

/// Study advice for a missed question category. Exact label match against the
/// fixed strategy table, generic advice otherwise. Never fails.
pub fn advice_for(category: &str) -> &'static str {
    STRATEGIES.get(category).copied().unwrap_or(GENERIC_ADVICE)
}

/// Tiered overall feedback message for a 0-100 score.
pub fn overall_feedback(score: u8) -> &'static str {
    if score >= PERFECT_SCORE {
        PERFECT_MESSAGE
    } else if score >= ENCOURAGING_SCORE {
        ENCOURAGING_MESSAGE
    } else {
        REMEDIAL_MESSAGE
    }
}

/// Human-readable comparison against [`AVERAGE_WPM`]. A strictly positive
/// delta reads as faster, anything else as slower, matching the metric's
/// polarity in the result view.
pub fn speed_delta_message(wpm: f64) -> String {
    let diff = wpm - AVERAGE_WPM;
    if diff > 0.0 {
        format!("평균보다 {} 빠름", diff as i64)
    } else {
        format!("평균보다 {} 느림", diff.abs() as i64)
    }
}
