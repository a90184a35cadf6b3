use serde::Deserialize;
use validator::Validate;

/// Body for `POST /api/sessions/{id}/quiz`. Raw text wins over the URL; the
/// URL is only fetched when `text` is absent or blank.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(url(message = "Invalid URL"))]
    pub url: Option<String>,

    pub text: Option<String>,

    /// Difficulty label, e.g. "중등생". Unknown labels default silently.
    #[serde(default)]
    pub level: Option<String>,
}

impl GenerateQuizRequest {
    /// The pasted text, if any non-blank text was supplied.
    pub fn raw_text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnswerRequest {
    pub question_id: u32,

    /// 1-based option index.
    #[validate(range(min = 1, max = 5, message = "Selected option must be 1-5"))]
    pub selected: u8,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CredentialRequest {
    #[validate(length(min = 1, message = "API key cannot be empty"))]
    pub api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_text_ignores_blank_input() {
        let request = GenerateQuizRequest {
            url: Some("https://example.com/article".to_string()),
            text: Some("   ".to_string()),
            level: None,
        };

        assert_eq!(request.raw_text(), None);
        assert_eq!(request.url(), Some("https://example.com/article"));
    }

    #[test]
    fn raw_text_is_trimmed() {
        let request = GenerateQuizRequest {
            url: None,
            text: Some("  본문 텍스트  ".to_string()),
            level: Some("중등생".to_string()),
        };

        assert_eq!(request.raw_text(), Some("본문 텍스트"));
    }

    #[test]
    fn answer_request_validates_option_range() {
        let valid = AnswerRequest {
            question_id: 1,
            selected: 3,
        };
        assert!(valid.validate().is_ok());

        let invalid = AnswerRequest {
            question_id: 1,
            selected: 6,
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn generate_request_validates_url_shape() {
        let request = GenerateQuizRequest {
            url: Some("not a url".to_string()),
            text: None,
            level: None,
        };

        assert!(request.validate().is_err());
    }
}
