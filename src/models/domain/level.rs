use serde::{Deserialize, Serialize};

/// Target reader level for a generated quiz. Labels follow the Korean UI
/// wording; the English variant names parse as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum DifficultyLevel {
    Elementary,
    MiddleSchool,
    HighSchool,
    Adult,
}

impl DifficultyLevel {
    pub const DEFAULT: DifficultyLevel = DifficultyLevel::HighSchool;

    /// Parse a user-facing label. Unrecognized labels silently fall back to
    /// [`DifficultyLevel::DEFAULT`] rather than failing the request.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "초등생" | "Elementary" | "elementary" => DifficultyLevel::Elementary,
            "중등생" | "MiddleSchool" | "middle_school" => DifficultyLevel::MiddleSchool,
            "고등생" | "HighSchool" | "high_school" => DifficultyLevel::HighSchool,
            "성인" | "Adult" | "adult" => DifficultyLevel::Adult,
            _ => DifficultyLevel::DEFAULT,
        }
    }

    /// Korean label used inside the generation prompt and result views.
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyLevel::Elementary => "초등생",
            DifficultyLevel::MiddleSchool => "중등생",
            DifficultyLevel::HighSchool => "고등생",
            DifficultyLevel::Adult => "성인",
        }
    }
}
