use serde::Serialize;

use super::questions::{EXPERIENCE_QUESTION, GOAL_QUESTION, INTEREST_QUESTION, TIME_QUESTION};
use super::session::AnswerMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Basic,
    Intermediate,
}

impl ExperienceLevel {
    /// Buckets the free-text experience answer. Matching is case-sensitive, so
    /// "Basic usage (email, browsing)" lands in `Basic` while "Advanced user" falls
    /// through to `Intermediate`.
    pub fn from_answer(answer: Option<&str>) -> Self {
        match answer {
            Some(text) if text.contains("beginner") => ExperienceLevel::Beginner,
            Some(text) if text.contains("Basic") => ExperienceLevel::Basic,
            _ => ExperienceLevel::Intermediate,
        }
    }

    pub fn is_entry_level(self) -> bool {
        matches!(self, ExperienceLevel::Beginner | ExperienceLevel::Basic)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Basic => "basic",
            ExperienceLevel::Intermediate => "intermediate",
        }
    }
}

/// What the learner told us, reduced to the fields the learning path needs.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub level: ExperienceLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_commitment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

pub fn summarize(answers: &AnswerMap) -> ResultSummary {
    ResultSummary {
        level: ExperienceLevel::from_answer(answers.get(&EXPERIENCE_QUESTION).map(String::as_str)),
        interest: answers.get(&INTEREST_QUESTION).cloned(),
        time_commitment: answers.get(&TIME_QUESTION).cloned(),
        goal: answers.get(&GOAL_QUESTION).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(u32, &str)]) -> AnswerMap {
        pairs.iter().map(|(id, text)| (*id, text.to_string())).collect()
    }

    #[test]
    fn buckets_each_experience_option() {
        let cases = [
            ("Complete beginner", ExperienceLevel::Beginner),
            ("Basic usage (email, browsing)", ExperienceLevel::Basic),
            ("Intermediate (office software)", ExperienceLevel::Intermediate),
            ("Advanced user", ExperienceLevel::Intermediate),
        ];
        for (text, expected) in cases {
            assert_eq!(ExperienceLevel::from_answer(Some(text)), expected, "{text}");
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(ExperienceLevel::from_answer(Some("Beginner")), ExperienceLevel::Intermediate);
        assert_eq!(ExperienceLevel::from_answer(Some("basic")), ExperienceLevel::Intermediate);
    }

    #[test]
    fn partial_answers_leave_fields_absent() {
        let summary = summarize(&answers(&[(2, "Digital marketing")]));
        assert_eq!(summary.level, ExperienceLevel::Intermediate);
        assert_eq!(summary.interest.as_deref(), Some("Digital marketing"));
        assert_eq!(summary.time_commitment, None);
        assert_eq!(summary.goal, None);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let summary = summarize(&answers(&[
            (1, "Complete beginner"),
            (2, "Digital marketing"),
            (3, "30 minutes"),
            (4, "Start a business"),
        ]));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "level": "beginner",
                "interest": "Digital marketing",
                "timeCommitment": "30 minutes",
                "goal": "Start a business",
            })
        );
    }

    #[test]
    fn missing_fields_are_not_serialized() {
        let json = serde_json::to_value(summarize(&AnswerMap::new())).unwrap();
        assert_eq!(json, serde_json::json!({ "level": "intermediate" }));
    }
}
