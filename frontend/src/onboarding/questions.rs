#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionCategory {
    Technical,
    Interest,
    Availability,
    Goal,
}

impl QuestionCategory {
    pub fn label(self) -> &'static str {
        match self {
            QuestionCategory::Technical => "technical",
            QuestionCategory::Interest => "interest",
            QuestionCategory::Availability => "availability",
            QuestionCategory::Goal => "goal",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub category: QuestionCategory,
}

pub const EXPERIENCE_QUESTION: u32 = 1;
pub const INTEREST_QUESTION: u32 = 2;
pub const TIME_QUESTION: u32 = 3;
pub const GOAL_QUESTION: u32 = 4;

/// The onboarding questionnaire, asked in order.
pub const QUESTIONS: &[Question] = &[
    Question {
        id: EXPERIENCE_QUESTION,
        prompt: "What is your current experience with computers?",
        options: &[
            "Complete beginner",
            "Basic usage (email, browsing)",
            "Intermediate (office software)",
            "Advanced user",
        ],
        category: QuestionCategory::Technical,
    },
    Question {
        id: INTEREST_QUESTION,
        prompt: "Which digital skill interests you most?",
        options: &[
            "Basic computer literacy",
            "Digital marketing",
            "Data entry & analysis",
            "Online business skills",
        ],
        category: QuestionCategory::Interest,
    },
    Question {
        id: TIME_QUESTION,
        prompt: "How much time can you dedicate to learning daily?",
        options: &["10-15 minutes", "30 minutes", "1 hour", "More than 1 hour"],
        category: QuestionCategory::Availability,
    },
    Question {
        id: GOAL_QUESTION,
        prompt: "What is your primary goal?",
        options: &[
            "Find employment",
            "Start a business",
            "Improve current job",
            "Personal development",
        ],
        category: QuestionCategory::Goal,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_question_offers_a_real_choice() {
        for question in QUESTIONS {
            assert!(question.options.len() >= 2, "question {} has too few options", question.id);
        }
    }

    #[test]
    fn identifiers_are_unique_and_ordered() {
        let ids: Vec<u32> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), QUESTIONS.len());
    }

    #[test]
    fn categories_follow_question_order() {
        let categories: Vec<QuestionCategory> = QUESTIONS.iter().map(|q| q.category).collect();
        assert_eq!(
            categories,
            vec![
                QuestionCategory::Technical,
                QuestionCategory::Interest,
                QuestionCategory::Availability,
                QuestionCategory::Goal,
            ]
        );
    }
}
