use std::collections::BTreeMap;

use log::{debug, warn};

use super::questions::{Question, QUESTIONS};
use super::summary::{summarize, ResultSummary};

/// Selected option text keyed by question id.
pub type AnswerMap = BTreeMap<u32, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizState {
    InProgress(usize),
    Completed,
}

/// Outcome of stepping back from the current question.
#[derive(Debug, PartialEq)]
pub enum GoBack {
    Previous(QuizSession),
    /// Already at the first question; the caller should close the quiz.
    Close,
}

/// Progress through the onboarding questionnaire.
///
/// Transitions never mutate in place: `select_answer` and `go_back` hand back the next
/// session so the owning component can swap it in through its reducer.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSession {
    state: QuizState,
    answers: AnswerMap,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            state: QuizState::InProgress(0),
            answers: AnswerMap::new(),
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn is_completed(&self) -> bool {
        self.state == QuizState::Completed
    }

    pub fn total(&self) -> usize {
        QUESTIONS.len()
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            QuizState::InProgress(index) => QUESTIONS.get(index),
            QuizState::Completed => None,
        }
    }

    /// One-based position for the "n of N" label.
    pub fn position(&self) -> usize {
        match self.state {
            QuizState::InProgress(index) => index + 1,
            QuizState::Completed => self.total(),
        }
    }

    pub fn progress_percent(&self) -> f64 {
        self.position() as f64 / self.total() as f64 * 100.0
    }

    pub fn select_answer(&self, answer: &str) -> QuizSession {
        let QuizState::InProgress(index) = self.state else {
            warn!("Ignoring answer {:?} on a completed quiz", answer);
            return self.clone();
        };
        let Some(question) = QUESTIONS.get(index) else {
            return self.clone();
        };

        let mut answers = self.answers.clone();
        answers.insert(question.id, answer.to_string());

        let state = if index + 1 == self.total() {
            QuizState::Completed
        } else {
            QuizState::InProgress(index + 1)
        };
        debug!("Quiz answer {} recorded, now {:?}", question.id, state);

        QuizSession { state, answers }
    }

    pub fn go_back(&self) -> GoBack {
        match self.state {
            QuizState::InProgress(index) if index > 0 => GoBack::Previous(QuizSession {
                state: QuizState::InProgress(index - 1),
                answers: self.answers.clone(),
            }),
            _ => GoBack::Close,
        }
    }

    pub fn summary(&self) -> ResultSummary {
        summarize(&self.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::summary::ExperienceLevel;

    fn answer_all(choices: &[&str]) -> QuizSession {
        choices
            .iter()
            .fold(QuizSession::new(), |session, choice| session.select_answer(choice))
    }

    #[test]
    fn starts_at_first_question_with_no_answers() {
        let session = QuizSession::new();
        assert_eq!(session.state(), QuizState::InProgress(0));
        assert!(session.answers().is_empty());
        assert!(!session.is_completed());
        assert_eq!(session.current_question().map(|q| q.id), Some(1));
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn index_stays_in_bounds_until_completion() {
        let mut session = QuizSession::new();
        for (i, question) in QUESTIONS.iter().enumerate() {
            assert_eq!(session.state(), QuizState::InProgress(i));
            assert!(session.current_question().is_some());
            session = session.select_answer(question.options[0]);
        }
        assert_eq!(session.state(), QuizState::Completed);
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn last_answer_completes_with_full_summary() {
        let session = answer_all(&[
            "Complete beginner",
            "Digital marketing",
            "30 minutes",
            "Start a business",
        ]);
        assert!(session.is_completed());
        assert_eq!(session.answers().len(), 4);

        let summary = session.summary();
        assert_eq!(summary.level, ExperienceLevel::Beginner);
        assert_eq!(summary.interest.as_deref(), Some("Digital marketing"));
        assert_eq!(summary.time_commitment.as_deref(), Some("30 minutes"));
        assert_eq!(summary.goal.as_deref(), Some("Start a business"));
    }

    #[test]
    fn going_back_keeps_answer_until_overwritten() {
        let session = answer_all(&["Complete beginner", "Digital marketing"]);
        assert_eq!(session.state(), QuizState::InProgress(2));

        let GoBack::Previous(back) = session.go_back() else {
            panic!("expected to step back");
        };
        assert_eq!(back.state(), QuizState::InProgress(1));
        assert_eq!(back.answers().get(&2).map(String::as_str), Some("Digital marketing"));

        let changed = back.select_answer("Online business skills");
        assert_eq!(changed.state(), QuizState::InProgress(2));
        assert_eq!(changed.answers().len(), 2);
        assert_eq!(
            changed.answers().get(&2).map(String::as_str),
            Some("Online business skills")
        );
    }

    #[test]
    fn going_back_at_first_question_asks_to_close() {
        let session = QuizSession::new();
        assert_eq!(session.go_back(), GoBack::Close);
        assert!(session.answers().is_empty());
        assert_eq!(session.state(), QuizState::InProgress(0));
    }

    #[test]
    fn going_back_to_first_question_then_again_closes() {
        let session = QuizSession::new().select_answer("Advanced user");
        let GoBack::Previous(first) = session.go_back() else {
            panic!("expected to step back");
        };
        assert_eq!(first.go_back(), GoBack::Close);
        assert_eq!(first.answers().get(&1).map(String::as_str), Some("Advanced user"));
    }

    #[test]
    fn answers_after_completion_are_ignored() {
        let done = answer_all(&["Advanced user", "Digital marketing", "1 hour", "Find employment"]);
        let again = done.select_answer("Personal development");
        assert_eq!(again, done);
    }

    #[test]
    fn progress_tracks_position() {
        let session = QuizSession::new();
        assert_eq!(session.progress_percent(), 25.0);
        let session = session.select_answer("Complete beginner").select_answer("Digital marketing");
        assert_eq!(session.position(), 3);
        assert_eq!(session.progress_percent(), 75.0);
    }
}
