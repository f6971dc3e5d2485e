use std::rc::Rc;

use yew::prelude::*;

use crate::onboarding::recommend::recommend;
use crate::onboarding::session::{GoBack, QuizSession};
use crate::onboarding::summary::ResultSummary;

#[derive(Debug, PartialEq)]
pub enum QuizAction {
    Select(String),
    Back,
}

impl Reducible for QuizSession {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            QuizAction::Select(answer) => Rc::new(self.select_answer(&answer)),
            QuizAction::Back => match self.go_back() {
                GoBack::Previous(session) => Rc::new(session),
                GoBack::Close => self,
            },
        }
    }
}

/// What the back arrow does: step the reducer back, or `None` when the quiz
/// should close instead.
fn back_target(session: &QuizSession) -> Option<QuizAction> {
    match session.go_back() {
        GoBack::Previous(_) => Some(QuizAction::Back),
        GoBack::Close => None,
    }
}

#[derive(Properties, PartialEq)]
pub struct OnboardingQuizProps {
    pub on_complete: Callback<ResultSummary>,
    pub on_close: Callback<()>,
}

/// Aptitude questionnaire shown as a modal. The session lives only as long as
/// the component is mounted.
#[function_component(OnboardingQuiz)]
pub fn onboarding_quiz(props: &OnboardingQuizProps) -> Html {
    let session = use_reducer(QuizSession::new);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if session.is_completed() {
        let summary = session.summary();
        let recommendations = recommend(&summary);
        let start = {
            let on_complete = props.on_complete.clone();
            Callback::from(move |_: MouseEvent| on_complete.emit(summary.clone()))
        };

        return html! {
            <div class="modal-overlay">
                <div class="modal-content modal-narrow quiz-complete">
                    <div class="quiz-check">{"✓"}</div>
                    <h3>{"Assessment Complete!"}</h3>
                    <p>{"We've created a personalized learning path just for you based on your responses."}</p>
                    <ol class="learning-path">
                        { for recommendations.iter().map(|rec| html! {
                            <li key={rec.course.name}>
                                <strong>{rec.course.name}</strong>
                                <span class={rec.course.difficulty.badge_class()}>{rec.course.difficulty.label()}</span>
                                <small>{&rec.reason}</small>
                            </li>
                        }) }
                    </ol>
                    <button class="primary-button full-width" onclick={start}>{"Start Your Journey"}</button>
                    <button class="quiz-later" onclick={close}>{"Maybe Later"}</button>
                </div>
                <style>{QUIZ_STYLES}</style>
            </div>
        };
    }

    let Some(question) = session.current_question() else {
        return html! {};
    };

    let back = {
        let session = session.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| match back_target(&session) {
            Some(action) => session.dispatch(action),
            None => on_close.emit(()),
        })
    };

    let choose = |option: &'static str| {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(QuizAction::Select(option.to_string())))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal-content modal-narrow">
                <div class="modal-header">
                    <button class="modal-close" onclick={back}>{"←"}</button>
                    <span class="quiz-position">
                        {format!("{} of {}", session.position(), session.total())}
                    </span>
                </div>

                <div class="quiz-progress">
                    <div class="quiz-progress-bar" style={format!("width: {}%;", session.progress_percent())}></div>
                </div>
                <span class="quiz-category">{question.category.label()}</span>
                <h3 class="quiz-prompt">{question.prompt}</h3>

                <div class="quiz-options">
                    { for question.options.iter().map(|option| html! {
                        <button key={*option} class="quiz-option" onclick={choose(*option)}>
                            <span>{*option}</span>
                            <span class="quiz-chevron">{"›"}</span>
                        </button>
                    }) }
                </div>
            </div>
            <style>{QUIZ_STYLES}</style>
        </div>
    }
}

const QUIZ_STYLES: &str = r#"
.quiz-position {
    color: #6b7280;
    font-size: 0.9rem;
}
.quiz-progress {
    background: #e5e7eb;
    border-radius: 999px;
    height: 0.5rem;
    margin-bottom: 1rem;
}
.quiz-progress-bar {
    background: #2563eb;
    border-radius: 999px;
    height: 0.5rem;
    transition: width 0.3s ease;
}
.quiz-category {
    text-transform: uppercase;
    letter-spacing: 0.05em;
    font-size: 0.7rem;
    color: #6b7280;
}
.quiz-prompt {
    font-size: 1.25rem;
    color: #111827;
    margin: 0.25rem 0 1.5rem;
}
.quiz-options {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}
.quiz-option {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem;
    background: #fff;
    border: 1px solid #e5e7eb;
    border-radius: 8px;
    text-align: left;
    color: #374151;
    font-size: 1rem;
    cursor: pointer;
    transition: all 0.2s ease;
}
.quiz-option:hover {
    border-color: #3b82f6;
    background: #eff6ff;
    color: #1d4ed8;
}
.quiz-chevron {
    color: #9ca3af;
    font-size: 1.25rem;
}
.quiz-complete {
    text-align: center;
}
.quiz-check {
    color: #22c55e;
    font-size: 3.5rem;
}
.learning-path {
    text-align: left;
    margin: 1.5rem 0;
    padding-left: 1.25rem;
}
.learning-path li {
    margin-bottom: 0.75rem;
}
.learning-path strong {
    margin-right: 0.5rem;
}
.learning-path small {
    display: block;
    color: #6b7280;
}
.quiz-later {
    margin-top: 0.75rem;
    background: none;
    border: none;
    color: #4b5563;
    cursor: pointer;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::session::QuizState;

    #[test]
    fn back_on_first_question_keeps_the_same_session() {
        let session = Rc::new(QuizSession::new());
        let next = session.clone().reduce(QuizAction::Back);
        assert!(Rc::ptr_eq(&session, &next));
    }

    #[test]
    fn back_on_first_question_closes_the_quiz() {
        let session = QuizSession::new();
        assert_eq!(back_target(&session), None);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn back_after_an_answer_steps_the_reducer() {
        let session = QuizSession::new().select_answer("Complete beginner");
        assert_eq!(back_target(&session), Some(QuizAction::Back));

        let first = Rc::new(session).reduce(QuizAction::Back);
        assert_eq!(first.state(), QuizState::InProgress(0));
        assert_eq!(back_target(&first), None);
        assert_eq!(first.answers().len(), 1);
    }

    #[test]
    fn reducer_walks_through_the_questionnaire() {
        let mut session = Rc::new(QuizSession::new());
        for answer in ["Complete beginner", "Digital marketing", "30 minutes"] {
            session = session.reduce(QuizAction::Select(answer.to_string()));
        }
        session = session.reduce(QuizAction::Back);
        assert_eq!(session.state(), QuizState::InProgress(2));
        session = session.reduce(QuizAction::Select("1 hour".to_string()));
        session = session.reduce(QuizAction::Select("Start a business".to_string()));
        assert!(session.is_completed());
        assert_eq!(session.summary().time_commitment.as_deref(), Some("1 hour"));
    }
}
