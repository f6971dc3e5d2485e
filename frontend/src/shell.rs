use std::rc::Rc;

use log::debug;
use yew::prelude::*;

/// Which modal sits over the page. Only one is ever shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Hidden,
    Login,
    Quiz,
    Certificate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Bengali,
    Telugu,
    Tamil,
    Marathi,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Hindi,
        Language::Bengali,
        Language::Telugu,
        Language::Tamil,
        Language::Marathi,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Bengali => "bn",
            Language::Telugu => "te",
            Language::Tamil => "ta",
            Language::Marathi => "mr",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Bengali => "Bengali",
            Language::Telugu => "Telugu",
            Language::Tamil => "Tamil",
            Language::Marathi => "Marathi",
        }
    }

    pub fn native(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Bengali => "বাংলা",
            Language::Telugu => "తెలుగు",
            Language::Tamil => "தமிழ்",
            Language::Marathi => "मराठी",
        }
    }
}

/// UI state shared by every page: the open overlay and the language label.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ShellState {
    pub overlay: Overlay,
    pub language: Language,
}

pub enum ShellAction {
    Open(Overlay),
    Close,
    SelectLanguage(Language),
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ShellAction::Open(overlay) => ShellState {
                overlay,
                ..(*self).clone()
            },
            ShellAction::Close => ShellState {
                overlay: Overlay::Hidden,
                ..(*self).clone()
            },
            ShellAction::SelectLanguage(language) => ShellState {
                language,
                ..(*self).clone()
            },
        };
        if next == *self {
            return self;
        }
        debug!("Shell {:?} -> {:?}", *self, next);
        Rc::new(next)
    }
}

pub type ShellContext = UseReducerHandle<ShellState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: ShellState, action: ShellAction) -> ShellState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn starts_with_nothing_open_in_english() {
        let state = ShellState::default();
        assert_eq!(state.overlay, Overlay::Hidden);
        assert_eq!(state.language, Language::English);
    }

    #[test]
    fn opening_replaces_the_visible_overlay() {
        let state = reduce(ShellState::default(), ShellAction::Open(Overlay::Quiz));
        assert_eq!(state.overlay, Overlay::Quiz);
        let state = reduce(state, ShellAction::Open(Overlay::Login));
        assert_eq!(state.overlay, Overlay::Login);
        let state = reduce(state, ShellAction::Close);
        assert_eq!(state.overlay, Overlay::Hidden);
    }

    #[test]
    fn language_change_leaves_overlay_alone() {
        let state = reduce(ShellState::default(), ShellAction::Open(Overlay::Certificate));
        let state = reduce(state, ShellAction::SelectLanguage(Language::Tamil));
        assert_eq!(state.overlay, Overlay::Certificate);
        assert_eq!(state.language.name(), "Tamil");
    }

    #[test]
    fn unchanged_state_is_not_reallocated() {
        let state = Rc::new(ShellState::default());
        let next = state.clone().reduce(ShellAction::Close);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn language_codes_are_unique() {
        let mut codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), Language::ALL.len());
    }
}
