use log::{error, warn};
use serde::{Serialize, Serializer};
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// A form whose fields are only captured and echoed to the console.
pub trait CapturedForm: Serialize {
    /// Prefix for the console line.
    const LABEL: &'static str;
    /// Alert shown once the form has been logged.
    const ACKNOWLEDGEMENT: Option<&'static str> = None;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InterestSignup {
    pub name: String,
    pub email: String,
    pub location: String,
}

impl CapturedForm for InterestSignup {
    const LABEL: &'static str = "Form submitted:";
    const ACKNOWLEDGEMENT: Option<&'static str> =
        Some("Thank you for your interest! We will contact you soon.");
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub message: String,
}

impl CapturedForm for ContactMessage {
    const LABEL: &'static str = "Contact form submitted:";
    const ACKNOWLEDGEMENT: Option<&'static str> =
        Some("Thank you for your message! We will get back to you soon.");
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    pub course: String,
    pub user_id: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
}

impl CapturedForm for LoginCredentials {
    const LABEL: &'static str = "Login:";
}

fn redact<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&"*".repeat(value.chars().count()))
}

pub fn to_console_json<F: CapturedForm>(form: &F) -> Option<String> {
    match serde_json::to_string_pretty(form) {
        Ok(json) => Some(json),
        Err(e) => {
            error!("Failed to encode {}: {}", F::LABEL, e);
            None
        }
    }
}

/// Stand-in for a real submission: log the fields, then thank the user.
pub fn submit<F: CapturedForm>(form: &F) {
    if let Some(json) = to_console_json(form) {
        gloo_console::log!(F::LABEL, json);
    }
    if let Some(message) = F::ACKNOWLEDGEMENT {
        if let Some(window) = window() {
            if let Err(e) = window.alert_with_message(message) {
                warn!("Alert failed: {:?}", e);
            }
        }
    }
}

pub fn bind_input<F>(form: &UseStateHandle<F>, apply: fn(&mut F, String)) -> Callback<InputEvent>
where
    F: Clone + 'static,
{
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

pub fn bind_textarea<F>(form: &UseStateHandle<F>, apply: fn(&mut F, String)) -> Callback<InputEvent>
where
    F: Clone + 'static,
{
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

pub fn bind_select<F>(form: &UseStateHandle<F>, apply: fn(&mut F, String)) -> Callback<Event>
where
    F: Clone + 'static,
{
    let form = form.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, select.value());
        form.set(next);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn logged(form: &impl CapturedForm) -> Value {
        serde_json::from_str(&to_console_json(form).unwrap()).unwrap()
    }

    #[test]
    fn login_password_never_reaches_the_console() {
        let credentials = LoginCredentials {
            course: "Computer Fundamentals".to_string(),
            user_id: "learner42".to_string(),
            password: "hunter2".to_string(),
        };
        assert_eq!(
            logged(&credentials),
            json!({ "course": "Computer Fundamentals", "userId": "learner42", "password": "*******" })
        );
    }

    #[test]
    fn contact_message_is_logged_as_typed() {
        let message = ContactMessage {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            organization: String::new(),
            message: "Can we partner?".to_string(),
        };
        assert_eq!(
            logged(&message),
            json!({
                "name": "Asha",
                "email": "asha@example.com",
                "organization": "",
                "message": "Can we partner?",
            })
        );
    }

    #[test]
    fn only_public_forms_are_acknowledged() {
        assert!(InterestSignup::ACKNOWLEDGEMENT.is_some());
        assert!(ContactMessage::ACKNOWLEDGEMENT.is_some());
        assert!(LoginCredentials::ACKNOWLEDGEMENT.is_none());
    }

    #[test]
    fn cleared_signup_is_empty() {
        let signup = InterestSignup::default();
        assert_eq!(logged(&signup), json!({ "name": "", "email": "", "location": "" }));
    }
}
