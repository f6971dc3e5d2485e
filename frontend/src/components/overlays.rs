use log::{error, info};
use yew::prelude::*;

use crate::certificate::sample_certificate;
use crate::components::certificate_viewer::CertificateViewer;
use crate::components::login_modal::LoginModal;
use crate::components::onboarding_quiz::OnboardingQuiz;
use crate::forms::{self, LoginCredentials};
use crate::onboarding::summary::ResultSummary;
use crate::shell::{Overlay, ShellAction, ShellContext};

/// Renders whichever modal the shell currently has open.
#[function_component(Overlays)]
pub fn overlays() -> Html {
    let shell = use_context::<ShellContext>();
    let Some(shell) = shell else {
        return html! {};
    };

    let on_close = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.dispatch(ShellAction::Close))
    };

    match shell.overlay {
        Overlay::Hidden => html! {},
        Overlay::Login => {
            let on_login = Callback::from(|credentials: LoginCredentials| forms::submit(&credentials));
            html! { <LoginModal {on_close} {on_login} /> }
        }
        Overlay::Quiz => {
            let on_complete = {
                let shell = shell.clone();
                Callback::from(move |summary: ResultSummary| {
                    match serde_json::to_string_pretty(&summary) {
                        Ok(json) => gloo_console::log!("Quiz results:", json),
                        Err(e) => error!("Failed to encode quiz results: {}", e),
                    }
                    info!("Onboarding finished at level {}", summary.level.as_str());
                    shell.dispatch(ShellAction::Open(Overlay::Login));
                })
            };
            html! { <OnboardingQuiz {on_complete} {on_close} /> }
        }
        Overlay::Certificate => html! {
            <CertificateViewer {on_close} certificate={sample_certificate()} />
        },
    }
}
