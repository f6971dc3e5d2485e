use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod certificate;
mod config;
mod forms;
mod shell;
mod onboarding {
    pub mod questions;
    pub mod recommend;
    pub mod session;
    pub mod summary;
}
mod components {
    pub mod certificate_viewer;
    pub mod footer;
    pub mod language_selector;
    pub mod login_modal;
    pub mod navigation;
    pub mod onboarding_quiz;
    pub mod overlays;
    pub mod sections;
    pub mod skill_snap_card;
}
mod pages {
    pub mod about;
    pub mod challenges;
    pub mod contact;
    pub mod features;
    pub mod home;
    pub mod not_found;
    pub mod technology;
}

use components::{footer::Footer, navigation::Navigation, overlays::Overlays};
use pages::{
    about::About, challenges::Challenges, contact::Contact, features::Features, home::Home,
    not_found::NotFound, technology::Technology,
};
use shell::{ShellContext, ShellState};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/challenges")]
    Challenges,
    #[at("/features")]
    Features,
    #[at("/technology")]
    Technology,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Challenges => {
            info!("Rendering Challenges page");
            html! { <Challenges /> }
        }
        Route::Features => {
            info!("Rendering Features page");
            html! { <Features /> }
        }
        Route::Technology => {
            info!("Rendering Technology page");
            html! { <Technology /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let shell = use_reducer(ShellState::default);

    html! {
        <ContextProvider<ShellContext> context={shell}>
            <BrowserRouter>
                <Navigation />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
                <Overlays />
            </BrowserRouter>
            <style>{GLOBAL_STYLES}</style>
        </ContextProvider<ShellContext>>
    }
}

const GLOBAL_STYLES: &str = r#"
body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    color: #111827;
    background: #fff;
}
* {
    box-sizing: border-box;
}
.page {
    min-height: 100vh;
}
.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.container.narrow {
    max-width: 56rem;
}
.centered {
    text-align: center;
}
.two-column {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
    gap: 3rem;
    align-items: center;
}
.section {
    padding: 4rem 0;
}
.white {
    background: #fff;
}
.grey {
    background: #f9fafb;
}
.section.blue {
    background: linear-gradient(90deg, #2563eb, #4338ca);
    color: #fff;
}
.section.blue .section-heading p,
.section.blue .lead {
    color: #dbeafe;
}
.section-heading {
    text-align: center;
    margin-bottom: 3rem;
}
.section-heading h2,
.section h2 {
    font-size: 2rem;
    margin-bottom: 1rem;
}
.section-heading p {
    font-size: 1.1rem;
    color: #4b5563;
}
.lead {
    font-size: 1.15rem;
    line-height: 1.7;
    color: #374151;
}
.muted {
    color: #6b7280;
    font-size: 0.9rem;
}
.panel {
    background: #fff;
    border-radius: 16px;
    padding: 2rem;
    margin-bottom: 4rem;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
}
.card-grid {
    display: grid;
    gap: 2rem;
    margin-bottom: 3rem;
}
.card-grid.two {
    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
}
.card-grid.three {
    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
}
.card-grid.four {
    grid-template-columns: repeat(auto-fit, minmax(13rem, 1fr));
}
.centered-cards .info-card {
    text-align: center;
}
.centered-cards .info-card-heading {
    flex-direction: column;
}
.info-card {
    background: #fff;
    border-radius: 16px;
    padding: 2rem;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
    transition: box-shadow 0.3s ease;
}
.info-card:hover {
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
}
.info-card-heading,
.feature-card-heading {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1rem;
}
.info-card h3 {
    margin: 0;
    font-size: 1.2rem;
}
.info-card p {
    color: #4b5563;
    line-height: 1.6;
}
.info-icon {
    background: #f9fafb;
    border-radius: 8px;
    padding: 0.75rem;
    font-size: 1.5rem;
}
.feature-rows {
    display: flex;
    flex-direction: column;
    gap: 4rem;
}
.feature-row {
    display: flex;
    align-items: center;
    gap: 3rem;
}
.feature-row.reversed {
    flex-direction: row-reverse;
}
.feature-text,
.feature-image {
    flex: 1;
}
.feature-image img {
    width: 100%;
    height: 16rem;
    object-fit: cover;
    border-radius: 16px;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
}
.feature-card {
    background: #fff;
    border-radius: 16px;
    padding: 2rem;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
}
.feature-card h2 {
    margin: 0;
    font-size: 1.5rem;
}
.feature-summary {
    font-size: 1.1rem;
    font-weight: 500;
    color: #374151;
}
.feature-details {
    color: #4b5563;
    line-height: 1.7;
}
.dot-list {
    list-style: none;
    padding: 0;
}
.dot-list li {
    position: relative;
    padding-left: 1.5rem;
    margin-bottom: 0.75rem;
    color: #4b5563;
}
.dot-list li::before {
    content: "";
    position: absolute;
    left: 0;
    top: 0.45rem;
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 50%;
    background: #2563eb;
}
@media (max-width: 900px) {
    .feature-row,
    .feature-row.reversed {
        flex-direction: column;
    }
}
.page-hero {
    color: #fff;
    padding: 5rem 0;
}
.page-hero h1 {
    font-size: 2.75rem;
    margin-bottom: 1.5rem;
}
.page-hero p {
    font-size: 1.25rem;
    opacity: 0.85;
    max-width: 48rem;
    margin: 0 auto;
}
.hero-warning {
    background: linear-gradient(90deg, #dc2626, #7e22ce);
}
.hero-blue {
    background: linear-gradient(90deg, #2563eb, #4338ca);
}
.hero-dark {
    background: linear-gradient(90deg, #111827, #1e3a8a);
}
.hero-indigo {
    background: linear-gradient(90deg, #4f46e5, #7e22ce);
}
.hero-purple {
    background: linear-gradient(90deg, #2563eb, #7e22ce);
}
.cta-section {
    padding: 4rem 0;
    color: #fff;
}
.cta-section.dark {
    background: #111827;
}
.cta-section.green {
    background: linear-gradient(90deg, #16a34a, #2563eb);
}
.cta-section p {
    font-size: 1.2rem;
    line-height: 1.7;
    opacity: 0.85;
    margin-bottom: 2rem;
}
.cta-links {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1rem;
}
.primary-button,
.secondary-button,
.outline-button,
.light-button,
.ghost-button {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.75rem 2rem;
    border-radius: 8px;
    font-size: 1rem;
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
    transition: all 0.2s ease;
}
.primary-button {
    background: #2563eb;
    color: #fff;
    border: none;
}
.primary-button:hover {
    background: #1d4ed8;
}
.secondary-button {
    background: #f3f4f6;
    color: #374151;
    border: none;
}
.secondary-button:hover {
    background: #e5e7eb;
}
.outline-button,
.ghost-button {
    background: transparent;
    color: #fff;
    border: 2px solid #fff;
}
.outline-button:hover,
.ghost-button:hover {
    background: #fff;
    color: #2563eb;
}
.light-button {
    background: #fff;
    color: #2563eb;
    border: none;
}
.light-button:hover {
    background: #eff6ff;
}
.full-width {
    width: 100%;
}
.text-link {
    color: #2563eb;
    text-decoration: none;
}
.text-link:hover {
    color: #1d4ed8;
    text-decoration: underline;
}
.mono {
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
}
.badge {
    border-radius: 999px;
    padding: 0.2rem 0.6rem;
    font-size: 0.75rem;
    font-weight: 500;
}
.badge-beginner { background: #dcfce7; color: #166534; }
.badge-intermediate { background: #fef9c3; color: #854d0e; }
.badge-advanced { background: #fee2e2; color: #991b1b; }
.badge-category { background: #f3f4f6; color: #6b7280; }
.modal-overlay {
    position: fixed;
    inset: 0;
    z-index: 100;
    background: rgba(0, 0, 0, 0.5);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}
.modal-content {
    background: #fff;
    border-radius: 16px;
    width: 100%;
    max-height: 90vh;
    overflow-y: auto;
    padding: 2rem;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}
.modal-narrow {
    max-width: 28rem;
}
.modal-wide {
    max-width: 48rem;
}
.modal-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1.5rem;
}
.modal-header h2 {
    margin: 0;
    font-size: 1.5rem;
}
.modal-close {
    background: none;
    border: none;
    font-size: 1.25rem;
    color: #9ca3af;
    cursor: pointer;
}
.modal-close:hover {
    color: #4b5563;
}
"#;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).expect("error initializing log");
    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
