use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::COURSES;
use crate::forms::{bind_input, bind_select, LoginCredentials};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LoginModalProps {
    pub on_close: Callback<()>,
    pub on_login: Callback<LoginCredentials>,
}

#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    let form = use_state(LoginCredentials::default);

    let onsubmit = {
        let form = form.clone();
        let on_login = props.on_login.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_login.emit((*form).clone());
            on_close.emit(());
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal-content modal-narrow">
                <div class="modal-header">
                    <h2>{"Welcome Back"}</h2>
                    <button class="modal-close" onclick={close.clone()}>{"✕"}</button>
                </div>

                <form class="login-form" {onsubmit}>
                    <label for="course">{"Course"}</label>
                    <select
                        id="course"
                        name="course"
                        required={true}
                        onchange={bind_select(&form, |f, v| f.course = v)}
                    >
                        <option value="" selected={form.course.is_empty()}>{"Select your course"}</option>
                        { for COURSES.iter().map(|course| html! {
                            <option value={course.name} selected={form.course == course.name}>
                                {course.name}
                            </option>
                        }) }
                    </select>

                    <label for="userId">{"User ID"}</label>
                    <input
                        type="text"
                        id="userId"
                        name="userId"
                        required={true}
                        placeholder="Enter your User ID"
                        value={form.user_id.clone()}
                        oninput={bind_input(&form, |f, v| f.user_id = v)}
                    />

                    <label for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        required={true}
                        placeholder="Enter your password"
                        value={form.password.clone()}
                        oninput={bind_input(&form, |f, v| f.password = v)}
                    />

                    <button type="submit" class="primary-button full-width">
                        {"Access Learning Platform"}
                    </button>
                </form>

                <p class="modal-footnote">
                    {"Don't have an account? "}
                    <span onclick={close}>
                        <Link<Route> to={Route::Contact} classes="text-link">
                            {"Contact your local coordinator"}
                        </Link<Route>>
                    </span>
                </p>
            </div>
            <style>
                {r#"
                .login-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .login-form label {
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #374151;
                    margin-top: 0.5rem;
                }
                .login-form input,
                .login-form select {
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font-size: 1rem;
                }
                .login-form button {
                    margin-top: 1rem;
                }
                .modal-footnote {
                    margin-top: 1.5rem;
                    text-align: center;
                    font-size: 0.9rem;
                    color: #4b5563;
                }
                "#}
            </style>
        </div>
    }
}
