use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::shell::{Language, ShellAction, ShellContext};

#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let shell = use_context::<ShellContext>();
    let is_open = use_bool_toggle(false);
    let node = use_node_ref();

    {
        let is_open = is_open.clone();
        use_click_away(node.clone(), move |_: Event| {
            if *is_open {
                is_open.toggle();
            }
        });
    }

    let Some(shell) = shell else {
        return html! {};
    };

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.toggle())
    };

    let choose = |language: Language| {
        let shell = shell.clone();
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            shell.dispatch(ShellAction::SelectLanguage(language));
            is_open.toggle();
        })
    };

    html! {
        <div class="language-selector" ref={node}>
            <button class="language-toggle" onclick={toggle}>
                <span class="language-globe">{"🌐"}</span>
                <span>{shell.language.name()}</span>
                <span class={classes!("language-caret", (*is_open).then(|| "open"))}>{"▾"}</span>
            </button>
            if *is_open {
                <div class="language-menu">
                    { for Language::ALL.iter().map(|language| html! {
                        <button key={language.code()} class="language-option" onclick={choose(*language)}>
                            <span>{language.name()}</span>
                            <span class="language-native">{language.native()}</span>
                        </button>
                    }) }
                </div>
            }
            <style>
                {r#"
                .language-selector {
                    position: relative;
                }
                .language-toggle {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 0.75rem;
                    background: none;
                    border: none;
                    color: #374151;
                    font-size: 0.9rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                .language-toggle:hover {
                    color: #2563eb;
                }
                .language-caret {
                    transition: transform 0.2s ease;
                }
                .language-caret.open {
                    transform: rotate(180deg);
                }
                .language-menu {
                    position: absolute;
                    right: 0;
                    margin-top: 0.5rem;
                    width: 12rem;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 8px;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                    padding: 0.5rem 0;
                    z-index: 60;
                }
                .language-option {
                    display: flex;
                    justify-content: space-between;
                    width: 100%;
                    padding: 0.5rem 1rem;
                    background: none;
                    border: none;
                    color: #374151;
                    font-size: 0.9rem;
                    cursor: pointer;
                }
                .language-option:hover {
                    background: #f9fafb;
                }
                .language-native {
                    color: #6b7280;
                }
                "#}
            </style>
        </div>
    }
}
