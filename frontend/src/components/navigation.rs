use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::language_selector::LanguageSelector;
use crate::config;
use crate::shell::{Overlay, ShellAction, ShellContext};
use crate::Route;

pub const NAV_ITEMS: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::Challenges, "Challenges"),
    (Route::Features, "Features"),
    (Route::Technology, "Technology"),
    (Route::About, "About"),
    (Route::Contact, "Contact"),
];

fn link_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let shell = use_context::<ShellContext>();
    let route = use_route::<Route>();
    let menu_open = use_bool_toggle(false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            if *menu_open {
                menu_open.toggle();
            }
        })
    };

    let open_login = {
        let close_menu = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(shell) = &shell {
                shell.dispatch(ShellAction::Open(Overlay::Login));
            }
            close_menu.emit(e);
        })
    };

    let links = NAV_ITEMS.iter().map(|(target, label)| {
        let active = route.as_ref() == Some(target);
        html! {
            <div onclick={close_menu.clone()}>
                <Link<Route> to={target.clone()} classes={link_class(active)}>
                    {*label}
                </Link<Route>>
            </div>
        }
    });

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-icon">{"📘"}</span>
                    {config::SITE_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    {if *menu_open { "✕" } else { "☰" }}
                </button>

                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    <div class="nav-links">
                        { for links }
                    </div>
                    <div class="nav-actions">
                        <LanguageSelector />
                        <button class="primary-button nav-login" onclick={open_login}>
                            {"⇥ Login"}
                        </button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: #fff;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #111827;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-links {
                    display: flex;
                    gap: 0.5rem;
                }
                .nav-link {
                    padding: 0.5rem 0.75rem;
                    border-radius: 6px;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #374151;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }
                .nav-link:hover {
                    background: #eff6ff;
                    color: #2563eb;
                }
                .nav-link.active {
                    background: #2563eb;
                    color: #fff;
                }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    color: #374151;
                    cursor: pointer;
                }
                @media (max-width: 900px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        align-items: stretch;
                        position: absolute;
                        top: 4rem;
                        left: 0;
                        right: 0;
                        background: #fff;
                        border-top: 1px solid #e5e7eb;
                        padding: 1rem;
                        gap: 1rem;
                    }
                    .nav-links,
                    .nav-actions {
                        flex-direction: column;
                        align-items: stretch;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_exactly_one_nav_entry() {
        let routes: Vec<&Route> = NAV_ITEMS.iter().map(|(route, _)| route).collect();
        for (i, route) in routes.iter().enumerate() {
            assert!(!routes[i + 1..].contains(route), "{} listed twice", route.to_path());
        }
        assert_eq!(routes.len(), 6);
    }

    #[test]
    fn paths_match_the_site_map() {
        let paths: Vec<String> = NAV_ITEMS.iter().map(|(route, _)| route.to_path()).collect();
        assert_eq!(
            paths,
            vec!["/", "/challenges", "/features", "/technology", "/about", "/contact"]
        );
    }

    #[test]
    fn active_link_is_highlighted() {
        assert_eq!(link_class(true), "nav-link active");
        assert_eq!(link_class(false), "nav-link");
    }
}
