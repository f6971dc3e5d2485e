use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const QUICK_LINKS: &[(Route, &str)] = &[
    (Route::Challenges, "Challenges"),
    (Route::Features, "Features"),
    (Route::Technology, "Technology"),
    (Route::About, "About Us"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <span>{"📘"}</span>
                        <span>{config::SITE_NAME}</span>
                    </div>
                    <p>
                        {"Empowering rural youth and women by providing tailored digital skills training to unlock their potential and transform their futures."}
                    </p>
                </div>

                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        { for QUICK_LINKS.iter().map(|(route, label)| html! {
                            <li>
                                <Link<Route> to={route.clone()} classes="footer-link">{*label}</Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h3>{"Contact Info"}</h3>
                    <ul>
                        <li>{"✉ "}{config::CONTACT_EMAIL}</li>
                        <li>{"☎ "}{config::CONTACT_PHONE}</li>
                        <li>{"⌖ "}{config::CONTACT_LOCATION}</li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>
                    {format!(
                        "© 2024 {}. Built by students at {}. All rights reserved.",
                        config::SITE_NAME,
                        config::INSTITUTE
                    )}
                </p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #fff;
                    padding: 3rem 1.5rem 2rem;
                }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 2rem;
                }
                .footer-brand {
                    display: flex;
                    gap: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .site-footer p,
                .site-footer li {
                    color: #d1d5db;
                    line-height: 1.6;
                }
                .site-footer h3 {
                    font-size: 1.1rem;
                    margin-bottom: 1rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .footer-link {
                    color: #d1d5db;
                    text-decoration: none;
                }
                .footer-link:hover {
                    color: #60a5fa;
                }
                .footer-bottom {
                    border-top: 1px solid #1f2937;
                    margin-top: 2rem;
                    padding-top: 2rem;
                    text-align: center;
                }
                .footer-bottom p {
                    color: #9ca3af;
                }
                "#}
            </style>
        </footer>
    }
}
