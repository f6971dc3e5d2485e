use yew::prelude::*;

use crate::catalog::{Difficulty, SkillSnap};
use crate::components::sections::{pexels_url, render_info_card, InfoCard};
use crate::components::skill_snap_card::render_snap;
use crate::forms::{self, bind_input, InterestSignup};
use crate::shell::{Overlay, ShellAction, ShellContext};

const UNIQUE_FEATURES: &[InfoCard] = &[
    InfoCard {
        icon: "🎯",
        title: "Precision Over Volume",
        description: "We focus on delivering targeted, high-quality content that matches individual learner needs rather than overwhelming them with excessive information.",
    },
    InfoCard {
        icon: "⚡",
        title: "Microlearning Format",
        description: "Daily 10-15 minute lessons designed for busy schedules, making learning manageable and sustainable for working individuals.",
    },
    InfoCard {
        icon: "📶",
        title: "Lightweight, Offline-First Design",
        description: "Built for low-connectivity environments, our platform works seamlessly on basic devices with minimal internet requirements.",
    },
];

const PREVIEW_SNAPS: &[SkillSnap] = &[
    SkillSnap {
        title: "Computer Basics: Getting Started",
        duration_minutes: 12,
        description: "Learn fundamental computer operations and navigation",
        difficulty: Difficulty::Beginner,
        category: "Digital Literacy",
        is_completed: true,
        is_offline_available: true,
    },
    SkillSnap {
        title: "Email Communication Skills",
        duration_minutes: 15,
        description: "Master professional email writing and management",
        difficulty: Difficulty::Beginner,
        category: "Communication",
        is_completed: false,
        is_offline_available: true,
    },
];

const CERTIFICATE_POINTS: &[&str] = &[
    "Instantly generated upon course completion",
    "QR code for quick verification",
    "Recognized by local employers",
];

#[function_component(Home)]
pub fn home() -> Html {
    let shell = use_context::<ShellContext>();
    let signup = use_state(InterestSignup::default);

    let open = |overlay: Overlay| {
        let shell = shell.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(shell) = &shell {
                shell.dispatch(ShellAction::Open(overlay));
            }
        })
    };

    let onsubmit = {
        let shell = shell.clone();
        let signup = signup.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            forms::submit(&*signup);
            if let Some(shell) = &shell {
                shell.dispatch(ShellAction::Open(Overlay::Quiz));
            }
            signup.set(InterestSignup::default());
        })
    };

    html! {
        <div class="page">
            <section class="home-hero">
                <div class="container two-column">
                    <div>
                        <h1>
                            {"SkillBridge: "}
                            <span class="hero-accent">{"Digital Skills for All"}</span>
                        </h1>
                        <p class="hero-lead">
                            {"Empowering rural youth and women by providing tailored digital skills training to unlock their potential and transform their futures."}
                        </p>
                        <div class="hero-actions">
                            <button class="light-button" onclick={open(Overlay::Quiz)}>
                                {"Unlock Your Digital Future →"}
                            </button>
                            <button class="ghost-button" onclick={open(Overlay::Login)}>
                                {"Get Started"}
                            </button>
                        </div>
                    </div>
                    <div class="hero-frame">
                        <img src={pexels_url("3184460")} alt="Rural learners using digital devices" />
                    </div>
                </div>
            </section>

            <section class="section white">
                <div class="container narrow centered">
                    <h2>{"About SkillBridge"}</h2>
                    <p class="lead">
                        {"SkillBridge offers a flexible, engaging platform that addresses the unique challenges faced by learners in rural India."}
                    </p>
                    <p class="lead">
                        {"By emphasizing personalized skill tracks and microlearning, it empowers individuals to acquire vital digital skills at their own pace, bridging the gap to job opportunities."}
                    </p>
                </div>
            </section>

            <section class="section grey">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"What Makes Us Unique"}</h2>
                        <p>{"Our innovative approach to digital skills training"}</p>
                    </div>
                    <div class="card-grid three">
                        { for UNIQUE_FEATURES.iter().map(render_info_card) }
                    </div>
                </div>
            </section>

            <section class="section white">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Daily SkillSnaps"}</h2>
                        <p>{"Bite-sized learning designed for your busy schedule"}</p>
                        <p class="muted">
                            {"Each lesson takes just 10-15 minutes and builds practical skills you can use immediately"}
                        </p>
                    </div>
                    <div class="card-grid two">
                        { for PREVIEW_SNAPS.iter().map(render_snap) }
                    </div>
                    <div class="centered">
                        <button class="primary-button" onclick={open(Overlay::Login)}>
                            {"▶ Access Full Learning Platform"}
                        </button>
                    </div>
                </div>
            </section>

            <section class="section grey">
                <div class="container narrow">
                    <div class="certificate-preview two-column">
                        <div>
                            <h2>{"Verifiable Certificates"}</h2>
                            <p class="lead">
                                {"Earn QR-coded certificates that employers can instantly verify. No complex blockchain - just simple, credible validation of your new skills."}
                            </p>
                            <ul class="dot-list">
                                { for CERTIFICATE_POINTS.iter().map(|point| html! { <li>{*point}</li> }) }
                            </ul>
                            <button class="primary-button" onclick={open(Overlay::Certificate)}>
                                {"🏅 View Sample Certificate"}
                            </button>
                        </div>
                        <div class="certificate-teaser">
                            <div class="certificate-award">{"🏅"}</div>
                            <h3>{"Certificate Preview"}</h3>
                            <p>{"Digital Marketing Essentials"}</p>
                            <div class="qr-placeholder">{"QR Code"}</div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section blue">
                <div class="container narrow centered">
                    <h2>{"Unlock Your Digital Future"}</h2>
                    <p class="lead">
                        {"Join thousands of rural learners who are transforming their careers with digital skills."}
                    </p>
                    <form class="signup-form" {onsubmit}>
                        <div class="form-row">
                            <input
                                type="text"
                                name="name"
                                placeholder="Your Name"
                                required={true}
                                value={signup.name.clone()}
                                oninput={bind_input(&signup, |f, v| f.name = v)}
                            />
                            <input
                                type="email"
                                name="email"
                                placeholder="Email Address"
                                required={true}
                                value={signup.email.clone()}
                                oninput={bind_input(&signup, |f, v| f.email = v)}
                            />
                        </div>
                        <input
                            type="text"
                            name="location"
                            placeholder="Your Location"
                            required={true}
                            value={signup.location.clone()}
                            oninput={bind_input(&signup, |f, v| f.location = v)}
                        />
                        <button type="submit" class="primary-button full-width">
                            {"Unlock Digital Potential ›"}
                        </button>
                    </form>
                </div>
            </section>
            <style>
                {r#"
                .home-hero {
                    background: linear-gradient(135deg, #2563eb, #1d4ed8 50%, #3730a3);
                    color: #fff;
                    padding: 5rem 0;
                }
                .home-hero h1 {
                    font-size: 3rem;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }
                .hero-accent {
                    color: #93c5fd;
                }
                .hero-lead {
                    font-size: 1.25rem;
                    color: #dbeafe;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .hero-frame {
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 16px;
                    padding: 2rem;
                }
                .hero-frame img {
                    width: 100%;
                    height: 16rem;
                    object-fit: cover;
                    border-radius: 8px;
                }
                .certificate-preview {
                    background: #fff;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                }
                .certificate-teaser {
                    background: linear-gradient(135deg, #eff6ff, #e0e7ff);
                    border: 2px solid #bfdbfe;
                    border-radius: 12px;
                    padding: 1.5rem;
                    text-align: center;
                }
                .certificate-teaser .certificate-award {
                    font-size: 2.5rem;
                }
                .certificate-teaser .qr-placeholder {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 2px dashed #9ca3af;
                    background: #e5e7eb;
                    font-size: 0.7rem;
                    color: #6b7280;
                }
                .signup-form {
                    background: #fff;
                    border-radius: 12px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                    gap: 1.5rem;
                }
                .signup-form input {
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font-size: 1rem;
                    color: #111827;
                }
                "#}
            </style>
        </div>
    }
}
