use yew::prelude::*;

use crate::components::sections::{render_info_card, CallToAction, InfoCard, PageHero};
use crate::config;
use crate::Route;

const TEAM: &[(&str, &str)] = &[
    ("Aritra Basu", "Lead Developer"),
    ("Rima Dutta", "UI/UX Designer"),
    ("Ejaz Ahmed", "Backend Developer"),
    ("Medha Gupta", "Content Strategist"),
    ("Sayan Bandyopadhyay", "Product Manager"),
];

const IMPLEMENTATION_ASPECTS: &[InfoCard] = &[
    InfoCard {
        icon: "📖",
        title: "User-friendly Java-based GUI",
        description: "Intuitive interface designed for easy interaction across all user skill levels",
    },
    InfoCard {
        icon: "⚡",
        title: "Python backend",
        description: "Efficient content management and robust system performance",
    },
    InfoCard {
        icon: "🎯",
        title: "Lightweight local database using SQLite",
        description: "Ensuring functionality even in offline environments",
    },
    InfoCard {
        icon: "👥",
        title: "Seamless mentor connection",
        description: "Simple forms enabling direct connection with industry mentors",
    },
];

const LEARNER_BENEFITS: &[InfoCard] = &[
    InfoCard {
        icon: "🎯",
        title: "Customized learning paths",
        description: "Tailored specifically for individual needs and career goals",
    },
    InfoCard {
        icon: "🌐",
        title: "Offline capabilities",
        description: "Full accessibility for learners in rural areas with limited connectivity",
    },
    InfoCard {
        icon: "🏅",
        title: "Quick, verifiable certificates",
        description: "Instantly credible achievements that enhance professional credibility",
    },
    InfoCard {
        icon: "⚡",
        title: "Focus on microlearning",
        description: "Promotes sustainable daily engagement and skill development",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page grey">
            <PageHero
                title="Built by Students, Powered by Code"
                subtitle="A passionate team of students creating innovative solutions for digital education accessibility"
                theme={classes!("hero-indigo")}
            />
            <section class="section">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Key Aspects of Implementation"}</h2>
                        <p>{"Our technical approach to solving real-world challenges"}</p>
                    </div>
                    <div class="card-grid two">
                        { for IMPLEMENTATION_ASPECTS.iter().map(render_info_card) }
                    </div>
                </div>
            </section>
            <section class="section white">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Benefits for Learners"}</h2>
                        <p>{"How SkillBridge transforms the learning experience"}</p>
                    </div>
                    <div class="card-grid two">
                        { for LEARNER_BENEFITS.iter().map(render_info_card) }
                    </div>
                </div>
            </section>
            <section class="section blue">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Meet Our Team"}</h2>
                        <p>{format!("Students from {}", config::INSTITUTE)}</p>
                    </div>
                    <div class="card-grid three">
                        { for TEAM.iter().map(|(name, role)| html! {
                            <div class="team-card">
                                <div class="team-avatar">{"👤"}</div>
                                <h3>{*name}</h3>
                                <p>{*role}</p>
                            </div>
                        }) }
                    </div>
                    <p class="centered team-institute">{config::INSTITUTE}</p>
                </div>
            </section>
            <CallToAction
                title="Ready to Join Our Mission?"
                text="Be part of the movement to make digital education accessible to everyone."
                links={vec![(Route::Contact, "Get in Touch")]}
                theme={classes!("dark")}
            />
            <style>
                {r#"
                .team-card {
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 16px;
                    padding: 1.5rem;
                    text-align: center;
                    transition: background 0.3s ease;
                }
                .team-card:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                .team-avatar {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                }
                .team-card p,
                .team-institute {
                    color: #dbeafe;
                }
                .team-institute {
                    margin-top: 3rem;
                    font-size: 1.1rem;
                }
                "#}
            </style>
        </div>
    }
}
