use yew::prelude::*;

use crate::components::sections::{render_info_card, CallToAction, InfoCard, PageHero};
use crate::Route;

const TECH_STACK: &[InfoCard] = &[
    InfoCard {
        icon: "⌨",
        title: "Java Frontend",
        description: "User-friendly Java-based GUI for intuitive interaction and seamless user experience across all devices.",
    },
    InfoCard {
        icon: "🗄",
        title: "Python Backend",
        description: "Efficient Python backend for robust logic handling, content management, and system operations.",
    },
    InfoCard {
        icon: "📱",
        title: "SQLite Database",
        description: "Lightweight local database using SQLite, ensuring functionality even in offline environments.",
    },
    InfoCard {
        icon: "⚡",
        title: "Optimized Performance",
        description: "Lightweight design making it accessible for users with low-end devices and limited bandwidth.",
    },
];

const STACK_REASONS: &[InfoCard] = &[
    InfoCard {
        icon: "⌨",
        title: "Proven Technologies",
        description: "Using established, reliable technologies that are well-documented and widely supported.",
    },
    InfoCard {
        icon: "📱",
        title: "Low-End Device Support",
        description: "Optimized for devices with limited processing power and memory constraints.",
    },
    InfoCard {
        icon: "🗄",
        title: "Offline Capability",
        description: "Local database ensures full functionality even without internet connectivity.",
    },
];

#[function_component(Technology)]
pub fn technology() -> Html {
    html! {
        <div class="page grey">
            <PageHero
                title="Technical Outline"
                subtitle="Simple and Realistic Implementation - Overview of our technology stack for SkillBridge development"
                theme={classes!("hero-dark")}
            />
            <section class="section">
                <div class="container">
                    <div class="panel">
                        <h2 class="centered">{"Our Technology Architecture"}</h2>
                        <div class="two-column">
                            <div>
                                <p class="lead">
                                    {"SkillBridge's architecture combines "}
                                    <strong>{"Java for user interfaces"}</strong>
                                    {" and "}
                                    <strong>{"Python for backend logic"}</strong>
                                    {"."}
                                </p>
                                <p class="lead">
                                    {"It utilizes "}
                                    <strong>{"SQLite for local databases"}</strong>
                                    {", ensuring functionality even offline."}
                                </p>
                                <p class="lead">
                                    {"Our solution prioritizes lightweight design, making it accessible for users with low-end devices while providing opportunities for growth and skill development."}
                                </p>
                            </div>
                            <div>
                                <p class="lead">
                                    {"The frontend utilizes "}
                                    <strong>{"Java for a user-friendly experience"}</strong>
                                    {", while "}
                                    <strong>{"Python powers the backend"}</strong>
                                    {" for efficient logic handling and content management."}
                                </p>
                                <p class="lead">
                                    {"This combination ensures an engaging platform that meets the needs of rural learners with low bandwidth and device limitations."}
                                </p>
                            </div>
                        </div>
                    </div>
                    <div class="card-grid two">
                        { for TECH_STACK.iter().map(render_info_card) }
                    </div>
                </div>
            </section>
            <section class="section white">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Why This Technology Stack?"}</h2>
                        <p>{"Built for reliability, accessibility, and performance"}</p>
                    </div>
                    <div class="card-grid three centered-cards">
                        { for STACK_REASONS.iter().map(render_info_card) }
                    </div>
                </div>
            </section>
            <CallToAction
                title="Ready to See Our Technology in Action?"
                text="Learn more about the team behind SkillBridge and how we're making digital education accessible."
                links={vec![(Route::About, "Meet Our Team")]}
                theme={classes!("dark")}
            />
        </div>
    }
}
