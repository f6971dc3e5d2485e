use yew::prelude::*;

use crate::catalog::{Difficulty, SkillSnap};
use crate::components::sections::{feature_row, CallToAction, PageHero};
use crate::components::skill_snap_card::render_snap;
use crate::Route;

const DEMO_SNAPS: &[SkillSnap] = &[
    SkillSnap {
        title: "Digital Payment Systems",
        duration_minutes: 10,
        description: "Learn to use UPI, mobile banking, and digital wallets safely",
        difficulty: Difficulty::Beginner,
        category: "Financial Literacy",
        is_completed: false,
        is_offline_available: true,
    },
    SkillSnap {
        title: "Social Media for Business",
        duration_minutes: 15,
        description: "Create engaging content to promote your local business",
        difficulty: Difficulty::Intermediate,
        category: "Digital Marketing",
        is_completed: false,
        is_offline_available: true,
    },
    SkillSnap {
        title: "Online Job Applications",
        duration_minutes: 12,
        description: "Navigate job portals and create compelling applications",
        difficulty: Difficulty::Beginner,
        category: "Career Skills",
        is_completed: false,
        is_offline_available: true,
    },
];

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    details: [&'static str; 3],
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🧠",
        title: "Aptitude-Based Onboarding",
        description: "Personalized entry points for learners to maximize engagement and success.",
        details: [
            "Our platform creates customized tracks based on individual aptitude, interests, and job relevance.",
            "A brief quiz efficiently determines users' current levels, guiding them to the right starting point.",
            "Personalized recommendations ensure learners focus on skills most relevant to their goals.",
        ],
    },
    Feature {
        icon: "📅",
        title: "Customized Skill Tracks / Daily SkillSnaps",
        description: "Daily microlearning lessons tailored to user needs for effective learning.",
        details: [
            "Learners receive engaging 10-15 minute lessons daily, focusing on specific digital skills relevant to their goals.",
            "Content is broken down into digestible chunks that fit into busy schedules.",
            "Progressive skill building ensures steady advancement without overwhelming learners.",
        ],
    },
    Feature {
        icon: "📴",
        title: "Offline-First Design",
        description: "Why we prioritize low-connectivity solutions for effective learning experiences.",
        details: [
            "SkillBridge is designed to operate efficiently even in low-connectivity areas, ensuring users can access content anytime.",
            "Our platform runs smoothly on low-end devices with minimal system requirements.",
            "Learners only need to connect to the internet occasionally to sync their progress and download new content.",
        ],
    },
    Feature {
        icon: "📱",
        title: "Low-End Device Optimization",
        description: "Designed specifically for basic smartphones and older computers commonly used in rural areas.",
        details: [
            "Minimal system requirements ensure compatibility with devices as old as 5-7 years.",
            "Efficient memory usage and optimized graphics reduce lag and crashes.",
            "Simple interface design reduces cognitive load and improves usability for new users.",
        ],
    },
    Feature {
        icon: "🌐",
        title: "Local Language Support",
        description: "Content is available in local languages, making it accessible for everyone, even on low-end devices.",
        details: [
            "Multilingual content ensures learners can study in their preferred language.",
            "Cultural context is incorporated to make learning more relevant and engaging.",
            "Text-based content reduces bandwidth requirements while maintaining effectiveness.",
        ],
    },
    Feature {
        icon: "🏅",
        title: "Verifiable Certificates",
        description: "Simplified approach ensuring credibility without complex blockchain technology for learners' achievements.",
        details: [
            "QR-Coded Certificates: Easily generated for instant verification.",
            "Practical Validation: No complex dependencies or integrations needed for employers to verify skills.",
            "Student-Friendly Design: Built for ease with technology students understand and trust.",
        ],
    },
    Feature {
        icon: "👥",
        title: "Community Learning Support",
        description: "Connect with local mentors and peer groups for collaborative learning experiences.",
        details: [
            "Local coordinator network provides in-person support when needed.",
            "Peer learning groups foster community engagement and motivation.",
            "Simple mentor connection forms enable direct access to industry professionals.",
        ],
    },
];

const FEATURE_IMAGES: &[&str] = &["3184465", "3184418", "3184398", "3184360", "3184291"];

/// Rows past the end of the image list reuse the last photo.
fn feature_image(index: usize) -> &'static str {
    FEATURE_IMAGES
        .get(index)
        .or_else(|| FEATURE_IMAGES.last())
        .copied()
        .unwrap_or_default()
}

#[function_component(Features)]
pub fn features() -> Html {
    let rows = FEATURES.iter().enumerate().map(|(i, feature)| {
        let body = html! {
            <div class="feature-card">
                <div class="feature-card-heading">
                    <span class="info-icon">{feature.icon}</span>
                    <h2>{feature.title}</h2>
                </div>
                <p class="feature-summary">{feature.description}</p>
                <ul class="dot-list">
                    { for feature.details.iter().map(|detail| html! { <li>{*detail}</li> }) }
                </ul>
            </div>
        };
        feature_row(i, feature_image(i), feature.title, body)
    });

    html! {
        <div class="page grey">
            <PageHero
                title="What Makes SkillBridge Unique"
                subtitle="Our Innovative Approach to Digital Skills Training"
                theme={classes!("hero-blue")}
            />
            <section class="section white">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Daily SkillSnaps in Action"}</h2>
                        <p>{"See how our microlearning approach makes complex skills accessible"}</p>
                        <p class="muted">
                            {"Each lesson is designed to fit into your daily routine, whether you're at home, work, or commuting"}
                        </p>
                    </div>
                    <div class="card-grid three">
                        { for DEMO_SNAPS.iter().map(render_snap) }
                    </div>
                </div>
            </section>
            <section class="section">
                <div class="container feature-rows">
                    { for rows }
                </div>
            </section>
            <CallToAction
                title="Ready to Experience These Features?"
                text="Join thousands of learners who are already transforming their futures with SkillBridge."
                links={vec![
                    (Route::Technology, "Learn About Our Technology"),
                    (Route::Contact, "Get Started Today"),
                ]}
                theme={classes!("green")}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_feature_blocks_with_three_details_each() {
        assert_eq!(FEATURES.len(), 7);
        assert!(FEATURES.iter().all(|f| f.details.iter().all(|d| !d.is_empty())));
    }

    #[test]
    fn late_rows_reuse_the_last_image() {
        assert_eq!(feature_image(0), "3184465");
        assert_eq!(feature_image(3), "3184360");
        assert_eq!(feature_image(4), "3184291");
        assert_eq!(feature_image(6), "3184291");
    }
}
