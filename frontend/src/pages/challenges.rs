use yew::prelude::*;

use crate::components::sections::{feature_row, CallToAction, PageHero};
use crate::Route;

struct Challenge {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    details: &'static str,
    image: &'static str,
}

const CHALLENGES: &[Challenge] = &[
    Challenge {
        icon: "⚠",
        title: "Lack of Personalized Learning",
        description: "Many platforms offer a one-size-fits-all approach, ignoring individual learner needs and local job opportunities.",
        details: "Standard learning paths overlook unique needs and contexts of learners in rural areas. Generic content fails to address specific skill gaps or career aspirations. This lack of personalization leads to disengagement and dropout, as learners struggle to see the relevance of what they're learning to their actual circumstances and goals.",
        image: "3184302",
    },
    Challenge {
        icon: "📶",
        title: "Access Barriers",
        description: "Unstable internet and low-end devices hinder learners from completing traditional courses effectively and consistently.",
        details: "Many learners in rural India face significant obstacles due to unstable internet connections and inadequate devices. These barriers hinder their ability to participate in traditional online courses that require constant connectivity and high-performance hardware. Frequent disconnections and slow loading times create frustration and interrupt the learning process, making it difficult to maintain momentum and complete courses.",
        image: "3184328",
    },
    Challenge {
        icon: "📉",
        title: "Untapped Potential",
        description: "As a result of these challenges, many learners drop out early, missing valuable digital job opportunities that can change their lives.",
        details: "The combination of poor personalization and access barriers creates a cycle where talented individuals are unable to develop digital skills that could transform their economic prospects. This represents a massive waste of human potential and perpetuates economic inequality between urban and rural areas.",
        image: "3184339",
    },
];

#[function_component(Challenges)]
pub fn challenges() -> Html {
    let rows = CHALLENGES.iter().enumerate().map(|(i, challenge)| {
        let body = html! {
            <div class="feature-card">
                <div class="feature-card-heading">
                    <span class="info-icon">{challenge.icon}</span>
                    <h2>{challenge.title}</h2>
                </div>
                <p class="feature-summary">{challenge.description}</p>
                <p class="feature-details">{challenge.details}</p>
            </div>
        };
        feature_row(i, challenge.image, challenge.title, body)
    });

    html! {
        <div class="page grey">
            <PageHero
                title="Challenges in Rural Learning"
                subtitle="Understanding the barriers faced by youth and women in rural India"
                theme={classes!("hero-warning")}
            />
            <section class="section">
                <div class="container feature-rows">
                    { for rows }
                </div>
            </section>
            <CallToAction
                title="Ready to Overcome These Challenges?"
                text="SkillBridge is designed specifically to address each of these barriers with innovative solutions."
                links={vec![(Route::Features, "Discover Our Solutions")]}
                theme={classes!("dark")}
            />
        </div>
    }
}
