use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Icon, heading and blurb; the building block of most content grids.
#[derive(Clone, Debug, PartialEq)]
pub struct InfoCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title: String,
    pub subtitle: String,
    #[prop_or_default]
    pub theme: Classes,
}

#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class={classes!("page-hero", props.theme.clone())}>
            <div class="container centered">
                <h1>{&props.title}</h1>
                <p>{&props.subtitle}</p>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    pub title: String,
    pub text: String,
    pub links: Vec<(Route, &'static str)>,
    #[prop_or_default]
    pub theme: Classes,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    html! {
        <section class={classes!("cta-section", props.theme.clone())}>
            <div class="container narrow centered">
                <h2>{&props.title}</h2>
                <p>{&props.text}</p>
                <div class="cta-links">
                    { for props.links.iter().enumerate().map(|(i, (route, label))| html! {
                        <Link<Route>
                            to={route.clone()}
                            classes={if i == 0 { "primary-button" } else { "outline-button" }}
                        >
                            {*label}
                        </Link<Route>>
                    }) }
                </div>
            </div>
        </section>
    }
}

pub fn render_info_card(card: &InfoCard) -> Html {
    html! {
        <div class="info-card">
            <div class="info-card-heading">
                <span class="info-icon">{card.icon}</span>
                <h3>{card.title}</h3>
            </div>
            <p>{card.description}</p>
        </div>
    }
}

/// Alternating text/image rows used by the Challenges and Features pages.
pub fn feature_row(index: usize, image: &str, title: &str, body: Html) -> Html {
    html! {
        <div class={classes!("feature-row", (index % 2 == 1).then(|| "reversed"))}>
            <div class="feature-text">
                {body}
            </div>
            <div class="feature-image">
                <img src={pexels_url(image)} alt={format!("Illustration of {}", title)} />
            </div>
        </div>
    }
}

pub fn pexels_url(photo_id: &str) -> String {
    format!(
        "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w=600",
        id = photo_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pexels_url_repeats_the_photo_id() {
        assert_eq!(
            pexels_url("3184460"),
            "https://images.pexels.com/photos/3184460/pexels-photo-3184460.jpeg?auto=compress&cs=tinysrgb&w=600"
        );
    }
}
