use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page white">
            <section class="section">
                <div class="container narrow centered">
                    <h1>{"Page not found"}</h1>
                    <p class="lead">{"The page you were looking for doesn't exist or has moved."}</p>
                    <Link<Route> to={Route::Home} classes="primary-button">{"Back to Home"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}
