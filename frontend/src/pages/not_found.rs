use yew::prelude::*;
use yew_router::prelude::*;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("container", "py-16", "text-center")}>
            <h2>{ t::TITLE }</h2>
            <Link<Route> to={Route::Admin} classes={classes!("btn-fluent-primary")}>
                { t::BACK }
            </Link<Route>>
        </main>
    }
}
