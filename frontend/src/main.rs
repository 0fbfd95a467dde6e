//! Browser admin console for the ReelGen video platform.
//!
//! A Yew client-side app mounted at `/admin`. Build with Trunk; enable the
//! `mock` feature to run it without the API server.

mod api;
mod components;
mod config;
mod i18n;
mod modal_context;
#[cfg(feature = "mock")]
mod models;
mod pages;
mod router;
mod utils;

use yew::prelude::*;

use crate::modal_context::ModalProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <ModalProvider>
            <router::AppRouter />
        </ModalProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
