use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod hooks;
mod host;
mod motion;
mod styles;
mod components {
    pub mod about;
    pub mod backdrop;
    pub mod contact;
    pub mod contact_button;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod icons;
    pub mod services;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if let Err(e) = styles::mount_global_styles() {
        warn!("Global styles not applied: {}", e);
    }

    info!("Starting {}", config::site().brand);
    yew::Renderer::<App>::new().render();
}
