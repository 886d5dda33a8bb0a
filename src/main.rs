use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod carousel;
mod config;
mod data;
mod theme;
mod pages {
    pub mod contact;
    pub mod home;
    pub mod landing;
    pub mod lawyers;
    pub mod login;
    pub mod services;
}

use pages::{
    contact::Contact,
    home::Home,
    landing::Landing,
    lawyers::Lawyers,
    login::Login,
    services::Services,
};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/landing")]
    Landing,
    #[at("/homepage")]
    Home,
    #[at("/lawyers")]
    Lawyers,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        },
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Lawyers => {
            info!("Rendering Lawyers page");
            html! { <Lawyers /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
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
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
