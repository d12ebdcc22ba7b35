use log::info;
use yew::prelude::*;

mod config;
mod hooks;
mod listener;
mod theme;

mod navigation {
    pub mod anchor;
    pub mod header;
    pub mod sections;
}

mod contact {
    pub mod intake;
    pub mod submit;
}

mod components {
    pub mod about;
    pub mod anchor_link;
    pub mod contact;
    pub mod cta;
    pub mod features;
    pub mod footer;
    pub mod header;
    pub mod hero;
}

mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
