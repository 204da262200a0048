use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    Certificates, Dashboard, Experiences, Home, Languages, Login, NotFound, Profile, Register,
    Skills,
};

mod guards;
mod views;

use guards::{GuestOnly, RequireAuth};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[layout(GuestOnly)]
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
    #[end_layout]
    #[layout(RequireAuth)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/profile")]
        Profile {},
        #[route("/skills")]
        Skills {},
        #[route("/languages")]
        Languages {},
        #[route("/certificates")]
        Certificates {},
        #[route("/experiences")]
        Experiences {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
