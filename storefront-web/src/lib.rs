mod components;
mod hooks;
mod pages;

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use storefront::{Catalog, Session};

use components::{Footer, Navigation, NotificationContainer};
use pages::Store;

const BRAND: &str = "ROBUX.RU";

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        Store {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        Navigation { brand: BRAND.to_string() }
        NotificationContainer {}
        Outlet::<Route> {}
        Footer { brand: BRAND.to_string() }
    }
}

#[component]
pub fn App() -> Element {
    // Provide all context providers
    use_context_provider(|| Signal::new(Catalog::default()));
    use_context_provider(|| Signal::new(Session::new()));
    use_context_provider(|| Signal::new(hooks::NotificationState::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: "https://cdn.tailwindcss.com" }
        document::Link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap"
        }
        style { {include_str!("styles.css")} }

        div { class: "bg-gradient-to-br from-gray-900 to-gray-800 min-h-screen text-white",
            Router::<Route> {}
        }
    }
}

pub fn launch() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting storefront");
    dioxus::launch(App);
}
