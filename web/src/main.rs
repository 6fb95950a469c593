use dioxus::prelude::*;
use ui::components::display::FlashBanner;
use ui::registration::{FlashMessage, NavigationRequest};
use ui::services::config::AppConfig;
use ui::SignUpPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One-shot message carried from the wizard to the landing page
    use_context_provider(|| Signal::new(FlashMessage::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/signup")]
    SignUp {},
}

#[component]
fn Home() -> Element {
    let mut flash = use_context::<Signal<FlashMessage>>();
    let message = use_hook(move || flash.with_mut(|f| f.take()));

    rsx! {
        div {
            class: "home",
            if let Some(message) = message {
                FlashBanner { message: message }
            }
            h1 { "Pineappl" }
            p { "Academic Performance Platform" }
            Link { class: "home-cta", to: Route::SignUp {}, "Create an account" }
        }
    }
}

#[component]
fn SignUp() -> Element {
    let mut flash = use_context::<Signal<FlashMessage>>();
    let config = use_hook(AppConfig::from_build_env);

    let on_navigate = move |request: NavigationRequest| {
        flash.set(request.flash);
        let route = request.path.parse::<Route>().unwrap_or(Route::Home {});
        navigator().push(route);
    };

    rsx! {
        SignUpPage { config: config, on_navigate: on_navigate }
    }
}
