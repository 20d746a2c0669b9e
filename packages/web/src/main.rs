use dioxus::prelude::*;

use ui::Signup;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/signup")]
    Signup {},
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

        Router::<Route> {}
    }
}

/// Redirect `/` to `/signup`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Signup {});
    rsx! {}
}
