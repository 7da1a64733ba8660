use dioxus::prelude::*;

use ui::components::{AppHeader, Footer};
use ui::i18n;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();
    // Global language code signal: the header writes it when the visitor
    // switches language, every view subscribes and re-renders.
    use_context_provider(|| Signal::new(i18n::active_language().code().to_string()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Shared page chrome around every route.
#[component]
fn SiteShell() -> Element {
    rsx! {
        AppHeader {}
        main { class: "site-main", Outlet::<Route> {} }
        Footer {}
    }
}
