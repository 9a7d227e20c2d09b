use dioxus::prelude::*;

use views::Users;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Users {},
}

fn main() {
    let config = ui::load_config();
    if let Err(e) = dioxus::logger::init(config.log_level()) {
        eprintln!("Logger already initialised: {e}");
    }
    tracing::info!("Loading users from {}", config.source.endpoint);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));
    // Always starts light; the toggle is not persisted.
    use_context_provider(|| Signal::new(store::Theme::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        Router::<Route> {}
    }
}
