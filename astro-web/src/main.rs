//! 2026 forecast page.
//!
//! Data flow:
//! 1. Field edits write straight into the `Session` held by `AppState`.
//! 2. City search text issues a ticketed lookup; only the latest one lands.
//! 3. Picking a suggestion binds name, coordinates and timezone into the form.
//! 4. Submit validates locally, then calls the prediction service once.
//! 5. The result area renders `display_state`: nothing, an error, or the result.

use astro_session::render::{display_state, DisplayState};
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

mod components;
mod state;

use components::{BirthForm, ErrorDisplay, Header, ResultView};
use state::{AppState, Backend};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting astro forecast page");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("astro-forecast-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    use_context_provider(Backend::connect);

    let display = display_state(&state.session.read());

    rsx! {
        div {
            style: "min-height: 100vh; background: #020617; color: #f1f5f9; padding: 32px 16px; font-family: system-ui, -apple-system, sans-serif;",
            div {
                style: "max-width: 900px; margin: 0 auto;",
                Header {}
                BirthForm {}

                if let DisplayState::Error(message) = &display {
                    ErrorDisplay { message: message.clone() }
                }

                if let DisplayState::Result(rendered) = &display {
                    ResultView { rendered: rendered.clone() }
                }
            }
        }
    }
}
