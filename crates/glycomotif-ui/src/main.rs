//! Dioxus web app for the glycomotif catalog.
//!
//! Compiled to WASM and served next to the stock Molstar bundle (loaded
//! globally by `index.html`). The app renders the sugar catalog, per-sugar
//! search results, the grouped motif browser, and the result detail page;
//! all 3D work is delegated to Molstar through the [`molstar`] interop
//! module. Routing proper is an external concern — pages switch on a
//! signal, the way the engine's options panel switches sections.

// `rsx!` expansion emits fully qualified paths that trip the workspace-wide
// `unused_qualifications` deny; they are not fixable at the call sites.
#![allow(unused_qualifications)]

mod data;
mod molstar;
mod pages;

use dioxus::prelude::*;

/// Current page.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Route {
    /// Sugar catalog.
    Home,
    /// Search results for one sugar.
    Results {
        /// Sugar abbreviation, e.g. "FUC".
        abbrev: String,
    },
    /// Grouped motif browser for one sugar.
    Groups {
        /// Sugar abbreviation.
        abbrev: String,
    },
    /// Detail page for one computed model.
    Detail {
        /// Sugar abbreviation.
        abbrev: String,
        /// AlphaFold DB identifier.
        af_id: String,
    },
}

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    dioxus::launch(app);
}

fn app() -> Element {
    let route = use_signal(|| Route::Home);

    let page = match route.read().clone() {
        Route::Home => rsx! {
            pages::Home { route }
        },
        Route::Results { abbrev } => rsx! {
            pages::Results { route, abbrev }
        },
        Route::Groups { abbrev } => rsx! {
            pages::Groups { abbrev }
        },
        Route::Detail { af_id, .. } => rsx! {
            pages::Detail { af_id }
        },
    };

    rsx! {
        pages::NavBar { route }
        div { class: "main-container", {page} }
    }
}
