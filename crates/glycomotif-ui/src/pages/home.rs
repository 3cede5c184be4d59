//! Home page: the sugar catalog.

use dioxus::prelude::*;
use glycomotif::catalog::{builtin_sugars, SugarInfo};

use crate::Route;

/// Sugar catalog with a search box and one card per sugar type.
#[component]
pub fn Home(route: Signal<Route>) -> Element {
    rsx! {
        div { class: "search-box",
            input { placeholder: "Search" }
            kbd { "Ctrl" }
            kbd { "K" }
        }
        div { class: "sugar-grid",
            for sugar in builtin_sugars() {
                SugarCard { sugar, route }
            }
        }
    }
}

#[component]
fn SugarCard(sugar: SugarInfo, route: Signal<Route>) -> Element {
    let abbrev = sugar.abbrev.clone();
    rsx! {
        div {
            class: "sugar-card",
            onclick: move |_| {
                route.set(Route::Results { abbrev: abbrev.clone() });
            },
            img { src: "{sugar.image}", alt: "{sugar.name}" }
            div { class: "sugar-name", "{sugar.name}" }
            div { class: "sugar-abbrev", "{sugar.abbrev}" }
        }
    }
}
