//! Per-sugar search results.

use dioxus::prelude::*;
use glycomotif::catalog::{builtin_results, sugar_by_abbrev, ResultInfo};

use crate::Route;

/// Search results for one sugar. An unknown abbreviation renders a
/// "not found" message; it is never fatal to the page.
#[component]
pub fn Results(route: Signal<Route>, abbrev: String) -> Element {
    let Ok(sugar) = sugar_by_abbrev(&abbrev) else {
        return rsx! {
            div { class: "not-found", "Sugar {abbrev} not found!" }
        };
    };

    rsx! {
        h1 { "Search Results for {sugar.name} ({sugar.abbrev})" }
        div { class: "search-box",
            input { placeholder: "Search" }
        }
        button {
            class: "grouped-link",
            onclick: {
                let abbrev = abbrev.clone();
                move |_| {
                    route.set(Route::Groups { abbrev: abbrev.clone() });
                }
            },
            "Browse by representative motif"
        }
        div { class: "result-list",
            for result in builtin_results() {
                ResultRow { route, abbrev: abbrev.clone(), result }
            }
        }
    }
}

#[component]
fn ResultRow(
    route: Signal<Route>,
    abbrev: String,
    result: ResultInfo,
) -> Element {
    let af_id = result.af_id.clone();
    rsx! {
        div {
            class: "result-row",
            onclick: move |_| {
                route.set(Route::Detail {
                    abbrev: abbrev.clone(),
                    af_id: af_id.clone(),
                });
            },
            img { src: "{result.image}", alt: "{result.title}" }
            div { class: "result-text",
                div { class: "result-title", "{result.title}" }
                div { class: "result-ids",
                    "{result.af_id} · {result.uniprot_id}"
                }
            }
        }
    }
}
