//! Page components.

mod detail;
mod groups;
mod home;
mod results;

use dioxus::prelude::*;
pub use detail::Detail;
pub use groups::Groups;
pub use home::Home;
pub use results::Results;

use crate::Route;

/// Top navigation bar; the title is the way back home.
#[component]
pub fn NavBar(route: Signal<Route>) -> Element {
    rsx! {
        header { class: "nav-bar",
            span {
                class: "nav-title",
                onclick: move |_| route.set(Route::Home),
                "Glycomotif"
            }
        }
    }
}
