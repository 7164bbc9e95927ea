//! Layout components

use crate::Route;
use dioxus::prelude::*;

/// Main navigation bar with routing
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div { class: "app-shell",
            nav { class: "navbar",
                div { class: "navbar-inner",
                    span { class: "navbar-brand", "FaaS Console" }
                    div { class: "navbar-links",
                        Link { to: Route::Functions {}, class: "navbar-link", "Functions" }
                        Link { to: Route::Invocations {}, class: "navbar-link", "Invocations" }
                    }
                }
            }
            main { class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Page title block with an optional actions slot
#[component]
pub fn PageHeader(title: String, description: String, actions: Option<Element>) -> Element {
    rsx! {
        div { class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                p { class: "page-description", "{description}" }
            }
            if let Some(actions) = actions {
                div { class: "page-actions", {actions} }
            }
        }
    }
}
