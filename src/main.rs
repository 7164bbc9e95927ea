//! FaaS Console - CSR dashboard for managing serverless functions
//!
//! Architecture:
//! - Pure CSR rendering (no SSR/LiveView/Server Functions)
//! - All data comes from the in-memory store behind `api::FunctionStore`
//! - A production deployment swaps the store and the invoke service for
//!   clients of the real control plane; the view layer stays unchanged

mod api;
mod components;
mod config;
mod state;
mod types;

use components::{CreateFunction, FunctionDetail, Functions, Invocations, Navbar};
use dioxus::prelude::*;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ROUTES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Functions {},
        #[route("/functions/new")]
        CreateFunction {},
        #[route("/functions/:id?:tab")]
        FunctionDetail { id: String, tab: String },
        #[route("/invocations")]
        Invocations {},
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ASSETS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const MAIN_CSS: Asset = asset!("/assets/main.css");

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// APP ENTRY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
