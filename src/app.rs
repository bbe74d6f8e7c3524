//! Application Component
//!
//! Two static routes, no shared layout.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{CreatePoint, Home};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| "Page not found.">
                <Route path=path!("/") view=Home/>
                <Route path=path!("/create-point") view=CreatePoint/>
            </Routes>
        </Router>
    }
}
