//! Home Page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div id="page-home">
            <main>
                <h1>"Your marketplace for waste collection."</h1>
                <p>"Helping people find collection points efficiently."</p>
                <A href="/create-point">"Register a collection point"</A>
            </main>
        </div>
    }
}
