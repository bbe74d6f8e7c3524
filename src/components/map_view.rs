//! Map Widget
//!
//! Read-only Leaflet map: fixed continental view, one marker following
//! the current position. The map is mounted once the container div is
//! in the DOM; later position changes only move the marker.

use leptos::prelude::*;

use crate::config;
use crate::map::MapHandle;

const MAP_CONTAINER_ID: &str = "create-point-map";

#[component]
pub fn MapView(#[prop(into)] position: Signal<(f64, f64)>) -> impl IntoView {
    // MapHandle holds JS objects, so thread-local storage
    let handle = StoredValue::new_local(None::<MapHandle>);

    Effect::new(move |_| {
        let (latitude, longitude) = position.get();
        handle.update_value(|handle| match handle {
            Some(map) => map.move_marker(latitude, longitude),
            None => {
                let mounted = MapHandle::mount(
                    MAP_CONTAINER_ID,
                    config::MAP_CENTER,
                    config::MAP_ZOOM,
                    (latitude, longitude),
                    "Your location.",
                );
                match mounted {
                    Ok(map) => *handle = Some(map),
                    Err(err) => log::error!("failed to mount map: {:?}", err),
                }
            }
        });
    });

    view! {
        <div class="map" id=MAP_CONTAINER_ID></div>
    }
}
