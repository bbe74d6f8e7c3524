//! Leaflet Bindings
//!
//! Minimal bindings to the Leaflet `L` global loaded by `index.html`.
//! Only what the read-only map widget needs: a map, one tile layer and
//! one movable marker.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;
    pub type TileLayer;
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn leaflet_map(container_id: &str) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &Object) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn tile_layer_add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn leaflet_marker(latlng: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn marker_add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Marker, latlng: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &str) -> Marker;
}

fn lat_lng(latitude: f64, longitude: f64) -> Array {
    let pair = Array::new();
    pair.push(&JsValue::from_f64(latitude));
    pair.push(&JsValue::from_f64(longitude));
    pair
}

/// The mounted map with its single position marker
pub struct MapHandle {
    _map: LeafletMap,
    marker: Marker,
}

impl MapHandle {
    /// Create the map inside the container element, add the OSM tile
    /// layer and a marker at the given position. The container must be
    /// in the DOM.
    pub fn mount(
        container_id: &str,
        center: (f64, f64),
        zoom: f64,
        marker_at: (f64, f64),
        popup: &str,
    ) -> Result<Self, JsValue> {
        let map = leaflet_map(container_id);
        map.set_view(&lat_lng(center.0, center.1), zoom);

        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("attribution"),
            &JsValue::from_str(crate::config::OSM_ATTRIBUTION),
        )?;
        tile_layer(crate::config::OSM_TILE_URL, &options).tile_layer_add_to(&map);

        let marker = leaflet_marker(&lat_lng(marker_at.0, marker_at.1));
        marker.marker_add_to(&map).bind_popup(popup);

        Ok(Self { _map: map, marker })
    }

    /// Move the marker, used when the geolocation fix arrives
    pub fn move_marker(&self, latitude: f64, longitude: f64) {
        self.marker.set_lat_lng(&lat_lng(latitude, longitude));
    }
}
