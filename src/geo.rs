//! Geolocation Acquirer
//!
//! One-shot wrapper over `navigator.geolocation`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Request the device position once. `on_position` runs with
/// (latitude, longitude) when the browser delivers a fix; permission
/// denial or unavailability is logged and the caller's default stays
/// in place.
pub fn acquire_position(on_position: impl FnOnce(f64, f64) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let geolocation = match window.navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(_) => {
            log::warn!("geolocation is not available in this browser");
            return;
        }
    };

    let success = Closure::once_into_js(move |position: web_sys::Position| {
        let coords = position.coords();
        on_position(coords.latitude(), coords.longitude());
    });
    let error = Closure::once_into_js(move |err: web_sys::PositionError| {
        log::warn!("geolocation failed: {}", err.message());
    });

    if let Err(err) = geolocation.get_current_position_with_error_callback(
        success.unchecked_ref(),
        Some(error.unchecked_ref()),
    ) {
        log::warn!("geolocation request rejected: {:?}", err);
    }
}
