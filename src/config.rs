//! Frontend Configuration
//!
//! Base URLs and map defaults, kept in one place.

/// Internal backend serving `items` and `points`
pub const API_BASE_URL: &str = "http://localhost:3333";

/// IBGE localidades service (states and cities)
pub const IBGE_BASE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// Continental default the map is centered on before (and regardless of)
/// a geolocation fix
pub const MAP_CENTER: (f64, f64) = (-12.68704, -54.58977);
pub const MAP_ZOOM: f64 = 4.0;

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    r#"&copy; <a href="http://osm.org/copyright">OpenStreetMap</a> contributors"#;
