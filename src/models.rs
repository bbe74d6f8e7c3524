//! Frontend Models
//!
//! Data structures matching the backend and the IBGE localidades API.

use serde::{Deserialize, Serialize};

/// Selectable collection category (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

/// One record of the IBGE `estados` response; only the 2-letter code is used
#[derive(Debug, Clone, Deserialize)]
pub struct IbgeUf {
    pub sigla: String,
}

/// One record of the IBGE `municipios` response; only the name is used
#[derive(Debug, Clone, Deserialize)]
pub struct IbgeCity {
    pub nome: String,
}

/// Payload POSTed to `points` on submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPoint {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<u32>,
}
