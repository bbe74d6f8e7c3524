//! API Clients
//!
//! Stateless HTTP clients, one per backend. No business logic here, only
//! requests, status checks and JSON decoding.

use gloo_net::http::{Request, Response};

use crate::config::{API_BASE_URL, IBGE_BASE_URL};
use crate::error::ApiError;
use crate::models::{IbgeCity, IbgeUf, Item, NewPoint};

fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Http {
            status: response.status(),
            message: response.status_text(),
        })
    }
}

/// Client for the internal collection-point backend
#[derive(Clone)]
pub struct PointsApi {
    base_url: String,
}

impl PointsApi {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// List the selectable collection items
    pub async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        let url = format!("{}/items", self.base_url);
        let response = Request::get(&url).send().await?;
        check_status(&response)?;
        let items = response
            .json::<Vec<Item>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        log::info!("loaded {} collection items", items.len());
        Ok(items)
    }

    /// Register a new collection point
    pub async fn create_point(&self, point: &NewPoint) -> Result<(), ApiError> {
        let url = format!("{}/points", self.base_url);
        let response = Request::post(&url)
            .json(point)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await?;
        check_status(&response)?;
        log::info!("collection point registered: {}", point.name);
        Ok(())
    }
}

/// Client for the IBGE localidades service
#[derive(Clone)]
pub struct LocalidadesApi {
    base_url: String,
}

impl LocalidadesApi {
    pub fn new() -> Self {
        Self {
            base_url: IBGE_BASE_URL.to_string(),
        }
    }

    /// List state codes, flattened to the 2-letter `sigla`
    pub async fn list_ufs(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/estados", self.base_url);
        let response = Request::get(&url).send().await?;
        check_status(&response)?;
        let records = response
            .json::<Vec<IbgeUf>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(records.into_iter().map(|uf| uf.sigla).collect())
    }

    /// List city names for one state
    pub async fn list_cities(&self, uf: &str) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/estados/{}/municipios", self.base_url, uf);
        let response = Request::get(&url).send().await?;
        check_status(&response)?;
        let records = response
            .json::<Vec<IbgeCity>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        log::info!("loaded {} cities for {}", records.len(), uf);
        Ok(records.into_iter().map(|city| city.nome).collect())
    }
}
