use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use super::responses::{BuildingsResponse, NearbyParkingResponse, ParkingLotsResponse};

const USER_AGENT: &str = concat!("parkmap/", env!("CARGO_PKG_VERSION"));

pub const BUILDINGS_PATH: &str = "/api/buildings";
pub const PARKING_LOTS_PATH: &str = "/api/parking_lots";
pub const NEARBY_PARKING_PATH: &str = "/api/nearby_parking";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned error status: {status}")]
    Status { url: String, status: u16 },
    #[error("failed to parse JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read access to the campus backend.
///
/// One call per endpoint; every call is a single read with no retry.
pub trait Backend {
    fn buildings(&self) -> Result<BuildingsResponse, ApiError>;
    fn parking_lots(&self) -> Result<ParkingLotsResponse, ApiError>;
    /// `building_name` is sent as given; callers lowercase it first
    fn nearby_parking(&self, building_name: &str) -> Result<NearbyParkingResponse, ApiError>;
}

/// Blocking HTTP implementation of [`Backend`]
pub struct HttpBackend {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and return the status code with the raw body
    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<(u16, String), ApiError> {
        let url = self.url(path);
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|source| ApiError::Transport { url, source })?;

        Ok((status, body))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (status, body) = self.get(path, &[])?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Status {
                url: self.url(path),
                status,
            });
        }
        decode(&self.url(path), &body)
    }
}

impl Backend for HttpBackend {
    fn buildings(&self) -> Result<BuildingsResponse, ApiError> {
        self.get_json(BUILDINGS_PATH)
    }

    fn parking_lots(&self) -> Result<ParkingLotsResponse, ApiError> {
        self.get_json(PARKING_LOTS_PATH)
    }

    fn nearby_parking(&self, building_name: &str) -> Result<NearbyParkingResponse, ApiError> {
        let (status, body) = self.get(NEARBY_PARKING_PATH, &[("building_name", building_name)])?;
        let url = self.url(NEARBY_PARKING_PATH);

        if (200..300).contains(&status) {
            return decode(&url, &body);
        }

        // An unknown building comes back as 404 with an error body
        match serde_json::from_str::<NearbyParkingResponse>(&body) {
            Ok(response) if response.error_message().is_some() => Ok(response),
            _ => Err(ApiError::Status { url, status }),
        }
    }
}

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}
