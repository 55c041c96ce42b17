use poolfinder_core::{AddressComponent, Coordinates, GeocodeClient, GeocodeError, GeocodeResult};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// Google Maps Geocoding API.
pub struct GoogleGeocodeClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl GoogleGeocodeClient {
    pub fn new(base_url: String, api_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    async fn lookup(&self, query: (&str, &str)) -> Result<Option<GeocodeResult>, GeocodeError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[query, ("key", self.api_key.expose_secret().as_str())])
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(transport_error)?
            .json::<GeocodeResponse>()
            .await
            .map_err(transport_error)?;

        match response.status.as_str() {
            "OK" => Ok(response.results.into_iter().next().map(Into::into)),
            "ZERO_RESULTS" => Ok(None),
            _ => {
                tracing::warn!(
                    status = %response.status,
                    error_message = response.error_message.as_deref().unwrap_or_default(),
                    "geocoding provider refused request"
                );
                Err(GeocodeError::ProviderStatus(response.status))
            }
        }
    }
}

/// The request URL carries the API key, so it never goes into the error text.
fn transport_error(e: reqwest::Error) -> GeocodeError {
    GeocodeError::Transport(e.without_url().to_string())
}

#[async_trait::async_trait]
impl GeocodeClient for GoogleGeocodeClient {
    #[tracing::instrument(name = "Geocoding address", skip(self))]
    async fn geocode(&self, address: &str) -> Result<Option<GeocodeResult>, GeocodeError> {
        self.lookup(("address", address)).await
    }

    #[tracing::instrument(name = "Reverse geocoding", skip(self))]
    async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<GeocodeResult>, GeocodeError> {
        let latlng = format!("{},{}", coordinates.lat, coordinates.lng);
        self.lookup(("latlng", &latlng)).await
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GoogleResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleResult {
    formatted_address: String,
    place_id: String,
    geometry: Geometry,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinates,
}

impl From<GoogleResult> for GeocodeResult {
    fn from(result: GoogleResult) -> Self {
        Self {
            coordinates: result.geometry.location,
            formatted_address: result.formatted_address,
            place_id: result.place_id,
            address_components: result.address_components,
        }
    }
}
