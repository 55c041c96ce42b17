use axum::{
    Json,
    extract::{Query, State},
};
use poolfinder_core::{Bounds, Coordinates, GeocodeClient, GeocodeResult};
use serde::Deserialize;

use super::ApiError;

#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct ReverseGeocodeQuery {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct BoundsRequest {
    pub points: Vec<Coordinates>,
}

fn found(result: Option<GeocodeResult>) -> Result<Json<GeocodeResult>, ApiError> {
    result
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No results found".to_owned()))
}

#[tracing::instrument(name = "Geocode", skip(client))]
pub async fn geocode<G>(
    State(client): State<G>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<GeocodeResult>, ApiError>
where
    G: GeocodeClient + Clone,
{
    let address = query.address.trim();
    if address.is_empty() {
        return Err(ApiError::BadRequest("Address is required".to_owned()));
    }

    found(client.geocode(address).await?)
}

#[tracing::instrument(name = "Reverse geocode", skip(client))]
pub async fn reverse_geocode<G>(
    State(client): State<G>,
    Query(query): Query<ReverseGeocodeQuery>,
) -> Result<Json<GeocodeResult>, ApiError>
where
    G: GeocodeClient + Clone,
{
    let coordinates = Coordinates::new(query.lat, query.lng)?;

    found(client.reverse_geocode(coordinates).await?)
}

/// Smallest box containing every submitted point.
pub async fn bounds(Json(request): Json<BoundsRequest>) -> Result<Json<Bounds>, ApiError> {
    let points = request
        .points
        .into_iter()
        .map(|point| Coordinates::new(point.lat, point.lng))
        .collect::<Result<Vec<_>, _>>()?;

    Bounds::enclosing(&points)
        .map(Json)
        .ok_or_else(|| ApiError::BadRequest("At least one point is required".to_owned()))
}
