use serde::Deserialize;
use tracing::debug;

use crate::error::GeocodeError;

pub const NOMINATIM_SEARCH_API_URL: &str = "https://nominatim.openstreetmap.org/search";

pub struct NominatimClientParams {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for NominatimClientParams {
    fn default() -> Self {
        Self {
            base_url: NOMINATIM_SEARCH_API_URL.to_owned(),
            user_agent: String::from("carpool"),
        }
    }
}

#[derive(Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

pub struct NominatimClient {
    params: NominatimClientParams,
    client: reqwest::Client,
}

impl NominatimClient {
    pub fn new(params: NominatimClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    /// Resolves a free-form address to a point, taking the first match.
    pub async fn search(&self, query: &str) -> Result<geo_types::Point, GeocodeError> {
        let response = self
            .client
            .get(&self.params.base_url)
            .header(reqwest::header::USER_AGENT, &self.params.user_agent)
            .query(&[("q", query), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GeocodeError::UnexpectedResponse(format!(
                "{status} - {message}"
            )));
        }

        let results: Vec<SearchResult> = response.json().await?;

        let Some(result) = results.into_iter().next() else {
            return Err(GeocodeError::Unresolved {
                query: query.to_owned(),
            });
        };

        debug!("Nominatim: resolved {:?} to {}", query, result.display_name);

        let lat = parse_coordinate("latitude", &result.lat)?;
        let lon = parse_coordinate("longitude", &result.lon)?;

        Ok(geo_types::Point::new(lon, lat))
    }
}

fn parse_coordinate(what: &str, value: &str) -> Result<f64, GeocodeError> {
    value
        .parse()
        .map_err(|_| GeocodeError::UnexpectedResponse(format!("invalid {what}: {value:?}")))
}
