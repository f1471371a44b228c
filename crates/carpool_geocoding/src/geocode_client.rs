use crate::{
    error::GeocodeError,
    geocode_provider::GeocodeProvider,
    nominatim_api::{NominatimClient, NominatimClientParams},
};

pub struct GeocodeClient {
    provider: GeocodeProvider,
    nominatim: NominatimClient,
}

impl GeocodeClient {
    pub fn new(provider: GeocodeProvider) -> Self {
        let params = match &provider {
            GeocodeProvider::Nominatim {
                base_url,
                user_agent,
            } => NominatimClientParams {
                base_url: base_url.clone(),
                user_agent: user_agent.clone(),
            },
            GeocodeProvider::Fixed { .. } => NominatimClientParams::default(),
        };

        Self {
            provider,
            nominatim: NominatimClient::new(params),
        }
    }

    pub async fn resolve(&self, query: &str) -> Result<geo_types::Point, GeocodeError> {
        match &self.provider {
            GeocodeProvider::Nominatim { .. } => self.nominatim.search(query).await,
            GeocodeProvider::Fixed { table } => table
                .get(query.trim())
                .map(|&[lon, lat]| geo_types::Point::new(lon, lat))
                .ok_or_else(|| GeocodeError::Unresolved {
                    query: query.to_owned(),
                }),
        }
    }
}
