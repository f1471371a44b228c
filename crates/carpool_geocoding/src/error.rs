use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The geocoder returned no match. Callers attach the person this
    /// belonged to; an unresolved address always aborts the run.
    #[error("no match found for {query:?}")]
    Unresolved { query: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected response from geocoder: {0}")]
    UnexpectedResponse(String),
}
