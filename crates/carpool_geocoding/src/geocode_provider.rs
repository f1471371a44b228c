use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub enum GeocodeProvider {
    /// https://nominatim.org/release-docs/latest/api/Search/
    Nominatim { base_url: String, user_agent: String },

    /// Deterministic in-memory table from exact address to `[lon, lat]`.
    /// Lets the whole pipeline run offline and makes tests reproducible.
    Fixed { table: HashMap<String, [f64; 2]> },
}
