use serde::Serialize;

use crate::{define_index_newtype, problem::location::Location};

define_index_newtype!(PersonIdx, Person);

/// A named person with a resolved home coordinate. The name is only used
/// for reporting, never for correctness.
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    location: Location,
}

impl Person {
    pub fn new(first_name: String, last_name: String, location: Location) -> Self {
        Self {
            first_name,
            last_name,
            location,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
