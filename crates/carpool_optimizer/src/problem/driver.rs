use serde::Serialize;

use crate::{
    define_index_newtype,
    problem::{location::Location, person::Person},
};

define_index_newtype!(DriverIdx, Driver);

/// A person with a car and a fixed number of free seats. `spots` is never
/// mutated during a search.
#[derive(Debug, Clone, Serialize)]
pub struct Driver {
    person: Person,
    spots: usize,
}

impl Driver {
    pub fn new(person: Person, spots: usize) -> Self {
        Self { person, spots }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn spots(&self) -> usize {
        self.spots
    }

    pub fn location(&self) -> &Location {
        self.person.location()
    }

    pub fn full_name(&self) -> String {
        self.person.full_name()
    }
}
