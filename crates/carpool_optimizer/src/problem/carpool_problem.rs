use crate::{
    error::ProblemError,
    problem::{
        driver::{Driver, DriverIdx},
        location::Location,
        person::{Person, PersonIdx},
    },
};

/// The full search input: drivers, passengers and the shared destination.
/// Read-only once built.
#[derive(Debug)]
pub struct CarpoolProblem {
    drivers: Vec<Driver>,
    passengers: Vec<Person>,
    destination: Location,
    total_spots: usize,
}

impl CarpoolProblem {
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn driver(&self, driver_id: DriverIdx) -> &Driver {
        &self.drivers[driver_id]
    }

    pub fn passengers(&self) -> &[Person] {
        &self.passengers
    }

    pub fn passenger(&self, person_id: PersonIdx) -> &Person {
        &self.passengers[person_id]
    }

    pub fn destination(&self) -> &Location {
        &self.destination
    }

    pub fn total_spots(&self) -> usize {
        self.total_spots
    }
}

#[derive(Default)]
pub struct CarpoolProblemBuilder {
    drivers: Vec<Driver>,
    passengers: Vec<Person>,
    destination: Option<Location>,
}

impl CarpoolProblemBuilder {
    pub fn set_drivers(&mut self, drivers: Vec<Driver>) -> &mut CarpoolProblemBuilder {
        self.drivers = drivers;
        self
    }

    pub fn set_passengers(&mut self, passengers: Vec<Person>) -> &mut CarpoolProblemBuilder {
        self.passengers = passengers;
        self
    }

    pub fn set_destination(&mut self, destination: Location) -> &mut CarpoolProblemBuilder {
        self.destination = Some(destination);
        self
    }

    /// Feasibility is checked here, before any search starts: every
    /// passenger must have a seat somewhere.
    pub fn build(self) -> Result<CarpoolProblem, ProblemError> {
        let total_spots: usize = self.drivers.iter().map(Driver::spots).sum();

        if total_spots < self.passengers.len() {
            return Err(ProblemError::InfeasibleCapacity {
                spots: total_spots,
                passengers: self.passengers.len(),
            });
        }

        Ok(CarpoolProblem {
            drivers: self.drivers,
            passengers: self.passengers,
            destination: self.destination.expect("Destination is required"),
            total_spots,
        })
    }
}
