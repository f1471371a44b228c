use crate::problem::{
    carpool_problem::{CarpoolProblem, CarpoolProblemBuilder},
    driver::Driver,
    location::Location,
    person::Person,
};

pub fn person_at(first_name: &str, lat: f64, lon: f64) -> Person {
    Person::new(
        first_name.to_owned(),
        String::from("Test"),
        Location::from_lat_lon(lat, lon),
    )
}

pub fn driver_at(first_name: &str, spots: usize, lat: f64, lon: f64) -> Driver {
    Driver::new(person_at(first_name, lat, lon), spots)
}

pub fn build_problem(
    drivers: Vec<Driver>,
    passengers: Vec<Person>,
    destination: Location,
) -> CarpoolProblem {
    let mut builder = CarpoolProblemBuilder::default();

    builder.set_drivers(drivers);
    builder.set_passengers(passengers);
    builder.set_destination(destination);

    builder.build().unwrap()
}
