pub mod carpool_problem;
pub mod driver;
pub mod kilometers;
pub mod location;
pub mod person;
