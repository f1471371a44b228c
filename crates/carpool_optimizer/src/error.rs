use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProblemError {
    #[error(
        "total capacity of {spots} spots cannot seat {passengers} passengers (short by {})",
        .passengers - .spots
    )]
    InfeasibleCapacity { spots: usize, passengers: usize },

    #[error("driver {name} has a malformed spot count: {value:?}")]
    MalformedCapacity { name: String, value: String },
}
