use std::path::Path;

use crate::parsers::roster::{DriverRecord, PassengerRecord};

pub trait RosterParser {
    fn parse_drivers<P: AsRef<Path>>(&self, file: P) -> Result<Vec<DriverRecord>, anyhow::Error>;

    fn parse_passengers<P: AsRef<Path>>(
        &self,
        file: P,
    ) -> Result<Vec<PassengerRecord>, anyhow::Error>;
}
