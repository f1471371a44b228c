use std::path::Path;

use crate::{error::ProblemError, parsers::parser::RosterParser};

/// One row of the drivers table; the address is still unresolved.
#[derive(Debug, Clone)]
pub struct DriverRecord {
    pub first_name: String,
    pub last_name: String,
    pub spots: usize,
    pub address: String,
}

/// One row of the passengers table.
#[derive(Debug, Clone)]
pub struct PassengerRecord {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}

/// Parses the delimited roster tables. Tab-separated if the header contains
/// a tab, comma-separated otherwise; headers and cells are trimmed.
pub struct DelimitedRosterParser;

impl RosterParser for DelimitedRosterParser {
    fn parse_drivers<P: AsRef<Path>>(&self, file: P) -> Result<Vec<DriverRecord>, anyhow::Error> {
        let content = std::fs::read_to_string(file)?;
        parse_drivers(&content)
    }

    fn parse_passengers<P: AsRef<Path>>(
        &self,
        file: P,
    ) -> Result<Vec<PassengerRecord>, anyhow::Error> {
        let content = std::fs::read_to_string(file)?;
        parse_passengers(&content)
    }
}

pub fn parse_drivers(text: &str) -> Result<Vec<DriverRecord>, anyhow::Error> {
    let table = parse_table(text)?;

    let first_name = table.column_index("First Name")?;
    let last_name = table.column_index("Last Name")?;
    let spots = table.column_index("Spots available")?;
    let address = table.column_index("Address")?;

    table
        .rows
        .iter()
        .map(|row| {
            let name = format!("{} {}", row[first_name], row[last_name]);
            let spots = row[spots].parse().map_err(|_| {
                ProblemError::MalformedCapacity {
                    name,
                    value: row[spots].clone(),
                }
            })?;

            Ok(DriverRecord {
                first_name: row[first_name].clone(),
                last_name: row[last_name].clone(),
                spots,
                address: row[address].clone(),
            })
        })
        .collect()
}

pub fn parse_passengers(text: &str) -> Result<Vec<PassengerRecord>, anyhow::Error> {
    let table = parse_table(text)?;

    let first_name = table.column_index("First Name")?;
    let last_name = table.column_index("Last Name")?;
    let address = table.column_index("Address")?;

    Ok(table
        .rows
        .iter()
        .map(|row| PassengerRecord {
            first_name: row[first_name].clone(),
            last_name: row[last_name].clone(),
            address: row[address].clone(),
        })
        .collect())
}

struct RosterTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RosterTable {
    fn column_index(&self, name: &str) -> Result<usize, anyhow::Error> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| anyhow::anyhow!("missing column {name:?}"))
    }
}

fn parse_table(text: &str) -> Result<RosterTable, anyhow::Error> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header_line = lines
        .next()
        .ok_or_else(|| anyhow::anyhow!("empty roster file"))?;
    let delimiter = if header_line.contains('\t') { '\t' } else { ',' };

    let headers: Vec<String> = header_line
        .split(delimiter)
        .map(|header| header.trim().to_owned())
        .collect();

    let rows: Vec<Vec<String>> = lines
        .map(|line| {
            line.split(delimiter)
                .map(|cell| cell.trim().to_owned())
                .collect()
        })
        .collect();

    for (index, row) in rows.iter().enumerate() {
        if row.len() != headers.len() {
            anyhow::bail!(
                "row {} has {} fields, expected {}",
                index + 2,
                row.len(),
                headers.len()
            );
        }
    }

    Ok(RosterTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRIVERS_TSV: &str = "First Name\tLast Name\tSpots available\tAddress
Alice\tAnders \t2\t12 Beach Rd, Cowes VIC
 Bob\tBaker\t0\t3 Settlement Rd, Cowes VIC
";

    const PASSENGERS_CSV_RAGGED: &str = "First Name, Last Name, Address
Carol, Cruz, 7 Chapel St, Apt 2
";

    const PASSENGERS_CSV_SIMPLE: &str = "First Name, Last Name, Address
Carol, Cruz, 7 Chapel St
Dan, Drew, 9 Church St
";

    #[test]
    fn parses_tab_separated_drivers_and_trims_cells() {
        let records = parse_drivers(DRIVERS_TSV).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].first_name, "Alice");
        assert_eq!(records[0].last_name, "Anders");
        assert_eq!(records[0].spots, 2);
        assert_eq!(records[1].first_name, "Bob");
        assert_eq!(records[1].spots, 0);
    }

    #[test]
    fn parses_comma_separated_passengers() {
        let records = parse_passengers(PASSENGERS_CSV_SIMPLE).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].address, "7 Chapel St");
        assert_eq!(records[1].first_name, "Dan");
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(parse_passengers(PASSENGERS_CSV_RAGGED).is_err());
    }

    #[test]
    fn malformed_spots_is_a_typed_error() {
        let text = "First Name\tLast Name\tSpots available\tAddress
Eve\tEarl\t-1\tsomewhere
";
        let err = parse_drivers(text).unwrap_err();
        let problem = err.downcast_ref::<ProblemError>().unwrap();

        assert!(matches!(
            problem,
            ProblemError::MalformedCapacity { name, value }
                if name == "Eve Earl" && value == "-1"
        ));
    }

    #[test]
    fn missing_column_is_reported() {
        let err = parse_drivers("First Name,Last Name,Address\nEve,Earl,somewhere\n").unwrap_err();
        assert!(err.to_string().contains("Spots available"));
    }
}
