use std::{collections::HashMap, fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use comfy_table::Table;
use tracing::info;

use carpool_geocoding::{
    error::GeocodeError,
    geocode_client::GeocodeClient,
    geocode_provider::GeocodeProvider,
    nominatim_api::NOMINATIM_SEARCH_API_URL,
};
use carpool_optimizer::{
    parsers::{
        parser::RosterParser,
        roster::{DelimitedRosterParser, DriverRecord, PassengerRecord},
    },
    problem::{
        carpool_problem::{CarpoolProblem, CarpoolProblemBuilder},
        driver::Driver,
        location::Location,
        person::Person,
    },
    solver::{assignment::Assignment, search::ExactSolver},
};

use crate::export;

#[derive(Args)]
pub struct PlanArgs {
    /// Drivers roster: First Name, Last Name, Spots available, Address
    #[arg(short, long)]
    drivers: PathBuf,

    /// Passengers roster: First Name, Last Name, Address
    #[arg(short, long)]
    passengers: PathBuf,

    /// Shared destination address
    #[arg(long)]
    destination: String,

    /// JSON table of address -> [lon, lat], replacing the Nominatim lookup
    #[arg(short, long)]
    fixtures: Option<PathBuf>,

    /// Write the planned routes as GeoJSON
    #[arg(short, long)]
    out: Option<PathBuf>,
}

pub async fn run(args: PlanArgs) -> Result<(), anyhow::Error> {
    let parser = DelimitedRosterParser;
    let driver_records = parser.parse_drivers(&args.drivers)?;
    let passenger_records = parser.parse_passengers(&args.passengers)?;

    print_rosters(&driver_records, &passenger_records);

    let client = GeocodeClient::new(build_provider(&args)?);
    let problem = build_problem(&client, &args, &driver_records, &passenger_records).await?;

    let solver = ExactSolver::new(problem);
    let assignment = solver.solve();

    print_plan(solver.problem(), &assignment);
    info!("Total distance: {:.1} km", assignment.total_cost().value());

    if let Some(out) = &args.out {
        let collection = export::to_geojson(solver.problem(), &assignment);
        std::fs::write(out, serde_json::to_string_pretty(&collection)?)?;
        info!("Wrote {}", out.display());
    }

    Ok(())
}

fn build_provider(args: &PlanArgs) -> Result<GeocodeProvider, anyhow::Error> {
    match &args.fixtures {
        Some(path) => {
            let file = File::open(path)?;
            let table: HashMap<String, [f64; 2]> = serde_json::from_reader(BufReader::new(file))?;

            Ok(GeocodeProvider::Fixed { table })
        }
        None => Ok(GeocodeProvider::Nominatim {
            base_url: std::env::var("NOMINATIM_URL")
                .unwrap_or_else(|_| NOMINATIM_SEARCH_API_URL.to_owned()),
            user_agent: String::from("carpool_cli"),
        }),
    }
}

async fn build_problem(
    client: &GeocodeClient,
    args: &PlanArgs,
    driver_records: &[DriverRecord],
    passenger_records: &[PassengerRecord],
) -> Result<CarpoolProblem, anyhow::Error> {
    let destination = resolve(client, "destination", &args.destination).await?;

    let mut drivers = Vec::with_capacity(driver_records.len());
    for record in driver_records {
        let who = format!("{} {}", record.first_name, record.last_name);
        let location = resolve(client, &who, &record.address).await?;
        let person = Person::new(record.first_name.clone(), record.last_name.clone(), location);

        drivers.push(Driver::new(person, record.spots));
    }

    let mut passengers = Vec::with_capacity(passenger_records.len());
    for record in passenger_records {
        let who = format!("{} {}", record.first_name, record.last_name);
        let location = resolve(client, &who, &record.address).await?;

        passengers.push(Person::new(
            record.first_name.clone(),
            record.last_name.clone(),
            location,
        ));
    }

    let mut builder = CarpoolProblemBuilder::default();
    builder.set_drivers(drivers);
    builder.set_passengers(passengers);
    builder.set_destination(destination);

    Ok(builder.build()?)
}

/// Every address must resolve before the search starts; the first failure
/// aborts the run with the offending name and address.
async fn resolve(
    client: &GeocodeClient,
    who: &str,
    address: &str,
) -> Result<Location, anyhow::Error> {
    match client.resolve(address).await {
        Ok(point) => Ok(Location::from_lat_lon(point.y(), point.x())),
        Err(GeocodeError::Unresolved { .. }) => {
            Err(anyhow::anyhow!("could not geocode {who} at {address:?}"))
        }
        Err(other) => Err(other.into()),
    }
}

fn print_rosters(drivers: &[DriverRecord], passengers: &[PassengerRecord]) {
    let mut table = Table::new();
    table.set_header(vec!["Driver", "Spots", "Address"]);
    for record in drivers {
        table.add_row(vec![
            format!("{} {}", record.first_name, record.last_name),
            record.spots.to_string(),
            record.address.clone(),
        ]);
    }
    println!("{table}");

    let mut table = Table::new();
    table.set_header(vec!["Passenger", "Address"]);
    for record in passengers {
        table.add_row(vec![
            format!("{} {}", record.first_name, record.last_name),
            record.address.clone(),
        ]);
    }
    println!("{table}");
}

fn print_plan(problem: &CarpoolProblem, assignment: &Assignment) {
    let mut table = Table::new();
    table.set_header(vec!["Driver", "Pickup order", "Distance (km)"]);

    for route in assignment.routes() {
        let driver = problem.driver(route.driver());
        let stops = route
            .stops()
            .iter()
            .map(|&person| problem.passenger(person).full_name())
            .collect::<Vec<_>>()
            .join(" -> ");

        table.add_row(vec![
            driver.full_name(),
            stops,
            format!("{:.1}", route.cost().value()),
        ]);
    }

    println!("{table}");
}
