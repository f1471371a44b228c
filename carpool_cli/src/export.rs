use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

use carpool_optimizer::{
    problem::carpool_problem::CarpoolProblem, solver::assignment::Assignment,
};

/// Turns the final plan into the data a map renderer needs: a marker per
/// person and destination, plus one LineString per driver tracing
/// home -> pickups -> destination.
pub fn to_geojson(problem: &CarpoolProblem, assignment: &Assignment) -> FeatureCollection {
    let destination = problem.destination();
    let mut features = Vec::new();

    features.push(point_feature(
        destination.lon(),
        destination.lat(),
        String::from("Destination"),
        "destination",
    ));

    for route in assignment.routes() {
        let driver = problem.driver(route.driver());
        let home = driver.location();

        features.push(point_feature(
            home.lon(),
            home.lat(),
            driver.full_name(),
            "driver",
        ));

        let mut line = vec![vec![home.lon(), home.lat()]];
        for &stop in route.stops() {
            let passenger = problem.passenger(stop);
            let location = passenger.location();

            features.push(point_feature(
                location.lon(),
                location.lat(),
                passenger.full_name(),
                "passenger",
            ));
            line.push(vec![location.lon(), location.lat()]);
        }
        line.push(vec![destination.lon(), destination.lat()]);

        let mut properties = JsonObject::new();
        properties.insert("name".to_owned(), JsonValue::from(driver.full_name()));
        properties.insert(
            "distance_km".to_owned(),
            JsonValue::from(route.cost().value()),
        );

        features.push(Feature {
            geometry: Some(Geometry::new(Value::LineString(line))),
            properties: Some(properties),
            ..Default::default()
        });
    }

    FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    }
}

fn point_feature(lon: f64, lat: f64, name: String, kind: &str) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("name".to_owned(), JsonValue::from(name));
    properties.insert("kind".to_owned(), JsonValue::from(kind));

    Feature {
        geometry: Some(Geometry::new(Value::Point(vec![lon, lat]))),
        properties: Some(properties),
        ..Default::default()
    }
}
