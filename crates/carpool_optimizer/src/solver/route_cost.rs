use crate::problem::{kilometers::Kilometers, location::Location};

/// Total path length of home -> stops... -> destination. With no stops this
/// is the direct home -> destination distance.
pub fn route_cost(home: &Location, stops: &[&Location], destination: &Location) -> Kilometers {
    let mut total = Kilometers::ZERO;
    let mut previous = home;

    for stop in stops {
        total += previous.haversine_distance(stop);
        previous = stop;
    }

    total + previous.haversine_distance(destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64) -> Location {
        Location::from_lat_lon(lat, 0.0)
    }

    #[test]
    fn empty_route_is_the_direct_leg() {
        let home = at(0.0);
        let destination = at(2.0);

        assert_eq!(
            route_cost(&home, &[], &destination),
            home.haversine_distance(&destination)
        );
    }

    #[test]
    fn cost_is_the_sum_of_consecutive_legs() {
        let home = at(0.0);
        let first = at(1.0);
        let second = at(2.5);
        let destination = at(3.0);

        let expected = home.haversine_distance(&first)
            + first.haversine_distance(&second)
            + second.haversine_distance(&destination);

        let cost = route_cost(&home, &[&first, &second], &destination);
        assert!((cost.value() - expected.value()).abs() < 1e-9);
    }
}
