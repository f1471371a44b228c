use crate::{
    problem::{kilometers::Kilometers, location::Location, person::PersonIdx},
    solver::route_cost::route_cost,
};

/// Finds the pickup order minimizing the route cost for one driver and a
/// fixed set of assigned passengers. Exhaustive over all permutations, so
/// only suitable for small per-driver counts. The first permutation reaching
/// the minimum wins, which keeps the result deterministic for a given input
/// order.
pub fn best_order(
    home: &Location,
    stops: &[(PersonIdx, &Location)],
    destination: &Location,
) -> (Kilometers, Vec<PersonIdx>) {
    let mut picked = Vec::with_capacity(stops.len());
    let mut used = vec![false; stops.len()];
    let mut best: Option<(Kilometers, Vec<PersonIdx>)> = None;

    permute(home, stops, destination, &mut picked, &mut used, &mut best);

    best.expect("the search evaluates at least the empty permutation")
}

fn permute(
    home: &Location,
    stops: &[(PersonIdx, &Location)],
    destination: &Location,
    picked: &mut Vec<usize>,
    used: &mut [bool],
    best: &mut Option<(Kilometers, Vec<PersonIdx>)>,
) {
    if picked.len() == stops.len() {
        let ordered: Vec<&Location> = picked.iter().map(|&i| stops[i].1).collect();
        let cost = route_cost(home, &ordered, destination);

        if best.as_ref().is_none_or(|(current, _)| cost < *current) {
            let order = picked.iter().map(|&i| stops[i].0).collect();
            *best = Some((cost, order));
        }

        return;
    }

    for i in 0..stops.len() {
        if used[i] {
            continue;
        }

        used[i] = true;
        picked.push(i);
        permute(home, stops, destination, picked, used, best);
        picked.pop();
        used[i] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lon: f64) -> Location {
        Location::from_lat_lon(lat, lon)
    }

    #[test]
    fn empty_assignment_costs_the_direct_leg() {
        let home = at(0.0, 0.0);
        let destination = at(2.0, 0.0);

        let (cost, order) = best_order(&home, &[], &destination);

        assert!(order.is_empty());
        assert_eq!(cost, home.haversine_distance(&destination));
    }

    #[test]
    fn picks_the_geographically_sensible_order() {
        let home = at(0.0, 0.0);
        let near = at(1.0, 0.0);
        let far = at(2.0, 0.0);
        let destination = at(3.0, 0.0);

        let stops = [(PersonIdx::new(0), &near), (PersonIdx::new(1), &far)];
        let (_, order) = best_order(&home, &stops, &destination);

        assert_eq!(order, vec![PersonIdx::new(0), PersonIdx::new(1)]);
    }

    #[test]
    fn no_permutation_beats_the_chosen_one() {
        let home = at(0.0, 0.0);
        let a = at(0.8, 0.3);
        let b = at(0.2, 0.9);
        let c = at(1.4, 0.1);
        let destination = at(1.0, 1.0);

        let stops = [
            (PersonIdx::new(0), &a),
            (PersonIdx::new(1), &b),
            (PersonIdx::new(2), &c),
        ];
        let (cost, _) = best_order(&home, &stops, &destination);

        let orders: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for order in orders {
            let locations: Vec<&Location> = order.iter().map(|&i| stops[i].1).collect();
            let alternative = route_cost(&home, &locations, &destination);
            assert!(cost <= alternative, "order {order:?} beat the optimizer");
        }
    }
}
