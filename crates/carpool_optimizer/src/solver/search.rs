use tracing::debug;

use crate::{
    problem::{
        carpool_problem::CarpoolProblem, driver::DriverIdx, kilometers::Kilometers,
        location::Location, person::PersonIdx,
    },
    solver::{
        assignment::{Assignment, DriverRoute},
        route_order::best_order,
    },
};

/// Exhaustive search over every capacity-respecting distribution of
/// passengers among drivers, combined with the optimal pickup order per
/// driver. Exact and exponential; meant for small rosters.
pub struct ExactSolver {
    problem: CarpoolProblem,
}

impl ExactSolver {
    pub fn new(problem: CarpoolProblem) -> Self {
        Self { problem }
    }

    pub fn problem(&self) -> &CarpoolProblem {
        &self.problem
    }

    /// Runs to completion and returns the minimal-cost assignment. The
    /// builder already rejected infeasible inputs, so a result always
    /// exists. Deterministic for a fixed driver/passenger ordering.
    pub fn solve(&self) -> Assignment {
        debug!(
            drivers = self.problem.drivers().len(),
            passengers = self.problem.passengers().len(),
            "starting exhaustive carpool search"
        );

        let mut scratch: Vec<Vec<PersonIdx>> = vec![Vec::new(); self.problem.drivers().len()];
        let mut seated = vec![false; self.problem.passengers().len()];
        let mut best: Option<Assignment> = None;

        self.assign(&mut scratch, &mut seated, &mut best);

        best.expect("a feasible problem always yields a candidate")
    }

    /// Tentatively seats one unseated passenger with one driver that still
    /// has room, recurses, then undoes the seating before trying the next
    /// pair. Each frame restores the scratch state it touched, so sibling
    /// branches always observe the same partial assignment.
    fn assign(
        &self,
        scratch: &mut Vec<Vec<PersonIdx>>,
        seated: &mut [bool],
        best: &mut Option<Assignment>,
    ) {
        if seated.iter().all(|&taken| taken) {
            let candidate = self.evaluate(scratch);

            if best
                .as_ref()
                .is_none_or(|current| candidate.total_cost() < current.total_cost())
            {
                debug!(
                    total_km = candidate.total_cost().value(),
                    "found a better plan"
                );
                *best = Some(candidate);
            }

            return;
        }

        for driver_index in 0..scratch.len() {
            if scratch[driver_index].len() >= self.problem.drivers()[driver_index].spots() {
                continue;
            }

            for passenger_index in 0..seated.len() {
                if seated[passenger_index] {
                    continue;
                }

                seated[passenger_index] = true;
                scratch[driver_index].push(PersonIdx::new(passenger_index));

                self.assign(scratch, seated, best);

                scratch[driver_index].pop();
                seated[passenger_index] = false;
            }
        }
    }

    /// Scores one complete partition: optimal pickup order per driver,
    /// summed. The returned snapshot owns its data and never references the
    /// scratch buffers.
    fn evaluate(&self, scratch: &[Vec<PersonIdx>]) -> Assignment {
        let destination = self.problem.destination();
        let mut routes = Vec::with_capacity(scratch.len());
        let mut total = Kilometers::ZERO;

        for (driver_index, assigned) in scratch.iter().enumerate() {
            let driver = &self.problem.drivers()[driver_index];
            let stops: Vec<(PersonIdx, &Location)> = assigned
                .iter()
                .map(|&person| (person, self.problem.passenger(person).location()))
                .collect();

            let (cost, order) = best_order(driver.location(), &stops, destination);

            total += cost;
            routes.push(DriverRoute::new(DriverIdx::new(driver_index), order, cost));
        }

        Assignment::new(routes, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{build_problem, driver_at, person_at};

    #[test]
    fn zero_spot_drivers_ride_alone() {
        let destination = Location::from_lat_lon(2.0, 0.0);
        let problem = build_problem(
            vec![driver_at("Ana", 0, 0.0, 0.0), driver_at("Bo", 1, 0.5, 0.0)],
            vec![person_at("Cleo", 0.6, 0.0)],
            destination,
        );
        let direct = problem.driver(DriverIdx::new(0)).location().haversine_distance(&destination);

        let assignment = ExactSolver::new(problem).solve();

        let lone = assignment.route(DriverIdx::new(0));
        assert!(lone.stops().is_empty());
        assert_eq!(lone.cost(), direct);
        assert_eq!(
            assignment.route(DriverIdx::new(1)).stops(),
            &[PersonIdx::new(0)]
        );
    }

    #[test]
    fn total_cost_is_the_sum_of_route_costs() {
        let problem = build_problem(
            vec![driver_at("Ana", 2, 0.0, 0.0), driver_at("Bo", 2, 1.0, 1.0)],
            vec![
                person_at("Cleo", 0.2, 0.1),
                person_at("Dee", 0.9, 0.8),
                person_at("Eli", 1.1, 1.2),
            ],
            Location::from_lat_lon(2.0, 2.0),
        );

        let assignment = ExactSolver::new(problem).solve();

        let summed: Kilometers = assignment.routes().iter().map(DriverRoute::cost).sum();
        assert!((summed.value() - assignment.total_cost().value()).abs() < 1e-9);
    }
}
