use serde::Serialize;

use crate::problem::{driver::DriverIdx, kilometers::Kilometers, person::PersonIdx};

/// One driver's planned route: assigned passengers in pickup order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverRoute {
    driver: DriverIdx,
    stops: Vec<PersonIdx>,
    cost: Kilometers,
}

impl DriverRoute {
    pub(crate) fn new(driver: DriverIdx, stops: Vec<PersonIdx>, cost: Kilometers) -> Self {
        Self {
            driver,
            stops,
            cost,
        }
    }

    pub fn driver(&self) -> DriverIdx {
        self.driver
    }

    pub fn stops(&self) -> &[PersonIdx] {
        &self.stops
    }

    pub fn cost(&self) -> Kilometers {
        self.cost
    }
}

/// The full solution snapshot: one route per driver (possibly empty) plus
/// the summed distance. Immutable once returned by the solver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    routes: Vec<DriverRoute>,
    total_cost: Kilometers,
}

impl Assignment {
    pub(crate) fn new(routes: Vec<DriverRoute>, total_cost: Kilometers) -> Self {
        Self { routes, total_cost }
    }

    pub fn routes(&self) -> &[DriverRoute] {
        &self.routes
    }

    pub fn route(&self, driver: DriverIdx) -> &DriverRoute {
        &self.routes[driver.get()]
    }

    pub fn total_cost(&self) -> Kilometers {
        self.total_cost
    }
}
