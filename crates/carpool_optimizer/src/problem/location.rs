use geo::{Distance, Haversine};
use serde::Serialize;

use crate::problem::kilometers::Kilometers;

/// A resolved geographic coordinate. Produced by the geocoding layer and
/// treated as opaque input here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    point: geo::Point,
}

impl Location {
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self {
            point: geo::Point::new(lon, lat),
        }
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    /// Great-circle distance to another location.
    pub fn haversine_distance(&self, to: &Location) -> Kilometers {
        let haversine = Haversine;

        Kilometers::new(haversine.distance(self.point, to.point) / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_is_symmetric_and_zero_on_self() {
        let brussels = Location::from_lat_lon(50.85045, 4.34878);
        let antwerp = Location::from_lat_lon(51.21989, 4.40346);

        let there = brussels.haversine_distance(&antwerp);
        let back = antwerp.haversine_distance(&brussels);

        assert!((there.value() - back.value()).abs() < 1e-9);
        assert!(there.value() > 0.0);
        assert!(brussels.haversine_distance(&brussels).is_zero());
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Location::from_lat_lon(0.0, 0.0);
        let b = Location::from_lat_lon(1.0, 0.0);

        let distance = a.haversine_distance(&b).value();
        assert!((distance - 111.2).abs() < 1.0, "got {distance}");
    }
}
