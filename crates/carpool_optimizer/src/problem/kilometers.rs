use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kilometers(f64);

impl Kilometers {
    pub const ZERO: Kilometers = Kilometers(0.0);

    pub fn new(value: f64) -> Self {
        Kilometers(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Eq for Kilometers {}

impl PartialOrd for Kilometers {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kilometers {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.partial_cmp(&other.0).unwrap()
    }
}

impl From<f64> for Kilometers {
    fn from(value: f64) -> Self {
        Kilometers::new(value)
    }
}

impl Add for Kilometers {
    type Output = Kilometers;

    fn add(self, other: Kilometers) -> Kilometers {
        Kilometers(self.0 + other.0)
    }
}

impl AddAssign for Kilometers {
    fn add_assign(&mut self, other: Kilometers) {
        self.0 += other.0;
    }
}

impl Sum for Kilometers {
    fn sum<I: Iterator<Item = Kilometers>>(iter: I) -> Kilometers {
        iter.fold(Kilometers::ZERO, |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_and_orders() {
        let total: Kilometers = [1.5, 2.5, 3.0].map(Kilometers::new).into_iter().sum();
        assert_eq!(total, Kilometers::new(7.0));
        assert!(Kilometers::new(1.0) < Kilometers::new(2.0));
    }
}
