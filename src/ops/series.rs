//! Closed forms of geometric and arithmetic price series.

use crate::common::consts::{ONE, TWO};
use crate::num::HyperFloat;

impl HyperFloat {
    /// Returns how many items of a geometric series can be bought with `resources`, when
    /// the first item costs `price_start`, each one costs `price_ratio` times more, and
    /// `current_owned` items are owned already.
    pub fn afford_geometric_series(
        resources: &Self,
        price_start: &Self,
        price_ratio: &Self,
        current_owned: &Self,
    ) -> Self {
        let actual_start = price_start.mul(&price_ratio.pow(current_owned));
        resources
            .div(&actual_start)
            .mul(&price_ratio.sub(&ONE))
            .add(&ONE)
            .log10()
            .div(&price_ratio.log10())
            .floor()
    }

    /// Returns the price of the next `num_items` items of a geometric series.
    pub fn sum_geometric_series(
        num_items: &Self,
        price_start: &Self,
        price_ratio: &Self,
        current_owned: &Self,
    ) -> Self {
        price_start
            .mul(&price_ratio.pow(current_owned))
            .mul(&ONE.sub(&price_ratio.pow(num_items)))
            .div(&ONE.sub(price_ratio))
    }

    /// Returns how many items of an arithmetic series can be bought with `resources`, when
    /// the first item costs `price_start`, each one costs `price_add` more, and
    /// `current_owned` items are owned already.
    pub fn afford_arithmetic_series(
        resources: &Self,
        price_start: &Self,
        price_add: &Self,
        current_owned: &Self,
    ) -> Self {
        let actual_start = price_start.add(&current_owned.mul(price_add));
        let b = actual_start.sub(&price_add.div(&TWO));
        let b2 = b.sqr();
        b.neg()
            .add(&b2.add(&price_add.mul(resources).mul(&TWO)).sqrt())
            .div(price_add)
            .floor()
    }

    /// Returns the price of the next `num_items` items of an arithmetic series.
    pub fn sum_arithmetic_series(
        num_items: &Self,
        price_start: &Self,
        price_add: &Self,
        current_owned: &Self,
    ) -> Self {
        let actual_start = price_start.add(&current_owned.mul(price_add));
        num_items
            .div(&TWO)
            .mul(&actual_start.mul(&TWO).add(&num_items.sub(&ONE).mul(price_add)))
    }

    /// Returns the time until a purchase of `cost` pays for itself: the time to afford it
    /// at `current_rps` plus the time it takes its `delta_rps` to repay it.
    pub fn efficiency_of_purchase(cost: &Self, current_rps: &Self, delta_rps: &Self) -> Self {
        cost.div(current_rps).add(&cost.div(delta_rps))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::{TEN, ZERO};

    #[test]
    fn test_series() {
        let f = HyperFloat::from_f64;

        let s = HyperFloat::sum_geometric_series(&f(3.0), &TEN, &TWO, &ZERO);
        assert!((s.to_f64() - 70.0).abs() < 1e-12);
        let s = HyperFloat::sum_geometric_series(&f(2.0), &TEN, &TWO, &ONE);
        assert!((s.to_f64() - 60.0).abs() < 1e-12);
        let n = HyperFloat::afford_geometric_series(&f(75.0), &TEN, &TWO, &ZERO);
        assert_eq!(n.to_f64(), 3.0);

        let s = HyperFloat::sum_arithmetic_series(&f(3.0), &TEN, &f(5.0), &ZERO);
        assert!((s.to_f64() - 45.0).abs() < 1e-12);
        let n = HyperFloat::afford_arithmetic_series(&f(50.0), &TEN, &f(5.0), &ZERO);
        assert_eq!(n.to_f64(), 3.0);

        let e = HyperFloat::efficiency_of_purchase(&f(100.0), &TEN, &f(5.0));
        assert!((e.to_f64() - 30.0).abs() < 1e-12);

        // huge purchases stay finite
        let n = HyperFloat::afford_geometric_series(&HyperFloat::from_components(1.0, 1.0, 1e6), &TEN, &TWO, &ZERO);
        assert!(n.is_finite() && n.gt(&f(3e6)));
    }
}
