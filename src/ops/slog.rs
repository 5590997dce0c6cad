//! Super-logarithm.

use crate::common::consts::{INF_POS, NAN, NEG_ONE, ONE, ZERO};
use crate::defs::{Error, SLOG_ITERATIONS, TOWER_CONVERGENCE_LIMIT};
use crate::num::HyperFloat;
use crate::ops::critical::{critical_section, CRITICAL_SLOG_VALUES};
use crate::ops::search::{step_search, Probe};
use log::debug;

/// Initial step of the slog refinement.
const SLOG_STEP: f64 = 0.001;

impl HyperFloat {
    /// Returns the super-logarithm of `self` with base `base`: the height `h` with
    /// `base^^h = self`.
    ///
    /// An analytic estimate is refined by a step search against [`HyperFloat::tetrate`]
    /// for at most `iterations` steps. `linear` selects the linear approximation of
    /// fractional heights for both.
    ///
    /// ## Errors
    ///
    ///  - LambertWNoConvergence: locating a fixed point of the tower failed.
    pub fn slog(&self, base: &Self, iterations: usize, linear: bool) -> Result<Self, Error> {
        let start = self.slog_internal(base, linear)?;
        if !start.is_finite() {
            return Ok(start);
        }

        let pos = step_search(start.to_f64(), SLOG_STEP, iterations, |h| {
            let t = base.tetrate(h, &ONE, linear)?;
            Ok(match t.cmp(self) {
                Some(0) => Probe::Exact,
                Some(c) if c > 0 => Probe::Above,
                _ => Probe::Below,
            })
        })?;

        Ok(pos.map_or(NAN, Self::from_f64))
    }

    /// Analytic super-logarithm: logarithms down to `(0, 1]`, then the critical section.
    pub(crate) fn slog_internal(&self, base: &Self, linear: bool) -> Result<Self, Error> {
        if base.is_nan() || self.is_nan() || base.sign <= 0.0 || *base == ONE {
            return Ok(NAN);
        }

        // towers of bases below 1 only reach 0 and 1 at integer heights
        if base.lt(&ONE) {
            return Ok(if *self == ONE {
                ZERO
            } else if self.is_zero() {
                NEG_ONE
            } else {
                NAN
            });
        }

        if self.mag < 0.0 || self.is_zero() {
            return Ok(NEG_ONE);
        }
        if *self == INF_POS {
            return Ok(INF_POS);
        }

        if base.lt(&Self::from_f64(TOWER_CONVERGENCE_LIMIT)) {
            let (inf_tower, _) = base.tower_fixed_points()?;
            if *self == inf_tower {
                return Ok(INF_POS);
            }
            if self.gt(&inf_tower) {
                return Ok(NAN);
            }
        }

        let mut result = 0.0;
        let mut copy = *self;

        if copy.layer - base.layer > 3.0 {
            let layerloss = copy.layer - base.layer - 3.0;
            result += layerloss;
            copy = Self::from_components_unchecked(copy.sign, copy.layer - layerloss, copy.mag);
        }

        for _ in 0..SLOG_ITERATIONS {
            if copy.lt(&ZERO) {
                copy = base.pow(&copy);
                result -= 1.0;
            } else if copy.le(&ONE) {
                let frac = if linear {
                    copy.to_f64() - 1.0
                } else {
                    critical_section(base.to_f64(), copy.to_f64(), &CRITICAL_SLOG_VALUES)
                };
                return Ok(Self::from_f64(result + frac));
            } else {
                result += 1.0;
                copy = copy.log(base);
            }
        }

        debug!("slog: iteration cap reached at {}", result);
        Ok(Self::from_f64(result))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::{TEN, TWO};
    use rand::random;

    #[test]
    fn test_slog() {
        let d = HyperFloat::from_f64(1e10);
        assert!(d.slog(&TEN, 10, false).unwrap().to_f64() == 2.0);
        assert!(ONE.slog(&TEN, SLOG_ITERATIONS, false).unwrap().to_f64() == 0.0);
        assert!(TEN.slog(&TEN, SLOG_ITERATIONS, false).unwrap().to_f64() == 1.0);

        // degenerate bases
        assert!(d.slog(&ONE, SLOG_ITERATIONS, false).unwrap().is_nan());
        assert!(d.slog(&ZERO, SLOG_ITERATIONS, false).unwrap().is_nan());
        assert!(d.slog(&NEG_ONE, SLOG_ITERATIONS, false).unwrap().is_nan());

        // bases below 1
        let half = HyperFloat::from_f64(0.5);
        assert!(ONE.slog(&half, SLOG_ITERATIONS, false).unwrap().to_f64() == 0.0);
        assert!(ZERO.slog(&half, SLOG_ITERATIONS, false).unwrap().to_f64() == -1.0);
        assert!(TWO.slog(&half, SLOG_ITERATIONS, false).unwrap().is_nan());

        // above the infinite tower of a convergent base
        let sqrt2 = HyperFloat::from_f64(core::f64::consts::SQRT_2);
        assert!(HyperFloat::from_f64(3.0).slog(&sqrt2, SLOG_ITERATIONS, false).unwrap().is_nan());

        assert!(INF_POS.slog(&TEN, SLOG_ITERATIONS, false).unwrap() == INF_POS);
        assert!(ZERO.slog(&TEN, SLOG_ITERATIONS, false).unwrap().to_f64() == -1.0);

        // layer shortcut
        let d = HyperFloat::from_components(1.0, 100.0, 1e10);
        let s = d.slog(&TEN, SLOG_ITERATIONS, false).unwrap().to_f64();
        assert!((s - 102.0).abs() < 1e-9);

        // round trip
        for _ in 0..300 {
            let b = HyperFloat::from_f64(2.0 + random::<f64>() * 8.0);
            let h = 0.1 + random::<f64>() * 3.8;
            for linear in [false, true] {
                let t = b.tetrate(h, &ONE, linear).unwrap();
                let s = t.slog(&b, SLOG_ITERATIONS, linear).unwrap().to_f64();
                assert!((s - h).abs() < 1e-10, "{:?} {} {} {}", b, h, s, linear);
            }
        }
    }

    #[test]
    fn test_slog_internal() {
        // the analytic estimate lands close to the refined value
        for _ in 0..300 {
            let b = HyperFloat::from_f64(2.0 + random::<f64>() * 8.0);
            let x = HyperFloat::from_f64(random::<f64>() * 1e6 + 1.0);
            let est = x.slog_internal(&b, false).unwrap().to_f64();
            let s = x.slog(&b, SLOG_ITERATIONS, false).unwrap().to_f64();
            assert!((est - s).abs() < 0.05, "{:?} {:?} {} {}", b, x, est, s);
        }

        // negative values go through b^x
        let s = HyperFloat::from_f64(-1.0).slog_internal(&TEN, true).unwrap().to_f64();
        assert!((s - (-1.0 + 0.1 - 1.0)).abs() < 1e-12);
    }
}
