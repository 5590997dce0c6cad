//! Lambert W function.
//!
//! Both solvers run Halley's iteration on `w·e^w = z` in the form
//! `w' = w - (w - z·e^-w) / (w + 1 - (w + 2)(w - z·e^-w) / (2w + 2))`.
//! The scalar solver handles arguments that fit in `f64`, the extended one runs the same
//! iteration on [`HyperFloat`] values.

use crate::common::consts::{INF_NEG, NAN, ONE, TWO, ZERO};
use crate::defs::{Error, LAMBERTW_ITERATIONS, LAMBERTW_MIN_ARG, LAMBERTW_TOLERANCE, OMEGA};
use crate::num::HyperFloat;
use log::warn;

/// Principal branch results are `ln x` at and above `eee15`.
const LAMBERTW_LN_THRESHOLD: HyperFloat = HyperFloat::from_components_unchecked(1.0, 2.0, 1e15);

/// Principal branch arguments this close to zero are their own W.
const LAMBERTW_TINY: f64 = 1e-300;

impl HyperFloat {
    /// Returns the Lambert W function of `self`: the `w` with `w·e^w = self`.
    ///
    /// `principal` selects the branch W₀; otherwise W₋₁ is computed, which is real only
    /// for arguments in `[-1/e, 0)`. Arguments below the branch point give NaN.
    ///
    /// ## Errors
    ///
    ///  - LambertWNoConvergence: the iteration did not converge. This can happen very close
    ///    to the branch point.
    pub fn lambertw(&self, principal: bool) -> Result<Self, Error> {
        if self.is_nan() || self.lt(&Self::from_f64(LAMBERTW_MIN_ARG)) {
            return Ok(NAN);
        }

        if principal {
            if self.abs().lt(&Self::from_f64(LAMBERTW_TINY)) {
                Ok(*self)
            } else if self.mag < 0.0 {
                lambertw_scalar(self.to_f64(), LAMBERTW_TOLERANCE, true).map(Self::from_f64)
            } else if self.layer == 0.0 {
                lambertw_scalar(self.sign * self.mag, LAMBERTW_TOLERANCE, true).map(Self::from_f64)
            } else if self.lt(&LAMBERTW_LN_THRESHOLD) {
                lambertw_extended(self, LAMBERTW_TOLERANCE, true)
            } else {
                Ok(self.ln())
            }
        } else if self.sign == 1.0 {
            Ok(NAN)
        } else if self.layer == 0.0 {
            lambertw_scalar(self.sign * self.mag, LAMBERTW_TOLERANCE, false).map(Self::from_f64)
        } else if self.layer == 1.0 {
            lambertw_extended(self, LAMBERTW_TOLERANCE, false)
        } else {
            Ok(self.neg().recip().lambertw(true)?.neg())
        }
    }
}

/// Halley iteration on `f64`.
fn lambertw_scalar(z: f64, tol: f64, principal: bool) -> Result<f64, Error> {
    if !z.is_finite() {
        return Ok(z);
    }

    let mut w = if principal {
        if z == 0.0 {
            return Ok(z);
        }
        if z == 1.0 {
            return Ok(OMEGA);
        }
        if z < 10.0 {
            0.0
        } else {
            z.ln() - z.ln().ln()
        }
    } else {
        if z == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if z <= -0.1 {
            -2.0
        } else {
            (-z).ln() - (-(-z).ln()).ln()
        }
    };

    for _ in 0..LAMBERTW_ITERATIONS {
        let wewz = w - z * (-w).exp();
        let wn = w - wewz / (w + 1.0 - (w + 2.0) * wewz / (2.0 * w + 2.0));
        if (wn - w).abs() < tol * wn.abs() {
            return Ok(wn);
        }
        w = wn;
    }

    warn!("lambertw: no convergence for {}", z);
    Err(Error::LambertWNoConvergence)
}

/// Halley iteration on extended values.
fn lambertw_extended(z: &HyperFloat, tol: f64, principal: bool) -> Result<HyperFloat, Error> {
    if !z.mag.is_finite() {
        return Ok(*z);
    }

    let mut w = if principal {
        if z.is_zero() {
            return Ok(ZERO);
        }
        if *z == ONE {
            return Ok(HyperFloat::from_f64(OMEGA));
        }
        z.ln()
    } else {
        if z.is_zero() {
            return Ok(INF_NEG);
        }
        z.neg().ln()
    };

    let tol = HyperFloat::from_f64(tol);

    for _ in 0..LAMBERTW_ITERATIONS {
        let ew = w.neg().exp();
        let wewz = w.sub(&z.mul(&ew));
        let denom = w
            .add(&ONE)
            .sub(&w.add(&TWO).mul(&wewz).div(&TWO.mul(&w).add(&TWO)));
        let wn = w.sub(&wewz.div(&denom));
        if wn.sub(&w).abs().lt(&wn.abs().mul(&tol)) {
            return Ok(wn);
        }
        w = wn;
    }

    warn!("lambertw: no convergence for {}", z);
    Err(Error::LambertWNoConvergence)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::INF_POS;
    use rand::random;

    #[test]
    fn test_lambertw() {
        assert!(ZERO.lambertw(true).unwrap().is_zero());
        assert_eq!(ONE.lambertw(true).unwrap().to_f64(), OMEGA);
        assert!(HyperFloat::from_f64(-0.5).lambertw(true).unwrap().is_nan());
        assert!(ONE.lambertw(false).unwrap().is_nan());
        assert!(NAN.lambertw(true).unwrap().is_nan());
        assert!(INF_POS.lambertw(true).unwrap() == INF_POS);

        // W(e) = 1
        let w = HyperFloat::from_f64(core::f64::consts::E).lambertw(true).unwrap();
        assert!((w.to_f64() - 1.0).abs() < 1e-12);

        // W₋₁(-ln2 / 2) = -ln 4
        let z = -core::f64::consts::LN_2 / 2.0;
        let w = HyperFloat::from_f64(z).lambertw(false).unwrap();
        assert!((w.to_f64() + 4f64.ln()).abs() < 1e-9);

        for _ in 0..1000 {
            let x = random::<f64>() * 1e4 - 0.3;
            let w = HyperFloat::from_f64(x).lambertw(true).unwrap().to_f64();
            assert!((w * w.exp() - x).abs() <= 1e-9 * x.abs().max(1e-3), "{}", x);

            let x = -random::<f64>() * 0.299 - 0.001;
            let w = HyperFloat::from_f64(x).lambertw(false).unwrap().to_f64();
            assert!(w <= -1.0);
            assert!((w * w.exp() - x).abs() <= 1e-9, "{}", x);
        }

        // extended values
        for mag in [20.0, 100.0, 1e5, 1e10] {
            let x = HyperFloat::from_components(1.0, 1.0, mag);
            let w = x.lambertw(true).unwrap();
            assert!(w.mul(&w.exp()).eq_tolerance(&x, 1e-9));

            let x = HyperFloat::from_components(-1.0, 1.0, -mag);
            let w = x.lambertw(false).unwrap();
            assert!(w.is_negative());
            assert!(w.mul(&w.exp()).eq_tolerance(&x, 1e-9));
        }

        // ln above the threshold
        let x = HyperFloat::from_components(1.0, 3.0, 100.0);
        assert!(x.lambertw(true).unwrap() == x.ln());
    }

    #[test]
    fn test_lambertw_branch_point() {
        // both branches meet at -1 on the branch point
        let x = HyperFloat::from_f64(LAMBERTW_MIN_ARG);
        let w0 = x.lambertw(true).unwrap().to_f64();
        let w1 = x.lambertw(false).unwrap().to_f64();
        assert!((w0 + 1.0).abs() < 1e-5, "{}", w0);
        assert!((w1 + 1.0).abs() < 1e-5, "{}", w1);
        assert!(w1 <= w0);

        let x = HyperFloat::from_f64(LAMBERTW_MIN_ARG - 1e-12);
        assert!(x.lambertw(true).unwrap().is_nan());
        assert!(x.lambertw(false).unwrap().is_nan());

        // lower branch near zero
        let w = HyperFloat::from_f64(-1e-300).lambertw(false).unwrap().to_f64();
        assert!((w + 697.32).abs() < 0.01, "{}", w);
    }

    #[test]
    fn test_lambertw_no_convergence() {
        assert_eq!(lambertw_scalar(1.5, 0.0, true), Err(Error::LambertWNoConvergence));
        assert_eq!(lambertw_scalar(-0.2, 0.0, false), Err(Error::LambertWNoConvergence));

        let z = HyperFloat::from_components(1.0, 1.0, 20.0);
        assert_eq!(lambertw_extended(&z, 0.0, true), Err(Error::LambertWNoConvergence));
        let z = HyperFloat::from_components(-1.0, 1.0, -20.0);
        assert_eq!(lambertw_extended(&z, 0.0, false), Err(Error::LambertWNoConvergence));

        // the default tolerance converges on the same inputs
        assert!(lambertw_scalar(1.5, LAMBERTW_TOLERANCE, true).is_ok());
        assert!(lambertw_extended(&z, LAMBERTW_TOLERANCE, false).is_ok());
    }
}
