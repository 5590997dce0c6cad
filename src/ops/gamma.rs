//! Gamma function and factorial.

use crate::common::consts::{NAN, ONE};
use crate::common::util;
use crate::num::HyperFloat;

/// Below this the scalar gamma is exact enough.
const SCALAR_GAMMA_LIMIT: f64 = 24.0;

/// `ln(2π)/2`.
const HALF_LN_2PI: f64 = 0.9189385332046727;

impl HyperFloat {
    /// Returns the gamma function of `self`.
    ///
    /// Above layer 0 the growth is itself hyperexponential:
    /// `exp(x·(ln x - 1))` at layer 1 and `exp(x)` higher up.
    pub fn gamma(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }
        if self.mag < 0.0 {
            return self.recip();
        }
        if self.layer == 0.0 {
            if self.lt(&Self::from_f64(SCALAR_GAMMA_LIMIT)) {
                return Self::from_f64(util::gamma(self.sign * self.mag));
            }
            return Self::from_f64(ln_gamma_stirling(self.mag)).exp();
        }
        if self.layer == 1.0 {
            return self.mul(&self.ln().sub(&ONE)).exp();
        }
        self.exp()
    }

    /// Returns `ln(Γ(self))`.
    pub fn ln_gamma(&self) -> Self {
        self.gamma().ln()
    }

    /// Returns `self!`, which is `Γ(self + 1)`.
    pub fn factorial(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }
        if self.mag < 0.0 || self.layer == 0.0 {
            return self.add(&ONE).gamma();
        }
        if self.layer == 1.0 {
            return self.mul(&self.ln().sub(&ONE)).exp();
        }
        self.exp()
    }
}

/// Stirling series of `ln Γ(x)`, stopping once a term no longer registers.
fn ln_gamma_stirling(x: f64) -> f64 {
    let t = x - 1.0;
    let mut l = HALF_LN_2PI + (t + 0.5) * t.ln() - t;

    let n2 = t * t;
    let mut np = t;

    let l2 = l + 1.0 / (12.0 * np);
    if l2 == l {
        return l;
    }
    l = l2;

    np *= n2;
    let l2 = l - 1.0 / (360.0 * np);
    if l2 == l {
        return l;
    }
    l = l2;

    np *= n2;
    l += 1.0 / (1260.0 * np);
    np *= n2;
    l -= 1.0 / (1680.0 * np);

    l
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::TWO;
    use rand::random;

    #[test]
    fn test_gamma() {
        assert!((HyperFloat::from_f64(5.0).gamma().to_f64() - 24.0).abs() < 1e-10);
        assert!((HyperFloat::from_f64(5.0).factorial().to_f64() - 120.0).abs() < 1e-9);
        assert!((TWO.ln_gamma().to_f64()).abs() < 1e-12);

        // 30! = 2.652528598121911e32
        let f = HyperFloat::from_f64(30.0).factorial();
        assert!((f.to_f64() / 2.652528598121911e32 - 1.0).abs() < 1e-12);

        // tiny arguments behave as 1/x
        let tiny = HyperFloat::from_f64(1e-30);
        assert!(tiny.gamma().eq_tolerance(&HyperFloat::from_f64(1e30), 1e-12));

        // huge arguments climb layers
        let d = HyperFloat::from_components(1.0, 1.0, 100.0);
        let g = d.gamma();
        assert!(g.layer == 2.0);
        assert!(g.gt(&d.exp()));
        let d = HyperFloat::from_components(1.0, 3.0, 100.0);
        assert!(d.gamma() == d.exp());

        for _ in 0..1000 {
            let x = random::<f64>() * 150.0 + 1.0;
            let g = HyperFloat::from_f64(x).gamma();
            let lg = g.ln().to_f64();
            let expected = util::gamma(x).ln();
            assert!((lg - expected).abs() <= 1e-10 * expected.abs().max(1.0));
        }
    }
}
