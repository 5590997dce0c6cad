//! Inverses of increasing functions, super-roots, and pentation roots.
//!
//! The inverse finder searches over a real position that is mapped into the answer's
//! order of magnitude first: directly, through `10^p`, or through `10^^p`, optionally
//! reciprocated and negated. A plain step search then resolves answers anywhere in range.

use crate::common::consts::{LAYER_MAX, NAN, ONE, POW10_LIMIT, TEN, ZERO};
use crate::defs::{Error, EXPN1, EXPONENT_LIMIT, FIRST_NEG_LAYER, INVERSE_ITERATIONS};
use crate::num::HyperFloat;
use crate::ops::search::{step_search, Probe};

/// Initial position of the inverse search.
const INVERSE_START: f64 = 1.0;

/// Initial step of the inverse search.
const INVERSE_STEP: f64 = 0.001;

/// Values at or below this are treated as zero by super-roots of odd degree.
const SROOT_TINY: HyperFloat = HyperFloat::from_components_unchecked(1.0, 2.0, -16.0);

/// Domain and range of a function passed to [`HyperFloat::increasing_inverse`].
#[derive(Debug, Clone, Copy)]
pub struct InverseBounds {
    /// Smallest argument.
    pub min_x: HyperFloat,

    /// Largest argument.
    pub max_x: HyperFloat,

    /// Smallest value.
    pub min_y: HyperFloat,

    /// Largest value.
    pub max_y: HyperFloat,
}

impl Default for InverseBounds {
    fn default() -> Self {
        InverseBounds {
            min_x: LAYER_MAX.neg(),
            max_x: LAYER_MAX,
            min_y: LAYER_MAX.neg(),
            max_y: LAYER_MAX,
        }
    }
}

/// How a search position maps to a candidate answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scale {
    Identity,
    Pow10,
    Tower,
}

/// Mapping of search positions for one target.
#[derive(Debug, Clone, Copy)]
struct Regime {
    scale: Scale,
    reciprocal: bool,
    negative: bool,
}

impl Regime {
    fn apply(&self, p: f64) -> Result<HyperFloat, Error> {
        let mut x = match self.scale {
            Scale::Identity => HyperFloat::from_f64(p),
            Scale::Pow10 => HyperFloat::from_f64(p).pow10(),
            Scale::Tower => TEN.tetrate(p, &ONE, false)?,
        };
        if self.reciprocal {
            x = x.recip();
        }
        if self.negative {
            x = x.neg();
        }
        Ok(x)
    }

    /// True if candidates grow with the position.
    fn ascending(&self) -> bool {
        self.reciprocal == self.negative
    }
}

impl HyperFloat {
    /// Returns the inverse of `f`, which must be increasing on `bounds`, or decreasing if
    /// `decreasing` is set.
    ///
    /// Each call of the returned function runs a step search of at most `iterations`
    /// steps. Targets outside the range, and targets with no argument inside the domain,
    /// give NaN.
    pub fn increasing_inverse<F>(
        f: F,
        decreasing: bool,
        iterations: usize,
        bounds: InverseBounds,
    ) -> impl Fn(&HyperFloat) -> Result<HyperFloat, Error>
    where
        F: Fn(&HyperFloat) -> Result<HyperFloat, Error>,
    {
        move |value: &HyperFloat| {
            let InverseBounds { min_x, max_x, min_y, max_y } = bounds;

            if value.is_nan() || value.lt(&min_y) || value.gt(&max_y) {
                return Ok(NAN);
            }

            // true if the answer lies below `p`
            let below = |p: HyperFloat| -> Result<bool, Error> {
                if max_x.lt(&p) {
                    return Ok(true);
                }
                if min_x.gt(&p) {
                    return Ok(false);
                }
                Ok(value.lt(&f(&p)?) != decreasing)
            };

            if min_x.le(&ZERO) && max_x.ge(&ZERO) && f(&ZERO)? == *value {
                return Ok(ZERO);
            }

            let first_neg_layer = Self::from_f64(FIRST_NEG_LAYER);
            let exponent_limit = Self::from_f64(EXPONENT_LIMIT);

            let regime = if !below(ZERO)? {
                let reciprocal = below(first_neg_layer)?;
                let scale = if reciprocal {
                    if below(POW10_LIMIT.recip())? {
                        Scale::Tower
                    } else {
                        Scale::Pow10
                    }
                } else if below(exponent_limit)? {
                    Scale::Identity
                } else if below(POW10_LIMIT)? {
                    Scale::Pow10
                } else {
                    Scale::Tower
                };
                Regime { scale, reciprocal, negative: false }
            } else {
                let reciprocal = !below(first_neg_layer.neg())?;
                let scale = if reciprocal {
                    if !below(POW10_LIMIT.recip().neg())? {
                        Scale::Tower
                    } else {
                        Scale::Pow10
                    }
                } else if !below(exponent_limit.neg())? {
                    Scale::Identity
                } else if !below(POW10_LIMIT.neg())? {
                    Scale::Pow10
                } else {
                    Scale::Tower
                };
                Regime { scale, reciprocal, negative: true }
            };

            let ascending = regime.ascending();

            let clamped = |p: f64| -> Result<(HyperFloat, bool), Error> {
                let x = regime.apply(p)?;
                if x.lt(&min_x) {
                    Ok((min_x, true))
                } else if x.gt(&max_x) {
                    Ok((max_x, true))
                } else {
                    Ok((x, false))
                }
            };

            let pos = step_search(INVERSE_START, INVERSE_STEP, iterations, |p| {
                let (x, critical) = clamped(p)?;
                let y = f(&x)?;
                if !critical && y == *value {
                    return Ok(Probe::Exact);
                }

                let rose = if ascending != decreasing { y.gt(value) } else { y.lt(value) };

                // the position moves the answer the way `rose` asks, but the domain ends there
                let lowering = rose == ascending;
                if (lowering && x == min_x) || (!lowering && x == max_x) {
                    return Ok(Probe::Outside);
                }

                Ok(if rose { Probe::Above } else { Probe::Below })
            })?;

            match pos {
                Some(p) => Ok(clamped(p)?.0),
                None => Ok(NAN),
            }
        }
    }

    /// Returns the square super-root of `self`: the `x` with `x^x = self`.
    ///
    /// ## Errors
    ///
    ///  - LambertWNoConvergence: the Lambert W iteration did not converge.
    pub fn ssqrt(&self) -> Result<Self, Error> {
        if self.sign == 1.0 && self.layer >= 3.0 {
            return Ok(Self::from_components_unchecked(self.sign, self.layer - 1.0, self.mag));
        }
        if *self == ONE {
            return Ok(ONE);
        }
        let lnx = self.ln();
        Ok(lnx.div(&lnx.lambertw(true)?))
    }

    /// Returns the super-root of `self` of the given `degree`: the `x > 1` with
    /// `x^^degree = self`.
    ///
    /// Values below 1 have several or no super-roots and give NaN, except tiny values
    /// under odd integer degrees, which are their own roots.
    ///
    /// ## Errors
    ///
    ///  - LambertWNoConvergence: the Lambert W iteration did not converge.
    pub fn sroot(&self, degree: f64, linear: bool) -> Result<Self, Error> {
        if degree == 1.0 {
            return Ok(*self);
        }
        if self.is_nan() || degree.is_nan() {
            return Ok(NAN);
        }
        if degree == f64::INFINITY {
            let x = self.to_f64();
            return Ok(if x > EXPN1 && x < core::f64::consts::E {
                self.pow(&self.recip())
            } else {
                NAN
            });
        }
        if degree > 0.0 && degree < 1.0 {
            return Ok(self.root(&Self::from_f64(degree)));
        }
        if degree > -2.0 && degree < -1.0 {
            return Ok(Self::from_f64(degree + 2.0).pow(&self.recip()));
        }
        if degree <= 0.0 {
            return Ok(NAN);
        }
        if *self == ONE {
            return Ok(ONE);
        }
        if self.lt(&ZERO) {
            return Ok(NAN);
        }
        if self.le(&SROOT_TINY) {
            return Ok(if degree % 2.0 == 1.0 { *self } else { NAN });
        }
        if self.lt(&ONE) {
            return Ok(NAN);
        }
        if degree == 2.0 && !linear {
            return self.ssqrt();
        }

        let bounds = InverseBounds { min_x: ONE, ..Default::default() };
        let inverse = Self::increasing_inverse(
            move |b: &HyperFloat| b.tetrate(degree, &ONE, linear),
            false,
            INVERSE_ITERATIONS,
            bounds,
        );
        inverse(self)
    }

    /// Returns the pentation root of `self` of the given `degree`: the `x > 1` with
    /// `x^^^degree = self`.
    ///
    /// ## Errors
    ///
    ///  - LambertWNoConvergence: the Lambert W iteration did not converge.
    pub fn penta_root(&self, degree: f64, linear: bool) -> Result<Self, Error> {
        if degree == 1.0 {
            return Ok(*self);
        }
        if self.is_nan() || degree.is_nan() || degree <= 0.0 || degree.is_infinite() {
            return Ok(NAN);
        }
        if *self == ONE {
            return Ok(ONE);
        }
        if self.lt(&ONE) {
            return Ok(NAN);
        }

        let bounds = InverseBounds { min_x: ONE, ..Default::default() };
        let inverse = Self::increasing_inverse(
            move |b: &HyperFloat| b.pentate(degree, &ONE, linear),
            false,
            INVERSE_ITERATIONS,
            bounds,
        );
        inverse(self)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::{THREE, TWO};
    use rand::random;

    #[test]
    fn test_increasing_inverse() {
        let cube = HyperFloat::increasing_inverse(|x| Ok(x.cube()), false, INVERSE_ITERATIONS, InverseBounds::default());
        let r = cube(&HyperFloat::from_f64(27.0)).unwrap();
        assert!((r.to_f64() - 3.0).abs() < 1e-12);
        let r = cube(&HyperFloat::from_f64(-8.0)).unwrap();
        assert!((r.to_f64() + 2.0).abs() < 1e-12);
        assert!(cube(&ZERO).unwrap().is_zero());
        assert!(cube(&NAN).unwrap().is_nan());

        // answers of extreme magnitude
        let r = cube(&HyperFloat::from_components(1.0, 2.0, 30.0)).unwrap();
        assert!(r.eq_tolerance(&HyperFloat::from_components(1.0, 2.0, 30.0).cbrt(), 1e-9));
        let r = cube(&HyperFloat::from_components(1.0, 1.0, -300.0)).unwrap();
        assert!(r.eq_tolerance(&HyperFloat::from_components(1.0, 1.0, -100.0), 1e-9));

        // decreasing functions
        let recip = HyperFloat::increasing_inverse(
            |x| Ok(x.recip()),
            true,
            INVERSE_ITERATIONS,
            InverseBounds { min_x: ONE, ..Default::default() },
        );
        let r = recip(&HyperFloat::from_f64(0.25)).unwrap();
        assert!((r.to_f64() - 4.0).abs() < 1e-12);

        // out of range
        let bounded = HyperFloat::increasing_inverse(
            |x| Ok(*x),
            false,
            INVERSE_ITERATIONS,
            InverseBounds { min_y: ZERO, max_y: TEN, ..Default::default() },
        );
        assert!(bounded(&HyperFloat::from_f64(11.0)).unwrap().is_nan());

        for _ in 0..100 {
            let x = random::<f64>() * 1000.0 - 500.0;
            let r = cube(&HyperFloat::from_f64(x).cube()).unwrap().to_f64();
            assert!((r - x).abs() <= 1e-9 * x.abs().max(1.0), "{} {}", x, r);
        }
    }

    #[test]
    fn test_ssqrt() {
        assert!(ONE.ssqrt().unwrap() == ONE);
        assert!((HyperFloat::from_f64(4.0).ssqrt().unwrap().to_f64() - 2.0).abs() < 1e-12);
        assert!(HyperFloat::from_f64(0.5).ssqrt().unwrap().is_nan());

        let d = HyperFloat::from_components(1.0, 5.0, 10.0);
        assert!(d.ssqrt().unwrap() == HyperFloat::from_components(1.0, 4.0, 10.0));

        for _ in 0..1000 {
            let b = 1.5 + random::<f64>() * 18.5;
            let s = HyperFloat::from_f64(b.powf(b)).ssqrt().unwrap().to_f64();
            assert!((s - b).abs() < 1e-9 * b, "{} {}", b, s);
        }
    }

    #[test]
    fn test_sroot() {
        let x = HyperFloat::from_f64(27.0);
        assert!(x.sroot(1.0, false).unwrap() == x);
        assert!(ONE.sroot(3.0, false).unwrap() == ONE);
        assert!(HyperFloat::from_f64(0.5).sroot(3.0, false).unwrap().is_nan());
        assert!(x.sroot(-3.0, false).unwrap().is_nan());
        assert!((x.sroot(2.0, false).unwrap().to_f64() - 3.0).abs() < 1e-9);

        // infinite towers
        let r = TWO.sroot(f64::INFINITY, false).unwrap();
        assert!((r.to_f64() - core::f64::consts::SQRT_2).abs() < 1e-12);
        assert!(THREE.sroot(f64::INFINITY, false).unwrap().is_nan());

        let t = THREE.tetrate(3.0, &ONE, false).unwrap();
        assert!((t.sroot(3.0, false).unwrap().to_f64() - 3.0).abs() < 1e-9);

        for _ in 0..20 {
            let b = 1.5 + random::<f64>() * 8.5;
            let b = HyperFloat::from_f64(b);
            for linear in [false, true] {
                let t = b.tetrate(3.0, &ONE, linear).unwrap();
                let r = t.sroot(3.0, linear).unwrap();
                assert!(r.eq_tolerance(&b, 1e-9), "{:?} {:?}", b, r);
            }
        }
    }

    #[test]
    fn test_penta_root() {
        let x = HyperFloat::from_f64(27.0);
        assert!(x.penta_root(1.0, false).unwrap() == x);
        assert!(ONE.penta_root(2.0, false).unwrap() == ONE);
        assert!(HyperFloat::from_f64(0.5).penta_root(2.0, false).unwrap().is_nan());

        let p = THREE.pentate(2.0, &ONE, false).unwrap();
        let r = p.penta_root(2.0, false).unwrap();
        assert!((r.to_f64() - 3.0).abs() < 1e-6);
    }
}
