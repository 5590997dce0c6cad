//! Tetration, iterated exponentiation, and iterated logarithm.

use crate::common::consts::{INF_POS, NAN, NEG_ONE, ONE, TEN, TWO};
use crate::defs::{
    Error, TETRATION_ITERATIONS, TOWER_CONVERGENCE_CUTOFF, TOWER_CONVERGENCE_LIMIT,
    TOWER_CONVERGENCE_LOWER,
};
use crate::num::HyperFloat;
use crate::ops::critical::{critical_section, CRITICAL_TETR_VALUES};
use log::debug;

impl HyperFloat {
    /// Returns `self^^height` applied on top of `payload`: `height` copies of `self`
    /// exponentiated onto `payload`.
    ///
    /// A fractional `height` is resolved by the critical-section grid for payload 1 and bases
    /// up to 10, by `self^fraction` for larger bases or when `linear` is set, and by a layer
    /// shift of `payload` otherwise. Negative heights take iterated logarithms.
    /// An infinite height gives the limit of the power tower if it exists.
    ///
    /// ## Errors
    ///
    ///  - LambertWNoConvergence: locating a fixed point of the tower failed.
    pub fn tetrate(&self, height: f64, payload: &Self, linear: bool) -> Result<Self, Error> {
        if height == 1.0 {
            return Ok(self.pow(payload));
        }
        if height == 0.0 {
            return Ok(*payload);
        }
        if *self == ONE {
            return Ok(ONE);
        }
        if *self == NEG_ONE {
            return Ok(self.pow(payload));
        }
        if height.is_nan() || self.is_nan() {
            return Ok(NAN);
        }

        if height == f64::INFINITY {
            return self.infinite_tower(payload);
        }

        // 0^^h oscillates between 0 and 1, payload is ignored
        if self.is_zero() {
            let mut result = ((height + 1.0) % 2.0).abs();
            if result > 1.0 {
                result = 2.0 - result;
            }
            return Ok(Self::from_f64(result));
        }

        if height < 0.0 {
            return payload.iteratedlog(self, -height, linear);
        }

        let whole = height.trunc();
        let frac = height - whole;
        let fraction = Self::from_f64(frac);

        if self.is_positive()
            && (height > TETRATION_ITERATIONS as f64 || !linear)
            && (self.lt(&ONE)
                || (self.le(&Self::from_f64(TOWER_CONVERGENCE_LIMIT))
                    && payload.le(&self.tower_fixed_points()?.1)))
        {
            return self.converging_tower(whole, frac, payload, linear);
        }

        let mut payload = *payload;

        if frac != 0.0 {
            if payload == ONE {
                if self.gt(&TEN) || linear {
                    payload = self.pow(&fraction);
                } else {
                    payload = Self::from_f64(critical_section(self.to_f64(), frac, &CRITICAL_TETR_VALUES));
                    // the grid starts at base 2, smaller bases are scaled down
                    if self.lt(&TWO) {
                        payload = payload.sub(&ONE).mul(&self.sub(&ONE)).add(&ONE);
                    }
                }
            } else if *self == TEN {
                payload = payload.layeradd10(frac, linear)?;
            } else if self.lt(&ONE) {
                payload = self.blend_payload(&payload, frac);
            } else {
                payload = payload.layeradd(frac, self, linear)?;
            }
        }

        let mut i = 0.0;
        while i < whole {
            payload = self.pow(&payload);

            if !payload.layer.is_finite() || !payload.mag.is_finite() {
                return Ok(payload);
            }

            // each further level adds one layer
            if payload.layer - self.layer > 3.0 {
                return Ok(Self::from_components_unchecked(
                    payload.sign,
                    payload.layer + (whole - i - 1.0),
                    payload.mag,
                ));
            }

            if i > TETRATION_ITERATIONS as f64 {
                debug!("tetrate: iteration cap reached at height {}", i);
                return Ok(payload);
            }

            i += 1.0;
        }

        Ok(payload)
    }

    /// Same as [`HyperFloat::tetrate`].
    ///
    /// ## Errors
    ///
    ///  - LambertWNoConvergence: locating a fixed point of the tower failed.
    pub fn iteratedexp(&self, height: f64, payload: &Self, linear: bool) -> Result<Self, Error> {
        self.tetrate(height, payload, linear)
    }

    /// Applies the logarithm with base `base` to `self` `times` times.
    /// A fractional remainder shifts the result down by a fraction of a layer.
    /// Negative `times` exponentiates instead.
    ///
    /// ## Errors
    ///
    ///  - LambertWNoConvergence: locating a fixed point of the tower failed.
    pub fn iteratedlog(&self, base: &Self, times: f64, linear: bool) -> Result<Self, Error> {
        if times < 0.0 {
            return base.tetrate(-times, self, linear);
        }
        if times.is_nan() {
            return Ok(NAN);
        }

        let whole = times.trunc();
        let fraction = times - whole;
        let mut times = whole;
        let mut result = *self;

        // logarithms of numbers far above the base only strip a layer
        if result.layer - base.layer > 3.0 {
            let layerloss = times.min(result.layer - base.layer - 3.0);
            times -= layerloss;
            result = Self::from_components_unchecked(result.sign, result.layer - layerloss, result.mag);
        }

        let mut i = 0.0;
        while i < times {
            result = result.log(base);

            if !result.layer.is_finite() || !result.mag.is_finite() {
                return Ok(result);
            }

            if i > TETRATION_ITERATIONS as f64 {
                debug!("iteratedlog: iteration cap reached");
                return Ok(result);
            }

            i += 1.0;
        }

        if fraction > 0.0 && fraction < 1.0 {
            result = if *base == TEN {
                result.layeradd10(-fraction, linear)?
            } else {
                result.layeradd(-fraction, base, linear)?
            };
        }

        Ok(result)
    }

    /// Lower and upper fixed points of `x ↦ self^x` for bases in `(1, e^(1/e)]`.
    /// The lower one attracts the power tower, the upper one repels it.
    pub(crate) fn tower_fixed_points(&self) -> Result<(Self, Self), Error> {
        if self.gt(&Self::from_f64(TOWER_CONVERGENCE_CUTOFF)) {
            let e = Self::from_f64(core::f64::consts::E);
            return Ok((e, e));
        }
        let negln = self.ln().neg();
        let lower = negln.lambertw(true)?.div(&negln);
        let upper = negln.lambertw(false)?.div(&negln);
        Ok((lower, upper))
    }

    /// `self^^∞` on top of `payload`.
    fn infinite_tower(&self, payload: &Self) -> Result<Self, Error> {
        let base = self.to_f64();

        if (TOWER_CONVERGENCE_LOWER..=TOWER_CONVERGENCE_LIMIT).contains(&base) {
            if base < 1.0 {
                let negln = self.ln().neg();
                return Ok(negln.lambertw(true)?.div(&negln));
            }
            let (lower, upper) = self.tower_fixed_points()?;
            return Ok(match payload.cmp(&upper) {
                Some(0) => upper,
                Some(c) if c < 0 => lower,
                Some(_) => INF_POS,
                None => NAN,
            });
        }

        if base > TOWER_CONVERGENCE_LIMIT {
            return Ok(INF_POS);
        }

        // never converges, or turns complex
        Ok(NAN)
    }

    /// Tetration of bases whose towers converge: iterate until the payload settles.
    fn converging_tower(&self, whole: f64, frac: f64, payload: &Self, linear: bool) -> Result<Self, Error> {
        let height = whole + frac;
        let limit = whole.min(TETRATION_ITERATIONS as f64) as usize;
        let mut payload = *payload;

        if frac != 0.0 {
            if payload == ONE {
                payload = self.pow(&Self::from_f64(frac));
            } else if self.lt(&ONE) {
                payload = self.blend_payload(&payload, frac);
            } else {
                payload = payload.layeradd(frac, self, linear)?;
            }
        }

        for _ in 0..limit {
            let old = payload;
            payload = self.pow(&payload);
            if !payload.is_finite() || old == payload {
                return Ok(payload);
            }
        }

        // past the cap the tower flip-flops, parity picks the side
        if height > TETRATION_ITERATIONS as f64 && height.ceil() % 2.0 == 1.0 {
            return Ok(self.pow(&payload));
        }

        Ok(payload)
    }

    /// Geometric blend `payload^(1-f) · (self^payload)^f` used for bases below 1.
    fn blend_payload(&self, payload: &Self, frac: f64) -> Self {
        payload
            .pow(&Self::from_f64(1.0 - frac))
            .mul(&self.pow(payload).pow(&Self::from_f64(frac)))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::ZERO;
    use rand::random;

    #[test]
    fn test_tetrate() {
        assert!(TEN.tetrate(2.0, &ONE, false).unwrap() == HyperFloat::from_f64(1e10));
        let d = TEN.tetrate(3.0, &ONE, false).unwrap();
        assert!(d.layer == 1.0 && d.mag == 1e10);

        // trivial heights and bases
        assert!(TWO.tetrate(0.0, &TEN, false).unwrap() == TEN);
        assert_eq!(TWO.tetrate(1.0, &ONE, false).unwrap().to_f64(), 2.0);
        assert!(ONE.tetrate(5.5, &ONE, false).unwrap() == ONE);
        assert!(NEG_ONE.tetrate(3.0, &ONE, false).unwrap() == NEG_ONE);
        assert!((TWO.tetrate(3.0, &ONE, false).unwrap().to_f64() - 16.0).abs() < 1e-12);
        assert!((TWO.tetrate(4.0, &ONE, false).unwrap().to_f64() - 65536.0).abs() < 1e-9);

        // 0^^h
        assert_eq!(ZERO.tetrate(1.0, &ONE, false).unwrap().to_f64(), 0.0);
        assert_eq!(ZERO.tetrate(2.0, &ONE, false).unwrap().to_f64(), 1.0);
        assert_eq!(ZERO.tetrate(2.5, &ONE, false).unwrap().to_f64(), 0.5);

        // infinite towers
        let sqrt2 = HyperFloat::from_f64(core::f64::consts::SQRT_2);
        let t = sqrt2.tetrate(f64::INFINITY, &ONE, false).unwrap();
        assert!((t.to_f64() - 2.0).abs() < 1e-9);
        let t = sqrt2.tetrate(f64::INFINITY, &HyperFloat::from_f64(3.0), false).unwrap();
        assert!((t.to_f64() - 2.0).abs() < 1e-9);
        assert!(sqrt2.tetrate(f64::INFINITY, &HyperFloat::from_f64(5.0), false).unwrap() == INF_POS);
        assert!(TWO.tetrate(f64::INFINITY, &ONE, false).unwrap() == INF_POS);
        assert!(HyperFloat::from_f64(0.01).tetrate(f64::INFINITY, &ONE, false).unwrap().is_nan());
        let half = HyperFloat::from_f64(0.5);
        let t = half.tetrate(f64::INFINITY, &ONE, false).unwrap();
        assert!((t.to_f64() - 0.6411857445049859).abs() < 1e-9);

        // convergent bases settle on the lower fixed point
        let t = sqrt2.tetrate(20000.0, &ONE, false).unwrap();
        assert!((t.to_f64() - 2.0).abs() < 1e-6);

        // critical section
        let t = TEN.tetrate(0.5, &ONE, false).unwrap().to_f64();
        assert!((t - CRITICAL_TETR_VALUES[9][5]).abs() < 1e-12);
        let t = TEN.tetrate(0.5, &ONE, true).unwrap().to_f64();
        assert!((t - 10f64.sqrt()).abs() < 1e-12);

        // layer shortcut
        let t = TEN.tetrate(1e6, &ONE, false).unwrap();
        assert!(t.layer > 999_990.0 && t.layer < 1_000_000.0);

        // monotonic in height
        for _ in 0..200 {
            let b = HyperFloat::from_f64(1.45 + random::<f64>() * 3.55);
            let h1 = random::<f64>() * 4.0;
            let h2 = h1 + random::<f64>();
            let t1 = b.tetrate(h1, &ONE, false).unwrap();
            let t2 = b.tetrate(h2, &ONE, false).unwrap();
            assert!(t1.le(&t2), "{:?} {} {}", b, h1, h2);
        }
    }

    #[test]
    fn test_iteratedlog() {
        let d = HyperFloat::from_f64(1e10);
        assert!(d.iteratedlog(&TEN, 2.0, false).unwrap() == ONE);
        assert!(d.iteratedlog(&TEN, 0.0, false).unwrap() == d);

        let d = HyperFloat::from_components(1.0, 1000.0, 1e10);
        let l = d.iteratedlog(&TEN, 990.0, false).unwrap();
        assert!(l == HyperFloat::from_components(1.0, 10.0, 1e10));

        // negative times exponentiates
        let t = ONE.iteratedlog(&TEN, -2.0, false).unwrap();
        assert!(t == HyperFloat::from_f64(1e10));

        for _ in 0..100 {
            let b = HyperFloat::from_f64(2.0 + random::<f64>() * 8.0);
            let h1 = 0.5 + random::<f64>() * 1.5;
            let h2 = random::<f64>() * 2.0;
            let t = b.tetrate(h1 + h2, &ONE, false).unwrap();
            let l = t.iteratedlog(&b, h2, false).unwrap();
            let expected = b.tetrate(h1, &ONE, false).unwrap();
            assert!(l.eq_tolerance(&expected, 1e-7), "{:?} {} {}", b, h1, h2);
        }
    }
}
