//! Fractional layer shifts.
//!
//! Adding `diff` to the super-logarithm of a value and tetrating back moves it by `diff`
//! layers of exponentiation. Base 10 whole layers are exact: they are the `layer` field.

use crate::common::consts::{NAN, ONE, TEN, TWO};
use crate::defs::{Error, SLOG_ITERATIONS, TETRATION_ITERATIONS, TOWER_CONVERGENCE_LIMIT};
use crate::num::HyperFloat;
use log::debug;

/// Steps allowed when walking a negative layer back to 0.
const NEGATIVE_LAYER_STEPS: usize = 100;

/// Bisection resolution of the excess slog.
const EXCESS_SLOG_RESOLUTION: f64 = 1e-16;

/// Largest relative mismatch accepted for an excess slog.
const EXCESS_SLOG_TOLERANCE: f64 = 1e-7;

/// Position of a value relative to the fixed points of `x ↦ b^x` for bases in
/// `(1, e^(1/e)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcessRange {
    /// Below the lower fixed point, or any value for other bases.
    Below,

    /// Between the fixed points.
    Between,

    /// At or above the upper fixed point.
    Above,
}

impl HyperFloat {
    /// Adds `diff` to the base 10 super-logarithm of `self`.
    ///
    /// The whole part of `diff` shifts the layer directly; the fractional part goes through
    /// [`HyperFloat::layeradd`].
    ///
    /// ## Errors
    ///
    ///  - LambertWNoConvergence: locating a fixed point of the tower failed.
    pub fn layeradd10(&self, diff: f64, linear: bool) -> Result<Self, Error> {
        if self.is_nan() || diff.is_nan() {
            return Ok(NAN);
        }

        let mut diff = diff;
        let (mut sign, mut layer, mut mag) = (self.sign, self.layer, self.mag);

        if diff >= 1.0 {
            if mag < 0.0 && layer > 0.0 {
                // too small to survive exponentiation
                sign = 0.0;
                layer = 0.0;
                mag = 0.0;
            } else if sign == -1.0 && layer == 0.0 {
                sign = 1.0;
                mag = -mag;
            }
            let whole = diff.trunc();
            diff -= whole;
            layer += whole;
        }

        if diff <= -1.0 {
            let whole = diff.trunc();
            diff -= whole;
            layer += whole;
            if layer < 0.0 {
                for _ in 0..NEGATIVE_LAYER_STEPS {
                    layer += 1.0;
                    mag = mag.log10();
                    if !mag.is_finite() {
                        if sign == 0.0 {
                            sign = 1.0;
                        }
                        if layer < 0.0 {
                            layer = 0.0;
                        }
                        return Ok(Self { sign, layer, mag }.normalize());
                    }
                    if layer >= 0.0 {
                        break;
                    }
                }
            }
        }

        while layer < 0.0 {
            layer += 1.0;
            mag = mag.log10();
        }

        if sign == 0.0 {
            sign = 1.0;
            if mag == 0.0 && layer >= 1.0 {
                layer -= 1.0;
                mag = 1.0;
            }
        }

        let result = Self { sign, layer, mag }.normalize();

        if diff != 0.0 {
            result.layeradd(diff, &TEN, linear)
        } else {
            Ok(result)
        }
    }

    /// Adds `diff` to the super-logarithm of `self` with base `base` and tetrates back.
    ///
    /// Bases in `(1, e^(1/e)]` use the excess slog so that values above the lower fixed point
    /// shift consistently.
    ///
    /// ## Errors
    ///
    ///  - LambertWNoConvergence: locating a fixed point of the tower failed.
    pub fn layeradd(&self, diff: f64, base: &Self, linear: bool) -> Result<Self, Error> {
        if base.gt(&ONE) && base.le(&Self::from_f64(TOWER_CONVERGENCE_LIMIT)) {
            let (slogthis, range) = self.excess_slog(base, linear)?;
            if slogthis.is_nan() {
                return Ok(NAN);
            }
            if !slogthis.is_finite() {
                // fixed points stay in place
                return Ok(*self);
            }

            let slogdest = slogthis.to_f64() + diff;
            let (lower, upper) = base.tower_fixed_points()?;
            let slogzero = match range {
                ExcessRange::Below => ONE,
                ExcessRange::Between => lower.mul(&upper).sqrt(),
                ExcessRange::Above => upper.mul(&TWO),
            };
            let slogone = base.pow(&slogzero);
            let whole = slogdest.floor();
            let frac = slogdest - whole;
            let towertop = slogzero
                .pow(&Self::from_f64(1.0 - frac))
                .mul(&slogone.pow(&Self::from_f64(frac)));
            return base.tetrate(whole, &towertop, linear);
        }

        let slogdest = self.slog(base, SLOG_ITERATIONS, linear)?.to_f64() + diff;

        if slogdest >= 0.0 {
            base.tetrate(slogdest, &ONE, linear)
        } else if !slogdest.is_finite() {
            Ok(NAN)
        } else if slogdest >= -1.0 {
            Ok(base.tetrate(slogdest + 1.0, &ONE, linear)?.log(base))
        } else {
            Ok(base.tetrate(slogdest + 2.0, &ONE, linear)?.log(base).log(base))
        }
    }

    /// Super-logarithm that stays invertible above the lower fixed point of bases in
    /// `(1, e^(1/e)]`.
    ///
    /// Above the upper fixed point height 0 is `2·upper`; between the fixed points it is
    /// their geometric mean. Fractional heights interpolate geometrically between height 0
    /// and height 1. Other values and bases fall back to [`HyperFloat::slog`] with range
    /// [`ExcessRange::Below`].
    ///
    /// ## Errors
    ///
    ///  - LambertWNoConvergence: locating a fixed point of the tower failed.
    pub fn excess_slog(&self, base: &Self, linear: bool) -> Result<(Self, ExcessRange), Error> {
        if base.is_nan() || *base == ONE || base.sign <= 0.0 {
            return Ok((NAN, ExcessRange::Below));
        }
        if base.gt(&Self::from_f64(TOWER_CONVERGENCE_LIMIT)) || base.lt(&ONE) {
            return Ok((self.slog(base, SLOG_ITERATIONS, linear)?, ExcessRange::Below));
        }

        let (lower, upper) = base.tower_fixed_points()?;

        if self.lt(&lower) {
            return Ok((self.slog(base, SLOG_ITERATIONS, linear)?, ExcessRange::Below));
        }
        if *self == lower {
            return Ok((Self::from_f64(f64::INFINITY), ExcessRange::Below));
        }
        if *self == upper {
            return Ok((Self::from_f64(f64::NEG_INFINITY), ExcessRange::Above));
        }
        if self.is_nan() {
            return Ok((NAN, ExcessRange::Below));
        }

        // towers grow above the upper fixed point and shrink between the fixed points
        let (range, slogzero) = if self.gt(&upper) {
            (ExcessRange::Above, upper.mul(&TWO))
        } else {
            (ExcessRange::Between, lower.mul(&upper).sqrt())
        };
        let slogone = base.pow(&slogzero);
        let growing = range == ExcessRange::Above;
        let precedes = |a: &Self, b: &Self| if growing { a.lt(b) } else { a.gt(b) };

        let mut estimate = 0.0;
        if precedes(self, &slogzero) {
            let mut payload = slogzero;
            let mut steps = 0;
            while precedes(self, &payload) && steps < TETRATION_ITERATIONS {
                payload = payload.log(base);
                estimate -= 1.0;
                steps += 1;
            }
        } else if !precedes(self, &slogone) {
            let mut payload = slogone;
            let mut steps = 0;
            estimate = 1.0;
            while precedes(&payload, self) && steps < TETRATION_ITERATIONS {
                payload = base.pow(&payload);
                estimate += 1.0;
                steps += 1;
                if growing && payload.layer > 3.0 {
                    let layersleft = (self.layer - payload.layer + 1.0).floor();
                    payload = base.tetrate(layersleft, &payload, linear)?;
                    estimate += layersleft;
                }
            }
            if steps == TETRATION_ITERATIONS {
                debug!("excess slog: iteration cap reached at {}", estimate);
            }
            if precedes(self, &payload) {
                estimate -= 1.0;
            }
        }

        let mut fracheight = 0.0;
        let mut step = 0.5;
        let mut guess = slogzero;

        while step > EXCESS_SLOG_RESOLUTION {
            let tested = fracheight + step;
            let towertop = slogzero
                .pow(&Self::from_f64(1.0 - tested))
                .mul(&slogone.pow(&Self::from_f64(tested)));
            guess = base.tetrate(estimate, &towertop, linear)?;
            if guess == *self {
                return Ok((Self::from_f64(estimate + tested), range));
            }
            if precedes(&guess, self) {
                fracheight += step;
            }
            step /= 2.0;
        }

        if !guess.eq_tolerance(self, EXCESS_SLOG_TOLERANCE) {
            return Ok((NAN, ExcessRange::Below));
        }

        Ok((Self::from_f64(estimate + fracheight), range))
    }
}
