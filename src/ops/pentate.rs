//! Pentation and its inverse in the height.

use crate::common::consts::{INF_NEG, INF_POS, NAN, ONE, TEN, ZERO};
use crate::defs::{Error, PENTATION_ITERATIONS, SLOG_ITERATIONS};
use crate::num::HyperFloat;
use crate::ops::search::{step_search, Probe};
use log::debug;

/// Whole pentations tried before giving up on reaching a value.
const PENTA_LOG_UPWARD_STEPS: usize = 1000;

/// Initial step of the pentation height refinement.
const PENTA_LOG_STEP: f64 = 0.5;

impl HyperFloat {
    /// Returns `self^^^height` applied on top of `payload`: `height` tetrations with base
    /// `self`, each taking the previous result as its height.
    ///
    /// ## Errors
    ///
    ///  - LambertWNoConvergence: locating a fixed point of the tower failed.
    pub fn pentate(&self, height: f64, payload: &Self, linear: bool) -> Result<Self, Error> {
        if height.is_nan() || self.is_nan() {
            return Ok(NAN);
        }

        let mut whole = height.trunc();
        let frac = height - whole;
        let mut payload = *payload;

        if frac != 0.0 {
            if payload == ONE {
                whole += 1.0;
                payload = Self::from_f64(frac);
            } else if *self == TEN {
                payload = payload.layeradd10(frac, linear)?;
            } else {
                payload = payload.layeradd(frac, self, linear)?;
            }
        }

        let mut i = 0.0;
        while i < whole {
            payload = self.tetrate(payload.to_f64(), &ONE, linear)?;

            if !payload.layer.is_finite() || !payload.mag.is_finite() {
                return Ok(payload);
            }

            if i >= PENTATION_ITERATIONS as f64 {
                debug!("pentate: iteration cap reached");
                return Ok(payload);
            }

            i += 1.0;
        }

        Ok(payload)
    }

    /// Returns the pentation height `h` with `base^^^h = self`.
    ///
    /// Whole pentations or super-logarithms bracket the height, and a step search against
    /// [`HyperFloat::pentate`] refines it for at most `iterations` steps.
    ///
    /// ## Errors
    ///
    ///  - LambertWNoConvergence: locating a fixed point of the tower failed.
    pub fn penta_log(&self, base: &Self, iterations: usize, linear: bool) -> Result<Self, Error> {
        if base.is_nan() || self.is_nan() || base.le(&ONE) {
            return Ok(NAN);
        }
        if *self == ONE {
            return Ok(ZERO);
        }
        if *self == INF_POS {
            return Ok(INF_POS);
        }

        // below -1 sits the fixed point of slog, which is base^^^-∞
        if self.lt(&Self::from_f64(-1.0)) {
            if self.le(&Self::from_f64(-2.0)) {
                return Ok(NAN);
            }
            let limit = base.tetrate(self.to_f64(), &ONE, linear)?;
            if *self == limit {
                return Ok(INF_NEG);
            }
            if self.gt(&limit) {
                return Ok(NAN);
            }
        }

        let mut value = ONE;
        let mut result = 0.0;

        if self.gt(&ONE) {
            while value.lt(self) {
                result += 1.0;
                value = base.tetrate(value.to_f64(), &ONE, linear)?;
                if result > PENTA_LOG_UPWARD_STEPS as f64 {
                    debug!("penta_log: no whole pentation reaches the value");
                    return Ok(NAN);
                }
            }
        } else {
            while value.gt(self) {
                result -= 1.0;
                value = value.slog(base, SLOG_ITERATIONS, linear)?;
                if result < -(PENTATION_ITERATIONS as f64) {
                    debug!("penta_log: iteration cap reached");
                    return Ok(NAN);
                }
            }
        }

        let pos = step_search(result, PENTA_LOG_STEP, iterations, |h| {
            let p = base.pentate(h, &ONE, linear)?;
            Ok(match p.cmp(self) {
                Some(0) => Probe::Exact,
                Some(c) if c > 0 => Probe::Above,
                _ => Probe::Below,
            })
        })?;

        Ok(pos.map_or(NAN, Self::from_f64))
    }
}
