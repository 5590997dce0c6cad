//! Trigonometric and hyperbolic functions.
//!
//! Periodic functions of values beyond layer 0 are meaningless at `f64` precision, so they
//! collapse to fixed results. Values too small to leave layer 0 fall under the small-angle
//! identities.

use crate::common::consts::{NAN, ONE, TWO, ZERO};
use crate::num::HyperFloat;

impl HyperFloat {
    /// Returns the sine of `self`.
    pub fn sin(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }
        if self.mag < 0.0 {
            return *self;
        }
        if self.layer == 0.0 {
            return Self::from_f64((self.sign * self.mag).sin());
        }
        ZERO
    }

    /// Returns the cosine of `self`.
    pub fn cos(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }
        if self.mag < 0.0 {
            return ONE;
        }
        if self.layer == 0.0 {
            return Self::from_f64((self.sign * self.mag).cos());
        }
        ZERO
    }

    /// Returns the tangent of `self`.
    pub fn tan(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }
        if self.mag < 0.0 {
            return *self;
        }
        if self.layer == 0.0 {
            return Self::from_f64((self.sign * self.mag).tan());
        }
        ZERO
    }

    /// Returns the arcsine of `self`. Values outside `[-1, 1]` give NaN.
    pub fn asin(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }
        if self.mag < 0.0 {
            return *self;
        }
        if self.layer == 0.0 {
            return Self::from_f64((self.sign * self.mag).asin());
        }
        NAN
    }

    /// Returns the arccosine of `self`. Values outside `[-1, 1]` give NaN.
    pub fn acos(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }
        if self.mag < 0.0 {
            return Self::from_f64(self.to_f64().acos());
        }
        if self.layer == 0.0 {
            return Self::from_f64((self.sign * self.mag).acos());
        }
        NAN
    }

    /// Returns the arctangent of `self`.
    pub fn atan(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }
        if self.mag < 0.0 {
            return *self;
        }
        if self.layer == 0.0 {
            return Self::from_f64((self.sign * self.mag).atan());
        }
        Self::from_f64(self.sign * core::f64::consts::FRAC_PI_2)
    }

    /// Returns the hyperbolic sine of `self`.
    pub fn sinh(&self) -> Self {
        self.exp().sub(&self.neg().exp()).div(&TWO)
    }

    /// Returns the hyperbolic cosine of `self`.
    pub fn cosh(&self) -> Self {
        self.exp().add(&self.neg().exp()).div(&TWO)
    }

    /// Returns the hyperbolic tangent of `self`.
    pub fn tanh(&self) -> Self {
        // both exponentials overflow past layer 0
        if self.layer > 0.0 && self.mag > 0.0 {
            return self.sgn();
        }
        self.sinh().div(&self.cosh())
    }

    /// Returns the inverse hyperbolic sine of `self`.
    pub fn asinh(&self) -> Self {
        self.add(&self.sqr().add(&ONE).sqrt()).ln()
    }

    /// Returns the inverse hyperbolic cosine of `self`. Values below 1 give NaN.
    pub fn acosh(&self) -> Self {
        self.add(&self.sqr().sub(&ONE).sqrt()).ln()
    }

    /// Returns the inverse hyperbolic tangent of `self`. Values outside `(-1, 1)` give NaN.
    pub fn atanh(&self) -> Self {
        if self.abs().ge(&ONE) {
            return NAN;
        }
        self.add(&ONE).div(&ONE.sub(self)).ln().div(&TWO)
    }
}
