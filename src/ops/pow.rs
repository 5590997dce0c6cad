//! Powers, roots, and the exponential.

use crate::common::consts::{NAN, ONE, THREE, TWO, ZERO};
use crate::num::HyperFloat;

/// `log10(log10(e))`.
const LOG10_LOG10_E: f64 = -0.36221568869946325;

/// `log10(e)`.
const LOG10_E: f64 = core::f64::consts::LOG10_E;

impl HyperFloat {
    /// Returns `10^self`.
    pub fn pow10(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }
        if self.layer.is_infinite() {
            return if self.sign > 0.0 { *self } else { ZERO };
        }

        let mut a = *self;

        if a.layer == 0.0 {
            let newmag = 10f64.powf(a.sign * a.mag);
            if newmag.is_finite() && newmag.abs() >= 0.1 {
                return Self::from_components(1.0, 0.0, newmag);
            }
            if a.sign == 0.0 {
                return ONE;
            }
            a = Self::from_components_unchecked(a.sign, a.layer + 1.0, a.mag.log10());
        }

        if a.sign > 0.0 && a.mag >= 0.0 {
            Self::from_components(a.sign, a.layer + 1.0, a.mag)
        } else if a.sign < 0.0 && a.mag >= 0.0 {
            Self::from_components(-a.sign, a.layer + 1.0, -a.mag)
        } else {
            // 10 raised to a number within rounding of zero
            ONE
        }
    }

    /// Returns `e^self`.
    pub fn exp(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }
        if self.layer.is_infinite() {
            return if self.sign > 0.0 { *self } else { ZERO };
        }
        if self.mag < 0.0 {
            return ONE;
        }
        if self.layer == 0.0 && self.mag <= 709.7 {
            Self::from_f64((self.sign * self.mag).exp())
        } else if self.layer == 0.0 {
            Self::from_components(1.0, 1.0, self.sign * LOG10_E * self.mag)
        } else if self.layer == 1.0 {
            Self::from_components(1.0, 2.0, self.sign * (LOG10_LOG10_E + self.mag))
        } else {
            Self::from_components(1.0, self.layer + 1.0, self.sign * self.mag)
        }
    }

    /// Returns `self^b`.
    ///
    /// A negative base takes its sign from the parity of `b`. A negative base with a
    /// non-integer or overlarge `b` has no real value and gives NaN.
    pub fn pow(&self, b: &Self) -> Self {
        if self.is_nan() || b.is_nan() {
            return NAN;
        }

        if self.sign == 0.0 {
            return if b.is_zero() { ONE } else { *self };
        }
        if self.sign == 1.0 && self.layer == 0.0 && self.mag == 1.0 {
            return *self;
        }
        if b.sign == 0.0 {
            return ONE;
        }
        if b.sign == 1.0 && b.layer == 0.0 && b.mag == 1.0 {
            return *self;
        }

        let result = self.abs_log10().mul(b).pow10();

        if self.sign == -1.0 {
            let parity = (b.to_f64() % 2.0).abs();
            return if parity == 1.0 {
                result.neg()
            } else if parity == 0.0 {
                result
            } else {
                NAN
            };
        }

        result
    }

    /// Returns the `n`-th root: `self^(1/n)`.
    pub fn root(&self, n: &Self) -> Self {
        self.pow(&n.recip())
    }

    /// Returns `self²`.
    pub fn sqr(&self) -> Self {
        self.pow(&TWO)
    }

    /// Returns `self³`.
    pub fn cube(&self) -> Self {
        self.pow(&THREE)
    }

    /// Returns the square root. Negative values give NaN.
    pub fn sqrt(&self) -> Self {
        if self.is_nan() || self.sign < 0.0 {
            return NAN;
        }
        if self.layer == 0.0 {
            return Self::from_f64(self.mag.sqrt() * self.sign);
        }
        self.abs_log10().div(&TWO).pow10()
    }

    /// Returns the cube root.
    pub fn cbrt(&self) -> Self {
        if self.is_nan() {
            return NAN;
        }
        if self.layer == 0.0 {
            return Self::from_f64((self.sign * self.mag).cbrt());
        }
        let root = self.abs_log10().div(&THREE).pow10();
        if self.sign < 0.0 {
            root.neg()
        } else {
            root
        }
    }
}
