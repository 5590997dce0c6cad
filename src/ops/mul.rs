//! Multiplication, division, and remainder.

use crate::common::consts::{NAN, ZERO};
use crate::common::util::sign;
use crate::num::HyperFloat;

impl HyperFloat {
    /// Multiplies `self` by `d2` and returns the product.
    ///
    /// The operand farther from 1 decides the path: two layer-0 operands multiply natively,
    /// one layer apart adds a logarithm to the exponent, and at layer 2 the exponents are
    /// added one layer down.
    pub fn mul(&self, d2: &Self) -> Self {
        if self.is_nan() || d2.is_nan() {
            return NAN;
        }

        let prod_sign = self.sign * d2.sign;

        if self.layer.is_infinite() && d2.layer.is_infinite() {
            return Self::from_components_unchecked(prod_sign, f64::INFINITY, f64::INFINITY);
        }
        if (self.layer.is_infinite() && d2.sign == 0.0) || (d2.layer.is_infinite() && self.sign == 0.0) {
            return NAN;
        }
        if self.layer.is_infinite() || d2.layer.is_infinite() {
            return Self::from_components_unchecked(prod_sign, f64::INFINITY, f64::INFINITY);
        }

        if self.sign == 0.0 || d2.sign == 0.0 {
            return ZERO;
        }

        // x · 1/x is exactly ±1
        if self.layer == d2.layer && self.mag == -d2.mag {
            return Self::from_components_unchecked(prod_sign, 0.0, 1.0);
        }

        let (a, b) = if self.layer > d2.layer || (self.layer == d2.layer && self.mag.abs() > d2.mag.abs()) {
            (self, d2)
        } else {
            (d2, self)
        };

        if a.layer == 0.0 && b.layer == 0.0 {
            return Self::from_f64(prod_sign * a.mag * b.mag);
        }

        if a.layer >= 3.0 || a.layer - b.layer >= 2.0 {
            return Self::from_components(prod_sign, a.layer, a.mag);
        }

        if a.layer == 1.0 && b.layer == 0.0 {
            return Self::from_components(prod_sign, 1.0, a.mag + b.mag.log10());
        }

        if a.layer == 1.0 && b.layer == 1.0 {
            return Self::from_components(prod_sign, 1.0, a.mag + b.mag);
        }

        // a.layer == 2 and b.layer is 1 or 2: add the exponents one layer down
        let exp_a = Self::from_components(sign(a.mag), a.layer - 1.0, a.mag.abs());
        let exp_b = Self::from_components(sign(b.mag), b.layer - 1.0, b.mag.abs());
        let newmag = exp_a.add(&exp_b);
        Self::from_components(prod_sign, newmag.layer + 1.0, newmag.sign * newmag.mag)
    }

    /// Returns `1/self`. The reciprocal of zero is NaN, of infinity is zero.
    pub fn recip(&self) -> Self {
        if self.is_nan() || self.sign == 0.0 {
            NAN
        } else if self.layer.is_infinite() {
            ZERO
        } else if self.layer == 0.0 {
            Self::from_components(self.sign, 0.0, 1.0 / self.mag)
        } else {
            Self::from_components(self.sign, self.layer, -self.mag)
        }
    }

    /// Divides `self` by `d2` and returns the quotient.
    ///
    /// Division by zero is NaN when `self` is zero or NaN, and infinity with the sign of
    /// `self` otherwise.
    pub fn div(&self, d2: &Self) -> Self {
        if d2.is_zero() {
            if self.is_zero() || self.is_nan() {
                return NAN;
            }
            return Self::from_components_unchecked(self.sign, f64::INFINITY, f64::INFINITY);
        }
        self.mul(&d2.recip())
    }

    /// Returns the remainder of division of `self` by `d2`.
    ///
    /// With `floored` unset the result takes the sign of `self` (truncated division),
    /// otherwise it takes the sign of `d2` (floored division).
    /// A zero operand gives zero.
    pub fn modulo(&self, d2: &Self, floored: bool) -> Self {
        if self.is_nan() || d2.is_nan() {
            return NAN;
        }

        let divisor = d2.abs();

        if self.is_zero() || divisor.is_zero() {
            return ZERO;
        }

        if floored {
            let absmod = self.abs().modulo(&divisor, false);
            if absmod.is_zero() {
                return ZERO;
            }
            let absmod = if (self.sign == -1.0) != (d2.sign == -1.0) {
                divisor.sub(&absmod)
            } else {
                absmod
            };
            return absmod.mul(&d2.sgn());
        }

        let num_self = self.to_f64();
        let num_divisor = divisor.to_f64();
        if num_self.is_finite() && num_divisor.is_finite() && num_self != 0.0 && num_divisor != 0.0 {
            return Self::from_f64(num_self % num_divisor);
        }

        // divisor is too small to register
        if self.sub(&divisor) == *self {
            return ZERO;
        }

        // self is too small to register
        if divisor.sub(self) == divisor {
            return *self;
        }

        if self.sign == -1.0 {
            return self.abs().modulo(&divisor, false).neg();
        }

        self.sub(&self.div(&divisor).floor().mul(&divisor))
    }
}
