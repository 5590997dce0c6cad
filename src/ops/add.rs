//! Addition and subtraction.

use crate::common::consts::{NAN, ZERO};
use crate::common::util::sign;
use crate::defs::MAX_SIGNIFICANT_DIGITS;
use crate::num::HyperFloat;

impl HyperFloat {
    /// Adds `d2` to `self` and returns the sum.
    ///
    /// Operands at layer 2 and above absorb anything smaller, so the sum is the operand
    /// with the larger absolute value. `+∞ + -∞` is NaN.
    pub fn add(&self, d2: &Self) -> Self {
        if self.is_nan() || d2.is_nan() {
            return NAN;
        }

        if self.layer.is_infinite() && d2.layer.is_infinite() && self.sign != d2.sign {
            return NAN;
        }
        if self.layer.is_infinite() {
            return *self;
        }
        if d2.layer.is_infinite() {
            return *d2;
        }

        // one of the numbers is zero
        if self.sign == 0.0 {
            return *d2;
        }
        if d2.sign == 0.0 {
            return *self;
        }

        // a + (-a) is exactly zero at any magnitude
        if self.sign == -d2.sign && self.layer == d2.layer && self.mag == d2.mag {
            return ZERO;
        }

        if self.layer >= 2.0 || d2.layer >= 2.0 {
            return self.maxabs(d2);
        }

        let (a, b) = if matches!(self.cmpabs(d2), Some(c) if c > 0) {
            (self, d2)
        } else {
            (d2, self)
        };

        if a.layer == 0.0 && b.layer == 0.0 {
            return Self::from_f64(a.sign * a.mag + b.sign * b.mag);
        }

        let layer_a = a.layer * sign(a.mag);
        let layer_b = b.layer * sign(b.mag);

        // b is too small to register
        if layer_a - layer_b >= 2.0 {
            return *a;
        }

        if layer_a == 0.0 && layer_b == -1.0 {
            let exp_a = a.mag.log10();
            if (b.mag - exp_a).abs() > MAX_SIGNIFICANT_DIGITS {
                return *a;
            }
            let magdiff = 10f64.powf(exp_a - b.mag);
            let mantissa = b.sign + a.sign * magdiff;
            return Self::from_components(sign(mantissa), 1.0, b.mag + mantissa.abs().log10());
        }

        if layer_a == 1.0 && layer_b == 0.0 {
            let exp_b = b.mag.log10();
            if (a.mag - exp_b).abs() > MAX_SIGNIFICANT_DIGITS {
                return *a;
            }
            let magdiff = 10f64.powf(a.mag - exp_b);
            let mantissa = b.sign + a.sign * magdiff;
            return Self::from_components(sign(mantissa), 1.0, exp_b + mantissa.abs().log10());
        }

        if (a.mag - b.mag).abs() > MAX_SIGNIFICANT_DIGITS {
            return *a;
        }
        let magdiff = 10f64.powf(a.mag - b.mag);
        let mantissa = b.sign + a.sign * magdiff;
        Self::from_components(sign(mantissa), 1.0, b.mag + mantissa.abs().log10())
    }

    /// Subtracts `d2` from `self` and returns the difference.
    pub fn sub(&self, d2: &Self) -> Self {
        self.add(&d2.neg())
    }
}
