//! Logarithms.
//!
//! At layer 1 and above, the decimal logarithm is the value one layer down,
//! so these never lose range.

use crate::common::consts::{NAN, ZERO};
use crate::common::util::sign;
use crate::num::HyperFloat;

/// `log2(10)`.
const LOG2_10: f64 = 3.321928094887362;

/// `log10(log2(10))`.
const LOG10_LOG2_10: f64 = 0.5213902276543247;

/// `ln(10)`.
const LN_10: f64 = 2.302585092994046;

/// `log10(ln(10))`.
const LOG10_LN_10: f64 = 0.36221568869946325;

impl HyperFloat {
    /// Returns `log10(|self|)`. Zero gives NaN.
    pub fn abs_log10(&self) -> Self {
        if self.sign == 0.0 {
            NAN
        } else if self.layer > 0.0 {
            Self::from_components(sign(self.mag), self.layer - 1.0, self.mag.abs())
        } else {
            Self::from_components(1.0, 0.0, self.mag.log10())
        }
    }

    /// Returns the decimal logarithm. Non-positive values give NaN.
    pub fn log10(&self) -> Self {
        if self.sign <= 0.0 {
            NAN
        } else if self.layer > 0.0 {
            Self::from_components(sign(self.mag), self.layer - 1.0, self.mag.abs())
        } else {
            Self::from_components(self.sign, 0.0, self.mag.log10())
        }
    }

    /// Protected decimal logarithm: negative values give 0.
    pub fn plog10(&self) -> Self {
        if self.sign < 0.0 {
            ZERO
        } else {
            self.log10()
        }
    }

    /// Returns the logarithm with base `b`. Non-positive values, non-positive bases,
    /// and base 1 give NaN.
    pub fn log(&self, b: &Self) -> Self {
        if self.sign <= 0.0 || b.sign <= 0.0 {
            return NAN;
        }
        if b.sign == 1.0 && b.layer == 0.0 && b.mag == 1.0 {
            return NAN;
        }
        if b.layer == 0.0 && b.mag == 10.0 {
            return self.log10();
        }
        if self.layer == 0.0 && b.layer == 0.0 {
            return Self::from_components(self.sign, 0.0, self.mag.ln() / b.mag.ln());
        }
        self.log10().div(&b.log10())
    }

    /// Returns the binary logarithm. Non-positive values give NaN.
    pub fn log2(&self) -> Self {
        if self.sign <= 0.0 {
            NAN
        } else if self.layer == 0.0 {
            Self::from_components(self.sign, 0.0, self.mag.log2())
        } else if self.layer == 1.0 {
            Self::from_components(sign(self.mag), 0.0, self.mag.abs() * LOG2_10)
        } else if self.layer == 2.0 {
            Self::from_components(sign(self.mag), 1.0, self.mag.abs() + LOG10_LOG2_10)
        } else {
            Self::from_components(sign(self.mag), self.layer - 1.0, self.mag.abs())
        }
    }

    /// Returns the natural logarithm. Non-positive values give NaN.
    pub fn ln(&self) -> Self {
        if self.sign <= 0.0 {
            NAN
        } else if self.layer == 0.0 {
            Self::from_components(self.sign, 0.0, self.mag.ln())
        } else if self.layer == 1.0 {
            Self::from_components(sign(self.mag), 0.0, self.mag.abs() * LN_10)
        } else if self.layer == 2.0 {
            Self::from_components(sign(self.mag), 1.0, self.mag.abs() + LOG10_LN_10)
        } else {
            Self::from_components(sign(self.mag), self.layer - 1.0, self.mag.abs())
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::{INF_POS, ONE, TEN, TWO};
    use rand::random;

    #[test]
    fn test_log() {
        // domain
        assert!(ZERO.log10().is_nan());
        assert!(ONE.neg().ln().is_nan());
        assert!(ZERO.abs_log10().is_nan());
        assert!(TWO.log(&ONE).is_nan());
        assert!(TWO.log(&ZERO).is_nan());
        assert!(ONE.neg().plog10().is_zero());
        assert!(INF_POS.log10() == INF_POS);
        assert!(INF_POS.ln() == INF_POS);

        assert_eq!(HyperFloat::from_f64(1000.0).log10().to_f64(), 3.0);
        assert_eq!(HyperFloat::from_f64(1e10).log(&TEN).to_f64(), 10.0);
        assert_eq!(HyperFloat::from_f64(-1000.0).abs_log10().to_f64(), 3.0);
        assert_eq!(HyperFloat::from_f64(8.0).log2().to_f64(), 3.0);

        // one layer down
        let d = HyperFloat::from_components(1.0, 2.0, 300.0);
        let l = d.log10();
        assert!(l.layer == 1.0 && l.mag == 300.0);
        let d = HyperFloat::from_components(1.0, 4.0, 300.0);
        assert!(d.ln() == HyperFloat::from_components(1.0, 3.0, 300.0));
        assert!(d.log2() == HyperFloat::from_components(1.0, 3.0, 300.0));

        // ln(10^10^20) = 10^20 · ln 10
        let d = HyperFloat::from_components(1.0, 2.0, 20.0);
        assert!(d.ln().eq_tolerance(&HyperFloat::from_f64(1e20 * LN_10), 1e-12));
        assert!(d.log2().eq_tolerance(&HyperFloat::from_f64(1e20 * LOG2_10), 1e-12));

        for _ in 0..1000 {
            let x = random::<f64>() * 1e300;
            let b = random::<f64>() * 100.0 + 1.5;
            let d = HyperFloat::from_f64(x);
            assert!((d.ln().to_f64() - x.ln()).abs() <= 1e-12 * x.ln().abs().max(1.0));
            assert!((d.log2().to_f64() - x.log2()).abs() <= 1e-12 * x.log2().abs().max(1.0));
            let expected = x.ln() / b.ln();
            let got = d.log(&HyperFloat::from_f64(b)).to_f64();
            assert!((got - expected).abs() <= 1e-12 * expected.abs().max(1.0));
        }
    }
}
