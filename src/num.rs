//! The extended number value, its normalization, constructors, and comparison.

use crate::common::consts::{NAN, NEG_ONE, ONE, ZERO};
use crate::common::consts::power_of_10;
use crate::common::util::{self, maglog10};
use crate::defs::{
    EXPONENT_LIMIT, FIRST_NEG_LAYER, LAYER_REDUCTION_THRESHOLD, NORMALIZE_ITERATIONS,
};
use log::debug;

/// A number of the form `sign · 10^10^...^mag` with `layer` copies of `10^`.
///
/// At layer 0 `mag` is the plain magnitude. At layer 1 and above a negative `mag`
/// denotes the reciprocal of the value with the positive `mag`.
///
/// Values are immutable; every operation returns a new value. Public constructors
/// always normalize, so any value obtained through the public API satisfies:
///
///  - zero is `(0, 0, 0)`, infinity is `(±1, ∞, ∞)`, NaN is `(NaN, NaN, NaN)`;
///  - at layer 0, `mag` is `0` or inside `(1/9e15, 9e15)`;
///  - at layer 1 and above, `|mag|` is inside `[log10(9e15), 9e15)`.
#[derive(Clone, Copy, Debug)]
pub struct HyperFloat {
    pub(crate) sign: f64,
    pub(crate) layer: f64,
    pub(crate) mag: f64,
}

impl HyperFloat {
    /// Builds a value from raw parts without normalization.
    /// The caller guarantees the parts already satisfy the invariants.
    pub(crate) const fn from_components_unchecked(sign: f64, layer: f64, mag: f64) -> Self {
        HyperFloat { sign, layer, mag }
    }

    /// Builds a value from `sign`, `layer`, and `mag`, and normalizes it.
    ///
    /// `sign` is reduced to -1, 0, or 1. A negative or non-integral `layer`
    /// produces NaN.
    pub fn from_components(sign: f64, layer: f64, mag: f64) -> Self {
        if layer < 0.0 || (layer.is_finite() && layer.fract() != 0.0) {
            return NAN;
        }
        HyperFloat { sign: util::sign(sign), layer, mag }.normalize()
    }

    /// Converts an `f64` to the extended representation.
    pub fn from_f64(f: f64) -> Self {
        HyperFloat {
            sign: util::sign(f),
            layer: 0.0,
            mag: f.abs(),
        }
        .normalize()
    }

    /// Builds `mantissa · 10^exponent`.
    pub fn from_mantissa_exponent(mantissa: f64, exponent: f64) -> Self {
        if !mantissa.is_finite() || !exponent.is_finite() {
            return NAN;
        }
        HyperFloat {
            sign: util::sign(mantissa),
            layer: 1.0,
            mag: exponent + mantissa.abs().log10(),
        }
        .normalize()
    }

    /// Restores the representation invariants.
    pub(crate) fn normalize(mut self) -> Self {
        if self.sign.is_nan() || self.layer.is_nan() || self.mag.is_nan() {
            return NAN;
        }

        if self.sign == 0.0
            || (self.mag == 0.0 && self.layer == 0.0)
            || (self.mag == f64::NEG_INFINITY && self.layer > 0.0 && self.layer.is_finite())
        {
            return ZERO;
        }

        if self.layer == 0.0 && self.mag < 0.0 {
            self.mag = -self.mag;
            self.sign = -self.sign;
        }

        if self.mag.is_infinite() || self.layer.is_infinite() {
            return HyperFloat {
                sign: self.sign,
                layer: f64::INFINITY,
                mag: f64::INFINITY,
            };
        }

        if self.layer == 0.0 && self.mag < FIRST_NEG_LAYER {
            self.layer += 1.0;
            self.mag = self.mag.log10();
            return self;
        }

        let mut absmag = self.mag.abs();
        let mut signmag = util::sign(self.mag);
        let mut steps = 0;

        while absmag >= EXPONENT_LIMIT {
            if steps == NORMALIZE_ITERATIONS {
                debug!("normalize: layer promotion cap reached at layer {}", self.layer);
                break;
            }
            steps += 1;
            self.layer += 1.0;
            self.mag = signmag * absmag.log10();
            absmag = self.mag.abs();
            signmag = util::sign(self.mag);
        }

        while absmag < LAYER_REDUCTION_THRESHOLD && self.layer > 0.0 {
            if steps == NORMALIZE_ITERATIONS {
                debug!("normalize: layer reduction cap reached at layer {}", self.layer);
                break;
            }
            steps += 1;
            self.layer -= 1.0;
            if self.layer == 0.0 {
                self.mag = 10f64.powf(self.mag);
            } else {
                self.mag = signmag * 10f64.powf(absmag);
                absmag = self.mag.abs();
                signmag = util::sign(self.mag);
            }
        }

        if self.layer == 0.0 {
            if self.mag < 0.0 {
                self.mag = -self.mag;
                self.sign = -self.sign;
            } else if self.mag == 0.0 {
                return ZERO;
            }
        }

        if self.mag.is_infinite() {
            return HyperFloat {
                sign: self.sign,
                layer: f64::INFINITY,
                mag: f64::INFINITY,
            };
        }

        self
    }

    /// Returns the nearest `f64`: infinite for values beyond `f64` range, 0 for values below it.
    pub fn to_f64(&self) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        if self.layer == f64::INFINITY {
            return self.sign * f64::INFINITY;
        }
        if self.layer == 0.0 {
            self.sign * self.mag
        } else if self.layer == 1.0 {
            self.sign * 10f64.powf(self.mag)
        } else if self.mag > 0.0 {
            self.sign * f64::INFINITY
        } else {
            0.0
        }
    }

    /// Returns the sign field: -1, 0, 1, or NaN.
    pub fn sign(&self) -> f64 {
        self.sign
    }

    /// Returns the number of stacked exponents.
    pub fn layer(&self) -> f64 {
        self.layer
    }

    /// Returns the magnitude field.
    pub fn mag(&self) -> f64 {
        self.mag
    }

    /// Mantissa of the scientific form. Meaningful at layers 0 and 1; equals the sign above.
    pub fn m(&self) -> f64 {
        if self.sign == 0.0 {
            0.0
        } else if self.layer == 0.0 {
            let exp = self.mag.log10().floor();
            let man = if self.mag == 5e-324 {
                5.0
            } else {
                self.mag / power_of_10(exp as i32)
            };
            self.sign * man
        } else if self.layer == 1.0 {
            let residue = self.mag - self.mag.floor();
            self.sign * 10f64.powf(residue)
        } else {
            self.sign
        }
    }

    /// Exponent of the scientific form.
    pub fn e(&self) -> f64 {
        if self.sign == 0.0 {
            0.0
        } else if self.layer == 0.0 {
            self.mag.log10().floor()
        } else if self.layer == 1.0 {
            self.mag.floor()
        } else if self.layer == 2.0 {
            (util::sign(self.mag) * 10f64.powf(self.mag.abs())).floor()
        } else {
            self.mag * f64::INFINITY
        }
    }

    /// Sign as a number; same as [`HyperFloat::sign`].
    pub fn s(&self) -> f64 {
        self.sign
    }

    /// Returns the value with mantissa replaced by `m`. Values above layer 2 keep
    /// their magnitude and only take the sign of `m`.
    pub fn with_m(&self, m: f64) -> Self {
        if self.layer <= 2.0 {
            Self::from_mantissa_exponent(m, self.e())
        } else if util::sign(m) == 0.0 {
            ZERO
        } else {
            HyperFloat {
                sign: util::sign(m),
                ..*self
            }
        }
    }

    /// Returns the value with exponent replaced by `e`. Values above layer 2 are returned unchanged.
    pub fn with_e(&self, e: f64) -> Self {
        if self.layer <= 2.0 {
            Self::from_mantissa_exponent(self.m(), e)
        } else {
            *self
        }
    }

    /// Returns the value with sign replaced by `s`.
    pub fn with_s(&self, s: f64) -> Self {
        if s == 0.0 {
            ZERO
        } else {
            HyperFloat {
                sign: util::sign(s),
                ..*self
            }
            .normalize()
        }
    }

    /// Returns true if `self` is NaN.
    pub fn is_nan(&self) -> bool {
        self.sign.is_nan() || self.layer.is_nan() || self.mag.is_nan()
    }

    /// Returns true if `self` is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool {
        self.sign.is_finite() && self.layer.is_finite() && self.mag.is_finite()
    }

    /// Returns true if `self` is infinite.
    pub fn is_inf(&self) -> bool {
        !self.is_nan() && self.layer.is_infinite()
    }

    /// Returns true if `self` is zero.
    pub fn is_zero(&self) -> bool {
        self.sign == 0.0
    }

    /// Returns true if `self` is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.sign > 0.0
    }

    /// Returns true if `self` is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.sign < 0.0
    }

    /// Returns true if `self` is a finite integer. All finite values at layer 1 and above
    /// with positive `mag` are integers.
    pub fn is_integer(&self) -> bool {
        if !self.is_finite() {
            return false;
        }
        if self.layer == 0.0 {
            self.mag.fract() == 0.0
        } else {
            self.mag > 0.0
        }
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        HyperFloat {
            sign: if self.sign == 0.0 { 0.0 } else { self.sign.abs() },
            ..*self
        }
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        HyperFloat {
            sign: if self.sign == 0.0 { 0.0 } else { -self.sign },
            ..*self
        }
    }

    /// Returns -1, 0, or 1 according to the sign of `self`.
    pub fn sgn(&self) -> Self {
        Self::from_f64(self.sign)
    }

    /// Compares absolute values. Returns `None` if either operand is NaN.
    pub fn cmpabs(&self, d2: &Self) -> Option<i8> {
        if self.is_nan() || d2.is_nan() {
            return None;
        }
        let layer_a = if self.mag > 0.0 { self.layer } else { -self.layer };
        let layer_b = if d2.mag > 0.0 { d2.layer } else { -d2.layer };
        Some(if layer_a > layer_b {
            1
        } else if layer_a < layer_b {
            -1
        } else if self.mag > d2.mag {
            1
        } else if self.mag < d2.mag {
            -1
        } else {
            0
        })
    }

    /// Compares `self` with `d2`. Returns positive if `self` > `d2`, negative if `self` < `d2`,
    /// 0 otherwise, and `None` if either operand is NaN.
    pub fn cmp(&self, d2: &Self) -> Option<i8> {
        let abs_cmp = self.cmpabs(d2)?;
        Some(if self.sign > d2.sign {
            1
        } else if self.sign < d2.sign {
            -1
        } else {
            self.sign as i8 * abs_cmp
        })
    }

    /// Returns true if `self` and `d2` are equal up to the relative `tolerance`
    /// applied to their magnitudes at a common layer.
    pub fn eq_tolerance(&self, d2: &Self, tolerance: f64) -> bool {
        if self.is_nan() || d2.is_nan() {
            return false;
        }
        if self.sign != d2.sign {
            return false;
        }
        if self.layer == d2.layer && self.mag == d2.mag {
            return true;
        }
        if (self.layer - d2.layer).abs() > 1.0 {
            return false;
        }
        let mut mag_a = self.mag;
        let mut mag_b = d2.mag;
        if self.layer > d2.layer {
            mag_b = maglog10(mag_b);
        }
        if self.layer < d2.layer {
            mag_a = maglog10(mag_a);
        }
        (mag_a - mag_b).abs() <= tolerance * mag_a.abs().max(mag_b.abs())
    }

    /// Compares `self` with `d2`, treating values within `tolerance` of each other as equal.
    pub fn cmp_tolerance(&self, d2: &Self, tolerance: f64) -> Option<i8> {
        if self.eq_tolerance(d2, tolerance) {
            Some(0)
        } else {
            self.cmp(d2)
        }
    }

    /// Returns the operand with the larger absolute value.
    pub fn maxabs(&self, d2: &Self) -> Self {
        match self.cmpabs(d2) {
            Some(c) if c < 0 => *d2,
            Some(_) => *self,
            None => NAN,
        }
    }

    /// Returns the operand with the smaller absolute value.
    pub fn minabs(&self, d2: &Self) -> Self {
        match self.cmpabs(d2) {
            Some(c) if c > 0 => *d2,
            Some(_) => *self,
            None => NAN,
        }
    }

    /// Returns the maximum of `self` and `d1`.
    pub fn max(&self, d1: &Self) -> Self {
        match self.cmp(d1) {
            Some(c) if c < 0 => *d1,
            Some(_) => *self,
            None => NAN,
        }
    }

    /// Returns the minimum of `self` and `d1`.
    pub fn min(&self, d1: &Self) -> Self {
        match self.cmp(d1) {
            Some(c) if c > 0 => *d1,
            Some(_) => *self,
            None => NAN,
        }
    }

    /// Restricts `self` to the range `[min, max]`.
    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        self.max(min).min(max)
    }

    /// Returns `self`, or `min` if `self` is below it.
    pub fn clamp_min(&self, min: &Self) -> Self {
        self.max(min)
    }

    /// Returns `self`, or `max` if `self` is above it.
    pub fn clamp_max(&self, max: &Self) -> Self {
        self.min(max)
    }

    /// Rounds half away from zero. Values at layer 1 and above are already integral.
    pub fn round(&self) -> Self {
        if self.mag < 0.0 {
            return ZERO;
        }
        if self.layer == 0.0 {
            return Self::from_components(self.sign, 0.0, self.mag.round());
        }
        *self
    }

    /// Returns the largest integer less than or equal to `self`.
    pub fn floor(&self) -> Self {
        if self.mag < 0.0 {
            return if self.sign == -1.0 { NEG_ONE } else { ZERO };
        }
        if self.sign == -1.0 {
            return self.neg().ceil().neg();
        }
        if self.layer == 0.0 {
            return Self::from_components(self.sign, 0.0, self.mag.floor());
        }
        *self
    }

    /// Returns the smallest integer greater than or equal to `self`.
    pub fn ceil(&self) -> Self {
        if self.mag < 0.0 {
            return if self.sign == 1.0 { ONE } else { ZERO };
        }
        if self.sign == -1.0 {
            return self.neg().floor().neg();
        }
        if self.layer == 0.0 {
            return Self::from_components(self.sign, 0.0, self.mag.ceil());
        }
        *self
    }

    /// Returns the integer part of `self`.
    pub fn trunc(&self) -> Self {
        if self.mag < 0.0 {
            return ZERO;
        }
        if self.layer == 0.0 {
            return Self::from_components(self.sign, 0.0, self.mag.trunc());
        }
        *self
    }

    /// Returns a random value spread over layers `0..=max_layers`.
    /// The distribution favors edge cases: zeros, units, powers of ten, and integers.
    #[cfg(feature = "random")]
    pub fn random(max_layers: usize) -> Self {
        use rand::Rng;

        let mut rng = rand::thread_rng();

        if rng.gen::<f64>() * 20.0 < 1.0 {
            return ZERO;
        }
        let randomsign = if rng.gen::<f64>() > 0.5 { 1.0 } else { -1.0 };
        if rng.gen::<f64>() * 20.0 < 1.0 {
            return HyperFloat::from_components_unchecked(randomsign, 0.0, 1.0);
        }

        let layer = rng.gen_range(0..=max_layers) as f64;
        let mut randomexp = if layer == 0.0 {
            rng.gen::<f64>() * 616.0 - 308.0
        } else {
            rng.gen::<f64>() * 16.0
        };
        if rng.gen::<f64>() > 0.9 {
            randomexp = randomexp.trunc();
        }
        let mut randommag = 10f64.powf(randomexp);
        if rng.gen::<f64>() > 0.9 {
            randommag = randommag.trunc();
        }
        Self::from_components(randomsign, layer, randommag)
    }
}
