//! Formatting of numbers as strings.
//!
//! Plain numbers are written the way JavaScript writes them: positional notation for
//! magnitudes in `[1e-6, 1e21)`, and `<digits>e<+|-><exponent>` outside of it.

use crate::common::util::decimal_places;
use crate::defs::MAX_ES_IN_A_ROW;
use crate::num::HyperFloat;
use core::fmt::Write;

/// Formats an `f64` in the shortest form that reads back to the same value.
pub(crate) fn fmt_f64(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_owned();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if x == 0.0 {
        return "0".to_owned();
    }

    let a = x.abs();
    if (1e-6..1e21).contains(&a) {
        format!("{}", x)
    } else {
        plus_exponent(format!("{:e}", x))
    }
}

/// Formats an `f64` in exponential notation with `places` digits after the point,
/// or with the shortest digits when `places` is `None`.
fn fmt_exponential(x: f64, places: Option<usize>) -> String {
    if !x.is_finite() {
        return fmt_f64(x);
    }
    match places {
        Some(p) => plus_exponent(format!("{:.*e}", p, x)),
        None => plus_exponent(format!("{:e}", x)),
    }
}

/// Formats an `f64` with exactly `places` digits after the point.
fn fmt_fixed(x: f64, places: usize) -> String {
    if x == 0.0 {
        return format!("{:.*}", places, 0.0);
    }
    format!("{:.*}", places, x)
}

/// Adds the explicit `+` to a non-negative exponent.
fn plus_exponent(s: String) -> String {
    match s.find('e') {
        Some(i) if !s[i + 1..].starts_with('-') => format!("{}e+{}", &s[..i], &s[i + 1..]),
        _ => s,
    }
}

impl HyperFloat {
    /// Writes the shortest string representation of `self` to `w`.
    pub(crate) fn write_str<T: Write>(&self, w: &mut T) -> core::fmt::Result {
        if self.is_nan() {
            return w.write_str("NaN");
        }
        if self.is_inf() {
            return w.write_str(if self.sign > 0.0 { "Infinity" } else { "-Infinity" });
        }

        if self.layer == 0.0 && ((self.mag < 1e21 && self.mag > 1e-7) || self.mag == 0.0) {
            w.write_str(&fmt_f64(self.sign * self.mag))
        } else if self.layer <= 1.0 {
            write!(w, "{}e{}", fmt_f64(self.m()), fmt_f64(self.e()))
        } else {
            w.write_str(&self.layered(&fmt_f64(self.mag)))
        }
    }

    /// Formats the sign, then one `e` per layer up to five layers or `(e^N)` above, then `mag`.
    fn layered(&self, mag: &str) -> String {
        let sign = if self.sign < 0.0 { "-" } else { "" };
        if self.layer <= MAX_ES_IN_A_ROW {
            format!("{}{}{}", sign, "e".repeat(self.layer as usize), mag)
        } else {
            format!("{}(e^{}){}", sign, fmt_f64(self.layer), mag)
        }
    }

    /// Formats `self` with every printed component rounded to `places` significant
    /// digits after the leading one. Plain numbers get `places` digits after the point.
    pub fn to_string_with_decimal_places(&self, places: usize) -> String {
        if !self.is_finite() {
            return self.to_string();
        }

        if self.layer == 0.0 && ((self.mag < 1e21 && self.mag > 1e-7) || self.mag == 0.0) {
            fmt_fixed(self.sign * self.mag, places)
        } else if self.layer <= 1.0 {
            format!(
                "{}e{}",
                fmt_f64(decimal_places(self.m(), places)),
                fmt_f64(decimal_places(self.e(), places))
            )
        } else {
            self.layered(&fmt_f64(decimal_places(self.mag, places)))
        }
    }

    /// Formats `self` in fixed-point notation with `places` digits after the point.
    /// Values beyond layer 0 are formatted as [`HyperFloat::to_string_with_decimal_places`].
    pub fn to_fixed(&self, places: usize) -> String {
        if self.layer == 0.0 {
            fmt_fixed(self.sign * self.mag, places)
        } else {
            self.to_string_with_decimal_places(places)
        }
    }

    /// Formats `self` in exponential notation with `places` digits after the point.
    /// Values beyond layer 0 are formatted as [`HyperFloat::to_string_with_decimal_places`].
    pub fn to_exponential(&self, places: usize) -> String {
        self.exponential(Some(places))
    }

    pub(crate) fn exponential(&self, places: Option<usize>) -> String {
        if self.layer == 0.0 {
            fmt_exponential(self.sign * self.mag, places)
        } else if let Some(p) = places {
            self.to_string_with_decimal_places(p)
        } else {
            self.to_string()
        }
    }

    /// Formats `self` with `places` significant digits, choosing fixed-point or exponential
    /// notation by the exponent.
    pub fn to_precision(&self, places: usize) -> String {
        if !self.is_finite() {
            return self.to_string();
        }

        let e = self.e();
        if e <= -7.0 {
            self.to_exponential(places.saturating_sub(1))
        } else if places as f64 > e {
            self.to_fixed((places as f64 - e - 1.0) as usize)
        } else {
            self.to_exponential(places.saturating_sub(1))
        }
    }

    /// Returns the mantissa rounded to `places` digits after the leading one.
    pub fn mantissa_with_decimal_places(&self, places: usize) -> f64 {
        let m = self.m();
        if m.is_nan() || m == 0.0 {
            return m;
        }
        decimal_places(m, places)
    }

    /// Returns `mag` rounded to `places` digits after the leading one.
    pub fn magnitude_with_decimal_places(&self, places: usize) -> f64 {
        if self.mag.is_nan() || self.mag == 0.0 {
            return self.mag;
        }
        decimal_places(self.mag, places)
    }
}
