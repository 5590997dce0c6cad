//! Static constants.

use crate::defs::{EXPONENT_LIMIT, NUMBER_EXP_MAX, NUMBER_EXP_MIN};
use crate::num::HyperFloat;
use lazy_static::lazy_static;

/// Zero.
pub const ZERO: HyperFloat = HyperFloat::from_components_unchecked(0.0, 0.0, 0.0);

/// One.
pub const ONE: HyperFloat = HyperFloat::from_components_unchecked(1.0, 0.0, 1.0);

/// Minus one.
pub const NEG_ONE: HyperFloat = HyperFloat::from_components_unchecked(-1.0, 0.0, 1.0);

/// Two.
pub const TWO: HyperFloat = HyperFloat::from_components_unchecked(1.0, 0.0, 2.0);

/// Three.
pub const THREE: HyperFloat = HyperFloat::from_components_unchecked(1.0, 0.0, 3.0);

/// Ten.
pub const TEN: HyperFloat = HyperFloat::from_components_unchecked(1.0, 0.0, 10.0);

/// Not a number.
pub const NAN: HyperFloat = HyperFloat::from_components_unchecked(f64::NAN, f64::NAN, f64::NAN);

/// Positive infinity.
pub const INF_POS: HyperFloat =
    HyperFloat::from_components_unchecked(1.0, f64::INFINITY, f64::INFINITY);

/// Negative infinity.
pub const INF_NEG: HyperFloat =
    HyperFloat::from_components_unchecked(-1.0, f64::INFINITY, f64::INFINITY);

/// Largest finite value: the layer is `f64::MAX`.
pub const LAYER_MAX: HyperFloat =
    HyperFloat::from_components_unchecked(1.0, f64::MAX, EXPONENT_LIMIT - 1.0);

/// Largest value whose layer is still an exact integer.
pub const LAYER_SAFE_MAX: HyperFloat =
    HyperFloat::from_components_unchecked(1.0, 9007199254740991.0, EXPONENT_LIMIT - 1.0);

/// `10^EXPONENT_LIMIT`.
pub(crate) const POW10_LIMIT: HyperFloat = HyperFloat::from_components_unchecked(
    1.0,
    2.0,
    crate::defs::LAYER_REDUCTION_THRESHOLD,
);

/// Offset of `10^0` in `POWERS_OF_TEN`.
const POWERS_OF_TEN_ZERO: i32 = -NUMBER_EXP_MIN - 1;

lazy_static! {
    /// Correctly rounded `10^i` for every `i` in `NUMBER_EXP_MIN + 1 ..= NUMBER_EXP_MAX`.
    static ref POWERS_OF_TEN: Vec<f64> = (NUMBER_EXP_MIN + 1..=NUMBER_EXP_MAX)
        .map(|i| format!("1e{}", i).parse::<f64>().unwrap_or_else(|_| 10f64.powi(i)))
        .collect();
}

/// Returns `10^power` as the nearest `f64`.
pub fn power_of_10(power: i32) -> f64 {
    let idx = power + POWERS_OF_TEN_ZERO;
    if idx >= 0 && (idx as usize) < POWERS_OF_TEN.len() {
        POWERS_OF_TEN[idx as usize]
    } else if power > 0 {
        f64::INFINITY
    } else {
        0.0
    }
}
