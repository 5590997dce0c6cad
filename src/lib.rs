//! Astro-hyperfloat is a library of numbers far beyond the `f64` range, up to towers of exponents.
//!
//! A number is a triple of `f64` fields: `sign · 10^10^...^mag` with `layer` copies of `10^`.
//! Arithmetic, logarithms, and powers move values between layers in closed form, so
//! `10^10^10^300` costs no more to handle than `300`. The hyperoperators on top of that are
//! tetration to real heights, the super-logarithm, fractional layer shifts, pentation,
//! super-roots, and the Lambert W function.
//!
//! Precision is that of an `f64` mantissa: about 17 significant digits in the topmost `mag`.
//!
//! Characteristics:
//!
//! | Name                           | Value               |
//! |:-------------------------------|--------------------:|
//! | Significant decimal digits     |                 ~17 |
//! | Largest finite layer           |          `f64::MAX` |
//! | Largest `mag` in a layer       |                9e15 |
//!
//! ## Examples
//!
//! ``` rust
//! use astro_hyperfloat::{HyperFloat, ONE, TEN};
//!
//! // 10^10^10
//! let d = TEN.tetrate(3.0, &ONE, false).unwrap();
//! assert_eq!(d.to_string(), "1e10000000000");
//!
//! // the super-logarithm inverts tetration
//! let h = d.slog(&TEN, 100, false).unwrap();
//! assert!((h.to_f64() - 3.0).abs() < 1e-10);
//!
//! // numbers can be parsed from several notations
//! let d: HyperFloat = "eee5".parse().unwrap();
//! assert!(d > TEN.tetrate(4.0, &ONE, false).unwrap());
//! ```
//!
//! Results with no real value are NaN, and overflow gives signed infinity. Operations that run
//! the Lambert W solver return `Result` and fail with [`Error::LambertWNoConvergence`] if it
//! does not converge.

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::module_inception)]

mod cache;
mod common;
mod defs;
mod ext;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Error;
pub use crate::num::HyperFloat;
pub use crate::ops::ExcessRange;
pub use crate::ops::InverseBounds;
pub use crate::parser::parse_cache_capacity;
pub use crate::parser::set_parse_cache_capacity;

pub use crate::common::consts::INF_NEG;
pub use crate::common::consts::INF_POS;
pub use crate::common::consts::LAYER_MAX;
pub use crate::common::consts::LAYER_SAFE_MAX;
pub use crate::common::consts::NAN;
pub use crate::common::consts::NEG_ONE;
pub use crate::common::consts::ONE;
pub use crate::common::consts::THREE;
pub use crate::common::consts::TEN;
pub use crate::common::consts::TWO;
pub use crate::common::consts::ZERO;

pub use crate::defs::DEFAULT_PARSE_CACHE_CAPACITY;
pub use crate::defs::EXPN1;
pub use crate::defs::EXPONENT_LIMIT;
pub use crate::defs::FIRST_NEG_LAYER;
pub use crate::defs::INVERSE_ITERATIONS;
pub use crate::defs::LAMBERTW_MIN_ARG;
pub use crate::defs::LAMBERTW_TOLERANCE;
pub use crate::defs::LAYER_REDUCTION_THRESHOLD;
pub use crate::defs::MAX_ES_IN_A_ROW;
pub use crate::defs::MAX_SIGNIFICANT_DIGITS;
pub use crate::defs::NUMBER_EXP_MAX;
pub use crate::defs::NUMBER_EXP_MIN;
pub use crate::defs::OMEGA;
pub use crate::defs::SLOG_ITERATIONS;
pub use crate::defs::TOWER_CONVERGENCE_CUTOFF;
pub use crate::defs::TOWER_CONVERGENCE_LIMIT;
pub use crate::defs::TOWER_CONVERGENCE_LOWER;
