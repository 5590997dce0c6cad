//! Definitions.

use core::fmt::Display;

/// Values of `mag` at or above this limit are folded into the next layer.
pub const EXPONENT_LIMIT: f64 = 9e15;

/// `log10(EXPONENT_LIMIT)`: a layer's `mag` below this folds into the layer beneath.
pub const LAYER_REDUCTION_THRESHOLD: f64 = 15.954242509439325;

/// Layer-0 magnitudes below this are promoted to layer 1.
pub const FIRST_NEG_LAYER: f64 = 1.0 / 9e15;

/// Number of significant decimal digits an `f64` keeps.
pub const MAX_SIGNIFICANT_DIGITS: f64 = 17.0;

/// Largest decimal exponent of an `f64`.
pub const NUMBER_EXP_MAX: i32 = 308;

/// Smallest decimal exponent of an `f64` (subnormals included).
pub const NUMBER_EXP_MIN: i32 = -324;

/// Layers up to this count are printed as repeated `e`.
pub const MAX_ES_IN_A_ROW: f64 = 5.0;

/// `1/e`, the branch point of the Lambert W function (negated).
pub const EXPN1: f64 = 0.36787944117144233;

/// Smallest argument accepted by the Lambert W function.
pub const LAMBERTW_MIN_ARG: f64 = -0.3678794411710499;

/// Omega constant, `W(1)`.
pub const OMEGA: f64 = 0.5671432904097838;

/// `e^(1/e)`: the largest base whose infinite power tower converges.
pub const TOWER_CONVERGENCE_LIMIT: f64 = 1.444_667_861_009_766_1;

/// Bases above this are treated as `e^(1/e)` when locating tower fixed points.
pub const TOWER_CONVERGENCE_CUTOFF: f64 = 1.444667861009099;

/// `e^-e`: the smallest base whose infinite power tower converges.
pub const TOWER_CONVERGENCE_LOWER: f64 = 0.065_988_035_845_312_54;

/// Default capacity of the parse memo cache.
pub const DEFAULT_PARSE_CACHE_CAPACITY: usize = (1 << 10) - 1;

/// Iteration cap of the normalization fixed point.
pub(crate) const NORMALIZE_ITERATIONS: usize = 64;

/// Iteration cap of tetration and iterated logarithm loops.
pub(crate) const TETRATION_ITERATIONS: usize = 10_000;

/// Iteration cap of pentation loops, layer walks, and refinement searches.
pub(crate) const PENTATION_ITERATIONS: usize = 100;

/// Default refinement iterations of the super-logarithm search.
pub const SLOG_ITERATIONS: usize = 100;

/// Default iterations of the generic inverse finder.
pub const INVERSE_ITERATIONS: usize = 120;

/// Iteration cap of the Lambert W Halley solvers.
pub(crate) const LAMBERTW_ITERATIONS: usize = 100;

/// Default tolerance of the Lambert W Halley solvers.
pub const LAMBERTW_TOLERANCE: f64 = 1e-10;

/// Possible errors.
#[derive(Debug, Clone, Copy)]
pub enum Error {
    /// Lambert W iteration did not converge within its iteration cap.
    LambertWNoConvergence,

    /// Invalid argument.
    InvalidArgument,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::LambertWNoConvergence => "lambert w iteration failed to converge",
            Error::InvalidArgument => "invalid argument",
        };
        f.write_str(repr)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}
