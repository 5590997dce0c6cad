//! Arithmetic, transcendental functions, and the hyperoperators.

mod add;
mod critical;
mod gamma;
mod inverse;
mod lambertw;
mod layeradd;
mod log;
mod mul;
mod pentate;
mod pow;
mod search;
mod series;
mod slog;
mod tetrate;
mod trig;

pub use inverse::InverseBounds;
pub use layeradd::ExcessRange;

#[cfg(test)]
mod tests;
