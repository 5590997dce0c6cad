//! Shared constants and scalar helpers.

pub mod consts;
pub mod util;
