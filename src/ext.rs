//! Standard library traits: operators, ordering, conversions, and formatting.

use crate::common::consts::{ONE, ZERO};
use crate::defs::Error;
use crate::num::HyperFloat;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, LowerExp};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use core::str::FromStr;

macro_rules! impl_binary_op {
    ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $op:expr) => {
        impl $trait for HyperFloat {
            type Output = Self;
            fn $fn(self, rhs: Self) -> Self::Output {
                $op(&self, &rhs)
            }
        }

        impl $trait<&HyperFloat> for HyperFloat {
            type Output = Self;
            fn $fn(self, rhs: &HyperFloat) -> Self::Output {
                $op(&self, rhs)
            }
        }

        impl $trait<HyperFloat> for &HyperFloat {
            type Output = HyperFloat;
            fn $fn(self, rhs: HyperFloat) -> Self::Output {
                $op(self, &rhs)
            }
        }

        impl $trait<&HyperFloat> for &HyperFloat {
            type Output = HyperFloat;
            fn $fn(self, rhs: &HyperFloat) -> Self::Output {
                $op(self, rhs)
            }
        }

        impl $assign_trait for HyperFloat {
            fn $assign_fn(&mut self, rhs: Self) {
                *self = $op(self, &rhs)
            }
        }

        impl $assign_trait<&HyperFloat> for HyperFloat {
            fn $assign_fn(&mut self, rhs: &HyperFloat) {
                *self = $op(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, HyperFloat::add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, HyperFloat::sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, HyperFloat::mul);
impl_binary_op!(Div, div, DivAssign, div_assign, HyperFloat::div);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, truncated_rem);

fn truncated_rem(a: &HyperFloat, b: &HyperFloat) -> HyperFloat {
    a.modulo(b, false)
}

macro_rules! impl_prim {
    ($s:ty) => {
        impl From<$s> for HyperFloat {
            fn from(v: $s) -> Self {
                HyperFloat::from_f64(v as f64)
            }
        }

        impl_prim!($s, Add, add, AddAssign, add_assign);
        impl_prim!($s, Sub, sub, SubAssign, sub_assign);
        impl_prim!($s, Mul, mul, MulAssign, mul_assign);
        impl_prim!($s, Div, div, DivAssign, div_assign);
        impl_prim!($s, Rem, rem, RemAssign, rem_assign);

        impl PartialEq<$s> for HyperFloat {
            fn eq(&self, other: &$s) -> bool {
                *self == HyperFloat::from(*other)
            }
        }

        impl PartialOrd<$s> for HyperFloat {
            fn partial_cmp(&self, other: &$s) -> Option<Ordering> {
                self.partial_cmp(&HyperFloat::from(*other))
            }
        }
    };

    ($s:ty, $trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident) => {
        impl $trait<$s> for HyperFloat {
            type Output = Self;
            fn $fn(self, rhs: $s) -> Self::Output {
                $trait::$fn(self, HyperFloat::from(rhs))
            }
        }

        impl $trait<$s> for &HyperFloat {
            type Output = HyperFloat;
            fn $fn(self, rhs: $s) -> Self::Output {
                $trait::$fn(self, HyperFloat::from(rhs))
            }
        }

        impl $trait<HyperFloat> for $s {
            type Output = HyperFloat;
            fn $fn(self, rhs: HyperFloat) -> Self::Output {
                $trait::$fn(HyperFloat::from(self), rhs)
            }
        }

        impl $trait<&HyperFloat> for $s {
            type Output = HyperFloat;
            fn $fn(self, rhs: &HyperFloat) -> Self::Output {
                $trait::$fn(HyperFloat::from(self), rhs)
            }
        }

        impl $assign_trait<$s> for HyperFloat {
            fn $assign_fn(&mut self, rhs: $s) {
                $assign_trait::$assign_fn(self, HyperFloat::from(rhs))
            }
        }
    };
}

impl_prim!(f64);
impl_prim!(f32);
impl_prim!(i32);
impl_prim!(i64);
impl_prim!(u32);
impl_prim!(u64);

impl Neg for HyperFloat {
    type Output = Self;
    fn neg(self) -> Self::Output {
        HyperFloat::neg(&self)
    }
}

impl Neg for &HyperFloat {
    type Output = HyperFloat;
    fn neg(self) -> Self::Output {
        HyperFloat::neg(self)
    }
}

impl PartialEq for HyperFloat {
    fn eq(&self, other: &Self) -> bool {
        matches!(HyperFloat::cmp(self, other), Some(0))
    }
}

impl PartialOrd for HyperFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        HyperFloat::cmp(self, other).map(|c| c.cmp(&0))
    }
}

impl Default for HyperFloat {
    fn default() -> Self {
        ZERO
    }
}

impl Display for HyperFloat {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.write_str(f)
    }
}

impl LowerExp for HyperFloat {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.exponential(f.precision()))
    }
}

impl FromStr for HyperFloat {
    type Err = Error;

    fn from_str(src: &str) -> Result<HyperFloat, Self::Err> {
        HyperFloat::parse(src)
    }
}

impl Sum for HyperFloat {
    fn sum<I: Iterator<Item = HyperFloat>>(iter: I) -> Self {
        iter.fold(ZERO, |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a HyperFloat> for HyperFloat {
    fn sum<I: Iterator<Item = &'a HyperFloat>>(iter: I) -> Self {
        iter.fold(ZERO, |acc, v| acc + v)
    }
}

impl Product for HyperFloat {
    fn product<I: Iterator<Item = HyperFloat>>(iter: I) -> Self {
        iter.fold(ONE, |acc, v| acc * v)
    }
}

impl<'a> Product<&'a HyperFloat> for HyperFloat {
    fn product<I: Iterator<Item = &'a HyperFloat>>(iter: I) -> Self {
        iter.fold(ONE, |acc, v| acc * v)
    }
}
