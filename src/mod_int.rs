// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::{PolynomialCoefficient, PolynomialDivSupported};
use num_integer::{ExtendedGcd, Integer};
use num_traits::{One, Zero};
use std::{
    fmt,
    hash::Hash,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// a modulus known at compile time.
///
/// `MODULUS` must be prime, so [`ModularInteger`] forms a field.
pub trait PrimeModulus: 'static + Copy + Eq + Hash + fmt::Debug {
    const MODULUS: u64;
}

macro_rules! known_prime {
    ($($name:ident = $value:expr;)*) => {
        $(
            #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
            pub struct $name;

            impl PrimeModulus for $name {
                const MODULUS: u64 = $value;
            }
        )*
    };
}

known_prime! {
    P2 = 2;
    P3 = 3;
    P5 = 5;
    P7 = 7;
    P11 = 11;
    P101 = 101;
}

/// an integer modulo the prime `M::MODULUS`, always stored as its canonical
/// representative in `0..M::MODULUS`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ModularInteger<M> {
    value: u64,
    modulus: PhantomData<M>,
}

impl<M: PrimeModulus> ModularInteger<M> {
    pub fn new(value: i64) -> Self {
        let value = i128::from(value).mod_floor(&i128::from(M::MODULUS));
        Self::from_reduced(value as u64)
    }
    fn from_reduced(value: u64) -> Self {
        debug_assert!(value < M::MODULUS);
        Self {
            value,
            modulus: PhantomData,
        }
    }
    pub fn value(&self) -> u64 {
        self.value
    }
    pub fn modulus() -> u64 {
        M::MODULUS
    }
    /// returns `None` for zero
    pub fn checked_inverse(&self) -> Option<Self> {
        let ExtendedGcd { gcd, x, .. } =
            i128::from(self.value).extended_gcd(&i128::from(M::MODULUS));
        if gcd.is_one() {
            Some(Self::from_reduced(
                x.mod_floor(&i128::from(M::MODULUS)) as u64,
            ))
        } else {
            None
        }
    }
}

impl<M: PrimeModulus> From<i64> for ModularInteger<M> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<M: PrimeModulus> fmt::Debug for ModularInteger<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, M::MODULUS)
    }
}

impl<M: PrimeModulus> fmt::Display for ModularInteger<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

fn add_values<M: PrimeModulus>(lhs: u64, rhs: u64) -> ModularInteger<M> {
    let sum = (u128::from(lhs) + u128::from(rhs)) % u128::from(M::MODULUS);
    ModularInteger::from_reduced(sum as u64)
}

fn sub_values<M: PrimeModulus>(lhs: u64, rhs: u64) -> ModularInteger<M> {
    add_values(lhs, M::MODULUS - rhs)
}

fn mul_values<M: PrimeModulus>(lhs: u64, rhs: u64) -> ModularInteger<M> {
    let product = (u128::from(lhs) * u128::from(rhs)) % u128::from(M::MODULUS);
    ModularInteger::from_reduced(product as u64)
}

fn div_values<M: PrimeModulus>(lhs: u64, rhs: ModularInteger<M>) -> ModularInteger<M> {
    let inverse = rhs.checked_inverse().expect("division by zero");
    mul_values(lhs, inverse.value)
}

macro_rules! impl_bin_op {
    ($op_trait:ident, $op:ident, $op_assign_trait:ident, $op_assign:ident, |$l:ident, $r:ident| $body:expr) => {
        impl<M: PrimeModulus> $op_trait for ModularInteger<M> {
            type Output = ModularInteger<M>;
            fn $op(self, rhs: ModularInteger<M>) -> ModularInteger<M> {
                let ($l, $r) = (self, rhs);
                $body
            }
        }

        impl<'a, M: PrimeModulus> $op_trait<&'a ModularInteger<M>> for ModularInteger<M> {
            type Output = ModularInteger<M>;
            fn $op(self, rhs: &'a ModularInteger<M>) -> ModularInteger<M> {
                let ($l, $r) = (self, *rhs);
                $body
            }
        }

        impl<'a, M: PrimeModulus> $op_trait<ModularInteger<M>> for &'a ModularInteger<M> {
            type Output = ModularInteger<M>;
            fn $op(self, rhs: ModularInteger<M>) -> ModularInteger<M> {
                let ($l, $r) = (*self, rhs);
                $body
            }
        }

        impl<'a, 'b, M: PrimeModulus> $op_trait<&'a ModularInteger<M>> for &'b ModularInteger<M> {
            type Output = ModularInteger<M>;
            fn $op(self, rhs: &'a ModularInteger<M>) -> ModularInteger<M> {
                let ($l, $r) = (*self, *rhs);
                $body
            }
        }

        impl<M: PrimeModulus> $op_assign_trait for ModularInteger<M> {
            fn $op_assign(&mut self, rhs: ModularInteger<M>) {
                let ($l, $r) = (*self, rhs);
                *self = $body;
            }
        }

        impl<'a, M: PrimeModulus> $op_assign_trait<&'a ModularInteger<M>> for ModularInteger<M> {
            fn $op_assign(&mut self, rhs: &'a ModularInteger<M>) {
                let ($l, $r) = (*self, *rhs);
                *self = $body;
            }
        }
    };
}

impl_bin_op!(Add, add, AddAssign, add_assign, |l, r| add_values(l.value, r.value));
impl_bin_op!(Sub, sub, SubAssign, sub_assign, |l, r| sub_values(l.value, r.value));
impl_bin_op!(Mul, mul, MulAssign, mul_assign, |l, r| mul_values(l.value, r.value));
impl_bin_op!(Div, div, DivAssign, div_assign, |l, r| div_values(l.value, r));

impl<M: PrimeModulus> Neg for ModularInteger<M> {
    type Output = ModularInteger<M>;
    fn neg(self) -> ModularInteger<M> {
        sub_values(0, self.value)
    }
}

impl<'a, M: PrimeModulus> Neg for &'a ModularInteger<M> {
    type Output = ModularInteger<M>;
    fn neg(self) -> ModularInteger<M> {
        -*self
    }
}

impl<M: PrimeModulus> Zero for ModularInteger<M> {
    fn zero() -> Self {
        Self::from_reduced(0)
    }
    fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl<M: PrimeModulus> One for ModularInteger<M> {
    fn one() -> Self {
        Self::from_reduced(1)
    }
}

impl<M: PrimeModulus> PolynomialCoefficient for ModularInteger<M> {
    fn unit_inverse(&self) -> Option<Self> {
        self.checked_inverse()
    }
}

impl<M: PrimeModulus> PolynomialDivSupported for ModularInteger<M> {}
