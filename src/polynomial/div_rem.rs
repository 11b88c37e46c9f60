// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::{Polynomial, PolynomialCoefficient, PolynomialDivSupported};
use log::trace;
use num_integer::Integer;
use num_traits::{CheckedDiv, CheckedRem, One, Zero};
use std::{
    borrow::Borrow,
    convert::identity,
    mem,
    ops::{Div, DivAssign, Rem, RemAssign},
};

/// The result of dividing `dividend` by `divisor`:
/// `factor * dividend == quotient * divisor + remainder`
/// where `factor == pow(divisor.highest_power_coefficient(), exponent)`.
///
/// When the divisor is non-zero, `remainder.len() < divisor.len()`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PseudoDivRem<T> {
    pub exponent: usize,
    pub factor: T,
    pub quotient: Polynomial<T>,
    pub remainder: Polynomial<T>,
}

impl<T: PolynomialCoefficient> PseudoDivRem<T> {
    fn unchanged(dividend: Polynomial<T>) -> Self {
        PseudoDivRem {
            exponent: 0,
            factor: T::one(),
            quotient: Zero::zero(),
            remainder: dividend,
        }
    }
}

/// how each reduction step cancels the remainder's leading term
enum Reduction<'a, T> {
    /// multiply the remainder by the divisor's leading coefficient first
    Scale(&'a T),
    /// multiply the quotient term by the inverse of the divisor's leading coefficient
    Invert(T),
}

fn reduce<T: PolynomialCoefficient>(
    dividend: Vec<T>,
    divisor: &[T],
    reduction: Reduction<T>,
) -> PseudoDivRem<T> {
    debug_assert!(divisor.last().map_or(false, |v| !v.is_zero()));
    let divisor_len = divisor.len();
    let mut remainder = dividend;
    let mut quotient = vec![T::zero(); remainder.len() + 1 - divisor_len];
    let mut factor = T::one();
    let mut exponent = 0;
    while remainder.len() >= divisor_len {
        let power = remainder.len() - divisor_len;
        let remainder_last = remainder.pop().expect("remainder length already checked");
        let quotient_coefficient = match &reduction {
            Reduction::Scale(divisor_last) => {
                for element in remainder.iter_mut().chain(quotient.iter_mut()) {
                    *element *= *divisor_last;
                }
                factor *= *divisor_last;
                exponent += 1;
                remainder_last
            }
            Reduction::Invert(divisor_last_inverse) => remainder_last * divisor_last_inverse,
        };
        for (divisor_index, divisor_coefficient) in divisor[..divisor_len - 1].iter().enumerate() {
            remainder[power + divisor_index] -= &(quotient_coefficient.clone() * divisor_coefficient);
        }
        quotient[power] = quotient_coefficient;
        while let Some(true) = remainder.last().map(Zero::is_zero) {
            remainder.pop();
        }
    }
    PseudoDivRem {
        exponent,
        factor,
        quotient: quotient.into(),
        remainder: Polynomial {
            coefficients: remainder,
        },
    }
}

impl<T: PolynomialCoefficient> Polynomial<T> {
    /// Pseudo-division over a ring without division.
    ///
    /// Each step cancels the remainder's leading term after scaling the
    /// remainder by the divisor's leading coefficient, so the result
    /// satisfies `factor * self == quotient * rhs + remainder`, where
    /// `exponent` counts the steps taken. That is at most
    /// `self.len() - rhs.len() + 1`, and fewer when a step cancels more than
    /// one term.
    ///
    /// Dividing by the zero polynomial, or by a polynomial of greater degree,
    /// leaves `self` as the remainder with a zero quotient and `exponent == 0`.
    pub fn pseudo_div_rem(self, rhs: &Self) -> PseudoDivRem<T> {
        let divisor_last = match rhs.coefficients.last() {
            Some(divisor_last) if self.len() >= rhs.len() => divisor_last,
            _ => return PseudoDivRem::unchanged(self),
        };
        let retval = reduce(self.coefficients, &rhs.coefficients, Reduction::Scale(divisor_last));
        trace!(
            "pseudo_div_rem: exponent={} quotient_len={} remainder_len={}",
            retval.exponent,
            retval.quotient.len(),
            retval.remainder.len()
        );
        retval
    }
    /// Like [`pseudo_div_rem`](Self::pseudo_div_rem), except that when the
    /// divisor's leading coefficient is a unit no scaling happens at all:
    /// `exponent == 0`, `factor == 1` and `self == quotient * rhs + remainder`.
    ///
    /// This is ordinary division for coefficient fields and for monic
    /// divisors.
    pub fn scaled_div_rem(self, rhs: &Self) -> PseudoDivRem<T> {
        let divisor_last = match rhs.coefficients.last() {
            Some(divisor_last) if self.len() >= rhs.len() => divisor_last,
            _ => return PseudoDivRem::unchanged(self),
        };
        match divisor_last.unit_inverse() {
            Some(inverse) => reduce(self.coefficients, &rhs.coefficients, Reduction::Invert(inverse)),
            None => self.pseudo_div_rem(rhs),
        }
    }
    pub fn scaled_quotient(&self, rhs: &Self) -> Self {
        self.clone().scaled_div_rem(rhs).quotient
    }
    pub fn scaled_remainder(&self, rhs: &Self) -> Self {
        self.clone().scaled_div_rem(rhs).remainder
    }
    pub fn scale_exponent(&self, rhs: &Self) -> usize {
        self.clone().scaled_div_rem(rhs).exponent
    }
    /// returns `true` if `self` divides `rhs`, up to a scale factor.
    ///
    /// The zero polynomial divides only itself.
    pub fn divides(&self, rhs: &Self) -> bool {
        rhs.scaled_remainder(self).is_zero()
    }
    /// returns `true` if `self` and `rhs` divide each other, meaning they
    /// agree up to a constant factor.
    pub fn is_associate(&self, rhs: &Self) -> bool {
        self.divides(rhs) && rhs.divides(self)
    }
}

impl<T: PolynomialDivSupported> Polynomial<T> {
    /// exact division: `self == quotient * rhs + remainder`.
    ///
    /// Dividing by the zero polynomial returns a zero quotient and `self` as
    /// the remainder.
    pub fn div_rem(self, rhs: &Self) -> (Self, Self) {
        let PseudoDivRem {
            quotient,
            remainder,
            ..
        } = self.scaled_div_rem(rhs);
        (quotient, remainder)
    }
    pub fn checked_div_rem(self, rhs: &Self) -> Option<(Self, Self)> {
        if rhs.is_zero() {
            None
        } else {
            Some(self.div_rem(rhs))
        }
    }
    pub fn checked_powmod<E: Clone + Integer>(
        &self,
        mut exponent: E,
        modulus: &Self,
    ) -> Option<Self> {
        if exponent < Zero::zero() || modulus.is_zero() {
            return None;
        }
        if exponent.is_zero() {
            return Some(Self::one() % modulus);
        }
        let mut base = self % modulus;
        if exponent.is_one() {
            return Some(base);
        }
        let mut retval: Option<Self> = None;
        loop {
            if exponent.is_odd() {
                retval = Some(match retval.take() {
                    None => base.clone(),
                    Some(retval) => (retval * &base) % modulus,
                });
            }
            let two = E::one() + E::one();
            exponent = exponent / two;
            if exponent.is_zero() {
                break;
            }
            base = (&base * &base) % modulus;
        }
        retval
    }
    pub fn powmod<E: Clone + Integer>(&self, exponent: E, modulus: &Self) -> Self {
        self.checked_powmod(exponent, modulus)
            .expect("checked_powmod failed")
    }
}

impl<T: PolynomialDivSupported> CheckedDiv for Polynomial<T> {
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        Some(self.clone().checked_div_rem(rhs)?.0)
    }
}

impl<T: PolynomialDivSupported> CheckedRem for Polynomial<T> {
    fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        Some(self.clone().checked_div_rem(rhs)?.1)
    }
}

macro_rules! impl_div_rem {
    ($l:ty, $l_to_owned:expr, $r:ty) => {
        impl<T: PolynomialDivSupported> Div<$r> for $l {
            type Output = Polynomial<T>;
            fn div(self, rhs: $r) -> Polynomial<T> {
                $l_to_owned(self).div_rem(rhs.borrow()).0
            }
        }

        impl<T: PolynomialDivSupported> Rem<$r> for $l {
            type Output = Polynomial<T>;
            fn rem(self, rhs: $r) -> Polynomial<T> {
                $l_to_owned(self).div_rem(rhs.borrow()).1
            }
        }
    };
}

impl_div_rem!(Polynomial<T>, identity, Polynomial<T>);
impl_div_rem!(Polynomial<T>, identity, &'_ Polynomial<T>);
impl_div_rem!(&'_ Polynomial<T>, Clone::clone, Polynomial<T>);

impl<'a, 'b, T: PolynomialDivSupported> Div<&'a Polynomial<T>> for &'b Polynomial<T> {
    type Output = Polynomial<T>;
    fn div(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        self.clone().div_rem(rhs).0
    }
}

impl<'a, 'b, T: PolynomialDivSupported> Rem<&'a Polynomial<T>> for &'b Polynomial<T> {
    type Output = Polynomial<T>;
    fn rem(self, rhs: &Polynomial<T>) -> Polynomial<T> {
        self.clone().div_rem(rhs).1
    }
}

macro_rules! impl_div_rem_eq {
    ($r:ty) => {
        impl<T: PolynomialDivSupported> DivAssign<$r> for Polynomial<T> {
            fn div_assign(&mut self, rhs: $r) {
                let lhs = mem::replace(self, Zero::zero());
                *self = lhs / rhs;
            }
        }

        impl<T: PolynomialDivSupported> RemAssign<$r> for Polynomial<T> {
            fn rem_assign(&mut self, rhs: $r) {
                let lhs = mem::replace(self, Zero::zero());
                *self = lhs % rhs;
            }
        }
    };
}

impl_div_rem_eq!(Polynomial<T>);
impl_div_rem_eq!(&'_ Polynomial<T>);
