// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{
    polynomial::{Polynomial, PolynomialCoefficient, PolynomialIsZero},
    traits::PolynomialEval,
};
use log::trace;
use num_traits::Zero;

impl<T: PolynomialCoefficient> Polynomial<T> {
    pub fn is_root(&self, x: &T) -> bool {
        self.eval(x).is_zero()
    }
    /// divides by `X - x` using synthetic division.
    ///
    /// Exact over any coefficient ring since the divisor is monic:
    /// `self == quotient * (X - x) + remainder` where `remainder == self.eval(x)`.
    pub fn div_rem_linear(&self, x: &T) -> (Self, T) {
        let mut quotient = Vec::with_capacity(self.len().saturating_sub(1));
        let mut accumulator = T::zero();
        for coefficient in self.iter().rev() {
            accumulator *= x;
            accumulator += coefficient;
            quotient.push(accumulator.clone());
        }
        // the last value pushed is the remainder
        let remainder = quotient.pop().unwrap_or_else(T::zero);
        quotient.reverse();
        (quotient.into(), remainder)
    }
    /// returns the largest `n` such that `pow(X - x, n)` divides `self`.
    ///
    /// The zero polynomial is divisible by every power, so it has no finite
    /// multiplicity.
    pub fn root_multiplicity(&self, x: &T) -> Result<usize, PolynomialIsZero> {
        if self.is_zero() {
            return Err(PolynomialIsZero);
        }
        let mut multiplicity = 0;
        let mut remaining = self.clone();
        loop {
            let (quotient, remainder) = remaining.div_rem_linear(x);
            if !remainder.is_zero() {
                break;
            }
            multiplicity += 1;
            remaining = quotient;
        }
        trace!("root_multiplicity: {}", multiplicity);
        Ok(multiplicity)
    }
}
