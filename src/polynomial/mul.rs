// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::{Polynomial, PolynomialCoefficient};
use num_traits::{One, Zero};
use std::ops::{Mul, MulAssign};

impl<'a, 'b, T: PolynomialCoefficient> Mul<&'a Polynomial<T>> for &'b Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        if self.is_zero() || rhs.is_zero() {
            return Zero::zero();
        }
        let mut coefficients = vec![T::zero(); self.len() + rhs.len() - 1];
        for (l_index, l_coefficient) in self.iter().enumerate() {
            if l_coefficient.is_zero() {
                continue;
            }
            for (r_index, r_coefficient) in rhs.iter().enumerate() {
                coefficients[l_index + r_index] += &(l_coefficient.clone() * r_coefficient);
            }
        }
        // the leading product may vanish when the coefficients have zero divisors
        coefficients.into()
    }
}

impl<'a, T: PolynomialCoefficient> Mul<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        self * &rhs
    }
}

impl<'a, T: PolynomialCoefficient> Mul<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        &self * rhs
    }
}

impl<T: PolynomialCoefficient> Mul for Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: Polynomial<T>) -> Polynomial<T> {
        &self * &rhs
    }
}

impl<T: PolynomialCoefficient> MulAssign for Polynomial<T> {
    fn mul_assign(&mut self, rhs: Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<'a, T: PolynomialCoefficient> MulAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &'a Polynomial<T>) {
        *self = &*self * rhs;
    }
}

impl<T: PolynomialCoefficient> One for Polynomial<T> {
    fn one() -> Self {
        Self {
            coefficients: vec![One::one()],
        }
    }
    fn is_one(&self) -> bool {
        match &*self.coefficients {
            [coefficient] => coefficient.is_one(),
            _ => false,
        }
    }
}

impl<T: PolynomialCoefficient> Polynomial<T> {
    pub fn mul_by_coefficient(&self, rhs: &T) -> Self {
        let mut retval = self.clone();
        retval.mul_assign_by_coefficient(rhs);
        retval
    }
    pub fn mul_assign_by_coefficient(&mut self, rhs: &T) {
        for coefficient in &mut self.coefficients {
            *coefficient *= rhs;
        }
        self.remove_extra_zeros();
    }
    pub fn pow_usize(&self, exponent: usize) -> Self {
        num_traits::pow(self.clone(), exponent)
    }
}
