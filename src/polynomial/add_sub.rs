// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::{Polynomial, PolynomialCoefficient};
use num_traits::Zero;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

fn add_sub_assign<T: PolynomialCoefficient, AddSubAssign: Fn(&mut T, &T)>(
    lhs: &mut Polynomial<T>,
    rhs: &Polynomial<T>,
    add_sub_assign: AddSubAssign,
) {
    while lhs.len() < rhs.len() {
        lhs.coefficients.push(T::zero());
    }
    for (lhs_coefficient, rhs_coefficient) in lhs.coefficients.iter_mut().zip(rhs.iter()) {
        add_sub_assign(lhs_coefficient, rhs_coefficient);
    }
    lhs.remove_extra_zeros();
}

impl<T: PolynomialCoefficient> AddAssign for Polynomial<T> {
    fn add_assign(&mut self, rhs: Polynomial<T>) {
        add_sub_assign(self, &rhs, |l, r| *l += r);
    }
}

impl<'a, T: PolynomialCoefficient> AddAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &'a Polynomial<T>) {
        add_sub_assign(self, rhs, |l, r| *l += r);
    }
}

impl<T: PolynomialCoefficient> Add for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(mut self, rhs: Polynomial<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T: PolynomialCoefficient> Add<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(mut self, rhs: &'a Polynomial<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T: PolynomialCoefficient> Add<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, mut rhs: Polynomial<T>) -> Self::Output {
        rhs += self;
        rhs
    }
}

impl<'a, 'b, T: PolynomialCoefficient> Add<&'a Polynomial<T>> for &'b Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: &'a Polynomial<T>) -> Self::Output {
        let mut retval = self.clone();
        retval += rhs;
        retval
    }
}

impl<T: PolynomialCoefficient> Zero for Polynomial<T> {
    fn zero() -> Self {
        Default::default()
    }
    fn set_zero(&mut self) {
        self.coefficients.clear()
    }
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: PolynomialCoefficient> SubAssign for Polynomial<T> {
    fn sub_assign(&mut self, rhs: Polynomial<T>) {
        add_sub_assign(self, &rhs, |l, r| *l -= r);
    }
}

impl<'a, T: PolynomialCoefficient> SubAssign<&'a Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: &'a Polynomial<T>) {
        add_sub_assign(self, rhs, |l, r| *l -= r);
    }
}

impl<T: PolynomialCoefficient> Sub for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(mut self, rhs: Polynomial<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, T: PolynomialCoefficient> Sub<&'a Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(mut self, rhs: &'a Polynomial<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, T: PolynomialCoefficient> Sub<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: Polynomial<T>) -> Self::Output {
        let mut lhs = self.clone();
        lhs -= rhs;
        lhs
    }
}

impl<'a, 'b, T: PolynomialCoefficient> Sub<&'a Polynomial<T>> for &'b Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: &'a Polynomial<T>) -> Self::Output {
        let mut lhs = self.clone();
        lhs -= rhs;
        lhs
    }
}

impl<T: PolynomialCoefficient> Neg for Polynomial<T> {
    type Output = Polynomial<T>;
    fn neg(self) -> Polynomial<T> {
        // negation can't introduce trailing zeros
        Polynomial {
            coefficients: self.into_iter().map(Neg::neg).collect(),
        }
    }
}

impl<T: PolynomialCoefficient> Neg for &'_ Polynomial<T> {
    type Output = Polynomial<T>;
    fn neg(self) -> Polynomial<T> {
        Polynomial {
            coefficients: self.iter().cloned().map(Neg::neg).collect(),
        }
    }
}
