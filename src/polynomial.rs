// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::traits::PolynomialEval;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{zero, One, Zero};
use std::{
    error::Error,
    fmt,
    iter::{self, FromIterator},
    ops::{AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign},
    slice, vec,
};

mod add_sub;
mod coprime;
mod div_rem;
mod gcd;
mod irreducible;
mod mul;
mod roots;

pub use div_rem::PseudoDivRem;

/// coefficients that polynomial arithmetic and pseudo-division work over.
///
/// This is the ring-like capability: no division is required, so
/// [`Polynomial::pseudo_div_rem`] scales the dividend by powers of the
/// divisor's leading coefficient instead.
pub trait PolynomialCoefficient:
    Clone
    + Eq
    + fmt::Debug
    + Zero
    + One
    + Neg<Output = Self>
    + Sub<Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
{
    /// returns the multiplicative inverse of `self` if `self` is a unit of the
    /// coefficient ring, otherwise `None`.
    fn unit_inverse(&self) -> Option<Self>;
    fn is_unit(&self) -> bool {
        self.unit_inverse().is_some()
    }
    fn coefficient_pow_usize(base: Self, exponent: usize) -> Self {
        num_traits::pow(base, exponent)
    }
    /// divides every coefficient in `groups` by their common content and
    /// returns it, or returns `None` if nothing was divided out.
    ///
    /// Rings without a useful gcd leave the coefficients as they are.
    fn divide_out_content(_groups: &mut [&mut [Self]]) -> Option<Self> {
        None
    }
}

/// coefficients that form a field: every non-zero coefficient is a unit.
pub trait PolynomialDivSupported:
    PolynomialCoefficient + for<'a> Div<&'a Self, Output = Self>
{
}

fn divide_out_integer_content<T: Integer + Clone>(groups: &mut [&mut [T]]) -> Option<T> {
    let mut content = T::zero();
    for group in groups.iter() {
        for coefficient in group.iter() {
            content = content.gcd(coefficient);
            if content.is_one() {
                return None;
            }
        }
    }
    if content.is_zero() {
        return None;
    }
    for group in groups.iter_mut() {
        for coefficient in group.iter_mut() {
            *coefficient = coefficient.clone() / content.clone();
        }
    }
    Some(content)
}

macro_rules! impl_integer_coefficient {
    ($($t:ty),*) => {
        $(
            impl PolynomialCoefficient for $t {
                fn unit_inverse(&self) -> Option<Self> {
                    if self.is_one() || *self == -<$t>::one() {
                        Some(*self)
                    } else {
                        None
                    }
                }
                fn divide_out_content(groups: &mut [&mut [Self]]) -> Option<Self> {
                    // the content of values in `{0, MIN}` isn't representable
                    if groups.iter().any(|group| group.contains(&<$t>::MIN)) {
                        return None;
                    }
                    divide_out_integer_content(groups)
                }
            }
        )*
    };
}

impl_integer_coefficient!(i8, i16, i32, i64, i128, isize);

impl PolynomialCoefficient for BigInt {
    fn unit_inverse(&self) -> Option<Self> {
        if self.is_one() || *self == -BigInt::one() {
            Some(self.clone())
        } else {
            None
        }
    }
    fn divide_out_content(groups: &mut [&mut [Self]]) -> Option<Self> {
        divide_out_integer_content(groups)
    }
}

macro_rules! impl_ratio_coefficient {
    ($($t:ty),*) => {
        $(
            impl PolynomialCoefficient for Ratio<$t> {
                fn unit_inverse(&self) -> Option<Self> {
                    if self.is_zero() {
                        None
                    } else {
                        Some(self.recip())
                    }
                }
            }

            impl PolynomialDivSupported for Ratio<$t> {}
        )*
    };
}

impl_ratio_coefficient!(i32, i64, i128, BigInt);

/// A single-variable polynomial.
///
/// the term at index `n` is `self.coefficients()[n] * pow(x, n)`
///
/// # Invariants
///
/// `self.coefficients().last()` is either `None` or `Some(v)` where `!v.is_zero()`
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Polynomial<T> {
    coefficients: Vec<T>,
}

impl<T> Default for Polynomial<T> {
    fn default() -> Self {
        Self {
            coefficients: Vec::default(),
        }
    }
}

impl<T: Zero> From<Vec<T>> for Polynomial<T> {
    fn from(coefficients: Vec<T>) -> Self {
        let mut retval = Self { coefficients };
        retval.remove_extra_zeros();
        retval
    }
}

impl<T: Zero> From<T> for Polynomial<T> {
    fn from(coefficient: T) -> Self {
        vec![coefficient].into()
    }
}

impl<T: Zero> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<T>>().into()
    }
}

impl<T> Polynomial<T> {
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.coefficients.iter()
    }
    /// the number of coefficients, `degree + 1` for non-zero polynomials and
    /// `0` for the zero polynomial.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
    /// returns `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }
    pub fn is_constant(&self) -> bool {
        self.len() <= 1
    }
    pub(crate) fn remove_extra_zeros(&mut self)
    where
        T: Zero,
    {
        while let Some(tail) = self.coefficients.last() {
            if tail.is_zero() {
                self.coefficients.pop();
            } else {
                break;
            }
        }
    }
    pub fn nonzero_highest_power_coefficient(&self) -> Option<T>
    where
        T: Clone,
    {
        self.coefficients.last().cloned()
    }
    /// the leading coefficient, or zero for the zero polynomial
    pub fn highest_power_coefficient(&self) -> T
    where
        T: Clone + Zero,
    {
        self.nonzero_highest_power_coefficient()
            .unwrap_or_else(zero)
    }
    pub fn is_monic(&self) -> bool
    where
        T: One + PartialEq,
    {
        self.coefficients.last().map_or(false, One::is_one)
    }
    pub fn make_monomial(coefficient: T, power: usize) -> Self
    where
        T: Zero,
    {
        iter::repeat_with(T::zero)
            .take(power)
            .chain(iter::once(coefficient))
            .collect()
    }
    /// returns `x - root`
    pub fn linear_root_factor(root: T) -> Self
    where
        T: Zero + One + Neg<Output = T>,
    {
        vec![-root, T::one()].into()
    }
}

impl<T: PolynomialDivSupported> Polynomial<T> {
    /// divides every coefficient by the leading coefficient
    pub fn to_monic(&self) -> Result<Self, PolynomialIsZero> {
        let divisor = self
            .nonzero_highest_power_coefficient()
            .ok_or(PolynomialIsZero)?;
        Ok(self
            .iter()
            .map(|coefficient| coefficient.clone() / &divisor)
            .collect())
    }
}

impl<T: PolynomialCoefficient> Polynomial<T> {
    /// divides out the content of the coefficients, returning it.
    ///
    /// The result is an associate of `self`.
    pub(crate) fn divide_out_content(&mut self) -> Option<T> {
        T::divide_out_content(&mut [&mut self.coefficients[..]])
    }
}

impl<'a, T: PolynomialCoefficient> PolynomialEval<T> for &'a Polynomial<T> {
    fn eval(self, x: &T) -> T {
        let mut iter = self.iter().rev();
        if let Some(last) = iter.next() {
            let mut retval = last.clone();
            for coefficient in iter {
                retval *= x;
                retval += coefficient;
            }
            retval
        } else {
            zero()
        }
    }
}

impl<T: PolynomialCoefficient> PolynomialEval<T> for Polynomial<T> {
    fn eval(self, x: &T) -> T {
        PolynomialEval::eval(&self, x)
    }
}

impl<T> IntoIterator for Polynomial<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coefficients.is_empty() {
            write!(f, "0")
        } else {
            for (power, coefficient) in self.coefficients.iter().enumerate() {
                match power {
                    0 => write!(f, "{}", coefficient)?,
                    1 => write!(f, " + {}*x", coefficient)?,
                    _ => write!(f, " + {}*x^{}", coefficient, power)?,
                }
            }
            Ok(())
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PolynomialIsZero;

impl fmt::Display for PolynomialIsZero {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "polynomial is zero")
    }
}

impl Error for PolynomialIsZero {}

impl From<PolynomialIsZero> for std::io::Error {
    fn from(err: PolynomialIsZero) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, err)
    }
}
