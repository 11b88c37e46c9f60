// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct GCDAndLCM<T> {
    pub gcd: T,
    pub lcm: T,
}

/// the gcd together with cofactors such that `gcd == x * lhs + y * rhs`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ExtendedGCDResult<T> {
    pub gcd: T,
    pub x: T,
    pub y: T,
}

pub trait GCD<Rhs = Self> {
    type Output;
    fn gcd(&self, rhs: &Rhs) -> Self::Output;
    fn lcm(&self, rhs: &Rhs) -> Self::Output {
        self.gcd_lcm(rhs).lcm
    }
    fn gcd_lcm(&self, rhs: &Rhs) -> GCDAndLCM<Self::Output>;
}

pub trait ExtendedGCD<Rhs = Self>: GCD<Rhs> {
    fn extended_gcd(&self, rhs: &Rhs) -> ExtendedGCDResult<Self::Output>;
}

pub trait PolynomialEval<T> {
    fn eval(self, x: &T) -> T;
}
