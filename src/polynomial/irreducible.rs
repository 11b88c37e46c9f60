// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    mod_int::{ModularInteger, PrimeModulus},
    polynomial::Polynomial,
    traits::GCD,
};
use log::trace;
use num_traits::One;

fn prime_factors(mut value: usize) -> Vec<usize> {
    let mut retval = Vec::new();
    let mut divisor = 2;
    while divisor * divisor <= value {
        if value % divisor == 0 {
            retval.push(divisor);
            while value % divisor == 0 {
                value /= divisor;
            }
        }
        divisor += 1;
    }
    if value > 1 {
        retval.push(value);
    }
    retval
}

impl<M: PrimeModulus> Polynomial<ModularInteger<M>> {
    /// Rabin's irreducibility test.
    ///
    /// Constants (including zero) are not irreducible and every polynomial
    /// of degree one is.
    pub fn is_irreducible(&self) -> bool {
        let degree = match self.degree() {
            None | Some(0) => return false,
            Some(1) => return true,
            Some(degree) => degree,
        };
        let monic = self.to_monic().expect("degree >= 2 so not zero");
        let x = Self::make_monomial(ModularInteger::one(), 1);
        let factors = prime_factors(degree);
        // powers[k] == pow(x, pow(p, k)) mod monic
        let mut power = &x % &monic;
        let mut powers = Vec::with_capacity(degree + 1);
        powers.push(power.clone());
        for _ in 0..degree {
            power = power.powmod(M::MODULUS, &monic);
            powers.push(power.clone());
        }
        if powers[degree] != powers[0] {
            trace!("is_irreducible: x^(p^{}) != x", degree);
            return false;
        }
        factors.into_iter().all(|factor| {
            let power = &powers[degree / factor];
            (power - &x).gcd(&monic).is_one()
        })
    }
}
