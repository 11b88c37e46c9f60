// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{
    polynomial::{Polynomial, PolynomialCoefficient, PolynomialDivSupported, PseudoDivRem},
    traits::{ExtendedGCD, ExtendedGCDResult, GCDAndLCM, GCD},
};
use log::{debug, trace};
use num_traits::{One, Zero};
use std::mem;

impl<T: PolynomialCoefficient> Polynomial<T> {
    /// returns a greatest common divisor of `self` and `rhs`, unique only up
    /// to multiplication by a non-zero constant.
    ///
    /// Runs the remainder sequence using [`scaled_div_rem`](Self::scaled_div_rem),
    /// so no fractions are ever introduced. Each remainder has its content
    /// divided out, keeping integer coefficients small.
    pub fn pseudo_gcd(&self, rhs: &Self) -> Self {
        let (mut lhs, mut rhs) = if self.len() < rhs.len() {
            (rhs.clone(), self.clone())
        } else {
            (self.clone(), rhs.clone())
        };
        // now lhs.len() >= rhs.len()
        if rhs.is_zero() {
            return lhs;
        }
        for step in 0..=lhs.len() {
            let mut remainder = lhs.scaled_remainder(&rhs);
            remainder.divide_out_content();
            trace!("pseudo_gcd: step={} remainder_len={}", step, remainder.len());
            if remainder.is_zero() {
                debug!("pseudo_gcd: degree={:?} after {} steps", rhs.degree(), step + 1);
                return rhs;
            }
            lhs = mem::replace(&mut rhs, remainder);
        }
        unreachable!("remainder sequence must shrink on every step")
    }
    /// returns a least common multiple of `self` and `rhs`, unique only up
    /// to multiplication by a non-zero constant.
    pub fn pseudo_lcm(&self, rhs: &Self) -> Self {
        let gcd = self.pseudo_gcd(rhs);
        let mut retval = (self * rhs).scaled_quotient(&gcd);
        retval.divide_out_content();
        retval
    }
    /// returns `(u, v)` such that `u * self + v * rhs` is a greatest common
    /// divisor of `self` and `rhs` (up to a non-zero constant).
    ///
    /// For non-zero inputs, `u.len() <= rhs.len()` and `v.len() <= self.len()`.
    pub fn bezout_coefficients(&self, rhs: &Self) -> (Self, Self) {
        if rhs.len() > self.len() {
            let (v, u) = rhs.bezout_coefficients(self);
            return (u, v);
        }
        let mut steps = Vec::new();
        let mut lhs = self.clone();
        let mut rhs = rhs.clone();
        for _ in 0..rhs.len() {
            if rhs.is_zero() {
                break;
            }
            let PseudoDivRem {
                factor,
                quotient,
                mut remainder,
                ..
            } = lhs.scaled_div_rem(&rhs);
            let content = remainder.divide_out_content();
            steps.push((factor, quotient, content));
            lhs = mem::replace(&mut rhs, remainder);
        }
        trace!("bezout_coefficients: {} division steps", steps.len());
        let mut u = Self::one();
        let mut v = Self::zero();
        for (factor, quotient, content) in steps.into_iter().rev() {
            // the next remainder was divided by `content`
            if let Some(content) = content {
                u.mul_assign_by_coefficient(&content);
            }
            let next_v = u - &v * quotient;
            u = v.mul_by_coefficient(&factor);
            v = next_v;
            T::divide_out_content(&mut [&mut u.coefficients[..], &mut v.coefficients[..]]);
        }
        debug!(
            "bezout_coefficients: u_len={} v_len={}",
            u.len(),
            v.len()
        );
        (u, v)
    }
}

impl<T: PolynomialDivSupported> GCD for Polynomial<T> {
    type Output = Self;
    /// the monic gcd, or zero when both inputs are zero
    fn gcd(&self, rhs: &Self) -> Self {
        self.pseudo_gcd(rhs)
            .to_monic()
            .unwrap_or_else(|_| Zero::zero())
    }
    fn gcd_lcm(&self, rhs: &Self) -> GCDAndLCM<Self> {
        let gcd = self.gcd(rhs);
        let lcm = if gcd.is_zero() {
            Zero::zero()
        } else {
            self * (rhs / &gcd)
        };
        GCDAndLCM { gcd, lcm }
    }
}

impl<T: PolynomialDivSupported> ExtendedGCD for Polynomial<T> {
    fn extended_gcd(&self, rhs: &Self) -> ExtendedGCDResult<Self> {
        let (x, y) = self.bezout_coefficients(rhs);
        let gcd = &x * self + &y * rhs;
        let lead = match gcd.nonzero_highest_power_coefficient() {
            Some(lead) => lead,
            None => return ExtendedGCDResult { gcd, x, y },
        };
        let inverse = T::one() / &lead;
        ExtendedGCDResult {
            gcd: gcd.mul_by_coefficient(&inverse),
            x: x.mul_by_coefficient(&inverse),
            y: y.mul_by_coefficient(&inverse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mod_int::{ModularInteger, P7},
        traits::PolynomialEval,
        util::tests::random_polynomial,
    };
    use num_bigint::BigInt;
    use num_rational::Ratio;
    use num_traits::ToPrimitive;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn test_gcd() {
        let r = |n: i64, d: i64| Ratio::<BigInt>::new(n.into(), d.into());
        let ri = |v: i64| Ratio::<BigInt>::from_integer(v.into());
        fn test_case(
            a: Polynomial<Ratio<BigInt>>,
            b: Polynomial<Ratio<BigInt>>,
            gcd: Polynomial<Ratio<BigInt>>,
            lcm: Polynomial<Ratio<BigInt>>,
        ) {
            let results = a.gcd_lcm(&b);
            let extended_results = a.extended_gcd(&b);
            println!("a=({})  b=({})", a, b);
            println!("gcd=({})  lcm=({})", gcd, lcm);
            println!(
                "results.gcd=({})  results.lcm=({})",
                results.gcd, results.lcm
            );
            println!(
                "extended_results.x=({})  extended_results.y=({})",
                extended_results.x, extended_results.y
            );
            // don't use assert_eq because the debug output is awful
            assert!(gcd == results.gcd);
            assert!(lcm == results.lcm);
            assert!(gcd == a.gcd(&b));
            assert!(lcm == a.lcm(&b));
            assert!(gcd == extended_results.gcd);
            assert!(gcd == &extended_results.x * &a + &extended_results.y * &b);
            assert!(a.pseudo_gcd(&b).is_associate(&gcd));
        }
        test_case(
            vec![ri(2), ri(0), ri(0), ri(2)].into(),
            vec![ri(0), r(1, 3), r(1, 3), r(1, 3)].into(),
            ri(1).into(),
            vec![ri(0), r(2, 3), r(2, 3), r(2, 3), r(2, 3), r(2, 3), r(2, 3)].into(),
        );
        test_case(
            r(1, 3).into(),
            vec![r(1, 3), ri(0), r(1, 3)].into(),
            ri(1).into(),
            vec![r(1, 9), ri(0), r(1, 9)].into(),
        );
        test_case(
            vec![ri(0), ri(0), ri(1), ri(1)].into(),
            vec![ri(0), ri(0), r(1, 3), r(1, 3)].into(),
            vec![ri(0), ri(0), ri(1), ri(1)].into(),
            vec![ri(0), ri(0), r(1, 3), r(1, 3)].into(),
        );
        test_case(
            vec![ri(0), ri(1), ri(2)].into(),
            vec![ri(0), r(1, 2), ri(0), ri(1)].into(),
            vec![ri(0), ri(1)].into(),
            vec![ri(0), r(1, 2), ri(1), ri(1), ri(2)].into(),
        );
        test_case(
            Zero::zero(),
            vec![ri(0), ri(0), ri(2), ri(2)].into(),
            vec![ri(0), ri(0), ri(1), ri(1)].into(),
            Zero::zero(),
        );
        test_case(
            vec![r(1, 2), ri(1), ri(1)].into(),
            vec![ri(1), ri(0), ri(1), ri(1)].into(),
            ri(1).into(),
            vec![r(1, 2), ri(1), r(3, 2), r(3, 2), ri(2), ri(1)].into(),
        );
        test_case(
            vec![r(2, 3), ri(0), r(2, 3), r(2, 3)].into(),
            vec![r(1, 2), ri(0), r(1, 2), r(1, 2)].into(),
            vec![ri(1), ri(0), ri(1), ri(1)].into(),
            vec![r(1, 3), ri(0), r(1, 3), r(1, 3)].into(),
        );
        test_case(
            vec![r(2, 3), r(2, 3), r(2, 3)].into(),
            vec![r(2, 3), r(2, 3), r(2, 3)].into(),
            vec![ri(1), ri(1), ri(1)].into(),
            vec![r(4, 9), r(4, 9), r(4, 9)].into(),
        );
        test_case(
            vec![ri(0), ri(1), ri(1), ri(2)].into(),
            vec![ri(0), r(2, 3)].into(),
            vec![ri(0), ri(1)].into(),
            vec![ri(0), r(2, 3), r(2, 3), r(4, 3)].into(),
        );
        test_case(
            vec![ri(0), r(1, 3), r(1, 3)].into(),
            vec![ri(1), ri(1), ri(1), ri(1)].into(),
            vec![ri(1), ri(1)].into(),
            vec![ri(0), r(1, 3), r(1, 3), r(1, 3), r(1, 3)].into(),
        );
        test_case(
            vec![ri(0), ri(0), ri(2), ri(1)].into(),
            vec![ri(1), ri(2)].into(),
            ri(1).into(),
            vec![ri(0), ri(0), ri(2), ri(5), ri(2)].into(),
        );
        test_case(
            Zero::zero(),
            vec![ri(1), ri(0), ri(1), r(1, 2)].into(),
            vec![ri(2), ri(0), ri(2), ri(1)].into(),
            Zero::zero(),
        );
        test_case(
            vec![ri(1), ri(0), ri(0), ri(1)].into(),
            vec![ri(1), ri(0), ri(1)].into(),
            ri(1).into(),
            vec![ri(1), ri(0), ri(1), ri(1), ri(0), ri(1)].into(),
        );
        test_case(Zero::zero(), Zero::zero(), Zero::zero(), Zero::zero());
    }

    #[test]
    fn test_pseudo_gcd_over_integers() {
        let p = Polynomial::from(vec![-1i64, 0, 1]);
        let q = Polynomial::from(vec![-1i64, 1]);
        let gcd = p.pseudo_gcd(&q);
        assert_eq!(gcd.degree(), Some(1));
        assert_eq!((&gcd).eval(&1), 0);
        assert_eq!(q.pseudo_gcd(&p), gcd);
        assert_eq!(p.pseudo_gcd(&Zero::zero()), p);
        assert_eq!(Polynomial::zero().pseudo_gcd(&q), q);
        assert!(Polynomial::<i64>::zero().pseudo_gcd(&Zero::zero()).is_zero());

        // x^2 + 1 and 2x + 3 share no factor, so the gcd is a constant
        let p = Polynomial::from(vec![1i64, 0, 1]);
        let q = Polynomial::from(vec![3i64, 2]);
        assert_eq!(p.pseudo_gcd(&q).degree(), Some(0));

        let lcm = Polynomial::from(vec![-1i64, 0, 1]).pseudo_lcm(&Polynomial::from(vec![1i64, 1]));
        assert!(lcm.is_associate(&vec![-1i64, 0, 1].into()));
        assert!(Polynomial::<i64>::zero().pseudo_lcm(&q).is_zero());
    }

    #[test]
    fn test_bezout_coefficients_edge_cases() {
        let p = Polynomial::from(vec![1i64, 2, 3]);
        assert_eq!(
            p.bezout_coefficients(&Zero::zero()),
            (One::one(), Zero::zero())
        );
        assert_eq!(
            Polynomial::zero().bezout_coefficients(&p),
            (Zero::zero(), One::one())
        );
        let (u, v) = p.bezout_coefficients(&5.into());
        assert!(u.is_zero());
        assert_eq!(v, One::one());
    }

    #[test]
    fn test_random_gcd_properties() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x6cd);
        for _ in 0..40 {
            let a_len = rng.gen_range(1..5);
            let b_len = rng.gen_range(1..5);
            let c_len = rng.gen_range(1..4);
            let a: Polynomial<BigInt> = random_polynomial(&mut rng, a_len, 10);
            let b: Polynomial<BigInt> = random_polynomial(&mut rng, b_len, 10);
            let common: Polynomial<BigInt> = random_polynomial(&mut rng, c_len, 10);
            let p = &a * &common;
            let q = &b * &common;
            let gcd = p.pseudo_gcd(&q);
            assert!(gcd.divides(&p));
            assert!(gcd.divides(&q));
            assert!(common.divides(&gcd));
            let lcm = p.pseudo_lcm(&q);
            assert!(p.divides(&lcm));
            assert!(q.divides(&lcm));

            let (u, v) = p.bezout_coefficients(&q);
            assert!(u.len() <= q.len());
            assert!(v.len() <= p.len());
            assert!((&u * &p + &v * &q).is_associate(&gcd));
        }
    }

    fn to_big_int(poly: &Polynomial<i64>) -> Polynomial<BigInt> {
        poly.iter().map(|&coefficient| coefficient.into()).collect()
    }

    fn random_i64_polynomial<R: Rng>(rng: &mut R, max_len: usize) -> Polynomial<i64> {
        let len = rng.gen_range(1..=max_len);
        let poly: Polynomial<BigInt> = random_polynomial(rng, len, 5);
        poly.iter()
            .map(|coefficient| coefficient.to_i64().expect("bounded coefficient"))
            .collect()
    }

    #[test]
    fn test_random_gcd_over_i64() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x164);
        for _ in 0..100 {
            let a = random_i64_polynomial(&mut rng, 4);
            let b = random_i64_polynomial(&mut rng, 4);
            let common = random_i64_polynomial(&mut rng, 2);
            for (p, q) in vec![(&a * &common, &b * &common), (a, b)] {
                let big_p = to_big_int(&p);
                let big_q = to_big_int(&q);
                let gcd = to_big_int(&p.pseudo_gcd(&q));
                assert!(gcd.is_associate(&big_p.pseudo_gcd(&big_q)));
                assert!(gcd.divides(&big_p));
                assert!(gcd.divides(&big_q));

                let (u, v) = p.bezout_coefficients(&q);
                assert!(u.len() <= q.len());
                assert!(v.len() <= p.len());
                let combination = to_big_int(&u) * &big_p + to_big_int(&v) * &big_q;
                assert!(combination.is_associate(&gcd));

                let part = to_big_int(&p.coprime_part(&q));
                assert!(part.divides(&big_p));
                assert!(part.is_coprime(&big_q));
            }
        }
    }

    #[test]
    fn test_extended_gcd_modular() {
        let modular = |values: &[i64]| -> Polynomial<ModularInteger<P7>> {
            values.iter().map(|&v| ModularInteger::new(v)).collect()
        };
        // (x + 1)(x + 2) and (x + 1)(x + 3)
        let p = modular(&[2, 3, 1]);
        let q = modular(&[3, 4, 1]);
        let ExtendedGCDResult { gcd, x, y } = p.extended_gcd(&q);
        assert_eq!(gcd, modular(&[1, 1]));
        assert_eq!(&x * &p + &y * &q, gcd);
        assert_eq!(p.lcm(&q), modular(&[6, 11, 6, 1]));
        let ExtendedGCDResult { gcd, x, y } = modular(&[]).extended_gcd(&modular(&[]));
        assert!(gcd.is_zero());
        assert_eq!(x, modular(&[1]));
        assert!(y.is_zero());
    }
}
