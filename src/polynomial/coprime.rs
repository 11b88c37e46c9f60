// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::polynomial::{Polynomial, PolynomialCoefficient};
use log::debug;
use num_traits::{One, Zero};

impl<T: PolynomialCoefficient> Polynomial<T> {
    /// returns `true` if the only common divisors of `self` and `rhs` are
    /// non-zero constants.
    pub fn is_coprime(&self, rhs: &Self) -> bool {
        self.pseudo_gcd(rhs).len() == 1
    }
    /// returns the greatest divisor of `self` that is coprime to `rhs`,
    /// unique only up to multiplication by a non-zero constant.
    ///
    /// When `self` is zero the result is one if `rhs` is zero too, and zero
    /// otherwise.
    pub fn coprime_part(&self, rhs: &Self) -> Self {
        let mut retval = self.clone();
        for _ in 0..self.len() {
            let gcd = retval.pseudo_gcd(rhs);
            if gcd.len() == 1 {
                debug!("coprime_part: degree={:?}", retval.degree());
                return retval;
            }
            retval = retval.scaled_quotient(&gcd);
            retval.divide_out_content();
        }
        if rhs.is_zero() {
            One::one()
        } else {
            Zero::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::tests::random_polynomial;
    use num_bigint::BigInt;
    use num_rational::Ratio;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn test_is_coprime() {
        let p = Polynomial::from(vec![1i64, 0, 1]);
        assert!(p.is_coprime(&vec![3, 2].into()));
        assert!(p.is_coprime(&vec![7].into()));
        assert!(!p.is_coprime(&p.mul_by_coefficient(&2)));
        assert!(!Polynomial::from(vec![-1i64, 0, 1]).is_coprime(&vec![1, 1].into()));
        // zero is divisible by everything
        assert!(!p.is_coprime(&Zero::zero()));
        assert!(Polynomial::from(vec![5i64]).is_coprime(&Zero::zero()));
        assert!(!Polynomial::<i64>::zero().is_coprime(&Zero::zero()));
    }

    #[test]
    fn test_coprime_part() {
        // (x - 1)^2 * (x + 2) with respect to (x - 1)(x + 5)
        let p = Polynomial::from(vec![2i64, -3, 0, 1]);
        let q = Polynomial::from(vec![-5i64, 4, 1]);
        let part = p.coprime_part(&q);
        assert_eq!(part, vec![-2, -1].into());
        assert!(part.is_associate(&vec![2, 1].into()));
        assert!(part.divides(&p));
        assert!(part.is_coprime(&q));

        let p = Polynomial::from(vec![1i64, 0, 1]);
        assert_eq!(p.coprime_part(&vec![3, 2].into()), p);
        assert!(p.coprime_part(&p).is_constant());
        assert_eq!(p.coprime_part(&Zero::zero()).len(), 1);

        assert_eq!(
            Polynomial::<i64>::zero().coprime_part(&Zero::zero()),
            One::one()
        );
        assert!(Polynomial::<i64>::zero()
            .coprime_part(&vec![1, 1].into())
            .is_zero());
    }

    #[test]
    fn test_coprime_part_rational() {
        let r = |n: i64, d: i64| Ratio::<BigInt>::new(n.into(), d.into());
        // (x - 1/2)^3 * x with respect to (2x - 1)
        let factor = Polynomial::linear_root_factor(r(1, 2));
        let p = factor.pow_usize(3) * Polynomial::make_monomial(r(1, 1), 1);
        let q = Polynomial::from(vec![r(-1, 1), r(2, 1)]);
        let part = p.coprime_part(&q);
        assert!(part.is_associate(&Polynomial::make_monomial(r(1, 1), 1)));
    }

    #[test]
    fn test_coprime_matches_bezout() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xc0);
        for _ in 0..40 {
            let p_len = rng.gen_range(1..5);
            let q_len = rng.gen_range(1..5);
            let p: Polynomial<BigInt> = random_polynomial(&mut rng, p_len, 4);
            let q: Polynomial<BigInt> = random_polynomial(&mut rng, q_len, 4);
            let (u, v) = p.bezout_coefficients(&q);
            let combination = &u * &p + &v * &q;
            assert_eq!(p.is_coprime(&q), combination.len() == 1);
            let part = p.coprime_part(&q);
            assert!(part.divides(&p));
            assert!(part.is_coprime(&q));
        }
    }
}
