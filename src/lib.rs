// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Polynomial pseudo-division and the machinery built on it: gcd, lcm,
//! Bezout cofactors, coprimality, root multiplicity and irreducibility over
//! prime fields.
//!
//! Coefficients are generic: anything implementing
//! [`PolynomialCoefficient`](polynomial::PolynomialCoefficient) gets the
//! scaled (pseudo-) division algorithms, and coefficient fields implementing
//! [`PolynomialDivSupported`](polynomial::PolynomialDivSupported) also get
//! exact division and normalized gcds.

pub mod mod_int;
pub mod polynomial;
pub mod prelude;
pub mod traits;
mod util;
