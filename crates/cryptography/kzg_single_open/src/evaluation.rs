//! Evaluation of a polynomial given by its values on the roots of unity.
//!
//! All functions here take the polynomial in natural order, i.e.
//! `polynomial[i] = f(ω^i)`.

use bls12_381::{batch_inversion::batch_inverse, ff::Field, Scalar};
use itertools::izip;
use polynomial::domain::Domain;

/// Returns `1 / (z - ω^i)` for every root of the domain.
///
/// `z` must not be a root of unity of the domain.
pub(crate) fn inverse_distances(domain: &Domain, z: Scalar) -> Vec<Scalar> {
    let mut distances: Vec<Scalar> = domain.roots.iter().map(|root| z - root).collect();
    batch_inverse(&mut distances);
    distances
}

/// Barycentric formula for a point outside the domain:
///
/// f(z) = (z^n - 1) / n * Σ f(ω^i) * ω^i / (z - ω^i)
pub(crate) fn barycentric_evaluation(
    domain: &Domain,
    polynomial: &[Scalar],
    z: Scalar,
    inverse_distances: &[Scalar],
) -> Scalar {
    let sum: Scalar = izip!(&domain.roots, polynomial, inverse_distances)
        .map(|(root, f_root, inv)| *root * f_root * inv)
        .sum();

    sum * domain.vanishing_polynomial_eval(&z) * domain.domain_size_inv
}

/// Evaluates the polynomial at an arbitrary point `z`.
///
/// Points on the domain are a lookup, everything else goes through the
/// barycentric formula.
pub fn evaluate(domain: &Domain, polynomial: &[Scalar], z: Scalar) -> Scalar {
    match domain.position(&z) {
        Some(idx) => polynomial[idx],
        None => {
            let inv = inverse_distances(domain, z);
            barycentric_evaluation(domain, polynomial, z, &inv)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Evaluates `coeffs` (monomial form) at `x` using Horner's rule.
    fn horner(coeffs: &[Scalar], x: Scalar) -> Scalar {
        coeffs
            .iter()
            .rev()
            .fold(Scalar::ZERO, |acc, coeff| acc * x + coeff)
    }

    fn evaluations_of(coeffs: &[Scalar], domain: &Domain) -> Vec<Scalar> {
        domain.roots.iter().map(|root| horner(coeffs, *root)).collect()
    }

    #[test]
    fn matches_monomial_evaluation_outside_the_domain() {
        let domain = Domain::new(16);
        let coeffs: Vec<Scalar> = (0..16u64).map(|i| Scalar::from(3 * i + 1)).collect();
        let evaluations = evaluations_of(&coeffs, &domain);

        for z in [2u64, 17, 12345] {
            let z = Scalar::from(z);
            assert_eq!(evaluate(&domain, &evaluations, z), horner(&coeffs, z));
        }
    }

    #[test]
    fn points_on_the_domain_are_looked_up() {
        let domain = Domain::new(8);
        let evaluations: Vec<Scalar> = (0..8u64).map(Scalar::from).collect();

        for (idx, root) in domain.roots.iter().enumerate() {
            assert_eq!(evaluate(&domain, &evaluations, *root), evaluations[idx]);
        }
    }

    #[test]
    fn constant_polynomial() {
        let domain = Domain::new(32);
        let c = Scalar::from(99u64);
        let evaluations = vec![c; 32];

        assert_eq!(evaluate(&domain, &evaluations, Scalar::from(5u64)), c);
    }
}
