use bls12_381::{
    batch_inversion::batch_inverse, batch_normalize_points, g1_batch_normalize, traits::*,
    G1Projective, G2Point, G2Projective, Scalar,
};
use polynomial::{bitreverse_slice, domain::Domain};

use crate::{Error, TrustedSetup};

impl TrustedSetup {
    /// Builds a setup from a secret the caller knows.
    ///
    /// Anyone holding `tau` can forge openings, so this is only for tests and
    /// local experiments. `num_g1` is the domain size and must be a power of
    /// two. `num_g2` must be at least 2.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(tau)))]
    pub fn insecure_from_secret(tau: Scalar, num_g1: usize, num_g2: usize) -> Result<Self, Error> {
        if !num_g1.is_power_of_two() {
            return Err(Error::DomainSizeNotPowerOfTwo { size: num_g1 });
        }
        if num_g2 < 2 {
            return Err(Error::NotEnoughG2Points { length: num_g2 });
        }

        let domain = Domain::new(num_g1);
        if bool::from(tau.is_zero()) || domain.vanishing_polynomial_eval(&tau).is_zero().into() {
            return Err(Error::DegenerateSecret);
        }

        let g1_monomial = {
            let points: Vec<G1Projective> = powers_of(tau, num_g1)
                .map(|power| G1Projective::generator() * power)
                .collect();
            g1_batch_normalize(&points)
        };

        let g1_lagrange = {
            let mut points: Vec<G1Projective> = lagrange_basis_at(&domain, tau)
                .into_iter()
                .map(|l_i| G1Projective::generator() * l_i)
                .collect();
            bitreverse_slice(&mut points);
            g1_batch_normalize(&points)
        };

        let g2_monomial = {
            let points: Vec<G2Projective> = powers_of(tau, num_g2)
                .map(|power| G2Projective::generator() * power)
                .collect();
            batch_normalize_points::<G2Point>(&points)
        };

        Self::from_points(g1_monomial, g1_lagrange, g2_monomial)
    }
}

/// `1, τ, τ², ...`, `count` terms.
fn powers_of(tau: Scalar, count: usize) -> impl Iterator<Item = Scalar> {
    std::iter::successors(Some(Scalar::ONE), move |power| Some(power * tau)).take(count)
}

/// `L_i(τ) = ω^i (τ^n - 1) / (n (τ - ω^i))` for every root `ω^i`, in natural order.
///
/// `tau` must not be a root of the domain.
fn lagrange_basis_at(domain: &Domain, tau: Scalar) -> Vec<Scalar> {
    let mut denominators: Vec<Scalar> = domain.roots.iter().map(|root| tau - root).collect();
    batch_inverse(&mut denominators);

    let scale = domain.vanishing_polynomial_eval(&tau) * domain.domain_size_inv;

    domain
        .roots
        .iter()
        .zip(denominators)
        .map(|(root, inv_denominator)| scale * root * inv_denominator)
        .collect()
}
