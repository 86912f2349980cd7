use bls12_381::{multi_pairings, traits::*, G1Point, G1Projective, G2Point, G2Prepared, Scalar};
use polynomial::{bitreverse_slice, domain::Domain};

use crate::{evaluation::evaluate, VerifierError};

/// The key used to verify KZG single-point opening proofs.
#[derive(Debug)]
pub struct VerificationKey {
    /// `[1]G₁`
    pub gen_g1: G1Point,
    /// `[1]G₂`
    pub gen_g2: G2Point,
    /// `[τ]G₂`
    pub tau_g2: G2Point,
    gen_g2_prepared: G2Prepared,
    tau_g2_prepared: G2Prepared,
}

impl VerificationKey {
    pub fn new(gen_g1: G1Point, gen_g2: G2Point, tau_g2: G2Point) -> Self {
        Self {
            gen_g1,
            gen_g2,
            tau_g2,
            gen_g2_prepared: G2Prepared::from(gen_g2),
            tau_g2_prepared: G2Prepared::from(tau_g2),
        }
    }
}

#[derive(Debug)]
pub struct Verifier {
    /// Domain the committed polynomials are evaluated over.
    pub domain: Domain,
    pub verification_key: VerificationKey,
}

impl Verifier {
    pub fn new(domain_size: usize, verification_key: VerificationKey) -> Self {
        Self {
            domain: Domain::new(domain_size),
            verification_key,
        }
    }

    /// Checks that `proof` shows the polynomial committed to in `commitment`
    /// evaluates to `y` at `z`.
    ///
    /// The textbook check is `e(C - [y]G₁, G₂) = e(π, [τ - z]G₂)`. Moving the
    /// `z` term to the G₁ side gives
    ///
    /// `e(C - [y]G₁ + [z]π, G₂) · e(-π, [τ]G₂) = 1`
    ///
    /// where both G₂ arguments are fixed and can be prepared once.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn verify_kzg_proof(
        &self,
        commitment: G1Point,
        z: Scalar,
        y: Scalar,
        proof: G1Point,
    ) -> Result<(), VerifierError> {
        let vk = &self.verification_key;

        // [f(τ) - y + z·q(τ)]G₁
        let lhs_g1: G1Point =
            (G1Projective::from(commitment) - vk.gen_g1 * y + proof * z).to_affine();
        let neg_proof = -proof;

        multi_pairings(&[
            (&lhs_g1, &vk.gen_g2_prepared),
            (&neg_proof, &vk.tau_g2_prepared),
        ])
        .then_some(())
        .ok_or(VerifierError::InvalidProof)
    }

    /// Evaluates a polynomial given in bit-reversed evaluation order at `z`.
    pub fn compute_evaluation(&self, polynomial: &[Scalar], z: Scalar) -> Scalar {
        let mut polynomial = polynomial.to_vec();
        bitreverse_slice(&mut polynomial);
        evaluate(&self.domain, &polynomial, z)
    }
}
