use bls12_381::{ff::Field, lincomb::g1_lincomb, G1Point, Scalar};
use itertools::izip;
use polynomial::{bitreverse_slice, domain::Domain};

use crate::{
    evaluation::{barycentric_evaluation, inverse_distances},
    ProverError,
};

/// The key used to commit to polynomials in evaluation form.
///
/// `g1_lagrange[i] = [L_i(τ)]G₁` where `L_i` is the i-th Lagrange polynomial
/// of the domain, in natural order.
#[derive(Debug, Clone)]
pub struct CommitKey {
    pub g1_lagrange: Vec<G1Point>,
}

impl CommitKey {
    pub const fn new(g1_lagrange: Vec<G1Point>) -> Self {
        Self { g1_lagrange }
    }

    /// `Σ evaluations[i] * [L_i(τ)]G₁`, or `None` on a length mismatch.
    pub fn commit_lagrange(&self, evaluations: &[Scalar]) -> Option<G1Point> {
        g1_lincomb(&self.g1_lagrange, evaluations).map(Into::into)
    }

    pub fn len(&self) -> usize {
        self.g1_lagrange.len()
    }

    pub fn is_empty(&self) -> bool {
        self.g1_lagrange.is_empty()
    }
}

#[derive(Debug)]
pub struct Prover {
    /// Domain the polynomials are evaluated over.
    pub domain: Domain,
    /// Lagrange-basis commitment key.
    pub commit_key: CommitKey,
}

impl Prover {
    pub fn new(domain_size: usize, commit_key: CommitKey) -> Self {
        Self {
            domain: Domain::new(domain_size),
            commit_key,
        }
    }

    /// Commits to a polynomial given in bit-reversed evaluation order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn commit(&self, polynomial: &[Scalar]) -> Result<G1Point, ProverError> {
        let mut polynomial = polynomial.to_vec();
        bitreverse_slice(&mut polynomial);

        self.commit_key
            .commit_lagrange(&polynomial)
            .ok_or(ProverError::CommitmentFailed {
                num_points: self.commit_key.len(),
                num_scalars: polynomial.len(),
            })
    }

    /// Opens a polynomial given in bit-reversed evaluation order at `z`.
    ///
    /// Returns the proof `[q(τ)]G₁` and the evaluation `y = f(z)`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn open(&self, polynomial: &[Scalar], z: Scalar) -> Result<(G1Point, Scalar), ProverError> {
        let mut polynomial = polynomial.to_vec();
        bitreverse_slice(&mut polynomial);

        let (y, quotient) = compute_evaluation_and_quotient(&self.domain, &polynomial, z);

        let proof = {
            #[cfg(feature = "tracing")]
            let _span = tracing::info_span!("commit quotient").entered();
            self.commit_key.commit_lagrange(&quotient).ok_or(
                ProverError::ProofComputationFailed {
                    num_points: self.commit_key.len(),
                    num_scalars: quotient.len(),
                },
            )?
        };

        Ok((proof, y))
    }
}

/// Computes `y = f(z)` and the evaluations of `q(X) = (f(X) - y) / (X - z)`.
///
/// Input and output are in natural order.
pub fn compute_evaluation_and_quotient(
    domain: &Domain,
    polynomial: &[Scalar],
    z: Scalar,
) -> (Scalar, Vec<Scalar>) {
    match domain.position(&z) {
        Some(point_idx) => quotient_within_domain(domain, polynomial, point_idx),
        None => quotient_outside_domain(domain, polynomial, z),
    }
}

fn quotient_outside_domain(
    domain: &Domain,
    polynomial: &[Scalar],
    z: Scalar,
) -> (Scalar, Vec<Scalar>) {
    let inv = inverse_distances(domain, z);
    let y = barycentric_evaluation(domain, polynomial, z, &inv);

    // q(ω^i) = (f(ω^i) - y) / (ω^i - z) = (y - f(ω^i)) / (z - ω^i)
    let quotient = izip!(polynomial, &inv)
        .map(|(f_root, inv)| (y - f_root) * inv)
        .collect();

    (y, quotient)
}

/// When `z = ω^m` the quotient at `ω^m` is a 0/0 form and is recovered from
/// the other values: `q(ω^m) = -Σ_{j≠m} q(ω^j) * ω^(j-m)`.
///
/// See "Dividing when one of the points is zero" in
/// https://dankradfeist.de/ethereum/2021/06/18/pcs-multiproofs.html
fn quotient_within_domain(
    domain: &Domain,
    polynomial: &[Scalar],
    point_idx: usize,
) -> (Scalar, Vec<Scalar>) {
    let z = domain.roots[point_idx];
    let y = polynomial[point_idx];

    // The m-th distance is zero; use one so batch inversion goes through and
    // overwrite that slot afterwards.
    let mut inv: Vec<Scalar> = domain
        .roots
        .iter()
        .enumerate()
        .map(|(idx, root)| if idx == point_idx { Scalar::ONE } else { z - root })
        .collect();
    bls12_381::batch_inversion::batch_inverse(&mut inv);

    let mut quotient: Vec<Scalar> = izip!(polynomial, &inv)
        .map(|(f_root, inv)| (y - f_root) * inv)
        .collect();

    quotient[point_idx] = Scalar::ZERO;
    quotient[point_idx] = -quotient
        .iter()
        .enumerate()
        .map(|(j, q_j)| *q_j * domain.root_of_index_difference(j, point_idx))
        .sum::<Scalar>();

    (y, quotient)
}
