use bls12_381::{G1Point, Scalar};
use serialization::{
    deserialize_blob_to_scalars, deserialize_bytes_to_scalar, deserialize_compressed_g1,
};

use crate::{
    fiat_shamir::compute_fiat_shamir_challenge, BlobRef, Context, Error, KZGCommitment,
    KZGOpeningEvaluation, KZGOpeningPoint, KZGProof,
};

/// Decodes a commitment and proof, rejecting anything outside the G1 subgroup.
fn decode_g1_pair(
    commitment: &KZGCommitment,
    proof: &KZGProof,
) -> Result<(G1Point, G1Point), Error> {
    Ok((
        deserialize_compressed_g1(commitment)?,
        deserialize_compressed_g1(proof)?,
    ))
}

impl Context {
    /// Checks that `proof` opens `commitment` to `y` at `z`.
    ///
    /// Any input that does not decode is a serialization error. Only a
    /// well-formed opening that fails the pairing check is reported as
    /// `VerifierError::InvalidProof`.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/017a8495f7671f5fff2075a9bfc9238c1a0982f8/specs/deneb/polynomial-commitments.md#verify_kzg_proof
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn verify_kzg_proof(
        &self,
        commitment: KZGCommitment,
        z: KZGOpeningPoint,
        y: KZGOpeningEvaluation,
        proof: KZGProof,
    ) -> Result<(), Error> {
        let (commitment, proof) = decode_g1_pair(&commitment, &proof)?;
        let z: Scalar = deserialize_bytes_to_scalar(&z)?;
        let y: Scalar = deserialize_bytes_to_scalar(&y)?;

        Ok(self.verifier.verify_kzg_proof(commitment, z, y, proof)?)
    }

    /// Checks a blob proof made by [`Context::compute_blob_kzg_proof`].
    ///
    /// The opening point is rederived from the blob and commitment, and the
    /// claimed value is recomputed from the blob itself, so a proof made for
    /// any other blob fails.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/017a8495f7671f5fff2075a9bfc9238c1a0982f8/specs/deneb/polynomial-commitments.md#verify_blob_kzg_proof
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn verify_blob_kzg_proof(
        &self,
        blob: BlobRef,
        commitment: KZGCommitment,
        proof: KZGProof,
    ) -> Result<(), Error> {
        let polynomial = deserialize_blob_to_scalars(blob)?;
        let (commitment_point, proof) = decode_g1_pair(&commitment, &proof)?;

        // The challenge hashes the encoded commitment, not the decoded point.
        let z = compute_fiat_shamir_challenge(blob, commitment);
        let y = self.verifier.compute_evaluation(&polynomial, z);

        Ok(self
            .verifier
            .verify_kzg_proof(commitment_point, z, y, proof)?)
    }
}
