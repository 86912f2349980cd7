use bls12_381::{reduce_bytes_to_scalar_bias, Scalar};
use serialization::deserialize_blob_to_scalars;
use sha2::{Digest, Sha256};

use crate::{
    constants::{BYTES_PER_BLOB, BYTES_PER_COMMITMENT, FIELD_ELEMENTS_PER_BLOB},
    BlobRef, Error, KZGCommitment, KZGOpeningPoint,
};

/// Domain separator for the blob proof challenge.
///
/// It matches [FIAT_SHAMIR_PROTOCOL_DOMAIN] in the consensus specs.
///
/// [FIAT_SHAMIR_PROTOCOL_DOMAIN]: https://github.com/ethereum/consensus-specs/blob/017a8495f7671f5fff2075a9bfc9238c1a0982f8/specs/deneb/polynomial-commitments.md#blob
const DOMAIN_SEP: &str = "FSBLOBVERIFY_V1_";

/// Derives the evaluation point used by blob proofs from the blob and its commitment.
///
/// Integrators that need a point both parties can recompute can open a blob
/// at this value with [`crate::Context::compute_kzg_proof`].
pub fn compute_challenge(blob: BlobRef, commitment: KZGCommitment) -> Result<KZGOpeningPoint, Error> {
    // Only the length and canonicity checks matter here.
    deserialize_blob_to_scalars(blob)?;
    Ok(compute_fiat_shamir_challenge(blob, commitment).to_bytes_be())
}

/// Computes the Fiat-Shamir challenge of a blob KZG proof.
///
/// `blob` must already be known to be `BYTES_PER_BLOB` long.
///
/// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/017a8495f7671f5fff2075a9bfc9238c1a0982f8/specs/deneb/polynomial-commitments.md#compute_challenge
pub(crate) fn compute_fiat_shamir_challenge(blob: BlobRef, commitment: KZGCommitment) -> Scalar {
    let hash_input_size = DOMAIN_SEP.len()
            + 2 * size_of::<u64>() // polynomial bound
            + BYTES_PER_BLOB // blob
            + BYTES_PER_COMMITMENT // commitment
            ;

    let mut hash_input: Vec<u8> = Vec::with_capacity(hash_input_size);

    hash_input.extend(DOMAIN_SEP.as_bytes());
    hash_input.extend(u64_to_byte_array_16(FIELD_ELEMENTS_PER_BLOB as u64));
    hash_input.extend(blob);
    hash_input.extend(commitment);

    debug_assert_eq!(hash_input.len(), hash_input_size);
    let result: [u8; 32] = Sha256::digest(&hash_input).into();

    // The hash is reduced modulo r, which biases the result. The bias is
    // negligible for a 256 bit input, and a zero challenge is equally unlikely.
    reduce_bytes_to_scalar_bias(result)
}

/// Converts a u64 to a byte array of length 16 in big endian format.
/// This implies that the first 8 bytes of the result are always 0.
fn u64_to_byte_array_16(number: u64) -> [u8; 16] {
    let mut bytes = [0; 16];
    bytes[8..].copy_from_slice(&number.to_be_bytes());
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polynomial_bound_is_sixteen_bytes_big_endian() {
        let bytes = u64_to_byte_array_16(4096);
        assert_eq!(bytes[..14], [0u8; 14]);
        assert_eq!(bytes[14..], [0x10, 0x00]);
    }

    #[test]
    fn challenge_depends_on_blob_and_commitment() {
        let blob = vec![0u8; BYTES_PER_BLOB];
        let mut other_blob = blob.clone();
        other_blob[BYTES_PER_BLOB - 1] = 1;
        let commitment = [0xc0; BYTES_PER_COMMITMENT];
        let mut other_commitment = commitment;
        other_commitment[47] = 1;

        let z = compute_fiat_shamir_challenge(&blob, commitment);
        assert_eq!(z, compute_fiat_shamir_challenge(&blob, commitment));
        assert_ne!(z, compute_fiat_shamir_challenge(&other_blob, commitment));
        assert_ne!(z, compute_fiat_shamir_challenge(&blob, other_commitment));
    }

    #[test]
    fn public_challenge_checks_the_blob() {
        let commitment = [0xc0; BYTES_PER_COMMITMENT];
        assert!(matches!(
            compute_challenge(&[0u8; 10], commitment),
            Err(Error::Serialization(
                serialization::SerializationError::BlobHasInvalidLength { length: 10 }
            ))
        ));

        let blob = vec![0u8; BYTES_PER_BLOB];
        assert_eq!(
            compute_challenge(&blob, commitment),
            Ok(compute_fiat_shamir_challenge(&blob, commitment).to_bytes_be())
        );
    }
}
