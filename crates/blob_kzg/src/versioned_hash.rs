use sha2::{Digest, Sha256};

use crate::{KZGCommitment, VersionedHash};

/// Version byte that marks a versioned hash as derived from a KZG commitment.
pub const VERSIONED_HASH_VERSION_KZG: u8 = 0x01;

/// Hashes a commitment into the 32 byte identifier used to reference a blob.
///
/// The first byte of the sha256 digest is replaced by [`VERSIONED_HASH_VERSION_KZG`].
///
/// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/017a8495f7671f5fff2075a9bfc9238c1a0982f8/specs/deneb/beacon-chain.md#kzg_commitment_to_versioned_hash
pub fn kzg_to_versioned_hash(commitment: &KZGCommitment) -> VersionedHash {
    let mut hash: VersionedHash = Sha256::digest(commitment).into();
    hash[0] = VERSIONED_HASH_VERSION_KZG;
    hash
}
