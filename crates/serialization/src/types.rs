use crate::constants::{
    BYTES_PER_BLOB, BYTES_PER_COMMITMENT, BYTES_PER_FIELD_ELEMENT, BYTES_PER_VERSIONED_HASH,
};

/// A heap allocated blob.
///
/// Blobs are 128 KiB, which is too large to pass around on the stack.
pub type Blob = Box<[u8; BYTES_PER_BLOB]>;

/// `KZGProof` denotes a 48 byte compressed G1 point witnessing that a
/// committed polynomial evaluates to a claimed value at some point.
pub type KZGProof = [u8; BYTES_PER_COMMITMENT];

/// `KZGCommitment` denotes a 48 byte commitment to a polynomial f(x).
pub type KZGCommitment = [u8; BYTES_PER_COMMITMENT];

/// `SerializedScalar` denotes a 32 byte big-endian field element.
///
/// Evaluation points and claimed evaluations use this type.
pub type SerializedScalar = [u8; BYTES_PER_FIELD_ELEMENT];

/// A commitment's sha256 digest with the first byte replaced by a version tag.
pub type VersionedHash = [u8; BYTES_PER_VERSIONED_HASH];
