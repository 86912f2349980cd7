use rand::{CryptoRng, RngCore};

use crate::{
    constants::{BYTES_PER_BLOB, BYTES_PER_FIELD_ELEMENT},
    Blob, SerializedScalar,
};

/// Clearing the two high bits of a big-endian chunk keeps it below 2^254 < r,
/// so it always decodes as a field element.
const TOP_BYTE_MASK: u8 = 0x3F;

/// Samples a blob from the thread-local CSPRNG.
pub fn random_blob() -> Blob {
    random_blob_with_rng(&mut rand::rng())
}

/// Samples a blob whose every chunk is a canonical field element.
pub fn random_blob_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Blob {
    let mut blob = vec![0u8; BYTES_PER_BLOB].into_boxed_slice();
    rng.fill_bytes(&mut blob);
    for chunk in blob.chunks_exact_mut(BYTES_PER_FIELD_ELEMENT) {
        chunk[0] &= TOP_BYTE_MASK;
    }

    blob.try_into()
        .expect("infallible: buffer was allocated with BYTES_PER_BLOB bytes")
}

/// Samples an evaluation point from the thread-local CSPRNG.
pub fn random_scalar() -> SerializedScalar {
    random_scalar_with_rng(&mut rand::rng())
}

/// Samples a canonical 32 byte big-endian scalar.
pub fn random_scalar_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> SerializedScalar {
    let mut bytes = SerializedScalar::default();
    rng.fill_bytes(&mut bytes);
    bytes[0] &= TOP_BYTE_MASK;
    bytes
}
