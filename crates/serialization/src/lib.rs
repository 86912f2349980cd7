pub mod constants;
mod errors;
pub mod types;

use bls12_381::{G1Point, G2Point, Scalar};
use constants::{BYTES_PER_BLOB, BYTES_PER_FIELD_ELEMENT};
pub use errors::Error as SerializationError;
use types::SerializedScalar;

/// Deserializes a big-endian 32 byte value into a scalar.
///
/// Values that are not strictly less than the modulus are rejected rather
/// than reduced.
pub fn deserialize_bytes_to_scalar(scalar_bytes: &[u8]) -> Result<Scalar, SerializationError> {
    let Ok(bytes32) = <&SerializedScalar>::try_from(scalar_bytes) else {
        return Err(SerializationError::ScalarHasInvalidLength {
            bytes: scalar_bytes.to_vec(),
            length: scalar_bytes.len(),
        });
    };

    Option::from(Scalar::from_bytes_be(bytes32)).ok_or_else(|| {
        SerializationError::CouldNotDeserializeScalar {
            bytes: scalar_bytes.to_vec(),
        }
    })
}

/// Deserializes a blob into its field elements, preserving chunk order.
pub fn deserialize_blob_to_scalars(blob_bytes: &[u8]) -> Result<Vec<Scalar>, SerializationError> {
    if blob_bytes.len() != BYTES_PER_BLOB {
        return Err(SerializationError::BlobHasInvalidLength {
            length: blob_bytes.len(),
        });
    }

    blob_bytes
        .chunks_exact(BYTES_PER_FIELD_ELEMENT)
        .enumerate()
        .map(|(index, chunk)| {
            deserialize_bytes_to_scalar(chunk).map_err(|_| {
                SerializationError::BlobChunkNotCanonical {
                    index,
                    bytes: chunk.to_vec(),
                }
            })
        })
        .collect()
}

/// Serializes a scalar as 32 big-endian bytes.
pub fn serialize_scalar(scalar: &Scalar) -> SerializedScalar {
    scalar.to_bytes_be()
}

/// Deserializes a compressed G1 point, checking that it is in the prime-order subgroup.
pub fn deserialize_compressed_g1(point_bytes: &[u8]) -> Result<G1Point, SerializationError> {
    let Ok(point_bytes) = point_bytes.try_into() else {
        return Err(SerializationError::G1PointHasInvalidLength {
            length: point_bytes.len(),
            bytes: point_bytes.to_vec(),
        });
    };

    Option::from(G1Point::from_compressed(point_bytes)).ok_or_else(|| {
        SerializationError::CouldNotDeserializeG1Point {
            bytes: point_bytes.to_vec(),
        }
    })
}

/// Serializes a G1 point in compressed form.
pub fn serialize_g1_compressed(point: &G1Point) -> [u8; constants::BYTES_PER_G1_POINT] {
    point.to_compressed()
}

/// Deserializes a compressed G2 point, checking that it is in the prime-order subgroup.
pub fn deserialize_compressed_g2(point_bytes: &[u8]) -> Result<G2Point, SerializationError> {
    let Ok(point_bytes) = point_bytes.try_into() else {
        return Err(SerializationError::G2PointHasInvalidLength {
            length: point_bytes.len(),
            bytes: point_bytes.to_vec(),
        });
    };

    Option::from(G2Point::from_compressed(point_bytes)).ok_or_else(|| {
        SerializationError::CouldNotDeserializeG2Point {
            bytes: point_bytes.to_vec(),
        }
    })
}

/// Decodes a hex string, with or without a `0x` prefix.
pub fn bytes_from_hex(hex_str: &str) -> Result<Vec<u8>, SerializationError> {
    let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    Ok(hex::decode(hex_str)?)
}

#[cfg(test)]
mod tests {
    use bls12_381::traits::*;
    use proptest::prelude::*;

    use super::*;
    use crate::constants::FIELD_ELEMENTS_PER_BLOB;

    /// The scalar field modulus r, big-endian.
    const MODULUS: SerializedScalar = [
        0x73, 0xED, 0xA7, 0x53, 0x29, 0x9D, 0x7D, 0x48, 0x33, 0x39, 0xD8, 0x08, 0x09, 0xA1, 0xD8,
        0x05, 0x53, 0xBD, 0xA4, 0x02, 0xFF, 0xFE, 0x5B, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00,
        0x00, 0x01,
    ];

    fn modulus_minus_one() -> SerializedScalar {
        let mut bytes = MODULUS;
        bytes[31] -= 1;
        bytes
    }

    #[test]
    fn scalar_boundary_values() {
        assert_eq!(
            deserialize_bytes_to_scalar(&modulus_minus_one()),
            Ok(-Scalar::ONE)
        );
        assert_eq!(
            deserialize_bytes_to_scalar(&MODULUS),
            Err(SerializationError::CouldNotDeserializeScalar {
                bytes: MODULUS.to_vec()
            })
        );
        assert!(deserialize_bytes_to_scalar(&[0xFF; 32]).is_err());
        assert_eq!(deserialize_bytes_to_scalar(&[0u8; 32]), Ok(Scalar::ZERO));
    }

    #[test]
    fn scalar_with_wrong_length() {
        let err = deserialize_bytes_to_scalar(&[0u8; 31]).unwrap_err();
        assert!(matches!(
            err,
            SerializationError::ScalarHasInvalidLength { length: 31, .. }
        ));
    }

    #[test]
    fn scalar_encoding_is_big_endian() {
        let mut expected = [0u8; 32];
        expected[30] = 0x01;
        expected[31] = 0x02;
        assert_eq!(serialize_scalar(&Scalar::from(0x0102u64)), expected);
    }

    #[test]
    fn blob_with_wrong_length() {
        let err = deserialize_blob_to_scalars(&vec![0u8; BYTES_PER_BLOB - 1]).unwrap_err();
        assert_eq!(
            err,
            SerializationError::BlobHasInvalidLength {
                length: BYTES_PER_BLOB - 1
            }
        );
        assert!(deserialize_blob_to_scalars(&[]).is_err());
    }

    #[test]
    fn blob_whose_last_chunk_is_the_largest_canonical_value() {
        let mut blob = vec![0u8; BYTES_PER_BLOB];
        blob[BYTES_PER_BLOB - BYTES_PER_FIELD_ELEMENT..].copy_from_slice(&modulus_minus_one());

        let scalars = deserialize_blob_to_scalars(&blob).expect("r - 1 is canonical");
        assert_eq!(scalars.len(), FIELD_ELEMENTS_PER_BLOB);
        assert_eq!(scalars[FIELD_ELEMENTS_PER_BLOB - 1], -Scalar::ONE);
    }

    #[test]
    fn blob_reports_the_first_non_canonical_chunk() {
        let mut blob = vec![0u8; BYTES_PER_BLOB];
        let chunk = |i: usize| i * BYTES_PER_FIELD_ELEMENT..(i + 1) * BYTES_PER_FIELD_ELEMENT;
        blob[chunk(17)].copy_from_slice(&MODULUS);
        blob[chunk(300)].copy_from_slice(&[0xFF; 32]);

        assert_eq!(
            deserialize_blob_to_scalars(&blob),
            Err(SerializationError::BlobChunkNotCanonical {
                index: 17,
                bytes: MODULUS.to_vec()
            })
        );
    }

    #[test]
    fn g1_decoding() {
        let generator = G1Point::generator();
        let bytes = serialize_g1_compressed(&generator);
        assert_eq!(deserialize_compressed_g1(&bytes), Ok(generator));

        assert!(matches!(
            deserialize_compressed_g1(&bytes[..47]),
            Err(SerializationError::G1PointHasInvalidLength { length: 47, .. })
        ));

        // Clearing the compression flag makes the encoding invalid.
        let mut corrupted = bytes;
        corrupted[0] &= 0x7F;
        assert!(matches!(
            deserialize_compressed_g1(&corrupted),
            Err(SerializationError::CouldNotDeserializeG1Point { .. })
        ));
    }

    #[test]
    fn g2_decoding() {
        let generator = G2Point::generator();
        let bytes = generator.to_compressed();
        assert_eq!(deserialize_compressed_g2(&bytes), Ok(generator));
        assert!(matches!(
            deserialize_compressed_g2(&bytes[..48]),
            Err(SerializationError::G2PointHasInvalidLength { length: 48, .. })
        ));
    }

    #[test]
    fn hex_prefix_is_optional() {
        assert_eq!(bytes_from_hex("0x0aff"), Ok(vec![0x0a, 0xff]));
        assert_eq!(bytes_from_hex("0aff"), Ok(vec![0x0a, 0xff]));
        assert!(matches!(
            bytes_from_hex("0xzz"),
            Err(SerializationError::InvalidHex(_))
        ));
    }

    proptest! {
        #[test]
        fn masked_bytes_always_decode(mut bytes in any::<[u8; 32]>()) {
            bytes[0] &= 0x3F;
            let scalar = deserialize_bytes_to_scalar(&bytes).expect("below 2^254 < r");
            prop_assert_eq!(serialize_scalar(&scalar), bytes);
        }
    }
}
