/// Errors that can occur while deserializing untrusted input, either from the
/// public API or from a trusted setup file.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The bytes encode an integer that is not less than the scalar modulus.
    CouldNotDeserializeScalar {
        /// Raw bytes attempted to deserialize.
        bytes: Vec<u8>,
    },
    /// A 32-byte chunk of a blob is not a canonical field element.
    BlobChunkNotCanonical {
        /// Position of the first offending chunk within the blob.
        index: usize,
        /// Raw bytes of that chunk.
        bytes: Vec<u8>,
    },
    /// The bytes are not a valid compressed G1 point in the prime-order subgroup.
    CouldNotDeserializeG1Point {
        /// Raw bytes attempted to deserialize.
        bytes: Vec<u8>,
    },
    /// The bytes are not a valid compressed G2 point in the prime-order subgroup.
    CouldNotDeserializeG2Point {
        /// Raw bytes attempted to deserialize.
        bytes: Vec<u8>,
    },
    /// Scalar had an incorrect byte length.
    ScalarHasInvalidLength {
        /// Raw bytes with incorrect length.
        bytes: Vec<u8>,
        /// Detected length of the bytes.
        length: usize,
    },
    /// Blob had an incorrect byte length.
    BlobHasInvalidLength {
        /// Detected length of the bytes.
        length: usize,
    },
    /// G1 point had an incorrect byte length.
    G1PointHasInvalidLength {
        /// Raw bytes with incorrect length.
        bytes: Vec<u8>,
        /// Detected length of the bytes.
        length: usize,
    },
    /// G2 point had an incorrect byte length.
    G2PointHasInvalidLength {
        /// Raw bytes with incorrect length.
        bytes: Vec<u8>,
        /// Detected length of the bytes.
        length: usize,
    },
    /// The input was not valid hexadecimal.
    InvalidHex(hex::FromHexError),
}

impl From<hex::FromHexError> for Error {
    fn from(value: hex::FromHexError) -> Self {
        Self::InvalidHex(value)
    }
}
