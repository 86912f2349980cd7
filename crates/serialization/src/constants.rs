// "Field element" always refers to the scalar field of BLS12-381.

/// The number of bytes needed to represent a field element.
///
/// See: https://github.com/ethereum/EIPs/blob/master/EIPS/eip-4844.md
pub const BYTES_PER_FIELD_ELEMENT: usize = 32;

/// The number of field elements in a blob.
///
/// See: https://github.com/ethereum/EIPs/blob/master/EIPS/eip-4844.md
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;

/// The number of bytes in a blob.
pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT;

/// The number of bytes in a compressed G1 element.
pub const BYTES_PER_G1_POINT: usize = 48;

/// The number of bytes in a compressed G2 element.
pub const BYTES_PER_G2_POINT: usize = 96;

/// Commitments and proofs are both compressed G1 elements.
pub const BYTES_PER_COMMITMENT: usize = BYTES_PER_G1_POINT;

/// The number of bytes in a versioned hash.
pub const BYTES_PER_VERSIONED_HASH: usize = 32;
