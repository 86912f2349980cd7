#![allow(dead_code)]

use std::sync::OnceLock;

use blob_kzg::{
    constants::{BYTES_PER_BLOB, FIELD_ELEMENTS_PER_BLOB},
    Context, TrustedSetup,
};
use bls12_381::Scalar;
use polynomial::{bitreverse_slice, domain::Domain};

/// The secret behind the test setup. Knowing it lets tests build expected
/// commitments by hand.
pub const TAU: u64 = 0x5eed_cafe_f00d;

/// One context per test binary; generating the setup is the slow part.
pub fn context() -> &'static Context {
    static CONTEXT: OnceLock<Context> = OnceLock::new();
    CONTEXT.get_or_init(|| {
        let setup =
            TrustedSetup::insecure_from_secret(Scalar::from(TAU), FIELD_ELEMENTS_PER_BLOB, 2)
                .expect("test secret is not degenerate");
        Context::new(&setup).expect("setup has the blob size")
    })
}

/// Encodes field elements as a blob, chunk by chunk.
pub fn blob_from_scalars(scalars: &[Scalar]) -> Vec<u8> {
    let blob: Vec<u8> = scalars.iter().flat_map(Scalar::to_bytes_be).collect();
    assert_eq!(blob.len(), BYTES_PER_BLOB);
    blob
}

/// `points[i]` is the domain element whose evaluation chunk `i` of a blob holds.
pub fn blob_domain_points() -> Vec<Scalar> {
    let mut points = Domain::new(FIELD_ELEMENTS_PER_BLOB).roots;
    bitreverse_slice(&mut points);
    points
}
