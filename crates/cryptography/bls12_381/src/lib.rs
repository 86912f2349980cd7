use pairing::{MillerLoopResult, MultiMillerLoop};
use traits::*;

pub mod batch_inversion;
pub mod lincomb;

// Re-export ff and group so that downstream crates share one version of them.
pub use ff;
pub use group;

pub mod traits {
    pub use ff::{Field, PrimeField};
    pub use group::{prime::PrimeCurveAffine, Curve, Group};
}

/// Affine representation of a point in the BLS12-381 G1 curve group.
pub type G1Point = blstrs::G1Affine;

/// Projective representation of a point in the BLS12-381 G1 curve group.
pub type G1Projective = blstrs::G1Projective;

/// Affine representation of a point in the BLS12-381 G2 curve group.
pub type G2Point = blstrs::G2Affine;

/// Projective representation of a point in the BLS12-381 G2 curve group.
pub type G2Projective = blstrs::G2Projective;

/// G2 point with its Miller loop lines precomputed.
pub type G2Prepared = blstrs::G2Prepared;

/// Element of the BLS12-381 scalar field.
pub type Scalar = blstrs::Scalar;

/// Returns true if `∏ e(g1_i, g2_i)` is the identity in the target group.
pub fn multi_pairings(pairs: &[(&G1Point, &G2Prepared)]) -> bool {
    blstrs::Bls12::multi_miller_loop(pairs)
        .final_exponentiation()
        .is_identity()
        .into()
}

/// Converts projective G1 points to affine using a single shared inversion.
///
/// blst maps the whole batch to the identity if any input is the identity,
/// so those positions are taken out before normalising and put back after.
pub fn g1_batch_normalize(projective_points: &[G1Projective]) -> Vec<G1Point> {
    if projective_points.is_empty() {
        return Vec::new();
    }

    let (identity_positions, non_identity_points): (Vec<_>, Vec<_>) = projective_points
        .iter()
        .enumerate()
        .partition(|(_, point)| bool::from(point.is_identity()));

    if non_identity_points.is_empty() {
        return vec![G1Point::identity(); projective_points.len()];
    }

    let non_identity_points: Vec<G1Projective> =
        non_identity_points.into_iter().map(|(_, p)| *p).collect();

    // SAFETY: `G1Projective` is a transparent wrapper around `blst_p1`.
    let raw_points = unsafe {
        std::slice::from_raw_parts(
            non_identity_points.as_ptr().cast::<blst::blst_p1>(),
            non_identity_points.len(),
        )
    };
    let normalized = blst::p1_affines::from(raw_points);

    let mut result: Vec<G1Point> = normalized
        .as_slice()
        .iter()
        .map(|p| G1Point::from_raw_unchecked(p.x.into(), p.y.into(), false))
        .collect();

    for (pos, _) in identity_positions {
        result.insert(pos, G1Point::identity());
    }

    result
}

/// Batch-normalises projective points of any prime-order curve.
pub fn batch_normalize_points<T: PrimeCurveAffine>(points: &[T::Curve]) -> Vec<T>
where
    T::Curve: Curve<AffineRepr = T>,
{
    let mut affine_points = vec![T::identity(); points.len()];
    T::Curve::batch_normalize(points, &mut affine_points);
    affine_points
}

/// Interprets `bytes` as a big-endian integer and reduces it modulo r.
///
/// The result is biased for inputs above r; callers use this for challenges
/// where the bias is negligible.
pub fn reduce_bytes_to_scalar_bias(bytes: [u8; 32]) -> Scalar {
    let mut out = blst::blst_fr::default();

    unsafe {
        let mut s = blst::blst_scalar::default();
        blst::blst_scalar_from_bendian(&raw mut s, bytes.as_ptr());
        blst::blst_fr_from_scalar(&raw mut out, std::ptr::addr_of!(s));
    }

    Scalar::from(out)
}
