use crate::{traits::*, G1Point, G1Projective, Scalar};

/// Multi-scalar multiplication over G1: `Σ scalars[i] * points[i]`.
///
/// Returns `None` if `points` and `scalars` have different lengths.
///
/// blst returns the identity for the whole sum if any input point is the
/// identity, so identity points are dropped before calling into it. Their
/// contribution is zero anyway.
pub fn g1_lincomb(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    if points.len() != scalars.len() {
        return None;
    }

    let (points, scalars): (Vec<G1Projective>, Vec<Scalar>) = points
        .iter()
        .zip(scalars)
        .filter(|(point, _)| !bool::from(point.is_identity()))
        .map(|(point, scalar)| (G1Projective::from(point), *scalar))
        .unzip();

    if points.is_empty() {
        return Some(G1Projective::identity());
    }

    Some(G1Projective::multi_exp(&points, &scalars))
}
