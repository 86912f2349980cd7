use kzg_single_open::{prover::CommitKey, verifier::VerificationKey};
use polynomial::bitreverse_slice;
pub use trusted_setup::TrustedSetup;

/// Builds the Lagrange commit key, undoing the bit-reversal of the setup file.
pub(crate) fn commit_key_from_setup(setup: &TrustedSetup) -> CommitKey {
    let mut g1_lagrange = setup.g1_lagrange.clone();
    bitreverse_slice(&mut g1_lagrange);
    CommitKey::new(g1_lagrange)
}

/// Builds the verification key from `[1]G₁`, `[1]G₂` and `[τ]G₂`.
///
/// Returns `None` if the setup is missing any of them.
pub(crate) fn verification_key_from_setup(setup: &TrustedSetup) -> Option<VerificationKey> {
    let gen_g1 = *setup.g1_monomial.first()?;
    let [gen_g2, tau_g2, ..] = setup.g2_monomial.as_slice() else {
        return None;
    };
    Some(VerificationKey::new(gen_g1, *gen_g2, *tau_g2))
}
