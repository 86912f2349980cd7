mod errors;
mod insecure;

use std::path::Path;

use bls12_381::{G1Point, G2Point};
pub use errors::Error;
use serde::Deserialize;
use serialization::{bytes_from_hex, deserialize_compressed_g1, deserialize_compressed_g2};

/// The structured reference string, with every point decoded and subgroup checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedSetup {
    /// `[τ^i]G₁` for `i` in `0..n`.
    pub g1_monomial: Vec<G1Point>,
    /// `[L_i(τ)]G₁` where `L_i` is the i-th Lagrange polynomial of the size-n
    /// domain.
    ///
    /// Stored in bit-reversed order, exactly as the Ethereum setup file lists
    /// them. Consumers that work in natural order must undo the permutation.
    pub g1_lagrange: Vec<G1Point>,
    /// `[τ^i]G₂`. Only the first two are needed for single-point openings.
    pub g2_monomial: Vec<G2Point>,
}

/// The setup file as it appears on disk: lists of `0x`-prefixed hex strings.
#[derive(Deserialize, Debug)]
struct TrustedSetupJson {
    g1_monomial: Vec<String>,
    g1_lagrange: Vec<String>,
    g2_monomial: Vec<String>,
}

impl TrustedSetup {
    /// Parses a Json string in the format specified by the Ethereum trusted setup.
    ///
    /// The file used on mainnet is located here: https://github.com/ethereum/consensus-specs/blob/389b2ddfb954731da7ccf4c0ef89fab2d4575b99/presets/mainnet/trusted_setups/trusted_setup_4096.json
    ///
    // The accepted format looks like the following:
    /*
    {
      "g1_monomial": [
        "0x97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb",
        ...
      ],
      "g1_lagrange": [
        "0xa0413c0dcafec6dbc9f47d66785cf1e8c981044f7d13cfe3e4fcbb71b5408dfde6312493cb3c1d30516cb3ca88c03654",
        ...
      ],
      "g2_monomial": [
        "0x93e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8",
        ...
      ]
    }
    */
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let raw: TrustedSetupJson = serde_json::from_str(json)?;

        let g1_monomial = deserialize_g1_points("g1_monomial", &raw.g1_monomial)?;
        let g1_lagrange = deserialize_g1_points("g1_lagrange", &raw.g1_lagrange)?;
        let g2_monomial = deserialize_g2_points(&raw.g2_monomial)?;

        Self::from_points(g1_monomial, g1_lagrange, g2_monomial)
    }

    /// Reads and parses a setup file. See [`TrustedSetup::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks the shape of already-decoded points.
    fn from_points(
        g1_monomial: Vec<G1Point>,
        g1_lagrange: Vec<G1Point>,
        g2_monomial: Vec<G2Point>,
    ) -> Result<Self, Error> {
        if g1_monomial.len() != g1_lagrange.len() {
            return Err(Error::InconsistentG1Lengths {
                g1_monomial: g1_monomial.len(),
                g1_lagrange: g1_lagrange.len(),
            });
        }
        if !g1_lagrange.len().is_power_of_two() {
            return Err(Error::DomainSizeNotPowerOfTwo {
                size: g1_lagrange.len(),
            });
        }
        if g2_monomial.len() < 2 {
            return Err(Error::NotEnoughG2Points {
                length: g2_monomial.len(),
            });
        }

        Ok(Self {
            g1_monomial,
            g1_lagrange,
            g2_monomial,
        })
    }

    /// Number of points in the Lagrange basis, i.e. the domain size.
    pub fn domain_size(&self) -> usize {
        self.g1_lagrange.len()
    }
}

fn deserialize_g1_points(list: &'static str, hex_points: &[String]) -> Result<Vec<G1Point>, Error> {
    hex_points
        .iter()
        .enumerate()
        .map(|(index, hex_point)| {
            bytes_from_hex(hex_point)
                .and_then(|bytes| deserialize_compressed_g1(&bytes))
                .map_err(|source| Error::InvalidG1Point {
                    list,
                    index,
                    source,
                })
        })
        .collect()
}

fn deserialize_g2_points(hex_points: &[String]) -> Result<Vec<G2Point>, Error> {
    hex_points
        .iter()
        .enumerate()
        .map(|(index, hex_point)| {
            bytes_from_hex(hex_point)
                .and_then(|bytes| deserialize_compressed_g2(&bytes))
                .map_err(|source| Error::InvalidG2Point { index, source })
        })
        .collect()
}
