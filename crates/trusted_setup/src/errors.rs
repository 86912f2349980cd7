use serialization::SerializationError;

/// Errors that can occur while loading or generating a trusted setup.
#[derive(Debug)]
pub enum Error {
    /// The setup file could not be read.
    Io(std::io::Error),
    /// The input is not JSON of the expected shape.
    Json(serde_json::Error),
    /// A G1 point at `index` of the named list could not be decoded.
    InvalidG1Point {
        list: &'static str,
        index: usize,
        source: SerializationError,
    },
    /// A G2 point at `index` could not be decoded.
    InvalidG2Point {
        index: usize,
        source: SerializationError,
    },
    /// The monomial and Lagrange G1 lists differ in length.
    InconsistentG1Lengths {
        g1_monomial: usize,
        g1_lagrange: usize,
    },
    /// The Lagrange basis must cover a power-of-two domain.
    DomainSizeNotPowerOfTwo { size: usize },
    /// At least `[1]G₂` and `[τ]G₂` are needed to verify openings.
    NotEnoughG2Points { length: usize },
    /// The secret is zero or a root of unity of the domain, so the Lagrange
    /// basis at `τ` is undefined or degenerate.
    DegenerateSecret,
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
