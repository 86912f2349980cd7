use bls12_381::{
    ff::{Field, PrimeField},
    Scalar,
};

/// The multiplicative subgroup of n-th roots of unity `{ω^0, ω^1, ..., ω^(n-1)}`
/// over which blob polynomials are given in evaluation form.
#[derive(Debug, Clone)]
pub struct Domain {
    /// The roots in natural order: `roots[i] = ω^i`.
    pub roots: Vec<Scalar>,
    /// `n` as a field element.
    pub domain_size: Scalar,
    /// `1/n`, used by the barycentric formula.
    pub domain_size_inv: Scalar,
    /// `ω`, a primitive n-th root of unity.
    pub generator: Scalar,
}

impl Domain {
    /// The scalar field has a multiplicative subgroup of order 2^32.
    const TWO_ADICITY: u32 = Scalar::S;

    /// Creates the domain of size `size`, rounded up to a power of two.
    pub fn new(size: usize) -> Self {
        let size = size.next_power_of_two();

        let generator = Self::generator_for_size(size);

        let domain_size = Scalar::from(size as u64);
        let domain_size_inv = domain_size
            .invert()
            .expect("domain size is non-zero in the scalar field");

        let roots: Vec<Scalar> = std::iter::successors(Some(Scalar::ONE), |root| Some(root * generator))
            .take(size)
            .collect();

        Self {
            roots,
            domain_size,
            domain_size_inv,
            generator,
        }
    }

    /// Derives a generator of the order-`size` subgroup from the field's
    /// fixed 2^32-th root of unity.
    fn generator_for_size(size: usize) -> Scalar {
        let log_size = size.trailing_zeros();
        assert!(
            log_size <= Self::TWO_ADICITY,
            "domain of size 2^{log_size} exceeds the two-adicity of the field"
        );

        let exponent = 1u64 << (Self::TWO_ADICITY - log_size);
        Scalar::ROOT_OF_UNITY.pow_vartime([exponent])
    }

    /// Number of points in the domain. Always a power of two.
    pub fn size(&self) -> usize {
        self.roots.len()
    }

    /// Returns the index `i` such that `roots[i] == point`, if any.
    pub fn position(&self, point: &Scalar) -> Option<usize> {
        self.roots.iter().position(|root| root == point)
    }

    /// Evaluates the vanishing polynomial `Z(X) = X^n - 1` at `point`.
    pub fn vanishing_polynomial_eval(&self, point: &Scalar) -> Scalar {
        point.pow_vartime([self.size() as u64]) - Scalar::ONE
    }

    /// Returns `ω^(i - j)` for indices in `[0, n)`, wrapping around the group.
    pub fn root_of_index_difference(&self, i: usize, j: usize) -> Scalar {
        let n = self.size();
        self.roots[(n + i - j) % n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_have_the_right_order() {
        for log_n in [0u32, 1, 4, 12] {
            let n = 1usize << log_n;
            let domain = Domain::new(n);

            assert_eq!(domain.size(), n);
            assert_eq!(domain.roots[0], Scalar::ONE);
            assert_eq!(domain.generator.pow_vartime([n as u64]), Scalar::ONE);
            if n > 1 {
                // primitive: ω^(n/2) = -1
                assert_eq!(
                    domain.generator.pow_vartime([(n / 2) as u64]),
                    -Scalar::ONE
                );
            }
        }
    }

    #[test]
    fn size_is_rounded_up() {
        let domain = Domain::new(3000);
        assert_eq!(domain.size(), 4096);
        assert_eq!(domain.domain_size * domain.domain_size_inv, Scalar::ONE);
    }

    #[test]
    fn vanishing_polynomial_is_zero_on_the_domain() {
        let domain = Domain::new(16);
        for root in &domain.roots {
            assert_eq!(domain.vanishing_polynomial_eval(root), Scalar::ZERO);
        }
        assert_ne!(
            domain.vanishing_polynomial_eval(&Scalar::from(2u64)),
            Scalar::ZERO
        );
    }

    #[test]
    fn position_and_index_difference() {
        let domain = Domain::new(8);
        assert_eq!(domain.position(&domain.roots[5]), Some(5));
        assert_eq!(domain.position(&Scalar::from(2u64)), None);

        assert_eq!(domain.root_of_index_difference(1, 3), domain.roots[6]);
        assert_eq!(domain.root_of_index_difference(3, 1), domain.roots[2]);
    }
}
