use ff::Field;

/// Replaces every element of `v` with its inverse using one field inversion.
///
/// Panics if any element is zero.
pub fn batch_inverse<F: Field>(v: &mut [F]) {
    if v.is_empty() {
        return;
    }

    // prefix[i] = v[0] * ... * v[i]
    let mut prefix = Vec::with_capacity(v.len());
    let mut acc = F::ONE;
    for f in v.iter() {
        acc *= f;
        prefix.push(acc);
    }

    let mut acc_inv = acc
        .invert()
        .expect("batch_inverse called with a zero element");

    // Walk backwards: acc_inv holds (v[0] * ... * v[i])^-1 on entry.
    for i in (0..v.len()).rev() {
        let before = if i == 0 { F::ONE } else { prefix[i - 1] };
        let inverse = acc_inv * before;
        acc_inv *= v[i];
        v[i] = inverse;
    }
}

#[cfg(test)]
mod tests {
    use blstrs::Scalar;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn inverts_small_values() {
        let mut values: Vec<Scalar> = (1..=100u64).map(Scalar::from).collect();
        let expected: Vec<Scalar> = values
            .iter()
            .map(|v| v.invert().expect("non-zero"))
            .collect();

        batch_inverse(&mut values);
        assert_eq!(values, expected);
    }

    #[test]
    fn empty_slice_is_a_no_op() {
        let mut values: Vec<Scalar> = Vec::new();
        batch_inverse(&mut values);
        assert!(values.is_empty());
    }

    #[should_panic]
    #[test]
    fn zero_element_panics() {
        let mut values = vec![Scalar::ONE, Scalar::ZERO, Scalar::from(3u64)];
        batch_inverse(&mut values);
    }

    proptest! {
        #[test]
        fn matches_individual_inversion(seeds in proptest::collection::vec(1u64..u64::MAX, 1..64)) {
            let mut values: Vec<Scalar> = seeds.iter().map(|s| Scalar::from(*s).square()).collect();
            let expected: Vec<Scalar> = values.iter().map(|v| v.invert().expect("non-zero")).collect();

            batch_inverse(&mut values);

            prop_assert_eq!(values, expected);
        }
    }
}
