use std::collections::HashSet;

use tracing::debug;

use crate::crypto::gf256;
use crate::error::ShamirError;

fn find_duplicate(xs: &[u8]) -> Option<u8> {
    let mut set = HashSet::new();

    for x in xs {
        if !set.insert(*x) {
            return Some(*x);
        }
    }

    None
}

/// Compute the Lagrange basis values at `x`.
///
/// # Arguments
/// * `xs` is a list of values x_0, x_1, ...x_n.
/// # Result
/// * `[l_0, l_1, ..., l_n]` where l_i = prod_{j != i} (x - x_j) / (x_i - x_j)
/// # Errors
/// `ShamirError::DuplicateX`: in case the interpolation points `xs` are not all distinct.
pub fn lagrange_coefficients(xs: &[u8], x: u8) -> Result<Vec<u8>, ShamirError> {
    if let Some(dup) = find_duplicate(xs) {
        debug!(x = dup, "duplicate x-coordinate in interpolation samples");
        return Err(ShamirError::DuplicateX(dup));
    }

    let mut output = Vec::with_capacity(xs.len());
    for (i, &x_i) in xs.iter().enumerate() {
        let mut l_i = 1u8;
        for (j, &x_j) in xs.iter().enumerate() {
            if i != j {
                let term = gf256::checked_div(gf256::sub(x, x_j), gf256::sub(x_i, x_j))?;
                l_i = gf256::mul(l_i, term);
            }
        }
        output.push(l_i);
    }
    Ok(output)
}

/// Compute the Lagrange basis values at x=0.
pub fn lagrange_coefficients_at_zero(xs: &[u8]) -> Result<Vec<u8>, ShamirError> {
    lagrange_coefficients(xs, 0)
}

/// Given a list of samples `(x, f(x))`, returns `f(at)` for the unique polynomial `f`
/// of degree below `samples.len()` through them. An empty sample set yields 0.
pub fn interpolate_at(samples: &[(u8, u8)], at: u8) -> Result<u8, ShamirError> {
    let xs: Vec<u8> = samples.iter().map(|(x, _)| *x).collect();
    let coefficients = lagrange_coefficients(&xs, at)?;

    Ok(coefficients
        .iter()
        .zip(samples.iter().map(|(_, y)| *y))
        .fold(0u8, |acc, (l_i, y_i)| gf256::add(acc, gf256::mul(*l_i, y_i))))
}

/// Recovers the secret byte `f(0)` from shares `(x, f(x))`.
/// See: https://en.wikipedia.org/wiki/Shamir%27s_Secret_Sharing
///
/// Fewer samples than the sharing threshold still produce a byte, just not the secret.
///
/// # Errors
/// * `ShamirError::ZeroX` if a sample sits at x=0, which is reserved for the secret.
/// * `ShamirError::DuplicateX` if two samples share an x-coordinate.
pub fn interpolate(samples: &[(u8, u8)]) -> Result<u8, ShamirError> {
    if samples.iter().any(|(x, _)| *x == 0) {
        debug!("sample at x=0 passed to secret recovery");
        return Err(ShamirError::ZeroX);
    }
    interpolate_at(samples, 0)
}

#[cfg(test)]
mod test {
    use rand::Rng;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rayon::prelude::*;

    use crate::crypto::interpolate::{
        interpolate, interpolate_at, lagrange_coefficients, lagrange_coefficients_at_zero,
    };
    use crate::crypto::polynomial::Polynomial;
    use crate::error::ShamirError;

    fn seeded_rng() -> ChaCha8Rng {
        let mut seed = [0u8; 32];
        rand::thread_rng().fill(&mut seed);
        ChaCha8Rng::from_seed(seed)
    }

    /// All `k`-element subsets of `items`, in index order.
    fn subsets<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
        if k == 0 {
            return vec![Vec::new()];
        }
        if items.len() < k {
            return Vec::new();
        }
        let mut with_first: Vec<Vec<T>> = subsets(&items[1..], k - 1)
            .into_iter()
            .map(|mut rest| {
                rest.insert(0, items[0]);
                rest
            })
            .collect();
        with_first.extend(subsets(&items[1..], k));
        with_first
    }

    #[test]
    fn test_round_trip_every_threshold_subset() {
        let mut rng = seeded_rng();
        let poly = Polynomial::generate(&mut rng, 2, 0x2A).unwrap();
        let shares = poly.evaluate_shares(5);

        let combos = subsets(&shares, 3);
        assert_eq!(combos.len(), 10);
        for combo in combos {
            assert_eq!(interpolate(&combo), Ok(0x2A), "subset {:?}", combo);
        }
    }

    #[test]
    fn test_round_trip_all_thresholds() {
        let mut rng = seeded_rng();
        for threshold in 1..=16usize {
            let secret: u8 = rng.gen();
            let poly = Polynomial::generate(&mut rng, threshold - 1, secret).unwrap();
            let shares = poly.evaluate_shares(255);
            assert_eq!(interpolate(&shares[..threshold]), Ok(secret));
            assert_eq!(interpolate(&shares[255 - threshold..]), Ok(secret));
            assert_eq!(interpolate(&shares), Ok(secret));
        }
    }

    #[test]
    fn test_interpolation_is_correct() {
        // f(x) = 2 + 4x + 9x^2
        let poly = Polynomial::from(vec![2, 4, 9]);
        let samples = [
            (5, poly.evaluate_at(5)),
            (3, poly.evaluate_at(3)),
            (8, poly.evaluate_at(8)),
        ];
        assert_eq!(interpolate(&samples), Ok(2));
        for at in 0..=255u8 {
            assert_eq!(interpolate_at(&samples, at), Ok(poly.evaluate_at(at)));
        }
    }

    #[test]
    fn test_single_sample_is_constant() {
        assert_eq!(lagrange_coefficients_at_zero(&[7]), Ok(vec![1]));
        assert_eq!(interpolate(&[(7, 0x99)]), Ok(0x99));
    }

    #[test]
    fn test_empty_samples() {
        assert_eq!(lagrange_coefficients_at_zero(&[]), Ok(vec![]));
        assert_eq!(interpolate(&[]), Ok(0));
    }

    #[test]
    fn test_lagrange_coefficients_are_basis() {
        let xs = [1u8, 2, 3, 4];
        for (i, &x_i) in xs.iter().enumerate() {
            let coefficients = lagrange_coefficients(&xs, x_i).unwrap();
            for (j, l_j) in coefficients.iter().enumerate() {
                assert_eq!(*l_j, if i == j { 1 } else { 0 });
            }
        }
    }

    #[test]
    fn test_duplicate_x_is_rejected() {
        let samples = [(1, 0x10), (2, 0x20), (1, 0x30)];
        assert_eq!(interpolate(&samples), Err(ShamirError::DuplicateX(1)));
        assert_eq!(interpolate_at(&samples, 9), Err(ShamirError::DuplicateX(1)));
        assert_eq!(
            lagrange_coefficients_at_zero(&[4, 4]),
            Err(ShamirError::DuplicateX(4))
        );
    }

    #[test]
    fn test_zero_x_is_rejected() {
        let samples = [(0, 0x2A), (1, 0x10)];
        assert_eq!(interpolate(&samples), Err(ShamirError::ZeroX));
        // A sample at x=0 is fine for general evaluation.
        assert_eq!(interpolate_at(&samples, 0), Ok(0x2A));
    }

    #[test]
    fn test_too_few_samples_do_not_recover() {
        // f(x) = 0x2A + x^2 with two samples: the line through them misses f(0).
        let poly = Polynomial::from(vec![0x2A, 0, 1]);
        let samples = poly.evaluate_shares(2);
        assert_ne!(interpolate(&samples), Ok(0x2A));
    }

    #[test]
    fn test_parallel_bytewise_round_trip() {
        let mut seed = [0u8; 32];
        rand::thread_rng().fill(&mut seed);
        let secret = seed;

        let shares_per_byte: Vec<Vec<(u8, u8)>> = secret[..]
            .par_iter()
            .enumerate()
            .map(|(i, byte)| {
                let mut byte_seed = seed;
                byte_seed[0] ^= i as u8;
                let mut rng = ChaCha8Rng::from_seed(byte_seed);
                Polynomial::generate(&mut rng, 3, *byte)
                    .unwrap()
                    .evaluate_shares(6)
            })
            .collect();

        let recovered: Vec<u8> = shares_per_byte
            .par_iter()
            .map(|shares| interpolate(&shares[2..6]).unwrap())
            .collect();

        assert_eq!(recovered, secret.to_vec());
    }
}
