use rand_core::{CryptoRng, RngCore};
use tracing::{debug, warn};

use crate::crypto::gf256;
use crate::error::ShamirError;

/// Retry cap for [`Polynomial::generate`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 1024;

/// A univariate polynomial over GF(2^8)
/// Note: The polynomial terms are: coefficients[i] * x^i
///       E.g. 3 + 2x + x^3 is encoded as:
///       Polynomial{ coefficients: [3,2,0,1] }
///
/// Coefficient 0 is the intercept, i.e. the secret byte of a share polynomial.
/// Trailing zeros are kept: the length is fixed by whoever built the polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<u8>,
}

impl From<Vec<u8>> for Polynomial {
    fn from(coefficients: Vec<u8>) -> Self {
        Polynomial { coefficients }
    }
}

impl Polynomial {
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// The constant term, or 0 for an empty polynomial.
    pub fn intercept(&self) -> u8 {
        self.coefficients.first().copied().unwrap_or(0)
    }

    /// Highest index above 0 holding a nonzero coefficient, or 0 if there is none.
    ///
    /// Index 0 is never inspected: `[7, 0, 0]` and `[0, 0, 0]` both have degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .find(|(_, c)| **c != 0)
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Evaluate the polynomial at x
    /// Note: This uses Horner's method: https://en.wikipedia.org/wiki/Horner%27s_method
    pub fn evaluate_at(&self, x: u8) -> u8 {
        self.coefficients
            .iter()
            .rev()
            .fold(0u8, |acc, coeff| gf256::add(gf256::mul(acc, x), *coeff))
    }

    /// Evaluations at x = 1..=n, as `(x, y)` samples.
    pub fn evaluate_shares(&self, n: u8) -> Vec<(u8, u8)> {
        (1..=n).map(|x| (x, self.evaluate_at(x))).collect()
    }

    /// Samples a random polynomial of exactly `degree` whose constant term is `intercept`.
    ///
    /// See [`Polynomial::generate_with_max_attempts`]; this uses [`DEFAULT_MAX_ATTEMPTS`].
    pub fn generate<R>(rng: &mut R, degree: usize, intercept: u8) -> Result<Self, ShamirError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        Self::generate_with_max_attempts(rng, degree, intercept, DEFAULT_MAX_ATTEMPTS)
    }

    /// Samples `degree + 1` random coefficients, redrawing all of them until the
    /// leading one is nonzero, then overwrites coefficient 0 with `intercept`.
    ///
    /// # Errors
    /// `ShamirError::RandomSourceExhausted` if `max_attempts` draws (at least one)
    /// all had a zero leading coefficient.
    pub fn generate_with_max_attempts<R>(
        rng: &mut R,
        degree: usize,
        intercept: u8,
        max_attempts: usize,
    ) -> Result<Self, ShamirError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let attempts = max_attempts.max(1);
        let mut candidate = Polynomial {
            coefficients: vec![0u8; degree + 1],
        };

        for attempt in 1..=attempts {
            rng.fill_bytes(&mut candidate.coefficients);
            if candidate.degree() == degree {
                candidate.coefficients[0] = intercept;
                return Ok(candidate);
            }
            debug!(attempt, degree, "rejected polynomial with zero leading coefficient");
        }

        warn!(attempts, degree, "random source never produced a nonzero leading coefficient");
        Err(ShamirError::RandomSourceExhausted { degree, attempts })
    }
}
