//! GF(2^8) field operations over raw bytes, using the lookup tables in
//! [`crate::crypto::tables`].

use tracing::debug;

use crate::crypto::tables::{exp, log, GROUP_ORDER};
use crate::error::ShamirError;

/// Addition in GF(2^8) = XOR
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Subtraction in GF(2^8) = XOR (same as addition)
#[inline]
pub fn sub(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplication in GF(2^8) via log/antilog tables.
#[inline]
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    exp(log(a) as usize + log(b) as usize)
}

/// Multiplicative inverse in GF(2^8). Returns None for 0.
#[inline]
pub fn inverse(a: u8) -> Option<u8> {
    if a == 0 {
        return None;
    }
    Some(exp(GROUP_ORDER - log(a) as usize))
}

/// Division `a / b`, failing with [`ShamirError::DivisionByZero`] when `b == 0`.
#[inline]
pub fn checked_div(a: u8, b: u8) -> Result<u8, ShamirError> {
    match inverse(b) {
        Some(inv) => Ok(mul(a, inv)),
        None => {
            debug!("GF(256) division by zero");
            Err(ShamirError::DivisionByZero)
        }
    }
}

/// Division `a / b`.
///
/// # Panics
/// If `b == 0`, like integer division. Use [`checked_div`] when the divisor
/// is not known to be nonzero.
#[inline]
pub fn div(a: u8, b: u8) -> u8 {
    match checked_div(a, b) {
        Ok(q) => q,
        Err(e) => panic!("{}", e),
    }
}
