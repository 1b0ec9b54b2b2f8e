//! Logarithm / antilogarithm tables for GF(2^8) with the AES polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B) and generator 0x03.
//!
//! Both tables are computed by `const fn` and stored in a `static`: read-only data
//! that any thread may read without synchronisation.

/// Irreducible polynomial reducing products back into the field.
pub const FIELD_POLYNOMIAL: u16 = 0x11B;

/// Element whose powers enumerate every nonzero field element.
pub const GENERATOR: u8 = 0x03;

/// Stored as `log[0]`; zero has no discrete logarithm.
pub const LOG_ZERO_SENTINEL: u8 = 0xFF;

/// Order of the multiplicative group.
pub const GROUP_ORDER: usize = 255;

/// The antilog table covers every sum of two logarithms (0..=508), so
/// multiplication never needs a `% 255`.
pub const EXP_LEN: usize = 2 * GROUP_ORDER;

pub struct Tables {
    pub log: [u8; 256],
    pub exp: [u8; EXP_LEN],
}

/// Shift-and-add multiplication modulo `FIELD_POLYNOMIAL`.
/// Only used to build the tables; the hot path goes through the lookups.
pub(crate) const fn reduce_mul(a: u8, b: u8) -> u8 {
    let mut a = a as u16;
    let mut b = b;
    let mut product: u16 = 0;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a <<= 1;
        if a & 0x100 != 0 {
            a ^= FIELD_POLYNOMIAL;
        }
        b >>= 1;
    }
    product as u8
}

impl Tables {
    const fn build() -> Self {
        let mut log = [0u8; 256];
        let mut exp = [0u8; EXP_LEN];
        log[0] = LOG_ZERO_SENTINEL;

        let mut val: u8 = 1;
        let mut i = 0;
        while i < GROUP_ORDER {
            exp[i] = val;
            exp[i + GROUP_ORDER] = val;
            log[val as usize] = i as u8;
            val = reduce_mul(val, GENERATOR);
            i += 1;
        }

        Tables { log, exp }
    }
}

pub static TABLES: Tables = Tables::build();

/// Discrete logarithm of `a`; `LOG_ZERO_SENTINEL` for zero.
#[inline]
pub fn log(a: u8) -> u8 {
    TABLES.log[a as usize]
}

/// Antilogarithm, valid for `i < EXP_LEN`.
#[inline]
pub fn exp(i: usize) -> u8 {
    TABLES.exp[i]
}
