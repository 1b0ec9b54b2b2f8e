//! Library entry point for shamir_gf256 crate.
//
// GF(256) arithmetic (AES field, polynomial 0x11B, generator 0x03) and the
// polynomial / interpolation primitives used for byte-wise Shamir secret sharing.

pub mod error;
pub mod crypto;

pub use error::ShamirError;
