use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShamirError {
    #[error("Division by zero in GF(256)")]
    DivisionByZero,
    #[error("Duplicate x-coordinate {0:#04x} in interpolation samples")]
    DuplicateX(u8),
    #[error("x-coordinate 0 is reserved for the secret")]
    ZeroX,
    #[error("Random source failed to produce a degree {degree} polynomial after {attempts} attempts")]
    RandomSourceExhausted { degree: usize, attempts: usize },
}
