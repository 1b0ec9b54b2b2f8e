pub mod tables;
pub mod gf256;
pub mod polynomial;
pub mod interpolate;
