//! Conversions to and from other math and serialization crates.

#[cfg(feature = "glam")]
mod glam;

#[cfg(feature = "serde")]
mod serde;
