#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![doc = include_str!("../README.md")]

/// Error enums
pub mod error;

/// Typed JSON Web Keys
pub mod jwk;

/// JSON Web Key Set parsing
pub mod jwks;

/// Compact JWT parsing
pub mod jwt;

/// Key selection and signature verification
pub mod validation;

/// Crypto backend implementations (e.g. `aws_lc`, `openssl`)
pub mod crypto;

// WARNING: The decoding module is not considered part of the public API
// and is subject to breaking changes outside SemVer restrictions. It is
// marked `pub` purely for benchmarking purposes.
#[doc(hidden)]
pub mod decoding;

pub use algorithm::{
    Algorithm,
    AlgorithmFamily,
    Curve,
    DigestAlgorithm,
    UnsupportedAlgorithm,
};
pub use error::Status;
pub use jwk::Jwk;
pub use jwks::{
    Jwks,
    JwksFormat,
};
pub use jwt::Jwt;
pub use validation::Verifier;

mod algorithm;

/// Verifies `jwt` against `jwks` with the default crypto backend
/// ([`crypto::DefaultProvider`]).
///
/// # Errors
///
/// See [`Verifier::verify`].
#[cfg(any(feature = "aws-lc", feature = "openssl"))]
pub fn verify_jwt(jwt: &Jwt, jwks: &Jwks) -> Result<(), Status> {
    Verifier::<crypto::DefaultProvider>::default().verify(jwt, jwks)
}
