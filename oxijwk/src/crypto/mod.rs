//! Cryptographic primitive backends.
//!
//! The verification engine never performs modular or curve arithmetic itself;
//! it hands normalized key material and signature components to a
//! [`CryptoProvider`]. Backends are selected with cargo features:
//!
//! - `aws-lc` (default): [`AwsLc`], backed by [`aws-lc-rs`]
//! - `openssl`: [`Openssl`], backed by [`openssl`]
//!
//! [`aws-lc-rs`]: https://docs.rs/aws-lc-rs
//! [`openssl`]: https://docs.rs/openssl

#[cfg(feature = "aws-lc")]
pub mod aws_lc;

#[cfg(feature = "openssl")]
pub mod openssl;

#[cfg(feature = "aws-lc")]
pub use aws_lc::AwsLc;

#[cfg(feature = "openssl")]
pub use self::openssl::Openssl;

/// Backend used by [`verify_jwt`](crate::verify_jwt) and `Verifier::default()`
#[cfg(feature = "aws-lc")]
pub type DefaultProvider = AwsLc;

/// Backend used by [`verify_jwt`](crate::verify_jwt) and `Verifier::default()`
#[cfg(all(feature = "openssl", not(feature = "aws-lc")))]
pub type DefaultProvider = Openssl;

use crate::{
    Curve,
    DigestAlgorithm,
    jwk::RsaPublicKey,
};

/// Signature primitives consumed by the verifier.
///
/// Implementations must be pure: no I/O, no interior caches. A `false` (or
/// [`None`]) return is the only failure signal and is never surfaced to the
/// caller beyond [`Status::JwtVerificationFail`].
///
/// [`Status::JwtVerificationFail`]: crate::Status::JwtVerificationFail
pub trait CryptoProvider: Send + Sync {
    /// Verify an `RSASSA-PKCS1-v1_5` signature over `message`.
    ///
    /// `signature` is passed exactly as decoded from the token.
    fn verify_rsa_pkcs1(
        &self,
        key: &RsaPublicKey,
        digest: DigestAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> bool;

    /// Verify an `RSASSA-PSS` signature (MGF1 with `digest`, salt length equal
    /// to the digest length) over `message`.
    fn verify_rsa_pss(
        &self,
        key: &RsaPublicKey,
        digest: DigestAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> bool;

    /// Verify an `ECDSA` signature over `message`.
    ///
    /// `x`, `y`, `r` and `s` are big-endian and exactly
    /// [`Curve::field_width`] bytes each.
    #[allow(clippy::too_many_arguments)]
    fn verify_ecdsa(
        &self,
        curve: Curve,
        x: &[u8],
        y: &[u8],
        digest: DigestAlgorithm,
        message: &[u8],
        r: &[u8],
        s: &[u8],
    ) -> bool;

    /// Compute `HMAC(key, message)`; [`None`] if the backend cannot.
    ///
    /// Comparison against the presented signature is done by the caller in
    /// constant time.
    fn hmac(&self, key: &[u8], digest: DigestAlgorithm, message: &[u8]) -> Option<Vec<u8>>;
}

impl<T: CryptoProvider + ?Sized> CryptoProvider for &T {
    fn verify_rsa_pkcs1(
        &self,
        key: &RsaPublicKey,
        digest: DigestAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> bool {
        (**self).verify_rsa_pkcs1(key, digest, message, signature)
    }

    fn verify_rsa_pss(
        &self,
        key: &RsaPublicKey,
        digest: DigestAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> bool {
        (**self).verify_rsa_pss(key, digest, message, signature)
    }

    fn verify_ecdsa(
        &self,
        curve: Curve,
        x: &[u8],
        y: &[u8],
        digest: DigestAlgorithm,
        message: &[u8],
        r: &[u8],
        s: &[u8],
    ) -> bool {
        (**self).verify_ecdsa(curve, x, y, digest, message, r, s)
    }

    fn hmac(&self, key: &[u8], digest: DigestAlgorithm, message: &[u8]) -> Option<Vec<u8>> {
        (**self).hmac(key, digest, message)
    }
}
