//! [`aws-lc-rs`] crypto backend implementation
//!
//! [`AwsLc`] implements [`CryptoProvider`] on top of the `aws-lc-rs`
//! verification primitives. Public keys are rebuilt from their JWK
//! components on every call; nothing is cached across verifications.
//!
//! RSA keys are accepted from 2048 through 8192 bits, the range `aws-lc-rs`
//! supports for verification. Smaller moduli never verify.
//!
//! [`CryptoProvider`]: crate::crypto::CryptoProvider
//! [`aws-lc-rs`]: aws_lc_rs

mod verify;

use aws_lc_rs::{
    hmac,
    signature::{
        self,
        EcdsaVerificationAlgorithm,
        RsaParameters,
    },
};

use crate::{
    Curve,
    DigestAlgorithm,
};

/// [`aws-lc-rs`](aws_lc_rs) backed [`CryptoProvider`](crate::crypto::CryptoProvider)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AwsLc;

fn pkcs1_params(digest: DigestAlgorithm) -> &'static RsaParameters {
    match digest {
        DigestAlgorithm::Sha256 => &signature::RSA_PKCS1_2048_8192_SHA256,
        DigestAlgorithm::Sha384 => &signature::RSA_PKCS1_2048_8192_SHA384,
        DigestAlgorithm::Sha512 => &signature::RSA_PKCS1_2048_8192_SHA512,
    }
}

fn pss_params(digest: DigestAlgorithm) -> &'static RsaParameters {
    match digest {
        DigestAlgorithm::Sha256 => &signature::RSA_PSS_2048_8192_SHA256,
        DigestAlgorithm::Sha384 => &signature::RSA_PSS_2048_8192_SHA384,
        DigestAlgorithm::Sha512 => &signature::RSA_PSS_2048_8192_SHA512,
    }
}

/// Only the curve/digest pairings JWS defines are mapped.
fn ecdsa_alg(
    curve: Curve,
    digest: DigestAlgorithm,
) -> Option<&'static EcdsaVerificationAlgorithm> {
    match (curve, digest) {
        (Curve::P256, DigestAlgorithm::Sha256) => Some(&signature::ECDSA_P256_SHA256_FIXED),
        (Curve::P384, DigestAlgorithm::Sha384) => Some(&signature::ECDSA_P384_SHA384_FIXED),
        (Curve::P521, DigestAlgorithm::Sha512) => Some(&signature::ECDSA_P521_SHA512_FIXED),
        _ => None,
    }
}

fn hmac_alg(digest: DigestAlgorithm) -> hmac::Algorithm {
    match digest {
        DigestAlgorithm::Sha256 => hmac::HMAC_SHA256,
        DigestAlgorithm::Sha384 => hmac::HMAC_SHA384,
        DigestAlgorithm::Sha512 => hmac::HMAC_SHA512,
    }
}
