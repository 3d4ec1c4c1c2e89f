//! [`openssl`] crypto backend implementation
//!
//! [`Openssl`] implements [`CryptoProvider`] with `EVP` and `EC_KEY`
//! primitives. Any `ErrorStack` raised while rebuilding a key or digesting
//! the message is reported as a failed verification.
//!
//! [`CryptoProvider`]: crate::crypto::CryptoProvider

mod verify;

use openssl::{
    hash::MessageDigest,
    nid::Nid,
};

use crate::{
    Curve,
    DigestAlgorithm,
};

/// [`openssl`] backed [`CryptoProvider`](crate::crypto::CryptoProvider)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Openssl;

fn message_digest(digest: DigestAlgorithm) -> MessageDigest {
    match digest {
        DigestAlgorithm::Sha256 => MessageDigest::sha256(),
        DigestAlgorithm::Sha384 => MessageDigest::sha384(),
        DigestAlgorithm::Sha512 => MessageDigest::sha512(),
    }
}

const fn curve_nid(curve: Curve) -> Nid {
    match curve {
        Curve::P256 => Nid::X9_62_PRIME256V1,
        Curve::P384 => Nid::SECP384R1,
        Curve::P521 => Nid::SECP521R1,
    }
}
