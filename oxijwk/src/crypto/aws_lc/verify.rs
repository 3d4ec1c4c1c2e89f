use aws_lc_rs::{
    hmac,
    rsa::PublicKeyComponents,
    signature::UnparsedPublicKey,
};

use super::{
    AwsLc,
    ecdsa_alg,
    hmac_alg,
    pkcs1_params,
    pss_params,
};
use crate::{
    Curve,
    DigestAlgorithm,
    crypto::CryptoProvider,
    jwk::RsaPublicKey,
};

/// SEC1 uncompressed point tag
const UNCOMPRESSED: u8 = 0x04;

/// Strips leading zero octets from a big-endian unsigned integer.
fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

fn rsa_components(key: &RsaPublicKey) -> PublicKeyComponents<&[u8]> {
    PublicKeyComponents {
        n: trim_leading_zeros(&key.n),
        e: trim_leading_zeros(&key.e),
    }
}

impl CryptoProvider for AwsLc {
    fn verify_rsa_pkcs1(
        &self,
        key: &RsaPublicKey,
        digest: DigestAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> bool {
        rsa_components(key)
            .verify(pkcs1_params(digest), message, signature)
            .is_ok()
    }

    fn verify_rsa_pss(
        &self,
        key: &RsaPublicKey,
        digest: DigestAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> bool {
        rsa_components(key)
            .verify(pss_params(digest), message, signature)
            .is_ok()
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
        let Some(alg) = ecdsa_alg(curve, digest) else {
            return false;
        };
        let mut point = Vec::with_capacity(1 + x.len() + y.len());
        point.push(UNCOMPRESSED);
        point.extend_from_slice(x);
        point.extend_from_slice(y);

        let mut sig = Vec::with_capacity(r.len() + s.len());
        sig.extend_from_slice(r);
        sig.extend_from_slice(s);

        UnparsedPublicKey::new(alg, &point)
            .verify(message, &sig)
            .is_ok()
    }

    fn hmac(&self, key: &[u8], digest: DigestAlgorithm, message: &[u8]) -> Option<Vec<u8>> {
        let key = hmac::Key::new(hmac_alg(digest), key);
        Some(hmac::sign(&key, message).as_ref().to_vec())
    }
}
