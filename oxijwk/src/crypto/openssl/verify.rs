use std::ops::RangeInclusive;

use openssl::{
    bn::BigNum,
    ec::{
        EcGroup,
        EcKey,
    },
    ecdsa::EcdsaSig,
    error::ErrorStack,
    hash::{
        MessageDigest,
        hash,
    },
    pkey::PKey,
    rsa::{
        Padding,
        Rsa,
    },
    sign::{
        RsaPssSaltlen,
        Signer,
        Verifier,
    },
};

use super::{
    Openssl,
    curve_nid,
    message_digest,
};
use crate::{
    Curve,
    DigestAlgorithm,
    crypto::CryptoProvider,
    jwk::RsaPublicKey,
};

/// Modulus sizes accepted by either backend.
const RSA_MODULUS_BITS: RangeInclusive<i32> = 2048..=8192;

/// [`None`] when the modulus falls outside [`RSA_MODULUS_BITS`].
fn rsa_pkey(key: &RsaPublicKey) -> Result<Option<PKey<openssl::pkey::Public>>, ErrorStack> {
    let n = BigNum::from_slice(&key.n)?;
    if !RSA_MODULUS_BITS.contains(&n.num_bits()) {
        return Ok(None);
    }
    let rsa = Rsa::from_public_components(n, BigNum::from_slice(&key.e)?)?;
    PKey::from_rsa(rsa).map(Some)
}

fn verify_rsa(
    key: &RsaPublicKey,
    digest: MessageDigest,
    pss: bool,
    message: &[u8],
    signature: &[u8],
) -> Result<bool, ErrorStack> {
    let Some(pkey) = rsa_pkey(key)? else {
        return Ok(false);
    };
    let mut verifier = Verifier::new(digest, &pkey)?;
    if pss {
        verifier.set_rsa_padding(Padding::PKCS1_PSS)?;
        verifier.set_rsa_pss_saltlen(RsaPssSaltlen::DIGEST_LENGTH)?;
        verifier.set_rsa_mgf1_md(digest)?;
    }
    verifier.verify_oneshot(signature, message)
}

#[allow(clippy::too_many_arguments)]
fn verify_ec(
    curve: Curve,
    x: &[u8],
    y: &[u8],
    digest: MessageDigest,
    message: &[u8],
    r: &[u8],
    s: &[u8],
) -> Result<bool, ErrorStack> {
    let group = EcGroup::from_curve_name(curve_nid(curve))?;
    let (x, y) = (BigNum::from_slice(x)?, BigNum::from_slice(y)?);
    let key = EcKey::from_public_key_affine_coordinates(&group, &x, &y)?;
    let sig = EcdsaSig::from_private_components(BigNum::from_slice(r)?, BigNum::from_slice(s)?)?;
    let digest = hash(digest, message)?;
    sig.verify(&digest, &key)
}

fn sign_hmac(key: &[u8], digest: MessageDigest, message: &[u8]) -> Result<Vec<u8>, ErrorStack> {
    let pkey = PKey::hmac(key)?;
    Signer::new(digest, &pkey)?.sign_oneshot_to_vec(message)
}

impl CryptoProvider for Openssl {
    fn verify_rsa_pkcs1(
        &self,
        key: &RsaPublicKey,
        digest: DigestAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> bool {
        verify_rsa(key, message_digest(digest), false, message, signature).unwrap_or(false)
    }

    fn verify_rsa_pss(
        &self,
        key: &RsaPublicKey,
        digest: DigestAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> bool {
        verify_rsa(key, message_digest(digest), true, message, signature).unwrap_or(false)
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
        verify_ec(curve, x, y, message_digest(digest), message, r, s).unwrap_or(false)
    }

    fn hmac(&self, key: &[u8], digest: DigestAlgorithm, message: &[u8]) -> Option<Vec<u8>> {
        sign_hmac(key, message_digest(digest), message).ok()
    }
}
