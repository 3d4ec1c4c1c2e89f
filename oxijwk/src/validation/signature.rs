use subtle::ConstantTimeEq;

use crate::{
    Algorithm,
    AlgorithmFamily,
    crypto::CryptoProvider,
    error::Status,
    jwk::{
        Jwk,
        KeyMaterial,
    },
    jwt::Jwt,
};

/// Checks `jwt`'s signature against a single `key` under `alg`.
///
/// The signed message is the token's original `header.payload` text.
///
/// # Errors
///
/// [`Status::JwtVerificationFail`] when `key` cannot produce `alg` signatures,
/// the signature is malformed for `alg`, or the primitive rejects it.
pub fn verify_signature(
    jwt: &Jwt,
    key: &Jwk,
    alg: Algorithm,
    provider: &impl CryptoProvider,
) -> Result<(), Status> {
    let message = jwt.signed_message();
    let signature = jwt.signature();
    let digest = alg.digest();

    let verified = match (alg.family(), key.material()) {
        (AlgorithmFamily::RsaPkcs1, KeyMaterial::Rsa(rsa)) => {
            provider.verify_rsa_pkcs1(rsa, digest, message, signature)
        }
        (AlgorithmFamily::RsaPss, KeyMaterial::Rsa(rsa)) => {
            provider.verify_rsa_pss(rsa, digest, message, signature)
        }
        (AlgorithmFamily::Ecdsa(curve), KeyMaterial::Ec(ec)) if ec.curve() == curve => {
            let width = curve.field_width();
            if signature.len() != 2 * width {
                return Err(Status::JwtVerificationFail);
            }
            let (r, s) = signature.split_at(width);
            if is_zero(r) || is_zero(s) {
                return Err(Status::JwtVerificationFail);
            }
            provider.verify_ecdsa(curve, ec.x(), ec.y(), digest, message, r, s)
        }
        (AlgorithmFamily::Hmac, KeyMaterial::Oct(oct)) => provider
            .hmac(oct.secret(), digest, message)
            .is_some_and(|mac| bool::from(mac.as_slice().ct_eq(signature))),
        (
            AlgorithmFamily::RsaPkcs1
            | AlgorithmFamily::RsaPss
            | AlgorithmFamily::Ecdsa(_)
            | AlgorithmFamily::Hmac,
            KeyMaterial::Rsa(_) | KeyMaterial::Ec(_) | KeyMaterial::Oct(_),
        ) => false,
    };

    if verified {
        Ok(())
    } else {
        Err(Status::JwtVerificationFail)
    }
}

fn is_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}
