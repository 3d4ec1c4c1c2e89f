//! Shared vectors, key generation and provider doubles for integration tests
#![allow(dead_code, clippy::unwrap_used)]
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};

use aws_lc_rs::{
    rand::{
        SecureRandom,
        SystemRandom,
    },
    rsa::KeySize,
    signature::{
        ECDSA_P256_SHA256_FIXED_SIGNING,
        ECDSA_P384_SHA384_FIXED_SIGNING,
        ECDSA_P521_SHA512_FIXED_SIGNING,
        EcdsaKeyPair,
        KeyPair,
        RSA_PKCS1_SHA256,
        RSA_PKCS1_SHA384,
        RSA_PKCS1_SHA512,
        RSA_PSS_SHA256,
        RSA_PSS_SHA384,
        RSA_PSS_SHA512,
        RsaEncoding,
        RsaKeyPair,
    },
};
use base64_simd::URL_SAFE_NO_PAD;
use oxijwk::{
    Algorithm,
    AlgorithmFamily,
    Curve,
    DigestAlgorithm,
    Jwt,
    crypto::CryptoProvider,
    jwk::RsaPublicKey,
};
use serde_json::{
    Value,
    json,
};

/// Two P-256 keys sharing one public point, `kid`s `abc` and `xyz`
pub const EC_JWKS: &str = r#"
{
  "keys": [
    {
      "kty": "EC",
      "crv": "P-256",
      "alg": "ES256",
      "kid": "abc",
      "x": "EB54wykhS7YJFD6RYJNnwbWEz3cI7CF5bCDTXlrwI5k",
      "y": "92bCBTvMFQ8lKbS2MbgjT3YfmYo6HnPEE2tsAqWUJw8"
    },
    {
      "kty": "EC",
      "crv": "P-256",
      "alg": "ES256",
      "kid": "xyz",
      "x": "EB54wykhS7YJFD6RYJNnwbWEz3cI7CF5bCDTXlrwI5k",
      "y": "92bCBTvMFQ8lKbS2MbgjT3YfmYo6HnPEE2tsAqWUJw8"
    }
  ]
}
"#;

/// ES256, `kid: "abc"`
pub const EC_TOKEN: &str = concat!(
    "eyJhbGciOiJFUzI1NiIsInR5cCI6IkpXVCIsImtpZCI6ImFiYyJ9.",
    "eyJpc3MiOiI2Mjg2NDU3NDE4ODEtbm9hYml1MjNmNWE4bThvdmQ4dWN2Njk4bGo3OHZ2MGxAZGV2ZWxvcGVyLmdzZXJ2aWNlYWNjb3VudC5jb20iLCJzdWIiOiI2Mjg2NDU3NDE4ODEtbm9hYml1MjNmNWE4bThvdmQ4dWN2Njk4bGo3OHZ2MGxAZGV2ZWxvcGVyLmdzZXJ2aWNlYWNjb3VudC5jb20iLCJhdWQiOiJodHRwOi8vbXlzZXJ2aWNlLmNvbS9teWFwaSJ9.",
    "T2KAwChqgo2ZSXyLh3IcMBQNSeRZRe5Z-MUDl-s-F99XGoyutqA6lq8bKZ6vmjZAlpVG8AGRZW9JGp9lq3cbEw",
);

/// ES256, `kid: "abcdef"`, which no key in [`EC_JWKS`] carries
pub const EC_TOKEN_UNKNOWN_KID: &str = concat!(
    "eyJhbGciOiJFUzI1NiIsInR5cCI6IkpXVCIsImtpZCI6ImFiY2RlZiJ9.",
    "eyJpc3MiOiI2Mjg2NDU3NDE4ODEtbm9hYml1MjNmNWE4bThvdmQ4dWN2Njk4bGo3OHZ2MGxAZGV2ZWxvcGVyLmdzZXJ2aWNlYWNjb3VudC5jb20iLCJzdWIiOiI2Mjg2NDU3NDE4ODEtbm9hYml1MjNmNWE4bThvdmQ4dWN2Njk4bGo3OHZ2MGxAZGV2ZWxvcGVyLmdzZXJ2aWNlYWNjb3VudC5jb20iLCJhdWQiOiJodHRwOi8vbXlzZXJ2aWNlLmNvbS9teWFwaSJ9.",
    "rWSoOV5j7HxHc4yVgZEZYUSgY7AUarG3HxdfPON1mw6II_pNUsc8_sVf7Yv2-jeVhmf8BtR99wnOwEDhVYrVpQ",
);

/// ES256 without a `kid`
pub const EC_TOKEN_NO_KID: &str = concat!(
    "eyJhbGciOiJFUzI1NiIsInR5cCI6IkpXVCJ9.",
    "eyJpc3MiOiI2Mjg2NDU3NDE4ODEtbm9hYml1MjNmNWE4bThvdmQ4dWN2Njk4bGo3OHZ2MGxAZGV2ZWxvcGVyLmdzZXJ2aWNlYWNjb3VudC5jb20iLCJzdWIiOiI2Mjg2NDU3NDE4ODEtbm9hYml1MjNmNWE4bThvdmQ4dWN2Njk4bGo3OHZ2MGxAZGV2ZWxvcGVyLmdzZXJ2aWNlYWNjb3VudC5jb20iLCJhdWQiOiJodHRwOi8vbXlzZXJ2aWNlLmNvbS9teWFwaSJ9.",
    "zlFcET8FiOYcKe30A7qOD4TIBvtb9zIVhDcM8pievKs1Te-UOBcklQxhwXMnRSSEBY4P0pfZqWJT_V5IVrKrdQ",
);

pub const ALL_ALGS: [Algorithm; 12] = [
    Algorithm::HS256,
    Algorithm::HS384,
    Algorithm::HS512,
    Algorithm::RS256,
    Algorithm::RS384,
    Algorithm::RS512,
    Algorithm::PS256,
    Algorithm::PS384,
    Algorithm::PS512,
    Algorithm::ES256,
    Algorithm::ES384,
    Algorithm::ES512,
];

pub fn b64(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode_to_string(bytes)
}

/// `jwt` re-encoded with `signature` in place of its own
pub fn with_signature(jwt: &Jwt, signature: &[u8]) -> Jwt {
    let message = std::str::from_utf8(jwt.signed_message()).unwrap();
    Jwt::parse(&format!("{message}.{}", b64(signature))).unwrap()
}

/// Every single-bit flip of `jwt`'s signature, plus truncations and an extension
pub fn signature_mutations(jwt: &Jwt) -> Vec<Vec<u8>> {
    let sig = jwt.signature();
    let mut out = Vec::with_capacity(sig.len() * 8 + 3);
    for byte in 0..sig.len() {
        for bit in 0..8 {
            let mut fuzzed = sig.to_vec();
            fuzzed[byte] ^= 1 << bit;
            out.push(fuzzed);
        }
    }
    out.push(sig[..sig.len() - 1].to_vec());
    out.push(sig[..1].to_vec());
    let mut extended = sig.to_vec();
    extended.push(0);
    out.push(extended);
    out
}

enum Secret {
    Rsa(RsaKeyPair),
    Ec(EcdsaKeyPair),
    Hmac(Vec<u8>),
}

/// Freshly generated signing key with its public JWK
pub struct TestKey {
    alg: Algorithm,
    secret: Secret,
}

impl TestKey {
    pub fn generate(alg: Algorithm) -> Self {
        let secret = match alg.family() {
            AlgorithmFamily::RsaPkcs1 | AlgorithmFamily::RsaPss => {
                Secret::Rsa(RsaKeyPair::generate(KeySize::Rsa2048).unwrap())
            }
            AlgorithmFamily::Ecdsa(curve) => {
                let signing = match curve {
                    Curve::P256 => &ECDSA_P256_SHA256_FIXED_SIGNING,
                    Curve::P384 => &ECDSA_P384_SHA384_FIXED_SIGNING,
                    Curve::P521 => &ECDSA_P521_SHA512_FIXED_SIGNING,
                };
                Secret::Ec(EcdsaKeyPair::generate(signing).unwrap())
            }
            AlgorithmFamily::Hmac => {
                let mut k = vec![0; 64];
                SystemRandom::new().fill(&mut k).unwrap();
                Secret::Hmac(k)
            }
        };
        Self { alg, secret }
    }

    pub const fn alg(&self) -> Algorithm {
        self.alg
    }

    /// Public JWK without `kid` or `alg`
    pub fn jwk(&self) -> Value {
        match (&self.secret, self.alg.family()) {
            (Secret::Rsa(pair), _) => {
                let public = pair.public_key();
                json!({
                    "kty": "RSA",
                    "n": b64(public.modulus().big_endian_without_leading_zero()),
                    "e": b64(public.exponent().big_endian_without_leading_zero()),
                })
            }
            (Secret::Ec(pair), AlgorithmFamily::Ecdsa(curve)) => {
                let point = &pair.public_key().as_ref()[1..];
                let (x, y) = point.split_at(curve.field_width());
                json!({
                    "kty": "EC",
                    "crv": curve.to_string(),
                    "x": b64(x),
                    "y": b64(y),
                })
            }
            (Secret::Hmac(k), _) => json!({ "kty": "oct", "k": b64(k) }),
            (Secret::Ec(_), _) => unreachable!("ec keys are only generated for ecdsa"),
        }
    }

    /// Public JWK with `kid` and `alg` set
    pub fn jwk_with(&self, kid: &str) -> Value {
        let mut jwk = self.jwk();
        jwk["kid"] = json!(kid);
        jwk["alg"] = json!(self.alg.to_string());
        jwk
    }

    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        let rng = SystemRandom::new();
        match &self.secret {
            Secret::Rsa(pair) => {
                let mut sig = vec![0; pair.public_modulus_len()];
                pair.sign(rsa_padding(self.alg), &rng, message, &mut sig)
                    .unwrap();
                sig
            }
            Secret::Ec(pair) => pair.sign(&rng, message).unwrap().as_ref().to_vec(),
            Secret::Hmac(k) => {
                let alg = match self.alg.digest() {
                    DigestAlgorithm::Sha256 => aws_lc_rs::hmac::HMAC_SHA256,
                    DigestAlgorithm::Sha384 => aws_lc_rs::hmac::HMAC_SHA384,
                    DigestAlgorithm::Sha512 => aws_lc_rs::hmac::HMAC_SHA512,
                };
                let key = aws_lc_rs::hmac::Key::new(alg, k);
                aws_lc_rs::hmac::sign(&key, message).as_ref().to_vec()
            }
        }
    }

    /// Signs a compact token over exactly the given header and payload
    pub fn token(&self, header: &Value, payload: &Value) -> String {
        let message = format!(
            "{}.{}",
            b64(header.to_string().as_bytes()),
            b64(payload.to_string().as_bytes())
        );
        let sig = self.sign(message.as_bytes());
        format!("{message}.{}", b64(&sig))
    }

    /// `{"alg": <alg>, "kid": <kid>}` over a small claim set
    pub fn token_with_kid(&self, kid: &str) -> String {
        self.token(
            &json!({ "alg": self.alg.to_string(), "kid": kid }),
            &json!({ "sub": "user", "aud": ["svc"] }),
        )
    }
}

fn rsa_padding(alg: Algorithm) -> &'static dyn RsaEncoding {
    match alg {
        Algorithm::RS384 => &RSA_PKCS1_SHA384,
        Algorithm::RS512 => &RSA_PKCS1_SHA512,
        Algorithm::PS256 => &RSA_PSS_SHA256,
        Algorithm::PS384 => &RSA_PSS_SHA384,
        Algorithm::PS512 => &RSA_PSS_SHA512,
        _ => &RSA_PKCS1_SHA256,
    }
}

/// Wraps a provider and counts invocations per primitive
#[derive(Default)]
pub struct Counting<P> {
    inner: P,
    rsa: AtomicUsize,
    ecdsa: AtomicUsize,
    hmac: AtomicUsize,
}

impl<P> Counting<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            rsa: AtomicUsize::new(0),
            ecdsa: AtomicUsize::new(0),
            hmac: AtomicUsize::new(0),
        }
    }

    pub fn rsa_calls(&self) -> usize {
        self.rsa.load(Ordering::SeqCst)
    }

    pub fn ecdsa_calls(&self) -> usize {
        self.ecdsa.load(Ordering::SeqCst)
    }

    pub fn hmac_calls(&self) -> usize {
        self.hmac.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.rsa_calls() + self.ecdsa_calls() + self.hmac_calls()
    }
}

impl<P: CryptoProvider> CryptoProvider for Counting<P> {
    fn verify_rsa_pkcs1(
        &self,
        key: &RsaPublicKey,
        digest: DigestAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> bool {
        self.rsa.fetch_add(1, Ordering::SeqCst);
        self.inner
            .verify_rsa_pkcs1(key, digest, message, signature)
    }

    fn verify_rsa_pss(
        &self,
        key: &RsaPublicKey,
        digest: DigestAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> bool {
        self.rsa.fetch_add(1, Ordering::SeqCst);
        self.inner.verify_rsa_pss(key, digest, message, signature)
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
        self.ecdsa.fetch_add(1, Ordering::SeqCst);
        self.inner
            .verify_ecdsa(curve, x, y, digest, message, r, s)
    }

    fn hmac(&self, key: &[u8], digest: DigestAlgorithm, message: &[u8]) -> Option<Vec<u8>> {
        self.hmac.fetch_add(1, Ordering::SeqCst);
        self.inner.hmac(key, digest, message)
    }
}
