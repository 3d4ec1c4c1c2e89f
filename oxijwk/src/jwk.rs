//! Typed JSON Web Key records
use std::fmt::Display;

use crate::{
    Algorithm,
    AlgorithmFamily,
    Curve,
    error::Status,
};

/// `kty` (Key Type) discriminant
///
/// Ref: [RFC 7518 6.1](<https://datatracker.ietf.org/doc/html/rfc7518#section-6.1>)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// `RSA`
    Rsa,
    /// `EC`
    Ec,
    /// `oct` (symmetric / HMAC secret)
    Oct,
}

impl KeyType {
    /// Parses a JWK `kty` value
    #[must_use]
    pub fn from_kty(kty: &str) -> Option<Self> {
        match kty {
            "RSA" => Some(Self::Rsa),
            "EC" => Some(Self::Ec),
            "oct" => Some(Self::Oct),
            _ => None,
        }
    }
}

impl Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rsa => write!(f, "RSA"),
            Self::Ec => write!(f, "EC"),
            Self::Oct => write!(f, "oct"),
        }
    }
}

/// RSA public key as big-endian unsigned byte strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    /// Modulus
    pub n: Vec<u8>,
    /// Public exponent
    pub e: Vec<u8>,
}

/// Elliptic-curve public key with fixed-width affine coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcPublicKey {
    curve: Curve,
    x: Vec<u8>,
    y: Vec<u8>,
}

impl EcPublicKey {
    /// Builds an EC public key, checking both coordinates are exactly
    /// [`Curve::field_width`] bytes.
    ///
    /// # Errors
    ///
    /// [`Status::JwksParseError`] when either coordinate has the wrong width.
    pub fn new(curve: Curve, x: Vec<u8>, y: Vec<u8>) -> Result<Self, Status> {
        let width = curve.field_width();
        if x.len() != width || y.len() != width {
            return Err(Status::JwksParseError);
        }
        Ok(Self { curve, x, y })
    }

    /// Named curve
    #[must_use]
    pub const fn curve(&self) -> Curve {
        self.curve
    }

    /// Affine `x` coordinate
    #[must_use]
    pub fn x(&self) -> &[u8] {
        &self.x
    }

    /// Affine `y` coordinate
    #[must_use]
    pub fn y(&self) -> &[u8] {
        &self.y
    }
}

/// Symmetric secret
#[derive(Clone, PartialEq, Eq)]
pub struct OctKey {
    k: Vec<u8>,
}

impl OctKey {
    /// Wraps a raw secret
    #[must_use]
    pub const fn new(k: Vec<u8>) -> Self {
        Self { k }
    }

    /// Raw secret bytes
    #[must_use]
    pub fn secret(&self) -> &[u8] {
        &self.k
    }
}

impl std::fmt::Debug for OctKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OctKey")
            .field("k", &"<redacted>")
            .finish()
    }
}

/// Key material, exactly one variant per `kty`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    /// `kty: "RSA"`
    Rsa(RsaPublicKey),
    /// `kty: "EC"`
    Ec(EcPublicKey),
    /// `kty: "oct"`
    Oct(OctKey),
}

impl KeyMaterial {
    /// `kty` of this material
    #[must_use]
    pub const fn kty(&self) -> KeyType {
        match self {
            Self::Rsa(_) => KeyType::Rsa,
            Self::Ec(_) => KeyType::Ec,
            Self::Oct(_) => KeyType::Oct,
        }
    }

    /// Whether this material can mathematically produce signatures for
    /// `alg`, regardless of any `alg` hint on the key.
    #[must_use]
    pub fn supports(&self, alg: Algorithm) -> bool {
        match (alg.family(), self) {
            (AlgorithmFamily::RsaPkcs1 | AlgorithmFamily::RsaPss, Self::Rsa(_))
            | (AlgorithmFamily::Hmac, Self::Oct(_)) => true,
            (AlgorithmFamily::Ecdsa(curve), Self::Ec(key)) => key.curve == curve,
            (
                AlgorithmFamily::RsaPkcs1
                | AlgorithmFamily::RsaPss
                | AlgorithmFamily::Ecdsa(_)
                | AlgorithmFamily::Hmac,
                _,
            ) => false,
        }
    }
}

/// A single JSON Web Key usable for signature verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jwk {
    kid: Option<String>,
    alg: Option<String>,
    material: KeyMaterial,
}

impl Jwk {
    /// Wraps key material with no `kid` or `alg`
    #[must_use]
    pub const fn new(material: KeyMaterial) -> Self {
        Self {
            kid: None,
            alg: None,
            material,
        }
    }

    /// RSA public key from big-endian modulus and exponent
    #[must_use]
    pub const fn rsa(n: Vec<u8>, e: Vec<u8>) -> Self {
        Self::new(KeyMaterial::Rsa(RsaPublicKey { n, e }))
    }

    /// EC public key from affine coordinates
    ///
    /// # Errors
    ///
    /// [`Status::JwksParseError`] when either coordinate is not exactly
    /// [`Curve::field_width`] bytes.
    pub fn ec(curve: Curve, x: Vec<u8>, y: Vec<u8>) -> Result<Self, Status> {
        Ok(Self::new(KeyMaterial::Ec(EcPublicKey::new(curve, x, y)?)))
    }

    /// Symmetric (HMAC) key from its raw secret
    #[must_use]
    pub const fn oct(k: Vec<u8>) -> Self {
        Self::new(KeyMaterial::Oct(OctKey::new(k)))
    }

    /// Sets the `kid` (Key ID)
    #[must_use]
    pub fn with_kid(mut self, kid: impl Into<String>) -> Self {
        self.kid = Some(kid.into());
        self
    }

    /// Sets the `alg` (Algorithm) hint
    #[must_use]
    pub fn with_alg(mut self, alg: impl Into<String>) -> Self {
        self.alg = Some(alg.into());
        self
    }

    /// `kid` (Key ID), if published
    #[must_use]
    pub fn kid(&self) -> Option<&str> {
        self.kid.as_deref()
    }

    /// `alg` hint, if published; may name an algorithm this crate does not support
    #[must_use]
    pub fn alg(&self) -> Option<&str> {
        self.alg.as_deref()
    }

    /// `kty` (Key Type)
    #[must_use]
    pub const fn kty(&self) -> KeyType {
        self.material.kty()
    }

    /// Key material
    #[must_use]
    pub const fn material(&self) -> &KeyMaterial {
        &self.material
    }
}
