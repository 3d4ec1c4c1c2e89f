use std::{
    fmt::Display,
    str::FromStr,
};

/// JWS Signature Algorithm
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// `HMAC` using `SHA-256`
    HS256,

    /// `HMAC` using `SHA-384`
    HS384,

    /// `HMAC` using `SHA-512`
    HS512,

    /// `RSASSA-PKCS1-v1_5` using `SHA-256`
    #[default]
    RS256,

    /// `RSASSA-PKCS1-v1_5` using `SHA-384`
    RS384,

    /// `RSASSA-PKCS1-v1_5` using `SHA-512`
    RS512,

    /// `ECDSA` using `P-256` (`secp256r1`) curve and `SHA-256` digest
    ES256,

    /// `ECDSA` using `P-384` curve and `SHA-384` digest
    ES384,

    /// `ECDSA` using `P-521` curve and `SHA-512` digest
    ES512,

    /// `RSASSA-PSS` using `SHA-256` and MGF1 with SHA-256
    PS256,

    /// `RSASSA-PSS` using `SHA-384` and MGF1 with SHA-384
    PS384,

    /// `RSASSA-PSS` using `SHA-512` and MGF1 with SHA-512
    PS512,
}

impl Algorithm {
    /// Structural family of the algorithm; determines which key material
    /// can possibly satisfy it.
    #[must_use]
    pub const fn family(self) -> AlgorithmFamily {
        match self {
            Self::RS256 | Self::RS384 | Self::RS512 => AlgorithmFamily::RsaPkcs1,
            Self::PS256 | Self::PS384 | Self::PS512 => AlgorithmFamily::RsaPss,
            Self::ES256 => AlgorithmFamily::Ecdsa(Curve::P256),
            Self::ES384 => AlgorithmFamily::Ecdsa(Curve::P384),
            Self::ES512 => AlgorithmFamily::Ecdsa(Curve::P521),
            Self::HS256 | Self::HS384 | Self::HS512 => AlgorithmFamily::Hmac,
        }
    }

    /// Digest fixed by the algorithm suffix
    #[must_use]
    pub const fn digest(self) -> DigestAlgorithm {
        match self {
            Self::HS256 | Self::RS256 | Self::PS256 | Self::ES256 => DigestAlgorithm::Sha256,
            Self::HS384 | Self::RS384 | Self::PS384 | Self::ES384 => DigestAlgorithm::Sha384,
            Self::HS512 | Self::RS512 | Self::PS512 | Self::ES512 => DigestAlgorithm::Sha512,
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RS256 => write!(f, "RS256"),
            Self::RS384 => write!(f, "RS384"),
            Self::RS512 => write!(f, "RS512"),
            Self::PS256 => write!(f, "PS256"),
            Self::PS384 => write!(f, "PS384"),
            Self::PS512 => write!(f, "PS512"),
            Self::ES256 => write!(f, "ES256"),
            Self::ES384 => write!(f, "ES384"),
            Self::ES512 => write!(f, "ES512"),
            Self::HS256 => write!(f, "HS256"),
            Self::HS384 => write!(f, "HS384"),
            Self::HS512 => write!(f, "HS512"),
        }
    }
}

/// Error returned when an `alg` string names no supported [`Algorithm`]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unsupported jws algorithm")]
pub struct UnsupportedAlgorithm;

impl FromStr for Algorithm {
    type Err = UnsupportedAlgorithm;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RS256" => Ok(Self::RS256),
            "RS384" => Ok(Self::RS384),
            "RS512" => Ok(Self::RS512),
            "PS256" => Ok(Self::PS256),
            "PS384" => Ok(Self::PS384),
            "PS512" => Ok(Self::PS512),
            "ES256" => Ok(Self::ES256),
            "ES384" => Ok(Self::ES384),
            "ES512" => Ok(Self::ES512),
            "HS256" => Ok(Self::HS256),
            "HS384" => Ok(Self::HS384),
            "HS512" => Ok(Self::HS512),
            _ => Err(UnsupportedAlgorithm),
        }
    }
}

/// Signature scheme family an [`Algorithm`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// `RSASSA-PKCS1-v1_5`
    RsaPkcs1,
    /// `RSASSA-PSS`
    RsaPss,
    /// `ECDSA` over the given named curve
    Ecdsa(Curve),
    /// `HMAC` with a shared secret
    Hmac,
}

/// Message digest used by a signature algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// `SHA-256`
    Sha256,
    /// `SHA-384`
    Sha384,
    /// `SHA-512`
    Sha512,
}

/// Named elliptic curves usable with `ECDSA` JWS algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// `P-256` (`secp256r1`)
    P256,
    /// `P-384` (`secp384r1`)
    P384,
    /// `P-521` (`secp521r1`)
    P521,
}

impl Curve {
    /// Width, in bytes, of a field element (and of each of `r`, `s`) on this curve
    #[must_use]
    pub const fn field_width(self) -> usize {
        match self {
            Self::P256 => 32,
            Self::P384 => 48,
            Self::P521 => 66,
        }
    }

    /// Parses a JWK `crv` value
    #[must_use]
    pub fn from_crv(crv: &str) -> Option<Self> {
        match crv {
            "P-256" => Some(Self::P256),
            "P-384" => Some(Self::P384),
            "P-521" => Some(Self::P521),
            _ => None,
        }
    }
}

impl Display for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P256 => write!(f, "P-256"),
            Self::P384 => write!(f, "P-384"),
            Self::P521 => write!(f, "P-521"),
        }
    }
}
