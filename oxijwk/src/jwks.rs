//! JSON Web Key Set parsing
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    Curve,
    decoding::b64,
    error::Status,
    jwk::{
        EcPublicKey,
        Jwk,
        KeyMaterial,
        KeyType,
        OctKey,
        RsaPublicKey,
    },
};

/// Shape of the document handed to [`Jwks::parse`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum JwksFormat {
    /// `{"keys": [...]}` JWK Set
    ///
    /// Ref: [RFC 7517 5](<https://datatracker.ietf.org/doc/html/rfc7517#section-5>)
    #[default]
    KeySet,
    /// A single bare JWK object
    SingleKey,
}

/// An ordered, immutable set of [`Jwk`]s.
///
/// `kid`s are not required to be unique; see
/// [`select_candidates`](crate::validation::select_candidates).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Jwks {
    keys: Vec<Jwk>,
}

#[derive(Deserialize)]
struct RawJwk {
    kty: Option<String>,
    alg: Option<String>,
    kid: Option<String>,
    crv: Option<String>,
    n: Option<String>,
    e: Option<String>,
    x: Option<String>,
    y: Option<String>,
    k: Option<String>,
}

/// Why a key entry was left out of the set; only ever logged.
#[derive(Debug, Clone, Copy)]
enum Skip {
    Malformed,
    MissingKty,
    UnknownKty,
    MissingMaterial,
    BadEncoding,
    UnknownCurve,
    CoordinateWidth,
}

impl Jwks {
    /// Parses a JWKS (or, with [`JwksFormat::SingleKey`], a single JWK).
    ///
    /// Individual entries that are malformed, carry an unknown `kty`, or lack
    /// the material their `kty` requires are skipped. A set where every entry
    /// was skipped is still returned; verifying against it fails with
    /// [`Status::JwksNoValidKeys`].
    ///
    /// # Errors
    ///
    /// [`Status::JwksParseError`] when the document is not JSON, or (for
    /// [`JwksFormat::KeySet`]) has no `keys` array, or (for
    /// [`JwksFormat::SingleKey`]) is not a JSON object.
    pub fn parse(json: &str, format: JwksFormat) -> Result<Self, Status> {
        let Value::Object(mut document) =
            serde_json::from_str::<Value>(json).map_err(|_| Status::JwksParseError)?
        else {
            return Err(Status::JwksParseError);
        };
        let entries = match format {
            JwksFormat::KeySet => match document.remove("keys") {
                Some(Value::Array(keys)) => keys,
                _ => return Err(Status::JwksParseError),
            },
            JwksFormat::SingleKey => vec![Value::Object(document)],
        };
        let total = entries.len();
        let keys: Vec<Jwk> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match parse_entry(entry) {
                Ok(key) => Some(key),
                Err(reason) => {
                    debug!(index, ?reason, "skipping unusable jwk");
                    None
                }
            })
            .collect();
        debug!(total, usable = keys.len(), "parsed jwks");
        Ok(Self { keys })
    }

    /// Builds a set from already-constructed keys
    #[must_use]
    pub const fn from_keys(keys: Vec<Jwk>) -> Self {
        Self { keys }
    }

    /// Keys in publication order
    #[must_use]
    pub fn keys(&self) -> &[Jwk] {
        &self.keys
    }

    /// Iterates keys in publication order
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Jwk> {
        self.keys.iter()
    }

    /// Number of usable keys
    #[must_use]
    pub const fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no usable key survived parsing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<Jwk> for Jwks {
    fn from_iter<T: IntoIterator<Item = Jwk>>(iter: T) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Jwks {
    type Item = &'a Jwk;
    type IntoIter = std::slice::Iter<'a, Jwk>;
    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

fn parse_entry(entry: Value) -> Result<Jwk, Skip> {
    if !entry.is_object() {
        return Err(Skip::Malformed);
    }
    let raw: RawJwk = serde_json::from_value(entry).map_err(|_| Skip::Malformed)?;
    let kty = raw.kty.as_deref().ok_or(Skip::MissingKty)?;
    let material = match KeyType::from_kty(kty).ok_or(Skip::UnknownKty)? {
        KeyType::Rsa => KeyMaterial::Rsa(RsaPublicKey {
            n: required(raw.n.as_deref())?,
            e: required(raw.e.as_deref())?,
        }),
        KeyType::Ec => {
            let curve = raw.crv.as_deref().ok_or(Skip::MissingMaterial)?;
            let curve = Curve::from_crv(curve).ok_or(Skip::UnknownCurve)?;
            let x = required(raw.x.as_deref())?;
            let y = required(raw.y.as_deref())?;
            KeyMaterial::Ec(EcPublicKey::new(curve, x, y).map_err(|_| Skip::CoordinateWidth)?)
        }
        KeyType::Oct => KeyMaterial::Oct(OctKey::new(required(raw.k.as_deref())?)),
    };
    let mut key = Jwk::new(material);
    if let Some(kid) = raw.kid {
        key = key.with_kid(kid);
    }
    if let Some(alg) = raw.alg {
        key = key.with_alg(alg);
    }
    Ok(key)
}

/// Decodes a required base64url member; empty values count as missing.
fn required(value: Option<&str>) -> Result<Vec<u8>, Skip> {
    let value = value.ok_or(Skip::MissingMaterial)?;
    let bytes = b64::decode(value.as_bytes()).map_err(|_| Skip::BadEncoding)?;
    if bytes.is_empty() {
        return Err(Skip::MissingMaterial);
    }
    Ok(bytes)
}
