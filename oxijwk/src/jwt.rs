//! Compact-serialized JWT parsing
use std::str::FromStr;

use serde_json::{
    Map,
    Value,
};

use crate::{
    decoding::{
        SplitJwt,
        b64,
    },
    error::Status,
};

/// A parsed, not yet verified, compact-serialized JWT.
///
/// The original `header.payload` text is retained verbatim; signatures are
/// always checked against it, never against a re-serialization of the
/// decoded JSON.
#[derive(Debug, Clone)]
pub struct Jwt {
    message: String,
    hlen: usize,
    header: Map<String, Value>,
    payload: Map<String, Value>,
    signature: Vec<u8>,
    alg: Option<String>,
    kid: Option<String>,
}

impl Jwt {
    /// Parses a compact-serialized JWT.
    ///
    /// # Errors
    ///
    /// - [`Status::JwtBadFormat`] when the token does not have exactly three
    ///   dot-delimited sections
    /// - [`Status::JwtHeaderParseError`] when the header is not base64url, is not
    ///   a JSON object, or has a non-string `alg` or `kid`
    /// - [`Status::JwtPayloadParseError`] when the payload is not base64url or
    ///   not a JSON object
    /// - [`Status::JwtSignatureParseError`] when the signature is not base64url
    ///   or is empty
    pub fn parse(token: &str) -> Result<Self, Status> {
        let parts = SplitJwt::try_from(token)?;

        let header =
            decode_object(parts.b64_header()).ok_or(Status::JwtHeaderParseError)?;
        let alg = string_field(&header, "alg").ok_or(Status::JwtHeaderParseError)?;
        let kid = string_field(&header, "kid").ok_or(Status::JwtHeaderParseError)?;

        let payload =
            decode_object(parts.b64_payload()).ok_or(Status::JwtPayloadParseError)?;

        let signature = b64::decode(parts.b64_signature())
            .map_err(|_| Status::JwtSignatureParseError)?;
        if signature.is_empty() {
            return Err(Status::JwtSignatureParseError);
        }

        // both separators are ASCII so this slice lands on a char boundary
        let message = token[..parts.b64_message().len()].to_owned();

        Ok(Self {
            message,
            hlen: parts.header_len(),
            header,
            payload,
            signature,
            alg,
            kid,
        })
    }

    /// `alg` header parameter; [`None`] means unspecified, not `"none"`
    #[must_use]
    pub fn alg(&self) -> Option<&str> {
        self.alg.as_deref()
    }

    /// `kid` header parameter
    #[must_use]
    pub fn kid(&self) -> Option<&str> {
        self.kid.as_deref()
    }

    /// `typ` header parameter, if it is a string
    #[must_use]
    pub fn typ(&self) -> Option<&str> {
        self.header.get("typ").and_then(Value::as_str)
    }

    /// Decoded header object
    #[must_use]
    pub const fn header(&self) -> &Map<String, Value> {
        &self.header
    }

    /// Decoded payload object
    #[must_use]
    pub const fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Alias for [`Jwt::payload`]
    #[must_use]
    pub const fn claims(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Raw (decoded) signature
    #[must_use]
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Base64url header section as it appeared in the token
    #[must_use]
    pub fn header_b64(&self) -> &str {
        &self.message[..self.hlen]
    }

    /// Base64url payload section as it appeared in the token
    #[must_use]
    pub fn payload_b64(&self) -> &str {
        &self.message[self.hlen + 1..]
    }

    /// JWS signing input: `header_b64 "." payload_b64`.
    ///
    /// Ref: [RFC 7515 5.1](<https://datatracker.ietf.org/doc/html/rfc7515#section-5.1>)
    #[must_use]
    pub fn signed_message(&self) -> &[u8] {
        self.message.as_bytes()
    }

    /// `iss` claim, if it is a string
    #[must_use]
    pub fn iss(&self) -> Option<&str> {
        self.str_claim("iss")
    }

    /// `sub` claim, if it is a string
    #[must_use]
    pub fn sub(&self) -> Option<&str> {
        self.str_claim("sub")
    }

    /// `jti` claim, if it is a string
    #[must_use]
    pub fn jti(&self) -> Option<&str> {
        self.str_claim("jti")
    }

    /// `aud` claim, either a single string or the string members of an array
    #[must_use]
    pub fn aud(&self) -> Vec<&str> {
        match self.payload.get("aud") {
            Some(Value::String(aud)) => vec![aud.as_str()],
            Some(Value::Array(auds)) => auds.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// `exp` claim as seconds since the epoch
    #[must_use]
    pub fn exp(&self) -> Option<i64> {
        self.int_claim("exp")
    }

    /// `nbf` claim as seconds since the epoch
    #[must_use]
    pub fn nbf(&self) -> Option<i64> {
        self.int_claim("nbf")
    }

    /// `iat` claim as seconds since the epoch
    #[must_use]
    pub fn iat(&self) -> Option<i64> {
        self.int_claim("iat")
    }

    fn str_claim(&self, name: &str) -> Option<&str> {
        self.payload.get(name).and_then(Value::as_str)
    }

    fn int_claim(&self, name: &str) -> Option<i64> {
        self.payload.get(name).and_then(Value::as_i64)
    }
}

impl FromStr for Jwt {
    type Err = Status;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Jwt {
    type Error = Status;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

fn decode_object(section: &[u8]) -> Option<Map<String, Value>> {
    let json = b64::decode(section).ok()?;
    serde_json::from_slice(&json).ok()
}

/// Outer [`None`] when the field is present but not a string.
fn string_field(object: &Map<String, Value>, name: &str) -> Option<Option<String>> {
    match object.get(name) {
        None => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(_) => None,
    }
}
