use thiserror::Error;

/// Outcome of a failed parse or verification.
///
/// Messages are deliberately coarse; no variant carries which key was tried
/// or why a particular primitive rejected the signature.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Token is not of the form `header.payload.signature`
    #[error("jwt is not in the form of header.payload.signature")]
    JwtBadFormat,

    /// Token header is not valid base64url, not a JSON object, or carries a
    /// non-string `alg`/`kid`
    #[error("jwt header is an invalid base64url or json object")]
    JwtHeaderParseError,

    /// Token payload is not valid base64url or not a JSON object
    #[error("jwt payload is an invalid base64url or json object")]
    JwtPayloadParseError,

    /// Token signature is empty or not valid base64url
    #[error("jwt signature is empty or an invalid base64url")]
    JwtSignatureParseError,

    /// JWKS document is not JSON, or has no `keys` array where one is expected
    #[error("jwks is an invalid json document")]
    JwksParseError,

    /// JWKS contains no key this library can use
    #[error("jwks doesn't contain any valid key")]
    JwksNoValidKeys,

    /// No key in the JWKS matches the token's `kid`/`alg`
    #[error("jwks doesn't contain a key matching the jwt kid or alg")]
    JwksKidAlgMismatch,

    /// Signature did not verify against any candidate key
    #[error("jwt verification failed")]
    JwtVerificationFail,
}

/// Errors raised while splitting a compact-encoded JWT into its sections
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SplitError {
    /// Compact-encoded JWS contains less than three sections
    #[error("token contained less than three sections")]
    Undersized,

    /// Compact-encoded JWS contains more than three sections
    #[error("token contained more than three sections")]
    Oversized,
}

impl From<SplitError> for Status {
    fn from(_: SplitError) -> Self {
        Self::JwtBadFormat
    }
}

/// Errors raised by the base64url codec
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Base64Error {
    /// Input contains a byte outside the URL-safe alphabet
    #[error("input contains a byte outside the base64url alphabet")]
    InvalidSymbol,

    /// Input length (or padding) cannot encode a whole number of bytes
    #[error("input has an invalid length or padding")]
    InvalidLength,

    /// Final symbol carries non-zero bits past the last byte boundary
    #[error("input has non-zero trailing bits")]
    NonCanonical,
}
