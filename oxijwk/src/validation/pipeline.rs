use tracing::{
    debug,
    trace,
};

use crate::{
    Algorithm,
    crypto::CryptoProvider,
    error::Status,
    jwks::{
        Jwks,
        JwksFormat,
    },
    jwt::Jwt,
    validation::{
        matcher::select_candidates,
        signature::verify_signature,
    },
};

/// Builder for a [`Verifier`]
#[derive(Debug, Clone)]
pub struct VerifierBuilder<P> {
    provider: P,
    size_limit: Option<usize>,
    max_candidates: Option<usize>,
}

impl<P: CryptoProvider> VerifierBuilder<P> {
    pub(crate) const fn new(provider: P) -> Self {
        Self {
            provider,
            size_limit: None,
            max_candidates: None,
        }
    }

    /// Caps accepted JWT size to `size_limit` bytes
    ///
    /// Larger tokens are rejected with [`Status::JwtBadFormat`] before they
    /// are split.
    #[must_use]
    pub const fn with_max_size(mut self, size_limit: usize) -> Self {
        self.size_limit = Some(size_limit);
        self
    }

    /// Attempts at most `max_candidates` keys per token; later candidates are
    /// never tried.
    ///
    /// `0` is treated as `1`: the first candidate is always attempted.
    #[must_use]
    pub const fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = Some(if max_candidates == 0 { 1 } else { max_candidates });
        self
    }

    /// Finalizes the verifier
    #[must_use]
    pub fn build(self) -> Verifier<P> {
        Verifier {
            provider: self.provider,
            size_limit: self.size_limit,
            max_candidates: self.max_candidates,
        }
    }
}

/// Verifies compact JWTs against a [`Jwks`].
///
/// A verifier holds no per-token state and may be shared freely across
/// threads when its provider is.
#[derive(Debug, Clone)]
pub struct Verifier<P> {
    provider: P,
    size_limit: Option<usize>,
    max_candidates: Option<usize>,
}

impl<P: CryptoProvider + Default> Default for Verifier<P> {
    fn default() -> Self {
        VerifierBuilder::new(P::default()).build()
    }
}

impl<P: CryptoProvider> Verifier<P> {
    /// Returns a new [`VerifierBuilder`] over `provider`
    #[must_use]
    pub const fn builder(provider: P) -> VerifierBuilder<P> {
        VerifierBuilder::new(provider)
    }

    /// Backend performing the signature primitives
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Verifies an already parsed token.
    ///
    /// Candidate keys are tried in set order and the first that verifies
    /// wins. A candidate with no usable algorithm (token has no `alg`, key has
    /// no supported `alg` hint) counts as a failed attempt.
    ///
    /// # Errors
    ///
    /// - [`Status::JwksNoValidKeys`] when `jwks` is empty
    /// - [`Status::JwksKidAlgMismatch`] when no key passes the `kid`/`alg`
    ///   filters; no primitive is invoked
    /// - [`Status::JwtVerificationFail`] when every attempted candidate fails
    pub fn verify(&self, jwt: &Jwt, jwks: &Jwks) -> Result<(), Status> {
        if jwks.is_empty() {
            debug!("jwks contains no usable keys");
            return Err(Status::JwksNoValidKeys);
        }

        let candidates = select_candidates(jwt, jwks);
        if candidates.is_empty() {
            debug!(kid = ?jwt.kid(), alg = ?jwt.alg(), "no jwk matches token kid/alg");
            return Err(Status::JwksKidAlgMismatch);
        }

        let limit = self.max_candidates.unwrap_or(usize::MAX);
        for (attempt, key) in candidates.into_iter().take(limit).enumerate() {
            let Some(alg) = jwt
                .alg()
                .or_else(|| key.alg())
                .and_then(|name| name.parse::<Algorithm>().ok())
            else {
                trace!(attempt, kid = ?key.kid(), "candidate has no usable algorithm");
                continue;
            };
            match verify_signature(jwt, key, alg, &self.provider) {
                Ok(()) => {
                    trace!(attempt, kid = ?key.kid(), %alg, "signature verified");
                    return Ok(());
                }
                Err(_) => trace!(attempt, kid = ?key.kid(), %alg, "signature rejected"),
            }
        }

        debug!(kid = ?jwt.kid(), alg = ?jwt.alg(), "no candidate jwk verified the token");
        Err(Status::JwtVerificationFail)
    }

    /// Parses then verifies `token`, returning it for claim inspection.
    ///
    /// # Errors
    ///
    /// Any parse error from [`Jwt::parse`] (or [`Status::JwtBadFormat`] for
    /// tokens above the size limit), then any error from
    /// [`Verifier::verify`].
    pub fn verify_token(&self, token: &str, jwks: &Jwks) -> Result<Jwt, Status> {
        let jwt = self.parse_token(token)?;
        self.verify(&jwt, jwks)?;
        Ok(jwt)
    }

    /// Parses `token`, then `jwks`, then verifies.
    ///
    /// A malformed token is reported even when the key set is also malformed.
    ///
    /// # Errors
    ///
    /// As [`Verifier::verify_token`], with any [`Jwks::parse`] error reported
    /// after token errors.
    pub fn verify_token_with_jwks(
        &self,
        token: &str,
        jwks: &str,
        format: JwksFormat,
    ) -> Result<Jwt, Status> {
        let jwt = self.parse_token(token)?;
        let jwks = Jwks::parse(jwks, format)?;
        self.verify(&jwt, &jwks)?;
        Ok(jwt)
    }

    fn parse_token(&self, token: &str) -> Result<Jwt, Status> {
        if let Some(size_limit) = self.size_limit
            && token.len() > size_limit
        {
            debug!(size = token.len(), size_limit, "token exceeds size limit");
            return Err(Status::JwtBadFormat);
        }
        Jwt::parse(token)
    }
}
