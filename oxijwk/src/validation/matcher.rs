use tracing::trace;

use crate::{
    Algorithm,
    jwk::Jwk,
    jwks::Jwks,
    jwt::Jwt,
};

/// Keys from `jwks` that may have produced `jwt`'s signature, in set order.
///
/// - a token `kid` admits keys with the same `kid` or none at all
/// - a token `alg` admits keys whose `alg` hint is absent or identical and
///   whose material belongs to the algorithm's family (and curve, for `ECDSA`)
/// - a token `alg` naming no supported [`Algorithm`], `"none"` included,
///   admits nothing
/// - a token without `alg` is filtered by `kid` alone
#[must_use]
pub fn select_candidates<'a>(jwt: &Jwt, jwks: &'a Jwks) -> Vec<&'a Jwk> {
    let alg = match jwt.alg() {
        Some(name) => match name.parse::<Algorithm>() {
            Ok(alg) => Some((name, alg)),
            Err(_) => {
                trace!(alg = name, "token alg unsupported, no candidates");
                return Vec::new();
            }
        },
        None => None,
    };

    let candidates: Vec<&Jwk> = jwks
        .iter()
        .filter(|key| kid_matches(jwt.kid(), key.kid()))
        .filter(|key| {
            alg.is_none_or(|(name, alg)| {
                key.alg().is_none_or(|hint| hint == name) && key.material().supports(alg)
            })
        })
        .collect();
    trace!(
        total = jwks.len(),
        candidates = candidates.len(),
        "selected candidate keys"
    );
    candidates
}

fn kid_matches(token: Option<&str>, key: Option<&str>) -> bool {
    match (token, key) {
        (Some(token), Some(key)) => token == key,
        (Some(_) | None, None) | (None, Some(_)) => true,
    }
}
