use memchr::memchr_iter;

use crate::error::SplitError;

/// Borrowed view of a compact JWS as its three dot-delimited sections.
///
/// Only the two separator offsets are recorded, so the signed message is the
/// original input slice rather than a reconstruction.
#[derive(Debug)]
pub struct SplitJwt<'a> {
    data: &'a [u8],
    hlen: usize,
    mlen: usize,
}

impl<'a> TryFrom<&'a [u8]> for SplitJwt<'a> {
    type Error = SplitError;
    fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
        let mut dots = memchr_iter(b'.', value);
        let hlen = dots.next().ok_or(SplitError::Undersized)?;
        let mlen = dots.next().ok_or(SplitError::Undersized)?;
        if dots.next().is_some() {
            return Err(SplitError::Oversized);
        }
        Ok(SplitJwt {
            data: value,
            hlen,
            mlen,
        })
    }
}

impl<'a> TryFrom<&'a str> for SplitJwt<'a> {
    type Error = SplitError;
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        value.as_bytes().try_into()
    }
}

impl SplitJwt<'_> {
    /// Base64url header section
    #[must_use]
    pub fn b64_header(&self) -> &[u8] {
        &self.data[..self.hlen]
    }

    /// Base64url payload section
    #[must_use]
    pub fn b64_payload(&self) -> &[u8] {
        &self.data[self.hlen + 1..self.mlen]
    }

    /// `header.payload`, exactly as it appeared in the token
    #[must_use]
    pub fn b64_message(&self) -> &[u8] {
        &self.data[..self.mlen]
    }

    /// Base64url signature section
    #[must_use]
    pub fn b64_signature(&self) -> &[u8] {
        &self.data[self.mlen + 1..]
    }

    /// Offset of the first separator, i.e. the header section length
    #[must_use]
    pub const fn header_len(&self) -> usize {
        self.hlen
    }
}
