use base64_simd::URL_SAFE_NO_PAD as b64;

use crate::error::Base64Error;

/// Decodes base64url, with or without canonical `=` padding.
///
/// Residual bits in the final symbol must be zero so each byte string has
/// exactly one accepted encoding.
///
/// # Errors
///
/// - [`Base64Error::InvalidSymbol`] on any byte outside the URL-safe alphabet,
///   including `+`, `/` and padding anywhere but the tail
/// - [`Base64Error::InvalidLength`] when the (unpadded) length mod 4 is 1, or
///   padding is present on input whose length is not a multiple of 4
/// - [`Base64Error::NonCanonical`] when the trailing bits are not zero
pub fn decode(input: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let data = strip_padding(input)?;
    check_tail(data)?;
    b64.decode_to_vec(data)
        .map_err(|_| Base64Error::InvalidSymbol)
}

fn strip_padding(input: &[u8]) -> Result<&[u8], Base64Error> {
    let end = input
        .iter()
        .rposition(|&c| c != b'=')
        .map_or(0, |i| i + 1);
    let pad = input.len() - end;
    if pad == 0 {
        return Ok(input);
    }
    if pad > 2 || input.len() % 4 != 0 {
        return Err(Base64Error::InvalidLength);
    }
    Ok(&input[..end])
}

fn check_tail(data: &[u8]) -> Result<(), Base64Error> {
    // bits of the final symbol that fall past the last whole byte
    let mask = match data.len() % 4 {
        0 => return Ok(()),
        1 => return Err(Base64Error::InvalidLength),
        2 => 0b1111,
        _ => 0b0011,
    };
    let Some(&last) = data.last() else {
        return Ok(());
    };
    let value = symbol_value(last).ok_or(Base64Error::InvalidSymbol)?;
    if value & mask == 0 {
        Ok(())
    } else {
        Err(Base64Error::NonCanonical)
    }
}

const fn symbol_value(c: u8) -> Option<u8> {
    match c {
        b'A'..=b'Z' => Some(c - b'A'),
        b'a'..=b'z' => Some(c - b'a' + 26),
        b'0'..=b'9' => Some(c - b'0' + 52),
        b'-' => Some(62),
        b'_' => Some(63),
        _ => None,
    }
}
