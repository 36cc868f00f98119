//! Minimal DER reader
//!
//! Supports exactly what PKCS#3 needs: definite-length SEQUENCE headers and
//! non-negative INTEGERs. Encodings that BER would allow but DER forbids
//! (indefinite lengths, long-form lengths below 128, padded length octets,
//! padded integers) are rejected.

use dstuffer_api::error::validation;
use dstuffer_api::{Error, Result};
use dstuffer_common::Stuffer;
use dstuffer_params::encoding::der::{LENGTH_LONG_FORM, MAX_LENGTH_OCTETS, TAG_INTEGER};


#[inline]
fn truncated(context: &'static str) -> impl FnOnce(Error) -> Error {
    move |_| Error::decode(context, "truncated input")
}

/// Read a definite length
pub fn read_length(stuffer: &mut Stuffer, context: &'static str) -> Result<usize> {
    let first = stuffer.read_u8().map_err(truncated(context))?;
    if first & LENGTH_LONG_FORM == 0 {
        return Ok(first as usize);
    }

    let octets = (first & !LENGTH_LONG_FORM) as usize;
    validation::decode(octets != 0, context, "indefinite length")?;
    validation::decode(octets <= MAX_LENGTH_OCTETS, context, "length field too wide")?;

    let bytes = stuffer.raw_read(octets).map_err(truncated(context))?;
    validation::decode(bytes[0] != 0, context, "non-minimal length")?;

    let length = bytes
        .iter()
        .fold(0usize, |acc, &b| (acc << 8) | b as usize);
    validation::decode(
        length >= LENGTH_LONG_FORM as usize,
        context,
        "long form used for short length",
    )?;
    Ok(length)
}

/// Read a tag and length, returning the content length
///
/// The content itself is left unread. Fails if the tag differs from
/// `expected_tag` or the length runs past the written data.
pub fn read_header(
    stuffer: &mut Stuffer,
    expected_tag: u8,
    context: &'static str,
) -> Result<usize> {
    let tag = stuffer.read_u8().map_err(truncated(context))?;
    validation::decode(tag == expected_tag, context, "unexpected tag")?;

    let length = read_length(stuffer, context)?;
    validation::decode(
        length <= stuffer.data_available(),
        context,
        "length exceeds available data",
    )?;
    Ok(length)
}

/// Borrow the content octets of the next element, which must carry `expected_tag`
pub fn read_tlv<'a>(
    stuffer: &'a mut Stuffer,
    expected_tag: u8,
    context: &'static str,
) -> Result<&'a [u8]> {
    let length = read_header(stuffer, expected_tag, context)?;
    stuffer.raw_read(length).map_err(truncated(context))
}

/// Borrow the big-endian magnitude of a non-negative INTEGER
///
/// The single sign-padding zero byte, if present, is stripped. Zero is
/// returned as `[0x00]`.
pub fn read_unsigned_integer<'a>(
    stuffer: &'a mut Stuffer,
    context: &'static str,
) -> Result<&'a [u8]> {
    let content = read_tlv(stuffer, TAG_INTEGER, context)?;

    match content {
        [] => Err(Error::decode(context, "empty INTEGER")),
        [first, ..] if first & 0x80 != 0 => {
            Err(Error::decode(context, "negative INTEGER where positive required"))
        }
        [0x00, second, ..] if second & 0x80 == 0 => {
            Err(Error::decode(context, "non-minimal INTEGER encoding"))
        }
        [0x00, rest @ ..] if !rest.is_empty() => Ok(rest),
        _ => Ok(content),
    }
}

/// Read a non-negative INTEGER that must fit in a `u64`
pub fn read_small_unsigned(stuffer: &mut Stuffer, context: &'static str) -> Result<u64> {
    let magnitude = read_unsigned_integer(stuffer, context)?;
    validation::decode(magnitude.len() <= 8, context, "INTEGER too large")?;
    Ok(magnitude.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
}
