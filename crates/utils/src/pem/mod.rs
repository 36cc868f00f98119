//! PEM envelope decoding
//!
//! Reads one `-----BEGIN <label>-----` ... `-----END <label>-----` block
//! from an input stuffer and writes the base64-decoded body to an output
//! stuffer. Whitespace anywhere in the body is ignored, so any line
//! wrapping is accepted.
//!
//! Bytes after the END marker are left unread. Only the first block whose
//! label matches is consumed; callers holding several concatenated blocks
//! must call again and should not rely on anything beyond that.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dstuffer_api::error::validation;
use dstuffer_api::{Error, Result};
use dstuffer_common::Stuffer;
use dstuffer_params::encoding::pem::{
    PEM_BEGIN_PREFIX, PEM_DASHES, PEM_DH_PARAMETERS, PEM_END_PREFIX,
};
use log::{debug, warn};
use zeroize::Zeroizing;


/// Decode a `DH PARAMETERS` block from `input` into `output`
pub fn dhparams_from_pem(input: &mut Stuffer, output: &mut Stuffer) -> Result<()> {
    pem_to_der(input, output, PEM_DH_PARAMETERS)
}

/// Decode the first PEM block labelled `label` from `input` into `output`
///
/// On failure the input read cursor is restored and nothing is written to
/// `output`.
pub fn pem_to_der(input: &mut Stuffer, output: &mut Stuffer, label: &str) -> Result<()> {
    let mark = input.read_cursor();

    let result = decode_block(input, label).and_then(|der| {
        output.write(&der)?;
        Ok(der.len())
    });

    match result {
        Ok(len) => {
            debug!("decoded {} DER bytes from PEM block '{}'", len, label);
            Ok(())
        }
        Err(err) => {
            warn!("rejected PEM block '{}': {}", label, err);
            input.seek_read(mark)?;
            Err(err)
        }
    }
}

fn marker(prefix: &str, label: &str) -> String {
    format!("{}{}{}", prefix, label, PEM_DASHES)
}

fn decode_block(input: &mut Stuffer, label: &str) -> Result<Zeroizing<Vec<u8>>> {
    let begin = marker(PEM_BEGIN_PREFIX, label);
    let end = marker(PEM_END_PREFIX, label);

    input
        .skip_past(begin.as_bytes())
        .map_err(|_| Error::pem("pem begin", "BEGIN marker not found"))?;

    // Whatever follows the marker on its own line must be blank.
    let tail = input
        .read_line()
        .map_err(|_| Error::pem("pem body", "END marker not found"))?;
    validation::pem(
        tail.iter().all(u8::is_ascii_whitespace),
        "pem begin",
        "unexpected characters after BEGIN marker",
    )?;

    let mut body = Zeroizing::new(Vec::new());
    loop {
        let line = input
            .read_line()
            .map_err(|_| Error::pem("pem body", "END marker not found"))?;

        // The END marker may share a line with the last base64 characters.
        let (content, closing) = match find(line, PEM_END_PREFIX.as_bytes()) {
            Some(at) => (&line[..at], Some(trim(&line[at..]))),
            None => (line, None),
        };
        body.extend(content.iter().copied().filter(|b| !b.is_ascii_whitespace()));

        if let Some(closing) = closing {
            validation::pem(
                closing == end.as_bytes(),
                "pem end",
                "END marker label does not match BEGIN",
            )?;
            break;
        }
    }

    validation::pem(!body.is_empty(), "pem body", "empty body")?;

    let der = STANDARD
        .decode(&body[..])
        .map_err(|_| Error::pem("pem body", "invalid base64 or padding"))?;
    Ok(Zeroizing::new(der))
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}
