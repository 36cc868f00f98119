//! PKCS#3 `DHParameter` decoding
//!
//! ```text
//! DHParameter ::= SEQUENCE {
//!     prime               INTEGER,
//!     base                INTEGER,
//!     privateValueLength  INTEGER OPTIONAL }
//! ```
//!
//! The SEQUENCE must span the whole input. `privateValueLength` is checked
//! for well-formedness and then ignored.

use super::params::DhParameters;
use dstuffer_api::error::validation;
use dstuffer_api::Result;
use dstuffer_common::Stuffer;
use dstuffer_params::encoding::der::TAG_SEQUENCE;
use dstuffer_utils::der::{read_header, read_small_unsigned, read_unsigned_integer};
use log::{debug, warn};

/// Decode the DER in `der` into parameters with a live DH context
pub fn pkcs3_to_dh_params(der: &mut Stuffer) -> Result<DhParameters> {
    let result = decode(der);
    match &result {
        Ok(params) => debug!("decoded PKCS#3 parameters: {}-bit prime", params.prime_bits()),
        Err(err) => warn!("rejected PKCS#3 parameters: {}", err),
    }
    result
}

/// Decode PKCS#3 DER held in a byte slice
pub fn pkcs3_from_slice(der: &[u8]) -> Result<DhParameters> {
    pkcs3_to_dh_params(&mut Stuffer::with_data(der))
}

fn decode(der: &mut Stuffer) -> Result<DhParameters> {
    let body_len = read_header(der, TAG_SEQUENCE, "pkcs3 sequence")?;
    validation::decode(
        body_len == der.data_available(),
        "pkcs3 sequence",
        "trailing data after SEQUENCE",
    )?;

    let prime = read_unsigned_integer(der, "pkcs3 prime")?.to_vec();
    let generator = read_unsigned_integer(der, "pkcs3 generator")?.to_vec();

    if der.data_available() > 0 {
        read_small_unsigned(der, "pkcs3 privateValueLength")?;
    }
    validation::decode(
        der.data_available() == 0,
        "pkcs3 sequence",
        "unexpected content after parameters",
    )?;

    DhParameters::new(&prime, &generator)
}
