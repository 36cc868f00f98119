//! Known-good inputs and small encoders for building test inputs

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dstuffer_params::encoding::der::{TAG_INTEGER, TAG_SEQUENCE};
use dstuffer_params::encoding::pem::PEM_LINE_WIDTH;

/// 2048-bit DH parameters (g = 2) as emitted by `openssl dhparam`
pub const DHPARAMS_PEM: &str = "-----BEGIN DH PARAMETERS-----
MIIBCAKCAQEAy1+hVWCfNQoPB+NA733IVOONl8fCumiz9zdRRu1hzVa2yvGseUSq
Bbn6k0FQ7yMED6w5XWQKDC0z2m0FI/BPE3AjUfuPzEYGqTDf9zQZ2Lz4oAN90Sud
luOoEhYR99cEbCn0T4eBvEf9IUtczXUZ/wj7gzGbGG07dLfT+CmCRJxCjhrosenJ
gzucyS7jt1bobgU66JKkgMNm7hJY4/nhR5LWTCzZyzYQh2HM2Vk4K5ZqILpj/n0S
5JYTQ2PVhxP+Uu8+hICs/8VvM72DznjPZzufADipjC7CsQ4S6x/ecZluFtbb+ZTv
HI5CnYmkAwJ6+FSWGaZQDi8bgerFk9RWwwIBAg==
-----END DH PARAMETERS-----
";

/// First and last four bytes of the prime in [`DHPARAMS_PEM`]
pub const DHPARAMS_PRIME_HEAD: &str = "cb5fa155";
pub const DHPARAMS_PRIME_TAIL: &str = "93d456c3";

/// DER definite length
pub fn der_length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        return vec![len as u8];
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    let mut out = vec![0x80 | (bytes.len() - skip) as u8];
    out.extend_from_slice(&bytes[skip..]);
    out
}

/// DER INTEGER for a non-negative big-endian magnitude
pub fn der_integer(magnitude: &[u8]) -> Vec<u8> {
    let skip = magnitude.iter().take_while(|&&b| b == 0).count();
    let mut content = magnitude[skip..].to_vec();
    if content.first().map_or(true, |b| b & 0x80 != 0) {
        content.insert(0, 0x00);
    }

    let mut out = vec![TAG_INTEGER];
    out.extend(der_length(content.len()));
    out.extend(content);
    out
}

/// PKCS#3 `DHParameter` without the optional private value length
pub fn encode_pkcs3(prime: &[u8], generator: &[u8]) -> Vec<u8> {
    let mut body = der_integer(prime);
    body.extend(der_integer(generator));

    let mut out = vec![TAG_SEQUENCE];
    out.extend(der_length(body.len()));
    out.extend(body);
    out
}

/// Armour `der` in a PEM block wrapped at the usual 64 columns
pub fn wrap_pem(label: &str, der: &[u8]) -> String {
    let body = STANDARD.encode(der);
    let mut out = format!("-----BEGIN {}-----\n", label);
    for line in body.as_bytes().chunks(PEM_LINE_WIDTH) {
        out.push_str(&String::from_utf8_lossy(line));
        out.push('\n');
    }
    out.push_str(&format!("-----END {}-----\n", label));
    out
}
