//! PEM envelope markers and labels

/// Dashes framing every PEM marker
pub const PEM_DASHES: &str = "-----";

/// Opening marker prefix, followed by the label and dashes
pub const PEM_BEGIN_PREFIX: &str = "-----BEGIN ";

/// Closing marker prefix, followed by the label and dashes
pub const PEM_END_PREFIX: &str = "-----END ";

/// Label of a PKCS#3 Diffie-Hellman parameter block
pub const PEM_DH_PARAMETERS: &str = "DH PARAMETERS";

/// Line width used when producing PEM text
pub const PEM_LINE_WIDTH: usize = 64;
