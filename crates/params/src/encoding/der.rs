//! DER tag bytes and length-encoding limits

/// Universal, primitive INTEGER
pub const TAG_INTEGER: u8 = 0x02;

/// Universal, constructed SEQUENCE
pub const TAG_SEQUENCE: u8 = 0x30;

/// High bit of the first length octet marks the long form
pub const LENGTH_LONG_FORM: u8 = 0x80;

/// Largest number of length octets accepted in long form
pub const MAX_LENGTH_OCTETS: usize = 4;
