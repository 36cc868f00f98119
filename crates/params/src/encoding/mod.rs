//! Constants for textual and binary encodings

pub mod der;
pub mod pem;
