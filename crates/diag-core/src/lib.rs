#![deny(missing_docs)]
#![doc = "Core error, width and bit-string types shared by the binary diagnostic crates."]

pub mod errors;
pub mod provenance;
mod bitstring;
mod width;

pub use bitstring::BitString;
pub use errors::{DiagError, ErrorInfo, Result};
pub use provenance::SchemaVersion;
pub use width::BitWidth;
