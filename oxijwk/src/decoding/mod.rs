//! Compact-serialization splitting and base64url decoding
pub mod b64;
mod split;

pub use split::SplitJwt;
