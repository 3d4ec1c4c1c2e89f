//! Key selection and signature verification
//!
//! [`Verifier`] drives the whole flow: it rejects empty key sets, narrows the
//! set to candidates with [`select_candidates`], then tries each candidate
//! with [`verify_signature`] until one succeeds.

pub use matcher::select_candidates;
pub use pipeline::{
    Verifier,
    VerifierBuilder,
};
pub use signature::verify_signature;

mod matcher;
mod pipeline;
mod signature;
