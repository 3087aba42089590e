//! Converts dictated email addresses ("raul dot smith at gmail dot com") into
//! normalized email strings with a discrete confidence score.
//!
//! The pipeline is canonicalize -> tokenize -> rewrite -> cleanup -> validate.

pub mod cleanup;
mod error;
pub mod inference;
mod normalizer;
pub mod rewriter;
mod symbol;
pub mod text;
pub mod validator;
mod vocabulary;

pub use error::*;
pub use normalizer::*;
pub use symbol::*;
pub use validator::{Confidence, Validation};
pub use vocabulary::*;
