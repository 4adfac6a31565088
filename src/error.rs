//! Error types for the capability probe.
//!
//! Vector operations have no runtime error path: unsupported lane/operation
//! pairs do not compile, and misuse of the unchecked APIs is a caller
//! contract violation.

use thiserror::Error;

use crate::probe::Feature;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("unknown CPU feature `{0}` (expected one of sse4.1, sse4.2, avx, avx2, fma)")]
    UnknownFeature(String),
    #[error("CPU feature `{0}` is not supported by this processor")]
    Missing(Feature),
}
