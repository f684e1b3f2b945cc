pub mod application;
pub mod job;
pub mod profile;

#[cfg(test)]
pub(crate) mod test_support;

use thiserror::Error;

/// A stored enumeration column held a value this build does not know.
#[derive(Debug, Error)]
#[error("unknown {kind} value '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
