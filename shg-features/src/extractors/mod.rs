//! The four sub-extractors, one module per feature group.
//!
//! Each is a pure function over the validated observation and the shared
//! extractor policy. The groups read overlapping input fields but write
//! disjoint feature sets, so extraction order never matters.

pub mod behavior;
pub mod financial;
pub mod growth;
pub mod stability;
