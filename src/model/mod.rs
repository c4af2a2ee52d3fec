//! Canonical data model for SBOM generation.
//!
//! Every ecosystem parser produces [`Dependency`] records; the generator
//! consumes them through [`GenerationRequest`] and returns a
//! [`GeneratedSbom`]. The document builders read this model but never
//! mutate it.

mod dependency;
mod request;

pub use dependency::{Dependency, Ecosystem};
pub use request::{GeneratedSbom, GenerationRequest, SbomFormat, SbomStats};
