//! Domain models

pub mod cafe;

pub use cafe::{Cafe, CafeCreate, CafeEnvelope, CafeList};
