//! Data Transfer Objects for the remote API
//!
//! Request bodies sent to the remote image-generation service. These are
//! lightweight wire representations, kept separate from the domain types
//! the service returns.

pub mod prediction;
