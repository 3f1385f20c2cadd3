//! Core domain types
//!
//! This module contains the domain structures returned by the remote
//! image-generation API. These types are shared between the client crate
//! (which fetches them) and the CLI (which renders them).

pub mod file;
pub mod prediction;
