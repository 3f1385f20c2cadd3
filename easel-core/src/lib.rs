//! Easel Core
//!
//! Core types for the Easel image-generation tooling.
//!
//! This crate contains:
//! - Domain types: entities returned by the remote API (Prediction, UploadedFile)
//! - DTOs: request bodies sent to the remote API

pub mod domain;
pub mod dto;
