//! Runlog Core
//!
//! Core types for the runlog program-log client.
//!
//! This crate contains:
//! - Domain types: program references, log entries, run records
//! - DTOs: query parameter objects sent alongside log requests

pub mod domain;
pub mod dto;
