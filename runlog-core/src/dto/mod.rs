//! Data Transfer Objects
//!
//! Query parameter objects sent alongside log requests. These never appear in
//! response bodies; they only shape the request URL.

pub mod log;
