//! Core domain types
//!
//! This module contains the domain structures shared by the client and CLI.
//! These types identify programs and their runs, and model what the log
//! endpoints return.

pub mod log;
pub mod program;
pub mod run;
