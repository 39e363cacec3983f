//! hexdrill-core — Question generation, grading, and the drill loop.
//!
//! This crate holds everything the drill does between reading a line and
//! writing a verdict. The binary only parses flags and wires up the standard
//! streams.

pub mod error;
pub mod grade;
pub mod kind;
pub mod question;
pub mod session;
pub mod transcript;
