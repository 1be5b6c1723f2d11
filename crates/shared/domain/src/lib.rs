//! # Domain Models
//!
//! This crate contains the shared grievance vocabulary with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: data and simple helpers only, no I/O.

pub mod action;
pub mod config;
pub mod constants;
pub mod priority;
