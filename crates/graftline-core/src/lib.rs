//! graftline-core
//!
//! Pure domain types for the Graftline provider portal: the canonical IVR
//! (insurance verification request) record, contact leads, and dashboard
//! statistics. No I/O — this is the shared vocabulary of the Graftline system.

pub mod models;
