//! Epoch domain module.
//!
//! Everything that talks to the remote epoch server lives here: the shared
//! HTTP client with its fixed routes, and the outcome type the tool
//! handlers render into text.

pub mod client;
pub mod outcome;

pub use client::EpochClient;
pub use outcome::HttpOutcome;
