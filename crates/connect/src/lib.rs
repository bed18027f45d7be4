//! SwipeFund Connect - REST client for the funding platform API.
//!
//! This crate provides the HTTP implementations of the swipe engine's
//! collaborator traits: the opportunity listing, investor preferences and
//! the authenticated invest endpoint.

mod client;

pub use client::{PlatformApiClient, AUTH_PROOF_HEADER, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
