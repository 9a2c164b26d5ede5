//! API Client
//!
//! HTTP communication with the clinic records REST API.

pub mod client;

pub use client::*;
