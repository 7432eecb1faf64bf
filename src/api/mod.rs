//! HTTP client for the Kuwo web API.

pub mod client;

pub use client::{chart, KuwoApi};
