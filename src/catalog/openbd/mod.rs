//! openBD API integration
//!
//! Lowest-priority catalog: Japanese publisher data, no key needed.
//!
//! API docs: https://openbd.jp/

pub mod dto;
mod adapter;
mod client;

pub use client::OpenBdClient;
