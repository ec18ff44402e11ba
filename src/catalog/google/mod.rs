//! Google Books API integration
//!
//! Highest-priority catalog: broad international coverage, no key needed
//! for volume searches.
//!
//! API docs: https://developers.google.com/books/docs/v1/using

pub mod dto;
mod adapter;
mod client;

pub use client::GoogleBooksClient;
