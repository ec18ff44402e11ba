//! Rakuten Books search API integration
//!
//! Strong coverage of Japanese titles. Every request needs an application
//! id; without one this catalog reports itself unavailable.
//!
//! API docs: https://webservice.rakuten.co.jp/documentation/books-book-search

pub mod dto;
mod adapter;
mod client;

pub use client::RakutenClient;
