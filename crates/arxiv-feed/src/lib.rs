//! Client for the arXiv Atom query API.

pub mod client;
pub mod types;

pub use client::ArxivClient;
pub use types::FeedEntry;
