pub mod client;
pub mod error;


pub use client::{SearchClient, parse_endpoint};
pub use error::SearchError;
