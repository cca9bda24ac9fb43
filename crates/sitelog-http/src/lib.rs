//! sitelog-http: plain-HTTP page fetching behind a mock-injectable seam.

pub mod address;
pub mod error;
pub mod fetch;

pub use address::split_address;
pub use error::FetchError;
pub use fetch::{HttpFetcher, PageFetcher};
