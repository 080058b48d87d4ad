/// Remote API layer: the `ContentViewApi` seam and its Katello HTTP client.
pub mod client;
pub mod errors;
#[cfg(test)]
pub mod fake;
pub mod http;
pub mod model;

pub use client::ContentViewApi;
pub use errors::ApiError;
pub use http::{HttpApi, HttpConfig};
pub use model::{Definition, View, ViewId};
