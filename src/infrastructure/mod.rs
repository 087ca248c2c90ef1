//! Infrastructure layer - External service implementations

pub mod embedding;
pub mod http_client;
pub mod logging;
pub mod similarity;

pub use http_client::{HttpClient, HttpClientTrait};
pub use similarity::SimilarityProviderFactory;
