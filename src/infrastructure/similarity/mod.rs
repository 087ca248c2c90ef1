//! Similarity provider implementations

mod direct;
mod embedding_cosine;
mod factory;

pub use direct::{DirectSimilarityProvider, DEFAULT_HUGGINGFACE_BASE_URL, DEFAULT_SIMILARITY_MODEL};
pub use embedding_cosine::EmbeddingCosineProvider;
pub use factory::SimilarityProviderFactory;
