//! Similarity relay
//!
//! Accepts a guess and an answer, asks an embedding provider how close they
//! are, and returns the score. Two provider strategies are supported:
//! - sentence similarity computed by the provider
//! - two embeddings fetched from the provider and compared with cosine similarity

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
