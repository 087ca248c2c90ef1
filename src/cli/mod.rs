//! CLI module for the similarity relay

pub mod serve;

use clap::{Args, Parser, Subcommand};

/// Similarity relay - scores a guess against an answer through an embedding provider
#[derive(Parser)]
#[command(name = "similarity-relay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP relay (default)
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Port to listen on, overriding configuration and PORT
    #[arg(long)]
    pub port: Option<u16>,
}
