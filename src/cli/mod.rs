//! CLI module for the knowledge base Lambda handlers
//!
//! One binary serves either handler; Lambda passes the configured handler
//! name through `_HANDLER`.

pub mod lambda;

use clap::{Parser, ValueEnum};

/// Knowledge base Lambda handlers
#[derive(Parser)]
#[command(name = "kb-lambda-handlers")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Handler this process serves
    #[arg(long, env = "_HANDLER", value_enum)]
    pub handler: HandlerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HandlerKind {
    /// Start an ingestion job for the configured data source
    IngestionTrigger,

    /// Answer a prompt with retrieve-and-generate
    RetrievalChat,
}

impl HandlerKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::IngestionTrigger => "ingestion-trigger",
            Self::RetrievalChat => "retrieval-chat",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_handler_flag() {
        let cli =
            Cli::try_parse_from(["kb-lambda-handlers", "--handler", "retrieval-chat"]).unwrap();

        assert_eq!(cli.handler, HandlerKind::RetrievalChat);
    }

    #[test]
    fn test_rejects_unknown_handler() {
        let result = Cli::try_parse_from([
            "kb-lambda-handlers",
            "--handler",
            "lambda_function.lambda_handler",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_handler_names_match_cli_values() {
        for kind in [HandlerKind::IngestionTrigger, HandlerKind::RetrievalChat] {
            let value = kind.to_possible_value().unwrap();
            assert_eq!(value.get_name(), kind.name());
        }
    }
}
